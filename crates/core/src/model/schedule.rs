use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScheduleError {
    #[error("unknown hour slot: {0}")]
    UnknownHour(String),

    #[error("unknown day: {0}")]
    UnknownDay(String),
}

//
// ─── DAY ───────────────────────────────────────────────────────────────────────
//

/// Day column of the weekly plan, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Day {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Day::ALL
            .into_iter()
            .find(|day| day.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ScheduleError::UnknownDay(s.to_owned()))
    }
}

//
// ─── HOUR SLOT ─────────────────────────────────────────────────────────────────
//

/// One-hour row of the weekly plan, `08:00` through `24:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HourSlot(u8);

impl HourSlot {
    pub const FIRST: u8 = 8;
    pub const LAST: u8 = 24;

    /// # Errors
    ///
    /// Returns `ScheduleError::UnknownHour` outside `FIRST..=LAST`.
    pub fn new(hour: u8) -> Result<Self, ScheduleError> {
        if (Self::FIRST..=Self::LAST).contains(&hour) {
            Ok(Self(hour))
        } else {
            Err(ScheduleError::UnknownHour(hour.to_string()))
        }
    }

    pub fn all() -> impl Iterator<Item = HourSlot> {
        (Self::FIRST..=Self::LAST).map(HourSlot)
    }

    #[must_use]
    pub fn hour(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn label(self) -> String {
        format!("{:02}:00", self.0)
    }
}

impl fmt::Display for HourSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

impl FromStr for HourSlot {
    type Err = ScheduleError;

    /// Accepts `"09:00"` as well as a bare `"9"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ScheduleError::UnknownHour(s.to_owned());
        let trimmed = s.trim();
        let hour_part = match trimmed.split_once(':') {
            Some((hour, "00")) => hour,
            Some(_) => return Err(unknown()),
            None => trimmed,
        };
        let hour: u8 = hour_part.parse().map_err(|_| unknown())?;
        HourSlot::new(hour).map_err(|_| unknown())
    }
}

impl TryFrom<String> for HourSlot {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HourSlot> for String {
    fn from(slot: HourSlot) -> Self {
        slot.label()
    }
}

//
// ─── CELL ──────────────────────────────────────────────────────────────────────
//

/// Content of one (hour, day) slot. A blank subject means the slot is free,
/// though the other fields are still kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleCell {
    pub subject: String,
    pub topic: String,
    pub exercise_type: String,
    pub exercise_count: String,
    pub video: String,
    pub resource: String,
}

impl ScheduleCell {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subject.trim().is_empty()
    }

    /// True when any field carries text.
    #[must_use]
    pub fn has_content(&self) -> bool {
        [
            &self.subject,
            &self.topic,
            &self.exercise_type,
            &self.exercise_count,
            &self.video,
            &self.resource,
        ]
        .into_iter()
        .any(|field| !field.trim().is_empty())
    }
}

//
// ─── WEEKLY SCHEDULE ───────────────────────────────────────────────────────────
//

/// The weekly plan grid. Cells with no text at all are not stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklySchedule {
    cells: BTreeMap<(HourSlot, Day), ScheduleCell>,
}

impl WeeklySchedule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn total_slots() -> usize {
        usize::from(HourSlot::LAST - HourSlot::FIRST + 1) * Day::ALL.len()
    }

    /// Replace the slot's content wholesale. Nothing carries over from the
    /// previous cell; a cell with every field blank clears the slot.
    pub fn set_cell(&mut self, hour: HourSlot, day: Day, cell: ScheduleCell) {
        if !cell.has_content() {
            self.cells.remove(&(hour, day));
        } else {
            self.cells.insert((hour, day), cell);
        }
    }

    #[must_use]
    pub fn cell(&self, hour: HourSlot, day: Day) -> Option<&ScheduleCell> {
        self.cells.get(&(hour, day))
    }

    /// The cell only if it names a subject.
    #[must_use]
    pub fn occupied(&self, hour: HourSlot, day: Day) -> Option<&ScheduleCell> {
        self.cell(hour, day).filter(|cell| !cell.is_empty())
    }

    /// Slots that name a subject.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.filled().count()
    }

    /// Cells naming a subject, in row-major order (by hour, then day).
    pub fn filled(&self) -> impl Iterator<Item = (HourSlot, Day, &ScheduleCell)> {
        self.cells
            .iter()
            .filter(|(_, cell)| !cell.is_empty())
            .map(|((hour, day), cell)| (*hour, *day, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(subject: &str, topic: &str) -> ScheduleCell {
        ScheduleCell {
            subject: subject.into(),
            topic: topic.into(),
            ..ScheduleCell::default()
        }
    }

    #[test]
    fn grid_has_seventeen_hours_by_seven_days() {
        assert_eq!(HourSlot::all().count(), 17);
        assert_eq!(WeeklySchedule::total_slots(), 119);
        assert_eq!(HourSlot::all().last().unwrap().label(), "24:00");
    }

    #[test]
    fn hour_slot_parses_labels_and_bare_hours() {
        assert_eq!("08:00".parse::<HourSlot>().unwrap().hour(), 8);
        assert_eq!("13".parse::<HourSlot>().unwrap().label(), "13:00");
        assert!(matches!(
            "07:00".parse::<HourSlot>(),
            Err(ScheduleError::UnknownHour(_))
        ));
        assert!("09:30".parse::<HourSlot>().is_err());
        assert!("noon".parse::<HourSlot>().is_err());
    }

    #[test]
    fn day_parses_case_insensitively() {
        assert_eq!("wednesday".parse::<Day>().unwrap(), Day::Wednesday);
        assert!(matches!(
            "Someday".parse::<Day>(),
            Err(ScheduleError::UnknownDay(_))
        ));
    }

    #[test]
    fn set_cell_fully_replaces_previous_content() {
        let mut schedule = WeeklySchedule::new();
        let hour = HourSlot::new(9).unwrap();
        let mut first = cell("Mathematics", "Functions");
        first.video = "https://video".into();
        first.exercise_count = "40".into();
        schedule.set_cell(hour, Day::Monday, first);

        schedule.set_cell(hour, Day::Monday, cell("Physics", "Motion"));

        let stored = schedule.cell(hour, Day::Monday).unwrap();
        assert_eq!(stored, &cell("Physics", "Motion"));
        assert!(stored.video.is_empty());
        assert!(stored.exercise_count.is_empty());
    }

    #[test]
    fn blank_subject_keeps_the_rest_of_the_cell() {
        let mut schedule = WeeklySchedule::new();
        let hour = HourSlot::new(10).unwrap();
        schedule.set_cell(hour, Day::Friday, cell("Physics", "Force"));
        assert_eq!(schedule.filled_count(), 1);

        let mut reminder = cell("  ", "Force");
        reminder.video = "https://video.example/force".into();
        schedule.set_cell(hour, Day::Friday, reminder.clone());

        assert_eq!(schedule.cell(hour, Day::Friday), Some(&reminder));
        assert!(schedule.occupied(hour, Day::Friday).is_none());
        assert_eq!(schedule.filled_count(), 0);
        assert_eq!(schedule.filled().count(), 0);
    }

    #[test]
    fn all_blank_cell_clears_the_slot() {
        let mut schedule = WeeklySchedule::new();
        let hour = HourSlot::new(10).unwrap();
        schedule.set_cell(hour, Day::Friday, cell("Physics", "Force"));

        schedule.set_cell(hour, Day::Friday, cell(" ", ""));
        assert!(schedule.cell(hour, Day::Friday).is_none());
    }

    #[test]
    fn hour_slot_converts_through_its_label() {
        assert_eq!(String::from(HourSlot::new(8).unwrap()), "08:00");
        assert!(HourSlot::try_from("25:00".to_string()).is_err());
    }
}

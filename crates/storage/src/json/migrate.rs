use chrono::NaiveDate;
use serde_json::{Map, Value, json};
use tracing::{info, warn};

use crate::repository::StorageError;

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Bring a raw document up to `CURRENT_SCHEMA_VERSION` in place.
///
/// Documents without a `schema_version` are treated as version 0. Version 0
/// covers both early files with the current section names and files written by
/// the first release of the tracker, whose sections use Turkish keys.
///
/// # Errors
///
/// Returns `StorageError::UnsupportedVersion` for documents written by a newer
/// release, and `StorageError::Serialization` when the top level is not an
/// object or a version 0 document has none of the known sections.
pub(crate) fn run_migrations(document: &mut Value, today: NaiveDate) -> Result<(), StorageError> {
    let Some(root) = document.as_object_mut() else {
        return Err(StorageError::Serialization(
            "tracker document must be a JSON object".into(),
        ));
    };

    let found = schema_version(root)?;
    if found > CURRENT_SCHEMA_VERSION {
        return Err(StorageError::UnsupportedVersion {
            found,
            supported: CURRENT_SCHEMA_VERSION,
        });
    }

    // Version 1: current section names, structured exam records with stable ids.
    if found < 1 {
        if !root.is_empty() && !root.keys().any(|key| is_known_section(key)) {
            return Err(StorageError::Serialization(
                "document has no tracker sections".into(),
            ));
        }
        upgrade_legacy_sections(root);
        upgrade_exams(root, today);
        info!(from = found, to = 1, "migrated tracker document");
    }

    root.insert("schema_version".into(), json!(CURRENT_SCHEMA_VERSION));
    Ok(())
}

fn schema_version(root: &Map<String, Value>) -> Result<u32, StorageError> {
    match root.get("schema_version") {
        None | Some(Value::Null) => Ok(0),
        Some(value) => value
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| {
                StorageError::Serialization(format!("invalid schema_version: {value}"))
            }),
    }
}

const SECTIONS: [&str; 8] = [
    "schema_version",
    "program_info",
    "schedule",
    "subjects",
    "topic_progress",
    "exams",
    "next_exam_id",
    "resources",
];

const LEGACY_SECTIONS: [(&str, &str); 5] = [
    ("weekly_plan_table", "schedule"),
    ("DERSLER", "subjects"),
    ("konu_takip", "topic_progress"),
    ("deneme_sinavlari", "exams"),
    ("kaynaklar", "resources"),
];

const LEGACY_DAYS: [(&str, &str); 7] = [
    ("Pazartesi", "Monday"),
    ("Salı", "Tuesday"),
    ("Çarşamba", "Wednesday"),
    ("Perşembe", "Thursday"),
    ("Cuma", "Friday"),
    ("Cumartesi", "Saturday"),
    ("Pazar", "Sunday"),
];

const LEGACY_RESOURCE_KINDS: [(&str, &str); 6] = [
    ("Kitap", "Book"),
    ("Video", "Video"),
    ("PDF", "PDF"),
    ("Web Sitesi", "Website"),
    ("Uygulama", "App"),
    ("Diğer", "Other"),
];

const CELL_FIELDS: [(&str, &str); 6] = [
    ("ders", "subject"),
    ("konu", "topic"),
    ("soru_tipi", "exercise_type"),
    ("soru_adedi", "exercise_count"),
    ("youtube", "video"),
    ("kaynak", "resource"),
];

fn is_known_section(key: &str) -> bool {
    SECTIONS.contains(&key) || LEGACY_SECTIONS.iter().any(|(legacy, _)| *legacy == key)
}

/// Move each field to its new name unless the new name is already taken.
fn rename_fields(object: &mut Map<String, Value>, pairs: &[(&str, &str)]) {
    for (old, new) in pairs {
        if object.contains_key(*new) {
            continue;
        }
        if let Some(value) = object.remove(*old) {
            object.insert((*new).to_owned(), value);
        }
    }
}

/// Rewrite first-release sections into the current layout. Sections already
/// present under their current name win over their legacy counterpart.
fn upgrade_legacy_sections(root: &mut Map<String, Value>) {
    if let Some(Value::Object(info)) = root.get_mut("program_info") {
        rename_fields(info, &[("adsoyad", "student_name"), ("tarih", "program_date")]);
    }

    for (legacy, current) in LEGACY_SECTIONS {
        let Some(section) = root.remove(legacy) else {
            continue;
        };
        if root.contains_key(current) {
            warn!(legacy, current, "legacy section shadowed by a current one, ignoring it");
            continue;
        }
        let upgraded = match current {
            "schedule" => upgrade_plan_table(section),
            "topic_progress" => upgrade_topic_tracking(section),
            "exams" => upgrade_exam_entries(section),
            "resources" => upgrade_resource_library(section),
            _ => section,
        };
        root.insert(current.to_owned(), upgraded);
    }
}

/// `hour -> Turkish day -> cell` with Turkish field names. Empty cells are
/// dropped and counts stored as numbers become text.
fn upgrade_plan_table(plan: Value) -> Value {
    let Value::Object(plan) = plan else {
        return Value::Object(Map::new());
    };
    let mut schedule = Map::new();
    for (hour, days) in plan {
        let Value::Object(days) = days else { continue };
        let mut row = Map::new();
        for (day, cell) in days {
            let Value::Object(mut cell) = cell else { continue };
            rename_fields(&mut cell, &CELL_FIELDS);
            cell.retain(|_, value| !value.is_null());
            for value in cell.values_mut() {
                if let Value::Number(n) = value {
                    *value = Value::String(n.to_string());
                }
            }
            let blank = cell
                .values()
                .all(|value| value.as_str().is_some_and(|s| s.trim().is_empty()));
            if blank {
                continue;
            }
            row.insert(current_day(&day).to_owned(), Value::Object(cell));
        }
        if !row.is_empty() {
            schedule.insert(hour, Value::Object(row));
        }
    }
    Value::Object(schedule)
}

fn current_day(day: &str) -> &str {
    LEGACY_DAYS
        .iter()
        .find(|(legacy, _)| *legacy == day.trim())
        .map_or(day, |(_, current)| *current)
}

/// `subject -> topic -> [{ad, tik}]`.
fn upgrade_topic_tracking(tracking: Value) -> Value {
    let Value::Object(mut tracking) = tracking else {
        return Value::Object(Map::new());
    };
    for topics in tracking.values_mut() {
        let Value::Object(topics) = topics else { continue };
        for slots in topics.values_mut() {
            let Value::Array(slots) = slots else { continue };
            for slot in slots.iter_mut() {
                if let Value::Object(slot) = slot {
                    rename_fields(slot, &[("ad", "name"), ("tik", "completed")]);
                }
            }
        }
    }
    Value::Object(tracking)
}

/// Exam entries are either plain names or `{tur, ad, tarih, net, puan}`.
fn upgrade_exam_entries(entries: Value) -> Value {
    let Value::Array(mut entries) = entries else {
        return Value::Array(Vec::new());
    };
    for entry in &mut entries {
        if let Value::Object(record) = entry {
            rename_fields(
                record,
                &[("tur", "kind"), ("ad", "name"), ("tarih", "date"), ("puan", "score")],
            );
        }
    }
    Value::Array(entries)
}

/// `subject -> name -> {tur, aciklama, link}`. Kinds outside the known list
/// become `Other` and blank links are dropped.
fn upgrade_resource_library(library: Value) -> Value {
    let Value::Object(mut library) = library else {
        return Value::Object(Map::new());
    };
    for entries in library.values_mut() {
        let Value::Object(entries) = entries else { continue };
        for entry in entries.values_mut() {
            let Value::Object(entry) = entry else { continue };
            rename_fields(entry, &[("tur", "kind"), ("aciklama", "description")]);
            let kind = entry
                .get("kind")
                .and_then(Value::as_str)
                .map_or("Other", current_resource_kind);
            entry.insert("kind".into(), json!(kind));
            let blank_link = entry
                .get("link")
                .is_some_and(|link| link.as_str().is_none_or(|s| s.trim().is_empty()));
            if blank_link {
                entry.remove("link");
            }
        }
    }
    Value::Object(library)
}

fn current_resource_kind(kind: &str) -> &'static str {
    let wanted = kind.trim();
    LEGACY_RESOURCE_KINDS
        .iter()
        .find(|(legacy, current)| {
            legacy.eq_ignore_ascii_case(wanted) || current.eq_ignore_ascii_case(wanted)
        })
        .map_or("Other", |(_, current)| *current)
}

/// Plain-string exams become TYT records dated `today` with zero scores.
/// Kinds other than AYT fall back to TYT.
/// Records without an id are numbered after the highest id already present,
/// and dates that do not parse are replaced by `today`.
fn upgrade_exams(root: &mut Map<String, Value>, today: NaiveDate) {
    let today_str = today.format(DATE_FORMAT).to_string();
    let entries = match root.remove("exams") {
        Some(Value::Array(entries)) => entries,
        _ => Vec::new(),
    };

    let mut next_id = entries
        .iter()
        .filter_map(|e| e.get("id").and_then(Value::as_u64))
        .max()
        .unwrap_or(0)
        + 1;

    let mut upgraded = Vec::with_capacity(entries.len());
    for entry in entries {
        let mut record = match entry {
            Value::String(name) => {
                let mut record = Map::new();
                record.insert("kind".into(), json!("TYT"));
                record.insert("name".into(), json!(name));
                record
            }
            Value::Object(record) => record,
            _ => continue,
        };

        if record.get("id").and_then(Value::as_u64).is_none() {
            record.insert("id".into(), json!(next_id));
            next_id += 1;
        }

        let date_ok = record
            .get("date")
            .and_then(Value::as_str)
            .is_some_and(|d| NaiveDate::parse_from_str(d, DATE_FORMAT).is_ok());
        if !date_ok {
            record.insert("date".into(), json!(today_str));
        }

        for field in ["net", "score"] {
            let number = record.get(field).and_then(as_number).unwrap_or(0.0);
            record.insert(field.into(), json!(number));
        }
        let kind = match record.get("kind").and_then(Value::as_str) {
            Some(kind) if kind.trim().eq_ignore_ascii_case("AYT") => "AYT",
            _ => "TYT",
        };
        record.insert("kind".into(), json!(kind));
        if !record.get("name").is_some_and(Value::is_string) {
            record.insert("name".into(), json!(""));
        }
        upgraded.push(Value::Object(record));
    }

    root.insert("exams".into(), Value::Array(upgraded));
    let stored = root.get("next_exam_id").and_then(Value::as_u64).unwrap_or(0);
    root.insert("next_exam_id".into(), json!(stored.max(next_id)));
}

/// Older files stored numbers as text.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

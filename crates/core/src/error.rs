use thiserror::Error;

use crate::model::{CurriculumError, ExamError, ResourceError, ScheduleError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    #[error(transparent)]
    Curriculum(#[from] CurriculumError),
    #[error(transparent)]
    Exam(#[from] ExamError),
    #[error(transparent)]
    Resource(#[from] ResourceError),
}

impl Error {
    /// Whether the input was well-formed but unusable (blank, duplicate,
    /// unknown or out of range), as opposed to a request that could not have
    /// come from the forms at all.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::Schedule(_) => false,
            Error::Curriculum(_) => true,
            Error::Exam(e) => matches!(e, ExamError::MissingField(_) | ExamError::NotFound(_)),
            Error::Resource(e) => !matches!(e, ResourceError::UnknownKind(_)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExamId;

    #[test]
    fn slips_are_recoverable_and_malformed_input_is_not() {
        assert!(Error::from(CurriculumError::DuplicateSubject("Physics".into())).is_recoverable());
        assert!(Error::from(ExamError::MissingField("name")).is_recoverable());
        assert!(Error::from(ExamError::NotFound(ExamId::new(3))).is_recoverable());
        assert!(Error::from(ResourceError::EmptyName).is_recoverable());

        assert!(!Error::from(ScheduleError::UnknownDay("Funday".into())).is_recoverable());
        assert!(!Error::from(ExamError::InvalidDate("yesterday".into())).is_recoverable());
        assert!(!Error::from(ResourceError::UnknownKind("Scroll".into())).is_recoverable());
    }
}

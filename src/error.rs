//! Error types for timetable generation.
//!
//! Every failure aborts the run; no partial timetable is ever returned.
//! Retrying without changing the input cannot succeed.

use thiserror::Error;

use crate::validation::{ValidationError, ValidationErrorKind};

/// Result type for timetable operations.
pub type Result<T> = std::result::Result<T, TimetableError>;

/// Broad failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing table or field, or a bad section count.
    InvalidInput,
    /// A cycling list is empty while sections must be placed.
    EmptyResourceList,
    /// A period string is not two `HH:MM` tokens with end after start.
    MalformedPeriod,
    /// An assigned room is absent from the Rooms table.
    LookupConsistency,
}

/// Errors raised while loading tables or generating a timetable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimetableError {
    /// A table, field or value cannot be used.
    #[error("invalid input in '{table}': {message}")]
    InvalidInput {
        /// Table (sheet) name.
        table: String,
        /// What is wrong.
        message: String,
    },

    /// A resource list to cycle over is empty.
    #[error("table '{table}' is empty but sections must be scheduled")]
    EmptyResourceList {
        /// Table (sheet) name.
        table: String,
    },

    /// A time period failed to parse.
    #[error("malformed time period '{period}': {reason}")]
    MalformedPeriod {
        /// Offending text.
        period: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Internal fault: an assigned room has no Rooms row.
    #[error("room '{room}' is not in the Rooms table")]
    LookupConsistency {
        /// Room number that failed to resolve.
        room: String,
    },

    /// Upfront validation found one or more problems.
    #[error("input validation failed: {}", summarize(.0))]
    Validation(Vec<ValidationError>),
}

impl TimetableError {
    pub(crate) fn invalid_input(table: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            table: table.into(),
            message: message.into(),
        }
    }

    pub(crate) fn malformed_period(period: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedPeriod {
            period: period.into(),
            reason: reason.into(),
        }
    }

    /// Category of this error.
    ///
    /// Aggregated validation errors report the category of their first finding.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::EmptyResourceList { .. } => ErrorKind::EmptyResourceList,
            Self::MalformedPeriod { .. } => ErrorKind::MalformedPeriod,
            Self::LookupConsistency { .. } => ErrorKind::LookupConsistency,
            Self::Validation(errors) => errors
                .first()
                .map(|e| ErrorKind::from(&e.kind))
                .unwrap_or(ErrorKind::InvalidInput),
        }
    }

    /// Individual validation findings, if this is an aggregated error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

impl From<&ValidationErrorKind> for ErrorKind {
    fn from(kind: &ValidationErrorKind) -> Self {
        match kind {
            ValidationErrorKind::EmptyResourceList => ErrorKind::EmptyResourceList,
            ValidationErrorKind::MalformedPeriod => ErrorKind::MalformedPeriod,
            ValidationErrorKind::InvalidSectionCount | ValidationErrorKind::BlankName => {
                ErrorKind::InvalidInput
            }
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = TimetableError::malformed_period("10:00-09:00", "end is not after start");
        assert_eq!(
            e.to_string(),
            "malformed time period '10:00-09:00': end is not after start"
        );

        let e = TimetableError::EmptyResourceList {
            table: "Rooms".into(),
        };
        assert_eq!(
            e.to_string(),
            "table 'Rooms' is empty but sections must be scheduled"
        );
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            TimetableError::invalid_input("Courses", "x").kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            TimetableError::LookupConsistency { room: "R1".into() }.kind(),
            ErrorKind::LookupConsistency
        );
    }

    #[test]
    fn test_validation_kind_uses_first_finding() {
        let e = TimetableError::Validation(vec![
            ValidationError::new(ValidationErrorKind::MalformedPeriod, "bad period"),
            ValidationError::new(ValidationErrorKind::EmptyResourceList, "no rooms"),
        ]);
        assert_eq!(e.kind(), ErrorKind::MalformedPeriod);
        assert_eq!(e.validation_errors().len(), 2);
        assert_eq!(
            e.to_string(),
            "input validation failed: bad period; no rooms"
        );
    }
}

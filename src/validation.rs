//! Input validation for timetabling problems.
//!
//! Checks the typed tables before any section is placed, so that a bad
//! input fails as one coherent error instead of partway through a run.
//! Detects:
//! - Courses with a zero section count
//! - Blank lecturer names
//! - Empty lecturer, room, day or period lists (only when sections exist)
//! - Time periods that do not parse as `HH:MM-HH:MM` with end after start
//!
//! Duplicate room numbers are not an error; the first row wins on lookup.

use crate::models::InputTables;
use crate::scheduler::parse_period;
use crate::workbook::sheet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A course declares zero sections.
    InvalidSectionCount,
    /// A lecturer name is empty or whitespace.
    BlankName,
    /// A list that sections cycle over is empty.
    EmptyResourceList,
    /// A time period string cannot be parsed.
    MalformedPeriod,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input tables for a timetabling run.
///
/// Checks:
/// 1. Every course offers at least one section
/// 2. Every lecturer has a non-blank name
/// 3. Lecturers, Rooms, Days and Time Periods are non-empty when at least
///    one section must be scheduled
/// 4. Every time period parses, whether or not a section lands on it
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(tables: &InputTables) -> ValidationResult {
    let mut errors = Vec::new();

    for (row, course) in tables.courses.iter().enumerate() {
        if course.sections == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSectionCount,
                format!(
                    "Course '{}' (row {row}) must offer at least one section",
                    course.code
                ),
            ));
        }
    }

    for (row, lecturer) in tables.lecturers.iter().enumerate() {
        if lecturer.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankName,
                format!("Lecturer at row {row} has a blank name"),
            ));
        }
    }

    let sections = tables.total_sections();
    if sections > 0 {
        let lists = [
            (sheet::LECTURERS, tables.lecturers.is_empty()),
            (sheet::ROOMS, tables.rooms.is_empty()),
            (sheet::DAYS, tables.days.is_empty()),
            (sheet::TIME_PERIODS, tables.time_periods.is_empty()),
        ];
        for (name, empty) in lists {
            if empty {
                errors.push(ValidationError::new(
                    ValidationErrorKind::EmptyResourceList,
                    format!("Table '{name}' is empty but {sections} section(s) must be scheduled"),
                ));
            }
        }
    }

    for period in &tables.time_periods {
        if let Err(e) = parse_period(period.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedPeriod,
                e.to_string(),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InputTables, Lecturer, Room};

    fn sample_tables() -> InputTables {
        InputTables::new()
            .with_lecturer("A")
            .with_lecturer("B")
            .with_course("X", 2)
            .with_room(Room::new("R1").with_building("B1").with_location("L1"))
            .with_day("Mon")
            .with_time_period("09:00-10:00")
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_tables()).is_ok());
    }

    #[test]
    fn test_zero_sections() {
        let tables = sample_tables().with_course("Y", 0);
        let errors = validate_input(&tables).unwrap_err();
        assert!(errors.iter().any(|e| {
            e.kind == ValidationErrorKind::InvalidSectionCount && e.message.contains("'Y'")
        }));
    }

    #[test]
    fn test_blank_lecturer() {
        let mut tables = sample_tables();
        tables.lecturers.push(Lecturer::new("   "));
        let errors = validate_input(&tables).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::BlankName);
    }

    #[test]
    fn test_empty_rooms() {
        let mut tables = sample_tables();
        tables.rooms.clear();
        let errors = validate_input(&tables).unwrap_err();
        assert!(errors.iter().any(|e| {
            e.kind == ValidationErrorKind::EmptyResourceList && e.message.contains("Rooms")
        }));
    }

    #[test]
    fn test_empty_lists_allowed_without_sections() {
        let tables = InputTables::new();
        assert!(validate_input(&tables).is_ok());
    }

    #[test]
    fn test_reversed_period() {
        let tables = sample_tables().with_time_period("10:00-09:00");
        let errors = validate_input(&tables).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::MalformedPeriod);
        assert!(errors[0].message.contains("10:00-09:00"));
    }

    #[test]
    fn test_multiple_errors() {
        // Empty lecturers + empty days + garbage period
        let tables = InputTables::new()
            .with_course("X", 1)
            .with_room(Room::new("R1"))
            .with_time_period("morning");

        let errors = validate_input(&tables).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::EmptyResourceList)
                .count(),
            2
        );
    }
}

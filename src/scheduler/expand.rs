//! Section expansion.
//!
//! Turns course rows into the ordered list of sections to place. The
//! position of a section in this list (its global index) drives every later
//! step: resource cycling and the day offset of its timestamps.
//!
//! # Order
//! Course-major, section-minor: all sections of the first course row
//! (ordinals 1..=N ascending), then all sections of the second, and so on.

use crate::error::{Result, TimetableError};
use crate::models::{Course, CourseSection};
use crate::workbook::sheet;

/// Expands courses into sections in global order.
///
/// A course with zero sections fails the whole expansion; a partial
/// timetable that silently drops a course would be misleading.
///
/// # Complexity
/// O(S) where S = total number of sections.
pub fn expand_sections(courses: &[Course]) -> Result<Vec<CourseSection>> {
    let mut total: usize = 0;
    for (row, course) in courses.iter().enumerate() {
        if course.sections == 0 {
            return Err(TimetableError::invalid_input(
                sheet::COURSES,
                format!(
                    "row {row}: course '{}' must offer at least one section",
                    course.code
                ),
            ));
        }
        total += course.sections as usize;
    }

    let mut sections = Vec::with_capacity(total);
    for course in courses {
        for ordinal in 1..=course.sections {
            sections.push(CourseSection::new(sections.len(), course, ordinal));
        }
    }

    Ok(sections)
}

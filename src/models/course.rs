//! Course and course-section models.
//!
//! A course row declares how many sections it offers. Each section becomes
//! one schedulable unit identified as `"<code>-<ordinal>"`, ordinals running
//! from 1 to the section count.

use serde::{Deserialize, Serialize};

/// A course definition from the Courses table.
///
/// Codes are not required to be unique: every row contributes its own
/// sections, even when two rows share a code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course code (`Course Code` column).
    #[serde(rename = "Course Code")]
    pub code: String,
    /// Number of sections offered (`Number of Sections` column). Must be positive.
    #[serde(rename = "Number of Sections")]
    pub sections: u32,
}

/// One section of a course, positioned in the global expansion order.
///
/// Derived on every run and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseSection {
    /// 0-based position across the full expansion (course-major, section-minor).
    pub index: usize,
    /// Section identifier, `"<code>-<ordinal>"`.
    pub id: String,
    /// Parent course code.
    pub course_code: String,
    /// 1-based section number within the course.
    pub ordinal: u32,
}

impl Course {
    /// Creates a course offering `sections` sections.
    pub fn new(code: impl Into<String>, sections: u32) -> Self {
        Self {
            code: code.into(),
            sections,
        }
    }

    /// Section identifier for the given 1-based ordinal.
    pub fn section_id(&self, ordinal: u32) -> String {
        format!("{}-{}", self.code, ordinal)
    }
}

impl CourseSection {
    /// Creates the section `ordinal` of `course` at global position `index`.
    pub fn new(index: usize, course: &Course, ordinal: u32) -> Self {
        Self {
            index,
            id: course.section_id(ordinal),
            course_code: course.code.clone(),
            ordinal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_id_format() {
        let c = Course::new("CS101", 3);
        assert_eq!(c.section_id(1), "CS101-1");
        assert_eq!(c.section_id(3), "CS101-3");
    }

    #[test]
    fn test_course_section_new() {
        let c = Course::new("MATH2", 2);
        let s = CourseSection::new(7, &c, 2);
        assert_eq!(s.index, 7);
        assert_eq!(s.id, "MATH2-2");
        assert_eq!(s.course_code, "MATH2");
        assert_eq!(s.ordinal, 2);
    }

    #[test]
    fn test_course_from_json() {
        let c: Course =
            serde_json::from_str(r#"{"Course Code": "BIO1", "Number of Sections": 4}"#).unwrap();
        assert_eq!(c, Course::new("BIO1", 4));
    }
}

//! Timetabling domain models.
//!
//! Typed records for the five input tables, the derived course section,
//! and the generated timetable.
//!
//! # Table Mappings
//!
//! | Table | Record | Key column |
//! |-------|--------|------------|
//! | Lecturers | `Lecturer` | `Lecturer Name` |
//! | Courses | `Course` | `Course Code` |
//! | Rooms | `Room` | `Room Number` |
//! | Days | `Day` | `Day` |
//! | Time Periods | `TimePeriod` | `Time Period` |

mod course;
mod period;
mod resource;
mod tables;
mod timetable;

pub use course::{Course, CourseSection};
pub use period::TimePeriod;
pub use resource::{Day, Lecturer, Room};
pub use tables::InputTables;
pub use timetable::{ScheduleRecord, Timetable};

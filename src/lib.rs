//! Course timetabling for the U-Engine ecosystem.
//!
//! Generates a concrete timetable from five tables (Lecturers, Courses,
//! Rooms, Days, Time Periods): every course is expanded into sections, and
//! each section is bound to a lecturer, room, day and period by cycling over
//! those lists, then given absolute start/end timestamps.
//!
//! # Modules
//!
//! - **`models`**: Typed table records, `CourseSection`, `ScheduleRecord`, `Timetable`
//! - **`workbook`**: Loosely-typed sheet/row boundary and conversion to `InputTables`
//! - **`validation`**: Upfront input checks (section counts, empty lists, periods)
//! - **`scheduler`**: The generation pipeline and `TimetableScheduler` entry point
//! - **`error`**: `TimetableError` and its `ErrorKind` categories
//!
//! # Determinism
//!
//! Generation is a pure function of the tables and the configured reference
//! date. Table row order matters and is never changed.

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workbook;

pub use error::{ErrorKind, Result, TimetableError};

//! Input tables.
//!
//! `InputTables` is the typed snapshot the scheduler reads. Row order is
//! significant everywhere: lecturers, rooms, days and periods are cycled in
//! table order, and courses expand in table order. Nothing here sorts.

use serde::{Deserialize, Serialize};

use super::{Course, Day, Lecturer, Room, TimePeriod};
use crate::error::{Result, TimetableError};

/// The five tables describing one timetabling problem.
///
/// Build it with the `with_*` methods, parse it with
/// [`InputTables::from_json_str`], or convert a loosely-typed
/// [`Workbook`](crate::workbook::Workbook) with [`InputTables::from_workbook`].
/// All five tables are required when deserializing; an absent table is an
/// error, not an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputTables {
    /// Lecturers table.
    #[serde(rename = "Lecturers")]
    pub lecturers: Vec<Lecturer>,
    /// Courses table.
    #[serde(rename = "Courses")]
    pub courses: Vec<Course>,
    /// Rooms table.
    #[serde(rename = "Rooms")]
    pub rooms: Vec<Room>,
    /// Days table.
    #[serde(rename = "Days")]
    pub days: Vec<Day>,
    /// Time Periods table.
    #[serde(rename = "Time Periods")]
    pub time_periods: Vec<TimePeriod>,
}

impl InputTables {
    /// Creates empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses typed tables from JSON keyed by sheet name.
    ///
    /// # Errors
    /// `InvalidInput` if a table is missing or a row does not match its
    /// record shape.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| TimetableError::invalid_input("input tables", e.to_string()))
    }

    /// Appends a lecturer.
    pub fn with_lecturer(mut self, name: impl Into<String>) -> Self {
        self.lecturers.push(Lecturer::new(name));
        self
    }

    /// Appends a course.
    pub fn with_course(mut self, code: impl Into<String>, sections: u32) -> Self {
        self.courses.push(Course::new(code, sections));
        self
    }

    /// Appends a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Appends a day.
    pub fn with_day(mut self, name: impl Into<String>) -> Self {
        self.days.push(Day::new(name));
        self
    }

    /// Appends a time period.
    pub fn with_time_period(mut self, label: impl Into<String>) -> Self {
        self.time_periods.push(TimePeriod::new(label));
        self
    }

    /// Total number of sections the courses expand to.
    ///
    /// This is exactly the number of records a successful run produces.
    pub fn total_sections(&self) -> u64 {
        self.courses.iter().map(|c| u64::from(c.sections)).sum()
    }

    /// First room with the given number, in table order.
    pub fn room(&self, number: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.number == number)
    }
}

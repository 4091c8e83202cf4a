//! Timetable (output) model.
//!
//! A timetable is the ordered list of schedule records produced by one run,
//! one record per course section, in expansion order. Records are immutable
//! once built; the query helpers below are read-only views for display and
//! export consumers.
//!
//! Queries do not look for clashes. Two records may share a lecturer, room,
//! day and period; that is a property of the cyclic assignment policy.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One placed course section.
///
/// Serializes with the column headers of the exported timetable sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    /// Parent course code.
    #[serde(rename = "Course")]
    pub course: String,
    /// Section identifier, `"<code>-<ordinal>"`.
    #[serde(rename = "Course Section")]
    pub section: String,
    /// Assigned lecturer name.
    #[serde(rename = "Lecturer")]
    pub lecturer: String,
    /// Assigned room number.
    #[serde(rename = "Room")]
    pub room: String,
    /// Building of the assigned room.
    #[serde(rename = "Building")]
    pub building: String,
    /// Location of the assigned room.
    #[serde(rename = "Location")]
    pub location: String,
    /// Assigned day label.
    #[serde(rename = "Day")]
    pub day: String,
    /// Assigned period text, as entered.
    #[serde(rename = "Time Period")]
    pub time_period: String,
    /// Absolute start.
    #[serde(rename = "Start")]
    pub start: NaiveDateTime,
    /// Absolute end. Always after `start`.
    #[serde(rename = "End")]
    pub end: NaiveDateTime,
}

impl ScheduleRecord {
    /// Column headers in export order.
    pub const COLUMNS: [&'static str; 10] = [
        "Course",
        "Course Section",
        "Lecturer",
        "Room",
        "Building",
        "Location",
        "Day",
        "Time Period",
        "Start",
        "End",
    ];

    /// Length of the slot.
    #[inline]
    pub fn duration(&self) -> chrono::TimeDelta {
        self.end - self.start
    }
}

/// The generated timetable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timetable {
    records: Vec<ScheduleRecord>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_records(records: Vec<ScheduleRecord>) -> Self {
        Self { records }
    }

    /// Records in expansion order.
    pub fn records(&self) -> &[ScheduleRecord] {
        &self.records
    }

    /// Consumes the timetable, returning its records.
    pub fn into_records(self) -> Vec<ScheduleRecord> {
        self.records
    }

    /// Iterates records in expansion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no section was scheduled.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finds the record for a section id.
    pub fn record_for_section(&self, section: &str) -> Option<&ScheduleRecord> {
        self.records.iter().find(|r| r.section == section)
    }

    /// All records of a course, in section order.
    pub fn records_for_course(&self, course: &str) -> Vec<&ScheduleRecord> {
        self.records.iter().filter(|r| r.course == course).collect()
    }

    /// All records taught by a lecturer.
    pub fn records_for_lecturer(&self, lecturer: &str) -> Vec<&ScheduleRecord> {
        self.records
            .iter()
            .filter(|r| r.lecturer == lecturer)
            .collect()
    }

    /// All records placed in a room.
    pub fn records_for_room(&self, room: &str) -> Vec<&ScheduleRecord> {
        self.records.iter().filter(|r| r.room == room).collect()
    }

    /// All records on a day.
    pub fn records_for_day(&self, day: &str) -> Vec<&ScheduleRecord> {
        self.records.iter().filter(|r| r.day == day).collect()
    }

    /// Earliest start across all records.
    pub fn earliest_start(&self) -> Option<NaiveDateTime> {
        self.records.iter().map(|r| r.start).min()
    }

    /// Latest end across all records.
    pub fn latest_end(&self) -> Option<NaiveDateTime> {
        self.records.iter().map(|r| r.end).max()
    }

    /// Serializes the records as a JSON array of row objects.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.records)
    }
}

impl<'a> IntoIterator for &'a Timetable {
    type Item = &'a ScheduleRecord;
    type IntoIter = std::slice::Iter<'a, ScheduleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for Timetable {
    type Item = ScheduleRecord;
    type IntoIter = std::vec::IntoIter<ScheduleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

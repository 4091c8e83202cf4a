//! Resource models.
//!
//! Resources are the entities cycled over when sections are placed:
//! lecturers, rooms and teaching days. Time periods are modelled separately
//! as [`TimePeriod`](super::TimePeriod) because they carry their own text format.
//!
//! Field names serialize to the spreadsheet column headers used by the
//! surrounding application, so a serialized table reads back unchanged.

use serde::{Deserialize, Serialize};

/// A lecturer who can teach a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecturer {
    /// Display name (`Lecturer Name` column). Never blank.
    #[serde(rename = "Lecturer Name")]
    pub name: String,
}

/// A teaching room.
///
/// `number` is the lookup key used when enriching schedule records.
/// The Rooms table may contain the same number twice; the first row wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Room identifier (`Room Number` column).
    #[serde(rename = "Room Number")]
    pub number: String,
    /// Building the room belongs to.
    #[serde(rename = "Building")]
    pub building: String,
    /// Free-form location (campus, floor, wing).
    #[serde(rename = "Location")]
    pub location: String,
}

/// A teaching day (e.g. "Monday").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// Day label (`Day` column).
    #[serde(rename = "Day")]
    pub name: String,
}

impl Lecturer {
    /// Creates a lecturer.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Room {
    /// Creates a room with empty building and location.
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            building: String::new(),
            location: String::new(),
        }
    }

    /// Sets the building.
    pub fn with_building(mut self, building: impl Into<String>) -> Self {
        self.building = building.into();
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}

impl Day {
    /// Creates a day.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

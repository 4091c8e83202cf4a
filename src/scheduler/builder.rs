//! Timetable builder: the single entry point of the engine.
//!
//! # Algorithm
//!
//! 1. Validate the tables upfront (all findings collected, run aborted on any).
//! 2. Expand courses into sections in global order.
//! 3. For each section index `i`, pick lecturer/room/day/period by `i mod n`.
//! 4. Resolve the period into absolute start/end on `reference_date + i mod |Days|`.
//! 5. Enrich with the room's building and location.
//! 6. Emit one record per section, in expansion order.
//!
//! The run is all-or-nothing: any failure discards everything built so far.
//! No state survives between runs.
//!
//! # Complexity
//! O(S + R) where S = total sections, R = rooms.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, info};

use super::cyclic::CyclicAssigner;
use super::expand::expand_sections;
use super::rooms::RoomDirectory;
use super::time::TimeResolver;
use crate::error::{Result, TimetableError};
use crate::models::{InputTables, ScheduleRecord, Timetable};
use crate::validation::validate_input;
use crate::workbook::Workbook;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Calendar date that day offset 0 maps to.
    pub reference_date: NaiveDate,
}

impl SchedulerConfig {
    /// Default anchor: 2024-01-01, a Monday.
    pub fn default_reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Sets the reference date.
    pub fn with_reference_date(mut self, reference_date: NaiveDate) -> Self {
        self.reference_date = reference_date;
        self
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            reference_date: Self::default_reference_date(),
        }
    }
}

/// Deterministic cyclic timetable generator.
///
/// A pure function of its configuration and the input tables: the same
/// tables always produce the same timetable.
///
/// # Example
///
/// ```
/// use u_timetable::models::{InputTables, Room};
/// use u_timetable::scheduler::TimetableScheduler;
///
/// let tables = InputTables::new()
///     .with_lecturer("A")
///     .with_lecturer("B")
///     .with_course("X", 2)
///     .with_room(Room::new("R1").with_building("Main").with_location("North"))
///     .with_room(Room::new("R2").with_building("Annex").with_location("South"))
///     .with_room(Room::new("R3").with_building("Main").with_location("East"))
///     .with_day("Mon")
///     .with_day("Tue")
///     .with_time_period("09:00-10:00")
///     .with_time_period("10:00-11:00");
///
/// let timetable = TimetableScheduler::new().schedule(&tables).unwrap();
/// assert_eq!(timetable.len(), 2);
///
/// let second = timetable.record_for_section("X-2").unwrap();
/// assert_eq!(second.lecturer, "B");
/// assert_eq!(second.room, "R2");
/// assert_eq!(second.day, "Tue");
/// assert_eq!(second.start.to_string(), "2024-01-02 10:00:00");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableScheduler {
    config: SchedulerConfig,
}

impl TimetableScheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the reference date.
    pub fn with_reference_date(mut self, reference_date: NaiveDate) -> Self {
        self.config.reference_date = reference_date;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Generates the timetable for `tables`.
    ///
    /// # Errors
    /// Any [`TimetableError`]; no partial timetable is returned.
    pub fn schedule(&self, tables: &InputTables) -> Result<Timetable> {
        let span = debug_span!(
            "schedule",
            courses = tables.courses.len(),
            reference_date = %self.config.reference_date
        );
        let _enter = span.enter();

        validate_input(tables).map_err(TimetableError::Validation)?;

        let sections = expand_sections(&tables.courses)?;
        debug!(sections = sections.len(), "expanded courses");
        if sections.is_empty() {
            info!("no sections to schedule");
            return Ok(Timetable::new());
        }

        let assigner = CyclicAssigner::new(tables)?;
        let resolver = TimeResolver::new(
            self.config.reference_date,
            &tables.days,
            &tables.time_periods,
        )?;
        let rooms = RoomDirectory::new(&tables.rooms);
        debug!(
            lecturers = tables.lecturers.len(),
            rooms = rooms.len(),
            days = tables.days.len(),
            periods = tables.time_periods.len(),
            "resource lists ready"
        );

        let records = sections
            .iter()
            .map(|section| -> Result<ScheduleRecord> {
                let assigned = assigner.assign(section.index);
                let slot = resolver.resolve(section.index)?;
                let room = rooms.lookup(&assigned.room.number)?;

                Ok(ScheduleRecord {
                    course: section.course_code.clone(),
                    section: section.id.clone(),
                    lecturer: assigned.lecturer.name.clone(),
                    room: room.number.clone(),
                    building: room.building.clone(),
                    location: room.location.clone(),
                    day: assigned.day.name.clone(),
                    time_period: assigned.period.label.clone(),
                    start: slot.start,
                    end: slot.end,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        info!(records = records.len(), "timetable generated");
        Ok(Timetable::from_records(records))
    }

    /// Converts a workbook and generates its timetable.
    pub fn schedule_workbook(&self, workbook: &Workbook) -> Result<Timetable> {
        let tables = InputTables::from_workbook(workbook)?;
        self.schedule(&tables)
    }
}

/// Generates a timetable with the default configuration.
pub fn generate_timetable(tables: &InputTables) -> Result<Timetable> {
    TimetableScheduler::new().schedule(tables)
}

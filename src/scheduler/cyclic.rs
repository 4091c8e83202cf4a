//! Cyclic (round-robin) resource assignment.
//!
//! # Rule
//! The section at global index `i` receives `L[i mod |L|]` from each resource
//! list `L`, independently for lecturers, rooms, days and time periods.
//!
//! The rule is oblivious to clashes: sections whose indices agree modulo all
//! four list lengths share lecturer, room, day and period. Load balance is
//! only as even as `i mod n` makes it.

use crate::error::{Result, TimetableError};
use crate::models::{Day, InputTables, Lecturer, Room, TimePeriod};
use crate::workbook::sheet;

/// Resources selected for one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceAssignment<'a> {
    /// Global index of the section.
    pub index: usize,
    /// Assigned lecturer.
    pub lecturer: &'a Lecturer,
    /// Assigned room.
    pub room: &'a Room,
    /// Assigned day.
    pub day: &'a Day,
    /// Assigned time period.
    pub period: &'a TimePeriod,
}

/// Round-robin assigner over the four resource lists of an input snapshot.
///
/// All lists are checked once on construction, so [`assign`](Self::assign)
/// is infallible.
#[derive(Debug, Clone, Copy)]
pub struct CyclicAssigner<'a> {
    lecturers: &'a [Lecturer],
    rooms: &'a [Room],
    days: &'a [Day],
    periods: &'a [TimePeriod],
}

impl<'a> CyclicAssigner<'a> {
    /// Creates an assigner over the tables' resource lists.
    ///
    /// # Errors
    /// `EmptyResourceList` naming the first empty list, checked in the order
    /// Lecturers, Rooms, Days, Time Periods.
    pub fn new(tables: &'a InputTables) -> Result<Self> {
        let lists = [
            (sheet::LECTURERS, tables.lecturers.len()),
            (sheet::ROOMS, tables.rooms.len()),
            (sheet::DAYS, tables.days.len()),
            (sheet::TIME_PERIODS, tables.time_periods.len()),
        ];
        if let Some((table, _)) = lists.iter().find(|(_, len)| *len == 0) {
            return Err(TimetableError::EmptyResourceList {
                table: (*table).to_string(),
            });
        }

        Ok(Self {
            lecturers: &tables.lecturers,
            rooms: &tables.rooms,
            days: &tables.days,
            periods: &tables.time_periods,
        })
    }

    /// Selects the resources for the section at `index`.
    pub fn assign(&self, index: usize) -> ResourceAssignment<'a> {
        ResourceAssignment {
            index,
            lecturer: &self.lecturers[index % self.lecturers.len()],
            room: &self.rooms[index % self.rooms.len()],
            day: &self.days[index % self.days.len()],
            period: &self.periods[index % self.periods.len()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn sample_tables() -> InputTables {
        InputTables::new()
            .with_lecturer("A")
            .with_lecturer("B")
            .with_room(Room::new("R1"))
            .with_room(Room::new("R2"))
            .with_room(Room::new("R3"))
            .with_day("Mon")
            .with_day("Tue")
            .with_time_period("09:00-10:00")
            .with_time_period("10:00-11:00")
            .with_course("X", 2)
    }

    #[test]
    fn test_assign_cycles_independently() {
        let tables = sample_tables();
        let assigner = CyclicAssigner::new(&tables).unwrap();

        let a0 = assigner.assign(0);
        assert_eq!(a0.lecturer.name, "A");
        assert_eq!(a0.room.number, "R1");
        assert_eq!(a0.day.name, "Mon");
        assert_eq!(a0.period.label, "09:00-10:00");

        let a1 = assigner.assign(1);
        assert_eq!(a1.lecturer.name, "B");
        assert_eq!(a1.room.number, "R2");
        assert_eq!(a1.day.name, "Tue");

        // Lecturers wrap after 2, rooms after 3
        let a2 = assigner.assign(2);
        assert_eq!(a2.lecturer.name, "A");
        assert_eq!(a2.room.number, "R3");
        let a3 = assigner.assign(3);
        assert_eq!(a3.room.number, "R1");
    }

    #[test]
    fn test_assign_is_pure() {
        let tables = sample_tables();
        let assigner = CyclicAssigner::new(&tables).unwrap();
        assert_eq!(assigner.assign(17), assigner.assign(17));
    }

    #[test]
    fn test_clash_is_not_avoided() {
        // All lists length 2 → index 0 and index 2 get identical resources
        let tables = InputTables::new()
            .with_lecturer("A")
            .with_lecturer("B")
            .with_room(Room::new("R1"))
            .with_room(Room::new("R2"))
            .with_day("Mon")
            .with_day("Tue")
            .with_time_period("09:00-10:00")
            .with_time_period("10:00-11:00");
        let assigner = CyclicAssigner::new(&tables).unwrap();
        let a0 = assigner.assign(0);
        let a2 = assigner.assign(2);
        assert_eq!(a0.lecturer, a2.lecturer);
        assert_eq!(a0.room, a2.room);
        assert_eq!(a0.day, a2.day);
        assert_eq!(a0.period, a2.period);
    }

    #[test]
    fn test_empty_list_rejected_upfront() {
        let mut tables = sample_tables();
        tables.days.clear();
        let err = CyclicAssigner::new(&tables).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyResourceList);
        assert!(err.to_string().contains("Days"));
    }
}

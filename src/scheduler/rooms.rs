//! Room metadata lookup.

use std::collections::HashMap;

use tracing::warn;

use crate::error::{Result, TimetableError};
use crate::models::Room;

/// Index of the Rooms table by room number.
///
/// When the same number appears on several rows, the first row's building
/// and location are used.
#[derive(Debug, Clone)]
pub struct RoomDirectory<'a> {
    by_number: HashMap<&'a str, &'a Room>,
}

impl<'a> RoomDirectory<'a> {
    /// Indexes `rooms`, keeping the first row for each number.
    pub fn new(rooms: &'a [Room]) -> Self {
        let mut by_number = HashMap::with_capacity(rooms.len());
        for room in rooms {
            if by_number.contains_key(room.number.as_str()) {
                warn!(room = %room.number, "duplicate room number; keeping the first row");
                continue;
            }
            by_number.insert(room.number.as_str(), room);
        }
        Self { by_number }
    }

    /// Looks up a room by exact number.
    ///
    /// # Errors
    /// `LookupConsistency` if no row has this number. Within one run this
    /// cannot happen for an assigned room, since rooms are drawn from the
    /// same table.
    pub fn lookup(&self, number: &str) -> Result<&'a Room> {
        self.by_number
            .get(number)
            .copied()
            .ok_or_else(|| TimetableError::LookupConsistency {
                room: number.to_string(),
            })
    }

    /// Number of distinct room numbers.
    pub fn len(&self) -> usize {
        self.by_number.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.by_number.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_lookup() {
        let rooms = vec![
            Room::new("R1").with_building("Main").with_location("North"),
            Room::new("R2").with_building("Annex").with_location("South"),
        ];
        let dir = RoomDirectory::new(&rooms);
        let r = dir.lookup("R2").unwrap();
        assert_eq!(r.building, "Annex");
        assert_eq!(r.location, "South");
        assert_eq!(dir.len(), 2);
    }

    #[test]
    fn test_duplicate_first_wins() {
        let rooms = vec![
            Room::new("R1").with_building("First"),
            Room::new("R1").with_building("Second"),
        ];
        let dir = RoomDirectory::new(&rooms);
        assert_eq!(dir.lookup("R1").unwrap().building, "First");
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn test_lookup_is_exact() {
        let rooms = vec![Room::new("R1")];
        let dir = RoomDirectory::new(&rooms);
        let err = dir.lookup("r1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LookupConsistency);
        assert!(dir.lookup("R1 ").is_err());
    }
}

//! Cyclic timetable generation.
//!
//! Turns the five input tables into one schedule record per course section.
//!
//! # Pipeline
//!
//! | Step | Module | Output |
//! |------|--------|--------|
//! | Expand | `expand` | ordered sections with global indices |
//! | Assign | `cyclic` | lecturer, room, day, period per index |
//! | Resolve | `time` | absolute start/end per index |
//! | Enrich | `rooms` | building and location per assigned room |
//! | Build | `builder` | the `Timetable` |
//!
//! # Policy
//!
//! Assignment is round-robin by global index and nothing more. There is no
//! clash detection and no optimization of any objective: two sections can
//! land on the same lecturer, room, day and period.

mod builder;
mod cyclic;
mod expand;
mod rooms;
mod time;

pub use builder::{generate_timetable, SchedulerConfig, TimetableScheduler};
pub use cyclic::{CyclicAssigner, ResourceAssignment};
pub use expand::expand_sections;
pub use rooms::RoomDirectory;
pub use time::{parse_period, ParsedPeriod, ResolvedSlot, TimeResolver};

//! Time period model.
//!
//! A period is kept exactly as entered (`"HH:MM-HH:MM"`); parsing into
//! time-of-day values happens in [`crate::scheduler::parse_period`] so that a
//! malformed row surfaces as a scheduling error, not a load error.

use serde::{Deserialize, Serialize};

/// A row of the Time Periods table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePeriod {
    /// Raw range text (`Time Period` column), e.g. `"09:00-10:30"`.
    #[serde(rename = "Time Period")]
    pub label: String,
}

impl TimePeriod {
    /// Creates a period from its range text.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// The range text.
    pub fn as_str(&self) -> &str {
        &self.label
    }
}

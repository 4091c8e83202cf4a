//! Period parsing and timestamp resolution.
//!
//! # Time Model
//! A period string `"HH:MM-HH:MM"` (24-hour clock) yields a start
//! time-of-day and a positive duration. The section at global index `i`
//! is placed on `reference_date + (i mod |Days|)` days at the period's
//! start; its end is start + duration.
//!
//! The day offset is computed from the Days table length, independently of
//! the day label chosen by the cyclic assigner. Both cycle the same list
//! with the same modulus, so they always agree.
//!
//! Timestamps are naive wall-clock values. They are not checked against any
//! real teaching calendar.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::{Result, TimetableError};
use crate::models::{Day, TimePeriod};
use crate::workbook::sheet;

/// A parsed `"HH:MM-HH:MM"` range. `end` is strictly after `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedPeriod {
    /// Start time of day.
    pub start: NaiveTime,
    /// End time of day.
    pub end: NaiveTime,
}

impl ParsedPeriod {
    /// Length of the period.
    #[inline]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

impl FromStr for ParsedPeriod {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self> {
        parse_period(s)
    }
}

/// Parses a period string.
///
/// Exactly two `HH:MM` tokens separated by one `-`, with no whitespace
/// anywhere. The label is matched as written.
///
/// # Errors
/// `MalformedPeriod` if the text has the wrong shape, a token is not a valid
/// 24-hour time, or the end is not after the start.
pub fn parse_period(text: &str) -> Result<ParsedPeriod> {
    let mut tokens = text.split('-');
    let (Some(first), Some(second), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(TimetableError::malformed_period(
            text,
            "expected two HH:MM times separated by '-'",
        ));
    };

    let start = parse_time_of_day(text, first)?;
    let end = parse_time_of_day(text, second)?;
    if end <= start {
        return Err(TimetableError::malformed_period(text, "end is not after start"));
    }

    Ok(ParsedPeriod { start, end })
}

fn parse_time_of_day(text: &str, token: &str) -> Result<NaiveTime> {
    if token.chars().any(char::is_whitespace) {
        return Err(TimetableError::malformed_period(
            text,
            format!("'{token}' contains whitespace"),
        ));
    }
    NaiveTime::parse_from_str(token, "%H:%M").map_err(|e| {
        TimetableError::malformed_period(text, format!("'{token}' is not an HH:MM time ({e})"))
    })
}

/// Absolute start and end of a placed section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSlot {
    /// Start timestamp.
    pub start: NaiveDateTime,
    /// End timestamp. Always after `start`.
    pub end: NaiveDateTime,
}

/// Resolves global section indices into absolute timestamps.
///
/// Owns the parsed Time Periods table, so every period is validated before
/// the first section is resolved.
#[derive(Debug, Clone)]
pub struct TimeResolver {
    reference_date: NaiveDate,
    day_count: usize,
    periods: Vec<ParsedPeriod>,
}

impl TimeResolver {
    /// Creates a resolver anchored at `reference_date`.
    ///
    /// # Errors
    /// - `EmptyResourceList` if `days` or `periods` is empty.
    /// - `MalformedPeriod` for the first period that does not parse.
    pub fn new(reference_date: NaiveDate, days: &[Day], periods: &[TimePeriod]) -> Result<Self> {
        for (table, len) in [(sheet::DAYS, days.len()), (sheet::TIME_PERIODS, periods.len())] {
            if len == 0 {
                return Err(TimetableError::EmptyResourceList {
                    table: table.to_string(),
                });
            }
        }

        let periods = periods
            .iter()
            .map(|p| parse_period(p.as_str()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            reference_date,
            day_count: days.len(),
            periods,
        })
    }

    /// The anchor date.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Days added to the reference date for the section at `index`.
    #[inline]
    pub fn day_offset(&self, index: usize) -> usize {
        index % self.day_count
    }

    /// Parsed period selected for the section at `index`.
    pub fn period(&self, index: usize) -> &ParsedPeriod {
        &self.periods[index % self.periods.len()]
    }

    /// Absolute start/end for the section at `index`.
    ///
    /// # Errors
    /// `InvalidInput` if the date arithmetic leaves chrono's supported range.
    pub fn resolve(&self, index: usize) -> Result<ResolvedSlot> {
        place(self.reference_date, self.period(index), self.day_offset(index))
    }
}

fn place(reference_date: NaiveDate, period: &ParsedPeriod, offset: usize) -> Result<ResolvedSlot> {
    let out_of_range = || {
        TimetableError::invalid_input(
            sheet::DAYS,
            format!("day offset {offset} from {reference_date} is out of range"),
        )
    };

    let date = reference_date
        .checked_add_days(chrono::Days::new(offset as u64))
        .ok_or_else(out_of_range)?;
    let start = date.and_time(period.start);
    let end = start
        .checked_add_signed(period.duration())
        .ok_or_else(out_of_range)?;

    Ok(ResolvedSlot { start, end })
}

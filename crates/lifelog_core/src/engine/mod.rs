//! Pure filtering, streak, and statistics engines.
//!
//! # Responsibility
//! - Derive ordered views and aggregate counters from already-fetched,
//!   already-scoped record lists.
//! - Keep every function free of I/O and ambient state; "now" is always an
//!   argument.
//!
//! # Invariants
//! - Inputs are never mutated; outputs are fresh lists/structs.
//! - Malformed date strings propagate as `EngineError::MalformedDate`,
//!   never as a silently wrong result.
//! - Calendar comparisons truncate to the day carried by the value itself
//!   (records are written with local-offset timestamps).

pub mod filter;
pub mod stats;
pub mod streak;

use crate::model::Goal;
use chrono::{DateTime, FixedOffset, NaiveDate};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type EngineResult<T> = Result<T, EngineError>;

/// Data error raised by the pure engines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A stored date string could not be parsed.
    MalformedDate {
        field: &'static str,
        value: String,
    },
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedDate { field, value } => {
                write!(f, "malformed date in `{field}`: `{value}`")
            }
        }
    }
}

impl Error for EngineError {}

/// Parses the calendar-day prefix of an ISO-8601 string (`YYYY-MM-DD`,
/// with or without a trailing time part).
pub fn calendar_day(field: &'static str, value: &str) -> EngineResult<NaiveDate> {
    let prefix = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").map_err(|_| EngineError::MalformedDate {
        field,
        value: value.to_string(),
    })
}

/// Parses a full timestamp, falling back to midnight for day-only strings.
pub fn instant(field: &'static str, value: &str) -> EngineResult<DateTime<FixedOffset>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed);
    }
    let day = calendar_day(field, value)?;
    Ok(day
        .and_time(chrono::NaiveTime::MIN)
        .and_utc()
        .fixed_offset())
}

/// Completion percentage of a goal, uncapped.
///
/// Policy for the degenerate `target_value <= 0` case: report 0% rather
/// than NaN/infinity. Such goals never count as progressing.
pub fn completion_percent(goal: &Goal) -> f64 {
    if goal.target_value <= 0.0 {
        return 0.0;
    }
    goal.current_value / goal.target_value * 100.0
}

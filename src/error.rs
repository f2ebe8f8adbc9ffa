//! Error types.
//!
//! [`EngineError`] covers malformed input and invalid configuration.
//! [`ScheduleConflict`] is kept separate: it is the expected, high-frequency
//! outcome of trying a combination and is never treated as a failure of
//! the request as a whole.

use thiserror::Error;

use crate::time::Weekday;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised while building engine values from input data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Hour or minute outside the 24-hour clock.
    #[error("invalid time {hour:02}:{minute:02}")]
    InvalidTime { hour: u8, minute: u8 },

    /// Interval whose end does not come after its start.
    #[error("empty interval: {start} is not before {end}")]
    EmptyInterval { start: String, end: String },

    /// Interval starting before the encoding reference hour.
    #[error("interval starts at {start}, before the reference hour {reference_hour}:00")]
    BeforeReference { start: String, reference_hour: u8 },

    /// Interval that does not fit in the per-day bit pattern.
    #[error("interval ending at {end} needs tick {tick}, beyond the {width}-bit day pattern")]
    TickOverflow { end: String, tick: u32, width: u32 },

    /// Day symbol outside `M T W Th F S`.
    #[error("unknown weekday symbol: {0}")]
    UnknownDay(String),

    /// A raw section record that cannot become a section.
    #[error("malformed record {code} ({name}): {reason}")]
    MalformedRecord {
        code: u32,
        name: String,
        reason: String,
    },

    /// Course query without a course name.
    #[error("invalid course query: {0:?}")]
    InvalidQuery(String),

    /// Configuration parameter out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A candidate combination overlaps in time.
///
/// Carries the position of the member that could not be placed and the
/// first weekday on which it collided.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("member {member} conflicts on {day}")]
pub struct ScheduleConflict {
    /// Index of the rejected member within the candidate sequence.
    pub member: usize,
    /// First weekday with an overlapping tick.
    pub day: Weekday,
}

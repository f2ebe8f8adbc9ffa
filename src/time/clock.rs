//! Clock times and half-open time ranges.

use std::fmt;

use crate::error::{EngineError, Result};

/// A wall-clock time of day in 24-hour form.
///
/// Ordering is lexicographic on `(hour, minute)`.
///
/// # Examples
///
/// ```
/// use u_enroll::time::Time;
///
/// let t = Time::new(13, 30).unwrap();
/// assert_eq!(t.to_string(), "01:30pm");
/// assert!(Time::new(24, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Time {
    hour: u8,
    minute: u8,
}

impl Time {
    /// Creates a time, rejecting hours above 23 and minutes above 59.
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(EngineError::InvalidTime { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    /// Hour of day (0-23).
    #[inline]
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Minute of hour (0-59).
    #[inline]
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight.
    #[inline]
    pub fn minutes_since_midnight(self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }
}

impl fmt::Display for Time {
    /// 12-hour clock with lowercase meridiem, e.g. `09:00am`, `12:30pm`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meridiem = if self.hour < 12 { "am" } else { "pm" };
        let hour12 = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{:02}:{:02}{}", hour12, self.minute, meridiem)
    }
}

/// A half-open range `[start, end)` on a single day.
///
/// Construction guarantees `start < end`; ordering is by `(start, end)`.
///
/// # Examples
///
/// ```
/// use u_enroll::time::{Interval, Time};
///
/// let iv = Interval::new(Time::new(9, 0).unwrap(), Time::new(10, 30).unwrap()).unwrap();
/// assert_eq!(iv.to_string(), "09:00am-10:30am");
/// assert_eq!(iv.duration_minutes(), 90);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Interval {
    start: Time,
    end: Time,
}

impl Interval {
    /// Creates an interval, rejecting zero-length and inverted ranges.
    pub fn new(start: Time, end: Time) -> Result<Self> {
        if start >= end {
            return Err(EngineError::EmptyInterval {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Convenience constructor from raw `(hour, minute)` pairs.
    pub fn from_hm(start: (u8, u8), end: (u8, u8)) -> Result<Self> {
        Self::new(Time::new(start.0, start.1)?, Time::new(end.0, end.1)?)
    }

    /// Inclusive start.
    #[inline]
    pub fn start(&self) -> Time {
        self.start
    }

    /// Exclusive end.
    #[inline]
    pub fn end(&self) -> Time {
        self.end
    }

    /// Length in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.end.minutes_since_midnight() - self.start.minutes_since_midnight()
    }

    /// Whether the two ranges share any instant. Touching ends do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

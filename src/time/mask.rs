//! Per-day tick bit patterns.
//!
//! A day is divided into 15-minute ticks counted from a reference hour.
//! Bit *k* of a [`DayMask`] stands for the tick starting at
//! `reference_hour:00 + k × 15 min`. An interval sets every tick it
//! touches, so two tick-aligned intervals are disjoint exactly when their
//! masks AND to zero.

use std::ops::{BitAnd, BitOr, BitOrAssign};

use super::clock::Interval;
use super::weekday::Weekday;
use crate::error::{EngineError, Result};

/// Length of one tick in minutes.
pub const TICK_MINUTES: u32 = 15;

/// Ticks per day pattern.
pub const MASK_WIDTH: u32 = u128::BITS;

/// Occupied ticks of a single day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DayMask(u128);

impl DayMask {
    /// No ticks occupied.
    pub const EMPTY: DayMask = DayMask(0);

    /// Wraps raw bits.
    #[inline]
    pub fn from_bits(bits: u128) -> Self {
        Self(bits)
    }

    /// Raw bits.
    #[inline]
    pub fn bits(self) -> u128 {
        self.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether any tick is occupied in both masks.
    #[inline]
    pub fn intersects(self, other: DayMask) -> bool {
        self.0 & other.0 != 0
    }

    /// Number of occupied ticks.
    pub fn tick_count(self) -> u32 {
        self.0.count_ones()
    }
}

impl BitAnd for DayMask {
    type Output = DayMask;

    fn bitand(self, rhs: DayMask) -> DayMask {
        DayMask(self.0 & rhs.0)
    }
}

impl BitOr for DayMask {
    type Output = DayMask;

    fn bitor(self, rhs: DayMask) -> DayMask {
        DayMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for DayMask {
    fn bitor_assign(&mut self, rhs: DayMask) {
        self.0 |= rhs.0;
    }
}

/// Maps intervals onto tick bits relative to a reference hour.
///
/// # Examples
///
/// ```
/// use u_enroll::time::{Interval, TickEncoding};
///
/// let enc = TickEncoding::default(); // ticks counted from 7:00
/// let iv = Interval::from_hm((9, 0), (10, 0)).unwrap();
/// let mask = enc.encode(&iv).unwrap();
/// assert_eq!(mask.bits(), 0b1111 << 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickEncoding {
    /// Hour whose first tick is bit 0.
    pub reference_hour: u8,
}

impl Default for TickEncoding {
    fn default() -> Self {
        Self { reference_hour: 7 }
    }
}

impl TickEncoding {
    /// Encoding counting ticks from `reference_hour:00`.
    pub fn new(reference_hour: u8) -> Self {
        Self { reference_hour }
    }

    /// Encodes an interval as the run of ticks from the tick containing
    /// `start` through the last tick touched before `end`.
    ///
    /// Fails with [`EngineError::BeforeReference`] when the interval starts
    /// before the reference hour, and with [`EngineError::TickOverflow`]
    /// when it would need more than [`MASK_WIDTH`] ticks.
    pub fn encode(&self, interval: &Interval) -> Result<DayMask> {
        let reference = self.reference_hour as u32 * 60;
        let start = interval.start().minutes_since_midnight();
        let end = interval.end().minutes_since_midnight();

        if start < reference {
            return Err(EngineError::BeforeReference {
                start: interval.start().to_string(),
                reference_hour: self.reference_hour,
            });
        }

        let start_bit = (start - reference) / TICK_MINUTES;
        // First tick not touched by the interval.
        let end_exclusive = (end - reference).div_ceil(TICK_MINUTES);
        if end_exclusive > MASK_WIDTH {
            return Err(EngineError::TickOverflow {
                end: interval.end().to_string(),
                tick: end_exclusive - 1,
                width: MASK_WIDTH,
            });
        }

        let len = end_exclusive - start_bit;
        let run = if len >= MASK_WIDTH {
            u128::MAX
        } else {
            (1u128 << len) - 1
        };
        Ok(DayMask(run << start_bit))
    }
}

impl Interval {
    /// Encodes with the default 7:00 reference hour.
    pub fn encode(&self) -> Result<DayMask> {
        TickEncoding::default().encode(self)
    }
}

/// One [`DayMask`] per teaching day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WeekMask([DayMask; Weekday::COUNT]);

impl WeekMask {
    /// Mask with no ticks on any day.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mask for one day.
    #[inline]
    pub fn day(&self, day: Weekday) -> DayMask {
        self.0[day.index()]
    }

    /// ORs `mask` into `day`.
    #[inline]
    pub fn insert(&mut self, day: Weekday, mask: DayMask) {
        self.0[day.index()] |= mask;
    }

    /// First day on which both week masks occupy a common tick.
    pub fn conflict_day(&self, other: &WeekMask) -> Option<Weekday> {
        Weekday::ALL
            .into_iter()
            .find(|&day| self.day(day).intersects(other.day(day)))
    }

    /// Whether no tick is occupied on any day.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|m| m.is_empty())
    }

    /// Day-wise union.
    pub fn union(&self, other: &WeekMask) -> WeekMask {
        let mut out = *self;
        for day in Weekday::ALL {
            out.insert(day, other.day(day));
        }
        out
    }
}

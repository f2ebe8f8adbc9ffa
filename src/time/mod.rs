//! Time & interval model.
//!
//! - [`Time`]: a 24-hour clock time
//! - [`Interval`]: a half-open range on one day
//! - [`Weekday`]: the six teaching days, in column order
//! - [`TickEncoding`], [`DayMask`], [`WeekMask`]: 15-minute tick bit patterns
//!   for O(1)-per-day overlap tests

mod clock;
mod mask;
mod weekday;

pub use clock::{Interval, Time};
pub use mask::{DayMask, TickEncoding, WeekMask, MASK_WIDTH, TICK_MINUTES};
pub use weekday::Weekday;

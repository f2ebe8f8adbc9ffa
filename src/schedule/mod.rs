//! Conflict detection, validated schedules and combination enumeration.
//!
//! # Key Types
//!
//! - [`ConflictDetector`]: running per-day masks, O(1) overlap test per day
//! - [`Schedule`]: an immutable, validated one-section-per-course pick
//! - [`Combinations`]: lazy walk over the candidate product
//!
//! # Enumeration forms
//!
//! [`enumerate_eager`], [`enumerate_lazy`] and (with the `parallel`
//! feature) `enumerate_parallel` produce the same schedules in the same
//! order; [`enumerate`] picks eager or lazy from an [`EnumerationMode`].

mod conflict;
mod enumerate;
mod types;

pub use conflict::ConflictDetector;
#[cfg(feature = "parallel")]
pub use enumerate::enumerate_parallel;
pub use enumerate::{
    enumerate, enumerate_eager, enumerate_lazy, product_size, Combinations, EnumerationMode,
    Schedules,
};
pub use types::Schedule;

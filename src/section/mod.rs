//! Class-section entity and similarity merge.
//!
//! - [`Section`]: one offered section with its encoded weekly schedule
//! - [`EnrollmentStats`]: available / reserved / demand figures
//! - [`SectionRecord`]: raw input from the parsing layer
//! - [`merge_similar`]: folds sections with identical schedules

mod merge;
mod record;
mod types;

pub use merge::merge_similar;
pub use record::{MeetingRecord, SectionRecord};
pub use types::{EnrollmentStats, Section};

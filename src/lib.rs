//! Class-section combination engine.
//!
//! Given candidate sections for each desired course, finds every
//! registrable combination, estimates how likely each is to be obtained,
//! and overlays all candidates into a load heatmap:
//!
//! - **Time**: clock times, half-open intervals, teaching weekdays and the
//!   15-minute tick bit patterns used for conflict tests.
//! - **Section**: class sections, raw record intake and the folding of
//!   sections that meet at identical times.
//! - **Schedule**: all-or-nothing conflict detection and eager, lazy or
//!   parallel enumeration of the Cartesian product of candidates.
//! - **Odds**: seat probability per section and mean/spread per schedule.
//! - **Heatmap**: unfiltered occupancy counts with HSV shading and
//!   WCAG-contrast text colors.
//! - **Catalog / Planner**: per-course candidate lists, course queries with
//!   section filters, request summaries and pagination.
//! - **Grid**: the abstract table every view is rendered from.
//!
//! # Architecture
//!
//! The engine is pure computation over already-parsed records. Fetching
//! registration data and rendering markup belong to the caller; the crate
//! logs through `tracing` and never installs a subscriber.

pub mod catalog;
pub mod config;
pub mod error;
pub mod grid;
pub mod heatmap;
pub mod odds;
pub mod planner;
pub mod schedule;
pub mod section;
pub mod time;

pub use error::{EngineError, Result, ScheduleConflict};

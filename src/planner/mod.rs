//! Request-level planning.
//!
//! [`Planner`] resolves course queries against a [`Catalog`](crate::catalog::Catalog),
//! summarizes what matched, builds the heatmap over every candidate and
//! exposes the schedules in the configured enumeration mode.
//! [`Pagination`] numbers schedule listings for display.

mod pagination;
mod runner;
mod types;

pub use pagination::Pagination;
pub use runner::Planner;
pub use types::{Plan, PlanSummary};

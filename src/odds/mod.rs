//! Likelihood model.
//!
//! [`get_odds`] estimates the chance of obtaining a seat in a section from
//! its capacity and demand figures, pooling interchangeable alternates.
//! [`OddsSummary`] aggregates member odds per schedule (mean and population
//! standard deviation) and `Schedule::odds_grid` lays them out for display.

mod model;
mod summary;

pub use model::get_odds;
pub use summary::{rank_by_odds, OddsSummary};

//! Schedule-level odds aggregation.

use std::cmp::Ordering;

use super::model::get_odds;
use crate::grid::{Cell, Grid};
use crate::schedule::Schedule;

/// Odds of every member plus their mean and population standard deviation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OddsSummary {
    /// `(member name, odds)` in course order.
    pub members: Vec<(String, f64)>,
    pub mean: f64,
    /// Population standard deviation (divides by `n`).
    pub std_dev: f64,
}

impl OddsSummary {
    /// Summarizes labeled odds. An empty input yields zero mean and spread.
    pub fn from_members(members: Vec<(String, f64)>) -> Self {
        let n = members.len();
        if n == 0 {
            return Self {
                members,
                mean: 0.0,
                std_dev: 0.0,
            };
        }
        let mean = members.iter().map(|(_, p)| p).sum::<f64>() / n as f64;
        let variance = members
            .iter()
            .map(|(_, p)| (p - mean) * (p - mean))
            .sum::<f64>()
            / n as f64;
        Self {
            members,
            mean,
            std_dev: variance.sqrt(),
        }
    }
}

fn percent(p: f64) -> String {
    format!("{:.2}%", p * 100.0)
}

impl Schedule {
    /// Seat odds of every member and their aggregate.
    pub fn odds(&self) -> OddsSummary {
        OddsSummary::from_members(
            self.members()
                .iter()
                .map(|s| (s.to_string(), get_odds(s)))
                .collect(),
        )
    }

    /// Row-labeled odds table: one row per member, then `Mean` and
    /// `Std. Dev.`.
    pub fn odds_grid(&self) -> Grid {
        let summary = self.odds();
        let mut grid = Grid {
            corner: "Class".into(),
            columns: vec!["Odds".into()],
            rows: Vec::with_capacity(summary.members.len() + 2),
            cells: Vec::with_capacity(summary.members.len() + 2),
        };

        let rows = summary
            .members
            .iter()
            .map(|(name, p)| (name.clone(), *p, "odds"))
            .chain([
                ("Mean".to_string(), summary.mean, "summary"),
                ("Std. Dev.".to_string(), summary.std_dev, "summary"),
            ]);
        for (row, (label, value, hint)) in rows.enumerate() {
            grid.rows.push(label);
            grid.cells.push(Cell {
                row,
                column: 0,
                row_span: 1,
                content: percent(value),
                class_hint: hint.into(),
                style: None,
            });
        }
        grid
    }
}

/// Orders schedules best first: higher mean odds, then lower spread, then
/// identity so ties are reproducible.
pub fn rank_by_odds(schedules: &mut [Schedule]) {
    let mut keyed: Vec<(f64, f64, Schedule)> = schedules
        .iter()
        .map(|s| {
            let o = s.odds();
            (o.mean, o.std_dev, s.clone())
        })
        .collect();
    keyed.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(Ordering::Equal)
            .then(a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
            .then_with(|| a.2.id().cmp(b.2.id()))
    });
    for (slot, (_, _, s)) in schedules.iter_mut().zip(keyed) {
        *slot = s;
    }
}

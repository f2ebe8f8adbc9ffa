//! Planning results.

use std::sync::Arc;

use crate::heatmap::Heatmap;
use crate::odds::rank_by_odds;
use crate::schedule::{enumerate, enumerate_eager, EnumerationMode, Schedule, Schedules};
use crate::section::Section;

use super::pagination::Pagination;

/// Overview of a planning request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanSummary {
    /// Catalog names of the courses that yielded candidates, in group order.
    pub matched: Vec<String>,
    /// Queries with no matching course or no section passing their filter.
    pub unmatched: Vec<String>,
    /// Matched courses that count toward units.
    pub regular: Vec<String>,
    /// Matched non-credit courses.
    pub extra: Vec<String>,
    /// Credit units of one representative section per regular course.
    pub units: u32,
    /// Size of the full product before conflict filtering.
    pub possible: usize,
}

/// Outcome of [`Planner::plan`](super::Planner::plan).
///
/// Owns the per-course candidate groups; schedules are enumerated from them
/// on request, so a lazy plan costs nothing until iterated.
#[derive(Debug, Clone)]
pub struct Plan {
    pub(crate) summary: PlanSummary,
    pub(crate) groups: Vec<Vec<Arc<Section>>>,
    pub(crate) heatmap: Heatmap,
    pub(crate) mode: EnumerationMode,
    pub(crate) parallel: bool,
    pub(crate) pagination: Pagination,
}

impl Plan {
    pub fn summary(&self) -> &PlanSummary {
        &self.summary
    }

    /// One candidate list per matched course, in summary order.
    pub fn groups(&self) -> &[Vec<Arc<Section>>] {
        &self.groups
    }

    /// Unfiltered density of every candidate.
    pub fn heatmap(&self) -> &Heatmap {
        &self.heatmap
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn mode(&self) -> EnumerationMode {
        self.mode
    }

    /// Whether eager enumeration runs on the rayon pool.
    pub fn is_parallel(&self) -> bool {
        self.parallel && cfg!(feature = "parallel")
    }

    /// Conflict-free schedules in product order.
    ///
    /// Eager plans validate the whole product here (on the rayon pool when
    /// configured); lazy plans validate as the iterator advances.
    pub fn schedules(&self) -> Schedules<'_> {
        match self.mode {
            EnumerationMode::Eager => Schedules::Eager(self.eager().into_iter()),
            EnumerationMode::Lazy => enumerate(&self.groups, EnumerationMode::Lazy),
        }
    }

    /// Schedules on the 1-based page `page_number`.
    ///
    /// Enumeration stops once the page is filled.
    pub fn page(&self, page_number: usize) -> Vec<Schedule> {
        if page_number == 0 {
            return Vec::new();
        }
        let size = self.pagination.page_size.max(1);
        self.schedules()
            .skip((page_number - 1).saturating_mul(size))
            .take(size)
            .collect()
    }

    /// Every schedule, best odds first.
    pub fn ranked(&self) -> Vec<Schedule> {
        let mut all: Vec<Schedule> = self.schedules().collect();
        rank_by_odds(&mut all);
        all
    }

    #[cfg(feature = "parallel")]
    fn eager(&self) -> Vec<Schedule> {
        if self.is_parallel() {
            crate::schedule::enumerate_parallel(&self.groups)
        } else {
            enumerate_eager(&self.groups)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn eager(&self) -> Vec<Schedule> {
        enumerate_eager(&self.groups)
    }
}

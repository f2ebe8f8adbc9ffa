//! Combination enumeration.
//!
//! # Algorithm
//!
//! 1. Walk the Cartesian product of the per-course candidate lists with an
//!    index odometer; the last course varies fastest
//! 2. Validate each pick with [`Schedule::try_new`]
//! 3. Keep the schedule or skip the conflict
//!
//! There is no pruning across partial picks: the full product is visited.
//! Candidate counts per course are small (single digits to low tens), so
//! this stays cheap and keeps every form's output order trivially equal.

use std::sync::Arc;

use tracing::{debug, trace};

use super::types::Schedule;
use crate::section::Section;

/// Selects between materializing every schedule and producing them on
/// demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnumerationMode {
    /// Build the complete list up front.
    #[default]
    Eager,
    /// Yield one schedule at a time.
    Lazy,
}

/// Size of the full Cartesian product, saturating at `usize::MAX`.
///
/// No courses, or any course without candidates, gives 0.
pub fn product_size(groups: &[Vec<Arc<Section>>]) -> usize {
    if groups.is_empty() {
        return 0;
    }
    groups
        .iter()
        .fold(1usize, |acc, g| acc.saturating_mul(g.len()))
}

/// Lazy walk over the product, yielding only conflict-free picks.
///
/// Holds one index per course and nothing else; dropping it early is all
/// the cancellation needed.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    groups: &'a [Vec<Arc<Section>>],
    odometer: Vec<usize>,
    exhausted: bool,
    visited: usize,
    rejected: usize,
}

impl<'a> Combinations<'a> {
    pub fn new(groups: &'a [Vec<Arc<Section>>]) -> Self {
        let exhausted = groups.is_empty() || groups.iter().any(|g| g.is_empty());
        Self {
            groups,
            odometer: vec![0; groups.len()],
            exhausted,
            visited: 0,
            rejected: 0,
        }
    }

    /// Combinations examined so far, accepted or not.
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// Combinations rejected as conflicting so far.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    fn current_pick(&self) -> Vec<Arc<Section>> {
        self.odometer
            .iter()
            .zip(self.groups)
            .map(|(&i, g)| Arc::clone(&g[i]))
            .collect()
    }

    fn advance(&mut self) {
        for pos in (0..self.odometer.len()).rev() {
            self.odometer[pos] += 1;
            if self.odometer[pos] < self.groups[pos].len() {
                return;
            }
            self.odometer[pos] = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for Combinations<'_> {
    type Item = Schedule;

    fn next(&mut self) -> Option<Schedule> {
        while !self.exhausted {
            let pick = self.current_pick();
            self.advance();
            self.visited += 1;
            match Schedule::try_new(pick) {
                Ok(schedule) => return Some(schedule),
                Err(conflict) => {
                    self.rejected += 1;
                    trace!(%conflict, "combination rejected");
                }
            }
        }
        None
    }
}

/// Output of [`enumerate`]: either a materialized list or a lazy walk,
/// yielding the same sequence.
#[derive(Debug)]
pub enum Schedules<'a> {
    Eager(std::vec::IntoIter<Schedule>),
    Lazy(Combinations<'a>),
}

impl Iterator for Schedules<'_> {
    type Item = Schedule;

    fn next(&mut self) -> Option<Schedule> {
        match self {
            Schedules::Eager(it) => it.next(),
            Schedules::Lazy(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Schedules::Eager(it) => it.size_hint(),
            Schedules::Lazy(it) => it.size_hint(),
        }
    }
}

/// Enumerates every conflict-free schedule in product order.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_enroll::schedule::{enumerate, EnumerationMode};
/// use u_enroll::section::{EnrollmentStats, Section};
/// use u_enroll::time::{Interval, Weekday};
///
/// let at = |label: &str, day, s, e| {
///     Arc::new(
///         Section::new(0, "X", label, 3, EnrollmentStats::default())
///             .with_meeting(day, Interval::from_hm(s, e).unwrap())
///             .unwrap(),
///     )
/// };
/// let groups = vec![
///     vec![at("A", Weekday::Mon, (9, 0), (10, 0)), at("B", Weekday::Mon, (10, 0), (11, 0))],
///     vec![at("C", Weekday::Mon, (9, 30), (10, 30)), at("D", Weekday::Tue, (9, 0), (10, 0))],
/// ];
/// let found: Vec<String> = enumerate(&groups, EnumerationMode::Lazy)
///     .map(|s| s.to_string())
///     .collect();
/// assert_eq!(found, vec!["[X A, X D]", "[X B, X D]"]);
/// ```
pub fn enumerate(groups: &[Vec<Arc<Section>>], mode: EnumerationMode) -> Schedules<'_> {
    match mode {
        EnumerationMode::Eager => Schedules::Eager(enumerate_eager(groups).into_iter()),
        EnumerationMode::Lazy => Schedules::Lazy(enumerate_lazy(groups)),
    }
}

/// Lazily enumerates conflict-free schedules.
pub fn enumerate_lazy(groups: &[Vec<Arc<Section>>]) -> Combinations<'_> {
    Combinations::new(groups)
}

/// Materializes every conflict-free schedule.
pub fn enumerate_eager(groups: &[Vec<Arc<Section>>]) -> Vec<Schedule> {
    let mut combos = Combinations::new(groups);
    let schedules: Vec<Schedule> = combos.by_ref().collect();
    debug!(
        courses = groups.len(),
        visited = combos.visited(),
        rejected = combos.rejected(),
        accepted = schedules.len(),
        "enumerated schedules"
    );
    schedules
}

/// Materializes every conflict-free schedule, validating partitions of the
/// product on the rayon pool.
///
/// Each flat product index is decoded independently, so the output order
/// matches [`enumerate_eager`].
#[cfg(feature = "parallel")]
pub fn enumerate_parallel(groups: &[Vec<Arc<Section>>]) -> Vec<Schedule> {
    use rayon::prelude::*;

    let total = product_size(groups);
    let schedules: Vec<Schedule> = (0..total)
        .into_par_iter()
        .filter_map(|flat| Schedule::try_new(pick_at(groups, flat)).ok())
        .collect();
    debug!(
        courses = groups.len(),
        visited = total,
        accepted = schedules.len(),
        "enumerated schedules in parallel"
    );
    schedules
}

/// Pick at a flat product index, last course fastest.
#[cfg(feature = "parallel")]
fn pick_at(groups: &[Vec<Arc<Section>>], mut flat: usize) -> Vec<Arc<Section>> {
    let mut pick: Vec<Arc<Section>> = Vec::with_capacity(groups.len());
    for g in groups.iter().rev() {
        pick.push(Arc::clone(&g[flat % g.len()]));
        flat /= g.len();
    }
    pick.reverse();
    pick
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::EnrollmentStats;
    use crate::time::{Interval, Weekday};
    use proptest::prelude::*;

    fn sec(label: &str, day: Weekday, s: (u8, u8), e: (u8, u8)) -> Arc<Section> {
        Arc::new(
            Section::new(0, "X", label, 3, EnrollmentStats::default())
                .with_meeting(day, Interval::from_hm(s, e).unwrap())
                .unwrap(),
        )
    }

    fn labels(schedules: impl IntoIterator<Item = Schedule>) -> Vec<Vec<String>> {
        schedules
            .into_iter()
            .map(|s| s.members().iter().map(|m| m.label().to_string()).collect())
            .collect()
    }

    fn scenario() -> Vec<Vec<Arc<Section>>> {
        vec![
            vec![
                sec("A", Weekday::Mon, (9, 0), (10, 0)),
                sec("B", Weekday::Mon, (10, 0), (11, 0)),
            ],
            vec![
                sec("C", Weekday::Mon, (9, 30), (10, 30)),
                sec("D", Weekday::Tue, (9, 0), (10, 0)),
            ],
        ]
    }

    #[test]
    fn test_concrete_scenario() {
        let groups = scenario();
        let found = labels(enumerate_eager(&groups));
        assert_eq!(found, vec![vec!["A", "D"], vec!["B", "D"]]);
    }

    #[test]
    fn test_one_conflicting_pair_drops_one() {
        let groups = vec![
            vec![
                sec("A", Weekday::Mon, (9, 0), (10, 0)),
                sec("B", Weekday::Wed, (9, 0), (10, 0)),
            ],
            vec![
                sec("C", Weekday::Mon, (9, 30), (10, 30)),
                sec("D", Weekday::Tue, (9, 0), (10, 0)),
            ],
        ];
        let first = labels(enumerate_eager(&groups));
        let second = labels(enumerate_eager(&groups));
        assert_eq!(first.len(), 3);
        assert_eq!(first, vec![vec!["A", "D"], vec!["B", "C"], vec!["B", "D"]]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_last_course_varies_fastest() {
        let groups = vec![
            vec![
                sec("A1", Weekday::Mon, (9, 0), (10, 0)),
                sec("A2", Weekday::Mon, (10, 0), (11, 0)),
            ],
            vec![
                sec("B1", Weekday::Tue, (9, 0), (10, 0)),
                sec("B2", Weekday::Tue, (10, 0), (11, 0)),
                sec("B3", Weekday::Tue, (11, 0), (12, 0)),
            ],
        ];
        let found = labels(enumerate_lazy(&groups));
        assert_eq!(
            found,
            vec![
                vec!["A1", "B1"],
                vec!["A1", "B2"],
                vec!["A1", "B3"],
                vec!["A2", "B1"],
                vec!["A2", "B2"],
                vec!["A2", "B3"],
            ]
        );
        assert_eq!(product_size(&groups), 6);
    }

    #[test]
    fn test_empty_inputs() {
        let none: Vec<Vec<Arc<Section>>> = Vec::new();
        assert_eq!(enumerate_eager(&none).len(), 0);
        assert_eq!(product_size(&none), 0);

        let with_empty = vec![vec![sec("A", Weekday::Mon, (9, 0), (10, 0))], Vec::new()];
        assert_eq!(enumerate_lazy(&with_empty).count(), 0);
        assert_eq!(product_size(&with_empty), 0);
    }

    #[test]
    fn test_lazy_short_circuit_and_counters() {
        let groups = scenario();
        let mut it = enumerate_lazy(&groups);
        let first = it.next().unwrap();
        assert_eq!(first.members()[1].label(), "D");
        // (A, C) rejected, (A, D) accepted.
        assert_eq!(it.visited(), 2);
        assert_eq!(it.rejected(), 1);
    }

    #[test]
    fn test_mode_switch_same_sequence() {
        let groups = scenario();
        let eager = labels(enumerate(&groups, EnumerationMode::Eager));
        let lazy = labels(enumerate(&groups, EnumerationMode::Lazy));
        assert_eq!(eager, lazy);
    }

    #[test]
    fn test_members_are_shared() {
        let groups = scenario();
        let all = enumerate_eager(&groups);
        assert!(Arc::ptr_eq(&all[0].members()[1], &all[1].members()[1]));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_eager() {
        let groups = scenario();
        assert_eq!(enumerate_parallel(&groups), enumerate_eager(&groups));
    }

    fn random_groups() -> impl Strategy<Value = Vec<Vec<(u8, u8, u8)>>> {
        // (day index, start hour, length in hours)
        prop::collection::vec(
            prop::collection::vec((0u8..6, 7u8..18, 1u8..4), 1..5),
            1..4,
        )
    }

    fn build(raw: &[Vec<(u8, u8, u8)>]) -> Vec<Vec<Arc<Section>>> {
        raw.iter()
            .enumerate()
            .map(|(c, g)| {
                g.iter()
                    .enumerate()
                    .map(|(i, &(d, h, len))| {
                        let day = Weekday::from_index(d as usize).unwrap();
                        sec(&format!("{c}-{i}"), day, (h, 0), (h + len, 0))
                    })
                    .collect()
            })
            .collect()
    }

    proptest! {
        #[test]
        fn prop_lazy_eager_equivalent(raw in random_groups()) {
            let groups = build(&raw);
            let eager = enumerate_eager(&groups);
            let lazy: Vec<Schedule> = enumerate_lazy(&groups).collect();
            prop_assert_eq!(&eager, &lazy);
            prop_assert!(eager.len() <= product_size(&groups));
        }

        #[test]
        fn prop_every_result_is_pairwise_disjoint(raw in random_groups()) {
            let groups = build(&raw);
            for s in enumerate_lazy(&groups) {
                let m = s.members();
                for i in 0..m.len() {
                    for j in (i + 1)..m.len() {
                        for (da, ia) in m[i].meeting_slots() {
                            for (db, ib) in m[j].meeting_slots() {
                                prop_assert!(da != db || !ia.overlaps(&ib));
                            }
                        }
                    }
                }
            }
        }
    }
}

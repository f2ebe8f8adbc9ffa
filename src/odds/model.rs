//! Per-section seat probability.

use crate::section::Section;

/// Probability of getting a seat in `section` or any of its similar
/// alternates.
///
/// Sums `available` and `demand` over the section itself and every
/// alternate reporting at least one available slot. Alternates with zero
/// available slots contribute neither capacity nor demand.
///
/// - no capacity at all → `0.0`
/// - capacity but no demand → `1.0`
/// - otherwise `available / demand`, capped at `1.0`
///
/// # Examples
///
/// ```
/// use u_enroll::odds::get_odds;
/// use u_enroll::section::{EnrollmentStats, Section};
///
/// let s = Section::new(1, "CS 11", "A", 3, EnrollmentStats::new(10, 40));
/// assert!((get_odds(&s) - 0.25).abs() < 1e-12);
/// ```
pub fn get_odds(section: &Section) -> f64 {
    let own = section.stats();
    let (available, demand) = section
        .similar()
        .iter()
        .map(|s| s.stats())
        .filter(|st| st.available > 0)
        .fold(
            (own.available as u64, own.demand as u64),
            |(a, d), st| (a + st.available as u64, d + st.demand as u64),
        );

    if available == 0 {
        0.0
    } else if demand == 0 {
        1.0
    } else {
        (available as f64 / demand as f64).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{merge_similar, EnrollmentStats};
    use crate::time::{Interval, Weekday};
    use proptest::prelude::*;

    fn bare(available: u32, demand: u32) -> Section {
        Section::new(0, "CS 11", "A", 3, EnrollmentStats::new(available, demand))
    }

    fn with_alternates(stats: &[(u32, u32)]) -> Section {
        let slot = Interval::from_hm((9, 0), (10, 0)).unwrap();
        let sections = stats
            .iter()
            .enumerate()
            .map(|(i, &(a, d))| {
                Section::new(i as u32, "CS 11", format!("S{i}"), 3, EnrollmentStats::new(a, d))
                    .with_meeting(Weekday::Mon, slot)
                    .unwrap()
            })
            .collect();
        let mut merged = merge_similar(sections);
        assert_eq!(merged.len(), 1);
        merged.remove(0)
    }

    #[test]
    fn test_edge_cases() {
        assert_eq!(get_odds(&bare(0, 5)), 0.0);
        assert_eq!(get_odds(&bare(5, 0)), 1.0);
        assert_eq!(get_odds(&bare(10, 5)), 1.0);
        assert_eq!(get_odds(&bare(0, 0)), 0.0);
    }

    #[test]
    fn test_reserved_does_not_count() {
        let s = Section::new(
            0,
            "Chem 16",
            "L1",
            1,
            EnrollmentStats::new(4, 16).with_reserved(10),
        );
        assert!((get_odds(&s) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_alternates_pool_capacity() {
        // (5 + 5) / (20 + 20)
        let s = with_alternates(&[(5, 20), (5, 20)]);
        assert!((get_odds(&s) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_zero_available_alternate_excluded() {
        // The second alternate's demand of 100 is ignored.
        let s = with_alternates(&[(5, 20), (0, 100), (5, 20)]);
        assert!((get_odds(&s) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_parent_without_capacity_uses_alternates() {
        // The parent is always summed, even at zero available.
        let s = with_alternates(&[(0, 10), (5, 10)]);
        assert!((get_odds(&s) - 0.25).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_odds_bounded(stats in prop::collection::vec((0u32..500, 0u32..500), 1..6)) {
            let p = get_odds(&with_alternates(&stats));
            prop_assert!((0.0..=1.0).contains(&p));
        }
    }
}

//! Similarity merge.
//!
//! Sections of the same course that meet at exactly the same times are
//! interchangeable for scheduling. Folding them into one parent keeps the
//! combination count down while preserving every section's seat figures
//! for the likelihood model.

use tracing::debug;

use super::types::Section;

/// Folds sections with identical weekly schedules into their first
/// occurrence.
///
/// Only sections of the same course (case-insensitive name) are merged.
/// Parents keep input order; alternates are appended in input order. The
/// scan compares every incoming section against every parent so far, which
/// is quadratic but cheap at per-course section counts.
///
/// # Examples
///
/// ```
/// use u_enroll::section::{merge_similar, EnrollmentStats, Section};
/// use u_enroll::time::{Interval, Weekday};
///
/// let slot = Interval::from_hm((9, 0), (10, 0)).unwrap();
/// let mk = |label: &str| {
///     Section::new(1, "CS 11", label, 3, EnrollmentStats::new(5, 10))
///         .with_meeting(Weekday::Mon, slot)
///         .unwrap()
/// };
/// let merged = merge_similar(vec![mk("A"), mk("B")]);
/// assert_eq!(merged.len(), 1);
/// assert_eq!(merged[0].similar()[0].label(), "B");
/// ```
pub fn merge_similar(sections: Vec<Section>) -> Vec<Section> {
    let input_len = sections.len();
    let mut parents: Vec<Section> = Vec::with_capacity(input_len);

    for section in sections {
        let parent = parents.iter_mut().find(|p| {
            p.name().eq_ignore_ascii_case(section.name()) && p.same_schedule(&section)
        });
        match parent {
            Some(p) => p.push_similar(section),
            None => parents.push(section),
        }
    }

    debug!(
        input = input_len,
        merged = parents.len(),
        "folded similar sections"
    );
    parents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::EnrollmentStats;
    use crate::time::{Interval, Weekday};

    fn sec(name: &str, label: &str, day: Weekday, s: (u8, u8), e: (u8, u8)) -> Section {
        Section::new(0, name, label, 3, EnrollmentStats::new(5, 10))
            .with_meeting(day, Interval::from_hm(s, e).unwrap())
            .unwrap()
    }

    #[test]
    fn test_merge_identical_schedules() {
        let merged = merge_similar(vec![
            sec("CS 11", "A", Weekday::Mon, (9, 0), (10, 0)),
            sec("CS 11", "B", Weekday::Tue, (9, 0), (10, 0)),
            sec("CS 11", "C", Weekday::Mon, (9, 0), (10, 0)),
            sec("CS 11", "D", Weekday::Mon, (9, 0), (10, 0)),
        ]);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].label(), "A");
        let alt: Vec<&str> = merged[0].similar().iter().map(|s| s.label()).collect();
        assert_eq!(alt, vec!["C", "D"]);
        assert_eq!(merged[1].label(), "B");
        assert!(merged[1].similar().is_empty());
    }

    #[test]
    fn test_merge_keeps_courses_apart() {
        let merged = merge_similar(vec![
            sec("CS 11", "A", Weekday::Mon, (9, 0), (10, 0)),
            sec("Math 17", "A", Weekday::Mon, (9, 0), (10, 0)),
            sec("cs 11", "B", Weekday::Mon, (9, 0), (10, 0)),
        ]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].similar().len(), 1);
        assert_eq!(merged[1].name(), "Math 17");
    }

    #[test]
    fn test_merge_partial_schedule_match_is_distinct() {
        let a = sec("CS 11", "A", Weekday::Mon, (9, 0), (10, 0))
            .with_meeting(Weekday::Wed, Interval::from_hm((9, 0), (10, 0)).unwrap())
            .unwrap();
        let b = sec("CS 11", "B", Weekday::Mon, (9, 0), (10, 0));
        let merged = merge_similar(vec![a, b]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_merge_empty() {
        assert!(merge_similar(Vec::new()).is_empty());
    }
}

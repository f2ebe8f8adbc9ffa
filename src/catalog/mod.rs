//! Record intake and course lookup.
//!
//! A [`Catalog`] turns the raw [`SectionRecord`]s of one term into
//! per-course candidate lists: each record becomes a [`Section`] (malformed
//! ones are dropped and logged), sections of a course with identical
//! schedules are folded together, and courses are kept in first-appearance
//! order. [`CourseQuery`] selects a course and optionally narrows it to some
//! section labels.

mod query;

pub use query::CourseQuery;

use std::sync::Arc;

use tracing::{debug, warn};

use query::collapse_whitespace;

use crate::config::PlannerConfig;
use crate::section::{merge_similar, Section, SectionRecord};

/// Every merged candidate section of one course.
#[derive(Debug, Clone)]
pub struct Course {
    name: String,
    sections: Vec<Arc<Section>>,
}

impl Course {
    /// Course name as first seen, whitespace collapsed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Merged sections in record order.
    pub fn sections(&self) -> &[Arc<Section>] {
        &self.sections
    }
}

/// Per-course candidate sections of one term.
///
/// # Examples
///
/// ```
/// use u_enroll::catalog::{Catalog, CourseQuery};
/// use u_enroll::config::PlannerConfig;
/// use u_enroll::section::{MeetingRecord, SectionRecord};
/// use u_enroll::time::Weekday;
///
/// let record = |code, section: &str, day| SectionRecord {
///     code,
///     name: "CS 11".into(),
///     section: section.into(),
///     credits: 3,
///     meetings: vec![MeetingRecord { days: vec![day], start: (9, 0), end: (10, 0) }],
///     available: 5,
///     reserved: None,
///     demand: 10,
/// };
/// let catalog = Catalog::from_records(
///     &[record(1, "A", Weekday::Mon), record(2, "B", Weekday::Mon), record(3, "C", Weekday::Tue)],
///     &PlannerConfig::default(),
/// );
/// // A and B meet at the same time and fold into one candidate.
/// assert_eq!(catalog.courses()[0].sections().len(), 2);
///
/// let hits = catalog.search(&CourseQuery::parse("cs 11: B").unwrap()).unwrap();
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].label(), "B");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
    dropped: usize,
}

impl Catalog {
    /// Builds the catalog from raw records.
    ///
    /// Records are encoded with the configured reference hour. A record
    /// that cannot become a section is logged at `warn` and skipped; the
    /// rest of the term is still usable.
    pub fn from_records(records: &[SectionRecord], config: &PlannerConfig) -> Self {
        let encoding = config.encoding();
        let mut grouped: Vec<(String, Vec<Section>)> = Vec::new();
        let mut dropped = 0;

        for record in records {
            let section = match Section::from_record(record, &encoding) {
                Ok(s) => s,
                Err(err) => {
                    warn!(code = record.code, %err, "dropping malformed record");
                    dropped += 1;
                    continue;
                }
            };
            let name = section.name().to_string();
            match grouped
                .iter_mut()
                .find(|(n, _)| n.eq_ignore_ascii_case(&name))
            {
                Some((_, sections)) => sections.push(section),
                None => grouped.push((name, vec![section])),
            }
        }

        let courses: Vec<Course> = grouped
            .into_iter()
            .map(|(name, sections)| Course {
                name,
                sections: merge_similar(sections).into_iter().map(Arc::new).collect(),
            })
            .collect();

        debug!(
            records = records.len(),
            dropped,
            courses = courses.len(),
            "built catalog"
        );
        Self { courses, dropped }
    }

    /// Courses in first-appearance order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of records skipped as malformed.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Looks a course up by name, ignoring case and spacing.
    pub fn course(&self, name: &str) -> Option<&Course> {
        let name = collapse_whitespace(name);
        self.courses
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(&name))
    }

    /// Candidate sections matching `query`, or `None` for an unknown course.
    ///
    /// With section filters, each merged section is narrowed to the
    /// accepted labels: the first accepted one becomes the parent and only
    /// accepted alternates stay folded into it. Fully accepted sections are
    /// shared as is. The result may be empty.
    pub fn search(&self, query: &CourseQuery) -> Option<Vec<Arc<Section>>> {
        let course = self.course(&query.course)?;
        Some(
            course
                .sections
                .iter()
                .filter_map(|s| {
                    if s.labels().all(|l| query.accepts(l)) {
                        Some(Arc::clone(s))
                    } else {
                        s.retain_labels(|l| query.accepts(l)).map(Arc::new)
                    }
                })
                .collect(),
        )
    }
}

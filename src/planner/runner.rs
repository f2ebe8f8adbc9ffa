//! One-call planning over a catalog.
//!
//! # Algorithm
//!
//! 1. Coalesce queries naming the same course and sort them
//! 2. Resolve each query against the catalog; empty results are unmatched
//! 3. Classify matched courses as regular or extra and total the units
//! 4. Overlay every candidate into the heatmap
//! 5. Hand the candidate groups to the enumerator on demand

use std::sync::Arc;

use tracing::debug;

use super::pagination::Pagination;
use super::types::{Plan, PlanSummary};
use crate::catalog::{Catalog, CourseQuery};
use crate::config::PlannerConfig;
use crate::error::Result;
use crate::heatmap::Heatmap;
use crate::schedule::product_size;

/// Turns course queries into candidate groups, a summary and a heatmap.
///
/// # Examples
///
/// ```
/// use u_enroll::catalog::{Catalog, CourseQuery};
/// use u_enroll::config::PlannerConfig;
/// use u_enroll::planner::Planner;
/// use u_enroll::section::{MeetingRecord, SectionRecord};
/// use u_enroll::time::Weekday;
///
/// let record = |code, name: &str, section: &str, hour| SectionRecord {
///     code,
///     name: name.into(),
///     section: section.into(),
///     credits: 3,
///     meetings: vec![MeetingRecord {
///         days: vec![Weekday::Mon],
///         start: (hour, 0),
///         end: (hour + 1, 0),
///     }],
///     available: 5,
///     reserved: None,
///     demand: 10,
/// };
/// let config = PlannerConfig::default();
/// let catalog = Catalog::from_records(
///     &[
///         record(1, "CS 11", "A", 9),
///         record(2, "CS 11", "B", 10),
///         record(3, "Math 17", "C", 9),
///     ],
///     &config,
/// );
///
/// let plan = Planner::new(config)
///     .unwrap()
///     .plan(&catalog, [CourseQuery::new("Math 17"), CourseQuery::new("CS 11")]);
/// assert_eq!(plan.summary().matched, vec!["CS 11", "Math 17"]);
/// assert_eq!(plan.summary().possible, 2);
///
/// let found: Vec<String> = plan.schedules().map(|s| s.to_string()).collect();
/// assert_eq!(found, vec!["[CS 11 B, Math 17 C]"]);
/// ```
#[derive(Debug, Clone)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    /// Creates a planner after validating `config`.
    pub fn new(config: PlannerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans the given queries against `catalog`.
    ///
    /// The catalog must have been built with the same reference hour.
    /// Queries naming the same course are combined: their section filters
    /// are joined, and an unfiltered query accepts every section. Groups
    /// follow the sorted query order, so the output does not depend on the
    /// order queries were given in.
    pub fn plan<I>(&self, catalog: &Catalog, queries: I) -> Plan
    where
        I: IntoIterator<Item = CourseQuery>,
    {
        let queries = coalesce(queries);
        let mut summary = PlanSummary::default();
        let mut groups = Vec::with_capacity(queries.len());

        for query in &queries {
            let hit = catalog
                .course(&query.course)
                .zip(catalog.search(query))
                .filter(|(_, candidates)| !candidates.is_empty());
            let Some((course, candidates)) = hit else {
                summary.unmatched.push(query.to_string());
                continue;
            };

            let name = course.name().to_string();
            if self.config.is_extra(&name) {
                summary.extra.push(name.clone());
            } else {
                // Sections of one course carry the same credit value.
                summary.units += candidates[0].credits();
                summary.regular.push(name.clone());
            }
            summary.matched.push(name);
            groups.push(candidates);
        }
        summary.possible = product_size(&groups);

        let heatmap = Heatmap::build_with(
            groups.iter().flatten().map(Arc::as_ref),
            self.config.palette(),
        );

        debug!(
            matched = summary.matched.len(),
            unmatched = summary.unmatched.len(),
            units = summary.units,
            possible = summary.possible,
            "planned request"
        );
        Plan {
            summary,
            groups,
            heatmap,
            mode: self.config.mode,
            parallel: self.config.parallel,
            pagination: Pagination::new(self.config.page_size),
        }
    }
}

/// Merges queries for the same course (case-insensitive) and sorts them.
fn coalesce<I>(queries: I) -> Vec<CourseQuery>
where
    I: IntoIterator<Item = CourseQuery>,
{
    let mut out: Vec<CourseQuery> = Vec::new();
    for query in queries {
        match out
            .iter_mut()
            .find(|q| q.course.eq_ignore_ascii_case(&query.course))
        {
            Some(existing) => {
                if existing.sections.is_empty() || query.sections.is_empty() {
                    existing.sections.clear();
                } else {
                    existing.sections.extend(query.sections);
                    existing.sections.sort();
                    existing.sections.dedup();
                }
            }
            None => out.push(query),
        }
    }
    out.sort();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::EnumerationMode;
    use crate::section::{MeetingRecord, SectionRecord};
    use crate::time::Weekday;

    fn record(
        code: u32,
        name: &str,
        section: &str,
        credits: u32,
        day: Weekday,
        start: u8,
    ) -> SectionRecord {
        SectionRecord {
            code,
            name: name.into(),
            section: section.into(),
            credits,
            meetings: vec![MeetingRecord {
                days: vec![day],
                start: (start, 0),
                end: (start + 1, 0),
            }],
            available: 5,
            reserved: None,
            demand: 10,
        }
    }

    fn catalog(config: &PlannerConfig) -> Catalog {
        Catalog::from_records(
            &[
                record(1, "CS 11", "A", 3, Weekday::Mon, 9),
                record(2, "CS 11", "B", 3, Weekday::Mon, 10),
                record(3, "Math 17", "C", 5, Weekday::Mon, 9),
                record(4, "Math 17", "D", 5, Weekday::Tue, 9),
                record(5, "PE 2", "FDS", 2, Weekday::Sat, 8),
            ],
            config,
        )
    }

    fn query(s: &str) -> CourseQuery {
        CourseQuery::parse(s).unwrap()
    }

    #[test]
    fn test_summary() {
        let config = PlannerConfig::default();
        let plan = Planner::new(config.clone()).unwrap().plan(
            &catalog(&config),
            [query("PE 2"), query("Math 17"), query("Art 1"), query("CS 11: Z")],
        );
        let summary = plan.summary();
        assert_eq!(summary.matched, vec!["Math 17", "PE 2"]);
        assert_eq!(summary.unmatched, vec!["Art 1", "CS 11: Z"]);
        assert_eq!(summary.regular, vec!["Math 17"]);
        assert_eq!(summary.extra, vec!["PE 2"]);
        assert_eq!(summary.units, 5);
        assert_eq!(summary.possible, 2);
    }

    #[test]
    fn test_order_independent() {
        let config = PlannerConfig::default();
        let catalog = catalog(&config);
        let planner = Planner::new(config).unwrap();
        let a = planner.plan(&catalog, [query("CS 11"), query("Math 17")]);
        let b = planner.plan(&catalog, [query("Math 17"), query("CS 11")]);
        assert_eq!(a.summary(), b.summary());
        let sa: Vec<_> = a.schedules().collect();
        let sb: Vec<_> = b.schedules().collect();
        assert_eq!(sa, sb);
        // CS 11 A and Math 17 C collide on Monday 9:00.
        assert_eq!(sa.len(), 3);
    }

    #[test]
    fn test_duplicate_queries_coalesce() {
        let config = PlannerConfig::default();
        let catalog = catalog(&config);
        let planner = Planner::new(config).unwrap();

        let narrowed = planner.plan(&catalog, [query("CS 11: A"), query("cs 11: B")]);
        assert_eq!(narrowed.groups().len(), 1);
        assert_eq!(narrowed.groups()[0].len(), 2);

        let widened = planner.plan(&catalog, [query("CS 11: A"), query("CS 11")]);
        assert_eq!(widened.groups()[0].len(), 2);
    }

    #[test]
    fn test_modes_agree_and_paginate() {
        let config = PlannerConfig::default().with_page_size(2);
        let catalog = catalog(&config);
        let queries = [query("CS 11"), query("Math 17"), query("PE 2")];

        let eager = Planner::new(config.clone()).unwrap().plan(&catalog, queries.clone());
        let lazy = Planner::new(config.with_mode(EnumerationMode::Lazy))
            .unwrap()
            .plan(&catalog, queries);
        let all: Vec<_> = eager.schedules().collect();
        assert_eq!(all, lazy.schedules().collect::<Vec<_>>());

        assert_eq!(all.len(), 3);
        assert_eq!(lazy.page(1), all[..2].to_vec());
        assert_eq!(lazy.page(2), all[2..].to_vec());
        assert!(lazy.page(3).is_empty());
        assert_eq!(eager.pagination().page(&all, 2), &all[2..]);
    }

    #[test]
    fn test_heatmap_covers_all_candidates() {
        let config = PlannerConfig::default();
        let plan = Planner::new(config.clone())
            .unwrap()
            .plan(&catalog(&config), [query("CS 11"), query("Math 17")]);
        let heat = plan.heatmap();
        // CS 11 A and Math 17 C both sit on Monday 9:00.
        assert_eq!(heat.max_count(), 2);
        assert_eq!(heat.count(0, Weekday::Mon), 2);
        assert_eq!(heat.count(0, Weekday::Tue), 1);
    }

    #[test]
    fn test_ranked_prefers_open_sections() {
        let config = PlannerConfig::default();
        let mut records = vec![
            record(1, "CS 11", "A", 3, Weekday::Mon, 9),
            record(2, "CS 11", "B", 3, Weekday::Tue, 9),
        ];
        records[1].available = 10;
        let catalog = Catalog::from_records(&records, &config);
        let plan = Planner::new(config).unwrap().plan(&catalog, [query("CS 11")]);
        let ranked = plan.ranked();
        assert_eq!(ranked[0].members()[0].label(), "B");
    }

    #[test]
    fn test_empty_request() {
        let config = PlannerConfig::default();
        let plan = Planner::new(config.clone())
            .unwrap()
            .plan(&catalog(&config), std::iter::empty());
        assert_eq!(plan.summary().possible, 0);
        assert_eq!(plan.schedules().count(), 0);
        assert_eq!(plan.heatmap().rows(), 0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(Planner::new(PlannerConfig::default().with_page_size(0)).is_err());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let config = PlannerConfig::default();
        let catalog = catalog(&config);
        let queries = [query("CS 11"), query("Math 17"), query("PE 2")];
        let seq = Planner::new(config.clone()).unwrap().plan(&catalog, queries.clone());
        let par = Planner::new(config.with_parallel(true))
            .unwrap()
            .plan(&catalog, queries);
        assert!(par.is_parallel());
        assert_eq!(
            seq.schedules().collect::<Vec<_>>(),
            par.schedules().collect::<Vec<_>>()
        );
    }
}

//! Course queries with optional section filters.

use std::fmt;
use std::str::FromStr;

use crate::error::{EngineError, Result};

/// A desired course, optionally restricted to some section labels.
///
/// Written as `COURSE` or `COURSE: LABEL, LABEL, ...`. Runs of whitespace
/// in the course name collapse to one space so `CS  11` and `CS 11` are the
/// same query.
///
/// # Examples
///
/// ```
/// use u_enroll::catalog::CourseQuery;
///
/// let q = CourseQuery::parse("CS   11: THX, THY").unwrap();
/// assert_eq!(q.course, "CS 11");
/// assert_eq!(q.sections, vec!["THX", "THY"]);
/// assert_eq!(q.to_string(), "CS 11: THX, THY");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CourseQuery {
    pub course: String,
    /// Accepted section labels; empty accepts every section.
    pub sections: Vec<String>,
}

pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl CourseQuery {
    /// Query for every section of `course`.
    pub fn new(course: impl AsRef<str>) -> Self {
        Self {
            course: collapse_whitespace(course.as_ref()),
            sections: Vec::new(),
        }
    }

    /// Restricts the query to the given section labels.
    pub fn with_sections<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.sections = labels
            .into_iter()
            .map(|l| l.as_ref().trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();
        self
    }

    /// Parses `COURSE[: LABEL, ...]`.
    ///
    /// Fails with [`EngineError::InvalidQuery`] when the course part is
    /// blank. Blank labels are skipped.
    pub fn parse(input: &str) -> Result<Self> {
        let (course, filters) = match input.split_once(':') {
            Some((course, filters)) => (course, Some(filters)),
            None => (input, None),
        };
        let query = Self::new(course);
        if query.course.is_empty() {
            return Err(EngineError::InvalidQuery(input.to_string()));
        }
        Ok(match filters {
            Some(f) => query.with_sections(f.split(',')),
            None => query,
        })
    }

    /// Whether `label` passes the section filter.
    pub fn accepts(&self, label: &str) -> bool {
        self.sections.is_empty()
            || self
                .sections
                .iter()
                .any(|s| s.eq_ignore_ascii_case(label))
    }
}

impl FromStr for CourseQuery {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CourseQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.course)?;
        if !self.sections.is_empty() {
            write!(f, ": {}", self.sections.join(", "))?;
        }
        Ok(())
    }
}

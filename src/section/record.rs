//! Raw section records handed over by the parsing layer.

use crate::error::{EngineError, Result};
use crate::time::{Interval, TickEncoding, Time, Weekday};

use super::types::{EnrollmentStats, Section};

/// One meeting line: a set of days sharing one time range.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeetingRecord {
    pub days: Vec<Weekday>,
    /// `(hour, minute)` of the start.
    pub start: (u8, u8),
    /// `(hour, minute)` of the end.
    pub end: (u8, u8),
}

/// A class-section record as produced by the parsing collaborator.
///
/// Records are plain data; [`Section::from_record`] validates them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionRecord {
    pub code: u32,
    pub name: String,
    pub section: String,
    pub credits: u32,
    pub meetings: Vec<MeetingRecord>,
    pub available: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub reserved: Option<u32>,
    pub demand: u32,
}

impl Section {
    /// Builds a section from a raw record.
    ///
    /// Any bad time, empty interval, day-less meeting line or unencodable
    /// range is reported as [`EngineError::MalformedRecord`] naming the
    /// record. A record with no meeting lines is accepted.
    pub fn from_record(record: &SectionRecord, encoding: &TickEncoding) -> Result<Section> {
        let malformed = |reason: String| EngineError::MalformedRecord {
            code: record.code,
            name: record.name.clone(),
            reason,
        };

        if record.name.trim().is_empty() {
            return Err(malformed("missing course name".into()));
        }

        let stats = EnrollmentStats {
            available: record.available,
            reserved: record.reserved,
            demand: record.demand,
        };
        let name = record.name.split_whitespace().collect::<Vec<_>>().join(" ");
        let mut section = Section::new(
            record.code,
            name,
            record.section.trim(),
            record.credits,
            stats,
        );

        for meeting in &record.meetings {
            if meeting.days.is_empty() {
                return Err(malformed("meeting without days".into()));
            }
            let interval = Time::new(meeting.start.0, meeting.start.1)
                .and_then(|start| Interval::new(start, Time::new(meeting.end.0, meeting.end.1)?))
                .map_err(|e| malformed(e.to_string()))?;
            for &day in &meeting.days {
                section = section
                    .with_meeting_in(day, interval, encoding)
                    .map_err(|e| malformed(e.to_string()))?;
            }
        }

        Ok(section)
    }
}

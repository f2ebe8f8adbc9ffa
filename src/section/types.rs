//! Class-section entity.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::Result;
use crate::time::{Interval, TickEncoding, WeekMask, Weekday};

/// Seat statistics reported for one section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnrollmentStats {
    /// Open slots.
    pub available: u32,
    /// Slots held for a linked lecture, when the registrar reports them.
    pub reserved: Option<u32>,
    /// Students vying for the open slots.
    pub demand: u32,
}

impl EnrollmentStats {
    pub fn new(available: u32, demand: u32) -> Self {
        Self {
            available,
            reserved: None,
            demand,
        }
    }

    /// Sets the reserved-slot figure.
    pub fn with_reserved(mut self, reserved: u32) -> Self {
        self.reserved = Some(reserved);
        self
    }
}

/// One offered class section.
///
/// A section knows its weekly meetings and mirrors them in a [`WeekMask`]
/// so conflict tests never walk interval lists. Sections with an identical
/// weekly schedule can be folded together (see
/// [`merge_similar`](super::merge_similar)); the folded alternates are kept
/// in [`similar`](Section::similar) for capacity accounting.
///
/// A section with no meetings (thesis, by-arrangement classes) is valid: it
/// never conflicts and occupies no grid cell.
///
/// # Examples
///
/// ```
/// use u_enroll::section::{EnrollmentStats, Section};
/// use u_enroll::time::{Interval, Weekday};
///
/// let s = Section::new(101, "Math 17", "WFX", 5, EnrollmentStats::new(10, 40))
///     .with_meeting(Weekday::Wed, Interval::from_hm((9, 0), (10, 30)).unwrap())
///     .unwrap();
/// assert_eq!(s.to_string(), "Math 17 WFX");
/// assert!(!s.mask().day(Weekday::Wed).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    code: u32,
    name: String,
    label: String,
    credits: u32,
    meetings: BTreeMap<Weekday, Vec<Interval>>,
    mask: WeekMask,
    stats: EnrollmentStats,
    similar: Vec<Section>,
}

impl Section {
    /// Creates a section with no meetings yet.
    pub fn new(
        code: u32,
        name: impl Into<String>,
        label: impl Into<String>,
        credits: u32,
        stats: EnrollmentStats,
    ) -> Self {
        Self {
            code,
            name: name.into(),
            label: label.into(),
            credits,
            meetings: BTreeMap::new(),
            mask: WeekMask::new(),
            stats,
            similar: Vec::new(),
        }
    }

    /// Adds a meeting encoded against the default 7:00 reference hour.
    pub fn with_meeting(self, day: Weekday, interval: Interval) -> Result<Self> {
        self.with_meeting_in(day, interval, &TickEncoding::default())
    }

    /// Adds a meeting encoded with `encoding`.
    ///
    /// Every section that is ever compared against this one must use the
    /// same encoding.
    pub fn with_meeting_in(
        mut self,
        day: Weekday,
        interval: Interval,
        encoding: &TickEncoding,
    ) -> Result<Self> {
        let bits = encoding.encode(&interval)?;
        self.mask.insert(day, bits);
        let slots = self.meetings.entry(day).or_default();
        slots.push(interval);
        slots.sort();
        slots.dedup();
        Ok(self)
    }

    /// Registrar class code.
    pub fn code(&self) -> u32 {
        self.code
    }

    /// Course name, e.g. `CS 11`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Section label, e.g. `THX`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Credit units.
    pub fn credits(&self) -> u32 {
        self.credits
    }

    /// Weekly meetings, days in column order, intervals sorted per day.
    pub fn meetings(&self) -> &BTreeMap<Weekday, Vec<Interval>> {
        &self.meetings
    }

    /// Iterates `(day, interval)` pairs in day then time order.
    pub fn meeting_slots(&self) -> impl Iterator<Item = (Weekday, Interval)> + '_ {
        self.meetings
            .iter()
            .flat_map(|(&day, ivs)| ivs.iter().map(move |&iv| (day, iv)))
    }

    /// Encoded weekly tick pattern.
    pub fn mask(&self) -> &WeekMask {
        &self.mask
    }

    /// Own seat statistics (excluding similar sections).
    pub fn stats(&self) -> &EnrollmentStats {
        &self.stats
    }

    /// Interchangeable alternates folded into this section.
    pub fn similar(&self) -> &[Section] {
        &self.similar
    }

    /// Labels of this section followed by those of its alternates.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.label.as_str()).chain(self.similar.iter().map(|s| s.label()))
    }

    /// Whether both sections meet at exactly the same times.
    pub fn same_schedule(&self, other: &Section) -> bool {
        self.meetings == other.meetings
    }

    /// Copy keeping only the folded sections whose label passes `keep`.
    ///
    /// The first kept section (this one, then alternates in order) becomes
    /// the parent of the rest. `None` when no label passes.
    pub fn retain_labels<F>(&self, keep: F) -> Option<Section>
    where
        F: Fn(&str) -> bool,
    {
        let mut own = self.clone();
        own.similar.clear();
        let mut kept = std::iter::once(own)
            .chain(self.similar.iter().cloned())
            .filter(|s| keep(s.label()));
        let mut parent = kept.next()?;
        parent.similar.extend(kept);
        Some(parent)
    }

    pub(crate) fn push_similar(&mut self, mut other: Section) {
        let nested = std::mem::take(&mut other.similar);
        self.similar.push(other);
        self.similar.extend(nested);
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.label)
    }
}

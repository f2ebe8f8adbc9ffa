//! Bit-mask conflict detection.

use crate::error::ScheduleConflict;
use crate::section::Section;
use crate::time::WeekMask;

/// Running per-day occupancy used to validate a candidate set.
///
/// Each placement tests all six day masks against the running masks and
/// only ORs them in when no day intersects, so a rejected section leaves
/// the detector unchanged.
///
/// # Examples
///
/// ```
/// use u_enroll::schedule::ConflictDetector;
/// use u_enroll::section::{EnrollmentStats, Section};
/// use u_enroll::time::{Interval, Weekday};
///
/// let at = |s, e| {
///     Section::new(0, "X", "A", 3, EnrollmentStats::default())
///         .with_meeting(Weekday::Mon, Interval::from_hm(s, e).unwrap())
///         .unwrap()
/// };
/// let a = at((9, 0), (10, 0));
/// let b = at((9, 30), (10, 30));
/// let c = at((10, 0), (11, 0));
/// assert!(ConflictDetector::check([&a, &b]).is_err());
/// assert!(ConflictDetector::check([&a, &c]).is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConflictDetector {
    running: WeekMask,
    placed: usize,
}

impl ConflictDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `section` if it overlaps nothing placed so far.
    pub fn try_place(&mut self, section: &Section) -> Result<(), ScheduleConflict> {
        if let Some(day) = self.running.conflict_day(section.mask()) {
            return Err(ScheduleConflict {
                member: self.placed,
                day,
            });
        }
        self.running = self.running.union(section.mask());
        self.placed += 1;
        Ok(())
    }

    /// Union of everything placed.
    pub fn occupied(&self) -> &WeekMask {
        &self.running
    }

    /// Number of sections placed.
    pub fn placed(&self) -> usize {
        self.placed
    }

    /// Validates a whole candidate set, stopping at the first conflict.
    ///
    /// Returns the combined occupancy on success.
    pub fn check<'a, I>(sections: I) -> Result<WeekMask, ScheduleConflict>
    where
        I: IntoIterator<Item = &'a Section>,
    {
        let mut detector = Self::new();
        for section in sections {
            detector.try_place(section)?;
        }
        Ok(detector.running)
    }
}

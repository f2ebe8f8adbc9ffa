//! Validated schedule.

use std::fmt;
use std::sync::{Arc, OnceLock};

use sha2::{Digest, Sha256};

use super::conflict::ConflictDetector;
use crate::error::ScheduleConflict;
use crate::grid::{row_range, time_boundaries, Cell, Grid};
use crate::section::Section;
use crate::time::WeekMask;

/// One registrable combination: exactly one section per desired course,
/// with no two meetings overlapping.
///
/// A `Schedule` only exists once the whole member set has been validated;
/// there is no way to append to or remove from it afterwards. Members are
/// shared with every other schedule that picked them.
#[derive(Debug, Clone)]
pub struct Schedule {
    members: Vec<Arc<Section>>,
    occupied: WeekMask,
    id: OnceLock<String>,
}

impl Schedule {
    /// Validates `members` as a whole and builds the schedule.
    pub fn try_new(members: Vec<Arc<Section>>) -> Result<Self, ScheduleConflict> {
        let occupied = ConflictDetector::check(members.iter().map(Arc::as_ref))?;
        Ok(Self {
            members,
            occupied,
            id: OnceLock::new(),
        })
    }

    /// Members in course order.
    pub fn members(&self) -> &[Arc<Section>] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Combined weekly occupancy.
    pub fn occupied(&self) -> &WeekMask {
        &self.occupied
    }

    /// Sum of member credit units.
    pub fn total_credits(&self) -> u32 {
        self.members.iter().map(|s| s.credits()).sum()
    }

    /// Stable identity: hex SHA-256 of the sorted member names.
    ///
    /// Two schedules holding the same sections in a different course order
    /// share an identity.
    pub fn id(&self) -> &str {
        self.id.get_or_init(|| {
            let mut names: Vec<String> = self.members.iter().map(|s| s.to_string()).collect();
            names.sort();
            let mut hasher = Sha256::new();
            hasher.update(names.join("\n").as_bytes());
            hex::encode(hasher.finalize())
        })
    }

    /// Weekly timetable of the members.
    ///
    /// Rows run between consecutive meeting endpoints. Each meeting is one
    /// cell anchored at its starting row and spanning the rows it covers.
    pub fn grid(&self) -> Grid {
        let boundaries =
            time_boundaries(self.members.iter().flat_map(|s| s.meeting_slots().map(|(_, iv)| iv)));
        let mut grid = Grid::weekly(&boundaries);

        for section in &self.members {
            for (day, interval) in section.meeting_slots() {
                // Endpoints always come from `boundaries`.
                if let Some((first, last)) = row_range(&boundaries, &interval) {
                    grid.cells.push(Cell {
                        row: first,
                        column: day.index(),
                        row_span: last - first,
                        content: section.to_string(),
                        class_hint: "subject".into(),
                        style: None,
                    });
                }
            }
        }

        grid.sort_cells();
        grid
    }
}

impl PartialEq for Schedule {
    fn eq(&self, other: &Self) -> bool {
        self.members.len() == other.members.len()
            && self
                .members
                .iter()
                .zip(&other.members)
                .all(|(a, b)| Arc::ptr_eq(a, b) || a == b)
    }
}

impl Eq for Schedule {}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, s) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{s}")?;
        }
        f.write_str("]")
    }
}

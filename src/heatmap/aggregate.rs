//! Occupancy overlay of every candidate section.

use tracing::debug;

use super::color::HeatPalette;
use crate::grid::{row_range, time_boundaries, Cell, CellStyle, Grid};
use crate::section::Section;
use crate::time::{Interval, Time, Weekday};

/// Per-cell count of candidate meetings, across every course, without
/// conflict filtering.
///
/// Rows run between consecutive distinct meeting endpoints, so every
/// meeting covers a whole number of rows. Similar alternates folded into a
/// section are counted too: each is a separate offering at that time.
///
/// # Examples
///
/// ```
/// use u_enroll::heatmap::Heatmap;
/// use u_enroll::section::{EnrollmentStats, Section};
/// use u_enroll::time::{Interval, Weekday};
///
/// let at = |s, e| {
///     Section::new(0, "X", "A", 3, EnrollmentStats::default())
///         .with_meeting(Weekday::Mon, Interval::from_hm(s, e).unwrap())
///         .unwrap()
/// };
/// let sections = [at((9, 0), (11, 0)), at((10, 0), (11, 0))];
/// let heat = Heatmap::build(&sections);
/// assert_eq!(heat.max_count(), 2);
/// assert_eq!(heat.load(1, Weekday::Mon), Some(1.0));
/// assert_eq!(heat.load(0, Weekday::Mon), Some(0.5));
/// assert_eq!(heat.load(0, Weekday::Tue), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    boundaries: Vec<Time>,
    counts: Vec<[u32; Weekday::COUNT]>,
    max_count: u32,
    palette: HeatPalette,
}

impl Heatmap {
    /// Overlays `sections` with the default palette.
    pub fn build<'a, I>(sections: I) -> Self
    where
        I: IntoIterator<Item = &'a Section>,
    {
        Self::build_with(sections, HeatPalette::default())
    }

    /// Overlays `sections`, coloring with `palette`.
    pub fn build_with<'a, I>(sections: I, palette: HeatPalette) -> Self
    where
        I: IntoIterator<Item = &'a Section>,
    {
        let slots: Vec<(Weekday, Interval)> = sections
            .into_iter()
            .flat_map(|s| std::iter::once(s).chain(s.similar()))
            .flat_map(|s| s.meeting_slots())
            .collect();
        let boundaries = time_boundaries(slots.iter().map(|&(_, iv)| iv));
        let mut counts = vec![[0u32; Weekday::COUNT]; boundaries.len().saturating_sub(1)];
        let mut max_count = 0;

        for (day, interval) in &slots {
            if let Some((first, last)) = row_range(&boundaries, interval) {
                for row in &mut counts[first..last] {
                    let c = &mut row[day.index()];
                    *c += 1;
                    max_count = max_count.max(*c);
                }
            }
        }

        debug!(
            meetings = slots.len(),
            rows = counts.len(),
            max_count,
            "built heatmap"
        );
        Self {
            boundaries,
            counts,
            max_count,
            palette,
        }
    }

    /// Row boundaries (sorted, distinct).
    pub fn boundaries(&self) -> &[Time] {
        &self.boundaries
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.counts.len()
    }

    /// Highest cell count.
    pub fn max_count(&self) -> u32 {
        self.max_count
    }

    /// Raw count of a cell (0 when out of range).
    pub fn count(&self, row: usize, day: Weekday) -> u32 {
        self.counts.get(row).map_or(0, |r| r[day.index()])
    }

    /// Count normalized by the maximum, `None` for untouched cells.
    pub fn load(&self, row: usize, day: Weekday) -> Option<f64> {
        match self.count(row, day) {
            0 => None,
            c => Some(c as f64 / self.max_count as f64),
        }
    }

    /// Colored grid of every occupied cell.
    ///
    /// Each occupied `(row, day)` is its own single-row cell holding the
    /// count, class hint `heat`, and background/foreground colors.
    pub fn grid(&self) -> Grid {
        let mut grid = Grid::weekly(&self.boundaries);
        for row in 0..self.rows() {
            for day in Weekday::ALL {
                let Some(load) = self.load(row, day) else {
                    continue;
                };
                let background = self.palette.background(load);
                grid.cells.push(Cell {
                    row,
                    column: day.index(),
                    row_span: 1,
                    content: self.count(row, day).to_string(),
                    class_hint: "heat".into(),
                    style: Some(CellStyle {
                        background,
                        foreground: self.palette.foreground(background),
                        load,
                    }),
                });
            }
        }
        grid
    }
}

//! Abstract output grid handed to the rendering layer.
//!
//! A [`Grid`] is a table of labeled rows and columns with sparse
//! [`Cell`]s. A cell spanning several rows hides the cells below it, which
//! are simply not present. The engine never emits markup.

use crate::heatmap::Rgb;
use crate::time::{Interval, Time, Weekday};

/// Background/foreground colors of a heatmap cell.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CellStyle {
    pub background: Rgb,
    pub foreground: Rgb,
    /// Normalized occupancy in `(0, 1]`.
    pub load: f64,
}

/// One visible cell.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cell {
    /// Index into [`Grid::rows`].
    pub row: usize,
    /// Index into [`Grid::columns`].
    pub column: usize,
    /// Number of rows covered, at least 1.
    pub row_span: usize,
    pub content: String,
    /// CSS-like class hint (`subject`, `heat`, `odds`, `summary`).
    pub class_hint: String,
    pub style: Option<CellStyle>,
}

/// A labeled, sparse table.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    /// Label of the row-label column (e.g. `Time`).
    pub corner: String,
    pub columns: Vec<String>,
    pub rows: Vec<String>,
    /// Cells ordered by `(row, column)`.
    pub cells: Vec<Cell>,
}

impl Grid {
    /// Empty weekly grid: one column per teaching day, rows from
    /// consecutive time boundaries.
    pub fn weekly(boundaries: &[Time]) -> Self {
        Self {
            corner: "Time".into(),
            columns: Weekday::ALL.iter().map(|d| d.name().to_string()).collect(),
            rows: row_labels(boundaries),
            cells: Vec::new(),
        }
    }

    /// Cell anchored at `(row, column)`, if any.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.cells
            .iter()
            .find(|c| c.row == row && c.column == column)
    }

    /// Whether no cell is present.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub(crate) fn sort_cells(&mut self) {
        self.cells.sort_by_key(|c| (c.row, c.column));
    }
}

/// Sorted, deduplicated endpoints of every interval.
pub(crate) fn time_boundaries(intervals: impl IntoIterator<Item = Interval>) -> Vec<Time> {
    let mut times: Vec<Time> = intervals
        .into_iter()
        .flat_map(|iv| [iv.start(), iv.end()])
        .collect();
    times.sort_unstable();
    times.dedup();
    times
}

/// `09:00am-10:00am` style labels between consecutive boundaries.
fn row_labels(boundaries: &[Time]) -> Vec<String> {
    boundaries
        .windows(2)
        .map(|w| format!("{}-{}", w[0], w[1]))
        .collect()
}

/// Row range `[first, last)` an interval covers; both endpoints must be
/// boundaries.
pub(crate) fn row_range(boundaries: &[Time], interval: &Interval) -> Option<(usize, usize)> {
    let first = boundaries.binary_search(&interval.start()).ok()?;
    let last = boundaries.binary_search(&interval.end()).ok()?;
    Some((first, last))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(s: (u8, u8), e: (u8, u8)) -> Interval {
        Interval::from_hm(s, e).unwrap()
    }

    #[test]
    fn test_time_boundaries_sorted_unique() {
        let b = time_boundaries(vec![
            iv((10, 0), (11, 0)),
            iv((9, 0), (10, 0)),
            iv((9, 0), (12, 0)),
        ]);
        let labels: Vec<String> = b.iter().map(|t| t.to_string()).collect();
        assert_eq!(labels, vec!["09:00am", "10:00am", "11:00am", "12:00pm"]);
    }

    #[test]
    fn test_weekly_grid_shape() {
        let b = time_boundaries(vec![iv((9, 0), (10, 0)), iv((10, 0), (11, 30))]);
        let g = Grid::weekly(&b);
        assert_eq!(g.corner, "Time");
        assert_eq!(g.columns.len(), 6);
        assert_eq!(g.columns[0], "Monday");
        assert_eq!(g.rows, vec!["09:00am-10:00am", "10:00am-11:30am"]);
        assert!(g.is_empty());
    }

    #[test]
    fn test_row_range() {
        let b = time_boundaries(vec![iv((9, 0), (10, 0)), iv((9, 30), (11, 0))]);
        assert_eq!(row_range(&b, &iv((9, 0), (10, 0))), Some((0, 2)));
        assert_eq!(row_range(&b, &iv((9, 30), (11, 0))), Some((1, 3)));
        assert_eq!(row_range(&b, &iv((8, 0), (9, 0))), None);
    }

    #[test]
    fn test_empty_boundaries_have_no_rows() {
        let g = Grid::weekly(&[]);
        assert!(g.rows.is_empty());
    }
}

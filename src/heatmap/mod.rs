//! Heatmap aggregator.
//!
//! Overlays every candidate section (no grouping, no conflict filtering)
//! into per-cell occupancy counts, normalizes them by the busiest cell and
//! shades each occupied cell along an HSV gradient with a WCAG-contrast
//! text color.

mod aggregate;
mod color;

pub use aggregate::Heatmap;
pub use color::{hsv_to_rgb, HeatPalette, Rgb};

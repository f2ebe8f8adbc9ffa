//! Planner configuration.
//!
//! [`PlannerConfig`] holds every tunable the engine reads: the tick
//! reference hour, enumeration strategy, display paging and heatmap colors.

use crate::error::{EngineError, Result};
use crate::heatmap::HeatPalette;
use crate::schedule::EnumerationMode;
use crate::time::TickEncoding;

/// Configuration for a planning request.
///
/// # Defaults
///
/// ```
/// use u_enroll::config::PlannerConfig;
///
/// let config = PlannerConfig::default();
/// assert_eq!(config.reference_hour, 7);
/// assert_eq!(config.page_size, 10);
/// assert!(!config.parallel);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_enroll::config::PlannerConfig;
/// use u_enroll::schedule::EnumerationMode;
///
/// let config = PlannerConfig::default()
///     .with_reference_hour(8)
///     .with_mode(EnumerationMode::Lazy)
///     .with_page_size(25);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Hour of day mapped to tick 0 of every day pattern.
    ///
    /// Meetings may not start earlier. With 15-minute ticks and 128 bits a
    /// day spans 32 hours past this point, so the latest end is never the
    /// binding limit.
    pub reference_hour: u8,

    /// Whether schedules are materialized up front or produced on demand.
    pub mode: EnumerationMode,

    /// Whether eager enumeration validates the product on the rayon pool.
    ///
    /// Ignored unless the `parallel` feature is enabled, and in lazy mode.
    pub parallel: bool,

    /// Schedules per display page.
    pub page_size: usize,

    /// Heatmap hue in degrees.
    pub heat_hue: f64,

    /// Relative luminance above which heatmap text is dark.
    pub contrast_threshold: f64,

    /// Course-name prefixes of non-credit courses.
    ///
    /// Matching courses are scheduled like any other but are reported as
    /// extra and left out of the unit total.
    pub extra_course_prefixes: Vec<String>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            reference_hour: 7,
            mode: EnumerationMode::Eager,
            parallel: false,
            page_size: 10,
            heat_hue: 0.0,
            contrast_threshold: 0.179,
            extra_course_prefixes: vec!["PE ".into(), "CWTS".into()],
        }
    }
}

impl PlannerConfig {
    /// Sets the tick reference hour.
    pub fn with_reference_hour(mut self, hour: u8) -> Self {
        self.reference_hour = hour;
        self
    }

    /// Sets the enumeration mode.
    pub fn with_mode(mut self, mode: EnumerationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enables or disables parallel enumeration.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    /// Sets the heatmap hue, in degrees.
    pub fn with_heat_hue(mut self, hue: f64) -> Self {
        self.heat_hue = hue;
        self
    }

    /// Sets the text contrast threshold.
    pub fn with_contrast_threshold(mut self, threshold: f64) -> Self {
        self.contrast_threshold = threshold;
        self
    }

    /// Replaces the extra-course prefixes.
    pub fn with_extra_course_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_course_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Tick encoding anchored at [`reference_hour`](Self::reference_hour).
    pub fn encoding(&self) -> TickEncoding {
        TickEncoding::new(self.reference_hour)
    }

    /// Heatmap palette from the hue and contrast settings.
    pub fn palette(&self) -> HeatPalette {
        HeatPalette::new(self.heat_hue, self.contrast_threshold)
    }

    /// Whether `course` is a non-credit extra.
    pub fn is_extra(&self, course: &str) -> bool {
        self.extra_course_prefixes
            .iter()
            .any(|p| !p.is_empty() && course.starts_with(p.as_str()))
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.reference_hour > 23 {
            return Err(EngineError::InvalidConfig(
                "reference_hour must be within 0..=23".into(),
            ));
        }
        if self.page_size == 0 {
            return Err(EngineError::InvalidConfig(
                "page_size must be at least 1".into(),
            ));
        }
        if !self.heat_hue.is_finite() {
            return Err(EngineError::InvalidConfig("heat_hue must be finite".into()));
        }
        if !(0.0..=1.0).contains(&self.contrast_threshold) {
            return Err(EngineError::InvalidConfig(
                "contrast_threshold must be within [0, 1]".into(),
            ));
        }
        Ok(())
    }
}

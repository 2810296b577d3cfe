//! Tuning parameters for the decimation passes.

use serde::{Deserialize, Serialize};

/// Configuration for viewport filtering and interpolation thinning.
///
/// Pixel quantities are converted to data units through the absolute scale of
/// the view-to-data transform passed to each pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Minimum span, in pixels, used to size the hysteresis margin around the
    /// requested viewport.
    pub min_view_span_px: f64,
    /// Excursions below this many pixels never update a running extremum.
    pub inner_deadband_px: f64,
    /// Excursions above this many pixels count as visible changes.
    pub outer_deadband_px: f64,
    /// Relative size change of the expanded viewport tolerated by the cache.
    pub cache_tolerance: f64,
    /// Spacing and deviation, in pixels, below which thinning removes a point.
    pub thin_tolerance_px: f64,
    /// Thinning never leaves fewer points than this (and never fewer than 2).
    pub min_retained_points: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_view_span_px: 500.0,
            inner_deadband_px: 0.25,
            outer_deadband_px: 0.75,
            cache_tolerance: 0.1,
            thin_tolerance_px: 1.0,
            min_retained_points: 100,
        }
    }
}

impl FilterConfig {
    /// Set the retained-point floor used by thinning.
    pub fn with_min_retained_points(mut self, points: usize) -> Self {
        self.min_retained_points = points;
        self
    }

    /// Set the thinning tolerance in pixels.
    pub fn with_thin_tolerance_px(mut self, tolerance: f64) -> Self {
        self.thin_tolerance_px = tolerance;
        self
    }

    /// Effective retained-point floor.
    pub(crate) fn retained_floor(&self) -> usize {
        self.min_retained_points.max(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: FilterConfig =
            serde_json::from_str(r#"{ "min_retained_points": 16 }"#).expect("valid config");
        assert_eq!(config.min_retained_points, 16);
        assert_eq!(config.inner_deadband_px, 0.25);
        assert_eq!(config.outer_deadband_px, 0.75);
        assert_eq!(config.min_view_span_px, 500.0);
    }

    #[test]
    fn retained_floor_never_below_two() {
        let config = FilterConfig::default().with_min_retained_points(0);
        assert_eq!(config.retained_floor(), 2);
        assert_eq!(FilterConfig::default().retained_floor(), 100);
    }
}

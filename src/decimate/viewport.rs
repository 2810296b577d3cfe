//! Region-coded max–min decimation against an expanded viewport.

use tracing::{debug, trace, warn};

use super::FilterOutcome;
use crate::config::FilterConfig;
use crate::datasource::{InclusionMasks, Region};
use crate::transform::ViewTransform;
use crate::view::Viewport;

/// Viewport filter with a hysteresis cache.
///
/// The filter remembers the expanded region it last computed masks for. As
/// long as later requests stay inside that region at a similar zoom level the
/// masks are reused unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewportFilter {
    cached_region: Option<Viewport>,
}

impl ViewportFilter {
    /// Create a filter with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expanded region of the last recomputation, if still valid.
    pub fn cached_region(&self) -> Option<Viewport> {
        self.cached_region
    }

    /// Forget the cached region; the next call always recomputes.
    pub fn invalidate(&mut self) {
        self.cached_region = None;
    }

    /// The requested viewport grown by half its span (or half the minimum
    /// pixel span, whichever is larger) on every side.
    pub fn expanded_region(
        view_to_data: &ViewTransform,
        view: Viewport,
        config: &FilterConfig,
    ) -> Viewport {
        let (x_scale, y_scale) = view_to_data.abs_scale();
        let width = view.width().max(x_scale * config.min_view_span_px);
        let height = view.height().max(y_scale * config.min_view_span_px);
        view.grown(width / 2.0, height / 2.0)
    }

    /// Recompute `masks` for the given view unless the cache still applies.
    pub fn apply(
        &mut self,
        x: &[f64],
        y: &[f64],
        masks: &mut InclusionMasks,
        view_to_data: &ViewTransform,
        view: Viewport,
        config: &FilterConfig,
    ) -> FilterOutcome {
        profiling::scope!("viewport_filter");
        debug_assert_eq!(x.len(), y.len());
        debug_assert_eq!(x.len(), masks.len());

        if x.len() <= 2 {
            masks.include_all_viewport();
            return FilterOutcome::PassThrough;
        }
        if let Err(err) = view_to_data.validate() {
            warn!(%err, "skipping viewport decimation");
            return self.degrade(masks);
        }
        if !view.is_finite() {
            warn!(?view, "skipping viewport decimation for non-finite view");
            return self.degrade(masks);
        }

        let expanded = Self::expanded_region(view_to_data, view, config);
        if let Some(cached) = self.cached_region {
            let tolerance = 1.0 - config.cache_tolerance..=1.0 + config.cache_tolerance;
            let width_ratio = cached.width() / expanded.width();
            let height_ratio = cached.height() / expanded.height();
            if cached.contains(&view)
                && tolerance.contains(&width_ratio)
                && tolerance.contains(&height_ratio)
            {
                trace!("viewport cache hit");
                return FilterOutcome::CacheHit;
            }
        }
        self.cached_region = Some(expanded);

        classify(x, y, masks, &expanded);
        let deadbands = Deadbands::new(view_to_data, config);
        decimate(x, y, masks, &deadbands);

        let segments = masks
            .segments()
            .iter()
            .filter(|&&included| included)
            .count();
        let markers = masks.marker_count();
        debug!(points = x.len(), segments, markers, "recomputed viewport masks");
        FilterOutcome::Recomputed { segments, markers }
    }

    fn degrade(&mut self, masks: &mut InclusionMasks) -> FilterOutcome {
        self.cached_region = None;
        masks.include_all_viewport();
        FilterOutcome::Degenerate
    }
}

/// Per-axis thresholds in data units.
#[derive(Debug, Clone, Copy)]
struct Deadbands {
    x_inner: f64,
    x_outer: f64,
    y_inner: f64,
    y_outer: f64,
}

impl Deadbands {
    fn new(view_to_data: &ViewTransform, config: &FilterConfig) -> Self {
        let (x_scale, y_scale) = view_to_data.abs_scale();
        Self {
            x_inner: x_scale * config.inner_deadband_px,
            x_outer: x_scale * config.outer_deadband_px,
            y_inner: y_scale * config.inner_deadband_px,
            y_outer: y_scale * config.outer_deadband_px,
        }
    }
}

/// Running extrema along one axis, relative to the start of a span.
#[derive(Debug, Clone, Copy)]
struct Extrema {
    max: f64,
    min: f64,
    max_outer: f64,
    min_outer: f64,
    max_index: Option<usize>,
    min_index: Option<usize>,
    within: bool,
}

impl Extrema {
    fn new(start: f64, inner: f64, outer: f64) -> Self {
        Self {
            max: start + inner,
            min: start - inner,
            max_outer: start + outer,
            min_outer: start - outer,
            max_index: None,
            min_index: None,
            within: true,
        }
    }

    /// Feed a value; returns true when it moved an extremum past the outer
    /// deadband.
    fn update(&mut self, value: f64, index: usize) -> bool {
        if value > self.max {
            self.max = value;
            self.max_index = Some(index);
            if value > self.max_outer {
                self.within = false;
                return true;
            }
        } else if value < self.min {
            self.min = value;
            self.min_index = Some(index);
            if value < self.min_outer {
                self.within = false;
                return true;
            }
        }
        false
    }

    fn include(&self, segment: &mut [bool]) {
        for index in [self.max_index, self.min_index].into_iter().flatten() {
            segment[index] = true;
        }
    }
}

/// Code every point against `region`, include markers for inside points and
/// exclude every segment.
fn classify(x: &[f64], y: &[f64], masks: &mut InclusionMasks, region: &Viewport) {
    for (index, (&px, &py)) in x.iter().zip(y).enumerate() {
        let code = if px < region.left() {
            Region::Left
        } else if px > region.right() {
            Region::Right
        } else if py < region.bottom() {
            Region::Below
        } else if py > region.top() {
            Region::Above
        } else {
            Region::Inside
        };
        masks.region[index] = code;
        masks.marker[index] = code == Region::Inside;
        masks.segment[index] = false;
    }
}

/// Run compression followed by max–min scans. Requires at least three points.
fn decimate(x: &[f64], y: &[f64], masks: &mut InclusionMasks, deadbands: &Deadbands) {
    let n = x.len();
    let regions = &masks.region;
    let segment = &mut masks.segment;

    let mut i = 0;
    let mut current = regions[0];
    loop {
        let mut next = regions[i + 1];
        if current.is_outside() && current == next {
            while current == next && i < n - 2 {
                i += 1;
                next = regions[i + 1];
            }
            if current == next {
                // Run reaches the end of the series.
                break;
            }
            segment[i] = true;
            segment[i + 1] = true;
            i += 1;
        } else {
            segment[i] = true;
        }

        let (start_x, start_y) = (x[i], y[i]);
        i += 1;
        if i == n {
            break;
        }
        i = scan_extrema(x, y, segment, i, start_x, start_y, deadbands);
        segment[i] = true;
        segment[i - 1] = true;
        if i == n - 1 {
            break;
        }
        current = regions[i];
    }

    segment[0] = true;
    segment[n - 1] = true;
}

/// Scan forward from `i` until both axes show a visible excursion or the
/// series ends. Returns the index where the scan stopped.
fn scan_extrema(
    x: &[f64],
    y: &[f64],
    segment: &mut [bool],
    mut i: usize,
    start_x: f64,
    start_y: f64,
    deadbands: &Deadbands,
) -> usize {
    let last = x.len() - 1;
    let mut x_extrema = Extrema::new(start_x, deadbands.x_inner, deadbands.x_outer);
    let mut y_extrema = Extrema::new(start_y, deadbands.y_inner, deadbands.y_outer);
    loop {
        if x_extrema.update(x[i], i) && !y_extrema.within {
            y_extrema.include(segment);
            break;
        }
        if y_extrema.update(y[i], i) && !x_extrema.within {
            x_extrema.include(segment);
            break;
        }
        if i == last {
            break;
        }
        i += 1;
    }
    i
}

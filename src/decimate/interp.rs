//! Greedy thinning of points that sit on the line through their neighbours.

use tracing::{debug, warn};

use crate::config::FilterConfig;
use crate::transform::ViewTransform;

/// Exclude points whose removal does not visibly change the polyline.
///
/// `keep` is reset to all-true and then refined by repeated left-to-right
/// passes. For retained neighbours `p1`, `p2`, `p3`, the middle point is
/// dropped when either horizontal gap is below one pixel-tolerance or `p2`
/// deviates vertically from the `p1`–`p3` chord by less than the tolerance.
/// After a drop `p3` becomes the new `p1`; otherwise `p2` does and the scan
/// resumes after `p3`. Candidates never go past index `n - 4`, and passes stop
/// once nothing changes or the retained-point floor is reached.
///
/// Returns the number of excluded points.
pub fn thin_by_interpolation(
    x: &[f64],
    y: &[f64],
    keep: &mut [bool],
    view_to_data: &ViewTransform,
    config: &FilterConfig,
) -> usize {
    profiling::scope!("interpolation_thinning");
    debug_assert_eq!(x.len(), y.len());
    debug_assert_eq!(x.len(), keep.len());

    keep.fill(true);
    if let Err(err) = view_to_data.validate() {
        warn!(%err, "skipping interpolation thinning");
        return 0;
    }

    let n = x.len();
    let budget = n.saturating_sub(config.retained_floor());
    let (x_scale, y_scale) = view_to_data.abs_scale();
    let cutoff_x = x_scale * config.thin_tolerance_px;
    let cutoff_y = y_scale * config.thin_tolerance_px;

    let mut excluded = 0;
    let mut passes = 0;
    let mut newly_excluded = true;
    while newly_excluded && excluded < budget {
        newly_excluded = false;
        passes += 1;
        let mut i = 0;
        let (mut x1, mut y1) = (x[0], y[0]);
        while i + 4 < n && excluded < budget {
            let Some(candidate) = next_kept(keep, i + 1) else {
                break;
            };
            if candidate + 4 > n {
                break;
            }
            let Some(next) = next_kept(keep, candidate + 1) else {
                break;
            };
            i = next;
            let (x2, y2) = (x[candidate], y[candidate]);
            let (x3, y3) = (x[next], y[next]);

            let narrow = (x2 - x1).abs() < cutoff_x || (x3 - x2).abs() < cutoff_x;
            if narrow || on_chord(x1, y1, x2, y2, x3, y3, cutoff_y) {
                keep[candidate] = false;
                newly_excluded = true;
                excluded += 1;
                (x1, y1) = (x3, y3);
            } else {
                (x1, y1) = (x2, y2);
            }
        }
    }

    debug!(points = n, excluded, passes, "interpolation thinning finished");
    excluded
}

/// First retained index at or after `from`.
fn next_kept(keep: &[bool], from: usize) -> Option<usize> {
    keep.get(from..)?
        .iter()
        .position(|&kept| kept)
        .map(|offset| from + offset)
}

/// Whether `(x2, y2)` lies within `cutoff_y` of the chord from `(x1, y1)` to
/// `(x3, y3)`. A vertical chord never matches.
fn on_chord(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64, cutoff_y: f64) -> bool {
    if x3 == x1 {
        return false;
    }
    let predicted = y1 + (x2 - x1) * (y3 - y1) / (x3 - x1);
    (predicted - y2).abs() < cutoff_y
}

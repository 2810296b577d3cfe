//! Affine transforms between data and view space.
//!
//! Filters consume a *view-to-data* transform: its scale is the size of one
//! device pixel expressed in data units. Emitters consume the inverse,
//! *data-to-view*, to place vertices and markers.

use crate::axis::Axis;
use crate::error::{CurveError, Result};
use crate::geom::Point;
use crate::view::Viewport;

/// Scale and offset along a single axis: `v * scale + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMap {
    /// Multiplicative factor.
    pub scale: f64,
    /// Additive offset applied after scaling.
    pub offset: f64,
}

impl AxisMap {
    /// Create a new axis map.
    pub const fn new(scale: f64, offset: f64) -> Self {
        Self { scale, offset }
    }

    /// The identity map.
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0)
    }

    /// Map a single value.
    pub fn apply(&self, value: f64) -> f64 {
        value * self.scale + self.offset
    }

    /// Check whether the map can be used for thresholds and inversion.
    pub fn is_degenerate(&self) -> bool {
        self.scale == 0.0 || !self.scale.is_finite() || !self.offset.is_finite()
    }

    /// The inverse map, if the scale is usable.
    pub fn inverse(&self) -> Option<Self> {
        if self.is_degenerate() {
            return None;
        }
        Some(Self::new(1.0 / self.scale, -self.offset / self.scale))
    }
}

impl Default for AxisMap {
    fn default() -> Self {
        Self::identity()
    }
}

/// Independent affine maps for the X and Y axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewTransform {
    /// X axis map.
    pub x: AxisMap,
    /// Y axis map.
    pub y: AxisMap,
}

impl ViewTransform {
    /// Create a transform from two axis maps.
    pub const fn new(x: AxisMap, y: AxisMap) -> Self {
        Self { x, y }
    }

    /// The identity transform.
    pub const fn identity() -> Self {
        Self::new(AxisMap::identity(), AxisMap::identity())
    }

    /// Create a pure scaling transform.
    pub const fn scaling(x_scale: f64, y_scale: f64) -> Self {
        Self::new(AxisMap::new(x_scale, 0.0), AxisMap::new(y_scale, 0.0))
    }

    /// Build a data-to-view transform placing `viewport` into a pixel area.
    ///
    /// The view origin is the top-left corner, so Y is flipped. Returns `None`
    /// when the viewport or the pixel area has no positive extent.
    pub fn data_to_view(viewport: Viewport, width_px: f64, height_px: f64) -> Option<Self> {
        if !viewport.is_finite() || viewport.width() <= 0.0 || viewport.height() <= 0.0 {
            return None;
        }
        if !(width_px > 0.0 && height_px > 0.0) {
            return None;
        }
        let sx = width_px / viewport.width();
        let sy = height_px / viewport.height();
        Some(Self::new(
            AxisMap::new(sx, -viewport.left() * sx),
            AxisMap::new(-sy, viewport.top() * sy),
        ))
    }

    /// Map a point.
    pub fn apply(&self, point: Point) -> Point {
        Point::new(self.x.apply(point.x), self.y.apply(point.y))
    }

    /// The inverse transform, if both axes are invertible.
    pub fn inverse(&self) -> Option<Self> {
        Some(Self::new(self.x.inverse()?, self.y.inverse()?))
    }

    /// Map along one axis.
    pub fn axis(&self, axis: Axis) -> AxisMap {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Absolute per-axis scale, i.e. the magnitude of one unit of the source
    /// space in the target space.
    pub fn abs_scale(&self) -> (f64, f64) {
        (self.x.scale.abs(), self.y.scale.abs())
    }

    /// Reject zero or non-finite scale factors.
    pub fn validate(&self) -> Result<()> {
        for axis in [Axis::X, Axis::Y] {
            let map = self.axis(axis);
            if map.is_degenerate() {
                return Err(CurveError::DegenerateTransform {
                    axis,
                    scale: map.scale,
                });
            }
        }
        Ok(())
    }
}

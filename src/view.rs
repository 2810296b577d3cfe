//! Data ranges and visible rectangles.

use crate::geom::Point;

/// Numeric range with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl Range {
    /// Create a new range, swapping bounds if needed.
    pub fn new(mut min: f64, mut max: f64) -> Self {
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    /// Span of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Check whether a value lies within the range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Check whether another range lies entirely within this one.
    pub fn contains_range(&self, other: Range) -> bool {
        other.min >= self.min && other.max <= self.max
    }

    /// Expand the range to include a value.
    pub fn expand_to_include(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Grow the range by `margin` on both sides.
    pub fn grown(&self, margin: f64) -> Self {
        Self {
            min: self.min - margin,
            max: self.max + margin,
        }
    }
}

/// Axis-aligned rectangle in data coordinates.
///
/// `bottom` is the minimum Y and `top` the maximum Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// X axis range.
    pub x: Range,
    /// Y axis range.
    pub y: Range,
}

impl Viewport {
    /// Create a viewport from X and Y ranges.
    pub fn new(x: Range, y: Range) -> Self {
        Self { x, y }
    }

    /// Create a viewport spanning two opposite corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(Range::new(a.x, b.x), Range::new(a.y, b.y))
    }

    /// Minimum X.
    pub fn left(&self) -> f64 {
        self.x.min
    }

    /// Maximum X.
    pub fn right(&self) -> f64 {
        self.x.max
    }

    /// Minimum Y.
    pub fn bottom(&self) -> f64 {
        self.y.min
    }

    /// Maximum Y.
    pub fn top(&self) -> f64 {
        self.y.max
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        self.x.span()
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        self.y.span()
    }

    /// Check whether all edges are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Check whether another rectangle lies entirely within this one.
    pub fn contains(&self, other: &Viewport) -> bool {
        self.x.contains_range(other.x) && self.y.contains_range(other.y)
    }

    /// Check whether a point lies within the rectangle (edges inclusive).
    pub fn contains_point(&self, point: Point) -> bool {
        self.x.contains(point.x) && self.y.contains(point.y)
    }

    /// Grow the rectangle by a per-axis margin on every side.
    pub fn grown(&self, x_margin: f64, y_margin: f64) -> Self {
        Self {
            x: self.x.grown(x_margin),
            y: self.y.grown(y_margin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_new_swaps_bounds() {
        let range = Range::new(3.0, -1.0);
        assert_eq!(range.min, -1.0);
        assert_eq!(range.max, 3.0);
        assert_eq!(range.span(), 4.0);
    }

    #[test]
    fn viewport_containment_is_edge_inclusive() {
        let outer = Viewport::from_corners(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let inner = Viewport::from_corners(Point::new(0.0, 2.0), Point::new(10.0, 8.0));
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(outer.contains_point(Point::new(10.0, 0.0)));
    }

    #[test]
    fn grown_viewport_extends_each_edge() {
        let view = Viewport::from_corners(Point::new(1.0, 1.0), Point::new(2.0, 3.0));
        let grown = view.grown(0.5, 1.0);
        assert_eq!(grown.left(), 0.5);
        assert_eq!(grown.right(), 2.5);
        assert_eq!(grown.bottom(), 0.0);
        assert_eq!(grown.top(), 4.0);
    }
}

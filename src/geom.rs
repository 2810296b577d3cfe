//! Geometric primitives used by the decimation pipeline.
//!
//! Points carry no notion of which space they live in: the same type is used
//! for transformed data coordinates and for view (device) coordinates produced
//! by a [`crate::ViewTransform`].

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

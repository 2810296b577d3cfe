//! Error types for curve construction and view transforms.

use thiserror::Error;

use crate::axis::Axis;

/// Rejected sample input.
///
/// Raised while building a series or re-deriving its transformed arrays. A
/// series that fails construction must not be used.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// X and Y sequences have different lengths.
    #[error("component lengths must be equal (x has {x_len} values, y has {y_len})")]
    LengthMismatch {
        /// Number of X values.
        x_len: usize,
        /// Number of Y values.
        y_len: usize,
    },

    /// The series has no samples.
    #[error("sample series is empty")]
    Empty,

    /// A sample (raw or transformed) is NaN or infinite.
    #[error("non-finite {axis} value {value} at index {index}")]
    NonFinite {
        /// Axis holding the offending value.
        axis: Axis,
        /// Sample index.
        index: usize,
        /// The value itself.
        value: f64,
    },

    /// A raw value lies outside the domain of the requested axis scale.
    #[error("{axis} value {value} at index {index} cannot be mapped by the axis scale")]
    Unrepresentable {
        /// Axis holding the offending value.
        axis: Axis,
        /// Sample index.
        index: usize,
        /// The raw value.
        value: f64,
    },
}

/// Main error type for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Invalid sample data.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// A view transform with a zero or non-finite scale factor.
    ///
    /// Filters never return this; they log it and fall back to drawing every
    /// point.
    #[error("degenerate view transform: {axis} scale is {scale}")]
    DegenerateTransform {
        /// Axis with the unusable scale.
        axis: Axis,
        /// The scale factor.
        scale: f64,
    },
}

/// Result type alias for curve operations.
pub type Result<T> = std::result::Result<T, CurveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_message() {
        let err = CurveError::from(InputError::LengthMismatch { x_len: 3, y_len: 2 });
        assert_eq!(
            err.to_string(),
            "invalid input: component lengths must be equal (x has 3 values, y has 2)"
        );
    }

    #[test]
    fn unrepresentable_reports_raw_value() {
        let err = InputError::Unrepresentable {
            axis: Axis::X,
            index: 0,
            value: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "x value 0 at index 0 cannot be mapped by the axis scale"
        );
    }

    #[test]
    fn degenerate_transform_names_axis() {
        let err = CurveError::DegenerateTransform {
            axis: Axis::Y,
            scale: 0.0,
        };
        assert_eq!(err.to_string(), "degenerate view transform: y scale is 0");
    }
}

//! Sample storage, ordered lookups and inclusion state.
//!
//! Raw samples are immutable once validated. Transformed arrays are derived on
//! demand and alias the raw arrays when an axis has no transform.

mod masks;
mod sort_index;

pub use masks::{InclusionMasks, Region};
pub use sort_index::{SortIndex, is_monotonic};

use crate::axis::Axis;
use crate::error::InputError;
use crate::geom::Point;
use crate::view::{Range, Viewport};

/// Validated X/Y samples with optional per-axis transformed copies.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleData {
    x: Vec<f64>,
    y: Vec<f64>,
    x_transformed: Option<Vec<f64>>,
    y_transformed: Option<Vec<f64>>,
}

impl SampleData {
    /// Validate and store raw samples.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, InputError> {
        if x.len() != y.len() {
            return Err(InputError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.is_empty() {
            return Err(InputError::Empty);
        }
        check_finite(Axis::X, &x)?;
        check_finite(Axis::Y, &y)?;
        Ok(Self {
            x,
            y,
            x_transformed: None,
            y_transformed: None,
        })
    }

    /// Build samples from an iterator of points.
    pub fn from_points<I>(iter: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = Point>,
    {
        let (x, y) = iter.into_iter().map(|point| (point.x, point.y)).unzip();
        Self::new(x, y)
    }

    /// Build samples from two value iterators, truncated to the shorter one.
    pub fn from_pairs<X, Y>(x: X, y: Y) -> Result<Self, InputError>
    where
        X: IntoIterator<Item = f64>,
        Y: IntoIterator<Item = f64>,
    {
        let (x, y) = x.into_iter().zip(y).unzip();
        Self::new(x, y)
    }

    /// Number of samples (always at least one).
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false: empty input is rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Raw X values.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Raw Y values.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Transformed X values.
    pub fn x_transformed(&self) -> &[f64] {
        self.x_transformed.as_deref().unwrap_or(&self.x)
    }

    /// Transformed Y values.
    pub fn y_transformed(&self) -> &[f64] {
        self.y_transformed.as_deref().unwrap_or(&self.y)
    }

    /// Whether an axis currently aliases its raw values.
    pub fn is_aliased(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.x_transformed.is_none(),
            Axis::Y => self.y_transformed.is_none(),
        }
    }

    /// Transformed point at `index`.
    pub fn point(&self, index: usize) -> Option<Point> {
        let x = *self.x_transformed().get(index)?;
        let y = *self.y_transformed().get(index)?;
        Some(Point::new(x, y))
    }

    /// Re-derive the transformed arrays from the raw values.
    ///
    /// A missing function leaves that axis aliased to its raw values. On error
    /// the previous transformed arrays are kept.
    pub fn apply_transform(
        &mut self,
        fx: Option<&dyn Fn(f64) -> f64>,
        fy: Option<&dyn Fn(f64) -> f64>,
    ) -> Result<(), InputError> {
        let x_transformed = fx.map(|f| map_axis(Axis::X, &self.x, f)).transpose()?;
        let y_transformed = fy.map(|f| map_axis(Axis::Y, &self.y, f)).transpose()?;
        self.x_transformed = x_transformed;
        self.y_transformed = y_transformed;
        Ok(())
    }

    /// Rectangle spanning the transformed values.
    pub fn bounds(&self) -> Viewport {
        Viewport::new(span(self.x_transformed()), span(self.y_transformed()))
    }
}

fn span(values: &[f64]) -> Range {
    let first = values.first().copied().unwrap_or_default();
    values
        .iter()
        .fold(Range::new(first, first), |mut range, &value| {
            range.expand_to_include(value);
            range
        })
}

fn check_finite(axis: Axis, values: &[f64]) -> Result<(), InputError> {
    match values.iter().position(|value| !value.is_finite()) {
        Some(index) => Err(InputError::NonFinite {
            axis,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

fn map_axis(axis: Axis, values: &[f64], f: &dyn Fn(f64) -> f64) -> Result<Vec<f64>, InputError> {
    let mapped: Vec<f64> = values.iter().map(|&value| f(value)).collect();
    check_finite(axis, &mapped)?;
    Ok(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_lengths() {
        let result = SampleData::new(vec![0.0, 1.0], vec![0.0]);
        assert_eq!(
            result,
            Err(InputError::LengthMismatch { x_len: 2, y_len: 1 })
        );
    }

    #[test]
    fn rejects_empty_and_non_finite() {
        assert_eq!(SampleData::new(vec![], vec![]), Err(InputError::Empty));
        let result = SampleData::new(vec![0.0, 1.0], vec![0.0, f64::NAN]);
        assert!(matches!(
            result,
            Err(InputError::NonFinite {
                axis: Axis::Y,
                index: 1,
                ..
            })
        ));
    }

    #[test]
    fn pairs_truncate_to_shorter_input() {
        let data = SampleData::from_pairs([0.0, 1.0, 2.0], [5.0, 6.0]).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.point(1), Some(Point::new(1.0, 6.0)));
        assert_eq!(data.point(2), None);
    }

    #[test]
    fn transform_without_functions_aliases_raw_values() {
        let mut data = SampleData::new(vec![1.0, 10.0], vec![2.0, 3.0]).unwrap();
        data.apply_transform(Some(&|v: f64| v.log10()), None).unwrap();
        assert!(!data.is_aliased(Axis::X));
        assert!(data.is_aliased(Axis::Y));
        assert_eq!(data.x_transformed(), &[0.0, 1.0]);
        assert_eq!(data.y_transformed().as_ptr(), data.y().as_ptr());

        data.apply_transform(None, None).unwrap();
        assert_eq!(data.x_transformed().as_ptr(), data.x().as_ptr());
    }

    #[test]
    fn failed_transform_keeps_previous_arrays() {
        let mut data = SampleData::new(vec![0.0, 10.0], vec![2.0, 3.0]).unwrap();
        data.apply_transform(None, Some(&|v: f64| v * 2.0)).unwrap();
        let result = data.apply_transform(Some(&|v: f64| v.log10()), None);
        assert!(matches!(
            result,
            Err(InputError::NonFinite {
                axis: Axis::X,
                index: 0,
                ..
            })
        ));
        assert_eq!(data.y_transformed(), &[4.0, 6.0]);
        assert!(data.is_aliased(Axis::X));
    }

    #[test]
    fn bounds_cover_transformed_values() {
        let mut data = SampleData::new(vec![3.0, -1.0, 2.0], vec![0.5, 4.0, -2.0]).unwrap();
        let bounds = data.bounds();
        assert_eq!(bounds.x, Range::new(-1.0, 3.0));
        assert_eq!(bounds.y, Range::new(-2.0, 4.0));

        data.apply_transform(Some(&|v: f64| v * 10.0), None).unwrap();
        assert_eq!(data.bounds().x, Range::new(-10.0, 30.0));
    }
}

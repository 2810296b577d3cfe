//! Sample series with decimation state.

use crate::axis::{Axis, AxisScale};
use crate::config::FilterConfig;
use crate::datasource::{InclusionMasks, SampleData, SortIndex};
use crate::decimate::{FilterOutcome, ViewportFilter, thin_by_interpolation};
use crate::error::{InputError, Result};
use crate::geom::Point;
use crate::render::{self, MarkerShape, MarkerSink, PathSink};
use crate::transform::ViewTransform;
use crate::view::{Range, Viewport};

/// A curve's samples together with its sort index, inclusion masks and
/// viewport cache.
///
/// Decimation state is scratch owned by the series and refilled in place, so
/// filtering needs `&mut self`; share a series across threads only behind
/// external synchronization.
#[derive(Debug, Clone)]
pub struct SampleSeries {
    data: SampleData,
    sort_index: SortIndex,
    masks: InclusionMasks,
    filter: ViewportFilter,
    config: FilterConfig,
}

impl SampleSeries {
    /// Create a series from equal-length, finite X and Y values.
    pub fn new(x: impl Into<Vec<f64>>, y: impl Into<Vec<f64>>) -> Result<Self> {
        Ok(Self::with_data(SampleData::new(x.into(), y.into())?))
    }

    /// Build a series from an iterator of points.
    pub fn from_points<I>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        Ok(Self::with_data(SampleData::from_points(iter)?))
    }

    /// Build a series from two value iterators, truncated to the shorter one.
    pub fn from_pairs<X, Y>(x: X, y: Y) -> Result<Self>
    where
        X: IntoIterator<Item = f64>,
        Y: IntoIterator<Item = f64>,
    {
        Ok(Self::with_data(SampleData::from_pairs(x, y)?))
    }

    fn with_data(data: SampleData) -> Self {
        let sort_index = SortIndex::new(data.x_transformed(), data.y_transformed());
        let masks = InclusionMasks::new(data.len());
        Self {
            data,
            sort_index,
            masks,
            filter: ViewportFilter::new(),
            config: FilterConfig::default(),
        }
    }

    /// Replace the filter configuration.
    pub fn with_config(mut self, config: FilterConfig) -> Self {
        self.set_config(config);
        self
    }

    /// Access the filter configuration.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Replace the filter configuration and invalidate the viewport cache.
    pub fn set_config(&mut self, config: FilterConfig) {
        self.config = config;
        self.filter.invalidate();
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: empty input is rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw X values.
    pub fn x(&self) -> &[f64] {
        self.data.x()
    }

    /// Raw Y values.
    pub fn y(&self) -> &[f64] {
        self.data.y()
    }

    /// Transformed X values.
    pub fn x_transformed(&self) -> &[f64] {
        self.data.x_transformed()
    }

    /// Transformed Y values.
    pub fn y_transformed(&self) -> &[f64] {
        self.data.y_transformed()
    }

    /// Access the underlying samples.
    pub fn data(&self) -> &SampleData {
        &self.data
    }

    /// Re-derive the transformed arrays.
    ///
    /// Rebuilds the sort index, resets every mask and invalidates the viewport
    /// cache. On error the series is left unchanged.
    pub fn apply_transform(
        &mut self,
        fx: Option<&dyn Fn(f64) -> f64>,
        fy: Option<&dyn Fn(f64) -> f64>,
    ) -> Result<()> {
        self.data.apply_transform(fx, fy)?;
        self.sort_index
            .rebuild(self.data.x_transformed(), self.data.y_transformed());
        self.reset_masks();
        Ok(())
    }

    /// Re-derive the transformed arrays from axis scales.
    ///
    /// Fails with [`InputError::Unrepresentable`] if a raw value lies outside a
    /// scale's domain, e.g. a non-positive value on a log axis.
    pub fn apply_scales(&mut self, x_scale: AxisScale, y_scale: AxisScale) -> Result<()> {
        check_domain(Axis::X, self.data.x(), x_scale)?;
        check_domain(Axis::Y, self.data.y(), y_scale)?;
        let map_x = |value: f64| x_scale.map_value(value).unwrap_or(f64::NAN);
        let map_y = |value: f64| y_scale.map_value(value).unwrap_or(f64::NAN);
        self.apply_transform(
            (!x_scale.is_identity()).then_some(&map_x as &dyn Fn(f64) -> f64),
            (!y_scale.is_identity()).then_some(&map_y as &dyn Fn(f64) -> f64),
        )
    }

    /// Rectangle spanning the transformed values.
    pub fn bounds(&self) -> Viewport {
        self.data.bounds()
    }

    /// Access the sort index.
    pub fn sort_index(&self) -> &SortIndex {
        &self.sort_index
    }

    /// Axis backing ordered lookups.
    pub fn sorted_axis(&self) -> Axis {
        self.sort_index.sorted_axis()
    }

    /// Non-decreasing values backing ordered lookups.
    pub fn sorted_values(&self) -> &[f64] {
        self.sort_index
            .sorted_values(self.data.x_transformed(), self.data.y_transformed())
    }

    /// Original index of the sample nearest to `value` on the sorted axis.
    pub fn nearest_index(&self, value: f64) -> Option<usize> {
        self.sort_index.nearest_index(self.sorted_values(), value)
    }

    /// Original indices of samples whose sorted-axis value lies in `range`,
    /// in ascending value order.
    pub fn indices_in_range(&self, range: Range) -> Vec<usize> {
        self.sort_index
            .sorted_range(self.sorted_values(), range)
            .map(|position| self.sort_index.original_index(position))
            .collect()
    }

    /// Access the inclusion masks.
    pub fn masks(&self) -> &InclusionMasks {
        &self.masks
    }

    /// Include everything again and forget the cached viewport.
    pub fn reset_masks(&mut self) {
        self.masks.include_all();
        self.filter.invalidate();
    }

    /// Expanded region of the last viewport recomputation.
    pub fn cached_region(&self) -> Option<Viewport> {
        self.filter.cached_region()
    }

    /// Decide which segments and markers are drawn for a view.
    ///
    /// `view_to_data` maps device pixels to transformed data units and `view`
    /// is the visible rectangle in transformed data coordinates.
    pub fn filter_for_viewport(
        &mut self,
        view_to_data: &ViewTransform,
        view: Viewport,
    ) -> FilterOutcome {
        self.filter.apply(
            self.data.x_transformed(),
            self.data.y_transformed(),
            &mut self.masks,
            view_to_data,
            view,
            &self.config,
        )
    }

    /// Drop points that lie on the line through their retained neighbours.
    ///
    /// Returns the number of excluded points. The result is combined with the
    /// viewport masks when emitting the polyline.
    pub fn thin_by_interpolation(&mut self, view_to_data: &ViewTransform) -> usize {
        thin_by_interpolation(
            self.data.x_transformed(),
            self.data.y_transformed(),
            &mut self.masks.thinned,
            view_to_data,
            &self.config,
        )
    }

    /// Emit the decimated polyline. Returns the number of segments.
    pub fn emit_polyline<S>(&self, data_to_view: &ViewTransform, sink: &mut S) -> usize
    where
        S: PathSink + ?Sized,
    {
        render::emit_polyline(&self.data, &self.masks, data_to_view, sink)
    }

    /// Emit markers of `shape` and `size` at included points. Returns the
    /// number of markers.
    pub fn emit_markers<S>(
        &self,
        data_to_view: &ViewTransform,
        shape: MarkerShape,
        size: f64,
        sink: &mut S,
    ) -> usize
    where
        S: MarkerSink + ?Sized,
    {
        render::emit_markers(&self.data, &self.masks, data_to_view, shape, size, sink)
    }
}

fn check_domain(axis: Axis, values: &[f64], scale: AxisScale) -> Result<()> {
    match values
        .iter()
        .position(|&value| scale.map_value(value).is_none())
    {
        Some(index) => Err(InputError::Unrepresentable {
            axis,
            index,
            value: values[index],
        }
        .into()),
        None => Ok(()),
    }
}

//! Backend-agnostic geometry emission.
//!
//! Decimated series are written into sinks rather than any drawing API. A UI
//! layer implements [`PathSink`] and [`MarkerSink`] on top of its native
//! primitives, or records commands into a [`RenderList`] and replays them.

use crate::datasource::{InclusionMasks, SampleData};
use crate::geom::Point;
use crate::transform::ViewTransform;

/// Marker shape drawn at included points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerShape {
    /// No markers.
    #[default]
    None,
    /// Axis-aligned square.
    Square,
    /// Circle (ellipse when width and height differ).
    Circle,
    /// Upward-pointing triangle.
    Triangle,
}

/// A single marker glyph in view space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Glyph shape.
    pub shape: MarkerShape,
    /// Glyph centre.
    pub center: Point,
    /// Glyph width.
    pub width: f64,
    /// Glyph height.
    pub height: f64,
}

impl Marker {
    /// Create a marker with equal width and height of `|size|`.
    pub fn new(shape: MarkerShape, center: Point, size: f64) -> Self {
        let size = size.abs();
        Self {
            shape,
            center,
            width: size,
            height: size,
        }
    }
}

/// Receiver for polyline geometry.
pub trait PathSink {
    /// Start a new, disconnected figure.
    fn begin_figure(&mut self, start: Point);
    /// Extend the current figure with a straight segment.
    fn line_to(&mut self, point: Point);
    /// Finish the current figure (open, not closed).
    fn end_figure(&mut self);
}

/// Receiver for marker glyphs.
pub trait MarkerSink {
    /// Accept one marker.
    fn marker(&mut self, marker: Marker);
}

/// Recorded geometry command.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Start a figure.
    BeginFigure(Point),
    /// Line to a point.
    LineTo(Point),
    /// Finish a figure.
    EndFigure,
    /// Draw a marker.
    Marker(Marker),
}

/// Recording sink for both polylines and markers.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Polyline vertices in emission order.
    pub fn vertices(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                RenderCommand::BeginFigure(point) | RenderCommand::LineTo(point) => Some(*point),
                _ => None,
            })
            .collect()
    }

    /// Recorded markers in emission order.
    pub fn markers(&self) -> Vec<Marker> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Marker(marker) => Some(*marker),
                _ => None,
            })
            .collect()
    }
}

impl PathSink for RenderList {
    fn begin_figure(&mut self, start: Point) {
        self.push(RenderCommand::BeginFigure(start));
    }

    fn line_to(&mut self, point: Point) {
        self.push(RenderCommand::LineTo(point));
    }

    fn end_figure(&mut self) {
        self.push(RenderCommand::EndFigure);
    }
}

impl MarkerSink for RenderList {
    fn marker(&mut self, marker: Marker) {
        self.push(RenderCommand::Marker(marker));
    }
}

impl MarkerSink for Vec<Marker> {
    fn marker(&mut self, marker: Marker) {
        self.push(marker);
    }
}

/// Emit the connected polyline of a series.
///
/// The figure starts at point 0; every later point whose segment survives both
/// decimation passes adds a `line_to`. Returns the number of segments emitted.
pub fn emit_polyline<S>(
    data: &SampleData,
    masks: &InclusionMasks,
    data_to_view: &ViewTransform,
    sink: &mut S,
) -> usize
where
    S: PathSink + ?Sized,
{
    let x = data.x_transformed();
    let y = data.y_transformed();
    let Some((&x0, &y0)) = x.first().zip(y.first()) else {
        return 0;
    };
    sink.begin_figure(data_to_view.apply(Point::new(x0, y0)));
    let mut lines = 0;
    for index in 1..x.len() {
        if masks.draws_segment(index) {
            sink.line_to(data_to_view.apply(Point::new(x[index], y[index])));
            lines += 1;
        }
    }
    sink.end_figure();
    lines
}

/// Emit one marker per included point. Returns the number of markers.
pub fn emit_markers<S>(
    data: &SampleData,
    masks: &InclusionMasks,
    data_to_view: &ViewTransform,
    shape: MarkerShape,
    size: f64,
    sink: &mut S,
) -> usize
where
    S: MarkerSink + ?Sized,
{
    if shape == MarkerShape::None {
        return 0;
    }
    let mut count = 0;
    for (index, (&x, &y)) in data
        .x_transformed()
        .iter()
        .zip(data.y_transformed())
        .enumerate()
    {
        if !masks.draws_marker(index) {
            continue;
        }
        let center = data_to_view.apply(Point::new(x, y));
        sink.marker(Marker::new(shape, center, size));
        count += 1;
    }
    count
}

/// Marker for a legend swatch of `size`, centred in its square.
pub fn legend_marker(shape: MarkerShape, size: f64) -> Option<Marker> {
    if shape == MarkerShape::None {
        return None;
    }
    Some(Marker::new(shape, Point::new(size / 2.0, size / 2.0), size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> SampleData {
        SampleData::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 0.0, 1.0]).unwrap()
    }

    #[test]
    fn polyline_skips_excluded_segments() {
        let data = data();
        let mut masks = InclusionMasks::new(4);
        masks.segment[2] = false;
        let mut list = RenderList::new();
        let transform = ViewTransform::scaling(10.0, -10.0);
        let lines = emit_polyline(&data, &masks, &transform, &mut list);
        assert_eq!(lines, 2);
        assert_eq!(
            list.commands(),
            &[
                RenderCommand::BeginFigure(Point::new(0.0, 0.0)),
                RenderCommand::LineTo(Point::new(10.0, -10.0)),
                RenderCommand::LineTo(Point::new(30.0, -10.0)),
                RenderCommand::EndFigure,
            ]
        );
    }

    #[test]
    fn polyline_ands_thinning_mask() {
        let data = data();
        let mut masks = InclusionMasks::new(4);
        masks.thinned[1] = false;
        let mut list = RenderList::new();
        emit_polyline(&data, &masks, &ViewTransform::identity(), &mut list);
        assert_eq!(
            list.vertices(),
            vec![
                Point::new(0.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(3.0, 1.0)
            ]
        );
    }

    #[test]
    fn markers_follow_marker_mask() {
        let data = data();
        let mut masks = InclusionMasks::new(4);
        masks.marker[0] = false;
        masks.marker[3] = false;
        let mut markers: Vec<Marker> = Vec::new();
        let count = emit_markers(
            &data,
            &masks,
            &ViewTransform::identity(),
            MarkerShape::Triangle,
            -6.0,
            &mut markers,
        );
        assert_eq!(count, 2);
        assert_eq!(markers[0].center, Point::new(1.0, 1.0));
        assert_eq!(markers[1].center, Point::new(2.0, 0.0));
        assert!(markers.iter().all(|marker| marker.width == 6.0 && marker.height == 6.0));
    }

    #[test]
    fn no_marker_shape_emits_nothing() {
        let data = data();
        let masks = InclusionMasks::new(4);
        let mut list = RenderList::new();
        let count = emit_markers(
            &data,
            &masks,
            &ViewTransform::identity(),
            MarkerShape::None,
            4.0,
            &mut list,
        );
        assert_eq!(count, 0);
        assert!(list.commands().is_empty());
    }

    #[test]
    fn legend_marker_is_centered() {
        let marker = legend_marker(MarkerShape::Circle, 8.0).unwrap();
        assert_eq!(marker.center, Point::new(4.0, 4.0));
        assert_eq!(marker.width, 8.0);
        assert!(legend_marker(MarkerShape::None, 8.0).is_none());
    }
}

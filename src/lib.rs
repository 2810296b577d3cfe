//! liveplot-curve decides which samples of a dense 2D curve are worth drawing.
//!
//! For a given view it codes every sample against an expanded viewport,
//! collapses off-screen runs and keeps only the extrema of spans where both
//! axes visibly change. An optional interpolation pass thins near-collinear
//! points further. The result is emitted as a polyline and marker descriptors
//! through renderer-neutral sinks.

#![forbid(unsafe_code)]

pub mod axis;
pub mod config;
pub mod datasource;
pub mod decimate;
pub mod error;
pub mod geom;
pub mod render;
pub mod series;
pub mod transform;
pub mod view;

pub use axis::{Axis, AxisScale};
pub use config::FilterConfig;
pub use datasource::{InclusionMasks, Region, SampleData, SortIndex};
pub use decimate::{FilterOutcome, ViewportFilter};
pub use error::{CurveError, InputError, Result};
pub use geom::Point;
pub use render::{
    Marker, MarkerShape, MarkerSink, PathSink, RenderCommand, RenderList, legend_marker,
};
pub use series::SampleSeries;
pub use transform::{AxisMap, ViewTransform};
pub use view::{Range, Viewport};

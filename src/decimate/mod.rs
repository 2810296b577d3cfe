//! View-dependent decimation passes.
//!
//! Both passes read transformed sample values and write into the series'
//! [`InclusionMasks`](crate::datasource::InclusionMasks) in place. Thresholds
//! are expressed in device pixels and converted to data units through the
//! absolute scale of a view-to-data transform.

mod interp;
mod viewport;

pub use interp::thin_by_interpolation;
pub use viewport::ViewportFilter;

/// What a viewport filter call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    /// Series too short to decimate; every mask is set.
    PassThrough,
    /// Degenerate transform or viewport; every mask is set.
    Degenerate,
    /// The cached masks still cover the requested viewport.
    CacheHit,
    /// Masks were recomputed.
    Recomputed {
        /// Segments included by the filter.
        segments: usize,
        /// Markers included by the filter.
        markers: usize,
    },
}

impl FilterOutcome {
    /// Whether the masks were left untouched.
    pub fn is_cache_hit(&self) -> bool {
        matches!(self, Self::CacheHit)
    }
}

//! Per-sample inclusion state shared by the decimation passes.

/// Coarse position of a sample relative to the expanded viewport.
///
/// Codes follow the classic outcode bit values, but a sample only ever carries
/// one of them: classification stops at the first test that fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Region {
    /// Inside the expanded viewport.
    #[default]
    Inside = 0,
    /// X below the minimum.
    Left = 1,
    /// X above the maximum.
    Right = 2,
    /// Y below the minimum.
    Below = 4,
    /// Y above the maximum.
    Above = 8,
}

impl Region {
    /// The raw byte tag.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Whether the sample lies outside the expanded viewport.
    pub fn is_outside(self) -> bool {
        self != Self::Inside
    }
}

/// Inclusion masks for a series.
///
/// `segment[i]` controls the line from point `i - 1` to point `i`;
/// `marker[i]` the glyph at point `i`. The thinning mask is kept apart so the
/// viewport filter and the thinner can be combined: a vertex is emitted only
/// when both agree.
#[derive(Debug, Clone, PartialEq)]
pub struct InclusionMasks {
    pub(crate) segment: Vec<bool>,
    pub(crate) marker: Vec<bool>,
    pub(crate) region: Vec<Region>,
    pub(crate) thinned: Vec<bool>,
}

impl InclusionMasks {
    /// Masks for `len` samples with everything included.
    pub fn new(len: usize) -> Self {
        Self {
            segment: vec![true; len],
            marker: vec![true; len],
            region: vec![Region::Inside; len],
            thinned: vec![true; len],
        }
    }

    /// Number of samples covered.
    pub fn len(&self) -> usize {
        self.segment.len()
    }

    /// Whether the masks cover no samples.
    pub fn is_empty(&self) -> bool {
        self.segment.is_empty()
    }

    /// Include every segment and marker and clear all region codes.
    pub fn include_all(&mut self) {
        self.include_all_viewport();
        self.thinned.fill(true);
    }

    /// Reset only the masks written by the viewport filter.
    pub(crate) fn include_all_viewport(&mut self) {
        self.segment.fill(true);
        self.marker.fill(true);
        self.region.fill(Region::Inside);
    }

    /// Whether the segment ending at `index` is drawn after both passes.
    pub fn draws_segment(&self, index: usize) -> bool {
        self.segment[index] && self.thinned[index]
    }

    /// Whether a marker is drawn at `index`.
    pub fn draws_marker(&self, index: usize) -> bool {
        self.marker[index]
    }

    /// Segment flags written by the viewport filter.
    pub fn segments(&self) -> &[bool] {
        &self.segment
    }

    /// Marker flags written by the viewport filter.
    pub fn markers(&self) -> &[bool] {
        &self.marker
    }

    /// Region codes from the last viewport recomputation.
    pub fn regions(&self) -> &[Region] {
        &self.region
    }

    /// Flags written by the interpolation thinner.
    pub fn thinned(&self) -> &[bool] {
        &self.thinned
    }

    /// Number of segments drawn after both passes.
    pub fn segment_count(&self) -> usize {
        (0..self.len())
            .filter(|&index| self.draws_segment(index))
            .count()
    }

    /// Number of markers drawn.
    pub fn marker_count(&self) -> usize {
        self.marker.iter().filter(|&&included| included).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_codes_match_outcodes() {
        assert_eq!(Region::Inside.code(), 0);
        assert_eq!(Region::Left.code(), 1);
        assert_eq!(Region::Right.code(), 2);
        assert_eq!(Region::Below.code(), 4);
        assert_eq!(Region::Above.code(), 8);
        assert!(!Region::Inside.is_outside());
        assert!(Region::Above.is_outside());
    }

    #[test]
    fn segment_requires_both_masks() {
        let mut masks = InclusionMasks::new(3);
        masks.segment[1] = false;
        masks.thinned[2] = false;
        assert!(masks.draws_segment(0));
        assert!(!masks.draws_segment(1));
        assert!(!masks.draws_segment(2));
        assert_eq!(masks.segment_count(), 1);

        masks.include_all();
        assert_eq!(masks.segment_count(), 3);
        assert_eq!(masks.marker_count(), 3);
    }
}

//! Ordered lookups over transformed sample values.

use tracing::debug;

use crate::axis::Axis;
use crate::view::Range;

#[derive(Debug, Clone, PartialEq)]
enum Order {
    /// The sorted axis is already non-decreasing; lookups use it directly.
    Natural,
    /// X had to be sorted explicitly.
    Permuted {
        values: Vec<f64>,
        permutation: Vec<usize>,
    },
}

/// Sort index over the transformed arrays of a series.
///
/// Either X or Y is used as-is when it is non-decreasing (X is preferred);
/// otherwise X is stably sorted together with a permutation from sorted
/// position back to the original sample index.
#[derive(Debug, Clone, PartialEq)]
pub struct SortIndex {
    axis: Axis,
    order: Order,
}

impl SortIndex {
    /// Build an index for the given transformed arrays.
    pub fn new(x: &[f64], y: &[f64]) -> Self {
        let mut index = Self {
            axis: Axis::X,
            order: Order::Natural,
        };
        index.rebuild(x, y);
        index
    }

    /// Recompute the index after the transformed arrays changed.
    pub fn rebuild(&mut self, x: &[f64], y: &[f64]) {
        profiling::scope!("sort_index_rebuild");
        if is_monotonic(x) {
            self.axis = Axis::X;
            self.order = Order::Natural;
        } else if is_monotonic(y) {
            self.axis = Axis::Y;
            self.order = Order::Natural;
        } else {
            let mut permutation: Vec<usize> = (0..x.len()).collect();
            // `sort_by` is stable: equal X values keep their sample order.
            permutation.sort_by(|&a, &b| x[a].total_cmp(&x[b]));
            let values = permutation.iter().map(|&index| x[index]).collect();
            self.axis = Axis::X;
            self.order = Order::Permuted {
                values,
                permutation,
            };
        }
        debug!(
            axis = %self.axis,
            permuted = self.is_permuted(),
            points = x.len(),
            "rebuilt sort index"
        );
    }

    /// Axis whose values back the index.
    pub fn sorted_axis(&self) -> Axis {
        self.axis
    }

    /// Whether an explicit sort was required.
    pub fn is_permuted(&self) -> bool {
        matches!(self.order, Order::Permuted { .. })
    }

    /// Non-decreasing values used for lookups.
    ///
    /// `x` and `y` must be the transformed arrays the index was built from.
    pub fn sorted_values<'a>(&'a self, x: &'a [f64], y: &'a [f64]) -> &'a [f64] {
        match &self.order {
            Order::Permuted { values, .. } => values,
            Order::Natural => match self.axis {
                Axis::X => x,
                Axis::Y => y,
            },
        }
    }

    /// Sorted position to original index mapping, `None` when it is the identity.
    pub fn permutation(&self) -> Option<&[usize]> {
        match &self.order {
            Order::Permuted { permutation, .. } => Some(permutation),
            Order::Natural => None,
        }
    }

    /// Map a sorted position back to the original sample index.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not below the number of indexed samples.
    pub fn original_index(&self, position: usize) -> usize {
        match &self.order {
            Order::Permuted { permutation, .. } => permutation[position],
            Order::Natural => position,
        }
    }

    /// Original index of the sample whose sorted value is nearest to `value`.
    ///
    /// Ties resolve to the lower sorted position. `sorted_values` must be the
    /// slice returned by [`SortIndex::sorted_values`] for the indexed samples.
    pub(crate) fn nearest_index(&self, sorted_values: &[f64], value: f64) -> Option<usize> {
        if sorted_values.is_empty() || !value.is_finite() {
            return None;
        }
        let lower = lower_bound(sorted_values, value);
        let position = if lower == 0 {
            0
        } else if lower >= sorted_values.len() {
            sorted_values.len() - 1
        } else {
            let left = lower - 1;
            let left_dist = (sorted_values[left] - value).abs();
            let right_dist = (sorted_values[lower] - value).abs();
            if left_dist <= right_dist { left } else { lower }
        };
        Some(self.original_index(position))
    }

    /// Sorted positions whose values fall inside `range` (bounds inclusive).
    pub(crate) fn sorted_range(
        &self,
        sorted_values: &[f64],
        range: Range,
    ) -> std::ops::Range<usize> {
        if sorted_values.is_empty() {
            return 0..0;
        }
        let start = lower_bound(sorted_values, range.min);
        let end = upper_bound(sorted_values, range.max);
        start..end.max(start)
    }
}

/// Check that every adjacent pair is non-decreasing.
///
/// The final pair is included: a trailing decrease makes the array unsorted.
pub fn is_monotonic(values: &[f64]) -> bool {
    values.windows(2).all(|pair| pair[1] >= pair[0])
}

fn lower_bound(values: &[f64], target: f64) -> usize {
    let mut left = 0;
    let mut right = values.len();
    while left < right {
        let mid = (left + right) / 2;
        if values[mid] < target {
            left = mid + 1;
        } else {
            right = mid;
        }
    }
    left
}

fn upper_bound(values: &[f64], target: f64) -> usize {
    let mut left = 0;
    let mut right = values.len();
    while left < right {
        let mid = (left + right) / 2;
        if values[mid] <= target {
            left = mid + 1;
        } else {
            right = mid;
        }
    }
    left
}

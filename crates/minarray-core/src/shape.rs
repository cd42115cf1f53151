//! Shape and stride utilities
//!
//! Pure functions over extents and axis orders, plus the [`Layout`] value
//! that pairs a normalized two-dimensional shape with its strides. Strides
//! are counted in elements, not bytes.

use smallvec::SmallVec;

/// Rank every array is normalized to.
pub const MAX_RANK: usize = 2;

/// Caller-facing shape, stored inline for the ranks this engine supports.
pub type Shape = SmallVec<[usize; MAX_RANK]>;

/// Number of elements described by `shape` (0 if any extent is 0).
///
/// # Examples
///
/// ```
/// use minarray_core::shape::element_count;
///
/// assert_eq!(element_count(&[4, 2]), 8);
/// assert_eq!(element_count(&[3, 0]), 0);
/// ```
pub fn element_count(shape: &[usize]) -> usize {
    shape.iter().product()
}

/// Number of elements described by `shape`, or `None` if the product
/// overflows `usize`.
///
/// # Examples
///
/// ```
/// use minarray_core::shape::checked_element_count;
///
/// assert_eq!(checked_element_count(&[4, 2]), Some(8));
/// assert_eq!(checked_element_count(&[1 << 62, 4]), None);
/// ```
pub fn checked_element_count(shape: &[usize]) -> Option<usize> {
    shape
        .iter()
        .try_fold(1usize, |count, &extent| count.checked_mul(extent))
}

/// Row-major (C-order) strides: the last axis is contiguous and every other
/// stride is the next stride times the next extent.
///
/// # Examples
///
/// ```
/// use minarray_core::shape::row_major_strides;
///
/// assert_eq!(row_major_strides(&[4, 2]).as_slice(), &[2, 1]);
/// assert_eq!(row_major_strides(&[3, 1]).as_slice(), &[1, 1]);
/// ```
pub fn row_major_strides(shape: &[usize]) -> Shape {
    let mut strides: Shape = SmallVec::from_elem(1, shape.len());
    for k in (0..shape.len().saturating_sub(1)).rev() {
        strides[k] = strides[k + 1] * shape[k + 1];
    }
    strides
}

/// Whether `rank` is one the engine accepts on input.
pub fn validate_rank(rank: usize) -> bool {
    (1..=MAX_RANK).contains(&rank)
}

/// Pad `shape` with trailing extents of 1 up to `target_rank`.
pub fn promote_shape(shape: &[usize], target_rank: usize) -> Shape {
    let mut promoted: Shape = shape.iter().copied().collect();
    while promoted.len() < target_rank {
        promoted.push(1);
    }
    promoted
}

/// `shape` with `axis` removed. A rank-1 input yields `[1]`, never an empty
/// shape.
///
/// # Examples
///
/// ```
/// use minarray_core::shape::remove_axis;
///
/// assert_eq!(remove_axis(&[3, 5], 0).as_slice(), &[5]);
/// assert_eq!(remove_axis(&[7], 0).as_slice(), &[1]);
/// ```
pub fn remove_axis(shape: &[usize], axis: usize) -> Shape {
    let reduced: Shape = shape
        .iter()
        .enumerate()
        .filter(|&(k, _)| k != axis)
        .map(|(_, &extent)| extent)
        .collect();
    if reduced.is_empty() {
        SmallVec::from_elem(1, 1)
    } else {
        reduced
    }
}

/// `[0, 1, ..., n - 1]`
pub fn identity_permutation(n: usize) -> Shape {
    (0..n).collect()
}

/// Swap two entries of a permutation in place.
pub fn swap_indices(perm: &mut [usize], i: usize, j: usize) {
    perm.swap(i, j);
}

/// Whether `perm` contains every axis of `0..rank` exactly once.
pub fn is_permutation(perm: &[usize], rank: usize) -> bool {
    if perm.len() != rank {
        return false;
    }
    let mut seen = [false; MAX_RANK];
    perm.iter().all(|&axis| {
        if axis >= rank || axis >= MAX_RANK || seen[axis] {
            return false;
        }
        seen[axis] = true;
        true
    })
}

/// Extents and element strides of a normalized two-dimensional array.
///
/// Element `(i, j)` lives at `i * strides[0] + j * strides[1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// Extent of each axis
    pub shape: [usize; MAX_RANK],
    /// Element stride of each axis
    pub strides: [usize; MAX_RANK],
}

impl Layout {
    /// Contiguous row-major layout for `shape`.
    pub fn contiguous(shape: [usize; MAX_RANK]) -> Self {
        let strides = row_major_strides(&shape);
        Layout {
            shape,
            strides: [strides[0], strides[1]],
        }
    }

    /// Layout with axes reordered so that new axis `k` is old axis `perm[k]`.
    ///
    /// `perm` must be a permutation of `0..MAX_RANK`.
    pub fn permuted(&self, perm: &[usize]) -> Self {
        let mut out = *self;
        for (k, &axis) in perm.iter().enumerate() {
            out.shape[k] = self.shape[axis];
            out.strides[k] = self.strides[axis];
        }
        out
    }

    /// Same layout with the two axes exchanged.
    pub fn swapped(&self) -> Self {
        self.permuted(&[1, 0])
    }

    /// Element offset of `(i, j)`.
    #[inline]
    pub fn offset(&self, i: usize, j: usize) -> usize {
        i * self.strides[0] + j * self.strides[1]
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        element_count(&self.shape)
    }

    /// Whether the layout holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the strides are the row-major strides of the current shape.
    pub fn is_contiguous(&self) -> bool {
        *self == Layout::contiguous(self.shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_count() {
        assert_eq!(element_count(&[3, 7]), 21);
        assert_eq!(element_count(&[5]), 5);
        assert_eq!(element_count(&[0, 4]), 0);
    }

    #[test]
    fn test_checked_element_count() {
        assert_eq!(checked_element_count(&[3, 7]), Some(21));
        assert_eq!(checked_element_count(&[0, usize::MAX]), Some(0));
        assert_eq!(checked_element_count(&[usize::MAX / 2, 4]), None);
    }

    #[test]
    fn test_row_major_strides() {
        assert_eq!(row_major_strides(&[3, 7]).as_slice(), &[7, 1]);
        assert_eq!(row_major_strides(&[9]).as_slice(), &[1]);
        assert!(row_major_strides(&[]).is_empty());
    }

    #[test]
    fn test_validate_rank() {
        assert!(!validate_rank(0));
        assert!(validate_rank(1));
        assert!(validate_rank(2));
        assert!(!validate_rank(3));
    }

    #[test]
    fn test_promote_shape() {
        assert_eq!(promote_shape(&[3], 2).as_slice(), &[3, 1]);
        assert_eq!(promote_shape(&[4, 2], 2).as_slice(), &[4, 2]);
    }

    #[test]
    fn test_remove_axis() {
        assert_eq!(remove_axis(&[3, 5], 1).as_slice(), &[3]);
        assert_eq!(remove_axis(&[3, 5], 0).as_slice(), &[5]);
        assert_eq!(remove_axis(&[8], 0).as_slice(), &[1]);
    }

    #[test]
    fn test_permutation_helpers() {
        let mut perm = identity_permutation(2);
        assert_eq!(perm.as_slice(), &[0, 1]);
        swap_indices(&mut perm, 0, 1);
        assert_eq!(perm.as_slice(), &[1, 0]);

        assert!(is_permutation(&[1, 0], 2));
        assert!(is_permutation(&[0, 1], 2));
        assert!(!is_permutation(&[1, 1], 2));
        assert!(!is_permutation(&[1, 2], 2));
        assert!(!is_permutation(&[0], 2));
    }

    #[test]
    fn test_layout_transpose() {
        let layout = Layout::contiguous([4, 2]);
        assert_eq!(layout.strides, [2, 1]);

        let t = layout.swapped();
        assert_eq!(t.shape, [2, 4]);
        assert_eq!(t.strides, [1, 2]);
        assert!(!t.is_contiguous());
        assert_eq!(t.swapped(), layout);
        assert_eq!(t.offset(1, 3), 7);
    }

    #[test]
    fn test_unit_extent_layout_is_contiguous_either_way() {
        let layout = Layout::contiguous([1, 1]);
        assert!(layout.swapped().is_contiguous());
    }
}

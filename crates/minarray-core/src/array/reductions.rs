//! Axis reductions

use super::Array;
use crate::error::{ArrayError, ArrayResult};
use crate::shape::{identity_permutation, remove_axis, swap_indices, MAX_RANK};
use tracing::instrument;

impl Array {
    /// Sum along `axis`, returning a new array of the same dtype.
    ///
    /// The reduced axis is dropped from the shape and the result is promoted
    /// back to rank 2, so summing a `[3, 5]` array over axis 0 yields shape
    /// `[5, 1]`. The reduction runs over a permuted view of the layout; the
    /// operand itself is never modified.
    ///
    /// Integer sums wrap on overflow.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidAxis`] when `axis >= rank`.
    ///
    /// # Examples
    ///
    /// ```
    /// use minarray_core::Array;
    ///
    /// let c = Array::from_slice(&[2i64, -81, 26, 17, 102, -3], &[2, 3]).unwrap();
    /// assert_eq!(c.sum(0).unwrap().to_vec::<i64>().unwrap(), vec![19, 21, 23]);
    /// assert_eq!(c.sum(1).unwrap().to_vec::<i64>().unwrap(), vec![-53, 116]);
    /// ```
    #[instrument(level = "debug", skip(self), fields(shape = ?self.shape(), dtype = %self.dtype))]
    pub fn sum(&self, axis: usize) -> ArrayResult<Array> {
        if axis >= MAX_RANK {
            return Err(ArrayError::InvalidAxis {
                axis,
                rank: MAX_RANK,
            });
        }

        let mut out = Array::allocate(&remove_axis(self.shape(), axis), self.dtype)?;

        let mut perm = identity_permutation(MAX_RANK);
        swap_indices(&mut perm, axis, MAX_RANK - 1);
        let view = self.layout.permuted(&perm);
        let flat = self.ravel_with(&view);

        let [outer, inner] = view.shape;
        let size = self.dtype.size_bytes();
        let reduce_sum = self.dtype.kernels().reduce_sum;
        let src = flat.as_bytes();
        let dst = out.data.as_bytes_mut();
        let run = inner * size;

        for i in 0..outer {
            reduce_sum(
                &mut dst[i * size..(i + 1) * size],
                &src[i * run..(i + 1) * run],
                inner,
            );
        }
        Ok(out)
    }
}

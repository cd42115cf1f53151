//! Matrix product

use super::Array;
use crate::error::{ArrayError, ArrayResult};
use minarray_kernels::ElementType;
use tracing::instrument;

impl Array {
    /// Matrix product `self · other`.
    ///
    /// For `self` of shape `[m, n]` and `other` of shape `[n, p]` the result
    /// has shape `[m, p]` and the dtype of both operands. Each output cell is
    /// accumulated from zero with the multiply-add kernel, so integer products
    /// wrap on overflow. Neither operand is modified, which also makes
    /// `a.dot(&a)` legal for square `a`.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::ShapeMismatch`] when the inner dimensions differ
    /// - [`ArrayError::DtypeMismatch`] when the element types differ
    ///
    /// The shape check runs first.
    ///
    /// # Examples
    ///
    /// ```
    /// use minarray_core::Array;
    ///
    /// let a = Array::from_slice(&[3i32, 1, 5, 4], &[1, 4]).unwrap();
    /// let b = Array::from_slice(&[0i32, 2, 6, 3], &[4, 1]).unwrap();
    /// assert_eq!(a.dot(&b).unwrap().to_vec::<i32>().unwrap(), vec![44]);
    /// ```
    #[instrument(
        level = "debug",
        skip(self, other),
        fields(left = ?self.shape(), right = ?other.shape(), dtype = %self.dtype)
    )]
    pub fn dot(&self, other: &Array) -> ArrayResult<Array> {
        let [rows, inner] = self.layout.shape;
        let [other_inner, cols] = other.layout.shape;
        if inner != other_inner {
            return Err(ArrayError::shape_mismatch("dot", self.shape(), other.shape()));
        }
        if self.dtype != other.dtype {
            return Err(ArrayError::dtype_mismatch("dot", self.dtype, other.dtype));
        }

        let mut out = Array::allocate(&[rows, cols], self.dtype)?;

        // Rows of `lhs` and rows of `rhs` (columns of `other`) are both
        // contiguous runs of `inner` elements.
        let lhs = self.ravel();
        let rhs = other.ravel_with(&other.layout.swapped());

        let size = self.dtype.size_bytes();
        let k = self.dtype.kernels();
        let run = inner * size;
        let a = lhs.as_bytes();
        let b = rhs.as_bytes();
        let dst = out.data.as_bytes_mut();
        let mut acc = [0u8; ElementType::MAX_SIZE_BYTES];

        for i in 0..rows {
            let row = &a[i * run..(i + 1) * run];
            for j in 0..cols {
                let col = &b[j * run..(j + 1) * run];
                (k.zero_scalar)(&mut acc, 0);
                (k.reduce_multiply_add)(&mut acc, row, col, inner);
                (k.add_scalar)(dst, (i * cols + j) * size, &acc, 0);
            }
        }
        Ok(out)
    }
}

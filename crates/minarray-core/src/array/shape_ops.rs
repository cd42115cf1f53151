//! Copy, ravel and transpose
//!
//! Transposition only rewrites the layout; the buffer is never moved.
//! Ravel walks the current layout and materializes a row-major byte copy.

use super::Array;
use crate::error::{ArrayError, ArrayResult};
use crate::shape::{is_permutation, Layout, MAX_RANK};
use minarray_kernels::Buffer;
use tracing::debug;

impl Array {
    /// Independent copy with the same dtype and shape.
    ///
    /// The buffer is duplicated in storage order and given contiguous
    /// strides for the current shape. For an array whose layout is not
    /// contiguous (e.g. after [`Array::transpose`]) the logical element
    /// order of the copy therefore differs from the source; use
    /// [`Array::to_contiguous`] to preserve it.
    pub fn copy(&self) -> Array {
        Array {
            data: self.data.clone(),
            dtype: self.dtype,
            layout: Layout::contiguous(self.layout.shape),
        }
    }

    /// Copy that preserves logical element order, with contiguous strides.
    ///
    /// # Examples
    ///
    /// ```
    /// use minarray_core::Array;
    ///
    /// let mut a = Array::from_slice(&[1i32, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
    /// a.transpose(&[1, 0]).unwrap();
    /// let b = a.to_contiguous();
    /// assert!(b.is_contiguous());
    /// assert_eq!(b.to_vec::<i32>().unwrap(), a.to_vec::<i32>().unwrap());
    /// ```
    pub fn to_contiguous(&self) -> Array {
        Array {
            data: self.ravel(),
            dtype: self.dtype,
            layout: Layout::contiguous(self.layout.shape),
        }
    }

    /// Row-major byte copy of the elements in logical order.
    pub fn ravel(&self) -> Buffer {
        self.ravel_with(&self.layout)
    }

    /// Row-major byte copy of the elements as seen through `layout`.
    ///
    /// `layout` must address only elements of this array's buffer.
    pub(crate) fn ravel_with(&self, layout: &Layout) -> Buffer {
        if layout.is_contiguous() {
            return self.data.clone();
        }

        let size = self.dtype.size_bytes();
        let set_scalar = self.dtype.kernels().set_scalar;
        let [rows, cols] = layout.shape;
        let src = self.data.as_bytes();
        let mut out = Buffer::zeroed(layout.len() * size);
        let dst = out.as_bytes_mut();

        for i in 0..rows {
            for j in 0..cols {
                set_scalar(dst, (i * cols + j) * size, src, layout.offset(i, j) * size);
            }
        }
        out
    }

    /// Reorder the axes in place: new axis `k` is old axis `perm[k]`.
    ///
    /// Only shape and strides change. Transposing twice with `[1, 0]`
    /// restores the original layout exactly.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidPermutation`] unless `perm` is a
    /// permutation of `0..rank`; the array is left untouched.
    pub fn transpose(&mut self, perm: &[usize]) -> ArrayResult<()> {
        if !is_permutation(perm, MAX_RANK) {
            return Err(ArrayError::InvalidPermutation {
                perm: perm.to_vec(),
                rank: MAX_RANK,
            });
        }
        self.layout = self.layout.permuted(perm);
        debug!(?perm, shape = ?self.layout.shape, strides = ?self.layout.strides, "transposed");
        Ok(())
    }
}

//! Strided two-dimensional array
//!
//! This module defines [`Array`], the sole entity of the engine: an owned
//! byte buffer, an immutable element type and a mutable [`Layout`]. The
//! operations are split across sub-modules by concern:
//!
//! - construction, fills and accessors (this file)
//! - [`shape_ops`]: copy, ravel, transpose
//! - [`reductions`]: axis sum
//! - [`linalg`]: matrix product

mod linalg;
mod reductions;
mod shape_ops;

use crate::error::{ArrayError, ArrayResult};
use crate::shape::{checked_element_count, promote_shape, validate_rank, Layout, MAX_RANK};
use minarray_kernels::{Buffer, Element, ElementType};
use std::fmt;
use tracing::debug;

/// Strided two-dimensional numeric array.
///
/// Every array is normalized to rank 2 at construction: a rank-1 shape
/// `[n]` becomes `[n, 1]`. The buffer is exclusively owned; dropping the
/// array (or calling [`Array::free`]) releases it together with the
/// metadata.
///
/// # Examples
///
/// ```
/// use minarray_core::{Array, ElementType};
///
/// let a = Array::allocate(&[3], ElementType::Float64).unwrap();
/// assert_eq!(a.rank(), 2);
/// assert_eq!(a.shape(), &[3, 1]);
/// assert_eq!(a.strides(), &[1, 1]);
/// ```
pub struct Array {
    pub(crate) data: Buffer,
    pub(crate) dtype: ElementType,
    pub(crate) layout: Layout,
}

impl Array {
    /// Allocate a zero-filled array.
    ///
    /// # Errors
    ///
    /// - [`ArrayError::InvalidRank`] unless `shape` has 1 or 2 extents
    /// - [`ArrayError::SizeOverflow`] when the byte size does not fit in `usize`
    pub fn allocate(shape: &[usize], dtype: ElementType) -> ArrayResult<Self> {
        if !validate_rank(shape.len()) {
            return Err(ArrayError::InvalidRank { rank: shape.len() });
        }

        let promoted = promote_shape(shape, MAX_RANK);
        let size_bytes = checked_element_count(&promoted)
            .and_then(|count| count.checked_mul(dtype.size_bytes()))
            .ok_or_else(|| ArrayError::SizeOverflow {
                shape: shape.to_vec(),
                dtype,
            })?;
        let layout = Layout::contiguous([promoted[0], promoted[1]]);
        let data = Buffer::zeroed(size_bytes);
        debug!(shape = ?layout.shape, %dtype, "allocated array");

        Ok(Self {
            data,
            dtype,
            layout,
        })
    }

    /// Alias of [`Array::allocate`].
    pub fn zeros(shape: &[usize], dtype: ElementType) -> ArrayResult<Self> {
        Self::allocate(shape, dtype)
    }

    /// Allocate an array filled with ones.
    pub fn ones(shape: &[usize], dtype: ElementType) -> ArrayResult<Self> {
        let mut array = Self::allocate(shape, dtype)?;
        array.fill_constant(1.0);
        Ok(array)
    }

    /// Build an array from row-major values of a native type.
    ///
    /// # Examples
    ///
    /// ```
    /// use minarray_core::Array;
    ///
    /// let a = Array::from_slice(&[2i32, -81, 26, 17, 102, -3], &[2, 3]).unwrap();
    /// assert_eq!(a.strides(), &[3, 1]);
    /// assert_eq!(a.to_vec::<i32>().unwrap(), vec![2, -81, 26, 17, 102, -3]);
    /// ```
    pub fn from_slice<T: Element>(values: &[T], shape: &[usize]) -> ArrayResult<Self> {
        let mut array = Self::allocate(shape, T::TYPE)?;
        array.fill_from_slice(values)?;
        Ok(array)
    }

    /// Build an array of `dtype` from row-major `f64` values, casting each one
    /// the way [`Array::fill_constant`] does.
    pub fn from_f64(values: &[f64], shape: &[usize], dtype: ElementType) -> ArrayResult<Self> {
        let mut array = Self::allocate(shape, dtype)?;
        if values.len() != array.len() {
            return Err(ArrayError::LengthMismatch {
                expected: array.len(),
                actual: values.len(),
            });
        }

        let k = dtype.kernels();
        let size = dtype.size_bytes();
        let bytes = array.data.as_bytes_mut();
        for (i, &value) in values.iter().enumerate() {
            (k.fill_constant)(&mut bytes[i * size..], 1, value);
        }
        Ok(array)
    }

    /// Allocate an array of integers drawn uniformly from `[low, high]`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidRange`] when `high <= low`.
    pub fn randint(shape: &[usize], dtype: ElementType, low: i64, high: i64) -> ArrayResult<Self> {
        if high <= low {
            return Err(ArrayError::InvalidRange { low, high });
        }
        let mut array = Self::allocate(shape, dtype)?;
        array.fill_uniform_int(low, high)?;
        Ok(array)
    }

    /// Release the buffer and metadata.
    pub fn free(self) {
        drop(self);
    }

    /// Overwrite every element with `value` cast to the element type.
    pub fn fill_constant(&mut self, value: f64) {
        let n = self.len();
        (self.dtype.kernels().fill_constant)(self.data.as_bytes_mut(), n, value);
    }

    /// Overwrite the buffer with raw bytes of the same element type.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::LengthMismatch`] (in bytes) unless `src` covers
    /// the buffer exactly.
    pub fn fill_from_source(&mut self, src: &[u8]) -> ArrayResult<()> {
        if src.len() != self.data.len() {
            return Err(ArrayError::LengthMismatch {
                expected: self.data.len(),
                actual: src.len(),
            });
        }
        let n = self.len();
        (self.dtype.kernels().fill_from_source)(self.data.as_bytes_mut(), n, src);
        Ok(())
    }

    /// Overwrite the buffer with native values.
    pub fn fill_from_slice<T: Element>(&mut self, values: &[T]) -> ArrayResult<()> {
        if T::TYPE != self.dtype {
            return Err(ArrayError::dtype_mismatch("fill", self.dtype, T::TYPE));
        }
        if values.len() != self.len() {
            return Err(ArrayError::LengthMismatch {
                expected: self.len(),
                actual: values.len(),
            });
        }
        self.fill_from_source(bytemuck::cast_slice(values))
    }

    /// Overwrite every element with an integer drawn uniformly from
    /// `[low, high]`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidRange`] when `low > high`.
    pub fn fill_uniform_int(&mut self, low: i64, high: i64) -> ArrayResult<()> {
        if low > high {
            return Err(ArrayError::InvalidRange { low, high });
        }
        let n = self.len();
        (self.dtype.kernels().fill_uniform_int)(self.data.as_bytes_mut(), n, low, high);
        Ok(())
    }

    /// Element type.
    pub fn dtype(&self) -> ElementType {
        self.dtype
    }

    /// Number of dimensions; always 2.
    pub fn rank(&self) -> usize {
        MAX_RANK
    }

    /// Current extents.
    pub fn shape(&self) -> &[usize] {
        &self.layout.shape
    }

    /// Current element strides.
    pub fn strides(&self) -> &[usize] {
        &self.layout.strides
    }

    /// Shape and strides as a value.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.layout.len()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    /// Buffer length in bytes.
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Whether logical order matches storage order.
    pub fn is_contiguous(&self) -> bool {
        self.layout.is_contiguous()
    }

    /// Raw buffer in storage order.
    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_bytes()
    }

    /// Typed view of the buffer in storage order (ignores strides).
    pub fn as_slice<T: Element>(&self) -> ArrayResult<&[T]> {
        if T::TYPE != self.dtype {
            return Err(ArrayError::dtype_mismatch("as_slice", self.dtype, T::TYPE));
        }
        Ok(self.data.typed::<T>())
    }

    /// Elements in logical row-major order.
    pub fn to_vec<T: Element>(&self) -> ArrayResult<Vec<T>> {
        if T::TYPE != self.dtype {
            return Err(ArrayError::dtype_mismatch("to_vec", self.dtype, T::TYPE));
        }
        Ok(self.ravel().to_vec::<T>())
    }

    /// Elements in logical row-major order, widened to `f64`.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        let k = self.dtype.kernels();
        let size = self.dtype.size_bytes();
        let flat = self.ravel();
        (0..self.len())
            .map(|i| (k.scalar_to_f64)(flat.as_bytes(), i * size))
            .collect()
    }
}

/// Release an optional array; `None` is a no-op.
pub fn release(array: Option<Array>) {
    if let Some(array) = array {
        array.free();
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("dtype", &self.dtype)
            .field("shape", &self.layout.shape)
            .field("strides", &self.layout.strides)
            .finish()
    }
}

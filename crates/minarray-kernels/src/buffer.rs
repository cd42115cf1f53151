//! Owned, aligned byte storage
//!
//! [`Buffer`] is the single owner of an array's bytes and of the scratch
//! buffers produced by ravel. Storage is backed by `u64` words so every
//! element type can be viewed in place through `bytemuck` without copying.

use bytemuck::Pod;
use std::fmt;

const WORD: usize = std::mem::size_of::<u64>();

/// Zero-initialised, 8-byte aligned, exclusively owned byte buffer.
///
/// # Examples
///
/// ```
/// use minarray_kernels::Buffer;
///
/// let buf = Buffer::from_slice(&[1.0f64, 2.0, 3.0]);
/// assert_eq!(buf.len(), 24);
/// assert_eq!(buf.typed::<f64>(), &[1.0, 2.0, 3.0]);
/// ```
#[derive(Clone)]
pub struct Buffer {
    words: Vec<u64>,
    len: usize,
}

impl Buffer {
    /// Allocate `len` zero bytes.
    pub fn zeroed(len: usize) -> Self {
        Self {
            words: vec![0u64; len.div_ceil(WORD)],
            len,
        }
    }

    /// Copy raw bytes into a fresh buffer.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut buf = Self::zeroed(bytes.len());
        buf.as_bytes_mut().copy_from_slice(bytes);
        buf
    }

    /// Copy typed values into a fresh buffer.
    pub fn from_slice<T: Pod>(values: &[T]) -> Self {
        Self::from_bytes(bytemuck::cast_slice(values))
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &bytemuck::cast_slice::<u64, u8>(&self.words)[..self.len]
    }

    /// Raw bytes, mutably.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let len = self.len;
        &mut bytemuck::cast_slice_mut::<u64, u8>(&mut self.words)[..len]
    }

    /// View the bytes as a slice of `T`.
    ///
    /// # Panics
    ///
    /// Panics if the byte length is not a multiple of `size_of::<T>()`.
    pub fn typed<T: Pod>(&self) -> &[T] {
        bytemuck::cast_slice(self.as_bytes())
    }

    /// View the bytes as a mutable slice of `T`.
    ///
    /// # Panics
    ///
    /// Panics if the byte length is not a multiple of `size_of::<T>()`.
    pub fn typed_mut<T: Pod>(&mut self) -> &mut [T] {
        bytemuck::cast_slice_mut(self.as_bytes_mut())
    }

    /// Copy the contents out as a `Vec<T>`.
    pub fn to_vec<T: Pod>(&self) -> Vec<T> {
        self.typed::<T>().to_vec()
    }
}

impl PartialEq for Buffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Buffer {}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer").field("len", &self.len).finish()
    }
}

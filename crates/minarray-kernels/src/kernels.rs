//! Per-type kernels over raw byte buffers
//!
//! Each element type owns one static [`Kernels`] table of plain function
//! pointers, looked up with [`ElementType::kernels`]. The functions are
//! instantiated once per [`Element`] at build time.
//!
//! # Offsets and slices
//!
//! Scalar entries (`set_scalar`, `add_scalar`, `zero_scalar`, `format_scalar`)
//! take **byte** offsets computed by the caller. Bulk entries take byte slices
//! positioned at their first element plus an element count. Kernels never read
//! shape or stride metadata and never assume alignment.
//!
//! # Examples
//!
//! ```
//! use minarray_kernels::{Buffer, ElementType};
//!
//! let k = ElementType::Int64.kernels();
//! let mut buf = Buffer::zeroed(3 * 8);
//! (k.fill_constant)(buf.as_bytes_mut(), 3, 2.0);
//!
//! let mut acc = [0u8; 8];
//! (k.reduce_sum)(&mut acc, buf.as_bytes(), 3);
//! assert_eq!(i64::from_ne_bytes(acc), 6);
//! ```

use crate::dtype::ElementType;
use crate::element::Element;
use scirs2_core::random::quick::random_f64;
use std::fmt;
use std::mem::size_of;

/// Dispatch table of primitive operations for one element type.
#[derive(Clone, Copy)]
pub struct Kernels {
    /// Element type these kernels operate on
    pub dtype: ElementType,
    /// `dst[dst_off] = src[src_off]`
    pub set_scalar: fn(dst: &mut [u8], dst_off: usize, src: &[u8], src_off: usize),
    /// `dst[dst_off] += src[src_off]` in native arithmetic
    pub add_scalar: fn(dst: &mut [u8], dst_off: usize, src: &[u8], src_off: usize),
    /// `dst[off] = 0`
    pub zero_scalar: fn(dst: &mut [u8], off: usize),
    /// Write `n` copies of `value` cast to the element type
    pub fill_constant: fn(dst: &mut [u8], n: usize, value: f64),
    /// Copy `n` elements of the same type from `src`
    pub fill_from_source: fn(dst: &mut [u8], n: usize, src: &[u8]),
    /// Write `n` integers drawn uniformly from `[low, high]`
    pub fill_uniform_int: fn(dst: &mut [u8], n: usize, low: i64, high: i64),
    /// `acc[0] += sum(a[i] * b[i])` over `n` elements
    pub reduce_multiply_add: fn(acc: &mut [u8], a: &[u8], b: &[u8], n: usize),
    /// `acc[0] += sum(src[i])` over `n` elements
    pub reduce_sum: fn(acc: &mut [u8], src: &[u8], n: usize),
    /// Widen `src[off]` to `f64`
    pub scalar_to_f64: fn(src: &[u8], off: usize) -> f64,
    /// Render `src[off]` as `%1.2e`
    pub format_scalar: fn(src: &[u8], off: usize) -> String,
}

impl Kernels {
    /// Build the table for element type `T`.
    pub const fn of<T: Element>() -> Self {
        Kernels {
            dtype: T::TYPE,
            set_scalar: set_scalar::<T>,
            add_scalar: add_scalar::<T>,
            zero_scalar: zero_scalar::<T>,
            fill_constant: fill_constant::<T>,
            fill_from_source: fill_from_source::<T>,
            fill_uniform_int: fill_uniform_int::<T>,
            reduce_multiply_add: reduce_multiply_add::<T>,
            reduce_sum: reduce_sum::<T>,
            scalar_to_f64: scalar_to_f64::<T>,
            format_scalar: format_scalar::<T>,
        }
    }
}

impl fmt::Debug for Kernels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kernels").field("dtype", &self.dtype).finish()
    }
}

static INT32_KERNELS: Kernels = Kernels::of::<i32>();
static INT64_KERNELS: Kernels = Kernels::of::<i64>();
static FLOAT32_KERNELS: Kernels = Kernels::of::<f32>();
static FLOAT64_KERNELS: Kernels = Kernels::of::<f64>();

impl ElementType {
    /// The kernel table for this element type.
    pub fn kernels(self) -> &'static Kernels {
        match self {
            ElementType::Int32 => &INT32_KERNELS,
            ElementType::Int64 => &INT64_KERNELS,
            ElementType::Float32 => &FLOAT32_KERNELS,
            ElementType::Float64 => &FLOAT64_KERNELS,
        }
    }
}

#[inline]
fn read<T: Element>(src: &[u8], off: usize) -> T {
    bytemuck::pod_read_unaligned(&src[off..off + size_of::<T>()])
}

#[inline]
fn write<T: Element>(dst: &mut [u8], off: usize, value: T) {
    dst[off..off + size_of::<T>()].copy_from_slice(bytemuck::bytes_of(&value));
}

fn set_scalar<T: Element>(dst: &mut [u8], dst_off: usize, src: &[u8], src_off: usize) {
    write(dst, dst_off, read::<T>(src, src_off));
}

fn add_scalar<T: Element>(dst: &mut [u8], dst_off: usize, src: &[u8], src_off: usize) {
    let current = read::<T>(dst, dst_off);
    write(dst, dst_off, current.add(read::<T>(src, src_off)));
}

fn zero_scalar<T: Element>(dst: &mut [u8], off: usize) {
    write(dst, off, T::zero());
}

fn fill_constant<T: Element>(dst: &mut [u8], n: usize, value: f64) {
    let value = T::from_f64(value);
    let bytes = bytemuck::bytes_of(&value);
    for slot in dst.chunks_exact_mut(size_of::<T>()).take(n) {
        slot.copy_from_slice(bytes);
    }
}

fn fill_from_source<T: Element>(dst: &mut [u8], n: usize, src: &[u8]) {
    let len = n * size_of::<T>();
    dst[..len].copy_from_slice(&src[..len]);
}

fn fill_uniform_int<T: Element>(dst: &mut [u8], n: usize, low: i64, high: i64) {
    for slot in dst.chunks_exact_mut(size_of::<T>()).take(n) {
        let value = T::from_i64(uniform_int(low, high));
        slot.copy_from_slice(bytemuck::bytes_of(&value));
    }
}

fn reduce_multiply_add<T: Element>(acc: &mut [u8], a: &[u8], b: &[u8], n: usize) {
    let width = size_of::<T>();
    let total = a
        .chunks_exact(width)
        .zip(b.chunks_exact(width))
        .take(n)
        .fold(read::<T>(acc, 0), |total, (x, y)| {
            let x: T = bytemuck::pod_read_unaligned(x);
            let y: T = bytemuck::pod_read_unaligned(y);
            total.add(x.mul(y))
        });
    write(acc, 0, total);
}

fn reduce_sum<T: Element>(acc: &mut [u8], src: &[u8], n: usize) {
    let total = src
        .chunks_exact(size_of::<T>())
        .take(n)
        .fold(read::<T>(acc, 0), |total, x| {
            total.add(bytemuck::pod_read_unaligned::<T>(x))
        });
    write(acc, 0, total);
}

fn scalar_to_f64<T: Element>(src: &[u8], off: usize) -> f64 {
    read::<T>(src, off).to_f64()
}

fn format_scalar<T: Element>(src: &[u8], off: usize) -> String {
    format_scientific(scalar_to_f64::<T>(src, off))
}

/// Draw from `[low, high]`, both ends inclusive.
fn uniform_int(low: i64, high: i64) -> i64 {
    let span = (high as i128 - low as i128 + 1) as f64;
    let draw = (random_f64() * span) as i128;
    (low as i128 + draw).min(high as i128) as i64
}

/// Format a value in normalized scientific notation with two fractional
/// digits and an at-least-two-digit signed exponent, e.g. `8.00e+00`.
///
/// # Examples
///
/// ```
/// use minarray_kernels::format_scientific;
///
/// assert_eq!(format_scientific(8.0), "8.00e+00");
/// assert_eq!(format_scientific(-81.0), "-8.10e+01");
/// assert_eq!(format_scientific(0.00001), "1.00e-05");
/// ```
pub fn format_scientific(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let formatted = format!("{:.2e}", value);
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((&formatted, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Buffer;

    #[test]
    fn test_table_tags_match() {
        for dtype in ElementType::ALL {
            assert_eq!(dtype.kernels().dtype, dtype);
        }
    }

    #[test]
    fn test_set_and_add_scalar_use_byte_offsets() {
        let k = ElementType::Int32.kernels();
        let src = Buffer::from_slice(&[5i32, 11]);
        let mut dst = Buffer::zeroed(12);

        (k.set_scalar)(dst.as_bytes_mut(), 8, src.as_bytes(), 4);
        (k.add_scalar)(dst.as_bytes_mut(), 8, src.as_bytes(), 0);
        assert_eq!(dst.typed::<i32>(), &[0, 0, 16]);

        (k.zero_scalar)(dst.as_bytes_mut(), 8);
        assert_eq!(dst.typed::<i32>(), &[0, 0, 0]);
    }

    #[test]
    fn test_add_scalar_wraps_integers() {
        let k = ElementType::Int32.kernels();
        let mut dst = Buffer::from_slice(&[i32::MAX]);
        let one = Buffer::from_slice(&[1i32]);
        (k.add_scalar)(dst.as_bytes_mut(), 0, one.as_bytes(), 0);
        assert_eq!(dst.typed::<i32>(), &[i32::MIN]);
    }

    #[test]
    fn test_fill_constant_casts() {
        let mut buf = Buffer::zeroed(4 * 4);
        (ElementType::Int32.kernels().fill_constant)(buf.as_bytes_mut(), 4, -3.7);
        assert_eq!(buf.typed::<i32>(), &[-3, -3, -3, -3]);

        let mut buf = Buffer::zeroed(2 * 4);
        (ElementType::Float32.kernels().fill_constant)(buf.as_bytes_mut(), 2, 0.25);
        assert_eq!(buf.typed::<f32>(), &[0.25, 0.25]);
    }

    #[test]
    fn test_fill_constant_respects_count() {
        let mut buf = Buffer::zeroed(3 * 8);
        (ElementType::Float64.kernels().fill_constant)(buf.as_bytes_mut(), 2, 1.0);
        assert_eq!(buf.typed::<f64>(), &[1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_fill_from_source() {
        let src = Buffer::from_slice(&[1i64, -2, 3]);
        let mut dst = Buffer::zeroed(src.len());
        (ElementType::Int64.kernels().fill_from_source)(dst.as_bytes_mut(), 3, src.as_bytes());
        assert_eq!(dst, src);
    }

    #[test]
    fn test_fill_uniform_int_bounds_inclusive() {
        let mut buf = Buffer::zeroed(2000 * 4);
        (ElementType::Int32.kernels().fill_uniform_int)(buf.as_bytes_mut(), 2000, 0, 1);
        let values = buf.to_vec::<i32>();
        assert!(values.iter().all(|&v| v == 0 || v == 1));
        assert!(values.contains(&1), "upper bound must be reachable");
        assert!(values.contains(&0));
    }

    #[test]
    fn test_fill_uniform_int_degenerate_range() {
        let mut buf = Buffer::zeroed(16 * 8);
        (ElementType::Float64.kernels().fill_uniform_int)(buf.as_bytes_mut(), 16, 4, 4);
        assert!(buf.typed::<f64>().iter().all(|&v| v == 4.0));
    }

    #[test]
    fn test_reduce_multiply_add_accumulates() {
        let a = Buffer::from_slice(&[3.0f64, 1.0, 5.0, 4.0]);
        let b = Buffer::from_slice(&[0.0f64, 2.0, 6.0, 3.0]);
        let mut acc = Buffer::from_slice(&[1.0f64]);
        (ElementType::Float64.kernels().reduce_multiply_add)(
            acc.as_bytes_mut(),
            a.as_bytes(),
            b.as_bytes(),
            4,
        );
        assert_eq!(acc.typed::<f64>(), &[45.0]);
    }

    #[test]
    fn test_reduce_sum_partial_run() {
        let src = Buffer::from_slice(&[3i64, 1, 5, 2, 0]);
        let mut acc = Buffer::zeroed(8);
        (ElementType::Int64.kernels().reduce_sum)(acc.as_bytes_mut(), src.as_bytes(), 3);
        assert_eq!(acc.typed::<i64>(), &[9]);
    }

    #[test]
    fn test_reduce_on_unaligned_slices() {
        let src = Buffer::from_slice(&[0u8, 1, 0, 0, 0, 2, 0, 0, 0]);
        let mut acc = [0u8; 4];
        (ElementType::Int32.kernels().reduce_sum)(&mut acc, &src.as_bytes()[1..], 2);
        let expected = i32::from_ne_bytes([1, 0, 0, 0]) + i32::from_ne_bytes([2, 0, 0, 0]);
        assert_eq!(i32::from_ne_bytes(acc), expected);
    }

    #[test]
    fn test_scalar_to_f64_widens() {
        let buf = Buffer::from_slice(&[1.5f32, -4.25]);
        let k = ElementType::Float32.kernels();
        assert_eq!((k.scalar_to_f64)(buf.as_bytes(), 4), -4.25);
    }

    #[test]
    fn test_format_scalar() {
        let buf = Buffer::from_slice(&[8i32, -81, 102]);
        let k = ElementType::Int32.kernels();
        assert_eq!((k.format_scalar)(buf.as_bytes(), 0), "8.00e+00");
        assert_eq!((k.format_scalar)(buf.as_bytes(), 4), "-8.10e+01");
        assert_eq!((k.format_scalar)(buf.as_bytes(), 8), "1.02e+02");
    }

    #[test]
    fn test_format_scientific_edge_values() {
        assert_eq!(format_scientific(0.0), "0.00e+00");
        assert_eq!(format_scientific(1e100), "1.00e+100");
        assert_eq!(format_scientific(-2.5e-7), "-2.50e-07");
        assert_eq!(format_scientific(f64::NAN), "nan");
        assert_eq!(format_scientific(f64::NEG_INFINITY), "-inf");
    }
}

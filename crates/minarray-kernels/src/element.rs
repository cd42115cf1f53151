//! Native element types
//!
//! [`Element`] ties a Rust primitive to its [`ElementType`] tag and provides
//! the native arithmetic the kernels accumulate with. Integer arithmetic
//! wraps on overflow; float arithmetic is plain IEEE.

use crate::dtype::ElementType;
use bytemuck::Pod;
use std::fmt::Debug;

/// A primitive that can be stored in an array buffer.
pub trait Element: Pod + PartialEq + Debug + Send + Sync + 'static {
    /// The tag this primitive is stored under.
    const TYPE: ElementType;

    /// Additive identity.
    fn zero() -> Self;

    /// Native addition (wrapping for integers).
    fn add(self, rhs: Self) -> Self;

    /// Native multiplication (wrapping for integers).
    fn mul(self, rhs: Self) -> Self;

    /// Convert from `f64` with `as` semantics: truncation toward zero,
    /// saturation at the integer bounds, NaN to zero.
    fn from_f64(value: f64) -> Self;

    /// Convert from `i64` with `as` semantics.
    fn from_i64(value: i64) -> Self;

    /// Widen to `f64` for display.
    fn to_f64(self) -> f64;
}

macro_rules! impl_integer_element {
    ($ty:ty, $dtype:ident) => {
        impl Element for $ty {
            const TYPE: ElementType = ElementType::$dtype;

            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $ty
            }

            #[inline]
            fn from_i64(value: i64) -> Self {
                value as $ty
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

macro_rules! impl_float_element {
    ($ty:ty, $dtype:ident) => {
        impl Element for $ty {
            const TYPE: ElementType = ElementType::$dtype;

            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $ty
            }

            #[inline]
            fn from_i64(value: i64) -> Self {
                value as $ty
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_integer_element!(i32, Int32);
impl_integer_element!(i64, Int64);
impl_float_element!(f32, Float32);
impl_float_element!(f64, Float64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(<i32 as Element>::TYPE, ElementType::Int32);
        assert_eq!(<i64 as Element>::TYPE, ElementType::Int64);
        assert_eq!(<f32 as Element>::TYPE, ElementType::Float32);
        assert_eq!(<f64 as Element>::TYPE, ElementType::Float64);
    }

    #[test]
    fn test_integer_wraparound() {
        assert_eq!(Element::add(i32::MAX, 1), i32::MIN);
        assert_eq!(Element::mul(i64::MAX, 2), -2);
    }

    #[test]
    fn test_float_to_int_truncates_toward_zero() {
        assert_eq!(<i32 as Element>::from_f64(2.9), 2);
        assert_eq!(<i32 as Element>::from_f64(-2.9), -2);
        assert_eq!(<i64 as Element>::from_f64(f64::NAN), 0);
        assert_eq!(<i32 as Element>::from_f64(1e12), i32::MAX);
    }

    #[test]
    fn test_float_narrowing() {
        assert_eq!(<f32 as Element>::from_f64(0.5), 0.5f32);
        assert_eq!(<f64 as Element>::from_i64(-7), -7.0);
    }
}

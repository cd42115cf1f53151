//! # minarray-kernels
//!
//! Element-type registry and per-type primitive kernels for minarray.
//!
//! ## Overview
//!
//! This crate is the leaf of the minarray stack. It knows nothing about
//! shapes or strides; it only knows how to move, combine and print typed
//! values that live inside raw byte buffers.
//!
//! - [`ElementType`] - the closed set of element kinds and their byte widths
//! - [`Buffer`] - owned, zero-initialised, aligned byte storage
//! - [`Element`] - native arithmetic for `i32`, `i64`, `f32`, `f64`
//! - [`Kernels`] - one dispatch table of function pointers per element type
//!
//! ## Quick Start
//!
//! ```rust
//! use minarray_kernels::{Buffer, ElementType};
//!
//! let dtype = ElementType::Float32;
//! let k = dtype.kernels();
//!
//! let a = Buffer::from_slice(&[1.0f32, 2.0, 3.0]);
//! let b = Buffer::from_slice(&[4.0f32, 5.0, 6.0]);
//! let mut acc = Buffer::zeroed(dtype.size_bytes());
//!
//! (k.reduce_multiply_add)(acc.as_bytes_mut(), a.as_bytes(), b.as_bytes(), 3);
//! assert_eq!(acc.typed::<f32>(), &[32.0]);
//! assert_eq!((k.format_scalar)(acc.as_bytes(), 0), "3.20e+01");
//! ```
//!
//! ## Numeric semantics
//!
//! Accumulation always happens in the element's own type. Integer overflow
//! wraps; float arithmetic follows IEEE rules. Casting a constant into an
//! integer buffer truncates toward zero.
//!
//! ## Random fills
//!
//! Uniform integer fills draw from the process-wide generator in
//! `scirs2_core::random`. Reproducibility across runs is not guaranteed.

pub mod buffer;
pub mod dtype;
pub mod element;
pub mod kernels;


pub use buffer::Buffer;
pub use dtype::ElementType;
pub use element::Element;
pub use kernels::{format_scientific, Kernels};

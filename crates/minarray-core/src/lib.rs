//! # minarray-core
//!
//! Strided two-dimensional array engine for minarray.
//!
//! This crate owns everything above the per-type kernels:
//!
//! - **Shape utilities** ([`shape`]): rank promotion, row-major strides, axis
//!   removal and permutation helpers, plus the [`Layout`] value
//! - **The array engine** ([`Array`]): allocation, fills, copy, ravel,
//!   transpose, axis sum and matrix product
//! - **Formatting** ([`format`]): scientific-notation text rendering
//! - **Typed errors** ([`ArrayError`])
//!
//! ## Core Principles
//!
//! ### Rank normalization
//!
//! Every array is rank 2. Rank-1 inputs are promoted by appending an extent of
//! 1, so `[n]` is stored as an `n x 1` column.
//!
//! ### Memory Layout
//!
//! Storage is row-major. [`Array::transpose`] only permutes shape and strides;
//! [`Array::ravel`] materializes the logical order when needed. Reductions and
//! products work on permuted copies of the layout and never modify their
//! operands.
//!
//! ### Dispatch
//!
//! Per-element work is delegated to the static kernel table of the array's
//! [`ElementType`], so the engine itself is written once for all types.
//!
//! ## Quick Start
//!
//! ```
//! use minarray_core::{Array, ElementType};
//!
//! let mut a = Array::from_slice(&[8i32, 3, 9, 1, 4, 2, 0, 6], &[4, 2]).unwrap();
//! a.transpose(&[1, 0]).unwrap();
//! assert_eq!(a.shape(), &[2, 4]);
//! assert_eq!(a.strides(), &[1, 2]);
//! assert_eq!(a.to_vec::<i32>().unwrap(), vec![8, 9, 4, 0, 3, 1, 2, 6]);
//!
//! let ones = Array::ones(&[4, 3], ElementType::Int32).unwrap();
//! let product = a.dot(&ones).unwrap();
//! assert_eq!(product.to_vec::<i32>().unwrap(), vec![21, 21, 21, 12, 12, 12]);
//!
//! let totals = product.sum(0).unwrap();
//! assert_eq!(totals.to_vec::<i32>().unwrap(), vec![33, 33, 33]);
//! ```

pub mod array;
pub mod error;
pub mod format;
pub mod shape;

#[cfg(test)]
mod property_tests;

pub use array::{release, Array};
pub use error::{ArrayError, ArrayResult};
pub use shape::{Layout, Shape, MAX_RANK};

pub use minarray_kernels::{Buffer, Element, ElementType};

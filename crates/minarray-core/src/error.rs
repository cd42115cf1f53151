//! Error types for array operations
//!
//! Every fallible engine entry point returns [`ArrayResult`]. Errors are
//! raised before anything is allocated or mutated, so a failed call never
//! leaves a partially built array or a modified operand behind.
//!
//! # Examples
//!
//! ```
//! use minarray_core::{Array, ArrayError, ElementType};
//!
//! let err = Array::allocate(&[2, 2, 2], ElementType::Int32).unwrap_err();
//! assert!(matches!(err, ArrayError::InvalidRank { rank: 3 }));
//! ```

use minarray_kernels::ElementType;
use thiserror::Error;

/// Error type for array engine operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// Shape rank outside `[1, MAX_RANK]`, including an empty shape
    #[error("invalid rank {rank}: shape must have 1 or 2 dimensions")]
    InvalidRank { rank: usize },

    /// Inner dimensions of a product disagree
    #[error("{operation}: shape mismatch between {left:?} and {right:?}")]
    ShapeMismatch {
        operation: &'static str,
        left: Vec<usize>,
        right: Vec<usize>,
    },

    /// Operands (or a typed view) disagree on element type
    #[error("{operation}: element type mismatch ({left} vs {right})")]
    DtypeMismatch {
        operation: &'static str,
        left: ElementType,
        right: ElementType,
    },

    /// Reduction axis out of range
    #[error("invalid axis {axis}: must be < {rank}")]
    InvalidAxis { axis: usize, rank: usize },

    /// Axis order is not a permutation of `0..rank`
    #[error("invalid permutation {perm:?} for rank {rank}")]
    InvalidPermutation { perm: Vec<usize>, rank: usize },

    /// Empty or inverted random integer range
    #[error("invalid range [{low}, {high}]")]
    InvalidRange { low: i64, high: i64 },

    /// Element count or byte size of a shape does not fit in `usize`
    #[error("shape {shape:?} of {dtype} is too large to allocate")]
    SizeOverflow { shape: Vec<usize>, dtype: ElementType },

    /// Source data does not cover the array exactly
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Result type for array operations
pub type ArrayResult<T> = Result<T, ArrayError>;

impl ArrayError {
    /// Create a shape mismatch error
    pub fn shape_mismatch(operation: &'static str, left: &[usize], right: &[usize]) -> Self {
        ArrayError::ShapeMismatch {
            operation,
            left: left.to_vec(),
            right: right.to_vec(),
        }
    }

    /// Create an element type mismatch error
    pub fn dtype_mismatch(operation: &'static str, left: ElementType, right: ElementType) -> Self {
        ArrayError::DtypeMismatch {
            operation,
            left,
            right,
        }
    }
}

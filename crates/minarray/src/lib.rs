//! # minarray - Minimal Strided Array Engine
//!
//! Two-dimensional numeric arrays over a closed set of element types, with
//! zero-copy transposition, axis sums and matrix products.
//!
//! This is the **meta crate** that re-exports the minarray components for
//! convenient access.
//!
//! ## Quick Start
//!
//! ```
//! use minarray::prelude::*;
//!
//! let a = Array::from_slice(&[2i64, -81, 26, 17, 102, -3], &[2, 3])?;
//! let totals = a.sum(1)?;
//! assert_eq!(totals.to_vec::<i64>()?, vec![-53, 116]);
//!
//! let b = Array::ones(&[3, 2], ElementType::Int64)?;
//! let c = a.dot(&b)?;
//! assert_eq!(c.shape(), &[2, 2]);
//! print!("{c}");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Components
//!
//! ### Array Engine ([`core`])
//!
//! The [`Array`](core::Array) type, shape utilities, formatting and errors.
//!
//! ### Kernels ([`kernels`])
//!
//! Element-type registry, aligned byte buffers and the per-type kernel
//! tables the engine dispatches through.
//!
//! ```
//! use minarray::kernels::ElementType;
//!
//! assert_eq!(ElementType::Float32.size_bytes(), 4);
//! assert_eq!(ElementType::from_code(9), None);
//! ```
//!
//! ### Logging ([`logging`])
//!
//! Subscriber bootstrap for the `tracing` events the engine emits.
//!
//! ## Features
//!
//! - `tracing`: install a `tracing-subscriber` from [`logging::init_logging`]
//! - `serde`: derive serialization for `ElementType` and `Layout`

pub use minarray_core as core;
pub use minarray_kernels as kernels;

pub mod logging;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use minarray::prelude::*;
    //!
    //! let a = Array::zeros(&[10, 20], ElementType::Float64).unwrap();
    //! ```

    pub use crate::core::{release, Array, ArrayError, ArrayResult, Layout};
    pub use crate::kernels::{Element, ElementType};
    pub use crate::logging::{init_logging, LogConfig, LogFormat};
}

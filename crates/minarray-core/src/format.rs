//! Text rendering
//!
//! Each row renders as `[v v ... v]` followed by a newline, where every value
//! is printed in two-digit scientific notation (`8.00e+00`). A column vector
//! (`shape[1] == 1`) is rendered as a single row.

use crate::array::Array;
use std::fmt;

/// Render `array` as text.
///
/// # Examples
///
/// ```
/// use minarray_core::{format::format, Array};
///
/// let b = Array::from_slice(&[398i32, 41], &[2]).unwrap();
/// assert_eq!(format(&b), "[3.98e+02 4.10e+01]\n");
///
/// let c = Array::from_slice(&[1.0f64, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
/// assert_eq!(format(&c), "[1.00e+00 2.00e+00]\n[3.00e+00 4.00e+00]\n");
/// ```
pub fn format(array: &Array) -> String {
    let layout = if array.shape()[1] == 1 {
        array.layout().swapped()
    } else {
        array.layout()
    };
    let [rows, cols] = layout.shape;
    if rows == 0 {
        return String::new();
    }

    let k = array.dtype().kernels();
    let size = array.dtype().size_bytes();
    let bytes = array.as_bytes();
    let scalar = |i: usize, j: usize| (k.format_scalar)(bytes, layout.offset(i, j) * size);

    let width = if cols > 0 { scalar(0, 0).len() + 1 } else { 0 };
    let mut out = String::with_capacity(rows * (cols * width + 2));

    for i in 0..rows {
        out.push('[');
        for j in 0..cols {
            if j > 0 {
                out.push(' ');
            }
            out.push_str(&scalar(i, j));
        }
        out.push_str("]\n");
    }
    out
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self))
    }
}

//! Element-type registry
//!
//! The closed set of numeric element kinds an array can hold, together with
//! their fixed byte widths. Every other layer sizes buffers and computes byte
//! offsets through [`ElementType::size_bytes`].

use std::fmt;

/// Supported element types.
///
/// The discriminants are the integer codes used by the binding layer. A code
/// outside this set is the binding layer's "unknown" marker and is surfaced as
/// `None` by [`ElementType::from_code`], so it can never reach allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ElementType {
    /// 32-bit signed integer
    Int32 = 0,
    /// 64-bit signed integer
    Int64 = 1,
    /// 32-bit IEEE float
    Float32 = 2,
    /// 64-bit IEEE float
    Float64 = 3,
}

impl ElementType {
    /// Every element type, in code order.
    pub const ALL: [ElementType; 4] = [
        ElementType::Int32,
        ElementType::Int64,
        ElementType::Float32,
        ElementType::Float64,
    ];

    /// Width of the widest element type, for fixed scalar scratch space.
    pub const MAX_SIZE_BYTES: usize = 8;

    /// Size of a single element in bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use minarray_kernels::ElementType;
    ///
    /// assert_eq!(ElementType::Int32.size_bytes(), 4);
    /// assert_eq!(ElementType::Float64.size_bytes(), 8);
    /// ```
    pub const fn size_bytes(self) -> usize {
        match self {
            ElementType::Int32 | ElementType::Float32 => 4,
            ElementType::Int64 | ElementType::Float64 => 8,
        }
    }

    /// Convert from the binding layer's integer code.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(ElementType::Int32),
            1 => Some(ElementType::Int64),
            2 => Some(ElementType::Float32),
            3 => Some(ElementType::Float64),
            _ => None,
        }
    }

    /// The integer code of this type.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            ElementType::Int32 => "int32",
            ElementType::Int64 => "int64",
            ElementType::Float32 => "float32",
            ElementType::Float64 => "float64",
        }
    }

    /// Whether this is an integer type.
    pub const fn is_integer(self) -> bool {
        matches!(self, ElementType::Int32 | ElementType::Int64)
    }

    /// Whether this is a floating-point type.
    pub const fn is_float(self) -> bool {
        matches!(self, ElementType::Float32 | ElementType::Float64)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_match_native_widths() {
        assert_eq!(ElementType::Int32.size_bytes(), std::mem::size_of::<i32>());
        assert_eq!(ElementType::Int64.size_bytes(), std::mem::size_of::<i64>());
        assert_eq!(ElementType::Float32.size_bytes(), std::mem::size_of::<f32>());
        assert_eq!(ElementType::Float64.size_bytes(), std::mem::size_of::<f64>());
        for dtype in ElementType::ALL {
            assert!(dtype.size_bytes() <= ElementType::MAX_SIZE_BYTES);
        }
    }

    #[test]
    fn test_code_roundtrip() {
        for dtype in ElementType::ALL {
            assert_eq!(ElementType::from_code(dtype.code()), Some(dtype));
        }
        assert_eq!(ElementType::from_code(4), None);
        assert_eq!(ElementType::from_code(u8::MAX), None);
    }

    #[test]
    fn test_kind_predicates() {
        assert!(ElementType::Int64.is_integer());
        assert!(!ElementType::Int64.is_float());
        assert!(ElementType::Float32.is_float());
        assert_eq!(ElementType::Float32.to_string(), "float32");
    }
}

//! Error types for type-code and registry operations.

use std::error::Error;
use std::fmt;

use crate::types::TypeCode;

/// Errors from type-code decoding and type registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// A raw byte did not name any [`TypeCode`].
    UnknownTypeCode {
        /// The rejected raw code.
        code: u8,
    },
    /// A user-defined type was declared with an unusable byte size.
    InvalidSize {
        /// The rejected size in bytes.
        size: usize,
    },
    /// A builtin scalar type was given a user-defined code.
    NotBuiltin {
        /// The user-defined code.
        code: TypeCode,
    },
    /// An opaque scalar type was given a builtin code.
    NotUserDefined {
        /// The builtin code.
        code: TypeCode,
    },
    /// A type with this name is already registered.
    DuplicateType {
        /// The name that collided.
        name: String,
    },
    /// A scalar buffer did not match the byte size of its declared type.
    SizeMismatch {
        /// Size the type requires, in bytes.
        expected: usize,
        /// Size that was supplied, in bytes.
        actual: usize,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTypeCode { code } => write!(f, "unknown type code: {code}"),
            Self::InvalidSize { size } => {
                write!(f, "invalid scalar size: {size} bytes (must be > 0)")
            }
            Self::NotBuiltin { code } => write!(f, "'{code}' is not a builtin type code"),
            Self::NotUserDefined { code } => {
                write!(f, "'{code}' is a builtin code and cannot be opaque")
            }
            Self::DuplicateType { name } => write!(f, "type '{name}' is already registered"),
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "scalar size mismatch: expected {expected} bytes, got {actual} bytes"
                )
            }
        }
    }
}

impl Error for CoreError {}

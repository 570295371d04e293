//! Core types for the spmx sparse-matrix staging layer.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! closed set of scalar type codes shared by the pending-tuple buffer and
//! the cast dispatch table, the [`Builtin`] scalar trait, complex scalars,
//! and the [`TypeRegistry`] of named scalar types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod registry;
pub mod scalar;
pub mod types;

pub use error::CoreError;
pub use registry::{TypeDescriptor, TypeRegistry};
pub use scalar::{Builtin, Complex32, Complex64};
pub use types::{ScalarType, TypeCode};

/// Row or column coordinate of a matrix entry.
///
/// Signed 64-bit so that sentinel values and index arithmetic in the
/// merge step never wrap silently.
pub type Index = i64;

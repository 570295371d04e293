//! spmx: deferred-update staging and type-cast dispatch for packed sparse
//! matrices.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the spmx sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use spmx::prelude::*;
//!
//! // A double-precision matrix defers two writes, one given as an i32.
//! let layout = PendingLayout::matrix(ScalarType::Builtin(TypeCode::Fp64));
//! let mut pending = PendingHandle::new();
//! spmx::stage::set_typed(&mut pending, layout, 0, Some(1), 2.5f64).unwrap();
//! spmx::stage::set_typed(&mut pending, layout, 3, Some(0), 7i32).unwrap();
//!
//! let list = pending.take().unwrap();
//! let values: Vec<f64> = list.iter().map(|t| f64::read(t.value)).collect();
//! assert_eq!(values, vec![2.5, 7.0]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `spmx-core` | Type codes, scalar types, complex scalars, type registry |
//! | [`pending`] | `spmx-pending` | Pending-tuple list, handle, growth allocator seam |
//! | [`cast`] | `spmx-cast` | Cast dispatch table and factory |
//! | [`stage`] | this crate | Cast-then-append of single entries |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Type codes, scalar types and the type registry (`spmx-core`).
pub use spmx_core as types;

/// Deferred-update buffer (`spmx-pending`).
///
/// [`pending::PendingHandle`] is what a matrix owns;
/// [`pending::PendingList`] is the tuple storage behind it.
pub use spmx_pending as pending;

/// Cast dispatch between scalar types (`spmx-cast`).
pub use spmx_cast as cast;

pub mod stage;

/// Common imports for typical spmx usage.
pub mod prelude {
    pub use spmx_cast::{cast_factory, cast_factory_for, CastFn};
    pub use spmx_core::{Builtin, Complex32, Complex64, Index, ScalarType, TypeCode};
    pub use spmx_pending::{PendingError, PendingHandle, PendingLayout, PendingList};

    pub use crate::stage::StageError;
}

//! Cast dispatch between scalar types.
//!
//! [`cast_factory`] maps an ordered `(destination, source)` pair of
//! [`TypeCode`](spmx_core::TypeCode)s to a [`CastFn`] in O(1):
//!
//! - builtin × builtin: one specialised routine per ordered pair, taken
//!   from the static [`BUILTIN_CASTS`] table (13 × 13 entries);
//! - any pair with a user-defined side: [`copy_user_user`], a raw copy of
//!   `size` bytes.
//!
//! Resolution is total and allocation-free. The table is immutable and
//! may be shared by any number of threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod convert;
pub mod factory;
pub mod slice;

pub use convert::{cast, CastFrom};
pub use factory::{cast_factory, cast_factory_for, copy_user_user, CastFn, BUILTIN_CASTS};
pub use slice::cast_slice;

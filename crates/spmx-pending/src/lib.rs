//! Deferred-update buffer for packed sparse matrices.
//!
//! A packed (compressed row/column) matrix cannot absorb single-entry
//! insertions without breaking its sortedness. Mutations are instead
//! appended to a [`PendingList`] of `(row[, col], value)` tuples and folded
//! into the packed form later by the matrix's merge step.
//!
//! # Ownership
//!
//! ```text
//! PendingHandle<A> (owned by one matrix, single writer)
//! ├── Option<PendingList>  (absent until the first deferred mutation)
//! │   ├── rows:   Vec<Index>          len == capacity
//! │   ├── cols:   Option<Vec<Index>>  len == capacity, absent for vectors
//! │   └── values: Vec<u8>             len == capacity * elem_size
//! └── A: GrowAlloc                    (allocation seam, SystemAlloc by default)
//! ```
//!
//! # Growth
//!
//! [`PendingHandle::realloc`] reserves room for `nnew` more tuples with
//! doubling growth. Growth is all-or-nothing: if any of the three arrays
//! cannot be resized the whole list is dropped and the handle reports
//! absent. Growth never changes the tuple count; callers write into
//! [`PendingList::spare_mut`] and then [`PendingList::commit`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alloc;
pub mod config;
pub mod error;
pub mod handle;
pub mod layout;
pub mod list;

pub use alloc::{AllocFailure, GrowAlloc, SystemAlloc};
pub use config::PendingConfig;
pub use error::PendingError;
pub use handle::PendingHandle;
pub use layout::PendingLayout;
pub use list::{PendingList, PendingTuple, SpareTail};

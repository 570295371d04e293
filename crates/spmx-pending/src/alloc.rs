//! Fallible growth of the pending-list arrays.
//!
//! [`GrowAlloc`] is the allocation seam of the pending list. Each call
//! either grows one vector to the requested length or leaves it exactly as
//! it was; the list combines three such calls into one all-or-nothing
//! growth step. Tests substitute allocators that fail on demand.

use std::error::Error;
use std::fmt;

use spmx_core::Index;

/// A single array could not be grown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocFailure {
    /// Size of the requested array in bytes.
    pub requested_bytes: usize,
}

impl fmt::Display for AllocFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "allocation of {} bytes failed", self.requested_bytes)
    }
}

impl Error for AllocFailure {}

/// Grows pending-list arrays.
///
/// Implementations must leave the vector untouched on failure and must set
/// `v.len() == new_len` on success. `new_len` is never smaller than the
/// current length.
pub trait GrowAlloc {
    /// Grow a row or column index array to `new_len` entries.
    fn grow_indices(&mut self, v: &mut Vec<Index>, new_len: usize) -> Result<(), AllocFailure>;

    /// Grow the value byte buffer to `new_len` bytes.
    fn grow_values(&mut self, v: &mut Vec<u8>, new_len: usize) -> Result<(), AllocFailure>;
}

/// The default allocator: `Vec::try_reserve_exact` on the global heap.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemAlloc;

impl GrowAlloc for SystemAlloc {
    fn grow_indices(&mut self, v: &mut Vec<Index>, new_len: usize) -> Result<(), AllocFailure> {
        grow_vec(v, new_len)
    }

    fn grow_values(&mut self, v: &mut Vec<u8>, new_len: usize) -> Result<(), AllocFailure> {
        grow_vec(v, new_len)
    }
}

/// Grow `v` to `new_len` elements, zero-filling the new tail.
///
/// Reservation happens before any element is written, so a failed
/// reservation leaves `v` unchanged.
pub fn grow_vec<T: Copy + Default>(v: &mut Vec<T>, new_len: usize) -> Result<(), AllocFailure> {
    let additional = new_len.saturating_sub(v.len());
    let failure = AllocFailure {
        requested_bytes: new_len.saturating_mul(std::mem::size_of::<T>()),
    };
    v.try_reserve_exact(additional).map_err(|_| failure)?;
    v.resize(new_len, T::default());
    Ok(())
}

//! Benchmark workloads for spmx.
//!
//! - [`scattered_coords`]: deterministic pseudo-random coordinates
//! - [`packed_values`]: a run of packed builtin values
//! - [`fill_pending`]: append a workload through a [`PendingHandle`]

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use spmx_core::{Builtin, Index};
use spmx_pending::{PendingError, PendingHandle, PendingLayout};

/// Generate `n` deterministic `(row, col)` pairs inside an `nrows x ncols`
/// matrix.
pub fn scattered_coords(n: usize, nrows: Index, ncols: Index, seed: u64) -> Vec<(Index, Index)> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let r = ((state >> 33) % nrows as u64) as Index;
            let c = ((state >> 11) % ncols as u64) as Index;
            (r, c)
        })
        .collect()
}

/// Pack `n` values produced by `f` into a byte buffer.
pub fn packed_values<T: Builtin>(n: usize, f: impl Fn(usize) -> T) -> Vec<u8> {
    let mut out = vec![0u8; n * T::SIZE];
    for (k, chunk) in out.chunks_exact_mut(T::SIZE).enumerate() {
        f(k).write(chunk);
    }
    out
}

/// Append one tuple per coordinate, reusing `value` for every entry.
pub fn fill_pending(
    handle: &mut PendingHandle,
    layout: PendingLayout,
    coords: &[(Index, Index)],
    value: &[u8],
) -> Result<(), PendingError> {
    for &(r, c) in coords {
        handle.add(layout, r, Some(c), value)?;
    }
    Ok(())
}

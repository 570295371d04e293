//! Test utilities for spmx development.
//!
//! Provides [`FailingAlloc`], a [`GrowAlloc`] that records every growth
//! request and fails on command, and scalar fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use spmx_core::Index;
use spmx_pending::alloc::grow_vec;
use spmx_pending::{AllocFailure, GrowAlloc};

/// Which pending-list array a growth request targeted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocKind {
    /// Row or column index array.
    Indices,
    /// Value byte buffer.
    Values,
}

/// One recorded growth request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocCall {
    pub kind: AllocKind,
    pub new_len: usize,
    pub ok: bool,
}

/// A [`GrowAlloc`] that fails selected calls.
///
/// Calls are numbered from zero in the order they reach the allocator.
/// Armed call numbers fail without touching the vector; all other calls
/// grow through the system heap.
#[derive(Clone, Debug, Default)]
pub struct FailingAlloc {
    calls: Vec<AllocCall>,
    fail_at: Vec<usize>,
}

impl FailingAlloc {
    /// An allocator that never fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the call `offset` calls from now (0 = the next call).
    pub fn arm(&mut self, offset: usize) {
        self.fail_at.push(self.calls.len() + offset);
    }

    /// Fail every one of the next `n` calls.
    pub fn arm_next(&mut self, n: usize) {
        for offset in 0..n {
            self.arm(offset);
        }
    }

    /// Every call seen so far.
    pub fn calls(&self) -> &[AllocCall] {
        &self.calls
    }

    /// Number of calls seen so far.
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Number of index-array calls seen so far.
    pub fn index_calls(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| c.kind == AllocKind::Indices)
            .count()
    }

    fn record<T: Copy + Default>(
        &mut self,
        kind: AllocKind,
        v: &mut Vec<T>,
        new_len: usize,
    ) -> Result<(), AllocFailure> {
        let n = self.calls.len();
        let result = if self.fail_at.contains(&n) {
            Err(AllocFailure {
                requested_bytes: new_len.saturating_mul(std::mem::size_of::<T>()),
            })
        } else {
            grow_vec(v, new_len)
        };
        self.calls.push(AllocCall {
            kind,
            new_len,
            ok: result.is_ok(),
        });
        result
    }
}

impl GrowAlloc for FailingAlloc {
    fn grow_indices(&mut self, v: &mut Vec<Index>, new_len: usize) -> Result<(), AllocFailure> {
        self.record(AllocKind::Indices, v, new_len)
    }

    fn grow_values(&mut self, v: &mut Vec<u8>, new_len: usize) -> Result<(), AllocFailure> {
        self.record(AllocKind::Values, v, new_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armed_call_fails_and_leaves_vec() {
        let mut alloc = FailingAlloc::new();
        let mut v: Vec<Index> = vec![1];
        alloc.arm(1);
        alloc.grow_indices(&mut v, 2).unwrap();
        assert!(alloc.grow_indices(&mut v, 4).is_err());
        assert_eq!(v, vec![1, 0]);
        alloc.grow_indices(&mut v, 4).unwrap();
        assert_eq!(alloc.call_count(), 3);
        assert_eq!(
            alloc.calls().iter().map(|c| c.ok).collect::<Vec<_>>(),
            vec![true, false, true]
        );
    }

    #[test]
    fn armed_huge_request_saturates_byte_count() {
        let mut alloc = FailingAlloc::new();
        let mut v: Vec<Index> = Vec::new();
        alloc.arm(0);
        let err = alloc.grow_indices(&mut v, usize::MAX).unwrap_err();
        assert_eq!(err.requested_bytes, usize::MAX);
        assert!(v.is_empty());
    }
}

//! The pending-tuple list.
//!
//! A [`PendingList`] holds three parallel arrays sized to `capacity`:
//! row indices, optional column indices, and packed value bytes. Only the
//! first `count` slots hold tuples; the rest is the reserved tail that
//! callers fill through [`PendingList::spare_mut`].

use std::fmt;

use spmx_core::Index;

use crate::alloc::{AllocFailure, GrowAlloc};
use crate::error::PendingError;
use crate::layout::PendingLayout;

/// One stored tuple, borrowed from a [`PendingList`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingTuple<'a> {
    /// Row index.
    pub row: Index,
    /// Column index, `None` for vector lists.
    pub col: Option<Index>,
    /// Value bytes, exactly `elem_size` long.
    pub value: &'a [u8],
}

/// The reserved, not yet committed tail of a [`PendingList`].
///
/// All three slices cover the same `remaining()` slots. Slot `k` of the
/// tail becomes tuple `len() + k` once committed.
#[derive(Debug)]
pub struct SpareTail<'a> {
    /// Row indices of the free slots.
    pub rows: &'a mut [Index],
    /// Column indices of the free slots, `None` for vector lists.
    pub cols: Option<&'a mut [Index]>,
    /// Value bytes of the free slots, `elem_size` bytes per slot.
    pub values: &'a mut [u8],
}

/// A failed [`PendingList::grow_to`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct GrowFailure {
    pub(crate) error: PendingError,
    /// First array that failed; `None` when the value byte count overflowed.
    pub(crate) cause: Option<AllocFailure>,
}

impl fmt::Display for GrowFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{} ({cause})", self.error),
            None => write!(f, "{} (value bytes overflow usize)", self.error),
        }
    }
}

/// A growable list of deferred `(row[, col], value)` tuples.
///
/// Invariants: `count <= capacity`, `rows.len() == capacity`,
/// `cols.len() == capacity` when present, and
/// `values.len() == capacity * elem_size`. Column presence never changes.
#[derive(Clone, Debug)]
pub struct PendingList {
    rows: Vec<Index>,
    cols: Option<Vec<Index>>,
    values: Vec<u8>,
    count: usize,
    capacity: usize,
    layout: PendingLayout,
    /// True while tuples were appended in non-decreasing (col, row) order.
    sorted: bool,
}

impl PendingList {
    /// Create an empty list with zero capacity. Nothing is allocated.
    ///
    /// Fails with [`PendingError::InvalidValueType`] if the layout's value
    /// type is malformed, so every list has a nonzero element size.
    pub fn new(layout: PendingLayout) -> Result<Self, PendingError> {
        layout.validate()?;
        Ok(Self {
            rows: Vec::new(),
            cols: layout.has_cols.then(Vec::new),
            values: Vec::new(),
            count: 0,
            capacity: 0,
            layout,
            sorted: true,
        })
    }

    /// Create an empty list with room for `nmax` tuples.
    pub fn with_capacity<A: GrowAlloc>(
        layout: PendingLayout,
        nmax: usize,
        alloc: &mut A,
    ) -> Result<Self, PendingError> {
        let mut list = Self::new(layout)?;
        if nmax > 0 {
            list.grow_to(nmax, alloc).map_err(|failure| failure.error)?;
        }
        Ok(list)
    }

    /// Resize all arrays to `new_capacity` tuples.
    ///
    /// Every array is attempted regardless of earlier failures. On error the
    /// arrays may disagree in length; the caller must discard the list.
    pub(crate) fn grow_to<A: GrowAlloc>(
        &mut self,
        new_capacity: usize,
        alloc: &mut A,
    ) -> Result<(), GrowFailure> {
        let error = PendingError::OutOfMemory {
            requested: new_capacity,
            capacity: self.capacity,
        };
        let Some(value_bytes) = new_capacity.checked_mul(self.elem_size()) else {
            return Err(GrowFailure { error, cause: None });
        };

        let rows = alloc.grow_indices(&mut self.rows, new_capacity);
        let cols = match self.cols.as_mut() {
            Some(cols) => alloc.grow_indices(cols, new_capacity),
            None => Ok(()),
        };
        let values = alloc.grow_values(&mut self.values, value_bytes);

        if let Err(cause) = rows.and(cols).and(values) {
            return Err(GrowFailure {
                error,
                cause: Some(cause),
            });
        }
        self.capacity = new_capacity;
        Ok(())
    }

    /// Number of stored tuples.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no tuples are stored.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of tuples the arrays can hold without growing.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Free slots in the reserved tail.
    pub fn remaining(&self) -> usize {
        self.capacity - self.count
    }

    /// The layout fixed at creation.
    pub fn layout(&self) -> PendingLayout {
        self.layout
    }

    /// Size in bytes of one value.
    pub fn elem_size(&self) -> usize {
        self.layout.elem_size()
    }

    /// Whether tuples carry column indices.
    pub fn has_cols(&self) -> bool {
        self.cols.is_some()
    }

    /// Whether tuples were appended in non-decreasing `(col, row)` order.
    ///
    /// Vector lists compare rows only. The merge step may skip sorting
    /// when this holds.
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Bytes held by the backing arrays.
    pub fn memory_bytes(&self) -> usize {
        let index_arrays = if self.has_cols() { 2 } else { 1 };
        index_arrays * self.capacity * std::mem::size_of::<Index>() + self.values.len()
    }

    /// The `k`-th tuple in insertion order.
    pub fn get(&self, k: usize) -> Option<PendingTuple<'_>> {
        if k >= self.count {
            return None;
        }
        let size = self.elem_size();
        Some(PendingTuple {
            row: self.rows[k],
            col: self.cols.as_ref().map(|cols| cols[k]),
            value: &self.values[k * size..(k + 1) * size],
        })
    }

    /// Iterate over stored tuples in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = PendingTuple<'_>> + '_ {
        (0..self.count).filter_map(move |k| self.get(k))
    }

    /// The reserved tail, for writing tuples before [`commit`](Self::commit).
    pub fn spare_mut(&mut self) -> SpareTail<'_> {
        let start = self.count;
        let size = self.elem_size();
        SpareTail {
            rows: &mut self.rows[start..],
            cols: self.cols.as_mut().map(|cols| &mut cols[start..]),
            values: &mut self.values[start * size..],
        }
    }

    /// Mark the first `k` tail slots as stored tuples.
    ///
    /// This is the only way `count` advances; growth never changes it.
    pub fn commit(&mut self, k: usize) -> Result<(), PendingError> {
        let available = self.remaining();
        if k > available {
            return Err(PendingError::CommitOverrun {
                requested: k,
                available,
            });
        }
        let start = self.count;
        self.count += k;
        self.note_order(start);
        Ok(())
    }

    /// Append one tuple into the reserved tail.
    ///
    /// Does not grow the list; reserve room through
    /// [`PendingHandle::realloc`](crate::PendingHandle::realloc) first.
    pub fn push(&mut self, row: Index, col: Option<Index>, value: &[u8]) -> Result<(), PendingError> {
        self.check_tuple(col, value)?;
        let tail = self.spare_mut();
        if tail.rows.is_empty() {
            return Err(PendingError::CommitOverrun {
                requested: 1,
                available: 0,
            });
        }
        tail.rows[0] = row;
        if let (Some(cols), Some(col)) = (tail.cols, col) {
            cols[0] = col;
        }
        tail.values[..value.len()].copy_from_slice(value);
        self.commit(1)
    }

    /// Drop all tuples, keeping the arrays for reuse.
    pub fn clear(&mut self) {
        self.count = 0;
        self.sorted = true;
    }

    pub(crate) fn check_tuple(&self, col: Option<Index>, value: &[u8]) -> Result<(), PendingError> {
        if value.len() != self.elem_size() {
            return Err(PendingError::ValueSize {
                expected: self.elem_size(),
                actual: value.len(),
            });
        }
        match (self.has_cols(), col) {
            (true, None) => Err(PendingError::MissingColumn),
            (false, Some(_)) => Err(PendingError::UnexpectedColumn),
            _ => Ok(()),
        }
    }

    fn key(&self, k: usize) -> (Index, Index) {
        let col = self.cols.as_ref().map_or(0, |cols| cols[k]);
        (col, self.rows[k])
    }

    /// Update `sorted` for tuples committed from `start` onward.
    fn note_order(&mut self, start: usize) {
        if !self.sorted {
            return;
        }
        for k in start.max(1)..self.count {
            if self.key(k - 1) > self.key(k) {
                self.sorted = false;
                return;
            }
        }
    }
}

//! Owner-side handle to a possibly absent pending list.
//!
//! The handle is what a matrix stores. It starts absent, gains a list on
//! the first deferred mutation, and returns to absent when the merge step
//! takes the list or when growth fails.

use spmx_core::Index;

use crate::alloc::{GrowAlloc, SystemAlloc};
use crate::config::PendingConfig;
use crate::error::PendingError;
use crate::layout::PendingLayout;
use crate::list::PendingList;

/// Handle to the pending list of one matrix.
///
/// Not synchronised: growth and appends need `&mut self`, so one writer per
/// matrix is enforced by the borrow checker.
#[derive(Debug)]
pub struct PendingHandle<A: GrowAlloc = SystemAlloc> {
    list: Option<PendingList>,
    alloc: A,
    config: PendingConfig,
}

impl PendingHandle<SystemAlloc> {
    /// Create an absent handle backed by the system allocator.
    pub fn new() -> Self {
        Self::with_alloc(SystemAlloc)
    }
}

impl Default for PendingHandle<SystemAlloc> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: GrowAlloc> PendingHandle<A> {
    /// Create an absent handle that grows through `alloc`.
    pub fn with_alloc(alloc: A) -> Self {
        Self {
            list: None,
            alloc,
            config: PendingConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: PendingConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &PendingConfig {
        &self.config
    }

    /// The allocator used for growth.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Mutable access to the allocator used for growth.
    pub fn allocator_mut(&mut self) -> &mut A {
        &mut self.alloc
    }

    /// Create a fresh list with room for exactly `nmax` tuples.
    ///
    /// Any existing list is dropped first. With `nmax == 0` nothing is
    /// allocated. On failure the handle is absent.
    pub fn alloc(&mut self, layout: PendingLayout, nmax: usize) -> Result<(), PendingError> {
        self.free();
        let mut list = PendingList::new(layout)?;
        if nmax > 0 {
            if let Err(failure) = list.grow_to(nmax, &mut self.alloc) {
                log::warn!("pending list allocation failed: {failure}");
                return Err(failure.error);
            }
        }
        self.list = Some(list);
        Ok(())
    }

    /// Ensure the list can take `nnew` more tuples without growing.
    ///
    /// If `count + nnew` already fits nothing happens. Otherwise the list is
    /// grown to `max(count + nnew, 2 * capacity)` tuples. If any of the
    /// arrays fails to grow the whole list is dropped, the handle becomes
    /// absent, and [`PendingError::OutOfMemory`] is returned.
    ///
    /// The tuple count is never changed here. An absent handle has nothing
    /// to grow and yields [`PendingError::NoList`]; create the list from the
    /// absent state with [`alloc`](Self::alloc) or [`add`](Self::add).
    pub fn realloc(&mut self, nnew: usize) -> Result<(), PendingError> {
        let Some(list) = self.list.as_mut() else {
            return Err(PendingError::NoList);
        };
        let count = list.len();
        let capacity = list.capacity();

        let Some(needed) = count.checked_add(nnew) else {
            log::warn!("pending list overflow: {count} + {nnew} tuples, dropping list");
            self.list = None;
            return Err(PendingError::CapacityOverflow { count, nnew });
        };
        if needed <= capacity {
            return Ok(());
        }

        let new_capacity = needed.max(capacity.saturating_mul(2));
        match list.grow_to(new_capacity, &mut self.alloc) {
            Ok(()) => {
                log::debug!("pending list grown from {capacity} to {new_capacity} tuples");
                Ok(())
            }
            Err(failure) => {
                log::warn!("{failure}, dropping pending list");
                self.list = None;
                Err(failure.error)
            }
        }
    }

    /// Append one tuple, creating the list on demand.
    ///
    /// An absent handle first gets a list of `layout` with
    /// [`PendingConfig::initial_capacity`] slots. A present list must have
    /// the same layout. `value` must already be of the list's value type.
    pub fn add(
        &mut self,
        layout: PendingLayout,
        row: Index,
        col: Option<Index>,
        value: &[u8],
    ) -> Result<(), PendingError> {
        match self.list.as_ref() {
            Some(list) if list.layout() != layout => return Err(PendingError::LayoutMismatch),
            Some(list) => list.check_tuple(col, value)?,
            None => {
                PendingList::new(layout)?.check_tuple(col, value)?;
                let nmax = self.config.initial_capacity;
                self.alloc(layout, nmax)?;
            }
        }
        self.realloc(1)?;
        let list = self.list.as_mut().ok_or(PendingError::NoList)?;
        list.push(row, col, value)
    }

    /// Number of pending tuples, zero when absent.
    pub fn len(&self) -> usize {
        self.list.as_ref().map_or(0, PendingList::len)
    }

    /// Whether there are no pending tuples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a list exists.
    pub fn is_present(&self) -> bool {
        self.list.is_some()
    }

    /// The list, if present.
    pub fn get(&self) -> Option<&PendingList> {
        self.list.as_ref()
    }

    /// The list, if present, for writing into its reserved tail.
    pub fn get_mut(&mut self) -> Option<&mut PendingList> {
        self.list.as_mut()
    }

    /// Remove the list for merging, leaving the handle absent.
    pub fn take(&mut self) -> Option<PendingList> {
        let list = self.list.take();
        if let Some(list) = &list {
            log::debug!("pending list of {} tuples taken for merge", list.len());
        }
        list
    }

    /// Release the list and all its storage.
    pub fn free(&mut self) {
        if let Some(list) = self.list.take() {
            log::debug!(
                "pending list freed ({} tuples, {} bytes)",
                list.len(),
                list.memory_bytes()
            );
        }
    }
}

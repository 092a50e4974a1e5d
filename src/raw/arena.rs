use alloc::vec::Vec;

use super::handle::Handle;

/// Slot allocator holding every node of a tree.
///
/// Vacated slots go on a free list and are handed out again before the backing
/// vector grows, so merges and root collapses do not leak slots.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of live (occupied) slots.
    #[cfg(test)]
    pub(crate) const fn len(&self) -> usize {
        self.slots.len().saturating_sub(self.free.len())
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        if let Some(handle) = self.free.pop() {
            self.slots[handle.slot()] = Some(element);
            return handle;
        }

        let handle = Handle::new(self.slots.len())
            .unwrap_or_else(|| panic!("`Arena::alloc()` - arena is at maximum capacity ({})", Handle::MAX + 1));
        self.slots.push(Some(element));
        handle
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.slot()].as_ref().expect("`Arena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.slot()].as_mut().expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    /// Moves the element out and recycles its slot.
    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let element = self.slots[handle.slot()].take().expect("`Arena::take()` - `handle` is invalid!");
        self.free.push(handle);
        element
    }

    pub(crate) fn free(&mut self, handle: Handle) {
        drop(self.take(handle));
    }

    /// Drops every element but keeps the allocation.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

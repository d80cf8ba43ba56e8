//! Top-level owning container.

use core::fmt;

use allocator_api2::alloc::{Allocator, Global};
use marrow_slot_buf::{Slot, Storage};

use crate::{bounded::Bounded, ordering::Ordered};

/// Number of slots a [`Container`] allocates, and the minimum a [`Bounded`]
/// allocates.
pub const DEFAULT_CAPACITY: usize = 4;

/// Owns a [`Storage`] of possibly move-only, [`Ordered`] elements.
///
/// `Container<T>` is `Clone` exactly when `T` is. It exposes no element
/// access of its own; scoped reads and iteration live on [`Bounded`], which
/// [`Container::bounded`] creates with its own independent storage.
///
/// ```
/// use marrow_core::{Container, DEFAULT_CAPACITY};
///
/// let container: Container<i64> = Container::new();
/// assert_eq!(container.capacity(), DEFAULT_CAPACITY);
/// assert!(container.is_empty());
/// ```
#[derive(Clone)]
pub struct Container<T, A: Allocator = Global> {
    storage: Storage<T, A>,
    first: Slot,
}

impl<T: Ordered> Container<T> {
    pub fn new() -> Self {
        Self::new_in(Global)
    }
}

impl<T: Ordered> Default for Container<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ordered, A: Allocator> Container<T, A> {
    /// Like [`Container::new`], allocating from `alloc`.
    pub fn new_in(alloc: A) -> Self {
        let storage = Storage::with_capacity_in(DEFAULT_CAPACITY, alloc);
        let first = storage.elements_handle();
        Container { storage, first }
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }
}

impl<T: Ordered, A: Allocator + Clone> Container<T, A> {
    /// Creates a [`Bounded`] view in the same allocator.
    ///
    /// The view allocates its own storage; nothing is shared with `self`.
    pub fn bounded(&self, capacity: usize) -> Bounded<T, A> {
        Bounded::new_in(capacity, self.storage.allocator().clone())
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Container<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("storage", &self.storage)
            .field("first", &self.first)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_allocates_default_capacity() {
        let container: Container<u32> = Container::new();
        assert_eq!(container.capacity(), DEFAULT_CAPACITY);
        assert_eq!(container.len(), 0);
        assert!(container.is_empty());
    }

    #[test]
    fn bounded_gets_independent_storage() {
        let container: Container<u32> = Container::default();
        let mut bounded = container.bounded(2);
        bounded.push(1).unwrap();

        assert_eq!(bounded.len(), 1);
        assert_eq!(container.len(), 0);
    }

    #[test]
    fn debug_shows_storage_and_handle() {
        let container: Container<u8> = Container::new();
        assert_eq!(
            format!("{:?}", container),
            "Container { storage: Storage { capacity: 4, elements: [] }, first: Slot(0) }"
        );
    }
}

//! Finite, restartable iteration over a [`Bounded`](crate::Bounded).

use core::{fmt, iter::FusedIterator};

use allocator_api2::alloc::{Allocator, Global};
use marrow_slot_buf::Storage;

/// Progress of an [`Iter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterState {
    /// Nothing yielded yet and at least one element remains.
    Idle,
    /// Some, but not all, elements yielded.
    Active,
    /// Every element yielded. Terminal: produce a new `Iter` to start over.
    Exhausted,
}

/// Yields clones of a storage's elements in slot order.
///
/// Created by [`Bounded::iter`](crate::Bounded::iter), which is only
/// available for `Clone` elements. Each step reads the slot at the current
/// index and never mutates the storage, so two iterators over the same
/// unmodified view yield identical sequences.
pub struct Iter<'a, T, A: Allocator = Global> {
    storage: &'a Storage<T, A>,
    index: usize,
}

impl<'a, T, A: Allocator> Iter<'a, T, A> {
    pub(crate) fn new(storage: &'a Storage<T, A>) -> Self {
        Iter { storage, index: 0 }
    }

    /// An empty storage starts out `Exhausted`.
    pub fn state(&self) -> IterState {
        if self.index == self.storage.len() {
            IterState::Exhausted
        } else if self.index == 0 {
            IterState::Idle
        } else {
            IterState::Active
        }
    }
}

impl<T: Clone, A: Allocator> Iterator for Iter<'_, T, A> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.index == self.storage.len() {
            return None;
        }
        let value = self.storage.read(self.index);
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.storage.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<T: Clone, A: Allocator> ExactSizeIterator for Iter<'_, T, A> {}

impl<T: Clone, A: Allocator> FusedIterator for Iter<'_, T, A> {}

// Manual impl avoids `T: Clone` / `A: Clone` bounds.
impl<T, A: Allocator> Clone for Iter<'_, T, A> {
    fn clone(&self) -> Self {
        Iter {
            storage: self.storage,
            index: self.index,
        }
    }
}

impl<T, A: Allocator> fmt::Debug for Iter<'_, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("index", &self.index)
            .field("len", &self.storage.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn storage_of(values: &[i32]) -> Storage<i32> {
        let mut storage = Storage::with_capacity(values.len());
        for &value in values {
            storage.try_push(value).unwrap();
        }
        storage
    }

    #[test]
    fn state_machine() {
        let storage = storage_of(&[1, 2]);
        let mut iter = Iter::new(&storage);
        assert_eq!(iter.state(), IterState::Idle);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.state(), IterState::Active);
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.state(), IterState::Exhausted);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.state(), IterState::Exhausted);
    }

    #[test]
    fn empty_is_exhausted_immediately() {
        let storage = storage_of(&[]);
        let mut iter = Iter::new(&storage);
        assert_eq!(iter.state(), IterState::Exhausted);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn exact_size() {
        let storage = storage_of(&[4, 5, 6]);
        let mut iter = Iter::new(&storage);
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.size_hint(), (2, Some(2)));
    }

    #[test]
    fn clone_continues_independently() {
        let storage = storage_of(&[7, 8, 9]);
        let mut iter = Iter::new(&storage);
        iter.next();
        let fork = iter.clone();
        assert_eq!(iter.collect::<Vec<_>>(), vec![8, 9]);
        assert_eq!(fork.collect::<Vec<_>>(), vec![8, 9]);
    }

    #[test]
    fn debug() {
        let storage = storage_of(&[1]);
        assert_eq!(format!("{:?}", Iter::new(&storage)), "Iter { index: 0, len: 1 }");
    }
}

//! Capacity-bounded owning view.

use core::fmt;

use allocator_api2::alloc::{Allocator, Global};
use marrow_slot_buf::{Full, Slot, Storage};

use crate::{container::DEFAULT_CAPACITY, iter::Iter, ordering::Ordered};

/// An owning, capacity-bounded min-heap of possibly move-only elements.
///
/// The element order in storage is heap order: slot 0 always holds the
/// minimum according to [`Ordered`], and [`with_min`](Self::with_min) lends
/// it out without cloning. Elements are only ever borrowed or dropped, never
/// duplicated, unless `T: Clone` enables [`iter`](Self::iter) and `Clone`.
///
/// # Example
///
/// ```
/// use marrow_core::Bounded;
///
/// let mut bounded = Bounded::new(4);
/// for value in [30, 10, 20] {
///     bounded.push(value).unwrap();
/// }
///
/// assert_eq!(bounded.len(), 3);
/// assert_eq!(bounded.with_min(|min| *min), Some(10));
/// assert_eq!(bounded.iter().count(), 3);
/// ```
#[derive(Clone)]
pub struct Bounded<T, A: Allocator = Global> {
    storage: Storage<T, A>,
    first: Slot,
    capacity: usize,
}

impl<T: Ordered> Bounded<T> {
    /// Creates an empty view that accepts at most `capacity` elements.
    ///
    /// Storage for `max(capacity, DEFAULT_CAPACITY)` slots is allocated up
    /// front and never reallocated.
    pub fn new(capacity: usize) -> Self {
        Self::new_in(capacity, Global)
    }
}

impl<T: Ordered, A: Allocator> Bounded<T, A> {
    /// Like [`Bounded::new`], allocating from `alloc`.
    pub fn new_in(capacity: usize, alloc: A) -> Self {
        let storage = Storage::with_capacity_in(capacity.max(DEFAULT_CAPACITY), alloc);
        let first = storage.elements_handle();
        Bounded {
            storage,
            first,
            capacity,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The declared capacity, fixed at construction.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Calls `body` with a borrow of the minimum element.
    ///
    /// Returns `None` without calling `body` when the view is empty. The
    /// borrow is only valid inside `body`: it can be inspected but neither
    /// returned nor moved out of.
    ///
    /// ```
    /// use marrow_core::Bounded;
    ///
    /// let mut bounded: Bounded<String> = Bounded::new(2);
    /// assert_eq!(bounded.with_min(|s| s.len()), None);
    ///
    /// bounded.push("pear".to_string()).unwrap();
    /// bounded.push("apple".to_string()).unwrap();
    /// assert_eq!(bounded.with_min(|s| s.to_uppercase()), Some("APPLE".to_string()));
    /// ```
    ///
    /// Moving a move-only element out of the borrow is rejected at compile time:
    ///
    /// ```compile_fail
    /// use marrow_core::{Bounded, Ordered};
    ///
    /// struct Token(u32);
    ///
    /// impl Ordered for Token {
    ///     fn is_less_than(lhs: &Self, rhs: &Self) -> bool {
    ///         lhs.0 < rhs.0
    ///     }
    /// }
    ///
    /// let bounded: Bounded<Token> = Bounded::new(4);
    /// let stolen: Option<Token> = bounded.with_min(|token| *token);
    /// ```
    ///
    /// And so is letting the borrow escape:
    ///
    /// ```compile_fail
    /// use marrow_core::Bounded;
    ///
    /// let bounded: Bounded<String> = Bounded::new(4);
    /// let escaped = bounded.with_min(|s| s);
    /// ```
    pub fn with_min<R>(&self, body: impl FnOnce(&T) -> R) -> Option<R> {
        self.storage.get(self.first).map(body)
    }

    /// Inserts `value`, keeping the minimum at the front.
    ///
    /// Never reallocates. When the view already holds
    /// [`capacity`](Self::capacity) elements, `value` is handed back in
    /// [`Full`].
    pub fn push(&mut self, value: T) -> Result<(), Full<T>> {
        if self.len() >= self.capacity {
            tracing::debug!(capacity = self.capacity, "bounded view is full, rejecting element");
            return Err(Full(value));
        }
        let mut child = self.storage.try_push(value)?;
        while child != self.first {
            let parent = Slot::new((child.index() - 1) / 2);
            let slots = self.storage.as_slice();
            if !T::is_less_than(&slots[child.index()], &slots[parent.index()]) {
                break;
            }
            self.storage.swap(child, parent);
            child = parent;
        }
        Ok(())
    }
}

impl<T: Ordered + Clone, A: Allocator> Bounded<T, A> {
    /// Returns a fresh iterator over clones of the elements, in storage order.
    ///
    /// Only available for `Clone` elements:
    ///
    /// ```compile_fail
    /// use marrow_core::{Bounded, Ordered};
    ///
    /// struct Token(u32);
    ///
    /// impl Ordered for Token {
    ///     fn is_less_than(lhs: &Self, rhs: &Self) -> bool {
    ///         lhs.0 < rhs.0
    ///     }
    /// }
    ///
    /// let bounded: Bounded<Token> = Bounded::new(4);
    /// for token in bounded.iter() {}
    /// ```
    pub fn iter(&self) -> Iter<'_, T, A> {
        Iter::new(&self.storage)
    }
}

impl<'a, T: Ordered + Clone, A: Allocator> IntoIterator for &'a Bounded<T, A> {
    type Item = T;
    type IntoIter = Iter<'a, T, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Bounded<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bounded")
            .field("capacity", &self.capacity)
            .field("elements", &self.storage.as_slice())
            .finish()
    }
}

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(unsafe_code)]

//! Fixed-capacity slot buffer for move-only elements.
//!
//! `Storage<T>` owns a single contiguous allocation of `capacity` slots plus a
//! count of how many leading slots are initialized:
//!
//! ```text
//! Storage<T>:  ptr ──▶ [ T | T | T | uninit | uninit ]
//!                       └─── len ───┘
//!                       └──────── capacity ────────┘
//! ```
//!
//! The buffer never grows or shrinks. Elements are written once through
//! [`Storage::try_push`] and dropped, in slot order, when the storage is dropped.
//!
//! Readers do not keep raw addresses around. They hold a [`Slot`], which is
//! just a position, and the storage re-derives the address on each access. A
//! `Slot` can therefore never dangle, only fall out of range.
//!
//! # Example
//!
//! ```
//! use marrow_slot_buf::Storage;
//!
//! let mut storage: Storage<String> = Storage::with_capacity(4);
//! let first = storage.elements_handle();
//! assert_eq!(storage.get(first), None);
//!
//! storage.try_push("hello".to_string()).unwrap();
//! assert_eq!(storage.get(first).map(String::as_str), Some("hello"));
//! assert_eq!(storage.read(0), "hello");
//! ```

extern crate alloc;

use alloc::alloc::handle_alloc_error;
use core::{
    alloc::Layout,
    fmt,
    marker::PhantomData,
    mem,
    ptr::{self, NonNull},
    slice,
};

use allocator_api2::alloc::{Allocator, Global};

/// Position of a slot inside a [`Storage`].
///
/// Carries no address, so it stays meaningful for as long as the storage
/// keeps at least `index + 1` initialized elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(usize);

impl Slot {
    /// The first slot of any storage.
    pub const FIRST: Slot = Slot(0);

    pub const fn new(index: usize) -> Self {
        Slot(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

static_assertions::assert_eq_size!(Slot, usize);

/// Checked access failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    #[error("slot index {index} out of range for storage of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Error returned when every slot of a storage is occupied.
///
/// Hands the rejected value back to the caller.
#[derive(Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("storage is full")]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the value that could not be stored.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Full").finish_non_exhaustive()
    }
}

/// A fixed-capacity buffer of `T` slots.
///
/// See [crate-level docs](crate) for the layout.
pub struct Storage<T, A: Allocator = Global> {
    ptr: NonNull<T>,
    len: usize,
    capacity: usize,
    alloc: A,
    // Owns `T`s for drop check purposes.
    _marker: PhantomData<T>,
}

impl<T> Storage<T> {
    /// Allocates `capacity` slots from the global allocator.
    ///
    /// Aborts through [`handle_alloc_error`] if the allocator fails, and
    /// panics if the byte size of `capacity` slots overflows.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_in(capacity, Global)
    }
}

impl<T, A: Allocator> Storage<T, A> {
    /// Allocates `capacity` slots from `alloc`.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        let layout = Self::layout(capacity);
        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            match alloc.allocate(layout) {
                Ok(block) => block.cast::<T>(),
                Err(_) => handle_alloc_error(layout),
            }
        };
        tracing::trace!(
            capacity,
            elem_size = mem::size_of::<T>(),
            "allocated slot storage"
        );
        Storage {
            ptr,
            len: 0,
            capacity,
            alloc,
            _marker: PhantomData,
        }
    }

    fn layout(capacity: usize) -> Layout {
        Layout::array::<T>(capacity).expect("capacity overflow")
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Handle to the first slot of the buffer.
    #[inline(always)]
    pub fn elements_handle(&self) -> Slot {
        Slot::FIRST
    }

    /// Borrows the element at `slot`, or `None` if the slot is not initialized.
    #[inline]
    pub fn get(&self, slot: Slot) -> Option<&T> {
        if slot.0 < self.len {
            // SAFETY: slots `0..len` are initialized and live as long as `self`.
            Some(unsafe { &*self.ptr.as_ptr().add(slot.0) })
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self, slot: Slot) -> Option<&mut T> {
        if slot.0 < self.len {
            // SAFETY: as in `get`, and `&mut self` guarantees exclusivity.
            Some(unsafe { &mut *self.ptr.as_ptr().add(slot.0) })
        } else {
            None
        }
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `ptr` is aligned and non-null (dangling only when nothing is
        // initialized), and slots `0..len` are initialized.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: see `as_slice`.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Writes `value` into the next free slot.
    ///
    /// The buffer never reallocates: once every slot is taken the value is
    /// returned inside [`Full`].
    pub fn try_push(&mut self, value: T) -> Result<Slot, Full<T>> {
        if self.len == self.capacity {
            return Err(Full(value));
        }
        // SAFETY: `len < capacity`, so the slot is allocated and uninitialized.
        unsafe { ptr::write(self.ptr.as_ptr().add(self.len), value) };
        self.len += 1;
        Ok(Slot(self.len - 1))
    }

    /// Swaps two initialized slots.
    ///
    /// # Panics
    ///
    /// Panics if either slot is out of range.
    pub fn swap(&mut self, a: Slot, b: Slot) {
        self.as_mut_slice().swap(a.0, b.0);
    }
}

impl<T: Clone, A: Allocator> Storage<T, A> {
    /// Clones the element at index `at`.
    ///
    /// # Panics
    ///
    /// Panics if `at >= len`. Callers are expected to bound their index by
    /// [`len`](Self::len); use [`try_read`](Self::try_read) otherwise.
    #[inline]
    pub fn read(&self, at: usize) -> T {
        match self.try_read(at) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_read(&self, at: usize) -> Result<T, SlotError> {
        self.get(Slot(at)).cloned().ok_or(SlotError::IndexOutOfRange {
            index: at,
            len: self.len,
        })
    }
}

impl<T, A: Allocator> Drop for Storage<T, A> {
    fn drop(&mut self) {
        // SAFETY: slots `0..len` are initialized and dropped exactly once here.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len));
        }
        let layout = Self::layout(self.capacity);
        if layout.size() != 0 {
            // SAFETY: `ptr` came from `self.alloc` with this exact layout.
            unsafe { self.alloc.deallocate(self.ptr.cast(), layout) };
        }
        tracing::trace!(capacity = self.capacity, len = self.len, "released slot storage");
    }
}

impl<T: Clone, A: Allocator + Clone> Clone for Storage<T, A> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity_in(self.capacity, self.alloc.clone());
        for value in self.as_slice() {
            // SAFETY: `copy` has the same capacity as `self` and `copy.len`
            // trails `self.len`. Bumping `len` after each write keeps already
            // cloned elements owned if a later `clone` panics.
            unsafe { ptr::write(copy.ptr.as_ptr().add(copy.len), value.clone()) };
            copy.len += 1;
        }
        copy
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Storage<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storage")
            .field("capacity", &self.capacity)
            .field("elements", &self.as_slice())
            .finish()
    }
}

// Same semantics as `Box<[T], A>`.
unsafe impl<T: Send, A: Allocator + Send> Send for Storage<T, A> {}
unsafe impl<T: Sync, A: Allocator + Sync> Sync for Storage<T, A> {}

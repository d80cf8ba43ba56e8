#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Containers for possibly move-only elements.
//!
//! - [`Container`] owns a fixed [`Storage`] of [`Ordered`] elements.
//! - [`Bounded`] owns its own storage, bounded by a declared capacity. It
//!   lends its minimum out through [`Bounded::with_min`] for any element type,
//!   and iterates through [`Bounded::iter`] only when elements are `Clone`.
//!
//! Raw memory access is confined to `marrow-slot-buf`; this crate only holds
//! [`Slot`] handles and lets the storage re-derive addresses.

pub mod bounded;
pub mod container;
pub mod iter;
pub mod ordering;

pub use bounded::Bounded;
pub use container::{Container, DEFAULT_CAPACITY};
pub use iter::{Iter, IterState};
pub use marrow_slot_buf::{Full, Slot, SlotError, Storage};
pub use ordering::Ordered;

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Marrow - containers for move-only elements
//!
//! # Overview
//!
//! Marrow provides small, fixed-allocation containers whose element types do
//! not have to be `Clone`:
//!
//! - [`Container`] owns a fixed buffer of [`Ordered`] elements.
//! - [`Bounded`] is a capacity-bounded min-heap with its own buffer. It lends
//!   its minimum through [`Bounded::with_min`] and, for `Clone` elements only,
//!   iterates through [`Bounded::iter`].
//!
//! Neither type ever reallocates, and elements are never duplicated unless
//! the element type opts in by being `Clone`.
//!
//! # Quick Start
//!
//! ```
//! use marrow::{Bounded, Ordered};
//!
//! // A move-only element with a custom ordering.
//! struct Job {
//!     priority: u8,
//!     name: String,
//! }
//!
//! impl Ordered for Job {
//!     fn is_less_than(lhs: &Self, rhs: &Self) -> bool {
//!         lhs.priority < rhs.priority
//!     }
//! }
//!
//! let mut jobs = Bounded::new(4);
//! jobs.push(Job { priority: 3, name: "compact".into() }).ok().unwrap();
//! jobs.push(Job { priority: 1, name: "flush".into() }).ok().unwrap();
//!
//! // Borrow the most urgent job without cloning or removing it.
//! let next = jobs.with_min(|job| job.name.clone());
//! assert_eq!(next.as_deref(), Some("flush"));
//! ```
//!
//! # Iteration
//!
//! Iteration yields clones, so it only exists for `Clone` elements:
//!
//! ```
//! use marrow::Bounded;
//!
//! let mut bounded = Bounded::new(4);
//! for value in [10, 20, 30] {
//!     bounded.push(value).unwrap();
//! }
//!
//! let first: Vec<i32> = bounded.iter().collect();
//! let second: Vec<i32> = bounded.iter().collect();
//! assert_eq!(first, [10, 20, 30]);
//! assert_eq!(first, second);
//! ```
//!
//! # Allocators
//!
//! Both containers allocate through `allocator_api2`'s `Allocator`, so an
//! arena such as `bumpalo::Bump` can back them via `new_in`.

pub use marrow_core::{
    Bounded, Container, DEFAULT_CAPACITY, Full, Iter, IterState, Ordered, Slot, SlotError,
    Storage,
};

// This file is part of growvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `growvec`
//!
//! A growable, heap-backed vector with a pluggable growth policy, an
//! injectable allocator, and two method families: a fast one whose
//! preconditions are the caller's job, and a `try_*` one that never panics
//! and reports where the failing call was made.
//!
//! The core type, [`GrowVec<T, G, A>`], owns a buffer of exactly
//! `capacity` slots and tracks a logical length `len <= capacity`. Only the
//! prefix `[0, len)` is initialized.
//!
//! ## Layers
//!
//! - [`GrowthPolicy`]: maps a full capacity to the next one. The default,
//!   [`Doubling`], goes `0 -> 32 -> 64 -> ...`.
//! - [`RawAlloc`]: where memory comes from. The default, [`Global`],
//!   forwards to `std::alloc`.
//! - [`GrowVec`]: the vector engine (push, in-place slot push, exact
//!   reserve, extend, pop, removal, shrink, reverse, sort, binary search,
//!   lower bound).
//! - [`Vector`]: an owning wrapper with value semantics (deep `Clone`,
//!   [`Vector::take`] for moves) and the [`vector!`] literal macro.
//!
//! ## Failure behavior
//!
//! - Allocation failure never changes `len`, `capacity` or contents.
//! - Fast surface: growing operations return [`AllocError`];
//!   [`GrowVec::pop`] and [`GrowVec::pop_get`] panic when empty;
//!   [`GrowVec::at`] and [`GrowVec::last`] return `None`.
//! - Result surface: every `try_*` method returns a [`VecResult`] whose
//!   [`VecError`] carries an [`ErrorKind`], a message and an [`Origin`]
//!   (file, line, column, operation) of the caller.
//! - Indexing (`v[i]`, `v[a..b]`) panics on out-of-bounds, like slices.
//!
//! ## Example
//!
//! ```rust
//! use growvec::{ErrorKind, GrowVec};
//!
//! let mut v: GrowVec<u32> = GrowVec::new();
//! v.push(30).unwrap();
//! v.extend(&[10, 20]).unwrap();
//! v.sort(|a, b| a.cmp(b));
//! assert_eq!(v.data(), &[10, 20, 30]);
//! assert_eq!(v.lower_bound(&15, |e, k| e.cmp(k)), Some(&20));
//!
//! let err = v.try_at(9).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::OutOfBounds);
//! ```
//!
//! ## Logging
//!
//! Allocation events are emitted through [`tracing`](https://docs.rs/tracing)
//! at `trace`/`debug` level. The crate never installs a subscriber.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

// Modules
mod allocator;
mod error;
mod growth;
mod index;
mod iter;
mod raw;
mod vec;
mod vector;

// Public exports (crate API surface)
pub use allocator::{Global, RawAlloc};
pub use error::{AllocError, ErrorKind, Origin, VecError, VecResult};
pub use growth::{Doubling, GrowthPolicy};
pub use iter::IntoIter;
pub use vec::{GrowVec, Slot};
pub use vector::Vector;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
pub struct ReadmeDoctests;

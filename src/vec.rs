// This file is part of growvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `GrowVec` type and its inherent API.
//!
//! `GrowVec<T, G, A>` is a heap-backed vector whose capacity changes only
//! through its own operations: growth follows the policy `G`, explicit
//! reservations are exact, and every allocation goes through `A`.
//! Each operation family lives in its own file under `vec/`.

mod extend;
mod fallible;
mod new;
mod pop;
mod push;
mod remove;
mod reserve;
mod reverse;
mod search;
mod shrink;
mod sort;

pub use push::Slot;

// Crate imports
use crate::{
    allocator::{Global, RawAlloc},
    growth::{Doubling, GrowthPolicy},
    raw::RawBuf,
};

// Std imports
use std::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem::ManuallyDrop,
    ops::{Deref, DerefMut},
    ptr, slice,
};

/// A growable, heap-allocated vector with a pluggable growth policy and
/// allocator.
///
/// # Layout and invariants
///
/// - a buffer of exactly [`capacity`](GrowVec::capacity) slots, owned through
///   the allocator `A`;
/// - a length `len <= capacity`; only `buf[..len]` is initialized and
///   visible through [`data`](GrowVec::data), indexing and iteration;
/// - `capacity == 0` means nothing is allocated.
///
/// A failed allocation never changes the length, capacity or contents.
///
/// # Two method families
///
/// - **Fast** (this file and most of `vec/`): preconditions are the caller's
///   job. [`pop`](GrowVec::pop) and [`pop_get`](GrowVec::pop_get) panic when
///   empty, [`at`](GrowVec::at) and [`last`](GrowVec::last) return `None`,
///   and growing operations return [`AllocError`](crate::AllocError).
/// - **Fallible** (`try_*`): never panic and return
///   [`VecResult`](crate::VecResult), whose error records the caller's
///   location. See [`try_push`](GrowVec::try_push).
///
/// # Growth
///
/// [`push`](GrowVec::push), [`push_slot`](GrowVec::push_slot) and
/// [`extend`](GrowVec::extend) consult `G` when the buffer is full (the default
/// [`Doubling`] goes `0 -> 32 -> 64 -> ...`). [`reserve`](GrowVec::reserve),
/// [`with_capacity`](GrowVec::with_capacity) and
/// [`from_slice`](GrowVec::from_slice) allocate exactly what they are asked
/// for.
///
/// # Examples
///
/// ```rust
/// use growvec::GrowVec;
///
/// let mut v: GrowVec<i32> = GrowVec::new();
/// v.push(3).unwrap();
/// v.extend(&[1, 2]).unwrap();
/// assert_eq!(v.capacity(), 32);
///
/// v.sort(|a, b| a.cmp(b));
/// assert_eq!(v.data(), &[1, 2, 3]);
/// assert_eq!(v.lower_bound(&2, |e, k| e.cmp(k)), Some(&2));
///
/// let err = v.try_at(7).unwrap_err();
/// assert_eq!(err.kind(), growvec::ErrorKind::OutOfBounds);
/// ```
///
/// # Threads
///
/// Nothing here is synchronized. Mutation needs `&mut self`, so sharing a
/// vector across threads requires the caller's own locking.
pub struct GrowVec<T, G: GrowthPolicy = Doubling, A: RawAlloc = Global> {
    pub(crate) buf: RawBuf<T, A>,
    pub(crate) len: usize,
    pub(crate) growth: G,
}

impl<T, G: GrowthPolicy, A: RawAlloc> GrowVec<T, G, A> {
    /// Returns the number of allocated slots.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `capacity - len`.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        self.buf.capacity() - self.len
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn at(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn at_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// The live elements `[0, len)`.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `ptr` is non-null and aligned (dangling when unallocated)
        // and `buf[..len]` is initialized.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    /// The live elements `[0, len)`, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`; `&mut self` guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Same as [`as_slice`](GrowVec::as_slice).
    #[inline]
    pub fn data(&self) -> &[T] {
        self.as_slice()
    }

    /// Same as [`as_mut_slice`](GrowVec::as_mut_slice).
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }

    /// Raw pointer to the buffer. Dangling when `capacity == 0`.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// The growth policy.
    #[inline]
    pub const fn growth_policy(&self) -> &G {
        &self.growth
    }

    /// The allocator.
    #[inline]
    pub const fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    /// Takes the buffer and length out of `self` without dropping elements.
    pub(crate) fn into_raw_parts(self) -> (RawBuf<T, A>, usize) {
        let me = ManuallyDrop::new(self);
        let len = me.len;
        // SAFETY: `me` is never dropped, so each field is moved out exactly once.
        let (buf, growth) = unsafe { (ptr::read(&me.buf), ptr::read(&me.growth)) };
        drop(growth);
        (buf, len)
    }
}

impl<T, G: GrowthPolicy, A: RawAlloc> Drop for GrowVec<T, G, A> {
    fn drop(&mut self) {
        // SAFETY: `buf[..len]` is initialized and never touched again; the
        // buffer itself is freed by `RawBuf::drop`.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T: fmt::Debug, G: GrowthPolicy, A: RawAlloc> fmt::Debug for GrowVec<T, G, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq, G: GrowthPolicy, A: RawAlloc> PartialEq for GrowVec<T, G, A> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: PartialEq, G: GrowthPolicy, A: RawAlloc> PartialEq<[T]> for GrowVec<T, G, A> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}
impl<T: PartialEq, G: GrowthPolicy, A: RawAlloc, const N: usize> PartialEq<[T; N]>
    for GrowVec<T, G, A>
{
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}
impl<T: Eq, G: GrowthPolicy, A: RawAlloc> Eq for GrowVec<T, G, A> {}
impl<T: Hash, G: GrowthPolicy, A: RawAlloc> Hash for GrowVec<T, G, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, G: GrowthPolicy, A: RawAlloc> Deref for GrowVec<T, G, A> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, G: GrowthPolicy, A: RawAlloc> DerefMut for GrowVec<T, G, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, G: GrowthPolicy, A: RawAlloc> AsRef<[T]> for GrowVec<T, G, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, G: GrowthPolicy, A: RawAlloc> AsMut<[T]> for GrowVec<T, G, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, G: GrowthPolicy, A: RawAlloc> Borrow<[T]> for GrowVec<T, G, A> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, G: GrowthPolicy, A: RawAlloc> BorrowMut<[T]> for GrowVec<T, G, A> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

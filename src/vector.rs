// This file is part of growvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The owning value wrapper [`Vector`].
//!
//! `Vector<T, A>` wraps a [`GrowVec`] with the default [`Doubling`] policy
//! and gives it value semantics: `Clone` is a deep copy, [`Vector::take`]
//! moves the buffer out and leaves an empty vector behind, and `Drop`
//! releases exactly once.
//!
//! Operations that have no error channel (`push_back`, `reserve`,
//! `with_capacity`, `from_slice`, `clone`) report allocation failure by
//! panicking with the [`VecError`] itself as payload, so it can be recovered
//! with [`std::panic::catch_unwind`] and downcast.

// Crate imports
use crate::{
    allocator::{Global, RawAlloc},
    error::{Origin, VecError, VecResult},
    growth::Doubling,
    iter::IntoIter,
    vec::GrowVec,
};

// Std imports
use std::{
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::{Deref, DerefMut},
    slice,
};

// External imports
use tracing::debug;

/// Builds a [`Vector`] from a list of elements, with capacity exactly equal to
/// the number of elements.
///
/// ```rust
/// use growvec::vector;
///
/// let v = vector![1, 2, 3];
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.capacity(), 3);
///
/// let e: growvec::Vector<u8> = vector![];
/// assert!(e.is_empty());
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        <$crate::Vector<_>>::new()
    };
    ($($x:expr),+ $(,)?) => {
        <$crate::Vector<_>>::from([$($x),+])
    };
}

#[cold]
#[track_caller]
fn raise(err: VecError) -> ! {
    debug!(%err, "raising allocation failure");
    std::panic::panic_any(err)
}

/// A growable vector with value semantics.
///
/// # Examples
///
/// ```rust
/// use growvec::{ErrorKind, Vector};
///
/// let mut a = Vector::from([10, 20, 30]);
/// let b = a.clone();
/// a[0] = 99;
/// assert_eq!(b[0], 10);
///
/// let moved = a.take();
/// assert!(a.is_empty());
/// assert_eq!(moved.data(), &[99, 20, 30]);
///
/// assert_eq!(moved.at(5).unwrap_err().kind(), ErrorKind::OutOfBounds);
/// ```
pub struct Vector<T, A: RawAlloc = Global> {
    inner: GrowVec<T, Doubling, A>,
}

impl<T> Vector<T> {
    /// Creates an empty vector. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self::new_in(Global)
    }

    /// Creates an empty vector with exactly `n` slots.
    ///
    /// # Panics
    ///
    /// Panics with a [`VecError`] payload if the allocation fails.
    #[track_caller]
    pub fn with_capacity(n: usize) -> Self {
        Self::with_capacity_in(n, Global)
    }

    /// Clones `items` into a vector of capacity exactly `items.len()`.
    ///
    /// # Panics
    ///
    /// Panics with a [`VecError`] payload if the allocation fails.
    #[track_caller]
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_slice_in(items, Global)
    }
}

impl<T, A: RawAlloc> Vector<T, A> {
    /// Creates an empty vector backed by `alloc`. Does not allocate.
    #[inline]
    pub const fn new_in(alloc: A) -> Self {
        Self {
            inner: GrowVec::new_in(Doubling, alloc),
        }
    }

    /// [`with_capacity`](Vector::with_capacity) with a custom allocator.
    #[track_caller]
    pub fn with_capacity_in(n: usize, alloc: A) -> Self {
        match GrowVec::try_with_capacity_in(n, Doubling, alloc) {
            Ok(inner) => Self { inner },
            Err(err) => raise(err),
        }
    }

    /// [`from_slice`](Vector::from_slice) with a custom allocator.
    #[track_caller]
    pub fn from_slice_in(items: &[T], alloc: A) -> Self
    where
        T: Clone,
    {
        match GrowVec::try_from_slice_in(items, Doubling, alloc) {
            Ok(inner) => Self { inner },
            Err(err) => raise(err),
        }
    }

    /// Moves the contents out, leaving `self` empty with capacity `0`.
    ///
    /// The returned vector owns the original buffer (same data pointer); the
    /// emptied `self` stays usable and drops independently.
    pub fn take(&mut self) -> Self
    where
        A: Clone,
    {
        let empty = Self::new_in(self.inner.allocator().clone());
        mem::replace(self, empty)
    }

    /// Appends `value`.
    ///
    /// # Panics
    ///
    /// Panics with a [`VecError`] payload if growing fails.
    #[track_caller]
    pub fn push_back(&mut self, value: T) {
        if let Err(cause) = self.inner.push(value) {
            raise(VecError::alloc(cause, Origin::caller("push_back")));
        }
    }

    /// Grows the capacity to exactly `n` if it is smaller.
    ///
    /// # Panics
    ///
    /// Panics with a [`VecError`] payload if the allocation fails.
    #[track_caller]
    pub fn reserve(&mut self, n: usize) {
        if let Err(cause) = self.inner.reserve(n) {
            raise(VecError::alloc(cause, Origin::caller("reserve")));
        }
    }

    /// Removes and returns the last element, or `None` if empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.inner.is_empty() {
            None
        } else {
            Some(self.inner.pop_get())
        }
    }

    /// Returns the element at `i`, or an `OutOfBounds` error.
    #[track_caller]
    pub fn at(&self, i: usize) -> VecResult<&T> {
        match self.inner.at(i) {
            Some(x) => Ok(x),
            None => Err(VecError::out_of_bounds(
                i,
                self.inner.len(),
                Origin::caller("at"),
            )),
        }
    }

    /// Returns the element at `i` mutably, or an `OutOfBounds` error.
    #[track_caller]
    pub fn at_mut(&mut self, i: usize) -> VecResult<&mut T> {
        let len = self.inner.len();
        if i >= len {
            return Err(VecError::out_of_bounds(i, len, Origin::caller("at_mut")));
        }
        Ok(&mut self.inner.as_mut_slice()[i])
    }

    /// The first element, if any.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.inner.as_slice().first()
    }

    /// The first element mutably, if any.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.inner.as_mut_slice().first_mut()
    }

    /// The last element, if any.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.inner.last()
    }

    /// The last element mutably, if any.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.inner.last_mut()
    }

    /// Number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Same as [`len`](Vector::len).
    #[inline]
    pub const fn size(&self) -> usize {
        self.inner.len()
    }

    /// Number of allocated slots.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Drops every element. Capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// See [`GrowVec::shrink_to_fit`].
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.inner.shrink_to_fit();
    }

    /// The live elements.
    #[inline]
    pub fn data(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// The live elements, mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        self.inner.as_mut_slice()
    }

    /// Raw pointer to the buffer. Dangling when `capacity == 0`.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.inner.as_ptr()
    }

    /// Iterates over the live elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.inner.iter()
    }

    /// Iterates mutably over the live elements.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.inner.iter_mut()
    }

    /// The allocator.
    #[inline]
    pub const fn allocator(&self) -> &A {
        self.inner.allocator()
    }

    /// The wrapped [`GrowVec`], for the fast and `try_*` method families.
    #[inline]
    pub const fn inner(&self) -> &GrowVec<T, Doubling, A> {
        &self.inner
    }

    /// The wrapped [`GrowVec`], mutably.
    #[inline]
    pub fn inner_mut(&mut self) -> &mut GrowVec<T, Doubling, A> {
        &mut self.inner
    }

    /// Unwraps into the underlying [`GrowVec`] without copying.
    #[inline]
    pub fn into_inner(self) -> GrowVec<T, Doubling, A> {
        self.inner
    }
}

impl<T: Clone, A: RawAlloc + Clone> Clone for Vector<T, A> {
    #[track_caller]
    fn clone(&self) -> Self {
        Self::from_slice_in(self.data(), self.allocator().clone())
    }

    /// Releases the current buffer, then copies `source` into a buffer of
    /// exactly `source.len()` slots.
    #[track_caller]
    fn clone_from(&mut self, source: &Self) {
        self.inner.release();
        if let Err(cause) = self.inner.reserve(source.len()) {
            raise(VecError::alloc(cause, Origin::caller("clone_from")));
        }
        self.inner.clone_into_spare(source.data());
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    #[track_caller]
    fn from(items: [T; N]) -> Self {
        let mut v = Self::with_capacity(N);
        for x in items {
            v.inner.push_within_capacity(x);
        }
        v
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    #[track_caller]
    fn from(items: &[T]) -> Self {
        Self::from_slice(items)
    }
}

impl<T, A: RawAlloc> From<GrowVec<T, Doubling, A>> for Vector<T, A> {
    fn from(inner: GrowVec<T, Doubling, A>) -> Self {
        Self { inner }
    }
}

impl<T, A: RawAlloc> From<Vector<T, A>> for GrowVec<T, Doubling, A> {
    fn from(v: Vector<T, A>) -> Self {
        v.inner
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut v = Self::new();
        let (lower, _) = iter.size_hint();
        if lower > 0 {
            v.reserve(lower);
        }
        for x in iter {
            v.push_back(x);
        }
        v
    }
}

impl<T, A: RawAlloc> Deref for Vector<T, A> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        self.data()
    }
}
impl<T, A: RawAlloc> DerefMut for Vector<T, A> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.data_mut()
    }
}

impl<T, A: RawAlloc> AsRef<[T]> for Vector<T, A> {
    fn as_ref(&self) -> &[T] {
        self.data()
    }
}

impl<T: fmt::Debug, A: RawAlloc> fmt::Debug for Vector<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, A: RawAlloc> PartialEq for Vector<T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.data() == other.data()
    }
}
impl<T: PartialEq, A: RawAlloc, const N: usize> PartialEq<[T; N]> for Vector<T, A> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.data() == other
    }
}
impl<T: Eq, A: RawAlloc> Eq for Vector<T, A> {}
impl<T: Hash, A: RawAlloc> Hash for Vector<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data().hash(state)
    }
}

impl<'a, T, A: RawAlloc> IntoIterator for &'a Vector<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, T, A: RawAlloc> IntoIterator for &'a mut Vector<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
impl<T, A: RawAlloc> IntoIterator for Vector<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

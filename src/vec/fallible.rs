// This file is part of growvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The non-panicking (`try_*`) method family.
//!
//! Every method here is `#[track_caller]`, so the [`Origin`] inside a
//! returned [`VecError`] points at the user's call, not at this file.
//! `Origin::caller` must run in the method body itself: closures do not
//! forward the caller location.

// Crate imports
use crate::{
    allocator::{Global, RawAlloc},
    error::{Origin, VecError, VecResult},
    growth::{Doubling, GrowthPolicy},
    vec::GrowVec,
};

impl<T> GrowVec<T> {
    /// Creates an empty vector with exactly `n` slots, or fails.
    #[track_caller]
    pub fn try_with_capacity(n: usize) -> VecResult<Self> {
        Self::try_with_capacity_in(n, Doubling, Global)
    }

    /// Clones `items` into a vector of capacity exactly `items.len()`, or fails.
    #[track_caller]
    pub fn try_from_slice(items: &[T]) -> VecResult<Self>
    where
        T: Clone,
    {
        Self::try_from_slice_in(items, Doubling, Global)
    }
}

impl<T, G: GrowthPolicy, A: RawAlloc> GrowVec<T, G, A> {
    /// [`try_with_capacity`](GrowVec::try_with_capacity) with a custom policy
    /// and allocator.
    #[track_caller]
    pub fn try_with_capacity_in(n: usize, growth: G, alloc: A) -> VecResult<Self> {
        let origin = Origin::caller("try_with_capacity");
        let mut v = Self::new_in(growth, alloc);
        v.buf
            .resize_exact(n)
            .map_err(|e| VecError::alloc(e, origin))?;
        Ok(v)
    }

    /// [`try_from_slice`](GrowVec::try_from_slice) with a custom policy and
    /// allocator.
    #[track_caller]
    pub fn try_from_slice_in(items: &[T], growth: G, alloc: A) -> VecResult<Self>
    where
        T: Clone,
    {
        let origin = Origin::caller("try_from_slice");
        let mut v = Self::new_in(growth, alloc);
        v.buf
            .resize_exact(items.len())
            .map_err(|e| VecError::alloc(e, origin))?;
        v.clone_into_spare(items);
        Ok(v)
    }

    /// Non-panicking [`reserve`](GrowVec::reserve).
    #[track_caller]
    pub fn try_reserve(&mut self, n: usize) -> VecResult<()> {
        let origin = Origin::caller("try_reserve");
        self.reserve(n).map_err(|e| VecError::alloc(e, origin))
    }

    /// Non-panicking [`push`](GrowVec::push).
    ///
    /// ```rust
    /// use growvec::{ErrorKind, GrowVec};
    ///
    /// let mut v: GrowVec<u8> = GrowVec::new();
    /// v.try_push(1).unwrap();
    /// assert_eq!(v.try_pop().unwrap(), 1);
    ///
    /// let err = v.try_pop().unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Empty);
    /// assert_eq!(err.origin().operation(), "try_pop");
    /// ```
    #[track_caller]
    pub fn try_push(&mut self, value: T) -> VecResult<()> {
        let origin = Origin::caller("try_push");
        self.push(value).map_err(|e| VecError::alloc(e, origin))
    }

    /// Non-panicking [`extend`](GrowVec::extend).
    #[track_caller]
    pub fn try_extend(&mut self, items: &[T]) -> VecResult<()>
    where
        T: Clone,
    {
        let origin = Origin::caller("try_extend");
        self.extend(items).map_err(|e| VecError::alloc(e, origin))
    }

    /// Removes and returns the last element, or fails if empty.
    #[track_caller]
    pub fn try_pop(&mut self) -> VecResult<T> {
        if self.is_empty() {
            return Err(VecError::empty(Origin::caller("try_pop")));
        }
        Ok(self.pop_get())
    }

    /// Returns the element at `i`, or fails if `i >= len`.
    #[track_caller]
    pub fn try_at(&self, i: usize) -> VecResult<&T> {
        match self.at(i) {
            Some(x) => Ok(x),
            None => Err(VecError::out_of_bounds(i, self.len, Origin::caller("try_at"))),
        }
    }

    /// Returns the element at `i` mutably, or fails if `i >= len`.
    #[track_caller]
    pub fn try_at_mut(&mut self, i: usize) -> VecResult<&mut T> {
        if i >= self.len {
            return Err(VecError::out_of_bounds(
                i,
                self.len,
                Origin::caller("try_at_mut"),
            ));
        }
        Ok(&mut self.as_mut_slice()[i])
    }

    /// Returns the last element, or fails if empty.
    #[track_caller]
    pub fn try_last(&self) -> VecResult<&T> {
        match self.last() {
            Some(x) => Ok(x),
            None => Err(VecError::empty(Origin::caller("try_last"))),
        }
    }

    /// Order-preserving removal, or fails if `index >= len`.
    #[track_caller]
    pub fn try_remove(&mut self, index: usize) -> VecResult<T> {
        let len = self.len;
        match self.remove(index) {
            Some(x) => Ok(x),
            None => Err(VecError::out_of_bounds(index, len, Origin::caller("try_remove"))),
        }
    }

    /// O(1) unordered removal, or fails if `index >= len`.
    #[track_caller]
    pub fn try_swap_remove(&mut self, index: usize) -> VecResult<T> {
        let len = self.len;
        match self.swap_remove(index) {
            Some(x) => Ok(x),
            None => Err(VecError::out_of_bounds(
                index,
                len,
                Origin::caller("try_swap_remove"),
            )),
        }
    }
}

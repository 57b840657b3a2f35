// This file is part of growvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    allocator::{Global, RawAlloc},
    growth::{Doubling, GrowthPolicy},
    raw::RawBuf,
    vec::GrowVec,
};

impl<T> GrowVec<T> {
    /// Creates an empty vector. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self::new_in(Doubling, Global)
    }

    /// Creates an empty vector with exactly `n` slots.
    ///
    /// If the allocation fails the vector is returned with capacity `0`; use
    /// [`try_with_capacity`](GrowVec::try_with_capacity) to observe the error.
    #[inline]
    pub fn with_capacity(n: usize) -> Self {
        Self::with_capacity_in(n, Doubling, Global)
    }

    /// Clones `items` into a vector of capacity exactly `items.len()`.
    ///
    /// If the allocation fails the vector is returned empty; use
    /// [`try_from_slice`](GrowVec::try_from_slice) to observe the error.
    #[inline]
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_slice_in(items, Doubling, Global)
    }
}

impl<T, G: GrowthPolicy, A: RawAlloc> GrowVec<T, G, A> {
    /// Creates an empty vector using `growth` and `alloc`. Does not allocate.
    #[inline]
    pub const fn new_in(growth: G, alloc: A) -> Self {
        Self {
            buf: RawBuf::new_in(alloc),
            len: 0,
            growth,
        }
    }

    /// [`with_capacity`](GrowVec::with_capacity) with a custom policy and
    /// allocator.
    pub fn with_capacity_in(n: usize, growth: G, alloc: A) -> Self {
        let mut v = Self::new_in(growth, alloc);
        // On failure `v` keeps capacity 0.
        let _ = v.buf.resize_exact(n);
        v
    }

    /// [`from_slice`](GrowVec::from_slice) with a custom policy and allocator.
    pub fn from_slice_in(items: &[T], growth: G, alloc: A) -> Self
    where
        T: Clone,
    {
        let mut v = Self::with_capacity_in(items.len(), growth, alloc);
        if v.capacity() == items.len() {
            v.clone_into_spare(items);
        }
        v
    }
}

impl<T, G: GrowthPolicy + Default, A: RawAlloc + Default> Default for GrowVec<T, G, A> {
    fn default() -> Self {
        Self::new_in(G::default(), A::default())
    }
}

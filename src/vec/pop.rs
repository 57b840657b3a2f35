// This file is part of growvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::RawAlloc, growth::GrowthPolicy, vec::GrowVec};

// Std imports
use std::ptr;

impl<T, G: GrowthPolicy, A: RawAlloc> GrowVec<T, G, A> {
    /// Drops the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty. See [`try_pop`](GrowVec::try_pop) for
    /// the non-panicking form.
    #[inline]
    #[track_caller]
    pub fn pop(&mut self) {
        assert!(self.len > 0, "pop on an empty vector");
        self.len -= 1;
        // SAFETY: the slot at the old `len - 1` was initialized and is now
        // outside the live prefix.
        unsafe { ptr::drop_in_place(self.buf.ptr().add(self.len)) };
    }

    /// Removes and returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    #[track_caller]
    pub fn pop_get(&mut self) -> T {
        assert!(self.len > 0, "pop_get on an empty vector");
        self.len -= 1;
        // SAFETY: as in `pop`; the value is moved out exactly once.
        unsafe { self.buf.ptr().add(self.len).read() }
    }
}

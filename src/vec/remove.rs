// This file is part of growvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::RawAlloc, growth::GrowthPolicy, vec::GrowVec};

// Std imports
use std::ptr;

impl<T, G: GrowthPolicy, A: RawAlloc> GrowVec<T, G, A> {
    /// Removes and returns the element at `index`, shifting subsequent elements left.
    ///
    /// O(len - index). Returns `None` (and does nothing) if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let len = self.len;
        // SAFETY: `index < len`, so `p` points at an initialized element and
        // `[index + 1, len)` is initialized; `ptr::copy` handles the overlap.
        unsafe {
            let p = self.buf.ptr().add(index);
            let out = p.read();
            ptr::copy(p.add(1), p, len - index - 1);
            self.len = len - 1;
            Some(out)
        }
    }

    /// Removes and returns the element at `index` by moving the last element
    /// into its place.
    ///
    /// O(1); does not preserve order. Returns `None` (and does nothing) if
    /// `index >= len`.
    #[inline]
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        self.len -= 1;
        let last = self.len;
        // SAFETY: before the decrement `index` and `last` were both below
        // `len`; the hole at `index` is refilled from `last`, which then falls
        // outside the live prefix.
        unsafe {
            let base = self.buf.ptr();
            let out = base.add(index).read();
            if index != last {
                ptr::copy_nonoverlapping(base.add(last), base.add(index), 1);
            }
            Some(out)
        }
    }
}

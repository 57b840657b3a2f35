// This file is part of growvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::RawAlloc, growth::GrowthPolicy, vec::GrowVec};

// Std imports
use std::ptr;

// External imports
use tracing::debug;

impl<T, G: GrowthPolicy, A: RawAlloc> GrowVec<T, G, A> {
    /// Drops every element and sets `len = 0`. Capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        self.len = 0;
        // SAFETY: `live` covered the initialized prefix, which is no longer
        // reachable now that `len == 0`.
        unsafe { ptr::drop_in_place(live) };
    }

    /// Reduces the capacity to the length.
    ///
    /// - `len == 0`: the buffer is freed (capacity `0`).
    /// - `len == capacity`: no-op.
    /// - otherwise: reallocates to exactly `len` slots.
    ///
    /// If the allocator refuses the smaller block the vector keeps its current
    /// buffer.
    pub fn shrink_to_fit(&mut self) {
        if self.len == 0 {
            self.buf.release();
            return;
        }
        if self.len == self.capacity() {
            return;
        }
        if let Err(err) = self.buf.resize_exact(self.len) {
            debug!(
                %err,
                len = self.len,
                capacity = self.capacity(),
                "shrink_to_fit kept the current buffer"
            );
        }
    }

    /// Drops every element, frees the buffer, and returns to the state of
    /// [`new`](GrowVec::new). Calling it again is a no-op.
    pub fn release(&mut self) {
        self.clear();
        self.buf.release();
    }
}

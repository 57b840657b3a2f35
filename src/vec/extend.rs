// This file is part of growvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::RawAlloc, error::AllocError, growth::GrowthPolicy, vec::GrowVec};

impl<T: Clone, G: GrowthPolicy, A: RawAlloc> GrowVec<T, G, A> {
    /// Appends clones of `items` in order.
    ///
    /// Grows at most once: the policy is applied repeatedly until the capacity
    /// holds `len + items.len()`, then the buffer is reallocated a single time.
    /// On error the vector is unchanged.
    #[inline]
    pub fn extend(&mut self, items: &[T]) -> Result<(), AllocError> {
        self.grow_for(items.len())?;
        self.clone_into_spare(items);
        Ok(())
    }

    /// Clones `items` into spare capacity. The caller guarantees room.
    pub(crate) fn clone_into_spare(&mut self, items: &[T]) {
        assert!(items.len() <= self.spare_capacity());
        for item in items {
            // `len` is bumped per element so a panicking `clone` leaks nothing.
            self.push_within_capacity(item.clone());
        }
    }
}

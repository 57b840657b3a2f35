// This file is part of growvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    allocator::RawAlloc,
    error::AllocError,
    growth::{GrowthPolicy, grow_until},
    vec::GrowVec,
};

// External imports
use tracing::debug;

impl<T, G: GrowthPolicy, A: RawAlloc> GrowVec<T, G, A> {
    /// Ensures `capacity >= n`, reallocating to exactly `n` if needed.
    ///
    /// Never shrinks and never consults the growth policy. On error the vector
    /// is unchanged.
    #[inline]
    pub fn reserve(&mut self, n: usize) -> Result<(), AllocError> {
        if n <= self.capacity() {
            return Ok(());
        }
        self.buf.resize_exact(n)
    }

    /// Makes room for `additional` more elements, growing through the policy
    /// (applied as many times as needed) with a single reallocation.
    pub(crate) fn grow_for(&mut self, additional: usize) -> Result<(), AllocError> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(AllocError::CapacityOverflow)?;
        if required <= self.capacity() {
            return Ok(());
        }
        let Some(new_cap) = grow_until(&self.growth, self.capacity(), required) else {
            debug!(
                capacity = self.capacity(),
                required, "growth policy stopped growing"
            );
            return Err(AllocError::CapacityOverflow);
        };
        self.buf.resize_exact(new_cap)
    }
}

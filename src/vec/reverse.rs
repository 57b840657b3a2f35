// This file is part of growvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::RawAlloc, growth::GrowthPolicy, vec::GrowVec};

impl<T, G: GrowthPolicy, A: RawAlloc> GrowVec<T, G, A> {
    /// Reverses the elements in place by swapping from both ends inward.
    #[inline]
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }
        let s = self.as_mut_slice();
        let (mut i, mut j) = (0, s.len() - 1);
        while i < j {
            s.swap(i, j);
            i += 1;
            j -= 1;
        }
    }
}

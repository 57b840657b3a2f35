// This file is part of growvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Both searches call the comparator as `cmp(element, key)`, and require the
// vector to be sorted consistently with it.

// Crate imports
use crate::{allocator::RawAlloc, growth::GrowthPolicy, vec::GrowVec};

// Std imports
use std::cmp::Ordering;

impl<T, G: GrowthPolicy, A: RawAlloc> GrowVec<T, G, A> {
    /// Returns some element comparing equal to `key`, or `None`.
    ///
    /// Which of several equal elements is returned is unspecified.
    #[inline]
    pub fn binary_search<K, F>(&self, key: &K, mut cmp: F) -> Option<&T>
    where
        K: ?Sized,
        F: FnMut(&T, &K) -> Ordering,
    {
        let s = self.as_slice();
        s.binary_search_by(|e| cmp(e, key)).ok().map(|i| &s[i])
    }

    /// Returns the first element that does not compare `Less` than `key`, or
    /// `None` if every element does.
    ///
    /// ```rust
    /// use growvec::GrowVec;
    ///
    /// let v = GrowVec::from_slice(&[10, 20, 30, 40, 50]);
    /// assert_eq!(v.lower_bound(&25, |e, k| e.cmp(k)), Some(&30));
    /// assert_eq!(v.lower_bound(&5, |e, k| e.cmp(k)), Some(&10));
    /// assert_eq!(v.lower_bound(&60, |e, k| e.cmp(k)), None);
    /// ```
    #[inline]
    pub fn lower_bound<K, F>(&self, key: &K, cmp: F) -> Option<&T>
    where
        K: ?Sized,
        F: FnMut(&T, &K) -> Ordering,
    {
        self.as_slice().get(self.lower_bound_index(key, cmp))
    }

    /// Index of the first element that does not compare `Less` than `key`;
    /// `len` if there is none. Ties resolve to the leftmost element.
    pub fn lower_bound_index<K, F>(&self, key: &K, mut cmp: F) -> usize
    where
        K: ?Sized,
        F: FnMut(&T, &K) -> Ordering,
    {
        let s = self.as_slice();
        // Half-open [low, high).
        let (mut low, mut high) = (0, s.len());
        while low < high {
            let mid = low + (high - low) / 2;
            if cmp(&s[mid], key) == Ordering::Less {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        low
    }
}

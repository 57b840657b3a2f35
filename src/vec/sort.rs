// This file is part of growvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::RawAlloc, growth::GrowthPolicy, vec::GrowVec};

// Std imports
use std::cmp::Ordering;

impl<T, G: GrowthPolicy, A: RawAlloc> GrowVec<T, G, A> {
    /// Sorts the elements with a three-way comparator.
    ///
    /// Unstable: equal elements may be reordered. `cmp` must be a total order.
    #[inline]
    pub fn sort<F>(&mut self, cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len < 2 {
            return;
        }
        self.as_mut_slice().sort_unstable_by(cmp);
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::vec::GrowVec;

    #[test]
    fn test_sort_ascending_and_descending() {
        let mut v = GrowVec::from_slice(&[50, 10, 30, 20, 40]);
        v.sort(|a, b| a.cmp(b));
        assert_eq!(v.data(), &[10, 20, 30, 40, 50]);
        v.sort(|a, b| b.cmp(a));
        assert_eq!(v.data(), &[50, 40, 30, 20, 10]);
    }

    #[test]
    fn test_sort_by_key_field() {
        #[derive(Debug, PartialEq)]
        struct P {
            x: f32,
        }
        let mut v = GrowVec::new();
        for x in [3.0, -1.0, 2.5] {
            v.push(P { x }).unwrap();
        }
        v.sort(|a, b| a.x.total_cmp(&b.x));
        assert_eq!(v.data(), &[P { x: -1.0 }, P { x: 2.5 }, P { x: 3.0 }]);
    }

    #[test]
    fn test_sort_short_never_calls_comparator() {
        let mut v = GrowVec::from_slice(&[1]);
        v.sort(|_, _| panic!("comparator called"));
        let mut e: GrowVec<i32> = GrowVec::new();
        e.sort(|_, _| panic!("comparator called"));
    }
}

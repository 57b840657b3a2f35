// This file is part of growvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`GrowVec`](crate::GrowVec) and
//! [`Vector`](crate::Vector).
//!
//! `Index`/`IndexMut` mirror slice behavior:
//! - panics on out-of-bounds (use `at`/`try_at` for checked access);
//! - supports every range form through [`SliceIndex`];
//! - views are restricted to the live prefix `[0..len)`.

// Crate imports
use crate::{allocator::RawAlloc, growth::GrowthPolicy, vec::GrowVec, vector::Vector};

// Std imports
use std::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>, G: GrowthPolicy, A: RawAlloc> Index<I> for GrowVec<T, G, A> {
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>, G: GrowthPolicy, A: RawAlloc> IndexMut<I> for GrowVec<T, G, A> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>, A: RawAlloc> Index<I> for Vector<T, A> {
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.data()[index]
    }
}

impl<T, I: SliceIndex<[T]>, A: RawAlloc> IndexMut<I> for Vector<T, A> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.data_mut()[index]
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{vec::GrowVec, vector::Vector};

    #[test]
    fn test_ranges() {
        let mut v = GrowVec::from_slice(&[0, 1, 2, 3, 4]);
        assert_eq!(v[0], 0);
        assert_eq!(&v[1..3], &[1, 2]);
        assert_eq!(&v[2..], &[2, 3, 4]);
        assert_eq!(&v[..=2], &[0, 1, 2]);
        assert_eq!(&v[..], &[0, 1, 2, 3, 4]);

        v[1..3].copy_from_slice(&[10, 20]);
        v[4] = 40;
        assert_eq!(v.data(), &[0, 10, 20, 3, 40]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_oob_panics() {
        let v: GrowVec<i32> = GrowVec::with_capacity(4);
        // Capacity is not length.
        let _ = v[0];
    }

    #[test]
    fn test_vector_index() {
        let mut v = Vector::from([1, 2, 3]);
        v[0] = 999;
        assert_eq!(v[0], 999);
        assert_eq!(&v[1..], &[2, 3]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_vector_oob_panics() {
        let v = Vector::from([1, 2, 3]);
        let _ = v[3];
    }
}

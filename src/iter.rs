// This file is part of growvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`GrowVec`](crate::GrowVec).
//!
//! - `IntoIter<T, A>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. Elements not yet yielded are
//!   dropped with the iterator, then the buffer is freed.
//! - `&GrowVec` and `&mut GrowVec` iterate as slices.

// Crate imports
use crate::{
    allocator::{Global, RawAlloc},
    growth::GrowthPolicy,
    raw::RawBuf,
    vec::GrowVec,
};

// Std imports
use std::{fmt, iter::FusedIterator, ptr, slice};

/// Owned iterator returned by `GrowVec::into_iter()`.
pub struct IntoIter<T, A: RawAlloc = Global> {
    buf: RawBuf<T, A>,
    // Slots [front, back) are initialized and not yet yielded.
    front: usize,
    back: usize,
}

impl<T, A: RawAlloc> IntoIter<T, A> {
    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` is initialized and within the buffer.
        unsafe { slice::from_raw_parts(self.buf.ptr().add(self.front), self.back - self.front) }
    }
}

impl<T, A: RawAlloc> Iterator for IntoIter<T, A> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: slot `i` is initialized and now outside `[front, back)`,
            // so it is read exactly once.
            Some(unsafe { self.buf.ptr().add(i).read() })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T, A: RawAlloc> DoubleEndedIterator for IntoIter<T, A> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: as in `next`.
            Some(unsafe { self.buf.ptr().add(self.back).read() })
        } else {
            None
        }
    }
}
impl<T, A: RawAlloc> FusedIterator for IntoIter<T, A> {}
impl<T, A: RawAlloc> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: RawAlloc> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        let rest: *mut [T] = ptr::slice_from_raw_parts_mut(
            // SAFETY: `front <= back <= capacity`.
            unsafe { self.buf.ptr().add(self.front) },
            self.back - self.front,
        );
        self.front = self.back;
        // SAFETY: `rest` is the initialized, not-yet-yielded range.
        unsafe { ptr::drop_in_place(rest) };
    }
}

impl<T: fmt::Debug, A: RawAlloc> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T, G: GrowthPolicy, A: RawAlloc> IntoIterator for &'a GrowVec<T, G, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, G: GrowthPolicy, A: RawAlloc> IntoIterator for &'a mut GrowVec<T, G, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, G: GrowthPolicy, A: RawAlloc> IntoIterator for GrowVec<T, G, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;
    fn into_iter(self) -> Self::IntoIter {
        let (buf, len) = self.into_raw_parts();
        IntoIter {
            buf,
            front: 0,
            back: len,
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        allocator::testing::FlakyAlloc,
        growth::Doubling,
        vec::{GrowVec, tests::DropCounter},
    };
    use std::{cell::Cell, rc::Rc};

    #[test]
    fn test_double_ended() {
        let v = GrowVec::from_slice(&[10, 20, 30, 40]);
        let mut it = v.into_iter();
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.next_back(), Some(40));
        assert_eq!(it.as_slice(), &[20, 30]);
        assert_eq!(it.next(), Some(20));
        assert_eq!(it.next(), Some(30));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_size_hint_tracks_consumption() {
        let v = GrowVec::from_slice(&[10, 20, 30]);
        let mut it = v.into_iter();
        assert_eq!(it.size_hint(), (3, Some(3)));
        it.next();
        assert_eq!(it.len(), 2);
        it.next_back();
        assert_eq!(it.size_hint(), (1, Some(1)));
    }

    #[test]
    fn test_borrowed_iteration_sums() {
        let mut v = GrowVec::from_slice(&[50, 10, 30, 20, 40]);
        let mut sum = 0;
        for x in &v {
            sum += *x;
        }
        assert_eq!(sum, 150);
        for x in &mut v {
            *x += 1;
        }
        assert_eq!(v.data(), &[51, 11, 31, 21, 41]);
    }

    #[test]
    fn test_partial_iteration_drops_rest_and_frees() {
        let drops = Rc::new(Cell::new(0));
        let alloc = FlakyAlloc::new();
        let mut v = GrowVec::new_in(Doubling, alloc.clone());
        for _ in 0..4 {
            v.push(DropCounter(drops.clone())).unwrap();
        }
        let mut it = v.into_iter();
        drop(it.next());
        assert_eq!(drops.get(), 1);
        drop(it);
        assert_eq!(drops.get(), 4);
        assert_eq!(alloc.live_blocks(), 0);
    }

    #[test]
    fn test_into_iter_owned_strings() {
        let v = GrowVec::from_slice(&[String::from("a"), String::from("b")]);
        let joined: String = v.into_iter().rev().collect();
        assert_eq!(joined, "ba");
    }

    #[test]
    fn test_into_iter_empty_and_zero_sized() {
        let e: GrowVec<u8> = GrowVec::new();
        assert_eq!(e.into_iter().next(), None);

        let mut z: GrowVec<()> = GrowVec::new();
        z.extend(&[(), (), ()]).unwrap();
        assert_eq!(z.into_iter().count(), 3);
    }
}

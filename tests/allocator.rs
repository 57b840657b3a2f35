// This file is part of growvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugging a user-defined allocator and growth policy into the public API.

// Imports
use growvec::{AllocError, ErrorKind, GrowVec, GrowthPolicy, RawAlloc, Vector};
use std::{alloc::Layout, cell::Cell, ptr::NonNull};

/// Refuses any block larger than `limit` bytes and counts live blocks.
struct Capped {
    limit: usize,
    live: Cell<usize>,
}

impl Capped {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            live: Cell::new(0),
        }
    }
}

unsafe impl RawAlloc for Capped {
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        if layout.size() > self.limit {
            return None;
        }
        let p = growvec::Global.allocate(layout)?;
        self.live.set(self.live.get() + 1);
        Some(p)
    }

    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        if new_size > self.limit {
            return None;
        }
        unsafe { growvec::Global.reallocate(ptr, old, new_size) }
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.live.set(self.live.get() - 1);
        unsafe { growvec::Global.deallocate(ptr, layout) }
    }
}

/// Grows by a fixed step.
struct Linear(usize);

impl GrowthPolicy for Linear {
    fn next_capacity(&self, current: usize) -> usize {
        current.saturating_add(self.0)
    }
}

#[test]
fn capped_allocator_fails_cleanly() {
    let alloc = Capped::new(64);
    let mut v: GrowVec<u8, Linear, &Capped> = GrowVec::new_in(Linear(32), &alloc);
    for i in 0..64 {
        v.push(i).unwrap();
    }
    assert_eq!(v.capacity(), 64);

    assert_eq!(v.push(64), Err(AllocError::Exhausted { bytes: 96 }));
    assert_eq!(v.len(), 64);
    assert_eq!(v.capacity(), 64);

    let err = v.try_push(64).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Alloc);
    assert_eq!(err.origin().file(), file!());
    assert!(err.to_string().starts_with("allocation failure"));

    drop(v);
    assert_eq!(alloc.live.get(), 0);
}

#[test]
fn result_surface_never_panics() {
    let mut v: GrowVec<String> = GrowVec::new();
    assert_eq!(v.try_pop().unwrap_err().kind(), ErrorKind::Empty);
    assert_eq!(v.try_last().unwrap_err().kind(), ErrorKind::Empty);
    assert_eq!(v.try_at(0).unwrap_err().kind(), ErrorKind::OutOfBounds);
    assert_eq!(v.try_remove(0).unwrap_err().kind(), ErrorKind::OutOfBounds);
    v.try_push("x".into()).unwrap();
    assert_eq!(v.try_at(0).unwrap(), "x");
}

#[test]
fn vector_with_custom_allocator() {
    let alloc = Capped::new(1024);
    let mut a = Vector::new_in(&alloc);
    for i in 0..10u32 {
        a.push_back(i);
    }
    let b = a.clone();
    assert_eq!(alloc.live.get(), 2);
    assert_eq!(b.capacity(), 10);
    drop(a);
    drop(b);
    assert_eq!(alloc.live.get(), 0);
}

#[test]
#[should_panic(expected = "pop on an empty vector")]
fn fast_pop_on_empty_panics() {
    let mut v: GrowVec<u8> = GrowVec::new();
    v.pop();
}

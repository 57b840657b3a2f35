// This file is part of growvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Invariants:
// - `cap == 0` <=> `ptr` is dangling and owns nothing (non-ZST `T`).
// - `cap > 0` and `T` is not zero-sized => `ptr` is a live block from `alloc`
//   of exactly `Layout::array::<T>(cap)`.
// - Zero-sized `T` never allocates; `cap` is tracked logically.
// - A failed resize leaves `ptr` and `cap` unchanged.
// `RawBuf` knows nothing about which slots are initialized.

// Crate imports
use crate::{allocator::RawAlloc, error::AllocError};

// Std imports
use std::{
    alloc::Layout,
    marker::PhantomData,
    mem::{align_of, size_of},
    ptr::NonNull,
};

// External imports
use tracing::{debug, trace};

/// Owned, exactly-sized storage for `cap` values of `T`.
pub(crate) struct RawBuf<T, A: RawAlloc> {
    ptr: NonNull<T>,
    cap: usize,
    alloc: A,
    _owns: PhantomData<T>,
}

// SAFETY: `RawBuf` uniquely owns its block, like `Box<[T]>`.
unsafe impl<T: Send, A: RawAlloc + Send> Send for RawBuf<T, A> {}
// SAFETY: shared access only hands out `*mut T` to the owning vector.
unsafe impl<T: Sync, A: RawAlloc + Sync> Sync for RawBuf<T, A> {}

impl<T, A: RawAlloc> RawBuf<T, A> {
    const IS_ZST: bool = size_of::<T>() == 0;

    pub(crate) const fn new_in(alloc: A) -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            alloc,
            _owns: PhantomData,
        }
    }

    #[inline]
    pub(crate) const fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) const fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Reallocates to exactly `new_cap` slots, preserving the first
    /// `min(cap, new_cap)` slots bit for bit.
    ///
    /// The caller must not shrink below its initialized prefix.
    pub(crate) fn resize_exact(&mut self, new_cap: usize) -> Result<(), AllocError> {
        if new_cap == self.cap {
            return Ok(());
        }
        if Self::IS_ZST {
            self.cap = new_cap;
            return Ok(());
        }
        if new_cap == 0 {
            self.release();
            return Ok(());
        }

        let Ok(layout) = Layout::array::<T>(new_cap) else {
            debug!(
                old_capacity = self.cap,
                new_capacity = new_cap,
                "capacity does not fit in a layout"
            );
            return Err(AllocError::CapacityOverflow);
        };

        let block = if self.cap == 0 {
            self.alloc.allocate(layout)
        } else {
            // SAFETY: `ptr` is live for `current_layout()` by invariant, and
            // `layout.size()` is non-zero and was validated by `Layout::array`.
            unsafe {
                self.alloc
                    .reallocate(self.ptr.cast(), self.current_layout(), layout.size())
            }
        };

        let Some(block) = block else {
            debug!(
                old_capacity = self.cap,
                new_capacity = new_cap,
                bytes = layout.size(),
                "allocator refused request"
            );
            return Err(AllocError::Exhausted {
                bytes: layout.size(),
            });
        };

        trace!(
            old_capacity = self.cap,
            new_capacity = new_cap,
            "resized buffer"
        );
        self.ptr = block.cast();
        self.cap = new_cap;
        Ok(())
    }

    /// Frees the block (if any) and returns to the empty state. Idempotent.
    pub(crate) fn release(&mut self) {
        if !Self::IS_ZST && self.cap > 0 {
            // SAFETY: `ptr` is live for `current_layout()` by invariant and is
            // reset to dangling right after, so it is freed exactly once.
            unsafe { self.alloc.deallocate(self.ptr.cast(), self.current_layout()) };
            trace!(old_capacity = self.cap, "released buffer");
        }
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }

    fn current_layout(&self) -> Layout {
        // SAFETY: `Layout::array::<T>(cap)` succeeded when the block was
        // allocated, so size and alignment are valid.
        unsafe { Layout::from_size_align_unchecked(size_of::<T>() * self.cap, align_of::<T>()) }
    }
}

impl<T, A: RawAlloc> Drop for RawBuf<T, A> {
    fn drop(&mut self) {
        self.release();
    }
}

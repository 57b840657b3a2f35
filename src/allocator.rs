// This file is part of growvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The allocator seam.
//!
//! [`GrowVec`](crate::GrowVec) never calls the global allocator directly; it
//! goes through a [`RawAlloc`] value it owns. [`Global`] forwards to
//! [`std::alloc`]. Custom implementations can pool memory, cap usage, or
//! inject failures.

// Std imports
use std::{alloc::Layout, ptr::NonNull};

/// A minimal allocator interface.
///
/// All layouts passed by this crate have a non-zero size.
///
/// # Safety
///
/// Implementors must return blocks that are valid for reads and writes of
/// `layout.size()` bytes and aligned to `layout.align()`, and must keep a block
/// live until it is passed to [`deallocate`](RawAlloc::deallocate) or
/// successfully [`reallocate`](RawAlloc::reallocate)d. A failed `reallocate`
/// must leave the original block untouched and live.
pub unsafe trait RawAlloc {
    /// Allocates a block for `layout`, or returns `None` on failure.
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>>;

    /// Resizes the block at `ptr` from `old` to `new_size` bytes, keeping the
    /// alignment. Contents up to the smaller size are preserved.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by this allocator for `old`, and
    /// `new_size` must be non-zero and, rounded up to `old.align()`, must not
    /// overflow `isize`.
    unsafe fn reallocate(&self, ptr: NonNull<u8>, old: Layout, new_size: usize)
    -> Option<NonNull<u8>>;

    /// Frees the block at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by this allocator for `layout` and must
    /// not be used afterwards.
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

/// The process-wide allocator (`std::alloc`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Global;

unsafe impl RawAlloc for Global {
    #[inline]
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        if layout.size() == 0 {
            return None;
        }
        // SAFETY: `layout` has a non-zero size.
        NonNull::new(unsafe { std::alloc::alloc(layout) })
    }

    #[inline]
    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        // SAFETY: forwarded from the trait contract.
        NonNull::new(unsafe { std::alloc::realloc(ptr.as_ptr(), old, new_size) })
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded from the trait contract.
        unsafe { std::alloc::dealloc(ptr.as_ptr(), layout) }
    }
}

unsafe impl<A: RawAlloc + ?Sized> RawAlloc for &A {
    #[inline]
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        (**self).allocate(layout)
    }

    #[inline]
    unsafe fn reallocate(
        &self,
        ptr: NonNull<u8>,
        old: Layout,
        new_size: usize,
    ) -> Option<NonNull<u8>> {
        // SAFETY: forwarded from the trait contract.
        unsafe { (**self).reallocate(ptr, old, new_size) }
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        // SAFETY: forwarded from the trait contract.
        unsafe { (**self).deallocate(ptr, layout) }
    }
}

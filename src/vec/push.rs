// This file is part of growvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{allocator::RawAlloc, error::AllocError, growth::GrowthPolicy, vec::GrowVec};

// Std imports
use std::{fmt, mem::MaybeUninit};

impl<T, G: GrowthPolicy, A: RawAlloc> GrowVec<T, G, A> {
    /// Appends `value`, growing through the policy if the buffer is full.
    ///
    /// On error the vector is unchanged and `value` is dropped.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), AllocError> {
        self.grow_for(1)?;
        // SAFETY: `grow_for(1)` ensured `len < capacity`, and the slot at `len`
        // is uninitialized.
        unsafe { self.buf.ptr().add(self.len).write(value) };
        self.len += 1;
        Ok(())
    }

    /// Reserves the next slot and returns a handle to fill it in place.
    ///
    /// The length only grows once [`Slot::write`] is called, so the slot is
    /// never readable before it is initialized. Dropping the handle unused
    /// leaves the vector as it was, apart from any growth.
    ///
    /// ```rust
    /// use growvec::GrowVec;
    ///
    /// struct Task { id: u32, payload: [u8; 64] }
    ///
    /// let mut q: GrowVec<Task> = GrowVec::new();
    /// let task = q.push_slot().unwrap().write(Task { id: 104, payload: [0; 64] });
    /// task.payload[0] = 1;
    /// assert_eq!(q.len(), 1);
    /// assert_eq!(q.last().map(|t| t.id), Some(104));
    /// ```
    #[inline]
    pub fn push_slot(&mut self) -> Result<Slot<'_, T>, AllocError> {
        self.grow_for(1)?;
        // SAFETY: `len < capacity`, so the pointer is in bounds; the slot is
        // uninitialized, which `MaybeUninit` allows. The reference does not
        // overlap `len`.
        let slot = unsafe { &mut *self.buf.ptr().add(self.len).cast::<MaybeUninit<T>>() };
        Ok(Slot {
            slot,
            len: &mut self.len,
        })
    }

    /// Appends `value` into spare capacity.
    ///
    /// # Panics
    ///
    /// Panics if `len == capacity`.
    #[inline]
    pub(crate) fn push_within_capacity(&mut self, value: T) {
        assert!(self.len < self.capacity(), "no spare capacity");
        // SAFETY: checked above.
        unsafe { self.buf.ptr().add(self.len).write(value) };
        self.len += 1;
    }
}

/// Write-once handle to the slot just past the end of a
/// [`GrowVec`], returned by [`GrowVec::push_slot`].
#[must_use = "the slot is only appended once `write` is called"]
pub struct Slot<'a, T> {
    slot: &'a mut MaybeUninit<T>,
    len: &'a mut usize,
}

impl<'a, T> Slot<'a, T> {
    /// Initializes the slot, appends it, and returns it for further edits.
    #[inline]
    pub fn write(self, value: T) -> &'a mut T {
        let Slot { slot, len } = self;
        let out = slot.write(value);
        *len += 1;
        out
    }
}

impl<T> fmt::Debug for Slot<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot").field("index", &*self.len).finish()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        allocator::testing::FlakyAlloc, error::AllocError, growth::Doubling, vec::GrowVec,
    };

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Vec2 {
        x: f32,
        y: f32,
    }

    #[test]
    fn test_push_appends_in_order() {
        let mut v: GrowVec<i32> = GrowVec::new();
        for i in 0..100 {
            v.push(i).unwrap();
        }
        assert_eq!(v.len(), 100);
        for i in 0..100 {
            assert_eq!(v.at(i as usize), Some(&i));
        }
    }

    #[test]
    fn test_push_grows_by_doubling_from_32() {
        let mut v: GrowVec<u8> = GrowVec::new();
        v.push(1).unwrap();
        assert_eq!(v.capacity(), 32);
        for i in 1..32 {
            v.push(i).unwrap();
        }
        assert_eq!(v.capacity(), 32);
        v.push(32).unwrap();
        assert_eq!(v.capacity(), 64);
    }

    #[test]
    fn test_push_after_exact_reserve_doubles_it() {
        let mut v: GrowVec<u8> = GrowVec::with_capacity(3);
        for i in 0..4 {
            v.push(i).unwrap();
        }
        assert_eq!(v.capacity(), 6);
    }

    #[test]
    fn test_push_slot_fills_in_place() {
        let mut points: GrowVec<Vec2> = GrowVec::new();
        let p = points.push_slot().unwrap().write(Vec2 { x: 0.0, y: 0.0 });
        p.x = 10.0;
        p.y = 20.0;
        assert_eq!(points.len(), 1);
        assert_eq!(points.at(0).map(|p| p.x), Some(10.0));
        assert_eq!(points.last(), Some(&Vec2 { x: 10.0, y: 20.0 }));
    }

    #[test]
    fn test_unwritten_slot_is_not_appended() {
        let mut v: GrowVec<String> = GrowVec::new();
        v.push(String::from("a")).unwrap();
        let slot = v.push_slot().unwrap();
        drop(slot);
        assert_eq!(v.len(), 1);
        v.push(String::from("b")).unwrap();
        assert_eq!(v.data(), &["a", "b"]);
    }

    #[test]
    fn test_push_failure_leaves_state() {
        let alloc = FlakyAlloc::new();
        let mut v = GrowVec::with_capacity_in(2, Doubling, alloc.clone());
        v.push(1u32).unwrap();
        v.push(2).unwrap();
        let ptr = v.as_ptr();

        alloc.fail(true);
        assert_eq!(v.push(3), Err(AllocError::Exhausted { bytes: 16 }));
        assert!(v.push_slot().is_err());
        assert_eq!(v.len(), 2);
        assert_eq!(v.capacity(), 2);
        assert_eq!(v.as_ptr(), ptr);
        assert_eq!(v.data(), &[1, 2]);

        alloc.fail(false);
        v.push(3).unwrap();
        assert_eq!(v.data(), &[1, 2, 3]);
    }

    #[test]
    fn test_push_zero_sized() {
        let mut v: GrowVec<()> = GrowVec::new();
        for _ in 0..40 {
            v.push(()).unwrap();
        }
        assert_eq!(v.len(), 40);
        assert_eq!(v.capacity(), 64);
    }

    #[test]
    #[should_panic(expected = "no spare capacity")]
    fn test_push_within_capacity_panics_when_full() {
        let mut v: GrowVec<u8> = GrowVec::new();
        v.push_within_capacity(1);
    }
}

// This file is part of growvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capacity growth policies.
//!
//! A [`GrowthPolicy`] maps the current capacity to the next one whenever a
//! push or extend finds the buffer full. Explicit reservations
//! ([`GrowVec::reserve`](crate::GrowVec::reserve)) bypass the policy and
//! allocate exactly what was asked for.

/// Computes the next capacity of a full buffer.
///
/// Implementations must return a value strictly greater than `current`
/// whenever growth is possible. Returning `current` (or less) is treated as
/// "cannot grow" and the operation fails with
/// [`AllocError::CapacityOverflow`](crate::AllocError::CapacityOverflow).
pub trait GrowthPolicy {
    /// Returns the capacity to grow to from `current`.
    fn next_capacity(&self, current: usize) -> usize;
}

/// Geometric doubling from a base of [`Doubling::INITIAL_CAPACITY`].
///
/// Amortizes reallocation to O(1) per element at the cost of up to 2x memory
/// overhead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Doubling;

impl Doubling {
    /// Capacity of the first allocation made by a growing operation.
    pub const INITIAL_CAPACITY: usize = 32;
}

impl GrowthPolicy for Doubling {
    #[inline]
    fn next_capacity(&self, current: usize) -> usize {
        if current == 0 {
            Self::INITIAL_CAPACITY
        } else {
            current.saturating_mul(2)
        }
    }
}

impl<G: GrowthPolicy + ?Sized> GrowthPolicy for &G {
    #[inline]
    fn next_capacity(&self, current: usize) -> usize {
        (**self).next_capacity(current)
    }
}

/// Applies `policy` starting from `current` until the result holds `required`
/// slots.
///
/// Returns `None` if the policy stops growing before reaching `required`.
pub(crate) fn grow_until<G: GrowthPolicy + ?Sized>(
    policy: &G,
    current: usize,
    required: usize,
) -> Option<usize> {
    let mut cap = current;
    while cap < required {
        let next = policy.next_capacity(cap);
        if next <= cap {
            return None;
        }
        cap = next;
    }
    Some(cap)
}

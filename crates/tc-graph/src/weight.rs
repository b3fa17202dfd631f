//! Edge weight abstraction.
//!
//! Dijkstra needs a total order, a zero, and an accumulation that cannot
//! wrap.  Integer weights saturate; `f64` weights must be finite and
//! non-negative, which [`Weight::is_valid`] checks at edge insertion.

use std::cmp::Ordering;
use std::fmt::Debug;

pub trait Weight: Copy + Debug + Send + Sync + 'static {
    const ZERO: Self;

    /// Total order used by the priority queue.
    fn cmp_weight(&self, other: &Self) -> Ordering;

    /// Path-cost accumulation.
    fn accumulate(self, other: Self) -> Self;

    /// Non-negative (and finite, for floats).
    fn is_valid(self) -> bool;

    #[inline]
    fn less_than(&self, other: &Self) -> bool {
        self.cmp_weight(other) == Ordering::Less
    }
}

macro_rules! int_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            const ZERO: Self = 0;

            #[inline]
            fn cmp_weight(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            #[inline]
            fn accumulate(self, other: Self) -> Self {
                self.saturating_add(other)
            }

            #[inline]
            fn is_valid(self) -> bool {
                true
            }
        }
    )*};
}

int_weight!(u32, u64);

impl Weight for f64 {
    const ZERO: Self = 0.0;

    #[inline]
    fn cmp_weight(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    #[inline]
    fn accumulate(self, other: Self) -> Self {
        self + other
    }

    #[inline]
    fn is_valid(self) -> bool {
        self.is_finite() && self >= 0.0
    }
}

//! Closed bounded intervals `[lb, ub]`.
//!
//! Ordering is partial on purpose: `A < B` only when `A` lies entirely to the left
//! of `B` (`A.ub < B.lb`). Overlapping, distinct intervals are unordered. Against a
//! bare scalar, `A < x` compares `ub` and `x < A` compares `lb`, which lets an
//! interval stand in for a key in a search over points.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Sub;

use crate::error::GeomError;

/// Closed interval with `lb <= ub`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    lb: T,
    ub: T,
}

impl<T: PartialOrd> Interval<T> {
    /// Panics if `lb > ub` (or if the bounds are unordered).
    #[inline]
    pub fn new(lb: T, ub: T) -> Self {
        assert!(lb <= ub, "Interval::new: lower bound exceeds upper bound");
        Self { lb, ub }
    }

    /// Fallible form of [`Interval::new`].
    #[inline]
    pub fn try_new(lb: T, ub: T) -> Result<Self, GeomError> {
        if lb <= ub {
            Ok(Self { lb, ub })
        } else {
            Err(GeomError::InvalidInterval)
        }
    }

    /// Closed intervals share at least one point.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.ub < other.lb || other.ub < self.lb)
    }
}

impl<T> Interval<T> {
    #[inline]
    pub(crate) fn lb_ref(&self) -> &T {
        &self.lb
    }

    #[inline]
    pub(crate) fn ub_ref(&self) -> &T {
        &self.ub
    }
}

impl<T: PartialOrd + Copy> Interval<T> {
    /// Smallest interval covering both.
    pub fn hull(&self, other: &Self) -> Self {
        let lb = if other.lb < self.lb { other.lb } else { self.lb };
        let ub = if self.ub < other.ub { other.ub } else { self.ub };
        Self { lb, ub }
    }
}

impl<T: Copy> Interval<T> {
    #[inline]
    pub fn lb(&self) -> T {
        self.lb
    }

    #[inline]
    pub fn ub(&self) -> T {
        self.ub
    }
}

impl<T: Copy + Sub<Output = T>> Interval<T> {
    #[inline]
    pub fn len(&self) -> T {
        self.ub - self.lb
    }
}

impl<T: Ord> Interval<T> {
    /// Total order on `(lb, ub)`, for use as a container key.
    #[inline]
    pub fn cmp_bounds(&self, other: &Self) -> Ordering {
        (&self.lb, &self.ub).cmp(&(&other.lb, &other.ub))
    }
}

impl<T: PartialOrd> PartialOrd for Interval<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.ub < other.lb {
            Some(Ordering::Less)
        } else if other.ub < self.lb {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

/// An interval equals a scalar only when it is the degenerate `[x, x]`.
impl<T: PartialEq> PartialEq<T> for Interval<T> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.lb == *other && self.ub == *other
    }
}

impl<T: PartialOrd> PartialOrd<T> for Interval<T> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        if self.ub < *other {
            Some(Ordering::Less)
        } else if *other < self.lb {
            Some(Ordering::Greater)
        } else if self == other {
            Some(Ordering::Equal)
        } else {
            None
        }
    }
}

macro_rules! scalar_lhs {
    ($($t:ty),*) => {$(
        impl PartialEq<Interval<$t>> for $t {
            #[inline]
            fn eq(&self, other: &Interval<$t>) -> bool {
                other == self
            }
        }
        impl PartialOrd<Interval<$t>> for $t {
            #[inline]
            fn partial_cmp(&self, other: &Interval<$t>) -> Option<Ordering> {
                other.partial_cmp(self).map(Ordering::reverse)
            }
        }
    )*};
}

scalar_lhs!(i8, i16, i32, i64, i128, isize);

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lb, self.ub)
    }
}

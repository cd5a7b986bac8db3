//! Axis-aligned shapes built from intervals, and the containment trait.
//!
//! A rectangle is a point whose coordinates are both intervals; a horizontal
//! segment has an interval `x` and a scalar `y` (vertical: the reverse). Containment
//! therefore composes per axis: `Point<A, B>` contains `Point<C, D>` when `A`
//! contains `C` and `B` contains `D`, where a scalar "contains" only itself.

use std::cmp::Ordering;
use std::ops::{Mul, Sub};

use super::{Interval, Point};
use crate::fraction::ExactFraction;
use crate::scalar::Integral;

/// Axis-aligned rectangle `x × y`.
pub type Rectangle<T> = Point<Interval<T>, Interval<T>>;
/// Horizontal segment: `x` range at fixed `y`.
pub type HSegment<T> = Point<Interval<T>, T>;
/// Vertical segment: `y` range at fixed `x`.
pub type VSegment<T> = Point<T, Interval<T>>;

/// Closed containment: `self ⊇ other`.
pub trait Contain<Rhs: ?Sized> {
    fn contains(&self, other: &Rhs) -> bool;
}

impl<T: PartialOrd> Contain<T> for Interval<T> {
    #[inline]
    fn contains(&self, x: &T) -> bool {
        self.lb_ref() <= x && x <= self.ub_ref()
    }
}

impl<T: PartialOrd> Contain<Interval<T>> for Interval<T> {
    #[inline]
    fn contains(&self, other: &Interval<T>) -> bool {
        self.lb_ref() <= other.lb_ref() && other.ub_ref() <= self.ub_ref()
    }
}

macro_rules! scalar_contain {
    ($($t:ty),*) => {$(
        impl Contain<$t> for $t {
            #[inline]
            fn contains(&self, other: &$t) -> bool {
                self == other
            }
        }
    )*};
}

scalar_contain!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: Integral> Contain<ExactFraction<T>> for ExactFraction<T> {
    #[inline]
    fn contains(&self, other: &ExactFraction<T>) -> bool {
        self == other
    }
}

impl<T1, T2, U1, U2> Contain<Point<U1, U2>> for Point<T1, T2>
where
    T1: Contain<U1>,
    T2: Contain<U2>,
{
    #[inline]
    fn contains(&self, other: &Point<U1, U2>) -> bool {
        self.x.contains(&other.x) && self.y.contains(&other.y)
    }
}

impl<T: Copy> Point<Interval<T>, Interval<T>> {
    /// Lower-left corner.
    #[inline]
    pub fn lower(&self) -> Point<T> {
        Point::new(self.x.lb(), self.y.lb())
    }

    /// Upper-right corner.
    #[inline]
    pub fn upper(&self) -> Point<T> {
        Point::new(self.x.ub(), self.y.ub())
    }
}

impl<T: Copy + Sub<Output = T> + Mul<Output = T>> Point<Interval<T>, Interval<T>> {
    #[inline]
    pub fn width(&self) -> T {
        self.x.len()
    }

    #[inline]
    pub fn height(&self) -> T {
        self.y.len()
    }

    #[inline]
    pub fn area(&self) -> T {
        self.x.len() * self.y.len()
    }
}

impl<T: PartialOrd> Point<Interval<T>, Interval<T>> {
    /// Closed rectangles share at least one point.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x.overlaps(&other.x) && self.y.overlaps(&other.y)
    }
}

impl<T: Ord> Point<Interval<T>, Interval<T>> {
    /// Total order, lexicographic over `(x.lb, x.ub, y.lb, y.ub)`.
    ///
    /// `Equal` exactly when both interval pairs are identical.
    #[inline]
    pub fn cmp_bounds(&self, other: &Self) -> Ordering {
        self.x
            .cmp_bounds(&other.x)
            .then_with(|| self.y.cmp_bounds(&other.y))
    }
}

impl<T: Copy + Sub<Output = T>> Point<Interval<T>, T> {
    #[inline]
    pub fn length(&self) -> T {
        self.x.len()
    }
}

impl<T: Copy + Sub<Output = T>> Point<T, Interval<T>> {
    #[inline]
    pub fn length(&self) -> T {
        self.y.len()
    }
}

//! Points (affine positions) and vectors (displacements) in the plane.
//!
//! - `Point<T1, T2>` allows independent coordinate types so that rectangles and
//!   segments are points whose coordinates are intervals.
//! - `Point - Point = Vector`, `Point ± Vector = Point`, vectors form a group.
//! - Points order lexicographically by `(x, y)`.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Position `(x, y)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point<T1, T2 = T1> {
    pub x: T1,
    pub y: T2,
}

impl<T1, T2> Point<T1, T2> {
    #[inline]
    pub const fn new(x: T1, y: T2) -> Self {
        Self { x, y }
    }

    /// Swap the coordinates.
    #[inline]
    pub fn flip(self) -> Point<T2, T1> {
        Point {
            x: self.y,
            y: self.x,
        }
    }
}

/// Displacement `(x, y)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector<T> {
    pub x: T,
    pub y: T,
}

impl<T> Vector<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy + Sub<Output = T> + Mul<Output = T>> Vector<T> {
    /// `self.x * other.y - self.y * other.x`; positive when `other` is
    /// counterclockwise from `self`.
    #[inline]
    pub fn cross(&self, other: &Self) -> T {
        self.x * other.y - self.y * other.x
    }
}

impl<T: Copy + Add<Output = T> + Mul<Output = T>> Vector<T> {
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }
}

impl<T: Add<Output = T>> Add for Vector<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Sub<Output = T>> Sub for Vector<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Neg<Output = T>> Neg for Vector<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Vector<T> {
    type Output = Self;
    #[inline]
    fn mul(self, alpha: T) -> Self {
        Self::new(self.x * alpha, self.y * alpha)
    }
}

/// Truncating for integral `T`.
impl<T: Copy + Div<Output = T>> Div<T> for Vector<T> {
    type Output = Self;
    #[inline]
    fn div(self, alpha: T) -> Self {
        Self::new(self.x / alpha, self.y / alpha)
    }
}

impl<T: Copy + Mul<Output = T>> MulAssign<T> for Vector<T> {
    #[inline]
    fn mul_assign(&mut self, alpha: T) {
        *self = *self * alpha;
    }
}

impl<T: Copy + Div<Output = T>> DivAssign<T> for Vector<T> {
    #[inline]
    fn div_assign(&mut self, alpha: T) {
        *self = *self / alpha;
    }
}

impl<T: Copy + Add<Output = T>> AddAssign for Vector<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = Self::new(self.x + rhs.x, self.y + rhs.y);
    }
}

impl<T: Copy + Sub<Output = T>> SubAssign for Vector<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = Self::new(self.x - rhs.x, self.y - rhs.y);
    }
}

impl<T: Sub<Output = T>> Sub for Point<T> {
    type Output = Vector<T>;
    #[inline]
    fn sub(self, rhs: Self) -> Vector<T> {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Add<Output = T>> Add<Vector<T>> for Point<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Vector<T>) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Sub<Output = T>> Sub<Vector<T>> for Point<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Vector<T>) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Copy + Add<Output = T>> AddAssign<Vector<T>> for Point<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Vector<T>) {
        *self = Self::new(self.x + rhs.x, self.y + rhs.y);
    }
}

impl<T: Copy + Sub<Output = T>> SubAssign<Vector<T>> for Point<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector<T>) {
        *self = Self::new(self.x - rhs.x, self.y - rhs.y);
    }
}

impl<T1: fmt::Display, T2: fmt::Display> fmt::Display for Point<T1, T2> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

//! Exact fractions over a signed integral scalar.
//!
//! Representation
//! - `num / den`, reduced by `gcd(num, den)` with a non-negative denominator.
//! - Zero denominators are values, not errors: `1/0` is `+inf`, `-1/0` is `-inf`,
//!   `0/0` is the indeterminate value (NaN). Arithmetic on these follows the
//!   IEEE-754 conventions: infinities absorb finite values, `inf * 0`, `inf - inf`
//!   and `inf / inf` are NaN, NaN propagates through everything.
//! - Comparison is by cross-multiplication (`a/b < c/d` iff `a·d < b·c`), with
//!   equal denominators compared on numerators alone so that `-inf < +inf`. NaN is
//!   unordered against everything except itself, and equal to itself.
//!
//! Mixed operations with a bare scalar (`frac + 3`, `3 * frac`, `frac < 3`) are
//! provided for the primitive signed integers on either side.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use crate::scalar::{gcd, lcm, Integral};

/// Reduced fraction `num / den` with `den >= 0`.
#[derive(Clone, Copy, Debug)]
pub struct ExactFraction<T> {
    num: T,
    den: T,
}

impl<T: Integral> ExactFraction<T> {
    /// Reduce `num / den`. Never fails: a zero denominator yields a sentinel.
    pub fn new(num: T, den: T) -> Self {
        let common = gcd(num, den);
        if common.is_zero() {
            return Self::indeterminate();
        }
        let (num, den) = (num / common, den / common);
        if den < T::zero() {
            Self {
                num: -num,
                den: -den,
            }
        } else {
            Self { num, den }
        }
    }

    #[inline]
    pub fn from_integer(num: T) -> Self {
        Self { num, den: T::one() }
    }

    #[inline]
    pub fn infinity() -> Self {
        Self {
            num: T::one(),
            den: T::zero(),
        }
    }

    #[inline]
    pub fn neg_infinity() -> Self {
        Self {
            num: -T::one(),
            den: T::zero(),
        }
    }

    #[inline]
    pub fn indeterminate() -> Self {
        Self {
            num: T::zero(),
            den: T::zero(),
        }
    }

    #[inline]
    pub fn numer(&self) -> T {
        self.num
    }

    #[inline]
    pub fn denom(&self) -> T {
        self.den
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        !self.den.is_zero()
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.den.is_zero() && !self.num.is_zero()
    }

    #[inline]
    pub fn is_indeterminate(&self) -> bool {
        self.den.is_zero() && self.num.is_zero()
    }

    pub fn abs(&self) -> Self {
        Self::new(self.num.abs(), self.den)
    }

    /// `den / num`; `0` maps to `+inf` and infinities map to `0`.
    pub fn recip(&self) -> Self {
        Self::new(self.den, self.num)
    }

    /// Three-way comparison by cross-multiplication, ignoring NaN.
    ///
    /// NaN compares `Equal` to everything here; `PartialOrd` filters it out.
    pub fn cross_cmp(&self, other: &Self) -> Ordering {
        if self.den == other.den {
            return self.num.cmp(&other.num);
        }
        (self.num * other.den).cmp(&(self.den * other.num))
    }
}

impl<T: Integral> Default for ExactFraction<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Integral> From<T> for ExactFraction<T> {
    fn from(num: T) -> Self {
        Self::from_integer(num)
    }
}

impl<T: Integral> Zero for ExactFraction<T> {
    fn zero() -> Self {
        Self::from_integer(T::zero())
    }
    fn is_zero(&self) -> bool {
        self.num.is_zero() && !self.den.is_zero()
    }
}

impl<T: Integral> One for ExactFraction<T> {
    fn one() -> Self {
        Self::from_integer(T::one())
    }
}

impl<T: Integral> PartialEq for ExactFraction<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_indeterminate(), other.is_indeterminate()) {
            (true, true) => true,
            (false, false) => self.cross_cmp(other) == Ordering::Equal,
            _ => false,
        }
    }
}

impl<T: Integral> Eq for ExactFraction<T> {}

impl<T: Integral + Hash> Hash for ExactFraction<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Canonical form makes field equality coincide with value equality.
        self.num.hash(state);
        self.den.hash(state);
    }
}

impl<T: Integral> PartialOrd for ExactFraction<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.is_indeterminate(), other.is_indeterminate()) {
            (true, true) => Some(Ordering::Equal),
            (false, false) => Some(self.cross_cmp(other)),
            _ => None,
        }
    }
}

impl<T: Integral> PartialEq<T> for ExactFraction<T> {
    fn eq(&self, other: &T) -> bool {
        self.den.is_one() && self.num == *other
    }
}

impl<T: Integral> PartialOrd<T> for ExactFraction<T> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        if self.is_indeterminate() {
            return None;
        }
        Some(self.num.cmp(&(self.den * *other)))
    }
}

impl<T: Integral> Neg for ExactFraction<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            num: -self.num,
            den: self.den,
        }
    }
}

impl<T: Integral> Add for ExactFraction<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        // NaN shares the zero denominator with the infinities; keep it absorbing.
        if self.is_indeterminate() || rhs.is_indeterminate() {
            return Self::indeterminate();
        }
        if self.den == rhs.den {
            return Self::new(self.num + rhs.num, self.den);
        }
        if self.den.is_zero() || rhs.den.is_zero() {
            return Self::new(self.num * rhs.den + self.den * rhs.num, self.den * rhs.den);
        }
        let den = lcm(self.den, rhs.den);
        Self::new(self.num * (den / self.den) + rhs.num * (den / rhs.den), den)
    }
}

impl<T: Integral> Sub for ExactFraction<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<T: Integral> Mul for ExactFraction<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl<T: Integral> Div for ExactFraction<T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.recip()
    }
}

impl<T: Integral> Add<T> for ExactFraction<T> {
    type Output = Self;
    fn add(self, rhs: T) -> Self {
        Self::new(self.num + self.den * rhs, self.den)
    }
}

impl<T: Integral> Sub<T> for ExactFraction<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: T) -> Self {
        self + (-rhs)
    }
}

impl<T: Integral> Mul<T> for ExactFraction<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.num * rhs, self.den)
    }
}

impl<T: Integral> Div<T> for ExactFraction<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        Self::new(self.num, self.den * rhs)
    }
}

macro_rules! assign_ops {
    ($($tr:ident :: $method:ident => $op:tt),* $(,)?) => {$(
        impl<T: Integral> $tr for ExactFraction<T> {
            #[inline]
            fn $method(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }
        impl<T: Integral> $tr<T> for ExactFraction<T> {
            #[inline]
            fn $method(&mut self, rhs: T) {
                *self = *self $op rhs;
            }
        }
    )*};
}

assign_ops!(
    AddAssign::add_assign => +,
    SubAssign::sub_assign => -,
    MulAssign::mul_assign => *,
    DivAssign::div_assign => /,
);

macro_rules! scalar_lhs {
    ($($t:ty),*) => {$(
        impl Add<ExactFraction<$t>> for $t {
            type Output = ExactFraction<$t>;
            #[inline]
            fn add(self, rhs: ExactFraction<$t>) -> ExactFraction<$t> {
                rhs + self
            }
        }
        impl Sub<ExactFraction<$t>> for $t {
            type Output = ExactFraction<$t>;
            #[inline]
            fn sub(self, rhs: ExactFraction<$t>) -> ExactFraction<$t> {
                (-rhs) + self
            }
        }
        impl Mul<ExactFraction<$t>> for $t {
            type Output = ExactFraction<$t>;
            #[inline]
            fn mul(self, rhs: ExactFraction<$t>) -> ExactFraction<$t> {
                rhs * self
            }
        }
        impl Div<ExactFraction<$t>> for $t {
            type Output = ExactFraction<$t>;
            #[inline]
            fn div(self, rhs: ExactFraction<$t>) -> ExactFraction<$t> {
                ExactFraction::from_integer(self) / rhs
            }
        }
        impl PartialEq<ExactFraction<$t>> for $t {
            #[inline]
            fn eq(&self, other: &ExactFraction<$t>) -> bool {
                other == self
            }
        }
        impl PartialOrd<ExactFraction<$t>> for $t {
            #[inline]
            fn partial_cmp(&self, other: &ExactFraction<$t>) -> Option<Ordering> {
                other.partial_cmp(self).map(Ordering::reverse)
            }
        }
    )*};
}

scalar_lhs!(i8, i16, i32, i64, i128, isize);

impl<T: fmt::Display> fmt::Display for ExactFraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

//! Scalar contracts shared by every geometric type.
//!
//! - `Scalar`: totally ordered ring-like value used for coordinates. Sorting,
//!   partitioning and area computations require exactly this.
//! - `Integral`: a signed `Scalar` with division and remainder; the numerator and
//!   denominator type of `ExactFraction`.
//!
//! Both traits are blanket-implemented; there is nothing to implement by hand.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use num_traits::{Signed, Zero};

/// Ordered coordinate scalar. Subtraction is assumed exact.
pub trait Scalar:
    Copy + Ord + Debug + Zero + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
}

impl<T> Scalar for T where
    T: Copy + Ord + Debug + Zero + Add<Output = T> + Sub<Output = T> + Mul<Output = T>
{
}

/// Signed integral scalar (`i8`..`i128`, `isize`, or any compatible type).
pub trait Integral: Scalar + Signed {}

impl<T> Integral for T where T: Scalar + Signed {}

/// Greatest common divisor, always non-negative.
///
/// `gcd(0, 0) == 0`, which lets `ExactFraction::new(0, 0)` degenerate to `0/0`
/// instead of dividing by zero.
pub fn gcd<T: Integral>(m: T, n: T) -> T {
    let (mut a, mut b) = (m, n);
    loop {
        if a.is_zero() {
            return b.abs();
        }
        if b.is_zero() {
            return a.abs();
        }
        let r = a % b;
        a = b;
        b = r;
    }
}

/// Least common multiple; zero if either argument is zero.
pub fn lcm<T: Integral>(m: T, n: T) -> T {
    if m.is_zero() || n.is_zero() {
        return T::zero();
    }
    (m.abs() / gcd(m, n)) * n.abs()
}

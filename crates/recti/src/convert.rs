//! Interop with `nalgebra` 2D types.
//!
//! Exact geometry never goes through floating point; these conversions exist so
//! callers (and tests) can cross-check exact results against nalgebra's linear
//! algebra, e.g. `Matrix2::determinant` for cross products.

use nalgebra::{Point2, Vector2};
use num_traits::AsPrimitive;

use crate::geom2::{Point, Vector};

impl<T: nalgebra::Scalar> From<Vector<T>> for Vector2<T> {
    #[inline]
    fn from(v: Vector<T>) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl<T: nalgebra::Scalar + Copy> From<Vector2<T>> for Vector<T> {
    #[inline]
    fn from(v: Vector2<T>) -> Self {
        Vector::new(v.x, v.y)
    }
}

impl<T: nalgebra::Scalar> From<Point<T>> for Point2<T> {
    #[inline]
    fn from(p: Point<T>) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl<T: nalgebra::Scalar + Copy> From<Point2<T>> for Point<T> {
    #[inline]
    fn from(p: Point2<T>) -> Self {
        Point::new(p.x, p.y)
    }
}

/// Floating-point copy of an exact vector.
#[inline]
pub fn vector_to_f64<T: AsPrimitive<f64>>(v: Vector<T>) -> Vector2<f64> {
    Vector2::new(v.x.as_(), v.y.as_())
}

/// Floating-point copy of an exact point.
#[inline]
pub fn point_to_f64<T: AsPrimitive<f64>>(p: Point<T>) -> Point2<f64> {
    Point2::new(p.x.as_(), p.y.as_())
}

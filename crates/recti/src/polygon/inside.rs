//! Even-odd point-in-polygon tests and slice-level signed areas.
//!
//! Edges are walked from the last vertex back to the first. An edge is counted
//! when its y-span straddles the query under the half-open rule
//! `min_y <= q.y < max_y`, so a vertex lying exactly on the query's horizontal
//! line is counted once. Points on the boundary may report either side.

use crate::geom2::Point;
use crate::scalar::Scalar;

#[inline]
fn straddles<T: Scalar>(pt0: &Point<T>, pt1: &Point<T>, q: &Point<T>) -> bool {
    (pt1.y <= q.y && q.y < pt0.y) || (pt0.y <= q.y && q.y < pt1.y)
}

/// Crossing parity for a closed boundary; `prev` is the vertex preceding the first.
pub(crate) fn crossing_parity<T, I>(mut pt0: Point<T>, vertices: I, q: &Point<T>) -> bool
where
    T: Scalar,
    I: IntoIterator<Item = Point<T>>,
{
    let mut inside = false;
    for pt1 in vertices {
        if straddles(&pt0, &pt1, q) {
            let det = (*q - pt0).cross(&(pt1 - pt0));
            if pt1.y > pt0.y {
                if det < T::zero() {
                    inside = !inside;
                }
            } else if det > T::zero() {
                inside = !inside;
            }
        }
        pt0 = pt1;
    }
    inside
}

/// Crossing parity for a staircase boundary: the step into `pt1` is horizontal
/// first, so its vertical edge sits at `pt1.x`.
pub(crate) fn rcrossing_parity<T, I>(mut pt0: Point<T>, vertices: I, q: &Point<T>) -> bool
where
    T: Scalar,
    I: IntoIterator<Item = Point<T>>,
{
    let mut inside = false;
    for pt1 in vertices {
        if straddles(&pt0, &pt1, q) && pt1.x > q.x {
            inside = !inside;
        }
        pt0 = pt1;
    }
    inside
}

/// Whether `q` lies inside the polygon with vertices `pointset` (even-odd rule).
pub fn point_in_polygon<T: Scalar>(pointset: &[Point<T>], q: &Point<T>) -> bool {
    match pointset.last() {
        Some(&last) => crossing_parity(last, pointset.iter().copied(), q),
        None => false,
    }
}

/// Rectilinear variant of [`point_in_polygon`] for staircase vertex lists.
pub fn point_in_rpolygon<T: Scalar>(pointset: &[Point<T>], q: &Point<T>) -> bool {
    match pointset.last() {
        Some(&last) => rcrossing_parity(last, pointset.iter().copied(), q),
        None => false,
    }
}

/// Twice the signed area of the closed boundary `points` (shoelace, relative to
/// the first vertex). Positive when counterclockwise.
pub fn signed_area_x2_of<T: Scalar>(points: &[Point<T>]) -> T {
    let Some((&origin, rest)) = points.split_first() else {
        return T::zero();
    };
    rest.windows(2).fold(T::zero(), |acc, w| {
        acc + (w[0] - origin).cross(&(w[1] - origin))
    })
}

/// Signed area of the staircase through `points`:
/// `Σ (x[i] − x[0]) · (y[i] − y[i−1])`.
pub fn rsigned_area_of<T: Scalar>(points: &[Point<T>]) -> T {
    let Some(origin) = points.first() else {
        return T::zero();
    };
    points.windows(2).fold(T::zero(), |acc, w| {
        acc + (w[1].x - origin.x) * (w[1].y - w[0].y)
    })
}

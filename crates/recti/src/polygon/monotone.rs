//! In-place reordering of point sets into monotone boundaries.
//!
//! Model (general polygons)
//! - Take the two extreme points along the sweep axis (ties broken on the cross
//!   axis) and the splitting chord between them.
//! - Points with `chord × (p − min) <= 0` form the first chain, the rest the second.
//!   Points on the chord land in the first chain, exactly once.
//! - First chain ascending, second descending, both by `(sweep, cross)`. The
//!   concatenation is a counterclockwise boundary, monotone along the sweep axis.
//!
//! Model (rectilinear polygons)
//! - Same extremes, but the split is on the cross-axis coordinate of the minimum
//!   extreme. The returned flag is the anticlockwise orientation of the staircase.
//!
//! Both directions are the same routine with an axis key; no coordinate flipping
//! of the caller's buffer takes place. For the y staircase this fixes the tie
//! `top.x == bottom.x`: the left chain comes first and the flag is `false`, where
//! a dedicated y routine splitting on `x >= bottom.x` would report `true`.
//!
//! Model (four-chain staircase)
//! - `create_test_rpolygon` splits on the chord between the bottom and top points,
//!   then splits each side again at the height of its x-extreme. The four chains
//!   are sorted left/up/right/down, or down/left/up/right when the top point lies
//!   left of the bottom point.
//!
//! Degeneracy
//! - Fewer than 3 points is always rejected.
//! - A zero-area result is kept or rejected per `OrderCfg::degeneracy`. On
//!   rejection the buffer stays in its reordered state.

use std::cmp::Reverse;

use tracing::{debug, trace};

use super::inside::{rsigned_area_of, signed_area_x2_of};
use crate::cfg::{Degeneracy, OrderCfg};
use crate::error::GeomError;
use crate::geom2::Point;
use crate::scalar::Scalar;

pub(crate) const MIN_VERTICES: usize = 3;

#[inline]
fn x_major<T: Scalar>(p: &Point<T>) -> (T, T) {
    (p.x, p.y)
}

#[inline]
fn y_major<T: Scalar>(p: &Point<T>) -> (T, T) {
    (p.y, p.x)
}

pub(crate) fn ensure_min_vertices<T>(points: &[Point<T>]) -> Result<(), GeomError> {
    if points.len() < MIN_VERTICES {
        return Err(GeomError::TooFewPoints {
            min: MIN_VERTICES,
            got: points.len(),
        });
    }
    Ok(())
}

/// Reorder `points` into an x-monotone counterclockwise boundary.
pub fn create_xmono_polygon<T: Scalar>(points: &mut [Point<T>]) -> Result<(), GeomError> {
    create_xmono_polygon_with(points, &OrderCfg::default())
}

/// Reorder `points` into a y-monotone counterclockwise boundary.
pub fn create_ymono_polygon<T: Scalar>(points: &mut [Point<T>]) -> Result<(), GeomError> {
    create_ymono_polygon_with(points, &OrderCfg::default())
}

/// Reorder `points` into an x-monotone staircase; returns `true` if anticlockwise.
pub fn create_xmono_rpolygon<T: Scalar>(points: &mut [Point<T>]) -> Result<bool, GeomError> {
    create_xmono_rpolygon_with(points, &OrderCfg::default())
}

/// Reorder `points` into a y-monotone staircase; returns `true` if anticlockwise.
pub fn create_ymono_rpolygon<T: Scalar>(points: &mut [Point<T>]) -> Result<bool, GeomError> {
    create_ymono_rpolygon_with(points, &OrderCfg::default())
}

pub fn create_xmono_polygon_with<T: Scalar>(
    points: &mut [Point<T>],
    cfg: &OrderCfg,
) -> Result<(), GeomError> {
    create_mono_polygon(points, x_major)?;
    check_area(signed_area_x2_of(points), points.len(), cfg)
}

pub fn create_ymono_polygon_with<T: Scalar>(
    points: &mut [Point<T>],
    cfg: &OrderCfg,
) -> Result<(), GeomError> {
    create_mono_polygon(points, y_major)?;
    check_area(signed_area_x2_of(points), points.len(), cfg)
}

pub fn create_xmono_rpolygon_with<T: Scalar>(
    points: &mut [Point<T>],
    cfg: &OrderCfg,
) -> Result<bool, GeomError> {
    let is_anticlockwise = create_mono_rpolygon(points, x_major)?;
    check_area(rsigned_area_of(points), points.len(), cfg)?;
    Ok(is_anticlockwise)
}

pub fn create_ymono_rpolygon_with<T: Scalar>(
    points: &mut [Point<T>],
    cfg: &OrderCfg,
) -> Result<bool, GeomError> {
    // Exchanging the roles of the axes mirrors the boundary.
    let is_anticlockwise = !create_mono_rpolygon(points, y_major)?;
    check_area(rsigned_area_of(points), points.len(), cfg)?;
    Ok(is_anticlockwise)
}

/// Reorder `points` into a staircase built from four sorted chains.
pub fn create_test_rpolygon<T: Scalar>(points: &mut [Point<T>]) -> Result<(), GeomError> {
    create_test_rpolygon_with(points, &OrderCfg::default())
}

pub fn create_test_rpolygon_with<T: Scalar>(
    points: &mut [Point<T>],
    cfg: &OrderCfg,
) -> Result<(), GeomError> {
    ensure_min_vertices(points)?;
    let (min_pt, max_pt) = extremes(points, &y_major);
    let dx = max_pt.x - min_pt.x;
    let dy = max_pt.y - min_pt.y;
    // Both extremes land in the second half, so it is never empty.
    let middle = partition_in_place(points, |a| dx * (a.y - min_pt.y) < (a.x - min_pt.x) * dy);
    let (first, second) = points.split_at_mut(middle);

    let middle2 = if first.is_empty() {
        0
    } else {
        let (_, right_pt) = extremes(first, &x_major);
        partition_in_place(first, |a| a.y < right_pt.y)
    };
    let (left_pt, _) = extremes(second, &x_major);
    let middle3 = partition_in_place(second, |a| a.y > left_pt.y);

    let (c1, c2) = first.split_at_mut(middle2);
    let (c3, c4) = second.split_at_mut(middle3);
    if dx < T::zero() {
        c1.sort_unstable_by_key(|p| Reverse(y_major(p)));
        c2.sort_unstable_by_key(x_major);
        c3.sort_unstable_by_key(y_major);
        c4.sort_unstable_by_key(|p| Reverse(x_major(p)));
    } else {
        c1.sort_unstable_by_key(x_major);
        c2.sort_unstable_by_key(y_major);
        c3.sort_unstable_by_key(|p| Reverse(x_major(p)));
        c4.sort_unstable_by_key(|p| Reverse(y_major(p)));
    }
    trace!(
        n = points.len(),
        chains = ?[middle2, middle - middle2, middle3, points.len() - middle - middle3],
        "four-chain staircase split"
    );
    check_area(rsigned_area_of(points), points.len(), cfg)
}

fn create_mono_polygon<T, K>(points: &mut [Point<T>], key: K) -> Result<(), GeomError>
where
    T: Scalar,
    K: Fn(&Point<T>) -> (T, T),
{
    ensure_min_vertices(points)?;
    let (min_pt, max_pt) = extremes(points, &key);
    let chord = max_pt - min_pt;
    let middle = partition_in_place(points, |a| chord.cross(&(*a - min_pt)) <= T::zero());
    sort_chains(points, middle, &key);
    trace!(n = points.len(), first_chain = middle, "monotone split");
    Ok(())
}

fn create_mono_rpolygon<T, K>(points: &mut [Point<T>], key: K) -> Result<bool, GeomError>
where
    T: Scalar,
    K: Fn(&Point<T>) -> (T, T),
{
    ensure_min_vertices(points)?;
    let (min_pt, max_pt) = extremes(points, &key);
    let pivot = key(&min_pt).1;
    let is_anticlockwise = key(&max_pt).1 <= pivot;
    let middle = if is_anticlockwise {
        partition_in_place(points, |a| key(a).1 <= pivot)
    } else {
        partition_in_place(points, |a| key(a).1 >= pivot)
    };
    sort_chains(points, middle, &key);
    trace!(
        n = points.len(),
        first_chain = middle,
        is_anticlockwise,
        "rectilinear monotone split"
    );
    Ok(is_anticlockwise)
}

/// Minimum and maximum by `key`; `points` must be non-empty.
fn extremes<T, K>(points: &[Point<T>], key: &K) -> (Point<T>, Point<T>)
where
    T: Scalar,
    K: Fn(&Point<T>) -> (T, T),
{
    let mut lo = points[0];
    let mut hi = points[0];
    for p in &points[1..] {
        let k = key(p);
        if k < key(&lo) {
            lo = *p;
        }
        if k > key(&hi) {
            hi = *p;
        }
    }
    (lo, hi)
}

fn sort_chains<T, K>(points: &mut [Point<T>], middle: usize, key: &K)
where
    T: Scalar,
    K: Fn(&Point<T>) -> (T, T),
{
    let (first, second) = points.split_at_mut(middle);
    first.sort_unstable_by_key(|p| key(p));
    second.sort_unstable_by_key(|p| Reverse(key(p)));
}

/// Move every item satisfying `pred` to the front; returns how many there are.
/// Relative order within each group is not preserved.
pub(crate) fn partition_in_place<T, P>(items: &mut [T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut boundary = 0;
    for i in 0..items.len() {
        if pred(&items[i]) {
            items.swap(boundary, i);
            boundary += 1;
        }
    }
    boundary
}

fn check_area<T: Scalar>(area: T, n: usize, cfg: &OrderCfg) -> Result<(), GeomError> {
    if !area.is_zero() {
        return Ok(());
    }
    match cfg.degeneracy {
        Degeneracy::Proceed => {
            debug!(n, "reordered points enclose zero area");
            Ok(())
        }
        Degeneracy::Reject => Err(GeomError::ZeroArea { n }),
    }
}

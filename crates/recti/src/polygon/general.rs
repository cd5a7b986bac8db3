//! General simple polygon stored as an origin plus relative vectors.

use std::iter;
use std::ops::AddAssign;

use super::inside::crossing_parity;
use super::monotone::{create_xmono_polygon, create_ymono_polygon, ensure_min_vertices};
use crate::error::GeomError;
use crate::geom2::{Contain, Interval, Point, Rectangle, Vector};
use crate::scalar::Scalar;

/// Closed boundary `origin, origin + vecs[0], …, origin + vecs[n-1]`.
///
/// Invariants:
/// - At least 3 vertices (`vecs.len() >= 2`).
/// - The ordering is whatever the caller supplied; simplicity is the job of the
///   construction routines (`create_xmono_polygon`, …).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Polygon<T> {
    origin: Point<T>,
    vecs: Vec<Vector<T>>,
}

impl<T: Scalar> Polygon<T> {
    /// Build from an already ordered vertex list.
    pub fn from_ordered_points(points: &[Point<T>]) -> Result<Self, GeomError> {
        ensure_min_vertices(points)?;
        let origin = points[0];
        let vecs = points[1..].iter().map(|&p| p - origin).collect();
        Ok(Self { origin, vecs })
    }

    /// Caller guarantees `vecs.len() >= 2`.
    pub(crate) fn from_parts(origin: Point<T>, vecs: Vec<Vector<T>>) -> Self {
        debug_assert!(vecs.len() + 1 >= 3);
        Self { origin, vecs }
    }

    /// Reorder `pointset` x-monotonically and build the polygon.
    pub fn create_xmonotone(mut pointset: Vec<Point<T>>) -> Result<Self, GeomError> {
        create_xmono_polygon(&mut pointset)?;
        Self::from_ordered_points(&pointset)
    }

    /// Reorder `pointset` y-monotonically and build the polygon.
    pub fn create_ymonotone(mut pointset: Vec<Point<T>>) -> Result<Self, GeomError> {
        create_ymono_polygon(&mut pointset)?;
        Self::from_ordered_points(&pointset)
    }

    #[inline]
    pub fn origin(&self) -> Point<T> {
        self.origin
    }

    /// Vertices relative to `origin`, excluding the origin itself.
    #[inline]
    pub fn vectors(&self) -> &[Vector<T>] {
        &self.vecs
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vecs.len() + 1
    }

    /// Absolute vertices in boundary order, starting at `origin`.
    pub fn vertices(&self) -> impl Iterator<Item = Point<T>> + '_ {
        let origin = self.origin;
        iter::once(origin).chain(self.vecs.iter().map(move |&v| origin + v))
    }

    /// Translate the whole polygon; O(1).
    #[inline]
    pub fn translate(&mut self, offset: Vector<T>) {
        self.origin += offset;
    }

    /// Twice the signed area; positive when counterclockwise.
    pub fn signed_area_x2(&self) -> T {
        let vs = &self.vecs;
        let n = vs.len();
        // The origin is the zero vector, so its terms drop out.
        let ends = vs[0].x * vs[1].y - vs[n - 1].x * vs[n - 2].y;
        vs.windows(3)
            .fold(ends, |acc, w| acc + w[1].x * (w[2].y - w[0].y))
    }

    /// Lower-left corner of the bounding box.
    pub fn lower(&self) -> Point<T> {
        self.vertices()
            .reduce(|a, b| Point::new(a.x.min(b.x), a.y.min(b.y)))
            .unwrap_or(self.origin)
    }

    /// Upper-right corner of the bounding box.
    pub fn upper(&self) -> Point<T> {
        self.vertices()
            .reduce(|a, b| Point::new(a.x.max(b.x), a.y.max(b.y)))
            .unwrap_or(self.origin)
    }

    pub fn bounding_box(&self) -> Rectangle<T> {
        let (lo, hi) = (self.lower(), self.upper());
        Point::new(Interval::new(lo.x, hi.x), Interval::new(lo.y, hi.y))
    }
}

impl<T: Scalar> AddAssign<Vector<T>> for Polygon<T> {
    #[inline]
    fn add_assign(&mut self, offset: Vector<T>) {
        self.translate(offset);
    }
}

/// Even-odd containment; boundary points may report either side.
impl<T: Scalar> Contain<Point<T>> for Polygon<T> {
    fn contains(&self, q: &Point<T>) -> bool {
        let last = self.origin + self.vecs[self.vecs.len() - 1];
        crossing_parity(last, self.vertices(), q)
    }
}

//! Rectilinear polygon stored by its staircase vertices.
//!
//! Between consecutive vertices `p`, `q` the boundary runs horizontally from `p`
//! to `(q.x, p.y)` and then vertically to `q`; the closing step from the last
//! vertex back to the origin follows the same rule.

use std::iter;
use std::ops::AddAssign;

use super::general::Polygon;
use super::inside::rcrossing_parity;
use super::monotone::{create_xmono_rpolygon, create_ymono_rpolygon, ensure_min_vertices};
use crate::error::GeomError;
use crate::geom2::{Contain, Point, Vector};
use crate::scalar::Scalar;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RPolygon<T> {
    origin: Point<T>,
    vecs: Vec<Vector<T>>,
}

impl<T: Scalar> RPolygon<T> {
    pub fn from_ordered_points(points: &[Point<T>]) -> Result<Self, GeomError> {
        ensure_min_vertices(points)?;
        let origin = points[0];
        let vecs = points[1..].iter().map(|&p| p - origin).collect();
        Ok(Self { origin, vecs })
    }

    /// Reorder `pointset` into an x-monotone staircase and build the polygon.
    /// The flag is `true` when the staircase runs anticlockwise.
    pub fn create_xmonotone(mut pointset: Vec<Point<T>>) -> Result<(Self, bool), GeomError> {
        let is_anticlockwise = create_xmono_rpolygon(&mut pointset)?;
        Ok((Self::from_ordered_points(&pointset)?, is_anticlockwise))
    }

    /// y-monotone counterpart of [`RPolygon::create_xmonotone`].
    pub fn create_ymonotone(mut pointset: Vec<Point<T>>) -> Result<(Self, bool), GeomError> {
        let is_anticlockwise = create_ymono_rpolygon(&mut pointset)?;
        Ok((Self::from_ordered_points(&pointset)?, is_anticlockwise))
    }

    #[inline]
    pub fn origin(&self) -> Point<T> {
        self.origin
    }

    #[inline]
    pub fn vectors(&self) -> &[Vector<T>] {
        &self.vecs
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vecs.len() + 1
    }

    pub fn vertices(&self) -> impl Iterator<Item = Point<T>> + '_ {
        let origin = self.origin;
        iter::once(origin).chain(self.vecs.iter().map(move |&v| origin + v))
    }

    #[inline]
    pub fn translate(&mut self, offset: Vector<T>) {
        self.origin += offset;
    }

    /// Signed area of the staircase; positive when anticlockwise.
    pub fn signed_area(&self) -> T {
        let first = self.vecs[0];
        self.vecs
            .windows(2)
            .fold(first.x * first.y, |acc, w| acc + w[1].x * (w[1].y - w[0].y))
    }

    /// Expand to an explicit boundary with a corner before every vertex.
    ///
    /// The result has `2 * num_vertices()` vertices, some possibly repeated, and
    /// `signed_area_x2() == 2 * self.signed_area()`.
    pub fn to_polygon(&self) -> Polygon<T> {
        let mut prev = self.origin + self.vecs[self.vecs.len() - 1];
        let mut points = Vec::with_capacity(2 * self.num_vertices());
        for p in self.vertices() {
            points.push(Point::new(p.x, prev.y));
            points.push(p);
            prev = p;
        }
        let origin = points[0];
        let vecs = points[1..].iter().map(|&p| p - origin).collect();
        Polygon::from_parts(origin, vecs)
    }
}

impl<T: Scalar> AddAssign<Vector<T>> for RPolygon<T> {
    #[inline]
    fn add_assign(&mut self, offset: Vector<T>) {
        self.translate(offset);
    }
}

impl<T: Scalar> Contain<Point<T>> for RPolygon<T> {
    fn contains(&self, q: &Point<T>) -> bool {
        let last = self.origin + self.vecs[self.vecs.len() - 1];
        rcrossing_parity(last, self.vertices(), q)
    }
}

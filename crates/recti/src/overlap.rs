//! Duplicate detection for rectangles.
//!
//! Model
//! - Rectangles are inserted one at a time into an ordered-unique set keyed by
//!   `Rectangle::cmp_bounds` (lexicographic over `x.lb, x.ub, y.lb, y.ub`).
//! - A rectangle whose key is already present goes to the `removed` list instead.
//! - Only identical rectangles collide. Overlapping but distinct rectangles are
//!   all kept; use `Rectangle::overlaps` for a spatial test.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use tracing::debug;

use crate::geom2::Rectangle;

/// Set key: a rectangle under its total bounds order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct BoundsKey<T>(Rectangle<T>);

impl<T: Ord> Ord for BoundsKey<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_bounds(&other.0)
    }
}

impl<T: Ord> PartialOrd for BoundsKey<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Kept rectangles plus the duplicates turned away, in insertion order.
#[derive(Clone, Debug)]
pub struct RectangleSet<T> {
    kept: BTreeSet<BoundsKey<T>>,
    removed: Vec<Rectangle<T>>,
}

impl<T> Default for RectangleSet<T> {
    fn default() -> Self {
        Self {
            kept: BTreeSet::new(),
            removed: Vec::new(),
        }
    }
}

impl<T: Ord + Copy + std::fmt::Debug> RectangleSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rectangles<I: IntoIterator<Item = Rectangle<T>>>(rects: I) -> Self {
        let mut set = Self::new();
        for r in rects {
            set.insert(r);
        }
        set
    }

    /// Returns `true` if `r` was kept, `false` if it duplicated a kept rectangle.
    pub fn insert(&mut self, r: Rectangle<T>) -> bool {
        if self.kept.insert(BoundsKey(r)) {
            return true;
        }
        debug!(rect = ?r, "duplicate rectangle removed");
        self.removed.push(r);
        false
    }

    pub fn contains(&self, r: &Rectangle<T>) -> bool {
        self.kept.contains(&BoundsKey(*r))
    }

    /// Kept rectangles in bounds order.
    pub fn kept(&self) -> impl Iterator<Item = &Rectangle<T>> + '_ {
        self.kept.iter().map(|k| &k.0)
    }

    pub fn removed(&self) -> &[Rectangle<T>] {
        &self.removed
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.kept.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }
}

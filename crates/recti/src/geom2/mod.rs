//! Planar primitives over exact scalars.
//!
//! Purpose
//! - One canonical generic `Point`, `Vector` and `Interval`; rectangles and
//!   axis-aligned segments are `Point`s whose coordinates are intervals.
//! - Containment is the `Contain` trait, composed per axis.
//!
//! Conventions
//! - Intervals are closed. `Interval::new` asserts `lb <= ub`; use
//!   `Interval::try_new` to get a `GeomError` instead.
//! - Interval ordering is partial (disjointness), never a total order. Use
//!   `Interval::cmp_bounds` / `Rectangle::cmp_bounds` for container keys.

mod interval;
mod point;
mod shapes;

pub use interval::Interval;
pub use point::{Point, Vector};
pub use shapes::{Contain, HSegment, Rectangle, VSegment};

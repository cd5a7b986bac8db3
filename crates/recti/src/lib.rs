//! Exact rectilinear and polygonal geometry primitives.
//!
//! Layout
//! - `scalar`, `fraction`: the ordered-scalar contract and an exact fraction type
//!   with infinity/indeterminate sentinels.
//! - `geom2`: intervals, points/vectors, rectangles and axis-aligned segments.
//! - `polygon`: monotone reordering of point sets, general and rectilinear
//!   polygons, signed area, point-in-polygon.
//! - `overlap`, `sample`, `convert`: duplicate detection for rectangles, seeded
//!   random inputs, and `nalgebra` interop.
//!
//! Arithmetic policy
//! - All algorithms assume exact scalars (integers or `ExactFraction`). There is no
//!   tolerance anywhere; overflow is the caller's concern.

pub mod cfg;
pub mod convert;
pub mod error;
pub mod fraction;
pub mod geom2;
pub mod overlap;
pub mod polygon;
pub mod sample;
pub mod scalar;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{Degeneracy, OrderCfg};
pub use error::GeomError;
pub use fraction::ExactFraction;
pub use geom2::{Contain, HSegment, Interval, Point, Rectangle, VSegment, Vector};
pub use polygon::{Polygon, RPolygon};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{Degeneracy, OrderCfg};
    pub use crate::error::GeomError;
    pub use crate::fraction::ExactFraction;
    pub use crate::geom2::{Contain, HSegment, Interval, Point, Rectangle, VSegment, Vector};
    pub use crate::overlap::RectangleSet;
    pub use crate::polygon::{
        create_xmono_polygon, create_xmono_rpolygon, create_ymono_polygon,
        create_ymono_rpolygon, point_in_polygon, point_in_rpolygon, Polygon, RPolygon,
    };
    pub use crate::scalar::{Integral, Scalar};
}

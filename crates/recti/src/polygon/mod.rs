//! Monotone polygons from point sets.
//!
//! Purpose
//! - Reorder an unordered point set in place so that it traces a simple boundary
//!   monotone in x or y (general polygons), or a monotone staircase (rectilinear
//!   polygons).
//! - Store the result as `origin + relative vectors`, which makes translation O(1).
//! - Signed area and even-odd point containment for both shapes, on the stored
//!   types and on raw vertex slices.
//!
//! Orientation
//! - General orderings come out counterclockwise (non-negative area).
//! - Rectilinear orderings report their orientation through the returned
//!   `is_anticlockwise` flag.

mod general;
mod inside;
mod monotone;
mod rectilinear;

pub use general::Polygon;
pub use inside::{point_in_polygon, point_in_rpolygon, rsigned_area_of, signed_area_x2_of};
pub use monotone::{
    create_test_rpolygon, create_test_rpolygon_with, create_xmono_polygon,
    create_xmono_polygon_with, create_xmono_rpolygon, create_xmono_rpolygon_with,
    create_ymono_polygon, create_ymono_polygon_with, create_ymono_rpolygon,
    create_ymono_rpolygon_with,
};
pub use rectilinear::RPolygon;

#[cfg(test)]
mod tests;

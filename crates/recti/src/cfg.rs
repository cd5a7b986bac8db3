//! Policy defaults for point-set reordering.
//!
//! Policy
//! - Defaults keep every ordering the algorithm produces, degenerate or not.
//!   Callers that need a strictly positive-area boundary opt into `Reject`.

/// What to do when a reordered point set encloses zero area (all points
/// colinear, all points identical, or a flat staircase).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Degeneracy {
    /// Keep the ordering and emit a `debug` event.
    #[default]
    Proceed,
    /// Return `GeomError::ZeroArea`.
    Reject,
}

/// Reordering configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrderCfg {
    pub degeneracy: Degeneracy,
}

impl OrderCfg {
    #[inline]
    pub fn strict() -> Self {
        Self {
            degeneracy: Degeneracy::Reject,
        }
    }
}

//! Errors for rejected geometric inputs.
//!
//! Arithmetic edge cases (zero denominators) are never errors; see `ExactFraction`.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeomError {
    /// `lower > upper` (or the bounds are unordered, e.g. an indeterminate fraction).
    #[error("interval lower bound exceeds its upper bound")]
    InvalidInterval,
    #[error("need at least {min} points, got {got}")]
    TooFewPoints { min: usize, got: usize },
    /// Reordering produced a boundary that encloses no area.
    #[error("ordering of {n} points encloses zero area")]
    ZeroArea { n: usize },
}

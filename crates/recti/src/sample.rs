//! Seeded random inputs: point sets and rectangle grids.
//!
//! Determinism uses a replay token `(seed, index)` mixed into a single `StdRng`,
//! so a draw can be reproduced from the token alone.

use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::{Interval, Point, Rectangle};
use crate::scalar::Scalar;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next_index(self) -> Self {
        Self {
            index: self.index.wrapping_add(1),
            ..self
        }
    }

    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// `n` points drawn uniformly from the closed box `x × y`. Duplicates are possible.
pub fn random_points<T>(n: usize, x: Interval<T>, y: Interval<T>, tok: ReplayToken) -> Vec<Point<T>>
where
    T: Scalar + SampleUniform,
{
    let mut rng = tok.to_std_rng();
    (0..n)
        .map(|_| {
            Point::new(
                rng.gen_range(x.lb()..=x.ub()),
                rng.gen_range(y.lb()..=y.ub()),
            )
        })
        .collect()
}

/// Grid layout for `rectangle_grid`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCfg {
    pub cols: usize,
    pub rows: usize,
    /// Distance between the lower-left corners of neighbouring cells.
    pub pitch: i32,
    /// Side lengths are drawn from this interval, per axis.
    pub extent: Interval<i32>,
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            cols: 10,
            rows: 20,
            pitch: 100,
            extent: Interval::new(50, 110),
        }
    }
}

/// One rectangle per grid cell, anchored at `(col * pitch, row * pitch)`,
/// column-major.
pub fn rectangle_grid(cfg: GridCfg, tok: ReplayToken) -> Vec<Rectangle<i32>> {
    let mut rng = tok.to_std_rng();
    let (lo, hi) = (cfg.extent.lb(), cfg.extent.ub());
    let mut out = Vec::with_capacity(cfg.cols * cfg.rows);
    let mut x0 = 0;
    for _ in 0..cfg.cols {
        let mut y0 = 0;
        for _ in 0..cfg.rows {
            let w = rng.gen_range(lo..=hi);
            let h = rng.gen_range(lo..=hi);
            out.push(Point::new(
                Interval::new(x0, x0 + w),
                Interval::new(y0, y0 + h),
            ));
            y0 += cfg.pitch;
        }
        x0 += cfg.pitch;
    }
    out
}

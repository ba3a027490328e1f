//! Random valid star parameters (replay tokens).
//!
//! Purpose
//! - Deterministic draws of `StarParams` for property tests and benchmarks.
//! - Each draw is addressed by a `(seed, index)` token, so a failing case can
//!   be replayed on its own.
//!
//! Model
//! - Radius, height and fractions are uniform within `ParamCfg` bounds.
//! - `K` and `N` are derived from the radius the same way a batch does it,
//!   using the configured resolution and jag chord.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::params::{BatchParams, StarParams};

/// Sampling bounds. Fraction bounds are clamped into `(0, 1]`.
#[derive(Clone, Copy, Debug)]
pub struct ParamCfg {
    pub radius: (f64, f64),
    pub height: (f64, f64),
    pub overlap_fraction: (f64, f64),
    pub recovery_fraction: (f64, f64),
    pub resolution: f64,
    pub max_jag_chord: f64,
}

impl Default for ParamCfg {
    fn default() -> Self {
        Self {
            radius: (5.0, 60.0),
            height: (0.0, 3.0),
            overlap_fraction: (0.05, 1.0),
            recovery_fraction: (0.05, 1.0),
            resolution: 0.5,
            max_jag_chord: 6.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
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

fn uniform<R: Rng>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

fn fraction<R: Rng>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    let lo = lo.clamp(f64::MIN_POSITIVE, 1.0);
    let hi = hi.clamp(lo, 1.0);
    uniform(rng, (lo, hi))
}

/// Draws one parameter set. The result always passes profile validation
/// as long as the radius bounds are positive and at least one resolution wide.
pub fn draw_star_params(cfg: ParamCfg, tok: ReplayToken) -> StarParams {
    let mut rng = tok.to_std_rng();
    let radius = uniform(&mut rng, cfg.radius).max(cfg.resolution);
    let height = uniform(&mut rng, cfg.height).max(0.0);
    let overlap_fraction = fraction(&mut rng, cfg.overlap_fraction);
    let recovery_fraction = fraction(&mut rng, cfg.recovery_fraction);
    let batch = BatchParams {
        resolution: cfg.resolution,
        height,
        max_jag_chord: cfg.max_jag_chord,
        min_radius: 0.0,
        max_overlap_radius: radius,
        recovery_fraction,
    };
    StarParams {
        radius,
        height,
        overlap_fraction,
        recovery_fraction,
        radial_samples: batch.radial_samples(radius).max(1),
        jag_count: batch.jag_count(radius).max(1),
    }
}

//! The full pipeline for one radius and the resulting closed outline.

use nalgebra::Vector2;

use crate::error::StarError;
use crate::ladder::sample_ladder;
use crate::params::StarParams;
use crate::polar::map_ladder;
use crate::profile::RadialProfile;
use crate::symmetry::expand;

/// Closed N-jag outline. The last point connects back to the first.
#[derive(Clone, Debug)]
pub struct Star {
    points: Vec<Vector2<f64>>,
    jag_count: usize,
    sector_len: usize,
}

impl Star {
    pub(crate) fn new(points: Vec<Vector2<f64>>, jag_count: usize, sector_len: usize) -> Self {
        Self {
            points,
            jag_count,
            sector_len,
        }
    }

    pub fn points(&self) -> &[Vector2<f64>] {
        &self.points
    }
    pub fn into_points(self) -> Vec<Vector2<f64>> {
        self.points
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    pub fn jag_count(&self) -> usize {
        self.jag_count
    }
    /// Points per half-jag (`Kappa`).
    pub fn sector_len(&self) -> usize {
        self.sector_len
    }

    /// Smallest and largest distance of any point from the center.
    pub fn radius_range(&self) -> Option<(f64, f64)> {
        self.points.iter().map(|p| p.norm()).fold(None, |acc, r| match acc {
            None => Some((r, r)),
            Some((lo, hi)) => Some((lo.min(r), hi.max(r))),
        })
    }

    /// Length of the implicit closing segment from the last point to the first.
    pub fn closing_gap(&self) -> Option<f64> {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) => Some((a - b).norm()),
            _ => None,
        }
    }
}

/// Generates the star outline for one set of per-radius parameters.
pub fn generate_star(params: &StarParams) -> Result<Star, StarError> {
    let profile = RadialProfile::new(
        params.radius,
        params.height,
        params.overlap_fraction,
        params.recovery_fraction,
    )?;
    let ladder = sample_ladder(&profile, params.radial_samples, params.jag_count)?;
    let sector = map_ladder(ladder, params.jag_count);
    expand(sector, params.jag_count)
}

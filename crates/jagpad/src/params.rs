//! Batch-level parameters and their derivation for one pad radius.
//!
//! Per radius `R`:
//! - `N = ⌈2π·R / max_jag_chord⌉` jags,
//! - `K = ⌊R / resolution⌋` radial samples,
//! - `rf = min(R − min_radius, max_overlap_radius) / R`.

use std::f64::consts::TAU;

use crate::error::StarError;

/// The six scalars heading a parameter stream.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BatchParams {
    /// Target arc-length spacing of the radial samples.
    pub resolution: f64,
    /// Felt height `h`.
    pub height: f64,
    /// Largest allowed jag chord on the pad circumference.
    pub max_jag_chord: f64,
    /// Radius below which the pad has no overlap.
    pub min_radius: f64,
    /// Cap on the absolute overlap `R·rf`.
    pub max_overlap_radius: f64,
    /// `hf`, shared by all radii.
    pub recovery_fraction: f64,
}

impl BatchParams {
    /// Checks the scalars that are used as divisors or counts.
    pub fn validate(&self) -> Result<(), StarError> {
        if !self.resolution.is_finite() || self.resolution <= 0.0 {
            return Err(StarError::invalid(
                "resolution",
                self.resolution,
                "must be finite and > 0",
            ));
        }
        if !self.max_jag_chord.is_finite() || self.max_jag_chord <= 0.0 {
            return Err(StarError::invalid(
                "max_jag_chord",
                self.max_jag_chord,
                "must be finite and > 0",
            ));
        }
        if !self.height.is_finite() || self.height < 0.0 {
            return Err(StarError::invalid(
                "height",
                self.height,
                "felt height must be finite and >= 0",
            ));
        }
        if !(self.recovery_fraction > 0.0 && self.recovery_fraction <= 1.0) {
            return Err(StarError::invalid(
                "recovery_fraction",
                self.recovery_fraction,
                "recovery fraction must lie in (0, 1]",
            ));
        }
        for (name, value) in [
            ("min_radius", self.min_radius),
            ("max_overlap_radius", self.max_overlap_radius),
        ] {
            if !value.is_finite() {
                return Err(StarError::invalid(name, value, "must be finite"));
            }
        }
        Ok(())
    }

    /// Jag count for a pad of radius `radius`.
    pub fn jag_count(&self, radius: f64) -> usize {
        (TAU * radius / self.max_jag_chord).ceil() as usize
    }

    /// Radial sample count for a pad of radius `radius`.
    pub fn radial_samples(&self, radius: f64) -> usize {
        (radius / self.resolution).floor() as usize
    }

    /// Overlap fraction for a pad of radius `radius`; may fall outside `(0, 1]`.
    pub fn overlap_fraction(&self, radius: f64) -> f64 {
        (radius - self.min_radius).min(self.max_overlap_radius) / radius
    }

    /// Derives the generation parameters for one radius.
    ///
    /// Fraction bounds are left to `RadialProfile::new`; counts are checked here.
    pub fn for_radius(&self, radius: f64) -> Result<StarParams, StarError> {
        self.validate()?;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(StarError::invalid("R", radius, "pad radius must be finite and > 0"));
        }
        let jag_count = self.jag_count(radius);
        if jag_count == 0 {
            return Err(StarError::invalid("N", 0.0, "need at least one jag"));
        }
        let radial_samples = self.radial_samples(radius);
        if radial_samples == 0 {
            return Err(StarError::invalid(
                "K",
                0.0,
                "pad radius is smaller than the resolution",
            ));
        }
        Ok(StarParams {
            radius,
            height: self.height,
            overlap_fraction: self.overlap_fraction(radius),
            recovery_fraction: self.recovery_fraction,
            radial_samples,
            jag_count,
        })
    }
}

/// Everything the pipeline needs for one star.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarParams {
    pub radius: f64,
    pub height: f64,
    pub overlap_fraction: f64,
    pub recovery_fraction: f64,
    /// `K`.
    pub radial_samples: usize,
    /// `N`.
    pub jag_count: usize,
}

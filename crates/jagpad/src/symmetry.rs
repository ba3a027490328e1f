//! Dihedral expansion of one half-jag into the full star.
//!
//! Jag `n` spans `[n·Δ, (n+1)·Δ]` with `Δ = 2π/N`. Its descending half is the
//! sector reversed and rotated by `n·Δ`; its ascending half is the sector
//! rotated by `n·Δ` and mirrored about the jag axis `(n + ½)·Δ`.

use std::f64::consts::TAU;

use nalgebra::{Rotation2, Vector2};

use crate::error::StarError;
use crate::polar::Sector;
use crate::star::Star;

/// Rotates `p` counterclockwise by `alpha` about the origin.
#[inline]
pub fn rotate(p: Vector2<f64>, alpha: f64) -> Vector2<f64> {
    Rotation2::new(alpha) * p
}

/// Reflects `p` across the line through the origin at angle `axis`:
/// `2·(p·m)·m − p` with `m = (cos axis, sin axis)`.
#[inline]
pub fn mirror(p: Vector2<f64>, axis: f64) -> Vector2<f64> {
    let m = Vector2::new(axis.cos(), axis.sin());
    m * (2.0 * p.dot(&m)) - p
}

/// Tiles `sector` into a closed star with `jag_count` jags.
pub fn expand(sector: Sector, jag_count: usize) -> Result<Star, StarError> {
    if jag_count == 0 {
        return Err(StarError::invalid("N", 0.0, "need at least one jag"));
    }
    let sector_len = sector.len();
    let expected = 2 * jag_count * sector_len;
    let dalpha = TAU / jag_count as f64;
    let pts = sector.points();

    let mut points = Vec::with_capacity(expected);
    for n in 0..jag_count {
        let alpha = n as f64 * dalpha;
        let axis = (n as f64 + 0.5) * dalpha;
        points.extend(pts.iter().rev().map(|&p| rotate(p, alpha)));
        points.extend(pts.iter().map(|&p| mirror(rotate(p, alpha), axis)));
    }

    if points.len() != expected {
        return Err(StarError::inconsistent(format!(
            "star has {} points, expected 2·{jag_count}·{sector_len} = {expected}",
            points.len()
        )));
    }
    Ok(Star::new(points, jag_count, sector_len))
}

//! `(s, c)` → Cartesian.
//!
//! `s` is read as a polar radius and `c` as an arc length along the circle of
//! that radius, so the polar angle is `c/s`.

use nalgebra::Vector2;

use crate::ladder::{Ladder, Sample};

/// Length `s`, circumference `c` and angular offset `offset` → `(x, y)`.
#[inline]
pub fn sc_to_xy(s: f64, c: f64, offset: f64) -> Vector2<f64> {
    let angle = c / s + offset;
    Vector2::new(s * angle.cos(), s * angle.sin())
}

/// Cartesian outline of one half-jag.
#[derive(Clone, Debug, Default)]
pub struct Sector {
    points: Vec<Vector2<f64>>,
}

impl Sector {
    pub fn new(points: Vec<Vector2<f64>>) -> Self {
        Self { points }
    }
    pub fn points(&self) -> &[Vector2<f64>] {
        &self.points
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Maps a ladder for `jag_count` jags; `c` is shared among the `2N` half-jags.
pub fn map_ladder(ladder: Ladder, jag_count: usize) -> Sector {
    let frac = 0.5 / jag_count as f64;
    let points = ladder
        .into_samples()
        .into_iter()
        .map(|Sample { s, c }| sc_to_xy(s, c * frac, 0.0))
        .collect();
    Sector { points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ladder::sample_ladder;
    use crate::profile::RadialProfile;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn quarter_turn() {
        let p = sc_to_xy(2.0, PI, 0.0);
        assert!((p - Vector2::new(0.0, 2.0)).norm() < 1e-12);
    }

    #[test]
    fn offset_adds_to_the_angle() {
        let p = sc_to_xy(1.0, 0.0, FRAC_PI_2);
        assert!((p - Vector2::new(0.0, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn sector_keeps_ladder_length_and_radii() {
        let profile = RadialProfile::new(10.0, 1.0, 0.3, 0.4).unwrap();
        let ladder = sample_ladder(&profile, 10, 13).unwrap();
        let radii: Vec<f64> = ladder.samples().iter().map(|x| x.s).collect();
        let sector = map_ladder(ladder, 13);
        assert_eq!(sector.len(), radii.len());
        for (p, s) in sector.points().iter().zip(radii) {
            assert!((p.norm() - s).abs() < 1e-9);
        }
    }

    #[test]
    fn first_point_lies_on_the_half_jag_axis() {
        // c(s1) = 2π·s1, scaled by 1/(2N) → angle π/N
        let profile = RadialProfile::new(10.0, 1.0, 0.3, 0.4).unwrap();
        let sector = map_ladder(sample_ladder(&profile, 10, 13).unwrap(), 13);
        let first = sector.points()[0];
        assert!((first.y.atan2(first.x) - PI / 13.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn polar_round_trip(s in 1e-3f64..1e3, c in -1e3f64..1e3, o in -PI..PI) {
            let p = sc_to_xy(s, c, o);
            prop_assert!((p.norm() - s).abs() <= 1e-9 * s.max(1.0));
        }
    }
}

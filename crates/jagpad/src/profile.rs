//! Radial profile of one jag: arc length `s` → accumulated circumference `c`.
//!
//! Model
//! - Zone 1 (`s < s1`): the pad body, a plain circle `c = 2π·s`.
//! - Zone 2 (`s1 ≤ s < s2`): recovery of the compressed felt; `c` drops
//!   linearly from `2π·s1` at slope `2π·(h + R·hf·rf)/(R·hf·rf)`.
//! - Zone 3 (`s2 ≤ s`): collapse to the jag tip, `c` drops 1:1 with `s`.
//!
//! Breakpoints `s1 = R+h`, `s2 = R·(1+hf·rf)+h`, `s3 = R·(1+rf)+h`.
//! Each zone starts from the previous zone's value at the shared breakpoint,
//! so the function is continuous by construction.

use std::f64::consts::TAU;

use crate::error::StarError;

/// Which of the three radial zones a coordinate falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    Body,
    Recovery,
    Collapse,
}

/// Validated profile parameters plus derived breakpoints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialProfile {
    radius: f64,
    height: f64,
    overlap_fraction: f64,
    recovery_fraction: f64,
    s1: f64,
    s2: f64,
    s3: f64,
}

impl RadialProfile {
    /// Builds the profile for pad radius `radius`, felt height `height`,
    /// overlap fraction `rf` and recovery fraction `hf`.
    ///
    /// Requires `radius > 0`, `height ≥ 0`, `0 < rf ≤ 1`, `0 < hf ≤ 1`, all finite.
    /// The strict lower bounds on `rf` and `hf` keep the zone-2 slope finite.
    pub fn new(radius: f64, height: f64, rf: f64, hf: f64) -> Result<Self, StarError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(StarError::invalid("R", radius, "pad radius must be finite and > 0"));
        }
        if !height.is_finite() || height < 0.0 {
            return Err(StarError::invalid("h", height, "felt height must be finite and >= 0"));
        }
        if !(rf > 0.0 && rf <= 1.0) {
            return Err(StarError::invalid("rf", rf, "overlap fraction must lie in (0, 1]"));
        }
        if !(hf > 0.0 && hf <= 1.0) {
            return Err(StarError::invalid("hf", hf, "recovery fraction must lie in (0, 1]"));
        }
        Ok(Self {
            radius,
            height,
            overlap_fraction: rf,
            recovery_fraction: hf,
            s1: radius + height,
            s2: radius * (1.0 + hf * rf) + height,
            s3: radius * (1.0 + rf) + height,
        })
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }
    #[inline]
    pub fn overlap_fraction(&self) -> f64 {
        self.overlap_fraction
    }
    #[inline]
    pub fn recovery_fraction(&self) -> f64 {
        self.recovery_fraction
    }

    /// Start of the recovery zone (outer edge of the pad body).
    #[inline]
    pub fn s1(&self) -> f64 {
        self.s1
    }
    /// Start of the collapse zone.
    #[inline]
    pub fn s2(&self) -> f64 {
        self.s2
    }
    /// Jag tip.
    #[inline]
    pub fn s3(&self) -> f64 {
        self.s3
    }

    /// Zone containing `s`. Breakpoints belong to the outer zone.
    pub fn zone(&self, s: f64) -> Zone {
        if s < self.s1 {
            Zone::Body
        } else if s < self.s2 {
            Zone::Recovery
        } else {
            Zone::Collapse
        }
    }

    /// Accumulated circumference at arc length `s ≥ 0`.
    pub fn circumference(&self, s: f64) -> f64 {
        debug_assert!(s >= 0.0, "arc length must be non-negative, got {s}");
        match self.zone(s) {
            Zone::Body => self.body(s),
            Zone::Recovery => self.recovery(s),
            Zone::Collapse => self.collapse(s),
        }
    }

    /// Circumference left at the tip, `c(s3)`; equals `2π·R·(1 − rf)`.
    #[inline]
    pub fn tip_circumference(&self) -> f64 {
        self.circumference(self.s3)
    }

    #[inline]
    fn body(&self, s: f64) -> f64 {
        TAU * s
    }

    #[inline]
    fn recovery(&self, s: f64) -> f64 {
        let span = self.radius * self.recovery_fraction * self.overlap_fraction;
        self.body(self.s1) - TAU * (self.height + span) * (s - self.s1) / span
    }

    #[inline]
    fn collapse(&self, s: f64) -> f64 {
        self.recovery(self.s2) - TAU * (s - self.s2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> RadialProfile {
        RadialProfile::new(10.0, 1.0, 0.3, 0.4).unwrap()
    }

    #[test]
    fn breakpoints_follow_parameters() {
        let p = sample();
        assert!((p.s1() - 11.0).abs() < 1e-12);
        assert!((p.s2() - 12.2).abs() < 1e-12);
        assert!((p.s3() - 14.0).abs() < 1e-12);
    }

    #[test]
    fn zones_split_at_breakpoints() {
        let p = sample();
        assert_eq!(p.zone(0.0), Zone::Body);
        assert_eq!(p.zone(p.s1() - 1e-9), Zone::Body);
        assert_eq!(p.zone(p.s1()), Zone::Recovery);
        assert_eq!(p.zone(p.s2()), Zone::Collapse);
        assert_eq!(p.zone(p.s3()), Zone::Collapse);
    }

    #[test]
    fn body_is_a_circle() {
        let p = sample();
        assert!((p.circumference(5.0) - TAU * 5.0).abs() < 1e-12);
    }

    #[test]
    fn tip_matches_closed_form() {
        let p = sample();
        let expected = TAU * 10.0 * (1.0 - 0.3);
        assert!((p.tip_circumference() - expected).abs() < 1e-9);
    }

    #[test]
    fn full_overlap_closes_at_the_tip() {
        let p = RadialProfile::new(4.0, 0.5, 1.0, 0.25).unwrap();
        assert!(p.tip_circumference().abs() < 1e-9);
    }

    #[test]
    fn rejects_degenerate_fractions() {
        let rf0 = RadialProfile::new(10.0, 1.0, 0.0, 0.4).unwrap_err();
        assert_eq!(rf0.parameter(), Some("rf"));
        let hf0 = RadialProfile::new(10.0, 1.0, 0.3, 0.0).unwrap_err();
        assert_eq!(hf0.parameter(), Some("hf"));
        assert!(RadialProfile::new(10.0, 1.0, 1.2, 0.4).is_err());
        assert!(RadialProfile::new(10.0, 1.0, 0.3, f64::NAN).is_err());
    }

    #[test]
    fn rejects_bad_radius_and_height() {
        assert_eq!(
            RadialProfile::new(0.0, 1.0, 0.3, 0.4).unwrap_err().parameter(),
            Some("R")
        );
        assert_eq!(
            RadialProfile::new(10.0, -0.1, 0.3, 0.4).unwrap_err().parameter(),
            Some("h")
        );
    }

    proptest! {
        #[test]
        fn continuous_at_breakpoints(
            r in 0.5f64..100.0,
            h in 0.0f64..5.0,
            rf in 0.01f64..=1.0,
            hf in 0.01f64..=1.0,
        ) {
            let p = RadialProfile::new(r, h, rf, hf).unwrap();
            let scale = TAU * p.s3();
            prop_assert!((p.body(p.s1()) - p.recovery(p.s1())).abs() < 1e-9 * scale);
            prop_assert!((p.recovery(p.s2()) - p.collapse(p.s2())).abs() < 1e-9 * scale);
            prop_assert!(p.s1() <= p.s2() && p.s2() <= p.s3());
        }

        #[test]
        fn non_increasing_beyond_the_body(
            r in 0.5f64..100.0,
            h in 0.0f64..5.0,
            rf in 0.01f64..=1.0,
            hf in 0.01f64..=1.0,
            t0 in 0.0f64..1.0,
            t1 in 0.0f64..1.0,
        ) {
            let p = RadialProfile::new(r, h, rf, hf).unwrap();
            let (lo, hi) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
            let span = p.s3() - p.s1();
            let a = p.circumference(p.s1() + lo * span);
            let b = p.circumference(p.s1() + hi * span);
            prop_assert!(b <= a + 1e-9 * TAU * p.s3());
        }
    }
}

//! Sample ladder over one jag's profile.
//!
//! Layout
//! - `K` profile samples at `s_k = s1 + k·ds`, `ds = (s3 − s1)/K`, `k ∈ [0, K)`.
//! - `Kappa − K` tail samples holding `s = s_K` while `c` steps down by
//!   `ds·2N`, unwinding the tip circumference toward zero.
//! - `Kappa = ⌊K + c(s3)/(ds·2N)⌋`.

use crate::cfg::{CLOSURE_EPS, MAX_TAIL_SAMPLES};
use crate::error::StarError;
use crate::profile::RadialProfile;

/// One `(arc length, circumference)` pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub s: f64,
    pub c: f64,
}

impl Sample {
    #[inline]
    pub fn new(s: f64, c: f64) -> Self {
        Self { s, c }
    }
}

/// Ordered samples of one half-jag: profile region followed by the closure tail.
#[derive(Clone, Debug)]
pub struct Ladder {
    samples: Vec<Sample>,
    profile_len: usize,
    step: f64,
}

impl Ladder {
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
    /// Number of profile samples (`K`).
    pub fn profile_len(&self) -> usize {
        self.profile_len
    }
    /// Total number of samples (`Kappa`).
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
    /// Arc-length step `ds`.
    pub fn step(&self) -> f64 {
        self.step
    }
    pub fn profile(&self) -> &[Sample] {
        &self.samples[..self.profile_len]
    }
    pub fn tail(&self) -> &[Sample] {
        &self.samples[self.profile_len..]
    }
}

/// Samples `profile` with `radial_samples` (`K`) points across `[s1, s3)` and
/// appends the closure tail sized for `jag_count` (`N`) jags.
pub fn sample_ladder(
    profile: &RadialProfile,
    radial_samples: usize,
    jag_count: usize,
) -> Result<Ladder, StarError> {
    if radial_samples == 0 {
        return Err(StarError::invalid("K", 0.0, "need at least one radial sample"));
    }
    if jag_count == 0 {
        return Err(StarError::invalid("N", 0.0, "need at least one jag"));
    }

    let k = radial_samples as f64;
    let two_n = 2.0 * jag_count as f64;
    let ds = (profile.s3() - profile.s1()) / k;
    if !(ds > 0.0 && ds.is_finite()) {
        return Err(StarError::inconsistent(format!(
            "radial span collapses to zero at this precision (s1 = {}, s3 = {})",
            profile.s1(),
            profile.s3()
        )));
    }
    let s_at = |i: usize| profile.s1() + ds * i as f64;

    let mut tip = profile.tip_circumference();
    if tip < 0.0 && -tip <= CLOSURE_EPS * std::f64::consts::TAU * profile.s3() {
        tip = 0.0;
    }
    let kappa = (k + tip / (ds * two_n)).floor();
    if !kappa.is_finite() || kappa < k {
        return Err(StarError::inconsistent(format!(
            "ladder length {kappa} is below the radial sample count {radial_samples} \
             (tip circumference {tip}, step {ds}, jags {jag_count})"
        )));
    }
    let tail_len = kappa - k;
    if tail_len > MAX_TAIL_SAMPLES as f64 {
        return Err(StarError::inconsistent(format!(
            "closure tail needs {tail_len} samples, limit is {MAX_TAIL_SAMPLES} \
             (tip circumference {tip}, step {ds}, jags {jag_count})"
        )));
    }
    let kappa = kappa as usize;

    let mut samples = Vec::with_capacity(kappa);
    samples.extend((0..radial_samples).map(|i| {
        let s = s_at(i);
        Sample::new(s, profile.circumference(s))
    }));

    let s_end = s_at(radial_samples);
    let c_end = profile.circumference(s_end);
    samples.extend(
        (radial_samples..kappa)
            .map(|i| Sample::new(s_end, c_end - ds * two_n * (i - radial_samples) as f64)),
    );

    Ok(Ladder {
        samples,
        profile_len: radial_samples,
        step: ds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    fn sample_profile() -> RadialProfile {
        RadialProfile::new(10.0, 1.0, 0.3, 0.4).unwrap()
    }

    #[test]
    fn scenario_lengths() {
        let p = sample_profile();
        let ladder = sample_ladder(&p, 10, 13).unwrap();
        // c(s3) = 2π·10·0.7 ≈ 43.98, ds = 0.3, 2N = 26 → 43.98 / 7.8 ≈ 5.64
        assert_eq!(ladder.profile_len(), 10);
        assert_eq!(ladder.len(), 15);
        assert_eq!(ladder.tail().len(), 5);
        assert!((ladder.step() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn profile_region_is_strictly_increasing_in_s() {
        let ladder = sample_ladder(&sample_profile(), 25, 7).unwrap();
        for w in ladder.profile().windows(2) {
            assert!(w[1].s > w[0].s);
        }
        for w in ladder.samples().windows(2) {
            assert!(w[1].s >= w[0].s);
        }
    }

    #[test]
    fn tail_holds_s_and_unwinds_c() {
        let p = sample_profile();
        let ladder = sample_ladder(&p, 10, 13).unwrap();
        let step = ladder.step() * 26.0;
        let tail = ladder.tail();
        assert!(tail.iter().all(|t| (t.s - p.s3()).abs() < 1e-9));
        assert!((tail[0].c - p.tip_circumference()).abs() < 1e-9);
        for w in tail.windows(2) {
            assert!((w[0].c - w[1].c - step).abs() < 1e-9);
        }
        let last = tail.last().unwrap();
        // Kappa is floored, so the tail stops one step short of overshooting.
        assert!(last.c >= step - 1e-9 && last.c < 2.0 * step);
    }

    #[test]
    fn first_sample_sits_on_the_body_edge() {
        let p = sample_profile();
        let ladder = sample_ladder(&p, 10, 13).unwrap();
        let first = ladder.samples()[0];
        assert!((first.s - p.s1()).abs() < 1e-12);
        assert!((first.c - TAU * p.s1()).abs() < 1e-9);
    }

    #[test]
    fn zero_tip_circumference_means_no_tail() {
        let p = RadialProfile::new(8.0, 0.5, 1.0, 0.5).unwrap();
        let ladder = sample_ladder(&p, 8, 11).unwrap();
        assert_eq!(ladder.len(), ladder.profile_len());
        assert!(ladder.tail().is_empty());
    }

    #[test]
    fn tiny_overlap_tail_is_refused() {
        let p = RadialProfile::new(10.0, 1.0, 1e-12, 0.4).unwrap();
        let err = sample_ladder(&p, 10, 13).unwrap_err();
        assert!(
            matches!(&err, StarError::InconsistentSampling(m) if m.contains("closure tail")),
            "{err}"
        );
    }

    #[test]
    fn collapsed_span_is_reported_as_such() {
        // s3 == s1 once R·rf drops below the precision of R + h
        let p = RadialProfile::new(10.0, 1.0, 1e-18, 0.4).unwrap();
        let err = sample_ladder(&p, 10, 13).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("radial span collapses"), "{msg}");
        assert!(!msg.contains("inf"), "{msg}");
    }

    #[test]
    fn rejects_zero_counts() {
        let p = sample_profile();
        assert_eq!(
            sample_ladder(&p, 0, 13).unwrap_err().parameter(),
            Some("K")
        );
        assert_eq!(
            sample_ladder(&p, 10, 0).unwrap_err().parameter(),
            Some("N")
        );
    }
}

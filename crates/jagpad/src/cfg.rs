//! Tolerance defaults (internal).
//!
//! Policy
//! - Fixed constants; the pipeline has no tunable numerics beyond these.

/// Relative slack for a tip circumference that is negative only through
/// round-off. Scaled by `2π·s3` before comparison.
pub(crate) const CLOSURE_EPS: f64 = 1e-12;

/// Upper bound on closure-tail samples per half-jag. Tiny overlap fractions
/// push the tail length toward `π·K/(rf·N)`.
pub(crate) const MAX_TAIL_SAMPLES: usize = 1 << 22;

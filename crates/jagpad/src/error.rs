//! Error type shared by every pipeline stage.

use thiserror::Error;

/// Failures of star generation.
///
/// `InvalidParameter` reports bad input; `InconsistentSampling` reports
/// derived counts that disagree with each other and points at a bug in the
/// parameter derivation rather than at the caller.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum StarError {
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("inconsistent sampling: {0}")]
    InconsistentSampling(String),
}

impl StarError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    pub(crate) fn inconsistent(reason: impl Into<String>) -> Self {
        Self::InconsistentSampling(reason.into())
    }

    /// Name of the offending parameter, if this is a precondition failure.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { name, .. } => Some(name),
            Self::InconsistentSampling(_) => None,
        }
    }
}

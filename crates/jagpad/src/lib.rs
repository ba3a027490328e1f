//! Star-shaped pad outlines.
//!
//! Pipeline
//! - `profile`: piecewise arc-length → circumference mapping of one jag.
//! - `ladder`: sampled `(s, c)` ladder with the linear closure tail.
//! - `polar`: `(s, c)` → Cartesian sector.
//! - `symmetry`: rotation + mirror expansion of the sector into the full star.
//! - `star`: the composed pipeline for one radius.
//!
//! Every stage consumes the previous stage by value and is free of side
//! effects, so distinct radii can be generated concurrently.

mod cfg;
pub mod error;
pub mod ladder;
pub mod params;
pub mod polar;
pub mod profile;
pub mod rand;
pub mod star;
pub mod symmetry;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::StarError;
pub use nalgebra::Vector2 as Vec2;
pub use star::{generate_star, Star};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::StarError;
    pub use crate::ladder::{sample_ladder, Ladder, Sample};
    pub use crate::params::{BatchParams, StarParams};
    pub use crate::polar::{map_ladder, sc_to_xy, Sector};
    pub use crate::profile::{RadialProfile, Zone};
    pub use crate::star::{generate_star, Star};
    pub use crate::symmetry::{expand, mirror, rotate};
    pub use nalgebra::Vector2 as Vec2;
}

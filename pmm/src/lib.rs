//! Rigid tectonic plate motion core.
//!
//! Holds the reference plate-motion-model (PMM) parameter tables, a tolerant
//! parser for plate boundary outline files, polygon/containment queries, an
//! interior grid sampler, and the east-convergence correction applied to
//! sampled velocity vectors before they are handed to a map renderer.
//! Projection and drawing are a separate concern and live outside this crate.
#![deny(missing_docs)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::dbg_macro, clippy::large_enum_variant)]

pub mod catalog;
pub mod errors;
pub mod outline;
pub mod polygon;
pub mod sampler;
pub mod velocity;

pub use catalog::{PlateMotionModel, PlateMotionRecord, PmmParams};
pub use errors::PmmError;
pub use outline::{read_plate_outline, CoordOrder, PlateOutline};
pub use polygon::{outline_for, PlatePolygon};
pub use velocity::{EulerVelocity, PlateMotionScene};

/// Returns the crate version string from Cargo metadata.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

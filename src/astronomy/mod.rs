//! # Astronomy geometry
//!
//! Date-driven geometry shared by the prediction modules:
//!
//! - [`moon`]: lunar phase as a percentage of the synodic month.
//! - [`planets`]: planet positions behind the [`planets::PositionProvider`] trait.
//! - [`conjunction`]: pairwise separation and conjunction detection.

pub mod conjunction;
pub mod moon;
pub mod planets;

pub use conjunction::{conjunction, find_conjunctions, Conjunction};
pub use moon::moon_phase;
pub use planets::{CachedPositions, KeplerianEphemeris, Planet, PlanetPosition, PositionProvider};

pub mod astronomy;
pub mod config;
pub mod constants;
pub mod event;
pub mod intensity_trend;
mod kepler;
mod keplerian_element;
pub mod meteor;
pub mod planner;
pub mod random;
mod ref_system;
pub mod skycast;
pub mod skycast_errors;
pub mod space_weather;
pub mod time;
pub mod viewing;

pub use skycast::Skycast;
pub use skycast_errors::SkycastError;

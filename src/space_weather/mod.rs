//! Space weather: daily samples, boundary conversions, trend forecasting and stargazing
//! recommendations.

pub mod forecaster;
pub mod ingest;
pub mod recommendation;
pub mod sample;

pub use forecaster::{forecast, forecast_with_jitter, trends, SpaceWeatherTrends};
pub use ingest::{FlareClass, GeomagneticStorm, StormScale, VisibilityScale};
pub use recommendation::{stargazing_recommendation, StargazingRecommendation};
pub use sample::{ForecastPoint, SpaceWeatherMetrics, SpaceWeatherSample};

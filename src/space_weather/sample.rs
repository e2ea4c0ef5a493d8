use hifitime::Epoch;
use serde::{Deserialize, Serialize};

use crate::constants::{clamp_to, PROBABILITY_RANGE, SCORE_RANGE};
use crate::skycast_errors::SkycastError;
use crate::space_weather::ingest::VisibilityScale;
use crate::viewing::check;

/// Space weather figures of one day.
///
/// * `solar_flare_probability`, `geomagnetic_storm_probability`: `[0, 1]`.
/// * `visibility_score`: canonical `[0, 10]` scale (see [`VisibilityScale`] for inputs on
///   other scales).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpaceWeatherMetrics {
    pub solar_flare_probability: f64,
    pub geomagnetic_storm_probability: f64,
    pub visibility_score: f64,
}

impl SpaceWeatherMetrics {
    /// Build validated metrics (no clamping: out-of-range inputs are rejected).
    pub fn new(
        solar_flare_probability: f64,
        geomagnetic_storm_probability: f64,
        visibility_score: f64,
    ) -> Result<Self, SkycastError> {
        Ok(SpaceWeatherMetrics {
            solar_flare_probability: check(
                "solar_flare_probability",
                solar_flare_probability,
                PROBABILITY_RANGE,
            )?,
            geomagnetic_storm_probability: check(
                "geomagnetic_storm_probability",
                geomagnetic_storm_probability,
                PROBABILITY_RANGE,
            )?,
            visibility_score: check("visibility_score", visibility_score, SCORE_RANGE)?,
        })
    }

    /// Clamp computed values into their valid ranges.
    pub(crate) fn clamped(
        solar_flare_probability: f64,
        geomagnetic_storm_probability: f64,
        visibility_score: f64,
    ) -> Self {
        SpaceWeatherMetrics {
            solar_flare_probability: clamp_to(solar_flare_probability, PROBABILITY_RANGE),
            geomagnetic_storm_probability: clamp_to(
                geomagnetic_storm_probability,
                PROBABILITY_RANGE,
            ),
            visibility_score: clamp_to(visibility_score, SCORE_RANGE),
        }
    }
}

/// One historical record consumed by the forecaster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaceWeatherSample {
    pub date: Epoch,
    pub metrics: SpaceWeatherMetrics,
}

impl SpaceWeatherSample {
    /// Build a sample whose visibility is already on the canonical 0–10 scale.
    pub fn new(
        date: Epoch,
        solar_flare_probability: f64,
        geomagnetic_storm_probability: f64,
        visibility_score: f64,
    ) -> Result<Self, SkycastError> {
        Ok(SpaceWeatherSample {
            date,
            metrics: SpaceWeatherMetrics::new(
                solar_flare_probability,
                geomagnetic_storm_probability,
                visibility_score,
            )?,
        })
    }

    /// Build a sample from a record whose visibility is expressed on `scale`.
    pub fn from_scaled(
        date: Epoch,
        solar_flare_probability: f64,
        geomagnetic_storm_probability: f64,
        visibility: f64,
        scale: VisibilityScale,
    ) -> Result<Self, SkycastError> {
        Self::new(
            date,
            solar_flare_probability,
            geomagnetic_storm_probability,
            scale.to_canonical(visibility)?,
        )
    }
}

/// One forecast day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastPoint {
    pub date: Epoch,
    pub prediction: SpaceWeatherMetrics,
}

#[cfg(test)]
mod sample_test {
    use super::*;

    fn date() -> Epoch {
        Epoch::from_gregorian_utc_at_midnight(2025, 3, 1)
    }

    #[test]
    fn test_valid_sample() {
        let s = SpaceWeatherSample::new(date(), 0.3, 0.2, 7.0).unwrap();
        assert_eq!(s.metrics.visibility_score, 7.0);
    }

    #[test]
    fn test_out_of_range_is_rejected_not_clamped() {
        let err = SpaceWeatherSample::new(date(), 1.2, 0.2, 7.0).unwrap_err();
        assert_eq!(
            err,
            SkycastError::out_of_range("solar_flare_probability", 1.2, PROBABILITY_RANGE)
        );
        assert!(SpaceWeatherSample::new(date(), 0.3, -0.1, 7.0).is_err());
        assert!(SpaceWeatherSample::new(date(), 0.3, 0.2, 10.5).is_err());
    }

    #[test]
    fn test_unit_interval_visibility_is_rescaled() {
        let s = SpaceWeatherSample::from_scaled(date(), 0.3, 0.2, 0.7, VisibilityScale::UnitInterval)
            .unwrap();
        assert!((s.metrics.visibility_score - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_clamped() {
        let m = SpaceWeatherMetrics::clamped(1.4, -0.2, 12.0);
        assert_eq!(m, SpaceWeatherMetrics::new(1.0, 0.0, 10.0).unwrap());
    }
}

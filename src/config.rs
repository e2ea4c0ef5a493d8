//! # Prediction configuration
//!
//! [`SkycastConfig`] gathers every tunable constant of the prediction core. Defaults
//! reproduce the reference behaviour; any subset can be overridden from TOML:
//!
//! ```toml
//! conjunction_threshold = 3.0
//!
//! [meteor]
//! decay_days = 2.5
//!
//! [forecast]
//! jitter_amplitude = 0.0
//! ```
//!
//! Missing tables and fields fall back to their defaults (`#[serde(default)]`).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{Degree, SCORE_RANGE};
use crate::skycast_errors::SkycastError;

/// Penalty and credit weights of the viewing score (points out of 10).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Lunar brightness penalty at full phase.
    pub moon: f64,
    /// Penalty at maximum light pollution.
    pub light_pollution: f64,
    /// Penalty at full cloud cover.
    pub cloud_cover: f64,
    /// Extra lunar penalty for meteor showers.
    pub meteor_moon_extra: f64,
    /// Light pollution credit given back to planetary alignments.
    pub planetary_light_pollution_credit: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        ScoringWeights {
            moon: 3.0,
            light_pollution: 3.0,
            cloud_cover: 4.0,
            meteor_moon_extra: 2.0,
            planetary_light_pollution_credit: 1.0,
        }
    }
}

/// Peak-relative decay of meteor shower intensity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeteorModel {
    /// e-folding time of the decay away from the peak, in days.
    pub decay_days: f64,
    /// Fraction of the intensity removed by a full moon.
    pub moon_penalty_weight: f64,
}

impl Default for MeteorModel {
    fn default() -> Self {
        MeteorModel {
            decay_days: 3.0,
            moon_penalty_weight: 0.5,
        }
    }
}

/// Neutral default and confidence tiers of the intensity trend predictor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendPolicy {
    /// Intercept returned when the history has fewer than two points.
    pub neutral_intercept: f64,
    /// Slopes with a magnitude strictly below this are considered stable.
    pub stable_slope: f64,
    pub stable_confidence: f64,
    pub unstable_confidence: f64,
}

impl Default for TrendPolicy {
    fn default() -> Self {
        TrendPolicy {
            neutral_intercept: 5.0,
            stable_slope: 0.1,
            stable_confidence: 0.9,
            unstable_confidence: 0.7,
        }
    }
}

/// Space weather extrapolation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastPolicy {
    /// Number of most recent samples used to estimate the daily trend.
    pub trend_window: usize,
    /// Half-width `a` of the multiplicative jitter `1 + U(-a, a)`.
    pub jitter_amplitude: f64,
}

impl Default for ForecastPolicy {
    fn default() -> Self {
        ForecastPolicy {
            trend_window: 7,
            jitter_amplitude: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerPolicy {
    /// Number of candidate days when the caller does not give one.
    pub default_days: u32,
}

impl Default for PlannerPolicy {
    fn default() -> Self {
        PlannerPolicy { default_days: 7 }
    }
}

/// All tunable constants of the prediction core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkycastConfig {
    pub scoring: ScoringWeights,
    pub meteor: MeteorModel,
    pub trend: TrendPolicy,
    pub forecast: ForecastPolicy,
    pub planner: PlannerPolicy,
    /// Flat (RA, Dec) separation below which two planets are in conjunction, in degrees.
    pub conjunction_threshold: Degree,
}

impl Default for SkycastConfig {
    fn default() -> Self {
        SkycastConfig {
            scoring: ScoringWeights::default(),
            meteor: MeteorModel::default(),
            trend: TrendPolicy::default(),
            forecast: ForecastPolicy::default(),
            planner: PlannerPolicy::default(),
            conjunction_threshold: 5.0,
        }
    }
}

impl SkycastConfig {
    /// Parse and validate a configuration from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, SkycastError> {
        let config: SkycastConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML configuration file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, SkycastError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check that every constant is usable.
    ///
    /// Return
    /// ------
    /// * `Ok(())`, or [`SkycastError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), SkycastError> {
        let non_negative = [
            ("scoring.moon", self.scoring.moon),
            ("scoring.light_pollution", self.scoring.light_pollution),
            ("scoring.cloud_cover", self.scoring.cloud_cover),
            ("scoring.meteor_moon_extra", self.scoring.meteor_moon_extra),
            (
                "scoring.planetary_light_pollution_credit",
                self.scoring.planetary_light_pollution_credit,
            ),
            ("trend.stable_slope", self.trend.stable_slope),
            ("conjunction_threshold", self.conjunction_threshold),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SkycastError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        if !self.meteor.decay_days.is_finite() || self.meteor.decay_days <= 0.0 {
            return Err(SkycastError::InvalidConfig(format!(
                "meteor.decay_days must be positive, got {}",
                self.meteor.decay_days
            )));
        }

        let unit_interval = [
            ("meteor.moon_penalty_weight", self.meteor.moon_penalty_weight),
            ("trend.stable_confidence", self.trend.stable_confidence),
            ("trend.unstable_confidence", self.trend.unstable_confidence),
        ];
        for (name, value) in unit_interval {
            if !(0.0..=1.0).contains(&value) {
                return Err(SkycastError::InvalidConfig(format!(
                    "{name} must lie in [0, 1], got {value}"
                )));
            }
        }

        if !(SCORE_RANGE.0..=SCORE_RANGE.1).contains(&self.trend.neutral_intercept) {
            return Err(SkycastError::InvalidConfig(format!(
                "trend.neutral_intercept must lie in [0, 10], got {}",
                self.trend.neutral_intercept
            )));
        }

        if self.forecast.trend_window < 2 {
            return Err(SkycastError::InvalidConfig(format!(
                "forecast.trend_window must be at least 2, got {}",
                self.forecast.trend_window
            )));
        }

        if !(0.0..1.0).contains(&self.forecast.jitter_amplitude) {
            return Err(SkycastError::InvalidConfig(format!(
                "forecast.jitter_amplitude must lie in [0, 1), got {}",
                self.forecast.jitter_amplitude
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod config_test {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SkycastConfig::default();
        assert_eq!(config.validate(), Ok(()));
        let weights = &config.scoring;
        assert_eq!(weights.moon + weights.light_pollution + weights.cloud_cover, 10.0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SkycastConfig::from_toml_str(
            r#"
            conjunction_threshold = 3.0

            [meteor]
            decay_days = 2.5

            [forecast]
            jitter_amplitude = 0.0
            "#,
        )
        .unwrap();

        assert_eq!(config.conjunction_threshold, 3.0);
        assert_eq!(config.meteor.decay_days, 2.5);
        assert_eq!(config.meteor.moon_penalty_weight, 0.5);
        assert_eq!(config.forecast.jitter_amplitude, 0.0);
        assert_eq!(config.forecast.trend_window, 7);
        assert_eq!(config.scoring, ScoringWeights::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(
            SkycastConfig::from_toml_str("").unwrap(),
            SkycastConfig::default()
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = SkycastConfig::from_toml_str("[meteor]\ndecay_days = 0.0").unwrap_err();
        assert!(matches!(err, SkycastError::InvalidConfig(_)));

        let err = SkycastConfig::from_toml_str("[forecast]\ntrend_window = 1").unwrap_err();
        assert!(matches!(err, SkycastError::InvalidConfig(_)));

        let err = SkycastConfig::from_toml_str("[scoring]\nmoon = -1.0").unwrap_err();
        assert!(matches!(err, SkycastError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = SkycastConfig::from_toml_str("conjunction_threshold = \"far\"").unwrap_err();
        assert!(matches!(err, SkycastError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SkycastConfig::from_toml_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, SkycastError::IoError(_)));
    }
}

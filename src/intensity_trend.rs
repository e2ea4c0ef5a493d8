//! # Event intensity trend
//!
//! Ordinary least-squares line through a historical intensity series, regressed against
//! the **position** of each value in the series (index `0, 1, 2, …`), not against elapsed
//! time. The series is used exactly as given; no window is imposed.
//!
//! With fewer than two points (or a degenerate design) the trend falls back to the
//! neutral line `slope = 0`, `intercept = 5` (see [`TrendPolicy::neutral_intercept`]).
//!
//! Confidence is the two-tier heuristic of [`confidence`], not a statistical interval.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::TrendPolicy;
use crate::constants::{clamp_to, SCORE_RANGE};
use crate::skycast_errors::SkycastError;

/// Fitted line `intensity ≈ slope · index + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensityTrend {
    pub slope: f64,
    pub intercept: f64,
}

/// Predicted intensity of the next occurrence together with its confidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensityForecast {
    pub predicted: f64,
    pub confidence: f64,
}

/// Fit the trend of `series`.
///
/// Return
/// ------
/// * the fitted [`IntensityTrend`], the neutral one for fewer than two points, or
///   [`SkycastError::Validation`] if a value is not finite.
pub fn intensity_trend(series: &[f64], policy: &TrendPolicy) -> Result<IntensityTrend, SkycastError> {
    if let Some(bad) = series.iter().find(|v| !v.is_finite()) {
        return Err(SkycastError::Validation {
            field: "intensity",
            value: *bad,
            expected: "a finite number".into(),
        });
    }

    let neutral = IntensityTrend {
        slope: 0.0,
        intercept: policy.neutral_intercept,
    };

    if series.len() < 2 {
        warn!(
            "intensity history has {} point(s), falling back to the neutral trend",
            series.len()
        );
        return Ok(neutral);
    }

    let n = series.len() as f64;
    let (sum_x, sum_y, sum_xy, sum_x2) = series.iter().enumerate().fold(
        (0.0, 0.0, 0.0, 0.0),
        |(sx, sy, sxy, sx2), (index, &y)| {
            let x = index as f64;
            (sx + x, sy + y, sxy + x * y, sx2 + x * x)
        },
    );

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return Ok(neutral);
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    Ok(IntensityTrend { slope, intercept })
}

/// Extrapolate the trend to `next_index`, clamped to `[0, 10]`.
pub fn predict_next_intensity(trend: &IntensityTrend, next_index: usize) -> f64 {
    clamp_to(trend.slope * next_index as f64 + trend.intercept, SCORE_RANGE)
}

/// Two-tier confidence: [`TrendPolicy::stable_confidence`] when `|slope|` is strictly below
/// [`TrendPolicy::stable_slope`], [`TrendPolicy::unstable_confidence`] otherwise.
pub fn confidence(trend: &IntensityTrend, policy: &TrendPolicy) -> f64 {
    if trend.slope.abs() < policy.stable_slope {
        policy.stable_confidence
    } else {
        policy.unstable_confidence
    }
}

/// Predict the intensity that follows `series` (index `series.len()`) with its confidence.
pub fn predict_event_intensity(
    series: &[f64],
    policy: &TrendPolicy,
) -> Result<IntensityForecast, SkycastError> {
    let trend = intensity_trend(series, policy)?;
    Ok(IntensityForecast {
        predicted: predict_next_intensity(&trend, series.len()),
        confidence: confidence(&trend, policy),
    })
}

//! # Space weather trend forecaster
//!
//! Per-metric linear extrapolation of a daily history.
//!
//! 1. The history is ordered most-recent-first and truncated to the
//!    [`ForecastPolicy::trend_window`] latest samples.
//! 2. Each metric's trend is the mean day-over-day change across consecutive pairs of
//!    that window, taken forward in time (newer minus older). A rising history gives a
//!    positive trend.
//! 3. Day `i` of the forecast (`i = 1..=days`) is `latest + trend · i`, optionally
//!    multiplied by a jitter factor `1 + U(−a, a)` drawn from an injected
//!    [`RandomSource`], then clamped (`[0, 1]` for probabilities, `[0, 10]` for visibility).
//!
//! Forecast dates start the day after the latest sample and advance one calendar day per
//! step.

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::config::ForecastPolicy;
use crate::random::RandomSource;
use crate::skycast_errors::SkycastError;
use crate::space_weather::sample::{ForecastPoint, SpaceWeatherMetrics, SpaceWeatherSample};
use crate::time::add_days;

/// Mean daily change of each metric.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpaceWeatherTrends {
    pub solar_flare: f64,
    pub geomagnetic: f64,
    pub visibility: f64,
}

fn most_recent_first(samples: &[SpaceWeatherSample]) -> Vec<SpaceWeatherSample> {
    let mut ordered = samples.to_vec();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));
    ordered
}

fn mean_delta(window: &[SpaceWeatherSample], metric: impl Fn(&SpaceWeatherMetrics) -> f64) -> f64 {
    let deltas: Vec<f64> = window
        .windows(2)
        .map(|pair| metric(&pair[0].metrics) - metric(&pair[1].metrics))
        .collect();
    if deltas.is_empty() {
        0.0
    } else {
        deltas.iter().sum::<f64>() / deltas.len() as f64
    }
}

/// Trends over the `window` most recent samples. Fewer than two samples give zero trends.
pub fn trends(samples: &[SpaceWeatherSample], window: usize) -> SpaceWeatherTrends {
    let ordered = most_recent_first(samples);
    let recent = &ordered[..ordered.len().min(window)];

    if recent.len() < 2 {
        warn!(
            "space weather history has {} usable sample(s), trends default to zero",
            recent.len()
        );
        return SpaceWeatherTrends::default();
    }

    SpaceWeatherTrends {
        solar_flare: mean_delta(recent, |m| m.solar_flare_probability),
        geomagnetic: mean_delta(recent, |m| m.geomagnetic_storm_probability),
        visibility: mean_delta(recent, |m| m.visibility_score),
    }
}

/// Deterministic forecast of `days` days (no jitter).
///
/// Return
/// ------
/// * `days` forecast points, or [`SkycastError::EmptyHistory`] when `samples` is empty.
pub fn forecast(
    samples: &[SpaceWeatherSample],
    days: u32,
    policy: &ForecastPolicy,
) -> Result<Vec<ForecastPoint>, SkycastError> {
    extrapolate(samples, days, policy, |_| 1.0)
}

/// Forecast of `days` days where every metric of every day is scaled by an independent
/// `1 + U(−a, a)` factor, `a` being [`ForecastPolicy::jitter_amplitude`].
///
/// Arguments
/// ---------
/// * `samples`: daily history, any order.
/// * `days`: forecast horizon.
/// * `policy`: window and jitter amplitude.
/// * `rng`: source of the jitter draws. Seed it to get reproducible forecasts.
pub fn forecast_with_jitter<R: RandomSource + ?Sized>(
    samples: &[SpaceWeatherSample],
    days: u32,
    policy: &ForecastPolicy,
    rng: &mut R,
) -> Result<Vec<ForecastPoint>, SkycastError> {
    let amplitude = policy.jitter_amplitude;
    extrapolate(samples, days, policy, |_| {
        1.0 + rng.uniform(-amplitude, amplitude)
    })
}

fn extrapolate(
    samples: &[SpaceWeatherSample],
    days: u32,
    policy: &ForecastPolicy,
    mut jitter: impl FnMut(u32) -> f64,
) -> Result<Vec<ForecastPoint>, SkycastError> {
    let latest = samples
        .iter()
        .max_by(|a, b| a.date.cmp(&b.date))
        .ok_or(SkycastError::EmptyHistory)?;
    let trend = trends(samples, policy.trend_window);

    debug!(
        "forecasting {days} day(s) after {} with trends {:?}",
        latest.date, trend
    );

    let points = (1..=days)
        .map(|i| {
            let step = i as f64;
            let m = &latest.metrics;
            let solar_flare = (m.solar_flare_probability + trend.solar_flare * step) * jitter(i);
            let geomagnetic =
                (m.geomagnetic_storm_probability + trend.geomagnetic * step) * jitter(i);
            let visibility = (m.visibility_score + trend.visibility * step) * jitter(i);

            let point = ForecastPoint {
                date: add_days(latest.date, i as i64),
                prediction: SpaceWeatherMetrics::clamped(solar_flare, geomagnetic, visibility),
            };
            trace!("forecast day {i}: {point:?}");
            point
        })
        .collect();

    Ok(points)
}

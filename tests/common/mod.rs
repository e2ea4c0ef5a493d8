#![allow(dead_code)]

use approx::assert_relative_eq;
use hifitime::Epoch;
use skycast::event::CelestialEventWindow;
use skycast::planner::Location;
use skycast::skycast_errors::ProviderError;
use skycast::space_weather::sample::{SpaceWeatherMetrics, SpaceWeatherSample};
use skycast::time::add_days;
use skycast::viewing::EventType;

pub fn utc(year: i32, month: u8, day: u8) -> Epoch {
    Epoch::from_gregorian_utc_at_midnight(year, month, day)
}

pub fn assert_metrics_close(
    actual: &SpaceWeatherMetrics,
    expected: &SpaceWeatherMetrics,
    epsilon: f64,
) {
    assert_relative_eq!(
        actual.solar_flare_probability,
        expected.solar_flare_probability,
        epsilon = epsilon
    );
    assert_relative_eq!(
        actual.geomagnetic_storm_probability,
        expected.geomagnetic_storm_probability,
        epsilon = epsilon
    );
    assert_relative_eq!(
        actual.visibility_score,
        expected.visibility_score,
        epsilon = epsilon
    );
}

/// Perseids 2025: active 17 July – 24 August, peak 12 August.
pub fn perseids() -> CelestialEventWindow {
    CelestialEventWindow::new(
        EventType::MeteorShower,
        utc(2025, 7, 17),
        utc(2025, 8, 12),
        utc(2025, 8, 24),
        9.0,
    )
    .unwrap()
}

/// `len` daily samples ending at `latest`, most recent first, built by `metrics(k)` where
/// `k = 0` is the oldest day.
pub fn daily_history(
    latest: Epoch,
    len: usize,
    metrics: impl Fn(usize) -> (f64, f64, f64),
) -> Vec<SpaceWeatherSample> {
    (0..len)
        .rev()
        .map(|k| {
            let (flare, storm, visibility) = metrics(k);
            let date = add_days(latest, k as i64 - (len as i64 - 1));
            SpaceWeatherSample::new(date, flare, storm, visibility).unwrap()
        })
        .collect()
}

pub fn rural_sky(_: &Location) -> Result<f64, ProviderError> {
    Ok(2.0)
}

pub fn city_sky(_: &Location) -> Result<f64, ProviderError> {
    Ok(8.0)
}

/// Deterministic cloud pattern cycling every five days.
pub fn cycling_clouds(_: &Location, date: Epoch) -> Result<f64, ProviderError> {
    let day = (date.to_mjd_utc_days().floor() as i64).rem_euclid(5);
    Ok(day as f64 * 20.0)
}

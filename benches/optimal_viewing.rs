//! Benchmarks for the viewing planner and the space weather forecaster.
//!
//!   cargo bench --bench optimal_viewing
//!   cargo bench optimal_viewing -- planner/perseids_30_days

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hifitime::Epoch;

use skycast::config::{ForecastPolicy, ScoringWeights};
use skycast::event::CelestialEventWindow;
use skycast::planner::{optimal_viewing_times, Location};
use skycast::random::RngSource;
use skycast::skycast_errors::ProviderError;
use skycast::space_weather::forecaster::{forecast, forecast_with_jitter};
use skycast::space_weather::sample::SpaceWeatherSample;
use skycast::time::add_days;
use skycast::viewing::EventType;

fn suburban(_: &Location) -> Result<f64, ProviderError> {
    Ok(5.0)
}

fn patchy_clouds(_: &Location, date: Epoch) -> Result<f64, ProviderError> {
    Ok((date.to_mjd_utc_days() * 37.0).rem_euclid(100.0))
}

fn bench_planner(c: &mut Criterion) {
    let event = CelestialEventWindow::new(
        EventType::MeteorShower,
        Epoch::from_gregorian_utc_at_midnight(2025, 7, 17),
        Epoch::from_gregorian_utc_at_midnight(2025, 8, 12),
        Epoch::from_gregorian_utc_at_midnight(2025, 8, 24),
        9.0,
    )
    .unwrap();
    let site = Location::new(-70.4, -24.6).unwrap();
    let weights = ScoringWeights::default();

    c.bench_function("planner/perseids_30_days", |b| {
        b.iter(|| {
            let ranked = optimal_viewing_times(
                black_box(&event),
                &site,
                30,
                &suburban,
                &patchy_clouds,
                &weights,
            )
            .unwrap();
            black_box(ranked)
        })
    });
}

fn bench_forecast(c: &mut Criterion) {
    let latest = Epoch::from_gregorian_utc_at_midnight(2025, 5, 31);
    let history: Vec<SpaceWeatherSample> = (0..30)
        .map(|k| {
            let x = k as f64;
            SpaceWeatherSample::new(
                add_days(latest, -k),
                0.3 + 0.01 * x.sin(),
                0.2 + 0.01 * x.cos(),
                6.0 + 0.5 * (x / 3.0).sin(),
            )
            .unwrap()
        })
        .collect();
    let policy = ForecastPolicy::default();

    c.bench_function("forecast/deterministic_30_days", |b| {
        b.iter(|| black_box(forecast(black_box(&history), 30, &policy).unwrap()))
    });

    c.bench_function("forecast/jitter_30_days", |b| {
        let mut rng = RngSource::seeded(42);
        b.iter(|| black_box(forecast_with_jitter(black_box(&history), 30, &policy, &mut rng).unwrap()))
    });
}

criterion_group!(benches, bench_planner, bench_forecast);
criterion_main!(benches);

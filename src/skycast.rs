//! # Skycast: configured entry point
//!
//! [`Skycast`] bundles a validated [`SkycastConfig`] with a [`PositionProvider`] and exposes
//! every prediction with the configured constants, so callers do not have to thread
//! weights, models and policies through each call.
//!
//! ```rust
//! use hifitime::Epoch;
//! use skycast::skycast::Skycast;
//!
//! let sky = Skycast::new();
//! let date = Epoch::from_gregorian_utc_at_midnight(2020, 12, 21);
//! let great = sky.conjunction("jupiter", "saturn", date).unwrap();
//! assert!(great.is_conjunction);
//! ```
//!
//! The free functions of each module remain available for callers who manage the
//! constants themselves.

use hifitime::Epoch;

use crate::{
    astronomy::{
        conjunction::{conjunction, find_conjunctions, Conjunction},
        moon::moon_phase,
        planets::{KeplerianEphemeris, Planet, PlanetPosition, PositionProvider},
    },
    config::SkycastConfig,
    event::CelestialEventWindow,
    intensity_trend::{intensity_trend, predict_event_intensity, IntensityForecast, IntensityTrend},
    meteor::{intensity_profile, meteor_shower_intensity},
    planner::{
        optimal_viewing_times, CloudCoverProvider, LightPollutionProvider, Location,
        OptimalViewingEntry,
    },
    random::RandomSource,
    skycast_errors::SkycastError,
    space_weather::{
        forecaster::{forecast, forecast_with_jitter},
        recommendation::{stargazing_recommendation, StargazingRecommendation},
        sample::{ForecastPoint, SpaceWeatherMetrics, SpaceWeatherSample},
    },
    viewing::{viewing_score, EventType, ViewingConditions},
};

#[derive(Debug, Clone)]
pub struct Skycast<P = KeplerianEphemeris> {
    config: SkycastConfig,
    positions: P,
}

impl Default for Skycast<KeplerianEphemeris> {
    fn default() -> Self {
        Self::new()
    }
}

impl Skycast<KeplerianEphemeris> {
    /// Default constants and the built-in Keplerian ephemeris.
    pub fn new() -> Self {
        Skycast {
            config: SkycastConfig::default(),
            positions: KeplerianEphemeris,
        }
    }

    /// Custom constants and the built-in Keplerian ephemeris.
    ///
    /// Return
    /// ------
    /// * the context, or [`SkycastError::InvalidConfig`] if `config` does not validate.
    pub fn with_config(config: SkycastConfig) -> Result<Self, SkycastError> {
        config.validate()?;
        Ok(Skycast {
            config,
            positions: KeplerianEphemeris,
        })
    }
}

impl<P: PositionProvider> Skycast<P> {
    /// Replace the position provider, keeping the configuration.
    pub fn with_provider<Q: PositionProvider>(self, positions: Q) -> Skycast<Q> {
        Skycast {
            config: self.config,
            positions,
        }
    }

    pub fn config(&self) -> &SkycastConfig {
        &self.config
    }

    pub fn positions(&self) -> &P {
        &self.positions
    }

    pub fn moon_phase(&self, date: Epoch) -> f64 {
        moon_phase(date)
    }

    pub fn planet_position(&self, planet: Planet, date: Epoch) -> Option<PlanetPosition> {
        self.positions.position(planet, date)
    }

    /// Conjunction check with the configured threshold. `None` when a name is unknown or a
    /// position is unavailable.
    pub fn conjunction(&self, planet_a: &str, planet_b: &str, date: Epoch) -> Option<Conjunction> {
        conjunction(
            &self.positions,
            planet_a,
            planet_b,
            date,
            self.config.conjunction_threshold,
        )
    }

    pub fn find_conjunctions(&self, date: Epoch) -> Vec<Conjunction> {
        find_conjunctions(&self.positions, date, self.config.conjunction_threshold)
    }

    pub fn meteor_shower_intensity(&self, shower: &CelestialEventWindow, date: Epoch) -> f64 {
        meteor_shower_intensity(shower, date, &self.config.meteor)
    }

    pub fn meteor_intensity_profile(&self, shower: &CelestialEventWindow) -> Vec<(Epoch, f64)> {
        intensity_profile(shower, &self.config.meteor)
    }

    pub fn viewing_score(&self, conditions: &ViewingConditions, event_type: EventType) -> f64 {
        viewing_score(conditions, event_type, &self.config.scoring)
    }

    pub fn intensity_trend(&self, series: &[f64]) -> Result<IntensityTrend, SkycastError> {
        intensity_trend(series, &self.config.trend)
    }

    pub fn predict_event_intensity(&self, series: &[f64]) -> Result<IntensityForecast, SkycastError> {
        predict_event_intensity(series, &self.config.trend)
    }

    /// Deterministic space weather forecast.
    pub fn forecast(
        &self,
        samples: &[SpaceWeatherSample],
        days: u32,
    ) -> Result<Vec<ForecastPoint>, SkycastError> {
        forecast(samples, days, &self.config.forecast)
    }

    /// Space weather forecast with the configured jitter drawn from `rng`.
    pub fn forecast_with_jitter<R: RandomSource + ?Sized>(
        &self,
        samples: &[SpaceWeatherSample],
        days: u32,
        rng: &mut R,
    ) -> Result<Vec<ForecastPoint>, SkycastError> {
        forecast_with_jitter(samples, days, &self.config.forecast, rng)
    }

    pub fn stargazing_recommendation(&self, metrics: &SpaceWeatherMetrics) -> StargazingRecommendation {
        stargazing_recommendation(metrics)
    }

    /// Rank the days of `event`. `days` defaults to
    /// [`PlannerPolicy::default_days`](crate::config::PlannerPolicy::default_days).
    pub fn optimal_viewing_times<L, C>(
        &self,
        event: &CelestialEventWindow,
        location: &Location,
        days: Option<u32>,
        light: &L,
        cloud: &C,
    ) -> Result<Vec<OptimalViewingEntry>, SkycastError>
    where
        L: LightPollutionProvider + ?Sized,
        C: CloudCoverProvider + ?Sized,
    {
        optimal_viewing_times(
            event,
            location,
            days.unwrap_or(self.config.planner.default_days),
            light,
            cloud,
            &self.config.scoring,
        )
    }
}

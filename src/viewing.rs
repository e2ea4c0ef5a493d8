//! # Viewing conditions and score
//!
//! A [`ViewingConditions`] value describes the sky at one place and date (moon phase,
//! light pollution, cloud cover). [`viewing_score`] condenses it into a single 0–10
//! stargazing-quality figure, adjusted for the kind of event being observed.
//!
//! ## Score
//!
//! ```text
//! score = 10 − w_moon·phase/100 − w_lp·lp/10 − w_cloud·cloud/100
//!         − w_meteor·phase/100      (meteor showers)
//!         + w_credit·lp/10          (planetary alignments)
//! ```
//!
//! clamped once, at the end, to `[0, 10]`. With the default weights `3 + 3 + 4 = 10`, the
//! worst base conditions bring the score to `0` before the event-type adjustment.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ScoringWeights;
use crate::constants::{
    clamp_to, within, CLOUD_COVER_RANGE, LIGHT_POLLUTION_RANGE, MOON_PHASE_RANGE, SCORE_RANGE,
};
use crate::skycast_errors::SkycastError;

/// Kind of celestial event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    MeteorShower,
    PlanetaryAlignment,
    Conjunction,
    CelestialObject,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::MeteorShower => "meteor_shower",
            EventType::PlanetaryAlignment => "planetary_alignment",
            EventType::Conjunction => "conjunction",
            EventType::CelestialObject => "celestial_object",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = SkycastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "meteor_shower" => Ok(EventType::MeteorShower),
            "planetary_alignment" => Ok(EventType::PlanetaryAlignment),
            "conjunction" => Ok(EventType::Conjunction),
            "celestial_object" => Ok(EventType::CelestialObject),
            other => Err(SkycastError::InvalidEventWindow(format!(
                "unknown event type '{other}'"
            ))),
        }
    }
}

/// Sky conditions at one place and date.
///
/// * `moon_phase`: percent of the synodic month, `[0, 100]`.
/// * `light_pollution`: index in `[0, 10]`.
/// * `cloud_cover`: percent, `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewingConditions {
    moon_phase: f64,
    light_pollution: f64,
    cloud_cover: f64,
}

impl ViewingConditions {
    /// Build validated conditions.
    ///
    /// Return
    /// ------
    /// * the conditions, or [`SkycastError::Validation`] for the first value outside its range
    ///   (values are never clamped here).
    pub fn new(moon_phase: f64, light_pollution: f64, cloud_cover: f64) -> Result<Self, SkycastError> {
        check("moon_phase", moon_phase, MOON_PHASE_RANGE)?;
        check("light_pollution", light_pollution, LIGHT_POLLUTION_RANGE)?;
        check("cloud_cover", cloud_cover, CLOUD_COVER_RANGE)?;
        Ok(ViewingConditions {
            moon_phase,
            light_pollution,
            cloud_cover,
        })
    }

    pub fn moon_phase(&self) -> f64 {
        self.moon_phase
    }

    pub fn light_pollution(&self) -> f64 {
        self.light_pollution
    }

    pub fn cloud_cover(&self) -> f64 {
        self.cloud_cover
    }
}

pub(crate) fn check(field: &'static str, value: f64, range: (f64, f64)) -> Result<f64, SkycastError> {
    if within(value, range) {
        Ok(value)
    } else {
        Err(SkycastError::out_of_range(field, value, range))
    }
}

/// Viewing score in `[0, 10]` for `conditions` and an event of kind `event_type`.
///
/// Pure function: identical inputs always give identical outputs.
pub fn viewing_score(
    conditions: &ViewingConditions,
    event_type: EventType,
    weights: &ScoringWeights,
) -> f64 {
    let moon = conditions.moon_phase / 100.0;
    let light = conditions.light_pollution / 10.0;
    let cloud = conditions.cloud_cover / 100.0;

    let mut score = SCORE_RANGE.1;
    score -= moon * weights.moon;
    score -= light * weights.light_pollution;
    score -= cloud * weights.cloud_cover;

    match event_type {
        EventType::MeteorShower => score -= moon * weights.meteor_moon_extra,
        EventType::PlanetaryAlignment => score += light * weights.planetary_light_pollution_credit,
        EventType::Conjunction | EventType::CelestialObject => {}
    }

    clamp_to(score, SCORE_RANGE)
}

//! # Ingestion-boundary conversions
//!
//! Upstream feeds describe space weather in several incompatible ways. The core only
//! works with one canonical representation; these helpers convert at the boundary:
//!
//! | Upstream | Canonical |
//! |---|---|
//! | visibility on `[0, 1]` or `[0, 10]` | visibility on `[0, 10]` ([`VisibilityScale`]) |
//! | flare class `A`, `B`, `C`, `M`, `X` (e.g. `"M2.3"`) | intensity `1..=5` ([`FlareClass`]) |
//! | NOAA storm scale `G1`..`G5` | Kp index `5..=9` ([`StormScale`], [`GeomagneticStorm`]) |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{PROBABILITY_RANGE, SCORE_RANGE};
use crate::skycast_errors::SkycastError;
use crate::viewing::check;

/// Scale on which an incoming visibility value is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityScale {
    /// `[0, 1]`, multiplied by 10.
    UnitInterval,
    /// `[0, 10]`, the canonical scale.
    Decile,
}

impl VisibilityScale {
    /// Convert `value` to the canonical `[0, 10]` scale, rejecting values outside the
    /// source scale.
    pub fn to_canonical(&self, value: f64) -> Result<f64, SkycastError> {
        match self {
            VisibilityScale::UnitInterval => {
                Ok(check("visibility", value, PROBABILITY_RANGE)? * SCORE_RANGE.1)
            }
            VisibilityScale::Decile => check("visibility", value, SCORE_RANGE),
        }
    }
}

/// X-ray flare class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FlareClass {
    A,
    B,
    C,
    M,
    X,
}

impl FlareClass {
    /// Intensity on the 1–5 ladder used by stored records.
    pub fn intensity(&self) -> f64 {
        match self {
            FlareClass::A => 1.0,
            FlareClass::B => 2.0,
            FlareClass::C => 3.0,
            FlareClass::M => 4.0,
            FlareClass::X => 5.0,
        }
    }
}

impl FromStr for FlareClass {
    type Err = SkycastError;

    /// Parse from a class type such as `"X1.1"` or `"c"`; only the letter is used.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('A') => Ok(FlareClass::A),
            Some('B') => Ok(FlareClass::B),
            Some('C') => Ok(FlareClass::C),
            Some('M') => Ok(FlareClass::M),
            Some('X') => Ok(FlareClass::X),
            _ => Err(SkycastError::UnknownFlareClass(s.to_string())),
        }
    }
}

/// Intensity of the most recent flare, `1` (quiet) when there is none.
pub fn solar_flare_intensity(latest_flare: Option<FlareClass>) -> f64 {
    latest_flare.map_or(FlareClass::A.intensity(), |class| class.intensity())
}

/// NOAA geomagnetic storm scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StormScale {
    G1,
    G2,
    G3,
    G4,
    G5,
}

impl StormScale {
    /// Lower Kp bound of the scale.
    pub fn kp_index(&self) -> f64 {
        match self {
            StormScale::G1 => 5.0,
            StormScale::G2 => 6.0,
            StormScale::G3 => 7.0,
            StormScale::G4 => 8.0,
            StormScale::G5 => 9.0,
        }
    }

    pub fn level_name(&self) -> &'static str {
        match self {
            StormScale::G1 => "Minor",
            StormScale::G2 => "Moderate",
            StormScale::G3 => "Strong",
            StormScale::G4 => "Severe",
            StormScale::G5 => "Extreme",
        }
    }
}

impl fmt::Display for StormScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?} ({})", self.level_name())
    }
}

impl FromStr for StormScale {
    type Err = SkycastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "G1" => Ok(StormScale::G1),
            "G2" => Ok(StormScale::G2),
            "G3" => Ok(StormScale::G3),
            "G4" => Ok(StormScale::G4),
            "G5" => Ok(StormScale::G5),
            _ => Err(SkycastError::UnknownStormScale(s.to_string())),
        }
    }
}

/// A reported geomagnetic storm; feeds do not always carry its scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeomagneticStorm {
    #[serde(default)]
    pub scale: Option<StormScale>,
}

impl GeomagneticStorm {
    pub fn new(scale: Option<StormScale>) -> Self {
        GeomagneticStorm { scale }
    }

    /// Scale of the storm, a storm without one counts as `G1`.
    pub fn effective_scale(&self) -> StormScale {
        self.scale.unwrap_or(StormScale::G1)
    }
}

/// Kp index implied by the most recent storm, `2` (unsettled) when no storm was reported.
pub fn kp_index(latest_storm: Option<&GeomagneticStorm>) -> f64 {
    latest_storm.map_or(2.0, |storm| storm.effective_scale().kp_index())
}

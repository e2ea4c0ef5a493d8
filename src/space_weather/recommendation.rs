use std::fmt;

use serde::{Deserialize, Serialize};

use crate::space_weather::sample::SpaceWeatherMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VisibilityRating {
    Poor,
    Good,
    Excellent,
}

impl VisibilityRating {
    /// `≥ 7` Excellent, `≥ 4` Good, Poor below.
    pub fn from_score(visibility_score: f64) -> Self {
        if visibility_score >= 7.0 {
            Self::Excellent
        } else if visibility_score >= 4.0 {
            Self::Good
        } else {
            Self::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// `< 0.3` Low, `< 0.6` Moderate, High above.
    pub fn from_probability(probability: f64) -> Self {
        if probability < 0.3 {
            Self::Low
        } else if probability < 0.6 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl fmt::Display for VisibilityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall verdict of a night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StargazingOutlook {
    /// Excellent visibility, both risks low.
    Perfect,
    /// At least good visibility, no high risk.
    Favorable,
    NotRecommended,
}

impl StargazingOutlook {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Perfect => {
                "Perfect conditions for stargazing! Clear skies and minimal space weather interference expected."
            }
            Self::Favorable => {
                "Good conditions for stargazing. Some space weather activity may affect visibility."
            }
            Self::NotRecommended => {
                "Not recommended for stargazing. Poor visibility or high space weather activity expected."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StargazingRecommendation {
    pub visibility: VisibilityRating,
    pub solar_flare_risk: RiskLevel,
    pub geomagnetic_risk: RiskLevel,
    pub outlook: StargazingOutlook,
}

impl StargazingRecommendation {
    pub fn message(&self) -> &'static str {
        self.outlook.message()
    }
}

/// Rate the space weather of one day for stargazing.
pub fn stargazing_recommendation(metrics: &SpaceWeatherMetrics) -> StargazingRecommendation {
    let visibility = VisibilityRating::from_score(metrics.visibility_score);
    let solar_flare_risk = RiskLevel::from_probability(metrics.solar_flare_probability);
    let geomagnetic_risk = RiskLevel::from_probability(metrics.geomagnetic_storm_probability);
    let worst_risk = solar_flare_risk.max(geomagnetic_risk);

    let outlook = match (visibility, worst_risk) {
        (VisibilityRating::Excellent, RiskLevel::Low) => StargazingOutlook::Perfect,
        (VisibilityRating::Excellent | VisibilityRating::Good, RiskLevel::Low | RiskLevel::Moderate) => {
            StargazingOutlook::Favorable
        }
        _ => StargazingOutlook::NotRecommended,
    };

    StargazingRecommendation {
        visibility,
        solar_flare_risk,
        geomagnetic_risk,
        outlook,
    }
}

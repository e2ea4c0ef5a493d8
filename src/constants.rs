//! # Constants and type definitions for Skycast
//!
//! This module centralizes the **astronomical constants**, **conversion factors**, the
//! **documented value ranges** and the **common type aliases** used throughout the
//! `skycast` crate.
//!
//! ## Overview
//!
//! - Lunar and calendar constants (synodic month, reference new moon)
//! - Unit conversions (degrees ↔ radians, days ↔ seconds, arcseconds ↔ radians)
//! - Closed ranges of every bounded quantity (scores, probabilities, percentages)
//! - Core type aliases used across the crate

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// MJD epoch of J2000.0 (2000-01-01 12:00:00 TT)
pub const T2000: f64 = 51544.5;

/// Days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36525.0;

/// Mean length of the lunar phase cycle, in days
pub const SYNODIC_MONTH: f64 = 29.530588853;

/// Reference new moon used as the origin of the phase cycle: 2000-01-06T18:14:00 UTC,
/// as (year, month, day, hour, minute).
pub const REFERENCE_NEW_MOON: (i32, u8, u8, u8, u8) = (2000, 1, 6, 18, 14);

// -------------------------------------------------------------------------------------------------
// Documented value ranges
// -------------------------------------------------------------------------------------------------

/// Moon phase, in percent of the synodic cycle elapsed.
pub const MOON_PHASE_RANGE: (f64, f64) = (0.0, 100.0);

/// Light pollution index.
pub const LIGHT_POLLUTION_RANGE: (f64, f64) = (0.0, 10.0);

/// Cloud cover, in percent.
pub const CLOUD_COVER_RANGE: (f64, f64) = (0.0, 100.0);

/// Scores and intensities (viewing score, meteor intensity, visibility).
pub const SCORE_RANGE: (f64, f64) = (0.0, 10.0);

/// Probabilities (solar flare, geomagnetic storm).
pub const PROBABILITY_RANGE: (f64, f64) = (0.0, 1.0);

/// Geographic longitude, in degrees.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Geographic latitude, in degrees.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Modified Julian Date (days)
pub type MJD = f64;

/// Clamp `value` into a closed `(min, max)` range.
#[inline]
pub fn clamp_to(value: f64, range: (f64, f64)) -> f64 {
    value.clamp(range.0, range.1)
}

/// `true` when `value` is finite and lies in the closed `(min, max)` range.
#[inline]
pub fn within(value: f64, range: (f64, f64)) -> bool {
    value.is_finite() && value >= range.0 && value <= range.1
}

#[cfg(test)]
mod constants_test {
    use super::*;

    #[test]
    fn test_clamp_and_within() {
        assert_eq!(clamp_to(12.5, SCORE_RANGE), 10.0);
        assert_eq!(clamp_to(-0.2, PROBABILITY_RANGE), 0.0);
        assert!(within(100.0, CLOUD_COVER_RANGE));
        assert!(!within(f64::NAN, CLOUD_COVER_RANGE));
        assert!(!within(-1e-9, LIGHT_POLLUTION_RANGE));
    }
}

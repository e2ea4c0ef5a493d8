//! # Planet positions
//!
//! Apparent (geometric, geocentric) positions of the major planets, behind the
//! [`PositionProvider`] trait so callers can inject their own ephemeris or a
//! deterministic fake.
//!
//! ## Providers
//!
//! - [`KeplerianEphemeris`]: closed-form positions from the JPL approximate mean elements.
//!   No file, no network, valid 1800–2050; other dates give `None`.
//! - [`CachedPositions`]: memo keyed by `(planet, date)` around any other provider.
//! - Any closure `Fn(Planet, Epoch) -> Option<PlanetPosition>`.
//!
//! ## Pipeline of [`KeplerianEphemeris`]
//!
//! ```text
//! mean elements(t) → Kepler's equation → heliocentric ecliptic (planet, Earth)
//!     → geocentric ecliptic → J2000 equatorial → (α, δ), magnitude
//! ```
//!
//! Light time, aberration, precession and nutation are neglected.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

use hifitime::Epoch;
use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{Degree, T2000},
    keplerian_element::{
        MeanElementRates, EARTH_MOON_BARYCENTER, JUPITER, MARS, MEAN_ELEMENTS_VALIDITY, MERCURY,
        NEPTUNE, SATURN, URANUS, VENUS,
    },
    ref_system::{cartesian_to_radec, ecliptic_to_equatorial, obleq},
    skycast_errors::SkycastError,
    time::epoch_to_mjd_tt,
};

/// Major planets handled by the ephemeris.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    /// Every planet known to the ephemeris.
    pub const ALL: [Planet; 7] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    /// The five planets visible to the naked eye, scanned for conjunctions.
    pub const NAKED_EYE: [Planet; 5] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
        }
    }

    fn mean_elements(&self) -> &'static MeanElementRates {
        match self {
            Planet::Mercury => &MERCURY,
            Planet::Venus => &VENUS,
            Planet::Mars => &MARS,
            Planet::Jupiter => &JUPITER,
            Planet::Saturn => &SATURN,
            Planet::Uranus => &URANUS,
            Planet::Neptune => &NEPTUNE,
        }
    }

    /// Absolute visual magnitude V(1,0).
    fn absolute_magnitude(&self) -> f64 {
        match self {
            Planet::Mercury => -0.42,
            Planet::Venus => -4.40,
            Planet::Mars => -1.52,
            Planet::Jupiter => -9.40,
            Planet::Saturn => -8.88,
            Planet::Uranus => -7.19,
            Planet::Neptune => -6.87,
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Planet {
    type Err = SkycastError;

    /// Case-insensitive planet lookup (`"jupiter"`, `"Jupiter"`, `" JUPITER "`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Planet::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SkycastError::UnknownPlanet(s.to_string()))
    }
}

/// Apparent position of a planet.
///
/// * `right_ascension`: degrees in `[0, 360)`.
/// * `declination`: degrees in `[-90, 90]`.
/// * `magnitude`: apparent visual magnitude (smaller is brighter).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub right_ascension: Degree,
    pub declination: Degree,
    pub magnitude: f64,
}

/// Source of planet positions.
///
/// Returning `None` means the position is not available (unsupported body, date outside
/// the provider's validity, failed lookup); callers treat it as "not computable".
pub trait PositionProvider {
    fn position(&self, planet: Planet, date: Epoch) -> Option<PlanetPosition>;
}

impl<F> PositionProvider for F
where
    F: Fn(Planet, Epoch) -> Option<PlanetPosition>,
{
    fn position(&self, planet: Planet, date: Epoch) -> Option<PlanetPosition> {
        self(planet, date)
    }
}

/// Closed-form ephemeris from the JPL approximate mean elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeplerianEphemeris;

impl KeplerianEphemeris {
    /// Geocentric J2000 equatorial position of `planet` at `date`.
    ///
    /// Return
    /// ------
    /// * the position.
    /// * [`SkycastError::OutsideEphemeris`] if `date` is outside the 1800–2050 fit.
    /// * [`SkycastError::KeplerSolverFailed`] if an orbit cannot be solved.
    pub fn geocentric_position(
        &self,
        planet: Planet,
        date: Epoch,
    ) -> Result<PlanetPosition, SkycastError> {
        let tjm = epoch_to_mjd_tt(date);
        if !(MEAN_ELEMENTS_VALIDITY.0..MEAN_ELEMENTS_VALIDITY.1).contains(&tjm) {
            return Err(SkycastError::OutsideEphemeris(date.to_string()));
        }

        let helio_planet = planet.mean_elements().at(tjm).heliocentric_position()?;
        let helio_earth = EARTH_MOON_BARYCENTER.at(tjm).heliocentric_position()?;
        let geo_ecliptic = helio_planet - helio_earth;

        // mean elements are referred to the J2000 ecliptic
        let geo_equatorial = ecliptic_to_equatorial(&geo_ecliptic, obleq(T2000));
        let (alpha, delta, distance) = cartesian_to_radec(&geo_equatorial);

        let magnitude =
            planet.absolute_magnitude() + 5.0 * (helio_planet.norm() * distance).log10();

        let position = PlanetPosition {
            right_ascension: alpha.to_degrees().rem_euclid(360.0),
            declination: delta.to_degrees(),
            magnitude,
        };
        trace!("{planet} at {date}: {position:?}");
        Ok(position)
    }
}

impl PositionProvider for KeplerianEphemeris {
    fn position(&self, planet: Planet, date: Epoch) -> Option<PlanetPosition> {
        match self.geocentric_position(planet, date) {
            Ok(position) => Some(position),
            Err(err) => {
                warn!("no position for {planet} at {date}: {err}");
                None
            }
        }
    }
}

/// Memo around another [`PositionProvider`], keyed by `(planet, date)`.
///
/// Only available positions are cached; a `None` is recomputed on the next call.
#[derive(Debug, Default)]
pub struct CachedPositions<P> {
    inner: P,
    memo: Mutex<HashMap<(Planet, i128), PlanetPosition>>,
}

impl<P: PositionProvider> CachedPositions<P> {
    pub fn new(inner: P) -> Self {
        CachedPositions {
            inner,
            memo: Mutex::new(HashMap::new()),
        }
    }

    /// Number of memoized positions.
    pub fn len(&self) -> usize {
        self.memo.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<P: PositionProvider> PositionProvider for CachedPositions<P> {
    fn position(&self, planet: Planet, date: Epoch) -> Option<PlanetPosition> {
        let key = (planet, date.to_tai_duration().total_nanoseconds());

        if let Some(hit) = self
            .memo
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&key)
        {
            return Some(*hit);
        }

        let computed = self.inner.position(planet, date)?;
        self.memo
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key, computed);
        Some(computed)
    }
}

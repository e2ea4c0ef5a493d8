//! # Optimal viewing time planner
//!
//! Ranks the days of an event window by [`viewing_score`].
//!
//! Light pollution and cloud cover come from injected collaborators
//! ([`LightPollutionProvider`], [`CloudCoverProvider`]), typically backed by remote
//! services. The planner adds no retry or timeout of its own: a provider failure aborts the
//! request with [`SkycastError::CollaboratorUnavailable`], a provider value outside its
//! contract range with [`SkycastError::Validation`].
//!
//! Both traits are implemented for plain functions and closures of the matching signature.

use hifitime::Epoch;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::astronomy::moon::moon_phase;
use crate::config::ScoringWeights;
use crate::constants::{Degree, LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::event::CelestialEventWindow;
use crate::skycast_errors::{ProviderError, SkycastError};
use crate::time::{add_days, days_between};
use crate::viewing::{check, viewing_score, ViewingConditions};

/// Observing site.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    longitude: Degree,
    latitude: Degree,
}

impl Location {
    /// Longitude in `[-180, 180]`, latitude in `[-90, 90]`, both in degrees.
    pub fn new(longitude: Degree, latitude: Degree) -> Result<Self, SkycastError> {
        Ok(Location {
            longitude: check("longitude", longitude, LONGITUDE_RANGE)?,
            latitude: check("latitude", latitude, LATITUDE_RANGE)?,
        })
    }

    /// From a GeoJSON-ordered `[longitude, latitude]` pair.
    pub fn from_coordinates(coordinates: [Degree; 2]) -> Result<Self, SkycastError> {
        Self::new(coordinates[0], coordinates[1])
    }

    pub fn longitude(&self) -> Degree {
        self.longitude
    }

    pub fn latitude(&self) -> Degree {
        self.latitude
    }
}

/// Light pollution index of a site, expected in `[0, 10]`.
pub trait LightPollutionProvider {
    fn light_pollution(&self, location: &Location) -> Result<f64, ProviderError>;
}

impl<F> LightPollutionProvider for F
where
    F: Fn(&Location) -> Result<f64, ProviderError>,
{
    fn light_pollution(&self, location: &Location) -> Result<f64, ProviderError> {
        self(location)
    }
}

/// Cloud cover of a site at a date, expected in percent `[0, 100]`.
pub trait CloudCoverProvider {
    fn cloud_cover(&self, location: &Location, date: Epoch) -> Result<f64, ProviderError>;
}

impl<F> CloudCoverProvider for F
where
    F: Fn(&Location, Epoch) -> Result<f64, ProviderError>,
{
    fn cloud_cover(&self, location: &Location, date: Epoch) -> Result<f64, ProviderError> {
        self(location, date)
    }
}

/// One candidate night.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimalViewingEntry {
    pub date: Epoch,
    pub score: f64,
    pub conditions: ViewingConditions,
}

/// Rank the first `days` days of `event` (starting at its start date, never past its end
/// date) from best to worst viewing score.
///
/// Equal scores keep chronological order, so the earliest date comes first.
///
/// Arguments
/// ---------
/// * `event`: the event window.
/// * `location`: observing site handed to the providers.
/// * `days`: maximum number of candidate days.
/// * `light`, `cloud`: condition providers.
/// * `weights`: scoring weights.
///
/// Return
/// ------
/// * At most `days` entries sorted by descending score.
pub fn optimal_viewing_times<L, C>(
    event: &CelestialEventWindow,
    location: &Location,
    days: u32,
    light: &L,
    cloud: &C,
    weights: &ScoringWeights,
) -> Result<Vec<OptimalViewingEntry>, SkycastError>
where
    L: LightPollutionProvider + ?Sized,
    C: CloudCoverProvider + ?Sized,
{
    let span = days_between(event.start_date(), event.end_date()).floor() as u32 + 1;
    let mut entries = Vec::with_capacity(days.min(span) as usize);

    for offset in 0..days {
        let date = add_days(event.start_date(), offset as i64);
        if date > event.end_date() {
            break;
        }

        let light_pollution = light.light_pollution(location).map_err(|source| {
            SkycastError::CollaboratorUnavailable {
                collaborator: "light_pollution",
                source,
            }
        })?;
        let cloud_cover = cloud.cloud_cover(location, date).map_err(|source| {
            SkycastError::CollaboratorUnavailable {
                collaborator: "cloud_cover",
                source,
            }
        })?;

        let conditions = ViewingConditions::new(moon_phase(date), light_pollution, cloud_cover)?;
        let score = viewing_score(&conditions, event.event_type(), weights);
        trace!("{date}: {conditions:?} -> {score:.2}");

        entries.push(OptimalViewingEntry {
            date,
            score,
            conditions,
        });
    }

    entries.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.date.cmp(&b.date)));

    debug!(
        "ranked {} day(s) of a {} window starting {}",
        entries.len(),
        event.event_type(),
        event.start_date()
    );

    Ok(entries)
}

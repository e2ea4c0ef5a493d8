use hifitime::Epoch;

use crate::astronomy::moon::moon_phase;
use crate::config::MeteorModel;
use crate::constants::{clamp_to, SCORE_RANGE};
use crate::event::CelestialEventWindow;
use crate::time::{add_days, days_between};

/// Meteor shower intensity in `[0, 10]` at `date`, with the moon phase of that date.
///
/// ```text
/// intensity = peak · exp(−|Δt| / τ) · (1 − phase/100 · w)
/// ```
/// with `Δt` the distance to the peak in days, `τ` = [`MeteorModel::decay_days`] and
/// `w` = [`MeteorModel::moon_penalty_weight`].
pub fn meteor_shower_intensity(
    shower: &CelestialEventWindow,
    date: Epoch,
    model: &MeteorModel,
) -> f64 {
    meteor_shower_intensity_with_phase(shower, date, moon_phase(date), model)
}

/// Same as [`meteor_shower_intensity`] with an explicit moon phase (percent).
pub fn meteor_shower_intensity_with_phase(
    shower: &CelestialEventWindow,
    date: Epoch,
    moon_phase: f64,
    model: &MeteorModel,
) -> f64 {
    let days_from_peak = days_between(shower.peak_date(), date).abs();
    let decayed = shower.peak_intensity() * (-days_from_peak / model.decay_days).exp();
    let lunar_factor = 1.0 - moon_phase / 100.0 * model.moon_penalty_weight;
    clamp_to(decayed * lunar_factor, SCORE_RANGE)
}

/// Daily intensity over the whole window, from `start_date` to `end_date` inclusive.
pub fn intensity_profile(shower: &CelestialEventWindow, model: &MeteorModel) -> Vec<(Epoch, f64)> {
    let span = days_between(shower.start_date(), shower.end_date()).floor() as i64;
    (0..=span)
        .map(|d| add_days(shower.start_date(), d))
        .map(|date| (date, meteor_shower_intensity(shower, date, model)))
        .collect()
}

//! # Calendar helpers
//!
//! Thin wrappers around [`hifitime::Epoch`] used by every prediction module: parsing,
//! whole-day stepping, fractional day differences and the TT Modified Julian Date fed
//! to the ephemeris.
//!
//! All timestamps are interpreted on the UTC scale; ephemeris arguments are computed on
//! the TT scale as the mean elements require.

use hifitime::{Epoch, Unit};
use std::str::FromStr;

use crate::constants::{MJD, REFERENCE_NEW_MOON, SECONDS_PER_DAY};
use crate::skycast_errors::SkycastError;

/// Parse a date string (e.g. `"2024-12-14T00:00:00 UTC"`) into an [`Epoch`].
///
/// Arguments
/// ---------
/// * `date`: any representation accepted by [`Epoch::from_str`].
///
/// Return
/// ------
/// * the parsed epoch, or [`SkycastError::InvalidDate`] carrying the rejected input.
pub fn parse_epoch(date: &str) -> Result<Epoch, SkycastError> {
    Epoch::from_str(date.trim()).map_err(|e| SkycastError::InvalidDate(format!("{date}: {e}")))
}

/// Signed number of (fractional) days from `from` to `to`.
#[inline]
pub fn days_between(from: Epoch, to: Epoch) -> f64 {
    (to - from).to_seconds() / SECONDS_PER_DAY
}

/// Shift an epoch by a whole number of days.
#[inline]
pub fn add_days(epoch: Epoch, days: i64) -> Epoch {
    epoch + Unit::Day * days
}

/// Modified Julian Date of `epoch` in the TT time scale.
#[inline]
pub fn epoch_to_mjd_tt(epoch: Epoch) -> MJD {
    epoch.to_mjd_tt_days()
}

/// Origin of the lunar phase cycle (see [`REFERENCE_NEW_MOON`]).
pub fn reference_new_moon() -> Epoch {
    let (year, month, day, hour, minute) = REFERENCE_NEW_MOON;
    Epoch::from_gregorian_utc_hms(year, month, day, hour, minute, 0)
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_days_between_and_add_days() {
        let start = Epoch::from_gregorian_utc_at_midnight(2024, 12, 10);
        let end = add_days(start, 4);
        assert_eq!(end, Epoch::from_gregorian_utc_at_midnight(2024, 12, 14));
        assert_abs_diff_eq!(days_between(start, end), 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(days_between(end, start), -4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_month_and_year_rollover() {
        let start = Epoch::from_gregorian_utc_at_midnight(2024, 12, 30);
        assert_eq!(
            add_days(start, 3),
            Epoch::from_gregorian_utc_at_midnight(2025, 1, 2)
        );
    }

    #[test]
    fn test_parse_epoch() {
        let parsed = parse_epoch("2024-12-14T00:00:00 UTC").unwrap();
        assert_eq!(parsed, Epoch::from_gregorian_utc_at_midnight(2024, 12, 14));

        let err = parse_epoch("not a date").unwrap_err();
        assert!(matches!(err, SkycastError::InvalidDate(_)));
    }

    #[test]
    fn test_mjd_tt() {
        // J2000.0 is defined in TT
        let j2000 = Epoch::from_mjd_in_time_scale(crate::constants::T2000, hifitime::TimeScale::TT);
        assert_abs_diff_eq!(epoch_to_mjd_tt(j2000), crate::constants::T2000, epsilon = 1e-9);
    }
}

use hifitime::Epoch;

use crate::constants::{MOON_PHASE_RANGE, SYNODIC_MONTH};
use crate::time::{days_between, reference_new_moon};

/// Moon phase at `date`, as the percentage of the synodic month elapsed since the last
/// new moon (`0` = new moon, `50` ≈ full moon, values just below `100` ≈ waning crescent).
///
/// The phase is `((t − t₀) mod P) / P · 100` with `t₀` the reference new moon of
/// 2000-01-06T18:14 UTC and `P` the mean synodic month. The Euclidean remainder keeps the
/// result in `[0, 100)` for dates before the reference as well, so the function only
/// wraps once per cycle.
pub fn moon_phase(date: Epoch) -> f64 {
    let days = days_between(reference_new_moon(), date);
    let phase = days.rem_euclid(SYNODIC_MONTH) / SYNODIC_MONTH * 100.0;
    // rem_euclid may round up to the modulus itself for tiny negative inputs
    if phase >= MOON_PHASE_RANGE.1 {
        MOON_PHASE_RANGE.0
    } else {
        phase
    }
}

#[cfg(test)]
mod moon_test {
    use super::*;
    use crate::time::add_days;
    use approx::assert_abs_diff_eq;
    use hifitime::Unit;

    #[test]
    fn test_phase_at_reference_new_moon() {
        assert_abs_diff_eq!(moon_phase(reference_new_moon()), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_half_cycle_is_fifty_percent() {
        let half = reference_new_moon() + Unit::Day * (SYNODIC_MONTH / 2.0);
        assert_abs_diff_eq!(moon_phase(half), 50.0, epsilon = 1e-6);
    }

    #[test]
    fn test_dates_before_reference_stay_in_range() {
        let before = add_days(reference_new_moon(), -3);
        let phase = moon_phase(before);
        assert_abs_diff_eq!(phase, (SYNODIC_MONTH - 3.0) / SYNODIC_MONTH * 100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_continuity_across_calendar_months() {
        let mut date = Epoch::from_gregorian_utc_at_midnight(2024, 1, 1);
        let mut previous = moon_phase(date);
        let step = 100.0 / SYNODIC_MONTH;
        for _ in 0..400 {
            date = add_days(date, 1);
            let current = moon_phase(date);
            let delta = (current - previous).rem_euclid(100.0);
            assert_abs_diff_eq!(delta, step, epsilon = 1e-6);
            previous = current;
        }
    }
}

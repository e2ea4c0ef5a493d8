use hifitime::Epoch;
use itertools::Itertools;
use log::debug;

use crate::astronomy::planets::{Planet, PlanetPosition, PositionProvider};
use crate::constants::{Degree, RADEG};

/// Result of a conjunction check between two planets.
///
/// `separation` is the flat distance in the (right ascension, declination) plane,
/// `sqrt(Δα² + Δδ²)` in degrees, and is what `is_conjunction` is decided on.
/// `angular_separation` is the true great-circle separation, reported alongside
/// for callers that need it.
#[derive(Debug, Clone, PartialEq)]
pub struct Conjunction {
    pub separation: Degree,
    pub angular_separation: Degree,
    pub is_conjunction: bool,
    pub planets: [Planet; 2],
    pub date: Epoch,
}

/// Flat (RA, Dec) distance, in degrees. No wrap-around on right ascension.
pub fn flat_separation(a: &PlanetPosition, b: &PlanetPosition) -> Degree {
    let d_ra = a.right_ascension - b.right_ascension;
    let d_dec = a.declination - b.declination;
    (d_ra * d_ra + d_dec * d_dec).sqrt()
}

/// Great-circle separation between two positions, in degrees (haversine form).
pub fn angular_separation(a: &PlanetPosition, b: &PlanetPosition) -> Degree {
    let (ra1, dec1) = (a.right_ascension * RADEG, a.declination * RADEG);
    let (ra2, dec2) = (b.right_ascension * RADEG, b.declination * RADEG);

    let hav = ((dec2 - dec1) / 2.0).sin().powi(2)
        + dec1.cos() * dec2.cos() * ((ra2 - ra1) / 2.0).sin().powi(2);
    2.0 * hav.sqrt().clamp(0.0, 1.0).asin() / RADEG
}

/// Check two planets, given by name, for a conjunction at `date`.
///
/// Arguments
/// ---------
/// * `provider`: source of planet positions.
/// * `planet_a`, `planet_b`: planet names, matched case-insensitively.
/// * `date`: instant of the check.
/// * `threshold`: a conjunction is flagged when `separation < threshold` (degrees).
///
/// Return
/// ------
/// * `None` when either name is unknown or either position is unavailable.
pub fn conjunction<P: PositionProvider>(
    provider: &P,
    planet_a: &str,
    planet_b: &str,
    date: Epoch,
    threshold: Degree,
) -> Option<Conjunction> {
    let a: Planet = planet_a.parse().ok()?;
    let b: Planet = planet_b.parse().ok()?;
    planet_conjunction(provider, a, b, date, threshold)
}

/// Same as [`conjunction`] for already-resolved planets.
pub fn planet_conjunction<P: PositionProvider>(
    provider: &P,
    a: Planet,
    b: Planet,
    date: Epoch,
    threshold: Degree,
) -> Option<Conjunction> {
    let pos_a = provider.position(a, date)?;
    let pos_b = provider.position(b, date)?;

    let separation = flat_separation(&pos_a, &pos_b);
    Some(Conjunction {
        separation,
        angular_separation: angular_separation(&pos_a, &pos_b),
        is_conjunction: separation < threshold,
        planets: [a, b],
        date,
    })
}

/// Scan every pair of naked-eye planets and keep those in conjunction at `date`.
///
/// Pairs are visited in the order of [`Planet::NAKED_EYE`]; pairs whose positions are
/// unavailable are skipped.
pub fn find_conjunctions<P: PositionProvider>(
    provider: &P,
    date: Epoch,
    threshold: Degree,
) -> Vec<Conjunction> {
    let found: Vec<Conjunction> = Planet::NAKED_EYE
        .into_iter()
        .tuple_combinations::<(_, _)>()
        .filter_map(|(a, b)| planet_conjunction(provider, a, b, date, threshold))
        .filter(|c| c.is_conjunction)
        .collect();

    debug!("{} conjunction(s) found at {date}", found.len());
    found
}

#[cfg(test)]
mod conjunction_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn fixed(planet: Planet, _: Epoch) -> Option<PlanetPosition> {
        let (ra, dec) = match planet {
            Planet::Mercury => (10.0, 5.0),
            Planet::Venus => (13.0, 9.0),
            Planet::Mars => (200.0, -10.0),
            Planet::Jupiter => (201.0, -10.5),
            _ => return None,
        };
        Some(PlanetPosition {
            right_ascension: ra,
            declination: dec,
            magnitude: 0.0,
        })
    }

    fn date() -> Epoch {
        Epoch::from_gregorian_utc_at_midnight(2024, 1, 1)
    }

    #[test]
    fn test_flat_separation_is_euclidean() {
        let c = conjunction(&fixed, "Mercury", "Venus", date(), 5.0).unwrap();
        assert_abs_diff_eq!(c.separation, 5.0, epsilon = 1e-12);
        // strictly below the threshold is required
        assert!(!c.is_conjunction);
        assert_eq!(c.planets, [Planet::Mercury, Planet::Venus]);
        assert_eq!(c.date, date());

        let c = conjunction(&fixed, "mars", "JUPITER", date(), 5.0).unwrap();
        assert!(c.is_conjunction);
    }

    #[test]
    fn test_unknown_or_unavailable_planet() {
        assert_eq!(conjunction(&fixed, "Mercury", "Vulcan", date(), 5.0), None);
        assert_eq!(conjunction(&fixed, "Mercury", "Saturn", date(), 5.0), None);
    }

    #[test]
    fn test_angular_separation() {
        let a = PlanetPosition {
            right_ascension: 359.5,
            declination: 0.0,
            magnitude: 0.0,
        };
        let b = PlanetPosition {
            right_ascension: 0.5,
            declination: 0.0,
            magnitude: 0.0,
        };
        assert_abs_diff_eq!(angular_separation(&a, &b), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(flat_separation(&a, &b), 359.0, epsilon = 1e-9);

        let pole = PlanetPosition {
            right_ascension: 0.0,
            declination: 90.0,
            magnitude: 0.0,
        };
        assert_abs_diff_eq!(angular_separation(&a, &pole), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_find_conjunctions_keeps_flagged_pairs() {
        let found = find_conjunctions(&fixed, date(), 5.0);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].planets, [Planet::Mars, Planet::Jupiter]);
    }
}

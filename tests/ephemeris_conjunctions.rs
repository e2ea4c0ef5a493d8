mod common;

use approx::assert_abs_diff_eq;
use skycast::astronomy::conjunction::{conjunction, find_conjunctions};
use skycast::astronomy::planets::{CachedPositions, KeplerianEphemeris, Planet, PositionProvider};
use skycast::Skycast;

use crate::common::utc;

#[test]
fn great_conjunction_of_2020() {
    let c = conjunction(
        &KeplerianEphemeris,
        "Jupiter",
        "Saturn",
        utc(2020, 12, 21),
        5.0,
    )
    .unwrap();

    assert!(c.is_conjunction);
    assert!(c.separation < 1.0, "{c:?}");
    assert!(c.angular_separation < 0.5, "{c:?}");
    assert_eq!(c.planets, [Planet::Jupiter, Planet::Saturn]);
    assert_eq!(c.date, utc(2020, 12, 21));
}

#[test]
fn venus_jupiter_march_2023() {
    let sky = Skycast::new();
    let c = sky.conjunction("venus", "jupiter", utc(2023, 3, 2)).unwrap();
    assert!(c.is_conjunction);
    assert!(c.separation < 2.0, "{c:?}");
}

#[test]
fn jupiter_and_saturn_apart_in_2024() {
    let c = Skycast::new()
        .conjunction("Jupiter", "Saturn", utc(2024, 1, 1))
        .unwrap();
    assert!(!c.is_conjunction);
    assert!(c.separation > 30.0, "{c:?}");
}

#[test]
fn unknown_planet_gives_no_result() {
    let sky = Skycast::new();
    assert!(sky.conjunction("Jupiter", "Vulcan", utc(2024, 1, 1)).is_none());
    assert!(sky.conjunction("", "Saturn", utc(2024, 1, 1)).is_none());
}

#[test]
fn separation_is_symmetric() {
    let date = utc(2022, 4, 30);
    let ab = conjunction(&KeplerianEphemeris, "Venus", "Jupiter", date, 5.0).unwrap();
    let ba = conjunction(&KeplerianEphemeris, "Jupiter", "Venus", date, 5.0).unwrap();
    assert_abs_diff_eq!(ab.separation, ba.separation, epsilon = 1e-12);
    assert_eq!(ab.is_conjunction, ba.is_conjunction);
    assert_eq!(ba.planets, [Planet::Jupiter, Planet::Venus]);
}

#[test]
fn mars_at_the_2025_opposition() {
    // opposite the Sun in Gemini/Cancer, RA ≈ 7h50m, Dec ≈ +25°
    let mars = KeplerianEphemeris
        .position(Planet::Mars, utc(2025, 1, 16))
        .unwrap();
    assert!((110.0..125.0).contains(&mars.right_ascension), "{mars:?}");
    assert!((21.0..29.0).contains(&mars.declination), "{mars:?}");
    assert!(mars.magnitude < 0.0, "{mars:?}");
}

#[test]
fn scan_finds_the_great_conjunction() {
    let cached = CachedPositions::new(KeplerianEphemeris);
    let found = find_conjunctions(&cached, utc(2020, 12, 21), 5.0);
    assert!(found
        .iter()
        .any(|c| c.planets == [Planet::Jupiter, Planet::Saturn]));
    assert!(found.iter().all(|c| c.is_conjunction && c.separation < 5.0));
    assert_eq!(cached.len(), Planet::NAKED_EYE.len());
}

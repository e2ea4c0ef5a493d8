//! # Keplerian orbital elements
//!
//! This module defines [`KeplerianElements`], the classical element set `(a, e, i, Ω, ω, M)`,
//! and [`MeanElementRates`], the secularly varying mean elements used to place the major
//! planets without a numerical ephemeris file.
//!
//! ## Units
//!
//! - Lengths: **AU**
//! - Angles: **radians** in [`KeplerianElements`], **degrees** in [`MeanElementRates`]
//! - Time: **MJD** (TT) for the reference epoch, **Julian centuries** for the rates
//!
//! ## Accuracy
//!
//! The mean elements come from the JPL table *Keplerian Elements for Approximate Positions
//! of the Major Planets* (E. M. Standish), fitted over 1800–2050. Within that interval the
//! positions are good to a few arcminutes for the inner planets and to well under a degree
//! for the giants, which is ample for conjunction screening.

use nalgebra::Vector3;

use crate::{
    constants::{AstronomicalUnit, Degree, MJD, RADEG, T2000},
    kepler::{principal_angle, solve_kepler_equation},
    ref_system::rotmt,
    skycast_errors::SkycastError,
};

/// Interval of the mean-element fit, MJD (TT) of 1800-01-01 and 2051-01-01.
pub const MEAN_ELEMENTS_VALIDITY: (MJD, MJD) = (-21504.0, 70172.0);

/// Keplerian orbital elements (osculating, two-body, heliocentric J2000 ecliptic).
///
/// Units
/// -----
/// * `reference_epoch`: MJD (TT).
/// * `semi_major_axis`: AU.
/// * `eccentricity`: unitless.
/// * `inclination`, `ascending_node_longitude`, `periapsis_argument`, `mean_anomaly`: radians.
#[derive(Debug, PartialEq, Clone)]
pub struct KeplerianElements {
    pub reference_epoch: MJD,
    pub semi_major_axis: AstronomicalUnit,
    pub eccentricity: f64,
    pub inclination: f64,
    pub ascending_node_longitude: f64,
    pub periapsis_argument: f64,
    pub mean_anomaly: f64,
}

impl KeplerianElements {
    /// Heliocentric position at `reference_epoch`, in the J2000 ecliptic frame (AU).
    ///
    /// Solves Kepler's equation for the eccentric anomaly, builds the position in the
    /// orbital plane, then applies `R_z(Ω) · R_x(i) · R_z(ω)`.
    pub fn heliocentric_position(&self) -> Result<Vector3<f64>, SkycastError> {
        let e = self.eccentricity;
        let ecc_anomaly = solve_kepler_equation(self.mean_anomaly, e)?;

        let x_orb = self.semi_major_axis * (ecc_anomaly.cos() - e);
        let y_orb = self.semi_major_axis * (1.0 - e * e).sqrt() * ecc_anomaly.sin();
        let in_plane = Vector3::new(x_orb, y_orb, 0.0);

        let rotation = rotmt(self.ascending_node_longitude, 2)
            * rotmt(self.inclination, 0)
            * rotmt(self.periapsis_argument, 2);

        Ok(rotation * in_plane)
    }
}

/// Mean elements at J2000 together with their rates per Julian century.
///
/// Angles are in degrees, the semi-major axis in AU. `mean_longitude` is `L = M + ϖ` and
/// `perihelion_longitude` is `ϖ = ω + Ω`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct MeanElementRates {
    pub semi_major_axis: [AstronomicalUnit; 2],
    pub eccentricity: [f64; 2],
    pub inclination: [Degree; 2],
    pub mean_longitude: [Degree; 2],
    pub perihelion_longitude: [Degree; 2],
    pub ascending_node_longitude: [Degree; 2],
}

impl MeanElementRates {
    /// Evaluate the mean elements at `tjm` (MJD, TT).
    pub fn at(&self, tjm: MJD) -> KeplerianElements {
        let t = (tjm - T2000) / crate::constants::DAYS_PER_CENTURY;
        let eval = |[value, rate]: [f64; 2]| value + rate * t;

        let node = eval(self.ascending_node_longitude) * RADEG;
        let varpi = eval(self.perihelion_longitude) * RADEG;
        let mean_longitude = eval(self.mean_longitude) * RADEG;

        KeplerianElements {
            reference_epoch: tjm,
            semi_major_axis: eval(self.semi_major_axis),
            eccentricity: eval(self.eccentricity),
            inclination: eval(self.inclination) * RADEG,
            ascending_node_longitude: principal_angle(node),
            periapsis_argument: principal_angle(varpi - node),
            mean_anomaly: principal_angle(mean_longitude - varpi),
        }
    }
}

/// Earth–Moon barycentre, used as the observer location.
pub const EARTH_MOON_BARYCENTER: MeanElementRates = MeanElementRates {
    semi_major_axis: [1.00000261, 0.00000562],
    eccentricity: [0.01671123, -0.00004392],
    inclination: [-0.00001531, -0.01294668],
    mean_longitude: [100.46457166, 35999.37244981],
    perihelion_longitude: [102.93768193, 0.32327364],
    ascending_node_longitude: [0.0, 0.0],
};

pub const MERCURY: MeanElementRates = MeanElementRates {
    semi_major_axis: [0.38709927, 0.00000037],
    eccentricity: [0.20563593, 0.00001906],
    inclination: [7.00497902, -0.00594749],
    mean_longitude: [252.25032350, 149472.67411175],
    perihelion_longitude: [77.45779628, 0.16047689],
    ascending_node_longitude: [48.33076593, -0.12534081],
};

pub const VENUS: MeanElementRates = MeanElementRates {
    semi_major_axis: [0.72333566, 0.00000390],
    eccentricity: [0.00677672, -0.00004107],
    inclination: [3.39467605, -0.00078890],
    mean_longitude: [181.97909950, 58517.81538729],
    perihelion_longitude: [131.60246718, 0.00268329],
    ascending_node_longitude: [76.67984255, -0.27769418],
};

pub const MARS: MeanElementRates = MeanElementRates {
    semi_major_axis: [1.52371034, 0.00001847],
    eccentricity: [0.09339410, 0.00007882],
    inclination: [1.84969142, -0.00813131],
    mean_longitude: [-4.55343205, 19140.30268499],
    perihelion_longitude: [-23.94362959, 0.44441088],
    ascending_node_longitude: [49.55953891, -0.29257343],
};

pub const JUPITER: MeanElementRates = MeanElementRates {
    semi_major_axis: [5.20288700, -0.00011607],
    eccentricity: [0.04838624, -0.00013253],
    inclination: [1.30439695, -0.00183714],
    mean_longitude: [34.39644051, 3034.74612775],
    perihelion_longitude: [14.72847983, 0.21252668],
    ascending_node_longitude: [100.47390909, 0.20469106],
};

pub const SATURN: MeanElementRates = MeanElementRates {
    semi_major_axis: [9.53667594, -0.00125060],
    eccentricity: [0.05386179, -0.00050991],
    inclination: [2.48599187, 0.00193609],
    mean_longitude: [49.95424423, 1222.49362201],
    perihelion_longitude: [92.59887831, -0.41897216],
    ascending_node_longitude: [113.66242448, -0.28867794],
};

pub const URANUS: MeanElementRates = MeanElementRates {
    semi_major_axis: [19.18916464, -0.00196176],
    eccentricity: [0.04725744, -0.00004397],
    inclination: [0.77263783, -0.00242939],
    mean_longitude: [313.23810451, 428.48202785],
    perihelion_longitude: [170.95427630, 0.40805281],
    ascending_node_longitude: [74.01692503, 0.04240589],
};

pub const NEPTUNE: MeanElementRates = MeanElementRates {
    semi_major_axis: [30.06992276, 0.00026291],
    eccentricity: [0.00859048, 0.00005105],
    inclination: [1.77004347, 0.00035372],
    mean_longitude: [-55.12002969, 218.45945325],
    perihelion_longitude: [44.96476227, -0.32241464],
    ascending_node_longitude: [131.78422574, -0.01262724],
};

#[cfg(test)]
mod keplerian_element_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mean_elements_at_j2000() {
        let kep = EARTH_MOON_BARYCENTER.at(T2000);
        assert_eq!(kep.reference_epoch, T2000);
        assert_eq!(kep.semi_major_axis, 1.00000261);
        assert_abs_diff_eq!(
            kep.mean_anomaly,
            (100.46457166 - 102.93768193_f64).to_radians().rem_euclid(std::f64::consts::TAU),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_circular_orbit_radius() {
        let kep = KeplerianElements {
            reference_epoch: T2000,
            semi_major_axis: 2.0,
            eccentricity: 0.0,
            inclination: 0.3,
            ascending_node_longitude: 1.0,
            periapsis_argument: 0.5,
            mean_anomaly: 2.0,
        };
        let pos = kep.heliocentric_position().unwrap();
        assert_abs_diff_eq!(pos.norm(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_perihelion_distance() {
        // at M = 0 the body sits at perihelion, r = a (1 − e)
        let kep = KeplerianElements {
            reference_epoch: T2000,
            semi_major_axis: 1.5,
            eccentricity: 0.2,
            inclination: 0.0,
            ascending_node_longitude: 0.0,
            periapsis_argument: 0.0,
            mean_anomaly: 0.0,
        };
        let pos = kep.heliocentric_position().unwrap();
        assert_abs_diff_eq!(pos.x, 1.2, epsilon = 1e-12);
        assert_abs_diff_eq!(pos.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pos.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_earth_distance_stays_near_one_au() {
        for k in 0..12 {
            let tjm = T2000 + 30.0 * k as f64;
            let r = EARTH_MOON_BARYCENTER
                .at(tjm)
                .heliocentric_position()
                .unwrap()
                .norm();
            assert!((0.98..=1.02).contains(&r), "r = {r}");
        }
    }
}

use roots::{find_root_newton_raphson, SimpleConvergency};

use crate::constants::{Radian, DPI};
use crate::skycast_errors::SkycastError;
use std::f64::consts::PI;

/// Retourne la valeur principale d'un angle en radians dans [0, 2π).
pub(crate) fn principal_angle(a: f64) -> f64 {
    a.rem_euclid(DPI)
}

/// Retourne la différence principale entre deux angles dans [-π, π].
pub(crate) fn angle_diff(a: f64, b: f64) -> f64 {
    let a = principal_angle(a);
    let b = principal_angle(b);

    let mut diff = a - b;

    if diff > PI {
        diff -= DPI;
    } else if diff < -PI {
        diff += DPI;
    }

    diff
}

/// Solve Kepler's equation `E − e·sin(E) = M` for the eccentric anomaly of an elliptic orbit.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly `M` in radians (any value, reduced to [-π, π] internally).
/// * `eccentricity`: orbital eccentricity, `0 ≤ e < 1`.
///
/// Return
/// ------
/// * The eccentric anomaly `E` in radians, on the same revolution as the reduced `M`,
///   or [`SkycastError::KeplerSolverFailed`] when Newton–Raphson does not converge.
pub(crate) fn solve_kepler_equation(
    mean_anomaly: Radian,
    eccentricity: f64,
) -> Result<Radian, SkycastError> {
    let m = angle_diff(mean_anomaly, 0.0);

    let f = |e_anom: f64| -> f64 { e_anom - eccentricity * e_anom.sin() - m };
    let df = |e_anom: f64| -> f64 { 1.0 - eccentricity * e_anom.cos() };

    // Starting point recommended for moderate eccentricities
    let x0 = if eccentricity > 0.8 {
        PI.copysign(m)
    } else {
        m + eccentricity * m.sin()
    };

    let mut tol = SimpleConvergency {
        eps: f64::EPSILON * 1e2,
        max_iter: 30,
    };

    Ok(find_root_newton_raphson(x0, &f, &df, &mut tol)?)
}

#[cfg(test)]
mod kepler_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_principal_angle() {
        assert_abs_diff_eq!(principal_angle(-PI / 2.0), 1.5 * PI, epsilon = 1e-15);
        assert_abs_diff_eq!(principal_angle(5.0 * PI), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_diff() {
        assert_abs_diff_eq!(angle_diff(0.1, DPI - 0.1), 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(angle_diff(DPI - 0.1, 0.1), -0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_kepler_equation_circular() {
        let e_anom = solve_kepler_equation(1.2, 0.0).unwrap();
        assert_abs_diff_eq!(e_anom, 1.2, epsilon = 1e-14);
    }

    #[test]
    fn test_kepler_equation_residual() {
        for &ecc in &[0.0167, 0.2056, 0.6, 0.95] {
            for k in 0..24 {
                let m = -PI + k as f64 * DPI / 24.0;
                let e_anom = solve_kepler_equation(m, ecc).unwrap();
                let reduced = angle_diff(m, 0.0);
                assert_abs_diff_eq!(e_anom - ecc * e_anom.sin(), reduced, epsilon = 1e-10);
            }
        }
    }
}

//! # Reference frames
//!
//! Frame utilities needed to turn heliocentric ecliptic positions into the geocentric
//! equatorial coordinates (right ascension, declination) reported by the ephemeris.
//!
//! Only the mean J2000 frames are supported: precession and nutation are far below the
//! accuracy of the mean orbital elements used upstream.

use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::{Radian, DAYS_PER_CENTURY, DPI, MJD, RADSEC, T2000};

/// Compute the mean obliquity of the ecliptic at a given epoch (IAU 1976 polynomial).
///
/// ```text
/// ε(t) = ε₀ + ε₁·T + ε₂·T² + ε₃·T³
/// ```
/// where `T = (tjm - T2000) / 36525.0` and the coefficients are given in arcseconds.
///
/// Arguments
/// ---------
/// * `tjm`: Modified Julian Date (TT).
///
/// Return
/// ------
/// * The mean obliquity in radians.
pub fn obleq(tjm: MJD) -> Radian {
    let ob0 = ((23.0 * 3600.0 + 26.0 * 60.0) + 21.448) * RADSEC;
    let ob1 = -46.815 * RADSEC;
    let ob2 = -0.0006 * RADSEC;
    let ob3 = 0.00181 * RADSEC;

    let t = (tjm - T2000) / DAYS_PER_CENTURY;

    ((ob3 * t + ob2) * t + ob1) * t + ob0
}

/// Construct an active rotation matrix of angle `alpha` (radians) around axis `k`
/// (`0` → X, `1` → Y, `2` → Z), counter-clockwise when looking down the axis.
///
/// # Panics
///
/// Panics if `k > 2`.
pub fn rotmt(alpha: f64, k: usize) -> Matrix3<f64> {
    let axis = match k {
        0 => Vector3::x_axis(),
        1 => Vector3::y_axis(),
        2 => Vector3::z_axis(),
        _ => panic!("**** ROTMT: invalid axis index {k} (must be 0,1,2) ****"),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Rotate a vector from the mean ecliptic frame to the mean equatorial frame of the
/// same epoch, given the obliquity `eps` in radians.
pub fn ecliptic_to_equatorial(ecliptic: &Vector3<f64>, eps: Radian) -> Vector3<f64> {
    rotmt(eps, 0) * ecliptic
}

/// Convert a 3D Cartesian position vector to right ascension, declination and norm.
///
/// Returns
/// --------
/// * Tuple `(α, δ, ρ)`:
///     - `α`: right ascension in radians, in the range [0, 2π).
///     - `δ`: declination in radians, in the range [−π/2, +π/2].
///     - `ρ`: Euclidean norm of the vector.
///
/// A zero vector maps to `(0.0, 0.0, 0.0)`.
pub fn cartesian_to_radec(cartesian_position: &Vector3<f64>) -> (f64, f64, f64) {
    let pos_norm = cartesian_position.norm();
    if pos_norm == 0. {
        return (0.0, 0.0, pos_norm);
    }

    let delta = (cartesian_position.z / pos_norm).clamp(-1.0, 1.0).asin();

    let cos_delta = delta.cos();
    if cos_delta == 0.0 {
        return (0.0, delta, pos_norm);
    }

    let cos_alpha = cartesian_position.x / (pos_norm * cos_delta);
    let sin_alpha = cartesian_position.y / (pos_norm * cos_delta);
    let alpha = sin_alpha.atan2(cos_alpha);
    let alpha = if alpha < 0.0 { alpha + DPI } else { alpha };
    (alpha, delta, pos_norm)
}

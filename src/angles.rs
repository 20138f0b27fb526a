//! Angle helpers shared by the ephemeris engine and the boundary index.
//!
//! Degrees are the public unit of the crate; radians are only used inside the
//! trigonometric kernels. All wrapping uses [`f64::rem_euclid`], so negative
//! inputs land in the expected interval.

use crate::constants::{Degree, Radian, DPI, RADEG};

/// Degrees → radians.
#[inline]
pub fn deg_to_rad(deg: Degree) -> Radian {
    deg * RADEG
}

/// Radians → degrees.
#[inline]
pub fn rad_to_deg(rad: Radian) -> Degree {
    rad / RADEG
}

/// Wrap an angle in degrees to `[0, 360)`.
///
/// `rem_euclid` can round up to exactly `360.0` for tiny negative inputs
/// (e.g. `-1e-15`); that case is folded back to `0.0`.
#[inline]
pub fn wrap_360(deg: Degree) -> Degree {
    let w = deg.rem_euclid(360.0);
    if w >= 360.0 {
        0.0
    } else {
        w
    }
}

/// Wrap an angle in degrees to `[-180, 180)`.
#[inline]
pub fn wrap_180(deg: Degree) -> Degree {
    wrap_360(deg + 180.0) - 180.0
}

/// Principal value of an angle in radians, in `[0, 2π)`.
#[inline]
pub fn principal_angle(a: Radian) -> Radian {
    let w = a.rem_euclid(DPI);
    if w >= DPI {
        0.0
    } else {
        w
    }
}

/// Clamp `value` to `[min, max]`. NaN passes through unchanged.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.clamp(min, max)
}

/// Great-circle separation between two directions given in degrees.
///
/// Uses the Vincenty form of the haversine formula, which stays well
/// conditioned for both tiny and antipodal separations.
///
/// Arguments
/// ---------
/// * `ra1`, `dec1`: first direction (degrees)
/// * `ra2`, `dec2`: second direction (degrees)
///
/// Return
/// ------
/// * Separation in degrees, in `[0, 180]`
pub fn angular_separation(ra1: Degree, dec1: Degree, ra2: Degree, dec2: Degree) -> Degree {
    let (sd1, cd1) = deg_to_rad(dec1).sin_cos();
    let (sd2, cd2) = deg_to_rad(dec2).sin_cos();
    let (sdra, cdra) = deg_to_rad(ra2 - ra1).sin_cos();

    let num1 = cd2 * sdra;
    let num2 = cd1 * sd2 - sd1 * cd2 * cdra;
    let den = sd1 * sd2 + cd1 * cd2 * cdra;

    rad_to_deg(num1.hypot(num2).atan2(den))
}

#[cfg(test)]
mod angles_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_wrap_360() {
        assert_eq!(wrap_360(0.0), 0.0);
        assert_eq!(wrap_360(360.0), 0.0);
        assert_eq!(wrap_360(-10.0), 350.0);
        assert_eq!(wrap_360(725.0), 5.0);
        assert!(wrap_360(-1e-17) < 360.0);
    }

    #[test]
    fn test_wrap_180() {
        assert_eq!(wrap_180(190.0), -170.0);
        assert_eq!(wrap_180(-190.0), 170.0);
        assert_eq!(wrap_180(180.0), -180.0);
        assert_eq!(wrap_180(45.0), 45.0);
    }

    #[test]
    fn test_principal_angle() {
        assert_abs_diff_eq!(principal_angle(-std::f64::consts::PI), std::f64::consts::PI);
        assert_abs_diff_eq!(principal_angle(3.0 * DPI + 1.0), 1.0, epsilon = 1e-12);
        assert!(principal_angle(-1e-300) < DPI);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(1.2, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-0.1, 0.0, 1.0), 0.0);
        assert!(clamp(f64::NAN, 0.0, 1.0).is_nan());
    }

    #[test]
    fn test_angular_separation() {
        assert_abs_diff_eq!(angular_separation(10.0, 0.0, 20.0, 0.0), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(angular_separation(359.0, 0.0, 1.0, 0.0), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(angular_separation(0.0, 90.0, 123.0, 89.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(angular_separation(0.0, 0.0, 180.0, 0.0), 180.0, epsilon = 1e-12);
    }

    #[test]
    fn test_deg_rad_roundtrip() {
        assert_abs_diff_eq!(deg_to_rad(180.0), std::f64::consts::PI);
        assert_abs_diff_eq!(rad_to_deg(std::f64::consts::FRAC_PI_2), 90.0);
    }
}

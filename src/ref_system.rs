use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::angles::deg_to_rad;
use crate::constants::{Degree, Radian};

/// Principal axis of an elementary rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Compute the mean obliquity of the ecliptic at a given epoch.
///
/// Low-order cubic in Julian centuries since J2000, consistent with the
/// degree-level accuracy of the analytic orbit model:
///
/// ```text
/// ε(T) = 23.439291° − 0.0130042°·T − 1.64e-7°·T² + 5.04e-7°·T³
/// ```
///
/// The polynomial is evaluated with Horner's method.
///
/// Arguments
/// ---------
/// * `centuries`: Julian centuries since J2000 (`T = d / 36525`).
///
/// Returns
/// --------
/// * Mean obliquity of the ecliptic in degrees.
///
/// # See also
/// * [`ecliptic_to_equatorial`] – applies this angle as a rotation about X
pub fn mean_obliquity(centuries: f64) -> Degree {
    const OB0: f64 = 23.439291;
    const OB1: f64 = -0.0130042;
    const OB2: f64 = -1.64e-7;
    const OB3: f64 = 5.04e-7;

    let t = centuries;
    ((OB3 * t + OB2) * t + OB1) * t + OB0
}

/// Construct a right-handed 3×3 rotation matrix around one of the principal axes.
///
/// This builds an **active rotation** of a vector by `alpha` around `axis`,
/// counter-clockwise when looking down the axis towards the origin.
///
/// # Arguments
///
/// * `alpha` - Rotation angle in **radians**.
/// * `axis` - Axis of rotation.
///
/// # Returns
///
/// A 3×3 rotation matrix `R` such that the rotated vector is `x' = R · x`.
///
/// # Remarks
///
/// * Uses [`nalgebra::Rotation3::from_axis_angle`], so the result is orthonormal and
///   `R.transpose() == R.inverse()`.
pub fn rotmt(alpha: Radian, axis: Axis) -> Matrix3<f64> {
    let axis = match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Rotation taking orbital-plane coordinates (x towards perihelion) into the
/// ecliptic frame: `Rz(Ω) · Rx(i) · Rz(ω)`.
///
/// Arguments
/// ---------
/// * `node`: longitude of the ascending node Ω (degrees)
/// * `inclination`: inclination i (degrees)
/// * `perihelion_arg`: argument of perihelion ω (degrees)
pub fn orbital_plane_to_ecliptic(
    node: Degree,
    inclination: Degree,
    perihelion_arg: Degree,
) -> Matrix3<f64> {
    rotmt(deg_to_rad(node), Axis::Z)
        * rotmt(deg_to_rad(inclination), Axis::X)
        * rotmt(deg_to_rad(perihelion_arg), Axis::Z)
}

/// Rotate an ecliptic Cartesian vector into the mean equatorial frame of date.
///
/// Arguments
/// ---------
/// * `ecliptic`: ecliptic Cartesian vector (any unit)
/// * `centuries`: Julian centuries since J2000, selects the obliquity
///
/// Return
/// ------
/// * The same vector expressed in equatorial axes (same unit).
pub fn ecliptic_to_equatorial(ecliptic: &Vector3<f64>, centuries: f64) -> Vector3<f64> {
    let eps = deg_to_rad(mean_obliquity(centuries));
    rotmt(eps, Axis::X) * ecliptic
}

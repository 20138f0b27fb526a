//! # Mean orbital elements with secular rates
//!
//! The analytic model describes each body by six classical elements, every
//! one of them a linear function of time:
//!
//! 1. **Ω** – Longitude of the ascending node (degrees)
//! 2. **i** – Inclination (degrees)
//! 3. **ω** – Argument of perihelion (degrees)
//! 4. **a** – Semi-major axis (AU, Earth radii for the Moon)
//! 5. **e** – Eccentricity (unitless)
//! 6. **M** – Mean anomaly (degrees)
//!
//! An [`OrbitalElements`] record stores each element as an [`ElementRate`]
//! `(base, rate_per_day)`. Evaluating the record at a day count produces a
//! [`KeplerianElements`] snapshot, whose position in the ecliptic frame is
//! obtained by solving Kepler's equation and applying the
//! `Rz(Ω)·Rx(i)·Rz(ω)` rotation.
//!
//! ## Units
//!
//! - Angles: **degrees**
//! - Time: **days** since 2000 January 0.0 UT (JD 2451543.5)
//!
//! ## See also
//!
//! - [`crate::kepler::solve_kepler`] – eccentric anomaly from mean anomaly.
//! - [`crate::ref_system::orbital_plane_to_ecliptic`] – three-angle rotation.

use nalgebra::Vector3;
use std::fmt;

use crate::angles::{deg_to_rad, principal_angle, rad_to_deg, wrap_360};
use crate::constants::Degree;
use crate::kepler::solve_kepler;
use crate::pocketsky_errors::PocketSkyError;
use crate::ref_system::orbital_plane_to_ecliptic;

/// A quantity varying linearly with time: `base + rate_per_day · d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRate {
    pub base: f64,
    pub rate_per_day: f64,
}

impl ElementRate {
    pub const fn new(base: f64, rate_per_day: f64) -> Self {
        Self { base, rate_per_day }
    }

    pub const fn fixed(base: f64) -> Self {
        Self::new(base, 0.0)
    }

    #[inline]
    pub fn at(&self, days: f64) -> f64 {
        self.base + self.rate_per_day * days
    }
}

/// Constant element table of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub ascending_node: ElementRate,
    pub inclination: ElementRate,
    pub perihelion_argument: ElementRate,
    pub semi_major_axis: ElementRate,
    pub eccentricity: ElementRate,
    pub mean_anomaly: ElementRate,
}

impl OrbitalElements {
    /// Evaluate every element at `days` after the element epoch.
    ///
    /// Angular elements (Ω, ω, M) are wrapped to `[0, 360)`; the inclination is
    /// a small positive angle and is left as is.
    pub fn at(&self, days: f64) -> KeplerianElements {
        KeplerianElements {
            ascending_node: wrap_360(self.ascending_node.at(days)),
            inclination: self.inclination.at(days),
            perihelion_argument: wrap_360(self.perihelion_argument.at(days)),
            semi_major_axis: self.semi_major_axis.at(days),
            eccentricity: self.eccentricity.at(days),
            mean_anomaly: wrap_360(self.mean_anomaly.at(days)),
        }
    }
}

/// Osculating elements of a body at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerianElements {
    pub ascending_node: Degree,
    pub inclination: Degree,
    pub perihelion_argument: Degree,
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub mean_anomaly: Degree,
}

/// Position of a body along its ellipse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPosition {
    /// Eccentric anomaly (degrees, `[0, 360)`)
    pub eccentric_anomaly: Degree,
    /// True anomaly ν (degrees)
    pub true_anomaly: Degree,
    /// Distance from the focus, in the unit of the semi-major axis
    pub radius: f64,
    /// Cartesian position in the ecliptic frame
    pub ecliptic: Vector3<f64>,
}

impl KeplerianElements {
    /// Solve Kepler's equation and place the body in the ecliptic frame.
    ///
    /// Arguments
    /// ---------
    /// * `tolerance`: Newton stopping threshold (radians)
    /// * `max_iterations`: Newton iteration cap
    ///
    /// Return
    /// ------
    /// * The [`OrbitPosition`] of the body, or the solver error
    pub fn position(
        &self,
        tolerance: f64,
        max_iterations: usize,
    ) -> Result<OrbitPosition, PocketSkyError> {
        let e = self.eccentricity;
        let a = self.semi_major_axis;
        let ecc_anom = solve_kepler(
            deg_to_rad(self.mean_anomaly),
            e,
            tolerance,
            max_iterations,
        )?;

        // orbital plane, x axis towards perihelion
        let xv = a * (ecc_anom.cos() - e);
        let yv = a * (1.0 - e * e).sqrt() * ecc_anom.sin();

        let true_anomaly = rad_to_deg(yv.atan2(xv));
        let radius = xv.hypot(yv);

        let rot = orbital_plane_to_ecliptic(
            self.ascending_node,
            self.inclination,
            self.perihelion_argument,
        );
        let ecliptic = rot * Vector3::new(xv, yv, 0.0);

        Ok(OrbitPosition {
            eccentric_anomaly: rad_to_deg(principal_angle(ecc_anom)),
            true_anomaly,
            radius,
            ecliptic,
        })
    }
}

impl fmt::Display for KeplerianElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Keplerian Elements")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(f, "  a   (semi-major axis)       = {:.6}", self.semi_major_axis)?;
        writeln!(f, "  e   (eccentricity)          = {:.6}", self.eccentricity)?;
        writeln!(f, "  i   (inclination)           = {:.6}°", self.inclination)?;
        writeln!(f, "  Ω   (longitude of node)     = {:.6}°", self.ascending_node)?;
        writeln!(f, "  ω   (argument of perihelion) = {:.6}°", self.perihelion_argument)?;
        writeln!(f, "  M   (mean anomaly)          = {:.6}°", self.mean_anomaly)
    }
}

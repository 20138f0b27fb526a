//! Plain coordinate carriers exchanged with the host application.
//!
//! * [`Equatorial`]: apparent right ascension / declination, the output of the
//!   ephemeris engine and the input of the boundary index.
//! * [`Ecliptic`]: geocentric ecliptic longitude / latitude / distance, the
//!   intermediate frame of the orbital model.
//!
//! Both convert to and from Cartesian [`nalgebra::Vector3`] with the same
//! atan2-based extraction, so declination and latitude stay well defined
//! at the poles.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::angles::{angular_separation, clamp, deg_to_rad, rad_to_deg, wrap_360};
use crate::constants::Degree;
use crate::conversion::{format_dec_dms, format_ra_hms, parse_dec_to_deg, parse_ra_to_deg};
use crate::pocketsky_errors::PocketSkyError;

/// Equatorial direction. `ra_deg ∈ [0, 360)`, `dec_deg ∈ [-90, 90]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equatorial {
    pub ra_deg: Degree,
    pub dec_deg: Degree,
}

impl Equatorial {
    /// Build a direction, wrapping RA to `[0, 360)` and clamping Dec to `[-90, 90]`.
    pub fn new(ra_deg: Degree, dec_deg: Degree) -> Self {
        Self {
            ra_deg: wrap_360(ra_deg),
            dec_deg: clamp(dec_deg, -90.0, 90.0),
        }
    }

    /// Parse `"HH MM SS.ss"` / `"±DD MM SS.s"` strings into a direction.
    ///
    /// Arguments
    /// ---------
    /// * `ra`: right ascension in hours, minutes, seconds
    /// * `dec`: declination in signed degrees, arcminutes, arcseconds
    ///
    /// Return
    /// ------
    /// * The direction, or [`PocketSkyError::InvalidSexagesimal`] naming the offending field
    pub fn from_sexagesimal(ra: &str, dec: &str) -> Result<Self, PocketSkyError> {
        let (ra_deg, _) =
            parse_ra_to_deg(ra).ok_or_else(|| PocketSkyError::InvalidSexagesimal(ra.into()))?;
        let (dec_deg, _) =
            parse_dec_to_deg(dec).ok_or_else(|| PocketSkyError::InvalidSexagesimal(dec.into()))?;
        Ok(Self::new(ra_deg, dec_deg))
    }

    /// Extract RA/Dec and the vector norm from an equatorial Cartesian vector.
    pub fn from_cartesian(v: &Vector3<f64>) -> (Self, f64) {
        let ra = wrap_360(rad_to_deg(v.y.atan2(v.x)));
        let dec = rad_to_deg(v.z.atan2(v.x.hypot(v.y)));
        (Self::new(ra, dec), v.norm())
    }

    /// Unit vector pointing towards this direction.
    pub fn to_unit_vector(&self) -> Vector3<f64> {
        let (sa, ca) = deg_to_rad(self.ra_deg).sin_cos();
        let (sd, cd) = deg_to_rad(self.dec_deg).sin_cos();
        Vector3::new(cd * ca, cd * sa, sd)
    }

    /// Great-circle distance to `other`, in degrees.
    pub fn separation(&self, other: &Equatorial) -> Degree {
        angular_separation(self.ra_deg, self.dec_deg, other.ra_deg, other.dec_deg)
    }
}

impl fmt::Display for Equatorial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RA {} Dec {}",
            format_ra_hms(self.ra_deg),
            format_dec_dms(self.dec_deg)
        )
    }
}

/// Geocentric (or heliocentric, for intermediate planet vectors) ecliptic
/// position. Distance unit depends on the producer: AU for the Sun and the
/// planets, Earth radii for the raw lunar model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ecliptic {
    pub lon_deg: Degree,
    pub lat_deg: Degree,
    pub distance: f64,
}

impl Ecliptic {
    pub fn from_cartesian(v: &Vector3<f64>) -> Self {
        Self {
            lon_deg: wrap_360(rad_to_deg(v.y.atan2(v.x))),
            lat_deg: rad_to_deg(v.z.atan2(v.x.hypot(v.y))),
            distance: v.norm(),
        }
    }

    pub fn to_cartesian(&self) -> Vector3<f64> {
        let (sl, cl) = deg_to_rad(self.lon_deg).sin_cos();
        let (sb, cb) = deg_to_rad(self.lat_deg).sin_cos();
        Vector3::new(
            self.distance * cl * cb,
            self.distance * sl * cb,
            self.distance * sb,
        )
    }
}

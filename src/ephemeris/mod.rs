//! # Analytic ephemeris of the Sun, the Moon, Jupiter and Saturn
//!
//! [`EphemerisEngine::compute`] turns an instant into apparent equatorial
//! coordinates, a distance and (for the Moon) an illuminated fraction. The
//! model is a low-precision analytic theory with a target accuracy of about
//! a degree, cheap enough to evaluate at sensor rate.
//!
//! ## Pipeline
//!
//! 1. Evaluate the body's mean elements `base + rate·d`
//!    ([`OrbitalElements::at`](crate::orbital_elements::OrbitalElements::at)).
//! 2. Solve Kepler's equation ([`crate::kepler::solve_kepler`]) and rotate the
//!    orbital-plane position into the ecliptic frame.
//! 3. Apply body-specific corrections:
//!    * Sun: none, the "Earth orbit" elements give the geocentric Sun directly;
//!    * Moon: the periodic series of [`lunar`];
//!    * Jupiter / Saturn: the mutual terms of [`perturbations`].
//! 4. Planets only: add the geocentric Sun vector to the heliocentric planet.
//! 5. Rotate ecliptic → equatorial with the mean obliquity of date
//!    ([`crate::ref_system::ecliptic_to_equatorial`]).
//!
//! The engine owns nothing but its [`SkySettings`]; the element tables are
//! `const` data. `compute` is a pure function of `(body, instant)`, so an
//! engine can be shared between threads without synchronisation.
//!
//! ## Example
//!
//! ```rust
//! use hifitime::Epoch;
//! use pocketsky::ephemeris::{Body, EphemerisEngine};
//! use std::str::FromStr;
//!
//! let engine = EphemerisEngine::new();
//! let instant = Epoch::from_str("2025-01-01T00:00:00 UTC").unwrap();
//! let sun = engine.compute(Body::Sun, &instant).unwrap();
//! assert!(sun.equatorial.dec_deg < -22.0);
//! ```

pub mod lunar;
pub mod perturbations;

use hifitime::Epoch;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use tracing::warn;

use crate::angles::{clamp, deg_to_rad, rad_to_deg, wrap_360};
use crate::constants::{
    AstronomicalUnit, Degree, ERAU, KEPLER_TOL_MOON, KEPLER_TOL_PLANET,
};
use crate::coordinates::{Ecliptic, Equatorial};
use crate::orbital_elements::{ElementRate, KeplerianElements, OrbitalElements};
use crate::pocketsky_errors::PocketSkyError;
use crate::ref_system::ecliptic_to_equatorial;
use crate::settings::SkySettings;
use crate::time::{days_since_element_epoch, julian_centuries};

use lunar::{lunar_corrections, LunarArguments};
use perturbations::{mutual_corrections, MutualAnomalies, Planet};

// -------------------------------------------------------------------------------------------------
// Element tables, day zero = 2000 January 0.0 UT
// -------------------------------------------------------------------------------------------------

/// Elements of the apparent solar orbit around the Earth (AU).
pub const SUN_ELEMENTS: OrbitalElements = OrbitalElements {
    ascending_node: ElementRate::fixed(0.0),
    inclination: ElementRate::fixed(0.0),
    perihelion_argument: ElementRate::new(282.9404, 4.70935e-5),
    semi_major_axis: ElementRate::fixed(1.0),
    eccentricity: ElementRate::new(0.016709, -1.151e-9),
    mean_anomaly: ElementRate::new(356.0470, 0.985_600_258_5),
};

/// Geocentric lunar elements (semi-major axis in Earth radii).
pub const MOON_ELEMENTS: OrbitalElements = OrbitalElements {
    ascending_node: ElementRate::new(125.1228, -0.052_953_808_3),
    inclination: ElementRate::fixed(5.1454),
    perihelion_argument: ElementRate::new(318.0634, 0.164_357_322_3),
    semi_major_axis: ElementRate::fixed(60.2666),
    eccentricity: ElementRate::fixed(0.054900),
    mean_anomaly: ElementRate::new(115.3654, 13.064_992_950_9),
};

/// Heliocentric elements of Jupiter (AU).
pub const JUPITER_ELEMENTS: OrbitalElements = OrbitalElements {
    ascending_node: ElementRate::new(100.4542, 2.76854e-5),
    inclination: ElementRate::new(1.3030, -1.557e-7),
    perihelion_argument: ElementRate::new(273.8777, 1.64505e-5),
    semi_major_axis: ElementRate::fixed(5.20256),
    eccentricity: ElementRate::new(0.048498, 4.469e-9),
    mean_anomaly: ElementRate::new(19.8950, 0.083_085_300_1),
};

/// Heliocentric elements of Saturn (AU).
pub const SATURN_ELEMENTS: OrbitalElements = OrbitalElements {
    ascending_node: ElementRate::new(113.6634, 2.38980e-5),
    inclination: ElementRate::new(2.4886, -1.081e-7),
    perihelion_argument: ElementRate::new(339.3939, 2.97661e-5),
    semi_major_axis: ElementRate::fixed(9.55475),
    eccentricity: ElementRate::new(0.055546, -9.499e-9),
    mean_anomaly: ElementRate::new(316.9670, 0.033_444_228_2),
};

// -------------------------------------------------------------------------------------------------
// Public types
// -------------------------------------------------------------------------------------------------

/// Bodies supported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Jupiter,
    Saturn,
}

impl Body {
    pub const ALL: [Body; 4] = [Body::Sun, Body::Moon, Body::Jupiter, Body::Saturn];

    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = PocketSkyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Body::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PocketSkyError::UnknownBody(s.to_string()))
    }
}

/// Output of [`EphemerisEngine::compute`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EphemerisResult {
    pub equatorial: Equatorial,
    /// Geocentric distance in AU; set for every body.
    pub distance_au: Option<AstronomicalUnit>,
    /// Illuminated fraction of the disc in `[0, 1]`; Moon only.
    pub illuminated_fraction: Option<f64>,
}

impl EphemerisResult {
    /// Phase angle (Sun–Moon–Earth) in degrees derived from the illuminated fraction.
    ///
    /// `None` for bodies without an illuminated fraction.
    pub fn phase_angle_deg(&self) -> Option<Degree> {
        self.illuminated_fraction
            .map(|k| rad_to_deg(clamp(2.0 * k - 1.0, -1.0, 1.0).acos()))
    }
}

// -------------------------------------------------------------------------------------------------
// Engine
// -------------------------------------------------------------------------------------------------

/// Geocentric Sun shared by every body of one evaluation.
#[derive(Debug, Clone, Copy)]
struct SunState {
    elements: KeplerianElements,
    /// Geocentric ecliptic position of the Sun (AU).
    ecliptic: Vector3<f64>,
    lon_deg: Degree,
}

/// One evaluation instant: element day count and obliquity centuries.
#[derive(Debug, Clone, Copy)]
struct Instant {
    days: f64,
    centuries: f64,
}

/// Analytic Sun, Moon, Jupiter and Saturn positions; immutable once built.
#[derive(Debug, Clone, Default)]
pub struct EphemerisEngine {
    settings: SkySettings,
}

impl EphemerisEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: SkySettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SkySettings {
        &self.settings
    }

    /// Apparent geocentric position of `body` at `instant`.
    ///
    /// Arguments
    /// ---------
    /// * `body`: the body to compute
    /// * `instant`: the instant of observation
    ///
    /// Return
    /// ------
    /// * An [`EphemerisResult`] with RA in `[0, 360)`, Dec in `[-90, 90]`, a positive
    ///   distance in AU and, for the Moon, the illuminated fraction.
    ///
    /// Errors
    /// ------
    /// * [`PocketSkyError::KeplerNonConvergence`] when the Kepler solver hits its
    ///   iteration cap; the sample must be discarded.
    pub fn compute(&self, body: Body, instant: &Epoch) -> Result<EphemerisResult, PocketSkyError> {
        let at = Self::instant(instant);
        let sun = self.sun_state(&at)?;
        self.compute_with_sun(body, &at, &sun)
    }

    /// Compute all four bodies at one instant, sharing the solar position.
    pub fn compute_all(
        &self,
        instant: &Epoch,
    ) -> Result<Vec<(Body, EphemerisResult)>, PocketSkyError> {
        let at = Self::instant(instant);
        let sun = self.sun_state(&at)?;
        Body::ALL
            .into_iter()
            .map(|body| Ok((body, self.compute_with_sun(body, &at, &sun)?)))
            .collect()
    }

    /// Corrected geocentric ecliptic coordinates of `body` (distance in AU),
    /// before the rotation into the equatorial frame.
    pub fn ecliptic(&self, body: Body, instant: &Epoch) -> Result<Ecliptic, PocketSkyError> {
        let at = Self::instant(instant);
        let sun = self.sun_state(&at)?;
        let geo = self.geocentric_ecliptic(body, &at, &sun)?;
        Ok(Ecliptic::from_cartesian(&geo.vector))
    }

    fn instant(instant: &Epoch) -> Instant {
        Instant {
            days: days_since_element_epoch(instant),
            centuries: julian_centuries(instant),
        }
    }

    fn solve(
        &self,
        elements: &KeplerianElements,
        tolerance: f64,
    ) -> Result<Vector3<f64>, PocketSkyError> {
        elements
            .position(tolerance, self.settings.kepler_max_iterations)
            .map(|p| p.ecliptic)
            .inspect_err(|err| warn!(%err, "rejecting ephemeris sample"))
    }

    fn sun_state(&self, at: &Instant) -> Result<SunState, PocketSkyError> {
        let elements = SUN_ELEMENTS.at(at.days);
        let ecliptic = self.solve(&elements, KEPLER_TOL_PLANET)?;
        Ok(SunState {
            elements,
            ecliptic,
            lon_deg: Ecliptic::from_cartesian(&ecliptic).lon_deg,
        })
    }

    fn compute_with_sun(
        &self,
        body: Body,
        at: &Instant,
        sun: &SunState,
    ) -> Result<EphemerisResult, PocketSkyError> {
        let geo = self.geocentric_ecliptic(body, at, sun)?;
        let equatorial_vec = ecliptic_to_equatorial(&geo.vector, at.centuries);
        let (equatorial, distance) = Equatorial::from_cartesian(&equatorial_vec);

        let illuminated_fraction = match body {
            Body::Moon => {
                let elongation = deg_to_rad(geo.lon_deg - sun.lon_deg);
                Some(clamp(0.5 * (1.0 - elongation.cos()), 0.0, 1.0))
            }
            _ => None,
        };

        Ok(EphemerisResult {
            equatorial,
            distance_au: Some(distance),
            illuminated_fraction,
        })
    }

    /// Geocentric ecliptic vector of `body` in AU, with its corrected longitude.
    fn geocentric_ecliptic(
        &self,
        body: Body,
        at: &Instant,
        sun: &SunState,
    ) -> Result<Geocentric, PocketSkyError> {
        match body {
            Body::Sun => Ok(Geocentric {
                vector: sun.ecliptic,
                lon_deg: sun.lon_deg,
            }),
            Body::Moon => self.moon(at, sun),
            Body::Jupiter => self.planet(Planet::Jupiter, at, sun),
            Body::Saturn => self.planet(Planet::Saturn, at, sun),
        }
    }

    fn moon(&self, at: &Instant, sun: &SunState) -> Result<Geocentric, PocketSkyError> {
        let elements = MOON_ELEMENTS.at(at.days);
        let raw = Ecliptic::from_cartesian(&self.solve(&elements, KEPLER_TOL_MOON)?);

        let args = LunarArguments::new(
            sun.elements.mean_anomaly,
            sun.elements.perihelion_argument,
            elements.mean_anomaly,
            elements.perihelion_argument,
            elements.ascending_node,
        );
        let corr = lunar_corrections(&args);

        let corrected = Ecliptic {
            lon_deg: wrap_360(raw.lon_deg + corr.longitude),
            lat_deg: raw.lat_deg + corr.latitude,
            distance: (raw.distance + corr.distance) * ERAU,
        };

        Ok(Geocentric {
            vector: corrected.to_cartesian(),
            lon_deg: corrected.lon_deg,
        })
    }

    fn planet(
        &self,
        planet: Planet,
        at: &Instant,
        sun: &SunState,
    ) -> Result<Geocentric, PocketSkyError> {
        let jupiter = JUPITER_ELEMENTS.at(at.days);
        let saturn = SATURN_ELEMENTS.at(at.days);
        let anomalies = MutualAnomalies {
            jupiter: jupiter.mean_anomaly,
            saturn: saturn.mean_anomaly,
        };

        let elements = match planet {
            Planet::Jupiter => jupiter,
            Planet::Saturn => saturn,
        };
        let helio = Ecliptic::from_cartesian(&self.solve(&elements, KEPLER_TOL_PLANET)?);
        let (dlon, dlat) = mutual_corrections(planet, &anomalies);

        let corrected = Ecliptic {
            lon_deg: wrap_360(helio.lon_deg + dlon),
            lat_deg: helio.lat_deg + dlat,
            distance: helio.distance,
        };

        let vector = corrected.to_cartesian() + sun.ecliptic;
        Ok(Geocentric {
            lon_deg: Ecliptic::from_cartesian(&vector).lon_deg,
            vector,
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct Geocentric {
    vector: Vector3<f64>,
    lon_deg: Degree,
}

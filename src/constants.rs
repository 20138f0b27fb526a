//! # Constants and type definitions for pocketsky
//!
//! This module centralizes the **physical constants**, **epoch constants**, **conversion factors**
//! and the **type aliases** shared by the ephemeris engine and the constellation boundary index.
//!
//! ## Overview
//!
//! - Epochs on the Julian Day axis (J2000.0 and the day-zero of the element tables)
//! - Unit conversions (degrees ↔ radians, Earth radii ↔ AU)
//! - Numerical tolerances used by the Kepler solver and the boundary queries
//! - Unit-bearing type aliases used across the crate

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Earth equatorial radius in kilometers, as used by the lunar distance series
pub const EARTH_RADIUS_KM: f64 = 6_378.14;

/// Earth radius expressed in astronomical units
pub const ERAU: f64 = EARTH_RADIUS_KM / AU;

/// Number of days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

// -------------------------------------------------------------------------------------------------
// Epochs
// -------------------------------------------------------------------------------------------------

/// Julian Day of the J2000.0 reference used for the time axis (2000-01-01 00:00 UT)
pub const J2000_JD: f64 = 2_451_544.5;

/// Julian Day of day zero of the orbital element tables (2000 January 0.0 UT)
pub const ELEMENT_EPOCH_JD: f64 = 2_451_543.5;

// -------------------------------------------------------------------------------------------------
// Numerical tolerances
// -------------------------------------------------------------------------------------------------

/// Kepler convergence threshold for the Moon (radians)
pub const KEPLER_TOL_MOON: f64 = 1e-10;

/// Kepler convergence threshold for the Sun and the planets (radians)
pub const KEPLER_TOL_PLANET: f64 = 1e-12;

/// Default cap on Newton-Raphson iterations for Kepler's equation
pub const KEPLER_MAX_ITERATIONS: usize = 30;

/// Default slack applied to boundary box and range tests (degrees), absorbs float32 rounding
pub const BOUNDARY_EPS_DEG: f64 = 1e-5;

/// Two vertices closer than this (degrees) are considered identical
pub const VERTEX_DUP_EPS_DEG: f64 = 1e-6;

/// Number of IAU constellations stored in a boundary catalog
pub const IAU_REGION_COUNT: u16 = 88;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Distance in Earth equatorial radii
pub type EarthRadii = f64;
/// Julian Day (days)
pub type JulianDay = f64;

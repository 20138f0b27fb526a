//! Analytic ephemeris of the Sun, Moon, Jupiter and Saturn, and IAU constellation lookup
//! from a packed boundary catalog.

pub mod angles;
pub mod boundary;
pub mod constants;
pub mod conversion;
pub mod coordinates;
pub mod ephemeris;
pub mod kepler;
pub mod orbital_elements;
pub mod pocketsky;
pub mod pocketsky_errors;
pub mod ref_system;
pub mod settings;
pub mod time;

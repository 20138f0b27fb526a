//! Periodic corrections of the low-precision lunar theory.
//!
//! The unperturbed Keplerian Moon is off by several degrees; the largest
//! solar perturbations (evection, variation, yearly equation, parallactic
//! inequality, …) are added back as fixed trigonometric series in four
//! fundamental arguments:
//!
//! * `Mm`: Moon mean anomaly
//! * `Ms`: Sun mean anomaly
//! * `D`: mean elongation of the Moon, `Lm − Ls`
//! * `F`: Moon argument of latitude, `Lm − Ωm`
//!
//! Longitude and latitude terms are in degrees, distance terms in Earth radii.

use crate::angles::deg_to_rad;
use crate::constants::{Degree, EarthRadii};

/// `amplitude · trig(mm·Mm + ms·Ms + d·D + f·F)`
#[derive(Debug, Clone, Copy)]
struct LunarTerm {
    amplitude: f64,
    mm: f64,
    ms: f64,
    d: f64,
    f: f64,
}

const fn term(amplitude: f64, mm: f64, ms: f64, d: f64, f: f64) -> LunarTerm {
    LunarTerm {
        amplitude,
        mm,
        ms,
        d,
        f,
    }
}

/// Sine series, degrees.
const LONGITUDE_TERMS: [LunarTerm; 12] = [
    term(-1.274, 1.0, 0.0, -2.0, 0.0), // evection
    term(0.658, 0.0, 0.0, 2.0, 0.0),   // variation
    term(-0.186, 0.0, 1.0, 0.0, 0.0),  // yearly equation
    term(-0.059, 2.0, 0.0, -2.0, 0.0),
    term(-0.057, 1.0, 1.0, -2.0, 0.0),
    term(0.053, 1.0, 0.0, 2.0, 0.0),
    term(0.046, 0.0, -1.0, 2.0, 0.0),
    term(0.041, 1.0, -1.0, 0.0, 0.0),
    term(-0.035, 0.0, 0.0, 1.0, 0.0), // parallactic inequality
    term(-0.031, 1.0, 1.0, 0.0, 0.0),
    term(-0.015, 0.0, 0.0, -2.0, 2.0),
    term(0.011, 1.0, 0.0, -4.0, 0.0),
];

/// Sine series, degrees.
const LATITUDE_TERMS: [LunarTerm; 5] = [
    term(-0.173, 0.0, 0.0, -2.0, 1.0),
    term(-0.055, 1.0, 0.0, -2.0, -1.0),
    term(-0.046, 1.0, 0.0, -2.0, 1.0),
    term(0.033, 0.0, 0.0, 2.0, 1.0),
    term(0.017, 2.0, 0.0, 0.0, 1.0),
];

/// Cosine series, Earth radii.
const DISTANCE_TERMS: [LunarTerm; 2] = [
    term(-0.58, 1.0, 0.0, -2.0, 0.0),
    term(-0.46, 0.0, 0.0, 2.0, 0.0),
];

/// Fundamental arguments of the series, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarArguments {
    pub moon_mean_anomaly: Degree,
    pub sun_mean_anomaly: Degree,
    pub elongation: Degree,
    pub argument_of_latitude: Degree,
}

impl LunarArguments {
    /// Build the arguments from the Sun and Moon mean elements.
    ///
    /// Arguments
    /// ---------
    /// * `sun_mean_anomaly`, `sun_perihelion`: Ms and ws (degrees)
    /// * `moon_mean_anomaly`, `moon_perigee`, `moon_node`: Mm, wm and Ωm (degrees)
    pub fn new(
        sun_mean_anomaly: Degree,
        sun_perihelion: Degree,
        moon_mean_anomaly: Degree,
        moon_perigee: Degree,
        moon_node: Degree,
    ) -> Self {
        let sun_mean_longitude = sun_mean_anomaly + sun_perihelion;
        let moon_mean_longitude = moon_mean_anomaly + moon_perigee + moon_node;
        Self {
            moon_mean_anomaly,
            sun_mean_anomaly,
            elongation: moon_mean_longitude - sun_mean_longitude,
            argument_of_latitude: moon_mean_longitude - moon_node,
        }
    }

    fn phase(&self, t: &LunarTerm) -> f64 {
        deg_to_rad(
            t.mm * self.moon_mean_anomaly
                + t.ms * self.sun_mean_anomaly
                + t.d * self.elongation
                + t.f * self.argument_of_latitude,
        )
    }
}

/// Sum of the lunar corrections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarCorrection {
    pub longitude: Degree,
    pub latitude: Degree,
    pub distance: EarthRadii,
}

pub fn lunar_corrections(args: &LunarArguments) -> LunarCorrection {
    let sin_series = |terms: &[LunarTerm]| -> f64 {
        terms
            .iter()
            .map(|t| t.amplitude * args.phase(t).sin())
            .sum()
    };

    LunarCorrection {
        longitude: sin_series(&LONGITUDE_TERMS),
        latitude: sin_series(&LATITUDE_TERMS),
        distance: DISTANCE_TERMS
            .iter()
            .map(|t| t.amplitude * args.phase(t).cos())
            .sum(),
    }
}

#[cfg(test)]
mod lunar_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_arguments() {
        let args = LunarArguments::new(10.0, 280.0, 20.0, 300.0, 100.0);
        assert_eq!(args.elongation, 420.0 - 290.0);
        assert_eq!(args.argument_of_latitude, 320.0);
    }

    #[test]
    fn test_null_arguments() {
        // every sine vanishes, both cosines are 1
        let args = LunarArguments {
            moon_mean_anomaly: 0.0,
            sun_mean_anomaly: 0.0,
            elongation: 0.0,
            argument_of_latitude: 0.0,
        };
        let c = lunar_corrections(&args);
        assert_abs_diff_eq!(c.longitude, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(c.latitude, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(c.distance, -1.04, epsilon = 1e-15);
    }

    #[test]
    fn test_evection_dominates() {
        // Mm = 90° with every other argument at zero
        let args = LunarArguments {
            moon_mean_anomaly: 90.0,
            sun_mean_anomaly: 0.0,
            elongation: 0.0,
            argument_of_latitude: 0.0,
        };
        let c = lunar_corrections(&args);
        // evection, -0.057, +0.053, +0.041, -0.031 and +0.011 terms at their extrema
        assert_abs_diff_eq!(c.longitude, -1.257, epsilon = 1e-12);
    }
}

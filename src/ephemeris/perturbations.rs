//! Jupiter–Saturn mutual perturbations.
//!
//! The two giants are close to a 5:2 mean-motion resonance (the "great
//! inequality"), which shifts their longitudes by up to almost a degree.
//! Each correction term is `amplitude · trig(j·Mj + s·Ms + phase)` where `Mj`
//! and `Ms` are the mean anomalies of Jupiter and Saturn, so both anomalies
//! are required whichever planet is being computed.

use crate::angles::deg_to_rad;
use crate::constants::Degree;

/// Planets carrying mutual perturbation terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Jupiter,
    Saturn,
}

#[derive(Debug, Clone, Copy)]
enum Trig {
    Sin,
    Cos,
}

#[derive(Debug, Clone, Copy)]
struct MutualTerm {
    amplitude: f64,
    jupiter: f64,
    saturn: f64,
    phase: Degree,
    trig: Trig,
}

const fn sin(amplitude: f64, jupiter: f64, saturn: f64, phase: Degree) -> MutualTerm {
    MutualTerm {
        amplitude,
        jupiter,
        saturn,
        phase,
        trig: Trig::Sin,
    }
}

const fn cos(amplitude: f64, jupiter: f64, saturn: f64, phase: Degree) -> MutualTerm {
    MutualTerm {
        amplitude,
        jupiter,
        saturn,
        phase,
        trig: Trig::Cos,
    }
}

const JUPITER_LONGITUDE: [MutualTerm; 7] = [
    sin(-0.332, 2.0, -5.0, -67.6), // great inequality
    sin(-0.056, 2.0, -2.0, 21.0),
    sin(0.042, 3.0, -5.0, 21.0),
    sin(-0.036, 1.0, -2.0, 0.0),
    cos(0.022, 1.0, -1.0, 0.0),
    sin(0.023, 2.0, -3.0, 52.0),
    sin(-0.016, 1.0, -5.0, -69.0),
];

const SATURN_LONGITUDE: [MutualTerm; 5] = [
    sin(0.812, 2.0, -5.0, -67.6), // great inequality
    cos(-0.229, 2.0, -4.0, -2.0),
    sin(0.119, 1.0, -2.0, -3.0),
    sin(0.046, 2.0, -6.0, -69.0),
    sin(0.014, 1.0, -3.0, 32.0),
];

const SATURN_LATITUDE: [MutualTerm; 2] = [
    cos(-0.020, 2.0, -4.0, -2.0),
    sin(0.018, 2.0, -6.0, -49.0),
];

/// Mean anomalies of both giants at the same instant (degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutualAnomalies {
    pub jupiter: Degree,
    pub saturn: Degree,
}

fn series(terms: &[MutualTerm], anomalies: &MutualAnomalies) -> Degree {
    terms
        .iter()
        .map(|t| {
            let arg = deg_to_rad(
                t.jupiter * anomalies.jupiter + t.saturn * anomalies.saturn + t.phase,
            );
            match t.trig {
                Trig::Sin => t.amplitude * arg.sin(),
                Trig::Cos => t.amplitude * arg.cos(),
            }
        })
        .sum()
}

/// Longitude and latitude corrections (degrees) for `planet`.
///
/// Arguments
/// ---------
/// * `planet`: the perturbed planet
/// * `anomalies`: mean anomalies of Jupiter and Saturn at the same instant
///
/// Return
/// ------
/// * `(Δλ, Δβ)` to add to the heliocentric ecliptic longitude and latitude
pub fn mutual_corrections(planet: Planet, anomalies: &MutualAnomalies) -> (Degree, Degree) {
    match planet {
        Planet::Jupiter => (series(&JUPITER_LONGITUDE, anomalies), 0.0),
        Planet::Saturn => (
            series(&SATURN_LONGITUDE, anomalies),
            series(&SATURN_LATITUDE, anomalies),
        ),
    }
}

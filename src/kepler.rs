//! Kepler's equation for elliptic orbits.
//!
//! Solves `M = E − e·sin(E)` for the eccentric anomaly `E` with a Newton
//! method. The starting guess is the second-order series
//! `E₀ = M + e·sin(M)·(1 + e·cos(M))`, which converges quadratically for
//! every eccentricity met in the solar system (< 0.9).
//!
//! The loop is capped: a solver that has not converged after
//! `max_iterations` steps reports [`PocketSkyError::KeplerNonConvergence`]
//! instead of spinning.

use crate::constants::Radian;
use crate::pocketsky_errors::PocketSkyError;

/// Solve Kepler's equation for the eccentric anomaly.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly `M` in radians (any value; not wrapped here)
/// * `eccentricity`: orbital eccentricity, must lie in `[0, 1)`
/// * `tolerance`: stop when the Newton correction drops below this value (radians)
/// * `max_iterations`: hard cap on Newton steps
///
/// Return
/// ------
/// * The eccentric anomaly `E` in radians, on the same branch as `M`
///
/// Errors
/// ------
/// * [`PocketSkyError::InvalidEccentricity`] if `e ∉ [0, 1)` or is NaN
/// * [`PocketSkyError::KeplerNonConvergence`] if the correction never falls below
///   `tolerance`, or the iterate becomes non-finite
pub fn solve_kepler(
    mean_anomaly: Radian,
    eccentricity: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<Radian, PocketSkyError> {
    if !(0.0..1.0).contains(&eccentricity) {
        return Err(PocketSkyError::InvalidEccentricity(eccentricity));
    }

    let non_convergence = |iterations| PocketSkyError::KeplerNonConvergence {
        mean_anomaly,
        eccentricity,
        iterations,
    };

    if !mean_anomaly.is_finite() {
        return Err(non_convergence(0));
    }

    let e = eccentricity;
    let m = mean_anomaly;
    let mut ecc_anom = m + e * m.sin() * (1.0 + e * m.cos());

    for step in 1..=max_iterations {
        let delta = (ecc_anom - e * ecc_anom.sin() - m) / (1.0 - e * ecc_anom.cos());
        ecc_anom -= delta;
        if !ecc_anom.is_finite() {
            return Err(non_convergence(step));
        }
        if delta.abs() < tolerance {
            return Ok(ecc_anom);
        }
    }

    Err(non_convergence(max_iterations))
}

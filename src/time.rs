//! Time axis of the ephemeris engine.
//!
//! Instants are [`hifitime::Epoch`] values supplied by the caller. Internally
//! every formula runs on a continuous, fractional day count:
//!
//! * `days_since_j2000`: days elapsed since JD 2451544.5, drives the
//!   obliquity polynomial through [`julian_centuries`];
//! * `days_since_element_epoch`: days elapsed since 2000 January 0.0 UT
//!   (JD 2451543.5), the day zero of the orbital element tables.
//!
//! UTC-based Julian Days are used throughout; the ΔT offset (about a minute)
//! is far below the accuracy target of the analytic model.

use hifitime::Epoch;

use crate::constants::{JulianDay, DAYS_PER_CENTURY, ELEMENT_EPOCH_JD, J2000_JD};

/// Julian Day (UTC) of an instant.
pub fn jd_from_epoch(epoch: &Epoch) -> JulianDay {
    epoch.to_jde_utc_days()
}

/// Build an instant from a Julian Day expressed in UTC.
pub fn epoch_from_jd(jd: JulianDay) -> Epoch {
    Epoch::from_jde_utc(jd)
}

/// Days elapsed since J2000 (JD 2451544.5), fractional.
pub fn days_since_j2000(epoch: &Epoch) -> f64 {
    jd_from_epoch(epoch) - J2000_JD
}

/// Days elapsed since the day zero of the element tables (JD 2451543.5).
pub fn days_since_element_epoch(epoch: &Epoch) -> f64 {
    jd_from_epoch(epoch) - ELEMENT_EPOCH_JD
}

/// Julian centuries elapsed since J2000.
pub fn julian_centuries(epoch: &Epoch) -> f64 {
    days_since_j2000(epoch) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use hifitime::TimeScale;
    use std::str::FromStr;

    #[test]
    fn test_jd_from_epoch() {
        let epoch = Epoch::from_str("2025-01-01T00:00:00 UTC").unwrap();
        assert_abs_diff_eq!(jd_from_epoch(&epoch), 2460676.5, epsilon = 1e-9);
    }

    #[test]
    fn test_days_since_epochs() {
        let epoch = Epoch::from_gregorian(2000, 1, 1, 0, 0, 0, 0, TimeScale::UTC);
        assert_abs_diff_eq!(days_since_j2000(&epoch), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(days_since_element_epoch(&epoch), 1.0, epsilon = 1e-9);

        let noon = Epoch::from_gregorian(2000, 1, 1, 12, 0, 0, 0, TimeScale::UTC);
        assert_abs_diff_eq!(days_since_j2000(&noon), 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_julian_centuries() {
        let epoch = epoch_from_jd(J2000_JD + DAYS_PER_CENTURY);
        assert_abs_diff_eq!(julian_centuries(&epoch), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_epoch_jd_roundtrip() {
        let jd = 2460754.5;
        assert_abs_diff_eq!(jd_from_epoch(&epoch_from_jd(jd)), jd, epsilon = 1e-9);
    }
}

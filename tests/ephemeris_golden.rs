use std::str::FromStr;

use approx::assert_abs_diff_eq;
use hifitime::Epoch;
use pocketsky::ephemeris::{Body, EphemerisEngine, EphemerisResult};
use pocketsky::time::epoch_from_jd;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Reference positions: Meeus full-series Sun and Moon, JPL approximate
// planetary elements, mean equinox of date.
const ANGLE_TOL_DEG: f64 = 1.5;

fn epoch(s: &str) -> Epoch {
    Epoch::from_str(s).unwrap()
}

fn distance_tolerance(body: Body) -> f64 {
    match body {
        Body::Sun => 0.02,
        Body::Moon => 0.0005,
        Body::Jupiter | Body::Saturn => 0.3,
    }
}

/// Shortest signed difference between two right ascensions.
fn ra_diff(a: f64, b: f64) -> f64 {
    (a - b + 540.0).rem_euclid(360.0) - 180.0
}

fn assert_golden(res: &EphemerisResult, body: Body, ra: f64, dec: f64, distance: f64) {
    assert!(
        ra_diff(res.equatorial.ra_deg, ra).abs() < ANGLE_TOL_DEG,
        "{body}: ra {} vs {ra}",
        res.equatorial.ra_deg
    );
    assert_abs_diff_eq!(res.equatorial.dec_deg, dec, epsilon = ANGLE_TOL_DEG);
    assert_abs_diff_eq!(
        res.distance_au.unwrap(),
        distance,
        epsilon = distance_tolerance(body)
    );
}

#[test]
fn test_golden_2025_01_01() {
    let engine = EphemerisEngine::new();
    let t = epoch("2025-01-01T00:00:00 UTC");

    let sun = engine.compute(Body::Sun, &t).unwrap();
    assert_golden(&sun, Body::Sun, 281.39, -23.02, 0.9833);

    let moon = engine.compute(Body::Moon, &t).unwrap();
    assert_golden(&moon, Body::Moon, 296.67, -25.86, 0.002552);
    // a day after new moon
    assert!(moon.illuminated_fraction.unwrap() < 0.05);

    let jupiter = engine.compute(Body::Jupiter, &t).unwrap();
    assert_golden(&jupiter, Body::Jupiter, 71.83, 21.78, 4.188);

    let saturn = engine.compute(Body::Saturn, &t).unwrap();
    assert_golden(&saturn, Body::Saturn, 346.58, -7.89, 10.019);
}

#[test]
fn test_golden_2024_06_21() {
    let engine = EphemerisEngine::new();
    let t = epoch("2024-06-21T12:00:00 UTC");

    let sun = engine.compute(Body::Sun, &t).unwrap();
    // June solstice
    assert_golden(&sun, Body::Sun, 90.67, 23.44, 1.0163);

    let moon = engine.compute(Body::Moon, &t).unwrap();
    assert_golden(&moon, Body::Moon, 262.93, -28.04, 0.002555);
    // full moon on the 22nd at 01:08 UT
    assert!(moon.illuminated_fraction.unwrap() > 0.95);
    assert!(moon.phase_angle_deg().unwrap() < 20.0);

    let jupiter = engine.compute(Body::Jupiter, &t).unwrap();
    assert_golden(&jupiter, Body::Jupiter, 64.34, 20.63, 5.929);

    let saturn = engine.compute(Body::Saturn, &t).unwrap();
    assert_golden(&saturn, Body::Saturn, 351.07, -5.96, 9.433);
}

#[test]
fn test_golden_1990_01_01() {
    let engine = EphemerisEngine::new();
    let results = engine.compute_all(&epoch("1990-01-01T00:00:00 UTC")).unwrap();
    let expected = [
        (Body::Sun, 281.21, -23.04, 0.9833),
        (Body::Moon, 328.47, -11.84, 0.002545),
        (Body::Jupiter, 95.75, 23.22, 4.174),
        (Body::Saturn, 286.84, -22.24, 11.014),
    ];
    for ((body, res), (exp_body, ra, dec, dist)) in results.iter().zip(expected) {
        assert_eq!(*body, exp_body);
        assert_golden(res, *body, ra, dec, dist);
    }
}

#[test]
fn test_equinox() {
    let engine = EphemerisEngine::new();
    let sun = engine
        .compute(Body::Sun, &epoch("2025-03-20T00:00:00 UTC"))
        .unwrap();
    assert!(sun.equatorial.dec_deg.abs() < 2.5);
    assert!(ra_diff(sun.equatorial.ra_deg, 0.0).abs() < 2.5);
}

#[test]
fn test_output_ranges() {
    let engine = EphemerisEngine::new();
    let mut rng = StdRng::seed_from_u64(0xA57E0);

    // 1900 .. 2100
    for _ in 0..2_000 {
        let t = epoch_from_jd(rng.random_range(2_415_020.5..2_488_069.5));
        for body in Body::ALL {
            let res = engine.compute(body, &t).unwrap();
            let eq = res.equatorial;
            assert!((0.0..360.0).contains(&eq.ra_deg), "{body} ra {}", eq.ra_deg);
            assert!((-90.0..=90.0).contains(&eq.dec_deg), "{body} dec {}", eq.dec_deg);
            assert!(res.distance_au.unwrap() > 0.0);
            match body {
                Body::Moon => {
                    let k = res.illuminated_fraction.unwrap();
                    assert!((0.0..=1.0).contains(&k));
                    // within the perigee/apogee band
                    let d = res.distance_au.unwrap();
                    assert!((0.0023..0.0028).contains(&d), "moon distance {d}");
                }
                _ => assert!(res.illuminated_fraction.is_none()),
            }
        }
    }
}

#[test]
fn test_sun_stays_on_ecliptic_band() {
    let engine = EphemerisEngine::new();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let t = epoch_from_jd(rng.random_range(2_440_000.5..2_470_000.5));
        let sun = engine.compute(Body::Sun, &t).unwrap();
        assert!(sun.equatorial.dec_deg.abs() <= 23.46);
        let d = sun.distance_au.unwrap();
        assert!((0.983..=1.017).contains(&d), "sun distance {d}");
    }
}

#[test]
fn test_idempotent() {
    let engine = EphemerisEngine::new();
    let t = epoch("2031-11-05T03:14:15 UTC");
    for body in Body::ALL {
        let a = engine.compute(body, &t).unwrap();
        let b = engine.compute(body, &t).unwrap();
        assert_eq!(a.equatorial.ra_deg.to_bits(), b.equatorial.ra_deg.to_bits());
        assert_eq!(a.equatorial.dec_deg.to_bits(), b.equatorial.dec_deg.to_bits());
        assert_eq!(
            a.distance_au.map(f64::to_bits),
            b.distance_au.map(f64::to_bits)
        );
        assert_eq!(
            a.illuminated_fraction.map(f64::to_bits),
            b.illuminated_fraction.map(f64::to_bits)
        );
    }
}

#[test]
fn test_concurrent_compute() {
    let engine = EphemerisEngine::new();
    let t = epoch("2025-01-01T00:00:00 UTC");
    let reference = engine.compute_all(&t).unwrap();
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..100 {
                    assert_eq!(engine.compute_all(&t).unwrap(), reference);
                }
            });
        }
    });
}

#[test]
fn test_moon_ecliptic_latitude_bounded() {
    let engine = EphemerisEngine::new();
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..500 {
        let t = epoch_from_jd(rng.random_range(2_440_000.5..2_470_000.5));
        let ecl = engine.ecliptic(Body::Moon, &t).unwrap();
        assert!(ecl.lat_deg.abs() < 5.5, "moon latitude {}", ecl.lat_deg);
    }
}

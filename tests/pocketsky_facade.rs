mod common;

use std::str::FromStr;

use hifitime::Epoch;
use pocketsky::coordinates::Equatorial;
use pocketsky::ephemeris::Body;
use pocketsky::pocketsky::PocketSky;
use pocketsky::pocketsky_errors::PocketSkyError;
use pocketsky::settings::SkySettings;

use common::fixture_blob;

#[test]
fn test_facade_with_catalog() {
    let sky = PocketSky::try_new(&fixture_blob(), SkySettings::default()).unwrap();
    assert!(sky.has_boundaries());

    let betelgeuse = Equatorial::from_sexagesimal("05 55 10.31", "+07 24 25.4").unwrap();
    assert_eq!(sky.constellation_at(&betelgeuse), Some("ORI"));
}

#[test]
fn test_jupiter_in_fixture_orion_box() {
    // early 2025 Jupiter sits at RA ~72°, Dec ~+22°, inside the simplified Orion box
    let sky = PocketSky::new(&fixture_blob());
    let t = Epoch::from_str("2025-01-01T00:00:00 UTC").unwrap();
    assert_eq!(sky.constellation_of(Body::Jupiter, &t), Ok(Some("ORI")));
    assert_eq!(sky.constellation_of(Body::Sun, &t), Ok(None));
}

#[test]
fn test_corrupt_catalog_falls_back() {
    let mut blob = fixture_blob();
    let last = blob.len() - 1;
    blob[last] ^= 0xFF;

    let sky = PocketSky::new(&blob);
    assert!(!sky.has_boundaries());
    assert_eq!(sky.constellation_at(&Equatorial::new(88.793, 7.407)), None);

    let err = PocketSky::try_new(&blob, SkySettings::default()).unwrap_err();
    assert!(matches!(err, PocketSkyError::ChecksumMismatch { .. }));
}

#[test]
fn test_settings_are_shared() {
    let settings = SkySettings::default()
        .with_kepler_max_iterations(12)
        .with_boundary_epsilon_deg(1e-4);
    let sky = PocketSky::with_settings(&fixture_blob(), settings);
    assert_eq!(sky.settings(), &settings);
    assert_eq!(sky.engine().settings(), &settings);
    assert_eq!(sky.boundaries().epsilon(), 1e-4);
}

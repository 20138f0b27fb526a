use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum PocketSkyError {
    #[error("Boundary catalog truncated: expected at least {expected} bytes, got {actual}")]
    TruncatedCatalog { expected: usize, actual: usize },

    #[error("Invalid boundary catalog magic: {0:?}")]
    InvalidMagic(String),

    #[error("Unsupported boundary catalog version: {0}")]
    UnsupportedVersion(u16),

    #[error("Unexpected region count in boundary catalog: {0} (expected 88)")]
    UnexpectedRegionCount(u16),

    #[error("Boundary catalog checksum mismatch: stored {stored:#010x}, computed {computed:#010x}")]
    ChecksumMismatch { stored: u32, computed: u32 },

    #[error("Boundary catalog payload is {actual} bytes, header announces {expected}")]
    SectionSizeMismatch { expected: usize, actual: usize },

    #[error("Invalid IAU region code at directory index {index}: {code:?}")]
    InvalidRegionCode { index: usize, code: [u8; 4] },

    #[error("{section} entry {index} points outside its table ({start}+{count} > {len})")]
    DirectoryOutOfRange {
        section: &'static str,
        index: usize,
        start: u32,
        count: u32,
        len: usize,
    },

    #[error("Error during the boundary catalog decoding: {0}")]
    CatalogParse(String),

    #[error(
        "Kepler equation did not converge after {iterations} iterations (M = {mean_anomaly} rad, e = {eccentricity})"
    )]
    KeplerNonConvergence {
        mean_anomaly: f64,
        eccentricity: f64,
        iterations: usize,
    },

    #[error("Eccentricity {0} is outside the elliptic range [0, 1)")]
    InvalidEccentricity(f64),

    #[error("Invalid sexagesimal angle: {0}")]
    InvalidSexagesimal(String),

    #[error("Unknown body: {0}")]
    UnknownBody(String),
}

impl PocketSkyError {
    /// `true` for every error raised while validating a boundary blob.
    ///
    /// Callers use this to decide whether to fall back to an empty boundary
    /// source; none of these errors is transient.
    pub fn is_malformed_catalog(&self) -> bool {
        use PocketSkyError::*;
        matches!(
            self,
            TruncatedCatalog { .. }
                | InvalidMagic(_)
                | UnsupportedVersion(_)
                | UnexpectedRegionCount(_)
                | ChecksumMismatch { .. }
                | SectionSizeMismatch { .. }
                | InvalidRegionCode { .. }
                | DirectoryOutOfRange { .. }
                | CatalogParse(_)
        )
    }
}

impl<E: std::fmt::Debug> From<nom::Err<E>> for PocketSkyError {
    fn from(err: nom::Err<E>) -> Self {
        PocketSkyError::CatalogParse(format!("{err:?}"))
    }
}

impl PartialEq for PocketSkyError {
    fn eq(&self, other: &Self) -> bool {
        use PocketSkyError::*;
        match (self, other) {
            (
                TruncatedCatalog {
                    expected: a,
                    actual: b,
                },
                TruncatedCatalog {
                    expected: c,
                    actual: d,
                },
            ) => a == c && b == d,
            (InvalidMagic(a), InvalidMagic(b)) => a == b,
            (UnsupportedVersion(a), UnsupportedVersion(b)) => a == b,
            (UnexpectedRegionCount(a), UnexpectedRegionCount(b)) => a == b,
            (
                ChecksumMismatch {
                    stored: a,
                    computed: b,
                },
                ChecksumMismatch {
                    stored: c,
                    computed: d,
                },
            ) => a == c && b == d,
            (
                SectionSizeMismatch {
                    expected: a,
                    actual: b,
                },
                SectionSizeMismatch {
                    expected: c,
                    actual: d,
                },
            ) => a == c && b == d,
            (
                InvalidRegionCode { index: a, code: b },
                InvalidRegionCode { index: c, code: d },
            ) => a == c && b == d,
            (
                DirectoryOutOfRange {
                    section: s1,
                    index: i1,
                    ..
                },
                DirectoryOutOfRange {
                    section: s2,
                    index: i2,
                    ..
                },
            ) => s1 == s2 && i1 == i2,
            (CatalogParse(a), CatalogParse(b)) => a == b,
            (InvalidSexagesimal(a), InvalidSexagesimal(b)) => a == b,
            (UnknownBody(a), UnknownBody(b)) => a == b,

            // NaN inputs must still compare equal to themselves here
            (
                KeplerNonConvergence { iterations: a, .. },
                KeplerNonConvergence { iterations: b, .. },
            ) => a == b,
            (InvalidEccentricity(a), InvalidEccentricity(b)) => a.to_bits() == b.to_bits(),

            _ => false,
        }
    }
}

#[cfg(test)]
mod pocketsky_errors_test {
    use super::*;

    #[test]
    fn test_malformed_catalog_classification() {
        assert!(PocketSkyError::UnsupportedVersion(2).is_malformed_catalog());
        assert!(PocketSkyError::ChecksumMismatch {
            stored: 1,
            computed: 2
        }
        .is_malformed_catalog());
        assert!(!PocketSkyError::InvalidEccentricity(1.5).is_malformed_catalog());
        assert!(!PocketSkyError::KeplerNonConvergence {
            mean_anomaly: 1.0,
            eccentricity: 0.5,
            iterations: 30
        }
        .is_malformed_catalog());
    }

    #[test]
    fn test_display() {
        let err = PocketSkyError::ChecksumMismatch {
            stored: 0xdeadbeef,
            computed: 0x1,
        };
        assert_eq!(
            err.to_string(),
            "Boundary catalog checksum mismatch: stored 0xdeadbeef, computed 0x00000001"
        );
    }
}

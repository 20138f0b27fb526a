//! # PocketSky: ephemeris engine and constellation index in one handle
//!
//! [`PocketSky`] owns an [`EphemerisEngine`] and a [`BoundaryIndex`] built
//! with the same [`SkySettings`]. It is immutable after construction and can be
//! shared across threads (`Arc<PocketSky>`) without locking.
//!
//! ## Fallback
//!
//! A corrupt or mismatched boundary asset must not take the sky view down.
//! [`PocketSky::new`] logs the load error and continues with
//! [`BoundaryIndex::empty`], so every constellation query answers `None`.
//! [`PocketSky::try_new`] surfaces the error instead.
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use hifitime::Epoch;
//! use pocketsky::ephemeris::Body;
//! use pocketsky::pocketsky::PocketSky;
//!
//! let blob = std::fs::read("constellations.bin").unwrap_or_default();
//! let sky = PocketSky::new(&blob);
//!
//! let now = Epoch::now().unwrap();
//! let moon = sky.ephemeris(Body::Moon, &now).unwrap();
//! println!("{} in {:?}", moon.equatorial, sky.constellation_at(&moon.equatorial));
//! ```
//!
//! ## See also
//! ------------
//! * [`EphemerisEngine::compute`] – Apparent positions of the Sun, the Moon, Jupiter and Saturn.
//! * [`BoundaryIndex::find_constellation`] – Point-in-constellation query.

use hifitime::Epoch;
use tracing::warn;

use crate::boundary::BoundaryIndex;
use crate::coordinates::Equatorial;
use crate::ephemeris::{Body, EphemerisEngine, EphemerisResult};
use crate::pocketsky_errors::PocketSkyError;
use crate::settings::SkySettings;

#[derive(Debug, Clone)]
pub struct PocketSky {
    engine: EphemerisEngine,
    boundaries: BoundaryIndex,
    settings: SkySettings,
}

impl PocketSky {
    /// Build the façade, falling back to an empty boundary index when `blob`
    /// cannot be loaded.
    pub fn new(blob: &[u8]) -> Self {
        Self::with_settings(blob, SkySettings::default())
    }

    /// Same as [`PocketSky::new`] with explicit settings.
    pub fn with_settings(blob: &[u8], settings: SkySettings) -> Self {
        let boundaries = BoundaryIndex::load_with_settings(blob, &settings).unwrap_or_else(|err| {
            warn!(%err, "constellation boundaries unavailable, using an empty index");
            BoundaryIndex::empty()
        });
        Self::from_parts(EphemerisEngine::with_settings(settings), boundaries, settings)
    }

    /// Build the façade, failing if `blob` is not a valid boundary catalog.
    ///
    /// Arguments
    /// ---------
    /// * `blob`: the `PTSKCONS` catalog bytes
    /// * `settings`: shared by the engine and the index
    ///
    /// Return
    /// ------
    /// * The façade, or the catalog error (see [`BoundaryIndex::load_with_settings`])
    pub fn try_new(blob: &[u8], settings: SkySettings) -> Result<Self, PocketSkyError> {
        let boundaries = BoundaryIndex::load_with_settings(blob, &settings)?;
        Ok(Self::from_parts(
            EphemerisEngine::with_settings(settings),
            boundaries,
            settings,
        ))
    }

    pub fn from_parts(
        engine: EphemerisEngine,
        boundaries: BoundaryIndex,
        settings: SkySettings,
    ) -> Self {
        Self {
            engine,
            boundaries,
            settings,
        }
    }

    pub fn engine(&self) -> &EphemerisEngine {
        &self.engine
    }

    pub fn boundaries(&self) -> &BoundaryIndex {
        &self.boundaries
    }

    pub fn settings(&self) -> &SkySettings {
        &self.settings
    }

    /// `true` when constellation queries can succeed.
    pub fn has_boundaries(&self) -> bool {
        !self.boundaries.is_empty()
    }

    pub fn ephemeris(
        &self,
        body: Body,
        instant: &Epoch,
    ) -> Result<EphemerisResult, PocketSkyError> {
        self.engine.compute(body, instant)
    }

    pub fn constellation_at(&self, direction: &Equatorial) -> Option<&str> {
        self.boundaries.find_equatorial(direction)
    }

    /// Constellation in which `body` appears at `instant`.
    ///
    /// Return
    /// ------
    /// * `Ok(None)` when no region contains the body (always the case with an
    ///   empty index), an error only if the ephemeris sample is rejected
    pub fn constellation_of(
        &self,
        body: Body,
        instant: &Epoch,
    ) -> Result<Option<&str>, PocketSkyError> {
        let position = self.engine.compute(body, instant)?;
        Ok(self.constellation_at(&position.equatorial))
    }
}

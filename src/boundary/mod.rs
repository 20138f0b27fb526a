//! # Constellation boundary index
//!
//! [`BoundaryIndex`] answers "which IAU constellation contains this point?"
//! from a compact binary catalog (`PTSKCONS`, version 1).
//!
//! ## Catalog layout (little-endian)
//!
//! ```text
//! header      26 B   see [`header`]
//! regions     88 × 28 B   code[4] polyStart:u32 polyCount:u32 aabb:4×f32
//! polygons    P  × 24 B   vertexStart:u32 vertexCount:u32 aabb:4×f32
//! vertices    V  ×  8 B   ra:f32 dec:f32
//! ```
//!
//! An `aabb` is `(raMin, raMax, decMin, decMax)` in degrees and wraps when
//! `raMin > raMax`. The header CRC32 covers everything after the header.
//!
//! ## Loading
//!
//! [`BoundaryIndex::load`] is all-or-nothing: the header is validated, the
//! payload length must match the counts exactly, the CRC must match, and every
//! directory range must fall inside its table. Only then are polygons
//! unwrapped ([`polygon`]) and region boxes rebuilt from their polygons
//! ([`aabb::Aabb::union`]). Any failure returns an error and no index.
//!
//! ## Query
//!
//! [`BoundaryIndex::find_constellation`] scans the regions in directory order,
//! pruning with the region box, then each polygon's box, and finally runs an
//! even-odd ray cast in the polygon's unwrapped RA plane. The first hit wins.
//!
//! ```rust
//! use pocketsky::boundary::BoundaryIndex;
//!
//! let index = BoundaryIndex::empty();
//! assert!(index.is_empty());
//! assert_eq!(index.find_constellation(88.793, 7.407), None);
//! ```

pub mod aabb;
pub mod builder;
pub mod directory;
pub mod header;
pub mod polygon;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::angles::wrap_360;
use crate::constants::Degree;
use crate::coordinates::Equatorial;
use crate::pocketsky_errors::PocketSkyError;
use crate::settings::SkySettings;

use aabb::Aabb;
use directory::{Directory, PolygonEntry, RawVertex, RegionEntry};
use header::{CatalogHeader, HEADER_SIZE};
use polygon::{Polygon, Vertex};

/// Polygons of one constellation; most regions have a single ring.
pub type Polygons = SmallVec<[Polygon; 2]>;

/// One IAU constellation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstellationRegion {
    code: String,
    aabb: Aabb,
    polygons: Polygons,
}

impl ConstellationRegion {
    /// Upper-case three-letter IAU abbreviation.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// `ra` must be normalized to `[0, 360)`.
    pub fn contains(&self, ra: Degree, dec: Degree, eps: Degree) -> bool {
        self.aabb.contains(ra, dec, eps) && self.polygons.iter().any(|p| p.contains(ra, dec, eps))
    }
}

/// Immutable, thread-safe constellation lookup structure.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryIndex {
    header: Option<CatalogHeader>,
    regions: Vec<ConstellationRegion>,
    epsilon: Degree,
}

impl BoundaryIndex {
    /// Load a catalog with the default query slack.
    ///
    /// See [`BoundaryIndex::load_with_settings`].
    pub fn load(bytes: &[u8]) -> Result<Self, PocketSkyError> {
        Self::load_with_settings(bytes, &SkySettings::default())
    }

    /// Validate and decode a `PTSKCONS` catalog.
    ///
    /// Arguments
    /// ---------
    /// * `bytes`: the complete catalog blob
    /// * `settings`: provides the epsilon used by every query on this index
    ///
    /// Return
    /// ------
    /// * A ready-to-query index
    ///
    /// Errors
    /// ------
    /// * [`PocketSkyError::TruncatedCatalog`] if the blob is shorter than a header
    /// * [`PocketSkyError::InvalidMagic`], [`PocketSkyError::UnsupportedVersion`],
    ///   [`PocketSkyError::UnexpectedRegionCount`] for a foreign header
    /// * [`PocketSkyError::SectionSizeMismatch`] if the payload length disagrees with the counts
    /// * [`PocketSkyError::ChecksumMismatch`] if the CRC32 differs
    /// * [`PocketSkyError::InvalidRegionCode`], [`PocketSkyError::DirectoryOutOfRange`]
    ///   for an inconsistent directory
    pub fn load_with_settings(
        bytes: &[u8],
        settings: &SkySettings,
    ) -> Result<Self, PocketSkyError> {
        if bytes.len() < HEADER_SIZE {
            return Err(PocketSkyError::TruncatedCatalog {
                expected: HEADER_SIZE,
                actual: bytes.len(),
            });
        }

        let (payload, header) = CatalogHeader::parse(bytes)?;
        header.validate()?;

        let expected = header.payload_size();
        if payload.len() != expected {
            return Err(PocketSkyError::SectionSizeMismatch {
                expected,
                actual: payload.len(),
            });
        }

        let mut hasher = crc32fast::Hasher::new();
        hasher.update(payload);
        let computed = hasher.finalize();
        if computed != header.crc32 {
            return Err(PocketSkyError::ChecksumMismatch {
                stored: header.crc32,
                computed,
            });
        }

        let (_, directory) = Directory::parse(payload, &header)?;
        let regions = build_regions(&directory)?;

        debug!(
            regions = regions.len(),
            polygons = header.polygon_count,
            vertices = header.vertex_count,
            "constellation boundary catalog loaded"
        );

        Ok(Self {
            header: Some(header),
            regions,
            epsilon: settings.boundary_epsilon_deg,
        })
    }

    /// Index without any region: every query answers `None`.
    pub fn empty() -> Self {
        Self {
            header: None,
            regions: Vec::new(),
            epsilon: SkySettings::default().boundary_epsilon_deg,
        }
    }

    /// IAU code of the constellation containing `(ra_deg, dec_deg)`.
    ///
    /// RA may be given in any range; it is normalized to `[0, 360)` first.
    ///
    /// Return
    /// ------
    /// * The upper-case code of the first region (directory order) whose
    ///   polygon contains the point, or `None`
    pub fn find_constellation(&self, ra_deg: Degree, dec_deg: Degree) -> Option<&str> {
        let ra = wrap_360(ra_deg);
        let found = self
            .regions
            .iter()
            .find(|region| region.contains(ra, dec_deg, self.epsilon))
            .map(ConstellationRegion::code);
        trace!(ra, dec = dec_deg, constellation = ?found, "constellation lookup");
        found
    }

    /// [`BoundaryIndex::find_constellation`] for an [`Equatorial`] direction.
    pub fn find_equatorial(&self, direction: &Equatorial) -> Option<&str> {
        self.find_constellation(direction.ra_deg, direction.dec_deg)
    }

    pub fn regions(&self) -> &[ConstellationRegion] {
        &self.regions
    }

    /// Region by IAU code, case-insensitive.
    pub fn region(&self, code: &str) -> Option<&ConstellationRegion> {
        self.regions
            .iter()
            .find(|r| r.code.eq_ignore_ascii_case(code.trim()))
    }

    /// Header of the loaded catalog, `None` for [`BoundaryIndex::empty`].
    pub fn header(&self) -> Option<&CatalogHeader> {
        self.header.as_ref()
    }

    pub fn polygon_count(&self) -> usize {
        self.regions.iter().map(|r| r.polygons.len()).sum()
    }

    pub fn vertex_count(&self) -> usize {
        self.regions
            .iter()
            .flat_map(|r| r.polygons.iter())
            .map(|p| p.vertices().len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn epsilon(&self) -> Degree {
        self.epsilon
    }
}

impl Default for BoundaryIndex {
    fn default() -> Self {
        Self::empty()
    }
}

/// Slice `table[start..start + count]`, or the out-of-range error for entry `index`.
fn checked_range<'a, T>(
    table: &'a [T],
    section: &'static str,
    index: usize,
    start: u32,
    count: u32,
) -> Result<&'a [T], PocketSkyError> {
    let end = start as u64 + count as u64;
    if end > table.len() as u64 {
        return Err(PocketSkyError::DirectoryOutOfRange {
            section,
            index,
            start,
            count,
            len: table.len(),
        });
    }
    Ok(&table[start as usize..end as usize])
}

fn build_polygon(
    index: usize,
    entry: &PolygonEntry,
    vertices: &[RawVertex],
) -> Result<Polygon, PocketSkyError> {
    let ring = checked_range(vertices, "polygon", index, entry.vertex_start, entry.vertex_count)?;
    Ok(Polygon::new(
        ring.iter().map(|v| Vertex::new(v.ra as Degree, v.dec as Degree)),
        entry.aabb,
    ))
}

fn build_region(
    index: usize,
    entry: &RegionEntry,
    directory: &Directory,
) -> Result<ConstellationRegion, PocketSkyError> {
    let code = entry
        .iau_code()
        .ok_or(PocketSkyError::InvalidRegionCode {
            index,
            code: entry.code,
        })?;

    let entries = checked_range(
        &directory.polygons,
        "region",
        index,
        entry.polygon_start,
        entry.polygon_count,
    )?;
    let first = entry.polygon_start as usize;
    let polygons = entries
        .iter()
        .enumerate()
        .map(|(k, p)| build_polygon(first + k, p, &directory.vertices))
        .collect::<Result<Polygons, _>>()?;

    let aabb = Aabb::union(polygons.iter().map(Polygon::aabb)).unwrap_or(entry.aabb);

    Ok(ConstellationRegion {
        code,
        aabb,
        polygons,
    })
}

fn build_regions(directory: &Directory) -> Result<Vec<ConstellationRegion>, PocketSkyError> {
    // every polygon entry must be in range, referenced by a region or not
    for (index, entry) in directory.polygons.iter().enumerate() {
        checked_range(
            &directory.vertices,
            "polygon",
            index,
            entry.vertex_start,
            entry.vertex_count,
        )?;
    }

    directory
        .regions
        .iter()
        .enumerate()
        .map(|(index, entry)| build_region(index, entry, directory))
        .collect()
}

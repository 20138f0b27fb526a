//! Encoder for `PTSKCONS` boundary catalogs.
//!
//! [`CatalogBuilder`] takes regions as lists of vertex rings and produces the
//! exact byte layout read by [`BoundaryIndex::load`](super::BoundaryIndex::load):
//! polygon boxes are derived from the unwrapped rings, region boxes from the
//! union of their polygons, and the header CRC32 from the encoded payload.
//!
//! ```rust
//! use pocketsky::boundary::{builder::CatalogBuilder, BoundaryIndex};
//!
//! let mut builder = CatalogBuilder::new()
//!     .region("ORI", [vec![(70.0, -11.0), (95.0, -11.0), (95.0, 23.0), (70.0, 23.0)]]);
//! for k in 1..88 {
//!     let code: String = [b'A' + (k / 26) as u8, b'A' + (k % 26) as u8, b'X']
//!         .iter()
//!         .map(|&c| c as char)
//!         .collect();
//!     builder = builder.region(&code, Vec::<Vec<(f64, f64)>>::new());
//! }
//! let index = BoundaryIndex::load(&builder.build().unwrap()).unwrap();
//! assert_eq!(index.find_constellation(88.793, 7.407), Some("ORI"));
//! ```

use crate::constants::{Degree, IAU_REGION_COUNT};
use crate::pocketsky_errors::PocketSkyError;

use super::aabb::Aabb;
use super::header::{
    CatalogHeader, HEADER_SIZE, MAGIC, POLYGON_ENTRY_SIZE, REGION_ENTRY_SIZE, SUPPORTED_VERSION,
    VERTEX_SIZE,
};
use super::polygon::{Polygon, Vertex};

#[derive(Debug, Clone, PartialEq)]
struct RegionSpec {
    code: String,
    rings: Vec<Vec<Vertex>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogBuilder {
    regions: Vec<RegionSpec>,
}

fn encode_code(index: usize, code: &str) -> Result<[u8; 4], PocketSkyError> {
    let bytes = code.as_bytes();
    let mut out = [0u8; 4];
    for (dst, src) in out.iter_mut().zip(bytes) {
        *dst = *src;
    }
    if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_alphabetic) {
        return Err(PocketSkyError::InvalidRegionCode { index, code: out });
    }
    out[3] = 0;
    Ok(out)
}

fn put_aabb(buf: &mut Vec<u8>, aabb: &Aabb) {
    for v in [aabb.ra_min, aabb.ra_max, aabb.dec_min, aabb.dec_max] {
        buf.extend_from_slice(&(v as f32).to_le_bytes());
    }
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a region. Regions are stored, and therefore matched, in
    /// insertion order.
    ///
    /// Arguments
    /// ---------
    /// * `code`: three-letter IAU abbreviation
    /// * `rings`: the region's polygons, each a list of `(ra, dec)` degrees
    pub fn region<R, V>(mut self, code: &str, rings: R) -> Self
    where
        R: IntoIterator<Item = V>,
        V: IntoIterator<Item = (Degree, Degree)>,
    {
        self.regions.push(RegionSpec {
            code: code.to_string(),
            rings: rings
                .into_iter()
                .map(|ring| ring.into_iter().map(Vertex::from).collect())
                .collect(),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Encode the catalog.
    ///
    /// Return
    /// ------
    /// * The complete blob: header followed by the CRC-protected payload
    ///
    /// Errors
    /// ------
    /// * [`PocketSkyError::UnexpectedRegionCount`] unless exactly 88 regions were added
    /// * [`PocketSkyError::InvalidRegionCode`] for a code that is not three ASCII letters
    pub fn build(&self) -> Result<Vec<u8>, PocketSkyError> {
        if self.regions.len() != IAU_REGION_COUNT as usize {
            return Err(PocketSkyError::UnexpectedRegionCount(
                u16::try_from(self.regions.len()).unwrap_or(u16::MAX),
            ));
        }

        let codes = self
            .regions
            .iter()
            .enumerate()
            .map(|(index, r)| encode_code(index, &r.code))
            .collect::<Result<Vec<_>, _>>()?;

        let polygon_count: usize = self.regions.iter().map(|r| r.rings.len()).sum();
        let vertex_count: usize = self
            .regions
            .iter()
            .flat_map(|r| r.rings.iter())
            .map(Vec::len)
            .sum();

        let mut regions = Vec::with_capacity(self.regions.len() * REGION_ENTRY_SIZE);
        let mut polygons = Vec::with_capacity(polygon_count * POLYGON_ENTRY_SIZE);
        let mut vertices = Vec::with_capacity(vertex_count * VERTEX_SIZE);
        let mut polygon_start = 0u32;
        let mut vertex_start = 0u32;

        for (spec, code) in self.regions.iter().zip(codes) {
            let boxes: Vec<Aabb> = spec
                .rings
                .iter()
                .map(|ring| *Polygon::from_ring(ring.iter().copied()).aabb())
                .collect();
            let region_box = Aabb::union(&boxes).unwrap_or(Aabb::new(0.0, 0.0, 0.0, 0.0));

            regions.extend_from_slice(&code);
            regions.extend_from_slice(&polygon_start.to_le_bytes());
            regions.extend_from_slice(&(spec.rings.len() as u32).to_le_bytes());
            put_aabb(&mut regions, &region_box);

            for (ring, aabb) in spec.rings.iter().zip(&boxes) {
                polygons.extend_from_slice(&vertex_start.to_le_bytes());
                polygons.extend_from_slice(&(ring.len() as u32).to_le_bytes());
                put_aabb(&mut polygons, aabb);

                for v in ring {
                    vertices.extend_from_slice(&(v.ra as f32).to_le_bytes());
                    vertices.extend_from_slice(&(v.dec as f32).to_le_bytes());
                }
                vertex_start += ring.len() as u32;
            }
            polygon_start += spec.rings.len() as u32;
        }

        let mut payload = regions;
        payload.extend_from_slice(&polygons);
        payload.extend_from_slice(&vertices);

        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&payload);

        let header = CatalogHeader {
            magic: String::from_utf8_lossy(MAGIC).to_string(),
            version: SUPPORTED_VERSION,
            reserved: 0,
            region_count: IAU_REGION_COUNT,
            polygon_count: polygon_count as u32,
            vertex_count: vertex_count as u32,
            crc32: hasher.finalize(),
        };

        let mut blob = Vec::with_capacity(HEADER_SIZE + payload.len());
        blob.extend_from_slice(&header.to_bytes());
        blob.extend_from_slice(&payload);
        Ok(blob)
    }
}

#[cfg(test)]
mod builder_test {
    use super::*;

    fn padded(builder: CatalogBuilder) -> CatalogBuilder {
        let missing = IAU_REGION_COUNT as usize - builder.len();
        (0..missing).fold(builder, |b, k| {
            let code: String = [b'P', b'A' + (k / 26) as u8, b'A' + (k % 26) as u8]
                .iter()
                .map(|&c| c as char)
                .collect();
            b.region(&code, Vec::<Vec<(f64, f64)>>::new())
        })
    }

    #[test]
    fn test_region_count_enforced() {
        let err = CatalogBuilder::new().region("ORI", [vec![(0.0, 0.0)]]).build();
        assert_eq!(err, Err(PocketSkyError::UnexpectedRegionCount(1)));
    }

    #[test]
    fn test_invalid_code() {
        let builder = padded(CatalogBuilder::new().region("OR1", Vec::<Vec<(f64, f64)>>::new()));
        assert_eq!(
            builder.build(),
            Err(PocketSkyError::InvalidRegionCode {
                index: 0,
                code: *b"OR1\0"
            })
        );
    }

    #[test]
    fn test_layout() {
        let builder = padded(CatalogBuilder::new().region(
            "Ori",
            [
                vec![(70.0, -11.0), (95.0, -11.0), (95.0, 23.0), (70.0, 23.0)],
                vec![(350.0, -5.0), (10.0, -5.0), (10.0, 5.0)],
            ],
        ));
        let blob = builder.build().unwrap();

        let (payload, header) = CatalogHeader::parse(&blob).unwrap();
        assert_eq!(header.validate(), Ok(()));
        assert_eq!(header.polygon_count, 2);
        assert_eq!(header.vertex_count, 7);
        assert_eq!(payload.len(), header.payload_size());
        assert_eq!(crc32fast::hash(payload), header.crc32);

        // first region entry
        assert_eq!(&payload[..4], b"Ori\0");
        assert_eq!(&payload[4..8], &0u32.to_le_bytes());
        assert_eq!(&payload[8..12], &2u32.to_le_bytes());
        // union of [70, 95] and the wrapping [350, 10]
        assert_eq!(&payload[12..16], &350f32.to_le_bytes());
        assert_eq!(&payload[16..20], &95f32.to_le_bytes());

        // second polygon entry starts after the first ring
        let second = 88 * REGION_ENTRY_SIZE + POLYGON_ENTRY_SIZE;
        assert_eq!(&payload[second..second + 4], &4u32.to_le_bytes());
        assert_eq!(&payload[second + 4..second + 8], &3u32.to_le_bytes());
        assert_eq!(&payload[second + 8..second + 12], &350f32.to_le_bytes());
        assert_eq!(&payload[second + 12..second + 16], &10f32.to_le_bytes());
    }
}

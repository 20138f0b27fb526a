//! Fixed-size header of a `PTSKCONS` constellation boundary catalog.
//!
//! The header is 26 packed, little-endian bytes:
//!
//! | offset | size | field          |
//! |-------:|-----:|----------------|
//! |      0 |    8 | magic `PTSKCONS` |
//! |      8 |    2 | version (u16)  |
//! |     10 |    2 | reserved (u16) |
//! |     12 |    2 | region count (u16, always 88) |
//! |     14 |    4 | polygon count (u32) |
//! |     18 |    4 | vertex count (u32) |
//! |     22 |    4 | CRC32 of every byte after the header (u32) |
//!
//! [`CatalogHeader::parse`] only decodes; [`CatalogHeader::validate`] checks
//! magic, version and region count, and [`CatalogHeader::payload_size`] gives
//! the exact number of bytes the three tables must occupy.

use std::fmt;

use nom::{
    bytes::complete::take,
    number::complete::{le_u16, le_u32},
    IResult,
};

use crate::constants::IAU_REGION_COUNT;
use crate::pocketsky_errors::PocketSkyError;

pub const MAGIC: &[u8; 8] = b"PTSKCONS";
pub const SUPPORTED_VERSION: u16 = 1;

pub const HEADER_SIZE: usize = 26;
pub const REGION_ENTRY_SIZE: usize = 28;
pub const POLYGON_ENTRY_SIZE: usize = 24;
pub const VERTEX_SIZE: usize = 8;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CatalogHeader {
    /// Format identifier, `"PTSKCONS"` for a valid catalog.
    pub magic: String,
    pub version: u16,
    pub reserved: u16,
    pub region_count: u16,
    pub polygon_count: u32,
    pub vertex_count: u32,
    /// CRC32 (IEEE) of the payload.
    pub crc32: u32,
}

impl CatalogHeader {
    /// Decode the first [`HEADER_SIZE`] bytes of a catalog.
    ///
    /// Arguments
    /// ---------
    /// * `input`: the catalog bytes, starting at offset 0
    ///
    /// Return
    /// ------
    /// * `(payload, header)` where `payload` is everything after the header
    ///
    /// See also
    /// --------
    /// * [`CatalogHeader::validate`] – semantic checks on the decoded fields
    pub fn parse(input: &[u8]) -> IResult<&[u8], Self> {
        let (input, magic) = take(8usize)(input)?;
        let (input, version) = le_u16(input)?;
        let (input, reserved) = le_u16(input)?;
        let (input, region_count) = le_u16(input)?;
        let (input, polygon_count) = le_u32(input)?;
        let (input, vertex_count) = le_u32(input)?;
        let (input, crc32) = le_u32(input)?;
        Ok((
            input,
            CatalogHeader {
                magic: String::from_utf8_lossy(magic).to_string(),
                version,
                reserved,
                region_count,
                polygon_count,
                vertex_count,
                crc32,
            },
        ))
    }

    /// Reject catalogs with a foreign magic, an unknown version or a region
    /// count other than 88.
    pub fn validate(&self) -> Result<(), PocketSkyError> {
        if self.magic.as_bytes() != MAGIC {
            return Err(PocketSkyError::InvalidMagic(self.magic.clone()));
        }
        if self.version != SUPPORTED_VERSION {
            return Err(PocketSkyError::UnsupportedVersion(self.version));
        }
        if self.region_count != IAU_REGION_COUNT {
            return Err(PocketSkyError::UnexpectedRegionCount(self.region_count));
        }
        Ok(())
    }

    /// Exact payload length announced by the counts.
    pub fn payload_size(&self) -> usize {
        self.region_count as usize * REGION_ENTRY_SIZE
            + self.polygon_count as usize * POLYGON_ENTRY_SIZE
            + self.vertex_count as usize * VERTEX_SIZE
    }

    /// Encode the header back to its packed form.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        let magic = self.magic.as_bytes();
        let n = magic.len().min(8);
        out[..n].copy_from_slice(&magic[..n]);
        out[8..10].copy_from_slice(&self.version.to_le_bytes());
        out[10..12].copy_from_slice(&self.reserved.to_le_bytes());
        out[12..14].copy_from_slice(&self.region_count.to_le_bytes());
        out[14..18].copy_from_slice(&self.polygon_count.to_le_bytes());
        out[18..22].copy_from_slice(&self.vertex_count.to_le_bytes());
        out[22..26].copy_from_slice(&self.crc32.to_le_bytes());
        out
    }
}

impl fmt::Display for CatalogHeader {
    /// Render a fixed-width table of the header fields.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LABEL_WIDTH: usize = 16;
        const VALUE_WIDTH: usize = 36;

        let border = format!(
            "+{:-<label$}+{:-<value$}+",
            "",
            "",
            label = LABEL_WIDTH + 1,
            value = VALUE_WIDTH + 1
        );

        let rows = [
            ("Magic", format!("{} (Format ID)", self.magic)),
            ("Version", self.version.to_string()),
            ("Regions", format!("{} constellations", self.region_count)),
            ("Polygons", self.polygon_count.to_string()),
            ("Vertices", self.vertex_count.to_string()),
            ("Payload", format!("{} bytes", self.payload_size())),
            ("CRC32", format!("{:#010x}", self.crc32)),
        ];

        writeln!(f, "{border}")?;
        writeln!(
            f,
            "| {:<label$}| {:<value$}|",
            "Boundary Catalog",
            "",
            label = LABEL_WIDTH,
            value = VALUE_WIDTH
        )?;
        writeln!(f, "{border}")?;
        for (label, value) in rows {
            writeln!(
                f,
                "| {:<label$}| {:<value$}|",
                label,
                value,
                label = LABEL_WIDTH,
                value = VALUE_WIDTH
            )?;
        }
        write!(f, "{border}")
    }
}

//! Raw directory tables of a boundary catalog.
//!
//! The payload following the header is three flat arrays, in this order:
//! region entries, polygon entries and vertices. The decoders here are
//! purely structural; range checks against the table lengths happen in
//! [`BoundaryIndex::load`](super::BoundaryIndex::load).

use nom::{
    bytes::complete::take,
    multi::count,
    number::complete::{le_f32, le_u32},
    IResult, Parser,
};

use super::aabb::Aabb;
use super::header::CatalogHeader;
use crate::constants::Degree;

/// One 28-byte region entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionEntry {
    pub code: [u8; 4],
    pub polygon_start: u32,
    pub polygon_count: u32,
    pub aabb: Aabb,
}

/// One 24-byte polygon entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonEntry {
    pub vertex_start: u32,
    pub vertex_count: u32,
    pub aabb: Aabb,
}

/// One 8-byte vertex, RA and Dec in degrees as stored (RA not normalized).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawVertex {
    pub ra: f32,
    pub dec: f32,
}

/// The three decoded tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Directory {
    pub regions: Vec<RegionEntry>,
    pub polygons: Vec<PolygonEntry>,
    pub vertices: Vec<RawVertex>,
}

fn parse_aabb(input: &[u8]) -> IResult<&[u8], Aabb> {
    let (input, ra_min) = le_f32(input)?;
    let (input, ra_max) = le_f32(input)?;
    let (input, dec_min) = le_f32(input)?;
    let (input, dec_max) = le_f32(input)?;
    Ok((
        input,
        Aabb::new(
            ra_min as Degree,
            ra_max as Degree,
            dec_min as Degree,
            dec_max as Degree,
        ),
    ))
}

impl RegionEntry {
    pub fn parse(input: &[u8]) -> IResult<&[u8], Self> {
        let (input, code) = take(4usize)(input)?;
        let (input, polygon_start) = le_u32(input)?;
        let (input, polygon_count) = le_u32(input)?;
        let (input, aabb) = parse_aabb(input)?;
        Ok((
            input,
            RegionEntry {
                code: [code[0], code[1], code[2], code[3]],
                polygon_start,
                polygon_count,
                aabb,
            },
        ))
    }

    /// Upper-cased three-letter IAU code, `None` unless the four stored bytes
    /// are three ASCII letters followed by NUL or a space.
    pub fn iau_code(&self) -> Option<String> {
        let [a, b, c, pad] = self.code;
        let letters = [a, b, c];
        if !letters.iter().all(u8::is_ascii_alphabetic) || !matches!(pad, 0 | b' ') {
            return None;
        }
        Some(
            letters
                .iter()
                .map(|l| l.to_ascii_uppercase() as char)
                .collect(),
        )
    }
}

impl PolygonEntry {
    pub fn parse(input: &[u8]) -> IResult<&[u8], Self> {
        let (input, vertex_start) = le_u32(input)?;
        let (input, vertex_count) = le_u32(input)?;
        let (input, aabb) = parse_aabb(input)?;
        Ok((
            input,
            PolygonEntry {
                vertex_start,
                vertex_count,
                aabb,
            },
        ))
    }
}

impl RawVertex {
    pub fn parse(input: &[u8]) -> IResult<&[u8], Self> {
        let (input, ra) = le_f32(input)?;
        let (input, dec) = le_f32(input)?;
        Ok((input, RawVertex { ra, dec }))
    }
}

impl Directory {
    /// Decode the payload following `header`.
    ///
    /// The caller has already checked that `payload` has exactly
    /// [`CatalogHeader::payload_size`] bytes.
    pub fn parse<'a>(payload: &'a [u8], header: &CatalogHeader) -> IResult<&'a [u8], Self> {
        let (input, regions) =
            count(RegionEntry::parse, header.region_count as usize).parse(payload)?;
        let (input, polygons) =
            count(PolygonEntry::parse, header.polygon_count as usize).parse(input)?;
        let (input, vertices) =
            count(RawVertex::parse, header.vertex_count as usize).parse(input)?;
        Ok((
            input,
            Directory {
                regions,
                polygons,
                vertices,
            },
        ))
    }
}

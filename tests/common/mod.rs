#![allow(dead_code)]

use pocketsky::boundary::{builder::CatalogBuilder, BoundaryIndex};

/// The 88 IAU constellations, in the order the fixture catalog stores them.
pub const IAU_CODES: [&str; 88] = [
    "AND", "ANT", "APS", "AQR", "AQL", "ARA", "ARI", "AUR", "BOO", "CAE", "CAM",
    "CNC", "CVN", "CMA", "CMI", "CAP", "CAR", "CAS", "CEN", "CEP", "CET", "CHA",
    "CIR", "COL", "COM", "CRA", "CRB", "CRV", "CRT", "CRU", "CYG", "DEL", "DOR",
    "DRA", "EQU", "ERI", "FOR", "GEM", "GRU", "HER", "HOR", "HYA", "HYI", "IND",
    "LAC", "LEO", "LMI", "LEP", "LIB", "LUP", "LYN", "LYR", "MEN", "MIC", "MON",
    "MUS", "NOR", "OCT", "OPH", "ORI", "PAV", "PEG", "PER", "PHE", "PIC", "PSC",
    "PSA", "PUP", "PYX", "RET", "SGE", "SGR", "SCO", "SCL", "SCT", "SER", "SEX",
    "TAU", "TEL", "TRI", "TRA", "TUC", "UMA", "UMI", "VEL", "VIR", "VOL", "VUL",
];

pub type Ring = Vec<(f64, f64)>;

/// Simplified Orion box around Betelgeuse.
pub fn orion() -> Vec<Ring> {
    vec![vec![(70.0, -11.0), (95.0, -11.0), (95.0, 23.0), (70.0, 23.0), (70.0, -11.0)]]
}

/// Simplified Lyra box around Vega.
pub fn lyra() -> Vec<Ring> {
    vec![vec![(272.0, 25.0), (290.0, 25.0), (290.0, 48.0), (272.0, 48.0)]]
}

/// Polar cap from Dec +70° to the pole, stored as an RA ring.
pub fn ursa_minor() -> Vec<Ring> {
    vec![vec![
        (0.0, 70.0),
        (120.0, 70.0),
        (240.0, 70.0),
        (0.0, 70.0),
        (0.0, 90.0),
        (240.0, 90.0),
        (120.0, 90.0),
        (0.0, 90.0),
    ]]
}

/// Strip straddling RA 0°.
pub fn pisces() -> Vec<Ring> {
    vec![vec![(350.0, -5.0), (10.0, -5.0), (10.0, 5.0), (350.0, 5.0)]]
}

/// Two disjoint parts, like Serpens Caput and Cauda.
pub fn serpens() -> Vec<Ring> {
    vec![
        vec![(230.0, 0.0), (240.0, 0.0), (240.0, 10.0), (230.0, 10.0)],
        vec![(265.0, -15.0), (280.0, -15.0), (280.0, -5.0), (265.0, -5.0)],
    ]
}

fn rings_for(code: &str) -> Vec<Ring> {
    match code {
        "ORI" => orion(),
        "LYR" => lyra(),
        "UMI" => ursa_minor(),
        "PSC" => pisces(),
        "SER" => serpens(),
        _ => Vec::new(),
    }
}

pub fn fixture_builder() -> CatalogBuilder {
    IAU_CODES
        .iter()
        .fold(CatalogBuilder::new(), |b, code| b.region(code, rings_for(code)))
}

pub fn fixture_blob() -> Vec<u8> {
    fixture_builder().build().unwrap()
}

pub fn fixture_index() -> BoundaryIndex {
    BoundaryIndex::load(&fixture_blob()).unwrap()
}

/// Rewrite the header CRC after patching the payload of `blob`.
pub fn reseal(blob: &mut [u8]) {
    let crc = crc32fast::hash(&blob[26..]);
    blob[22..26].copy_from_slice(&crc.to_le_bytes());
}

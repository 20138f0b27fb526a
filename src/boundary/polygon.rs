//! Boundary polygons in an RA-unwrapped plane.
//!
//! At load time each ring is normalized (RA in `[0, 360)`), stripped of a
//! duplicated closing vertex and then *unwrapped*: walking the ring, every
//! vertex-to-vertex RA step larger than ±180° is folded by a full turn, so a
//! polygon straddling RA 0° becomes one continuous shape (e.g. `350 → 370`)
//! and a polar cap unrolls to a full `[0, 360]` strip. Queries align their RA
//! into the same plane and run a plain even-odd ray cast.

use itertools::Itertools;

use super::aabb::Aabb;
use crate::angles::{wrap_180, wrap_360};
use crate::constants::{Degree, VERTEX_DUP_EPS_DEG};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub ra: Degree,
    pub dec: Degree,
}

impl Vertex {
    pub const fn new(ra: Degree, dec: Degree) -> Self {
        Self { ra, dec }
    }
}

impl From<(Degree, Degree)> for Vertex {
    fn from((ra, dec): (Degree, Degree)) -> Self {
        Self::new(ra, dec)
    }
}

/// Normalize, de-duplicate and unwrap a raw vertex ring.
///
/// Arguments
/// ---------
/// * `raw`: vertices as stored, RA in any range
///
/// Return
/// ------
/// * The ring with a continuous RA coordinate; the first vertex keeps its
///   normalized RA in `[0, 360)`.
pub fn unwrap_ring(raw: impl IntoIterator<Item = Vertex>) -> Vec<Vertex> {
    let mut ring: Vec<Vertex> = raw
        .into_iter()
        .map(|v| Vertex::new(wrap_360(v.ra), v.dec))
        .collect();

    let closed = match ring.as_slice() {
        [first, .., last] => {
            wrap_180(last.ra - first.ra).abs() < VERTEX_DUP_EPS_DEG
                && (last.dec - first.dec).abs() < VERTEX_DUP_EPS_DEG
        }
        _ => false,
    };
    if closed {
        ring.pop();
    }

    let mut previous_raw = match ring.first() {
        Some(v) => v.ra,
        None => return ring,
    };
    let mut previous_unwrapped = previous_raw;
    for v in ring.iter_mut().skip(1) {
        let mut delta = v.ra - previous_raw;
        if delta > 180.0 {
            delta -= 360.0;
        } else if delta < -180.0 {
            delta += 360.0;
        }
        previous_raw = v.ra;
        previous_unwrapped += delta;
        v.ra = previous_unwrapped;
    }
    ring
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vertex>,
    aabb: Aabb,
    ra_range: (Degree, Degree),
}

impl Polygon {
    /// Build a polygon from its stored vertices and stored box.
    ///
    /// The box only serves as a cheap pre-filter; alignment of query RAs uses
    /// the unwrapped range recomputed here.
    pub fn new(raw: impl IntoIterator<Item = Vertex>, aabb: Aabb) -> Self {
        let vertices = unwrap_ring(raw);
        let ra_range = vertices
            .iter()
            .map(|v| v.ra)
            .minmax_by(|a, b| a.total_cmp(b))
            .into_option()
            .unwrap_or((0.0, 0.0));
        Self {
            vertices,
            aabb,
            ra_range,
        }
    }

    /// Build a polygon and derive its box from the unwrapped ring.
    pub fn from_ring(raw: impl IntoIterator<Item = Vertex>) -> Self {
        let mut polygon = Self::new(raw, Aabb::new(0.0, 0.0, 0.0, 0.0));
        let (dec_min, dec_max) = polygon
            .vertices
            .iter()
            .map(|v| v.dec)
            .minmax_by(|a, b| a.total_cmp(b))
            .into_option()
            .unwrap_or((0.0, 0.0));
        let (ra_lo, ra_hi) = polygon.ra_range;
        polygon.aabb = Aabb::from_unwrapped(ra_lo, ra_hi, dec_min, dec_max);
        polygon
    }

    /// Vertices with unwrapped RA.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// `[min, max]` of the unwrapped RA coordinate.
    pub fn unwrapped_range(&self) -> (Degree, Degree) {
        self.ra_range
    }

    /// Fewer than three vertices: such a polygon never contains anything.
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Shift a normalized RA by whole turns into the unwrapped range.
    ///
    /// Return
    /// ------
    /// * The aligned RA, or `None` if it stays outside `[min - eps, max + eps]`
    pub fn align_ra(&self, ra: Degree, eps: Degree) -> Option<Degree> {
        let (lo, hi) = self.ra_range;
        let mut aligned = ra;
        if aligned < lo - eps {
            aligned += ((lo - eps - aligned) / 360.0).ceil() * 360.0;
        } else if aligned > hi + eps {
            aligned -= ((aligned - hi - eps) / 360.0).ceil() * 360.0;
        }
        (aligned >= lo - eps && aligned <= hi + eps).then_some(aligned)
    }

    /// Full point-in-polygon test for a normalized RA and a Dec, in degrees.
    ///
    /// Box pre-filter, RA alignment, then even-odd ray casting along
    /// constant Dec towards increasing RA. Edges flatter than `eps` in Dec
    /// are ignored.
    pub fn contains(&self, ra: Degree, dec: Degree, eps: Degree) -> bool {
        if self.is_degenerate() || !self.aabb.contains(ra, dec, eps) {
            return false;
        }
        match self.align_ra(ra, eps) {
            Some(x) => self.ray_cast(x, dec, eps),
            None => false,
        }
    }

    fn ray_cast(&self, x: Degree, y: Degree, eps: Degree) -> bool {
        let crossings = self
            .vertices
            .iter()
            .circular_tuple_windows()
            .filter(|(a, b)| {
                (a.dec - b.dec).abs() >= eps
                    && (a.dec > y) != (b.dec > y)
                    && x < (b.ra - a.ra) * (y - a.dec) / (b.dec - a.dec) + a.ra
            })
            .count();
        crossings % 2 == 1
    }
}

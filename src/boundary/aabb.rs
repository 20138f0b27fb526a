//! Right-ascension/declination boxes that may straddle RA 0°/360°.
//!
//! A box with `ra_min > ra_max` wraps: it covers `[ra_min, 360)` ∪ `[0, ra_max]`.
//! `[0, 360]` is the full circle.

use itertools::Itertools;
use smallvec::{smallvec, SmallVec};

use crate::angles::wrap_360;
use crate::constants::Degree;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub ra_min: Degree,
    pub ra_max: Degree,
    pub dec_min: Degree,
    pub dec_max: Degree,
}

impl Aabb {
    pub const fn new(ra_min: Degree, ra_max: Degree, dec_min: Degree, dec_max: Degree) -> Self {
        Self {
            ra_min,
            ra_max,
            dec_min,
            dec_max,
        }
    }

    /// Box of a polygon whose RA has been unwrapped to `[ra_lo, ra_hi]`.
    ///
    /// A range of a full turn or more (polar caps) gives the full RA circle,
    /// anything else is folded back to `[0, 360)` and may wrap.
    pub fn from_unwrapped(ra_lo: Degree, ra_hi: Degree, dec_min: Degree, dec_max: Degree) -> Self {
        if ra_hi - ra_lo >= 360.0 {
            Self::new(0.0, 360.0, dec_min, dec_max)
        } else {
            Self::new(wrap_360(ra_lo), wrap_360(ra_hi), dec_min, dec_max)
        }
    }

    #[inline]
    pub fn wraps(&self) -> bool {
        self.ra_min > self.ra_max
    }

    /// Angular width of the RA interval, in `[0, 360]`.
    pub fn ra_span(&self) -> Degree {
        if self.wraps() {
            self.ra_max + 360.0 - self.ra_min
        } else {
            self.ra_max - self.ra_min
        }
    }

    /// RA test. `ra` must already be in `[0, 360)`.
    ///
    /// The query is measured as an offset from `ra_min` around the circle, so
    /// the slack `eps` also applies across the 0°/360° seam.
    #[inline]
    pub fn contains_ra(&self, ra: Degree, eps: Degree) -> bool {
        let offset = wrap_360(ra - self.ra_min);
        offset <= self.ra_span() + eps || offset >= 360.0 - eps
    }

    #[inline]
    pub fn contains_dec(&self, dec: Degree, eps: Degree) -> bool {
        dec >= self.dec_min - eps && dec <= self.dec_max + eps
    }

    #[inline]
    pub fn contains(&self, ra: Degree, dec: Degree, eps: Degree) -> bool {
        self.contains_dec(dec, eps) && self.contains_ra(ra, eps)
    }

    /// RA coverage as non-wrapping arcs inside `[0, 360]`.
    fn ra_arcs(&self) -> SmallVec<[(Degree, Degree); 2]> {
        if self.wraps() {
            smallvec![(self.ra_min, 360.0), (0.0, self.ra_max)]
        } else {
            smallvec![(self.ra_min, self.ra_max)]
        }
    }

    /// Smallest box enclosing every input box.
    ///
    /// Declination bounds are the plain min/max. The RA interval is the
    /// complement of the largest arc of the circle left uncovered by the
    /// inputs, which yields a wrapping box for regions straddling RA 0°.
    /// When the inputs cover the whole circle the result spans `[0, 360]`.
    ///
    /// Return
    /// ------
    /// * `None` when `boxes` is empty
    pub fn union<'a>(boxes: impl IntoIterator<Item = &'a Aabb>) -> Option<Aabb> {
        let mut dec_min = f64::INFINITY;
        let mut dec_max = f64::NEG_INFINITY;
        let mut arcs: Vec<(Degree, Degree)> = Vec::new();

        for b in boxes {
            dec_min = dec_min.min(b.dec_min);
            dec_max = dec_max.max(b.dec_max);
            arcs.extend(b.ra_arcs());
        }
        if arcs.is_empty() {
            return None;
        }

        arcs.sort_by(|a, b| a.0.total_cmp(&b.0));
        let merged = arcs
            .into_iter()
            .coalesce(|a, b| {
                if b.0 <= a.1 {
                    Ok((a.0, a.1.max(b.1)))
                } else {
                    Err((a, b))
                }
            })
            .collect_vec();

        let (first, last) = (merged[0], merged[merged.len() - 1]);
        let wrap_gap = (last.1, first.0 + 360.0);
        let (gap_start, gap_end) = merged
            .iter()
            .tuple_windows()
            .map(|(a, b)| (a.1, b.0))
            .chain(std::iter::once(wrap_gap))
            .max_by(|a, b| (a.1 - a.0).total_cmp(&(b.1 - b.0)))
            .unwrap_or(wrap_gap);

        if gap_end - gap_start <= 0.0 {
            return Some(Aabb::new(0.0, 360.0, dec_min, dec_max));
        }
        Some(Aabb::new(wrap_360(gap_end), gap_start, dec_min, dec_max))
    }
}

//! Ocean data: signed sites, rafts, and the canonical four-part diagram.

use std::fmt;

/// A generator index on one row of the ocean: `k > 0` is `s_k` on the top
/// (right) row, `-k` is `s_k` on the bottom (left) row.
pub type Site = isize;

/// Row of the ocean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Row {
    /// Right multiplication (positions).
    Top,
    /// Left multiplication (values).
    Bottom,
}

impl Row {
    #[inline]
    pub fn site(self, k: usize) -> Site {
        match self {
            Row::Top => k as Site,
            Row::Bottom => -(k as Site),
        }
    }
}

/// Maximal run `s_start..s_end` of small right ascents, bonded to the run
/// `s_{w(start)}..s_{w(end)}` on the bottom row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Raft {
    pub start: usize,
    pub end: usize,
    pub image_start: usize,
    pub image_end: usize,
}

impl Raft {
    /// Width in generators, `end - start + 1`.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    #[inline]
    pub fn as_tuple(&self) -> (usize, usize, usize, usize) {
        (self.start, self.end, self.image_start, self.image_end)
    }
}

/// Canonical w-ocean: sorted rafts, floats, ropes, tethers of a permutation in S_n.
///
/// Invariants:
/// - All four lists are sorted ascending and duplicate-free.
/// - Every large ascent of either row is exactly one of float, rope, tether.
/// - Equal oceans give equal coset counts; the permutations may differ.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ocean {
    pub n: usize,
    pub rafts: Vec<Raft>,
    pub floats: Vec<Site>,
    pub ropes: Vec<Site>,
    pub tethers: Vec<Site>,
}

impl Ocean {
    #[inline]
    pub fn is_rope(&self, site: Site) -> bool {
        self.ropes.binary_search(&site).is_ok()
    }

    #[inline]
    pub fn num_floats(&self) -> usize {
        self.floats.len()
    }
}

fn write_sites(f: &mut fmt::Formatter<'_>, sites: &[Site]) -> fmt::Result {
    f.write_str("[")?;
    for (i, s) in sites.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{s}")?;
    }
    f.write_str("]")
}

impl fmt::Display for Ocean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("rafts=[")?;
        for (i, r) in self.rafts.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(
                f,
                "({},{},{},{})",
                r.start, r.end, r.image_start, r.image_end
            )?;
        }
        f.write_str("] floats=")?;
        write_sites(f, &self.floats)?;
        f.write_str(" ropes=")?;
        write_sites(f, &self.ropes)?;
        f.write_str(" tethers=")?;
        write_sites(f, &self.tethers)
    }
}

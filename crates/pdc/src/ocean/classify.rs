//! Classification of a permutation's ascents into rafts, floats, ropes, tethers.
//!
//! Each large ascent is sorted by its small-ascent neighbours on the same row:
//! none → float, exactly one → rope, both → tether. Rows are scanned with
//! right-ascent predicates on `w` (top) and on `w⁻¹` (bottom), since the left
//! ascents of `w` are the right ascents of `w⁻¹`.

use super::types::{Ocean, Raft, Row, Site};
use crate::perm::Permutation;

#[derive(Default)]
struct LargeAscents {
    floats: Vec<Site>,
    ropes: Vec<Site>,
    tethers: Vec<Site>,
}

fn scan_row(p: &Permutation, row: Row, out: &mut LargeAscents) {
    for k in 1..p.n() {
        if !p.is_large_right_ascent(k) {
            continue;
        }
        let before = p.is_small_right_ascent(k - 1);
        let after = p.is_small_right_ascent(k + 1);
        let site = row.site(k);
        match (before, after) {
            (false, false) => out.floats.push(site),
            (true, true) => out.tethers.push(site),
            _ => out.ropes.push(site),
        }
    }
}

fn large_ascents(w: &Permutation) -> LargeAscents {
    let mut out = LargeAscents::default();
    scan_row(w, Row::Top, &mut out);
    scan_row(&w.inverse(), Row::Bottom, &mut out);
    out.floats.sort_unstable();
    out.ropes.sort_unstable();
    out.tethers.sort_unstable();
    out
}

/// Maximal runs of small right ascents, sorted by start.
pub fn rafts(w: &Permutation) -> Vec<Raft> {
    let mut out: Vec<Raft> = Vec::new();
    for k in 1..w.n() {
        if !w.is_small_right_ascent(k) {
            continue;
        }
        match out.last_mut() {
            Some(r) if r.end + 1 == k => {
                r.end = k;
                r.image_end = w.value(k);
            }
            _ => out.push(Raft {
                start: k,
                end: k,
                image_start: w.value(k),
                image_end: w.value(k),
            }),
        }
    }
    out
}

/// Large ascents with no adjacent small ascent on the same row.
pub fn floats(w: &Permutation) -> Vec<Site> {
    large_ascents(w).floats
}

/// Large ascents with exactly one adjacent small ascent.
pub fn ropes(w: &Permutation) -> Vec<Site> {
    large_ascents(w).ropes
}

/// Large ascents flanked by small ascents on both sides.
pub fn tethers(w: &Permutation) -> Vec<Site> {
    large_ascents(w).tethers
}

pub fn num_floats(w: &Permutation) -> usize {
    large_ascents(w).floats.len()
}

/// The canonical w-ocean.
pub fn ocean(w: &Permutation) -> Ocean {
    let LargeAscents {
        floats,
        ropes,
        tethers,
    } = large_ascents(w);
    Ocean {
        n: w.n(),
        rafts: rafts(w),
        floats,
        ropes,
        tethers,
    }
}

impl Ocean {
    /// Same as [`ocean`].
    pub fn of(w: &Permutation) -> Ocean {
        ocean(w)
    }
}

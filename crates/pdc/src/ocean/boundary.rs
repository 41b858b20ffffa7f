//! Boundary apparatus of a raft and its collapse onto the 27 `b` sequences.
//!
//! Purpose
//! - Each raft sees four corner sites: bottom-left, top-left, bottom-right,
//!   top-right. A corner is a rope, a chosen tether, or nothing. The raft's
//!   contribution to c_w depends only on the orbit of that corner pattern
//!   under swapping rows and swapping sides.
//!
//! Why this design
//! - The 3^4 = 81 patterns fall into 27 orbits of the Klein four-group. We
//!   store one representative per orbit in the published order and expand
//!   them into an 81-entry lookup table once, on first use.

use std::sync::OnceLock;

use self::Corner::{Other as O, Rope as R, Tether as T};
use super::types::{Ocean, Raft, Site};

/// Corner of a raft's boundary. Discriminants follow the published
/// weights (other 0, tether 1, rope 10).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Corner {
    Other = 0,
    Tether = 1,
    Rope = 10,
}

impl Corner {
    #[inline]
    fn digit(self) -> usize {
        match self {
            Corner::Other => 0,
            Corner::Tether => 1,
            Corner::Rope => 2,
        }
    }
}

/// Corner pattern of one raft for one choice of active tethers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundaryApparatus {
    pub bottom_left: Corner,
    pub top_left: Corner,
    pub bottom_right: Corner,
    pub top_right: Corner,
}

impl BoundaryApparatus {
    pub const fn new(corners: [Corner; 4]) -> Self {
        let [bottom_left, top_left, bottom_right, top_right] = corners;
        Self {
            bottom_left,
            top_left,
            bottom_right,
            top_right,
        }
    }

    pub fn corners(&self) -> [Corner; 4] {
        [
            self.bottom_left,
            self.top_left,
            self.bottom_right,
            self.top_right,
        ]
    }

    /// Reflect top and bottom rows.
    pub fn swap_rows(self) -> Self {
        Self::new([
            self.top_left,
            self.bottom_left,
            self.top_right,
            self.bottom_right,
        ])
    }

    /// Reflect left and right sides.
    pub fn swap_sides(self) -> Self {
        Self::new([
            self.bottom_right,
            self.top_right,
            self.bottom_left,
            self.top_left,
        ])
    }

    pub fn orbit(self) -> [Self; 4] {
        [
            self,
            self.swap_rows(),
            self.swap_sides(),
            self.swap_rows().swap_sides(),
        ]
    }

    /// Base-3 code in 0..81.
    fn code(&self) -> usize {
        self.corners().iter().fold(0, |acc, c| acc * 3 + c.digit())
    }

    /// Index `k` of the sequence `b(k, ·)` this pattern reduces to.
    pub fn b_index(&self) -> usize {
        usize::from(lookup()[self.code()])
    }
}

/// One representative per orbit, indexed by `b` sequence.
pub const CLASS_REPRESENTATIVES: [[Corner; 4]; 27] = [
    [O, O, O, O],
    [T, O, O, O],
    [T, O, T, O],
    [T, T, O, O],
    [O, T, T, O],
    [T, T, T, O],
    [T, T, T, T],
    [R, O, O, O],
    [R, O, T, O],
    [R, T, O, O],
    [O, R, T, O],
    [T, R, T, O],
    [T, T, R, O],
    [R, T, T, O],
    [R, T, T, T],
    [R, O, R, O],
    [R, R, O, O],
    [O, R, R, O],
    [T, R, R, O],
    [R, R, T, O],
    [R, T, R, O],
    [R, T, R, T],
    [R, R, T, T],
    [T, R, R, T],
    [R, R, R, O],
    [R, R, R, T],
    [R, R, R, R],
];

fn lookup() -> &'static [u8; 81] {
    static TABLE: OnceLock<[u8; 81]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [u8::MAX; 81];
        for (k, rep) in CLASS_REPRESENTATIVES.iter().enumerate() {
            for member in BoundaryApparatus::new(*rep).orbit() {
                table[member.code()] = k as u8;
            }
        }
        debug_assert!(table.iter().all(|&k| k != u8::MAX));
        table
    })
}

/// Corner pattern of `raft` when exactly the tethers in `chosen` are active.
///
/// Left corners exist only when the raft does not start at `s_1`; right
/// corners only when it does not end at `s_{n-1}`. Ropes take precedence.
pub fn boundary(ocean: &Ocean, chosen: &[Site], raft: &Raft) -> BoundaryApparatus {
    let corner = |site: Site| {
        if ocean.is_rope(site) {
            Corner::Rope
        } else if chosen.contains(&site) {
            Corner::Tether
        } else {
            Corner::Other
        }
    };
    let mut out = BoundaryApparatus::new([Corner::Other; 4]);
    if raft.start > 1 {
        out.bottom_left = corner(-(raft.image_start as Site - 1));
        out.top_left = corner(raft.start as Site - 1);
    }
    if raft.end + 1 < ocean.n {
        out.bottom_right = corner(-(raft.image_end as Site + 1));
        out.top_right = corner(raft.end as Site + 1);
    }
    out
}

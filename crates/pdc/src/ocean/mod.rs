//! w-oceans: the canonical diagram of a permutation's ascents.
//!
//! Purpose
//! - Classify each large ascent of `w` (top row) and of `w⁻¹` (bottom row)
//!   as float, rope or tether, and collect the runs of small right ascents
//!   into rafts bonded to their images.
//! - Reduce each raft's neighbourhood to one of 27 boundary classes, which
//!   select the `b` sequence used by the counting formula.
//!
//! Conventions
//! - Sites are signed: `k` for `s_k` on the top row, `-k` on the bottom row.
//! - Lists inside an `Ocean` are sorted, so equal diagrams compare equal.
//!
//! References
//! - Small ascent: `w(i+1) = w(i) + 1`; large ascent: `w(i+1) > w(i) + 1`.

mod boundary;
mod classify;
mod survey;
mod types;

pub use boundary::{boundary, BoundaryApparatus, Corner, CLASS_REPRESENTATIVES};
pub use classify::{floats, num_floats, ocean, rafts, ropes, tethers};
pub use survey::{duplicate_oceans, duplicate_pairs, oceans};
pub use types::{Ocean, Raft, Row, Site};

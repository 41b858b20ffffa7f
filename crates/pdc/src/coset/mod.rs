//! Parabolic subgroups and parabolic double cosets `W_I·w·W_J` in S_n.
//!
//! Purpose
//! - Minimal/maximal elements of one- and two-sided cosets by bubble passes.
//! - Coset cardinality from block factorizations (no enumeration), with the
//!   brute-force enumerations kept alongside as references.
//! - Set equality, containment, rank, and the interval → presentation check.
//!
//! Conventions
//! - `rank` is the Bruhat distance `length(max) - length(min)`.
//! - `parabolic_order` assumes type A: blocks of consecutive generators act
//!   independently as symmetric groups.
//! - Index sets are validated against the permutation size at every public
//!   entry point (`PermError::IndexOutOfRange`).

mod double;
mod extremal;
mod interval;
mod subgroup;

pub use double::{cardinality, equals, rank, DoubleCoset};
pub use extremal::{maximal, maximal_left, maximal_right, minimal, minimal_left, minimal_right};
pub use interval::{is_parabolic_double_coset, presentation, IntervalError};
pub use subgroup::{double_coset, parabolic_order, parabolic_subgroup, simple};

#[cfg(test)]
mod tests;

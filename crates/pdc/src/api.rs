//! Curated internal API (UNSTABLE).
//!
//! Important
//! - Convenience surface for the CLI and the Python bindings. Breaking
//!   changes are allowed.

// Permutations
pub use crate::perm::{Group, IndexSet, PermError, Permutation};
// Cosets
pub use crate::coset::{
    cardinality, is_parabolic_double_coset, maximal, minimal, parabolic_order, presentation,
    rank, DoubleCoset, IntervalError,
};
// Enumeration
pub use crate::enumerate::{random_permutation, symmetric_group, SymmetricGroup};
// Oceans
pub use crate::ocean::{
    boundary, duplicate_oceans, duplicate_pairs, num_floats, ocean, oceans, BoundaryApparatus,
    Corner, Ocean, Raft, Site,
};
// Sequences
pub use crate::sequences::{term_by_matrix_power, Family, SequenceError, SequenceTable};
// Counting
pub use crate::count::{CosetCounter, CountCfg, CountError, PnReport, Strategy};

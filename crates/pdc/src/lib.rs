//! Parabolic double cosets of the symmetric group S_n.
//!
//! Modules
//! - `perm`: permutations in one-line notation, generators, ascent/descent sets.
//! - `coset`: parabolic subgroups, minimal/maximal coset elements, cardinality,
//!   interval presentations.
//! - `enumerate`: iteration over S_n and seeded random permutations.
//! - `ocean`: the w-ocean of a permutation and raft boundary classes.
//! - `sequences`: the a- and b-sequences satisfying the shared recurrence.
//! - `count`: c_w and p_n.
//!
//! API Policy
//! - The crate has no stable public API; `api` collects the re-exports used by
//!   the CLI and the Python bindings.

pub mod api;
pub mod coset;
pub mod count;
pub mod enumerate;
pub mod ocean;
pub mod perm;
pub mod sequences;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use count::{CosetCounter, Strategy};
pub use ocean::Ocean;
pub use perm::{Group, IndexSet, Permutation};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::coset::{maximal, minimal, DoubleCoset};
    pub use crate::count::{CosetCounter, CountCfg, Strategy};
    pub use crate::enumerate::{random_permutation, symmetric_group};
    pub use crate::ocean::{ocean, Ocean};
    pub use crate::perm::{Group, IndexSet, Permutation};
}

/// `c_w` with a fresh memo. Prefer a shared `CosetCounter` in loops.
pub fn c(w: &Permutation) -> Result<u128, count::CountError> {
    CosetCounter::new().c(w)
}

/// `p_n` with the combined strategy.
pub fn p(n: usize) -> Result<u128, count::CountError> {
    CosetCounter::new().p(n, Strategy::Combined)
}

//! Permutation algebra for S_n in one-line notation.
//!
//! Purpose
//! - Multiplication, inversion, Coxeter length and the generators `s_k`.
//! - Ascent/descent predicates feeding the coset and ocean modules.
//!
//! Conventions
//! - Multiplying on the LEFT permutes VALUES; on the RIGHT permutes POSITIONS.
//! - Products are read right to left: `(w·s)(i) = w(s(i))`.
//! - The group size is carried by `Group`, never by ambient state.

mod descent;
mod types;

pub use types::{Group, IndexSet, PermError, Permutation};

#[cfg(test)]
mod tests;

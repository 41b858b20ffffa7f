//! Counting parabolic double cosets: c_w per minimal element and p_n per group.
//!
//! Purpose
//! - `c_w` is the number of pairs (I, J) for which `w` is the minimal element
//!   of `W_I·w·W_J`; it depends on `w` only through its ocean.
//! - `p_n = Σ_{w ∈ S_n} c_w` counts all parabolic double cosets of S_n.
//!
//! Why this design
//! - c_w is invariant under `w ↦ w⁻¹` and `w ↦ w0·w·w0`, and equal oceans
//!   give equal counts. The strategies exploit these to evaluate far fewer
//!   than n! oceans; `Raw` is kept as the reference.
//! - Totals are exact `u128` with checked arithmetic.

mod counter;
mod strategy;

pub use counter::{CosetCounter, CountError};
pub use strategy::{
    canonical, canonical_ocean, orbit, CountCfg, ParseStrategyError, PnReport, Strategy,
};

//! c_w from the ocean: a sum over tether choices of products of b-terms.

use std::fmt;

use crate::ocean::{boundary, ocean, Ocean, Site};
use crate::perm::{PermError, Permutation};
use crate::sequences::{SequenceError, SequenceTable};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CountError {
    /// Invalid group size or permutation.
    Group(PermError),
    /// A b-term could not be evaluated.
    Sequence(SequenceError),
    /// The count for this `n` does not fit in 128 bits.
    Overflow { n: usize },
}

impl fmt::Display for CountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountError::Group(e) => write!(f, "invalid input: {e}"),
            CountError::Sequence(e) => write!(f, "sequence evaluation failed: {e}"),
            CountError::Overflow { n } => write!(f, "coset count in S_{n} overflows 128-bit integers"),
        }
    }
}

impl std::error::Error for CountError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CountError::Group(e) => Some(e),
            CountError::Sequence(e) => Some(e),
            CountError::Overflow { .. } => None,
        }
    }
}

impl From<PermError> for CountError {
    fn from(e: PermError) -> Self {
        CountError::Group(e)
    }
}

impl From<SequenceError> for CountError {
    fn from(e: SequenceError) -> Self {
        CountError::Sequence(e)
    }
}

/// Counts parabolic double cosets with minimal element `w`.
///
/// Owns the b-sequence memo, so reusing one counter across many
/// permutations amortizes the recurrence.
#[derive(Clone, Debug, Default)]
pub struct CosetCounter {
    seqs: SequenceTable,
}

impl CosetCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sequences(&self) -> &SequenceTable {
        &self.seqs
    }

    /// `c_w`: number of (I, J) with `w` minimal in `W_I·w·W_J`.
    pub fn c(&mut self, w: &Permutation) -> Result<u128, CountError> {
        self.c_from_ocean(&ocean(w))
    }

    /// `c_w` from the ocean alone:
    /// `2^floats · Σ_{T ⊆ tethers} Π_{rafts R} b(class(T, R), |R|)`.
    pub fn c_from_ocean(&mut self, o: &Ocean) -> Result<u128, CountError> {
        let overflow = CountError::Overflow { n: o.n };
        let subsets = 1u64
            .checked_shl(o.tethers.len() as u32)
            .ok_or_else(|| overflow.clone())?;
        let mut chosen: Vec<Site> = Vec::with_capacity(o.tethers.len());
        let mut sum: u128 = 0;
        for mask in 0..subsets {
            chosen.clear();
            chosen.extend(
                o.tethers
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| (mask >> i) & 1 == 1)
                    .map(|(_, &t)| t),
            );
            let mut product: u128 = 1;
            for raft in &o.rafts {
                let k = boundary(o, &chosen, raft).b_index();
                let term = self.seqs.b(k, raft.len())?;
                product = product
                    .checked_mul(term)
                    .ok_or_else(|| overflow.clone())?;
            }
            sum = sum.checked_add(product).ok_or_else(|| overflow.clone())?;
        }
        let floats = o.num_floats() as u32;
        if floats >= u128::BITS {
            return Err(overflow);
        }
        sum.checked_mul(1u128 << floats).ok_or(overflow)
    }
}

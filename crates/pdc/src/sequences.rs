//! a- and b-sequences: integer recurrences indexed by raft boundary types.
//!
//! Every sequence satisfies
//! `f(m) = 6f(m-1) - 13f(m-2) + 16f(m-3) - 11f(m-4) + 4f(m-5)`
//! and differs only in its seed terms.
//!
//! - a-family: 7 sequences (boundary bits only; classes 5 and 6 are the
//!   two-corner types 2′ and 2″), 5 seed terms each.
//! - b-family: 27 sequences, one per boundary-apparatus class, 6 seed terms
//!   each. This is the family used to count cosets.
//!
//! Terms are memoized in a map keyed by `(family, sequence, position)` that
//! only grows. Positions are `usize`, so requests below the seeded range
//! cannot be expressed.

use std::collections::HashMap;
use std::fmt;

use nalgebra::{SMatrix, Vector5};

/// Coefficients of `f(m-1), ..., f(m-5)`.
pub const RECURRENCE: [i128; 5] = [6, -13, 16, -11, 4];

/// Seeds `a^k_0 .. a^k_4`.
pub const A_SEEDS: [[u128; 5]; 7] = [
    [1, 2, 6, 20, 66],
    [1, 3, 9, 28, 89],
    [1, 4, 12, 36, 112],
    [1, 4, 14, 46, 148],
    [1, 4, 16, 56, 184],
    [1, 3, 11, 37, 119],
    [1, 4, 12, 37, 118],
];

/// Seeds `b^k_0 .. b^k_5`.
pub const B_SEEDS: [[u128; 6]; 27] = [
    [1, 2, 6, 20, 66, 214],
    [1, 3, 9, 28, 89, 285],
    [1, 3, 11, 37, 119, 380],
    [1, 4, 12, 36, 112, 356],
    [1, 4, 12, 37, 118, 379],
    [1, 4, 14, 46, 148, 474],
    [1, 4, 16, 56, 184, 592],
    [2, 5, 15, 48, 155, 499],
    [2, 6, 20, 65, 208, 665],
    [2, 7, 21, 64, 201, 641],
    [2, 7, 21, 65, 207, 664],
    [2, 7, 25, 83, 267, 854],
    [2, 8, 26, 82, 260, 830],
    [2, 8, 26, 83, 266, 853],
    [2, 8, 30, 102, 332, 1066],
    [4, 11, 35, 113, 363, 1164],
    [4, 12, 36, 112, 356, 1140],
    [4, 12, 36, 113, 362, 1163],
    [4, 14, 46, 147, 468, 1495],
    [4, 14, 46, 148, 474, 1518],
    [4, 15, 47, 147, 467, 1494],
    [4, 15, 55, 185, 599, 1920],
    [4, 16, 56, 184, 592, 1896],
    [4, 16, 56, 185, 598, 1919],
    [8, 26, 82, 260, 830, 2658],
    [8, 30, 102, 332, 1066, 3414],
    [16, 56, 184, 592, 1896, 6072],
];

/// Largest position `term_by_matrix_power` evaluates without leaving `i128`.
pub const MATRIX_POWER_MAX: usize = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    A,
    B,
}

impl Family {
    pub fn seeds(self, k: usize) -> Option<&'static [u128]> {
        match self {
            Family::A => A_SEEDS.get(k).map(|s| &s[..]),
            Family::B => B_SEEDS.get(k).map(|s| &s[..]),
        }
    }

    /// Number of sequences in the family.
    pub fn sequences(self) -> usize {
        match self {
            Family::A => A_SEEDS.len(),
            Family::B => B_SEEDS.len(),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::A => f.write_str("a"),
            Family::B => f.write_str("b"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// No sequence with this index in the family.
    UnknownSequence { family: Family, k: usize },
    /// The term does not fit the exact integer type.
    Overflow { family: Family, k: usize, m: usize },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::UnknownSequence { family, k } => write!(
                f,
                "no {family}-sequence with index {k} (valid: 0..{})",
                family.sequences()
            ),
            SequenceError::Overflow { family, k, m } => {
                write!(f, "{family}^{k}_{m} overflows 128-bit integers")
            }
        }
    }
}

impl std::error::Error for SequenceError {}

/// Symmetry class (0..=6) of an a-sequence boundary: lower left, upper left,
/// lower right, upper right corners filled in or not.
///
/// With exactly two corners filled: 2 if they share a side, 5 (2′) if they
/// share a row, 6 (2″) if they are diagonal.
pub fn classify_a(i: bool, j: bool, k: bool, l: bool) -> usize {
    let filled = [i, j, k, l].into_iter().filter(|&b| b).count();
    if filled != 2 {
        filled
    } else if i == j {
        2
    } else if i == k {
        5
    } else {
        6
    }
}

/// Memo table for both families.
#[derive(Clone, Debug, Default)]
pub struct SequenceTable {
    cache: HashMap<(Family, usize, usize), u128>,
}

impl SequenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of memoized (non-seed) terms.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    /// `f^k_m` for the given family, extending the memo bottom-up.
    pub fn term(&mut self, family: Family, k: usize, m: usize) -> Result<u128, SequenceError> {
        let seeds = family
            .seeds(k)
            .ok_or(SequenceError::UnknownSequence { family, k })?;
        if let Some(&v) = seeds.get(m) {
            return Ok(v);
        }
        if let Some(&v) = self.cache.get(&(family, k, m)) {
            return Ok(v);
        }
        let overflow = SequenceError::Overflow { family, k, m };
        let mut start = m;
        while start > seeds.len() && !self.cache.contains_key(&(family, k, start - 1)) {
            start -= 1;
        }
        tracing::trace!(%family, k, from = start, to = m, "extending recurrence memo");
        for t in start..=m {
            let mut acc: i128 = 0;
            for (d, coef) in RECURRENCE.iter().enumerate() {
                let prev = t - 1 - d;
                let value = match seeds.get(prev) {
                    Some(&v) => v,
                    None => self.cache[&(family, k, prev)],
                };
                let value = i128::try_from(value).map_err(|_| overflow.clone())?;
                acc = coef
                    .checked_mul(value)
                    .and_then(|x| acc.checked_add(x))
                    .ok_or_else(|| overflow.clone())?;
            }
            let value = u128::try_from(acc).map_err(|_| overflow.clone())?;
            self.cache.insert((family, k, t), value);
        }
        Ok(self.cache[&(family, k, m)])
    }

    #[inline]
    pub fn a(&mut self, k: usize, m: usize) -> Result<u128, SequenceError> {
        self.term(Family::A, k, m)
    }

    #[inline]
    pub fn b(&mut self, k: usize, m: usize) -> Result<u128, SequenceError> {
        self.term(Family::B, k, m)
    }

    /// `a_m` for the symmetry class of the boundary bits `(i, j, k, l)`.
    pub fn a_for_boundary(
        &mut self,
        i: bool,
        j: bool,
        k: bool,
        l: bool,
        m: usize,
    ) -> Result<u128, SequenceError> {
        self.a(classify_a(i, j, k, l), m)
    }

    /// First `count` terms of `f^k`.
    pub fn terms(
        &mut self,
        family: Family,
        k: usize,
        count: usize,
    ) -> Result<Vec<u128>, SequenceError> {
        (0..count).map(|m| self.term(family, k, m)).collect()
    }
}

type Companion = SMatrix<i128, 5, 5>;

fn companion() -> Companion {
    let mut c = Companion::zeros();
    for (col, &coef) in RECURRENCE.iter().enumerate() {
        c[(0, col)] = coef;
    }
    for r in 1..5 {
        c[(r, r - 1)] = 1;
    }
    c
}

fn companion_pow(mut e: usize) -> Companion {
    let mut base = companion();
    let mut acc = Companion::identity();
    while e > 0 {
        if e & 1 == 1 {
            acc = acc * base;
        }
        e >>= 1;
        if e > 0 {
            base = base * base;
        }
    }
    acc
}

/// `f^k_m` without memoization: `C^(m-4)` applied to the state `(f_4, .., f_0)`.
///
/// Intended for a single high index; positions above `MATRIX_POWER_MAX`
/// report `Overflow`.
pub fn term_by_matrix_power(family: Family, k: usize, m: usize) -> Result<u128, SequenceError> {
    let seeds = family
        .seeds(k)
        .ok_or(SequenceError::UnknownSequence { family, k })?;
    if let Some(&v) = seeds.get(m) {
        return Ok(v);
    }
    if m > MATRIX_POWER_MAX {
        return Err(SequenceError::Overflow { family, k, m });
    }
    let state = Vector5::new(
        seeds[4] as i128,
        seeds[3] as i128,
        seeds[2] as i128,
        seeds[1] as i128,
        seeds[0] as i128,
    );
    let top = (companion_pow(m - 4) * state)[0];
    u128::try_from(top).map_err(|_| SequenceError::Overflow { family, k, m })
}

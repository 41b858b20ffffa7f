//! Core types: permutations in one-line notation, index sets, and the group context.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::Mul;
use std::str::FromStr;

/// Input validation failures for permutations and generator index sets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PermError {
    /// S_0 is not supported; every group has at least one point.
    EmptyGroup,
    /// The values are not a bijection on `1..=len`.
    NotABijection { values: Vec<usize> },
    /// A permutation of the wrong size was handed to an S_n operation.
    SizeMismatch { expected: usize, found: usize },
    /// A generator index outside `1..=n-1`.
    IndexOutOfRange { index: usize, n: usize },
    /// Text could not be read as one-line notation.
    Parse { input: String, reason: String },
}

impl fmt::Display for PermError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermError::EmptyGroup => write!(f, "symmetric group size must be at least 1"),
            PermError::NotABijection { values } => {
                write!(f, "{values:?} is not a bijection on 1..={}", values.len())
            }
            PermError::SizeMismatch { expected, found } => write!(
                f,
                "permutation of size {found} used in S_{expected}"
            ),
            PermError::IndexOutOfRange { index, n } => write!(
                f,
                "generator index {index} outside 1..={} for S_{n}",
                n.saturating_sub(1)
            ),
            PermError::Parse { input, reason } => {
                write!(f, "cannot parse {input:?} as a permutation: {reason}")
            }
        }
    }
}

impl std::error::Error for PermError {}

/// Permutation of `{1..n}` in one-line notation: `w[i-1] = w(i)`.
///
/// Invariants:
/// - Values are a bijection on `1..=n`, checked by every public constructor.
/// - Immutable; all operations return new values.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// Validate and wrap one-line notation.
    pub fn new(values: Vec<usize>) -> Result<Self, PermError> {
        if values.is_empty() {
            return Err(PermError::EmptyGroup);
        }
        let n = values.len();
        let mut seen = vec![false; n];
        for &v in &values {
            if v == 0 || v > n || seen[v - 1] {
                return Err(PermError::NotABijection { values });
            }
            seen[v - 1] = true;
        }
        Ok(Self(values))
    }

    #[inline]
    pub(crate) fn from_vec_unchecked(values: Vec<usize>) -> Self {
        debug_assert!(Self::new(values.clone()).is_ok());
        Self(values)
    }

    /// Identity `e = (1, 2, ..., n)`.
    pub fn identity(n: usize) -> Self {
        Self((1..=n).collect())
    }

    /// Longest element `w0 = (n, n-1, ..., 1)`.
    pub fn longest(n: usize) -> Self {
        Self((1..=n).rev().collect())
    }

    /// Size of the symmetric group this permutation lives in.
    #[inline]
    pub fn n(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    #[inline]
    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    /// `w(i)` for a 1-indexed position.
    #[inline]
    pub fn value(&self, i: usize) -> usize {
        self.0[i - 1]
    }

    /// 1-indexed position of value `v` (linear scan).
    #[inline]
    pub fn position(&self, v: usize) -> usize {
        self.0
            .iter()
            .position(|&x| x == v)
            .map(|p| p + 1)
            .unwrap_or(0)
    }

    /// Reverse index: `positions()[v-1]` is the 1-indexed position of `v`.
    pub fn positions(&self) -> Vec<usize> {
        let mut pos = vec![0; self.n()];
        for (i, &v) in self.0.iter().enumerate() {
            pos[v - 1] = i + 1;
        }
        pos
    }

    /// `w⁻¹`; O(n) through the reverse index.
    #[inline]
    pub fn inverse(&self) -> Self {
        Self(self.positions())
    }

    /// Number of inversions, equal to the Coxeter length.
    pub fn length(&self) -> usize {
        let w = &self.0;
        let mut inv = 0;
        for i in 0..w.len() {
            for j in i + 1..w.len() {
                if w[j] < w[i] {
                    inv += 1;
                }
            }
        }
        inv
    }

    /// `self · s`: `z[i] = self[s[i] - 1]`.
    ///
    /// Panics if the sizes differ; use `Group::multiply` for checked input.
    pub fn compose(&self, s: &Permutation) -> Permutation {
        assert_eq!(self.n(), s.n(), "composing permutations of different sizes");
        Permutation(s.0.iter().map(|&j| self.0[j - 1]).collect())
    }

    /// `w0 · w · w0`: reverses both rows of the ocean.
    pub fn conjugate_by_longest(&self) -> Permutation {
        let n = self.n();
        Permutation(self.0.iter().rev().map(|&v| n + 1 - v).collect())
    }

    /// Apply `s_k` on the right (swap positions `k`, `k+1`).
    ///
    /// Callers guarantee `1 <= k < n`.
    pub(crate) fn swap_positions(&self, k: usize) -> Permutation {
        let mut z = self.0.clone();
        z.swap(k - 1, k);
        Permutation(z)
    }

    /// Apply `s_k` on the left (swap values `k`, `k+1`).
    ///
    /// Callers guarantee `1 <= k < n`.
    pub(crate) fn swap_values(&self, k: usize) -> Permutation {
        Permutation(
            self.0
                .iter()
                .map(|&v| match v {
                    v if v == k => k + 1,
                    v if v == k + 1 => k,
                    v => v,
                })
                .collect(),
        )
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(i, &v)| v == i + 1)
    }
}

impl Mul for &Permutation {
    type Output = Permutation;
    #[inline]
    fn mul(self, rhs: &Permutation) -> Permutation {
        self.compose(rhs)
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for v in &self.0 {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{v}")?;
            first = false;
        }
        Ok(())
    }
}

/// Accepts `3,1,4,5,2`, `(3, 1, 4, 5, 2)`, `[3 1 4 5 2]`.
impl FromStr for Permutation {
    type Err = PermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = |reason: String| PermError::Parse {
            input: s.to_string(),
            reason,
        };
        let body = s
            .trim()
            .trim_start_matches(['(', '['])
            .trim_end_matches([')', ']']);
        let values = body
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|tok| !tok.is_empty())
            .map(|tok| {
                tok.parse::<usize>()
                    .map_err(|e| parse_err(format!("{tok:?}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if values.is_empty() {
            return Err(parse_err("no values".into()));
        }
        Permutation::new(values)
    }
}

/// Subset of generator indices `{1..n-1}` naming the parabolic subgroup `W_I`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexSet(BTreeSet<usize>);

impl IndexSet {
    /// Validate every index against `1..=n-1`.
    pub fn new<It: IntoIterator<Item = usize>>(n: usize, indices: It) -> Result<Self, PermError> {
        let mut set = BTreeSet::new();
        for index in indices {
            if index == 0 || index >= n {
                return Err(PermError::IndexOutOfRange { index, n });
            }
            set.insert(index);
        }
        Ok(Self(set))
    }

    #[inline]
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// All generators of `S_n`.
    pub fn full(n: usize) -> Self {
        Self((1..n).collect())
    }

    #[inline]
    pub(crate) fn from_set_unchecked(set: BTreeSet<usize>) -> Self {
        Self(set)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    pub fn intersection(&self, other: &IndexSet) -> IndexSet {
        Self(self.0.intersection(&other.0).copied().collect())
    }

    /// Maximal runs of consecutive indices as inclusive `(start, end)` pairs.
    pub fn blocks(&self) -> Vec<(usize, usize)> {
        let mut out: Vec<(usize, usize)> = Vec::new();
        for i in self.iter() {
            match out.last_mut() {
                Some((_, end)) if *end + 1 == i => *end = i,
                _ => out.push((i, i)),
            }
        }
        out
    }

    /// Every subset of `{1..n-1}` (2^(n-1) of them).
    ///
    /// Panics for `n > 64`, where the subset mask no longer fits in a `u64`.
    pub fn all_subsets(n: usize) -> impl Iterator<Item = IndexSet> {
        let gens = n.saturating_sub(1);
        assert!(gens < 64, "all_subsets supports n <= 64, got {n}");
        (0u64..(1u64 << gens)).map(move |mask| {
            IndexSet((1..=gens).filter(|i| mask & (1 << (i - 1)) != 0).collect())
        })
    }
}

impl fmt::Display for IndexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (k, i) in self.iter().enumerate() {
            if k > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{i}")?;
        }
        f.write_str("}")
    }
}

/// The symmetric group `S_n` as an explicit context value.
///
/// Carries `n`, the identity and the longest element so that no operation
/// depends on ambient state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    n: usize,
    identity: Permutation,
    longest: Permutation,
}

impl Group {
    pub fn new(n: usize) -> Result<Self, PermError> {
        if n == 0 {
            return Err(PermError::EmptyGroup);
        }
        Ok(Self {
            n,
            identity: Permutation::identity(n),
            longest: Permutation::longest(n),
        })
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }
    #[inline]
    pub fn identity(&self) -> &Permutation {
        &self.identity
    }
    #[inline]
    pub fn longest(&self) -> &Permutation {
        &self.longest
    }

    /// `n!` as an exact integer, or `None` past `n = 34`.
    pub fn order(&self) -> Option<u128> {
        (1..=self.n as u128).try_fold(1u128, |acc, i| acc.checked_mul(i))
    }

    /// Validate one-line notation as an element of this group.
    pub fn perm(&self, values: Vec<usize>) -> Result<Permutation, PermError> {
        let w = Permutation::new(values)?;
        self.check(&w)?;
        Ok(w)
    }

    #[inline]
    pub fn check(&self, w: &Permutation) -> Result<(), PermError> {
        if w.n() != self.n {
            return Err(PermError::SizeMismatch {
                expected: self.n,
                found: w.n(),
            });
        }
        Ok(())
    }

    pub fn index_set<It: IntoIterator<Item = usize>>(
        &self,
        indices: It,
    ) -> Result<IndexSet, PermError> {
        IndexSet::new(self.n, indices)
    }

    /// Adjacent transposition `s_k`, `1 <= k <= n-1`.
    pub fn s(&self, k: usize) -> Result<Permutation, PermError> {
        if k == 0 || k >= self.n {
            return Err(PermError::IndexOutOfRange { index: k, n: self.n });
        }
        Ok(self.identity.swap_positions(k))
    }

    /// Checked `w · s`.
    pub fn multiply(&self, w: &Permutation, s: &Permutation) -> Result<Permutation, PermError> {
        self.check(w)?;
        self.check(s)?;
        Ok(w.compose(s))
    }

    /// `w0 · w · w0`.
    pub fn conjugate(&self, w: &Permutation) -> Result<Permutation, PermError> {
        self.check(w)?;
        Ok(w.conjugate_by_longest())
    }
}

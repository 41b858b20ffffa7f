//! Double coset descriptors `W_I·w·W_J` and the queries on them.

use std::collections::{HashSet, VecDeque};
use std::fmt;

use super::extremal::{check_indices, max_double, min_double};
use super::subgroup::{parabolic_order, simple};
use crate::perm::{IndexSet, PermError, Permutation};

/// Descriptor `(I, w, J)` of the parabolic double coset `W_I·w·W_J`.
///
/// Equality is set equality: two descriptors are equal iff their minimal
/// and maximal elements agree.
#[derive(Clone, Debug)]
pub struct DoubleCoset {
    left: IndexSet,
    rep: Permutation,
    right: IndexSet,
}

impl DoubleCoset {
    pub fn new(left: IndexSet, rep: Permutation, right: IndexSet) -> Result<Self, PermError> {
        check_indices(rep.n(), &left)?;
        check_indices(rep.n(), &right)?;
        Ok(Self { left, rep, right })
    }

    #[inline]
    pub fn left(&self) -> &IndexSet {
        &self.left
    }
    #[inline]
    pub fn rep(&self) -> &Permutation {
        &self.rep
    }
    #[inline]
    pub fn right(&self) -> &IndexSet {
        &self.right
    }
    #[inline]
    pub fn n(&self) -> usize {
        self.rep.n()
    }

    pub fn minimal(&self) -> Permutation {
        min_double(&self.left, &self.rep, &self.right)
    }

    pub fn maximal(&self) -> Permutation {
        max_double(&self.left, &self.rep, &self.right)
    }

    /// Bruhat distance `length(max) - length(min)`.
    pub fn rank(&self) -> usize {
        self.maximal().length() - self.minimal().length()
    }

    /// Generators `k ∈ I` with `s_k = u·s_j·u⁻¹` for some `j ∈ J`, `u` minimal.
    ///
    /// For minimal `u`, `W_I ∩ u·W_J·u⁻¹ = W_H` with `H` this set (Kilmoyer).
    pub fn stabilizer_indices(&self) -> IndexSet {
        let u = self.minimal();
        let u_inv = u.inverse();
        let conj: IndexSet = IndexSet::from_set_unchecked(
            self.right
                .iter()
                .filter_map(|j| simple(&(&u.swap_positions(j) * &u_inv)))
                .collect(),
        );
        self.left.intersection(&conj)
    }

    /// `|W_I| / |W_H| · |W_J|`.
    ///
    /// `W_H ≤ W_I`, so the division is exact and no intermediate exceeds
    /// the result. Exact up to `n = 34`, the largest `n` with `n!` in `u128`.
    pub fn cardinality(&self) -> u128 {
        parabolic_order(&self.left) / parabolic_order(&self.stabilizer_indices())
            * parabolic_order(&self.right)
    }

    /// Membership test: `w` lies in the coset iff it reduces to the same minimum.
    pub fn contains(&self, w: &Permutation) -> bool {
        w.n() == self.n() && min_double(&self.left, w, &self.right) == self.minimal()
    }

    /// All elements, by closure of `w` under `s_i·(-)` for `i ∈ I` and `(-)·s_j` for `j ∈ J`.
    pub fn elements(&self) -> HashSet<Permutation> {
        self.walk(|_| true).unwrap_or_default()
    }

    /// Whether every element of `self` lies in `other`.
    pub fn is_subset_of(&self, other: &DoubleCoset) -> bool {
        self.n() == other.n() && self.walk(|x| other.contains(x)).is_some()
    }

    /// Breadth-first closure; stops with `None` as soon as `keep` rejects an element.
    fn walk(&self, keep: impl Fn(&Permutation) -> bool) -> Option<HashSet<Permutation>> {
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();
        if !keep(&self.rep) {
            return None;
        }
        seen.insert(self.rep.clone());
        queue.push_back(self.rep.clone());
        while let Some(x) = queue.pop_front() {
            let lefts = self.left.iter().map(|i| x.swap_values(i));
            let rights = self.right.iter().map(|j| x.swap_positions(j));
            for y in lefts.chain(rights) {
                if seen.contains(&y) {
                    continue;
                }
                if !keep(&y) {
                    return None;
                }
                seen.insert(y.clone());
                queue.push_back(y);
            }
        }
        Some(seen)
    }

    /// Set equality through the extremal elements.
    pub fn same_set(&self, other: &DoubleCoset) -> bool {
        self.n() == other.n()
            && self.minimal() == other.minimal()
            && self.maximal() == other.maximal()
    }
}

impl PartialEq for DoubleCoset {
    fn eq(&self, other: &Self) -> bool {
        self.same_set(other)
    }
}

impl Eq for DoubleCoset {}

impl fmt::Display for DoubleCoset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W_{}·({})·W_{}", self.left, self.rep, self.right)
    }
}

/// `W_I·w·W_J == W_K·z·W_L` as sets.
pub fn equals(
    i: &IndexSet,
    w: &Permutation,
    j: &IndexSet,
    k: &IndexSet,
    z: &Permutation,
    l: &IndexSet,
) -> Result<bool, PermError> {
    let a = DoubleCoset::new(i.clone(), w.clone(), j.clone())?;
    let b = DoubleCoset::new(k.clone(), z.clone(), l.clone())?;
    Ok(a.same_set(&b))
}

/// `length(maximal) - length(minimal)` of `W_I·w·W_J`.
pub fn rank(i: &IndexSet, w: &Permutation, j: &IndexSet) -> Result<usize, PermError> {
    Ok(DoubleCoset::new(i.clone(), w.clone(), j.clone())?.rank())
}

/// `|W_I·w·W_J|` without enumerating it.
pub fn cardinality(i: &IndexSet, w: &Permutation, j: &IndexSet) -> Result<u128, PermError> {
    Ok(DoubleCoset::new(i.clone(), w.clone(), j.clone())?.cardinality())
}

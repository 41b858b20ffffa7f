//! Ascent/descent predicates and sets.
//!
//! Conventions
//! - Right (top row): compares values at positions `k`, `k+1`, i.e. whether
//!   `length(w·s_k) > length(w)`.
//! - Left (bottom row): compares positions of values `k`, `k+1`, i.e. whether
//!   `length(s_k·w) > length(w)`.
//! - "Small" means the compared pair is consecutive; "large" is any other ascent.
//! - Every predicate is false for `k` outside `1..=n-1`, so neighbour checks
//!   at the ends of a row need no special casing.

use std::collections::BTreeSet;

use super::types::{IndexSet, Permutation};

impl Permutation {
    #[inline]
    fn in_range(&self, k: usize) -> bool {
        k >= 1 && k < self.n()
    }

    #[inline]
    pub fn is_right_ascent(&self, k: usize) -> bool {
        self.in_range(k) && self.value(k) < self.value(k + 1)
    }
    #[inline]
    pub fn is_right_descent(&self, k: usize) -> bool {
        self.in_range(k) && self.value(k) > self.value(k + 1)
    }
    #[inline]
    pub fn is_left_ascent(&self, k: usize) -> bool {
        self.in_range(k) && self.position(k) < self.position(k + 1)
    }
    #[inline]
    pub fn is_left_descent(&self, k: usize) -> bool {
        self.in_range(k) && self.position(k) > self.position(k + 1)
    }

    #[inline]
    pub fn is_small_right_ascent(&self, k: usize) -> bool {
        self.in_range(k) && self.value(k) + 1 == self.value(k + 1)
    }
    #[inline]
    pub fn is_small_left_ascent(&self, k: usize) -> bool {
        self.in_range(k) && self.position(k) + 1 == self.position(k + 1)
    }
    #[inline]
    pub fn is_large_right_ascent(&self, k: usize) -> bool {
        self.is_right_ascent(k) && !self.is_small_right_ascent(k)
    }
    #[inline]
    pub fn is_large_left_ascent(&self, k: usize) -> bool {
        self.is_left_ascent(k) && !self.is_small_left_ascent(k)
    }

    fn collect_indices(&self, pred: impl Fn(usize) -> bool) -> IndexSet {
        let set: BTreeSet<usize> = (1..self.n()).filter(|&k| pred(k)).collect();
        IndexSet::from_set_unchecked(set)
    }

    // Left sets go through the inverse once instead of scanning per index.

    pub fn right_ascent_set(&self) -> IndexSet {
        self.collect_indices(|k| self.is_right_ascent(k))
    }
    pub fn right_descent_set(&self) -> IndexSet {
        self.collect_indices(|k| self.is_right_descent(k))
    }
    pub fn left_ascent_set(&self) -> IndexSet {
        self.inverse().right_ascent_set()
    }
    pub fn left_descent_set(&self) -> IndexSet {
        self.inverse().right_descent_set()
    }
    pub fn small_right_ascent_set(&self) -> IndexSet {
        self.collect_indices(|k| self.is_small_right_ascent(k))
    }
    pub fn small_left_ascent_set(&self) -> IndexSet {
        self.inverse().small_right_ascent_set()
    }
    pub fn large_right_ascent_set(&self) -> IndexSet {
        self.collect_indices(|k| self.is_large_right_ascent(k))
    }
    pub fn large_left_ascent_set(&self) -> IndexSet {
        self.inverse().large_right_ascent_set()
    }
}

//! Enumeration of S_n (Heap's algorithm) and reproducible random elements.
//!
//! Cost is n!: exhaustive sweeps are practical to n ≈ 10–12, while single
//! permutations can be analysed up to n ≈ 20. No cap is imposed.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::perm::{Group, Permutation};

/// Iterative Heap's algorithm: each step is a single swap of the base array.
///
/// Visits every element of S_n exactly once; the order is not canonical.
#[derive(Clone, Debug)]
pub struct SymmetricGroup {
    base: Vec<usize>,
    counters: Vec<usize>,
    i: usize,
    started: bool,
    remaining: Option<usize>,
}

impl SymmetricGroup {
    pub fn new(n: usize) -> Self {
        let remaining = match n {
            0 => Some(0),
            _ => (1..=n).try_fold(1usize, |acc, k| acc.checked_mul(k)),
        };
        Self {
            base: (1..=n).collect(),
            counters: vec![0; n],
            i: 1,
            started: false,
            remaining,
        }
    }

    fn emit(&mut self) -> Permutation {
        if let Some(r) = self.remaining.as_mut() {
            *r -= 1;
        }
        Permutation::from_vec_unchecked(self.base.clone())
    }
}

impl Iterator for SymmetricGroup {
    type Item = Permutation;

    fn next(&mut self) -> Option<Permutation> {
        if !self.started {
            self.started = true;
            return (!self.base.is_empty()).then(|| self.emit());
        }
        let n = self.base.len();
        while self.i < n {
            let i = self.i;
            if self.counters[i] < i {
                if i % 2 == 0 {
                    self.base.swap(0, i);
                } else {
                    self.base.swap(self.counters[i], i);
                }
                self.counters[i] += 1;
                self.i = 1;
                return Some(self.emit());
            }
            self.counters[i] = 0;
            self.i += 1;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(r) => (r, Some(r)),
            None => (usize::MAX, None),
        }
    }
}

impl Group {
    /// Lazily enumerate every element.
    pub fn elements(&self) -> SymmetricGroup {
        SymmetricGroup::new(self.n())
    }
}

/// S_n as a set.
pub fn symmetric_group(n: usize) -> HashSet<Permutation> {
    SymmetricGroup::new(n).collect()
}

/// Uniform element of S_n reproducible from `seed`.
pub fn random_permutation(group: &Group, seed: u64) -> Permutation {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut values: Vec<usize> = (1..=group.n()).collect();
    values.shuffle(&mut rng);
    Permutation::from_vec_unchecked(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerates_each_element_once() {
        let mut factorial = 1usize;
        for n in 1..=8 {
            factorial *= n;
            let all: Vec<Permutation> = SymmetricGroup::new(n).collect();
            assert_eq!(all.len(), factorial, "n = {n}");
            let distinct: HashSet<_> = all.iter().cloned().collect();
            assert_eq!(distinct.len(), factorial);
            assert!(all.iter().all(|w| w.n() == n));
            assert!(all
                .iter()
                .all(|w| Permutation::new(w.as_slice().to_vec()).is_ok()));
        }
    }

    #[test]
    fn size_hint_counts_down() {
        let mut it = SymmetricGroup::new(4);
        assert_eq!(it.size_hint(), (24, Some(24)));
        it.next();
        it.next();
        assert_eq!(it.size_hint(), (22, Some(22)));
        assert_eq!(it.count(), 22);
    }

    #[test]
    fn group_elements_and_set_agree() {
        let g = Group::new(5).unwrap();
        let set = symmetric_group(5);
        assert_eq!(set.len(), 120);
        assert!(g.elements().all(|w| set.contains(&w)));
        assert!(set.contains(g.identity()) && set.contains(g.longest()));
    }

    #[test]
    fn empty_base_yields_nothing() {
        assert_eq!(SymmetricGroup::new(0).count(), 0);
    }

    #[test]
    fn random_permutations_replay_from_seed() {
        let g = Group::new(12).unwrap();
        let a = random_permutation(&g, 7);
        assert_eq!(a, random_permutation(&g, 7));
        assert!(g.check(&a).is_ok());
        let distinct: HashSet<_> = (0..32).map(|s| random_permutation(&g, s)).collect();
        assert!(distinct.len() > 1);
    }
}

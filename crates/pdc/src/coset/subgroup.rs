//! Parabolic subgroups: explicit elements, orders, and simple reflections.

use std::collections::{HashSet, VecDeque};

use super::extremal::check_indices;
use crate::perm::{Group, IndexSet, PermError, Permutation};

/// `|W_I|` from the block factorization of `I`.
///
/// A maximal run of `l` consecutive generators generates a copy of `S_{l+1}`,
/// and distinct runs commute, so `|W_I| = Π (l+1)!`. Type A only.
///
/// Panics on overflow, which first happens for a run reaching `n = 35`.
pub fn parabolic_order(i: &IndexSet) -> u128 {
    i.blocks()
        .into_iter()
        .map(|(start, end)| factorial(end - start + 2))
        .product()
}

/// Panics for `k > 34`: `35!` does not fit in `u128`.
fn factorial(k: usize) -> u128 {
    (1..=k as u128)
        .try_fold(1u128, |acc, i| acc.checked_mul(i))
        .unwrap_or_else(|| panic!("{k}! overflows u128"))
}

/// Generator index `k` if `x = s_k`, otherwise `None`.
pub fn simple(x: &Permutation) -> Option<usize> {
    let k = x
        .as_slice()
        .iter()
        .enumerate()
        .position(|(i, &v)| v != i + 1)?
        + 1;
    let rest_fixed = x
        .as_slice()
        .iter()
        .enumerate()
        .skip(k + 1)
        .all(|(i, &v)| v == i + 1);
    (x.value(k) == k + 1 && x.value(k + 1) == k && rest_fixed).then_some(k)
}

/// All elements of `W_I`, identity included, by closure under generators.
///
/// Size is `parabolic_order(I)`, up to `n!` for the full index set.
pub fn parabolic_subgroup(group: &Group, i: &IndexSet) -> Result<HashSet<Permutation>, PermError> {
    check_indices(group.n(), i)?;
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(group.identity().clone());
    queue.push_back(group.identity().clone());
    while let Some(x) = queue.pop_front() {
        for k in i.iter() {
            let y = x.swap_positions(k);
            if seen.insert(y.clone()) {
                queue.push_back(y);
            }
        }
    }
    Ok(seen)
}

/// `X·w·Y` as a set, by multiplying out every pair.
pub fn double_coset(
    x: &HashSet<Permutation>,
    w: &Permutation,
    y: &HashSet<Permutation>,
) -> HashSet<Permutation> {
    let mut out = HashSet::with_capacity(x.len() * y.len());
    out.insert(w.clone());
    for a in x {
        let aw = a * w;
        for b in y {
            out.insert(&aw * b);
        }
    }
    out
}

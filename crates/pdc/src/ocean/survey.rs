//! Oceans across a whole group.

use std::collections::{BTreeMap, BTreeSet};

use super::classify::ocean;
use super::types::Ocean;
use crate::perm::{Group, Permutation};

/// Every permutation grouped by its ocean.
fn by_ocean(group: &Group) -> BTreeMap<Ocean, Vec<Permutation>> {
    let mut out: BTreeMap<Ocean, Vec<Permutation>> = BTreeMap::new();
    for w in group.elements() {
        out.entry(ocean(&w)).or_default().push(w);
    }
    out
}

/// Distinct oceans of S_n.
pub fn oceans(group: &Group) -> BTreeSet<Ocean> {
    group.elements().map(|w| ocean(&w)).collect()
}

/// Oceans produced by more than one permutation.
pub fn duplicate_oceans(group: &Group) -> BTreeSet<Ocean> {
    by_ocean(group)
        .into_iter()
        .filter(|(_, ws)| ws.len() > 1)
        .map(|(o, _)| o)
        .collect()
}

/// Sorted `(ocean, w)` pairs for every `w` whose ocean is shared.
pub fn duplicate_pairs(group: &Group) -> Vec<(Ocean, Permutation)> {
    let mut out: Vec<(Ocean, Permutation)> = by_ocean(group)
        .into_iter()
        .filter(|(_, ws)| ws.len() > 1)
        .flat_map(|(o, ws)| ws.into_iter().map(move |w| (o.clone(), w)))
        .collect();
    out.sort();
    out
}

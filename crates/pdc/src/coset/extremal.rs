//! Minimal and maximal elements of one- and two-sided parabolic cosets.
//!
//! Each routine is a bubble pass repeated at most `|J|` (or `|I|`) times: a
//! maximal block of `l` consecutive generators acts on `l+1` points, and `l`
//! passes sort those points. Right actions sort positions `j, j+1`; left
//! actions sort values `i, i+1` through a maintained position index.

use crate::perm::{IndexSet, PermError, Permutation};

/// Reject index sets that do not fit `S_n`.
pub(crate) fn check_indices(n: usize, set: &IndexSet) -> Result<(), PermError> {
    match set.iter().find(|&k| k == 0 || k >= n) {
        Some(index) => Err(PermError::IndexOutOfRange { index, n }),
        None => Ok(()),
    }
}

fn sort_right(w: &Permutation, j: &IndexSet, out_of_order: fn(usize, usize) -> bool) -> Permutation {
    let mut z = w.as_slice().to_vec();
    for _ in 0..j.len() {
        let mut swapped = false;
        for k in j.iter() {
            if out_of_order(z[k - 1], z[k]) {
                z.swap(k - 1, k);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    Permutation::from_vec_unchecked(z)
}

fn sort_left(w: &Permutation, i: &IndexSet, out_of_order: fn(usize, usize) -> bool) -> Permutation {
    let mut z = w.as_slice().to_vec();
    let mut pos = w.positions();
    for _ in 0..i.len() {
        let mut swapped = false;
        for k in i.iter() {
            let (p, q) = (pos[k - 1], pos[k]);
            if out_of_order(p, q) {
                z[p - 1] = k + 1;
                z[q - 1] = k;
                pos.swap(k - 1, k);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    Permutation::from_vec_unchecked(z)
}

#[inline]
fn descending(a: usize, b: usize) -> bool {
    a > b
}
#[inline]
fn ascending(a: usize, b: usize) -> bool {
    a < b
}

pub(crate) fn min_right(w: &Permutation, j: &IndexSet) -> Permutation {
    sort_right(w, j, descending)
}
pub(crate) fn max_right(w: &Permutation, j: &IndexSet) -> Permutation {
    sort_right(w, j, ascending)
}
pub(crate) fn min_left(w: &Permutation, i: &IndexSet) -> Permutation {
    sort_left(w, i, descending)
}
pub(crate) fn max_left(w: &Permutation, i: &IndexSet) -> Permutation {
    sort_left(w, i, ascending)
}
pub(crate) fn min_double(i: &IndexSet, w: &Permutation, j: &IndexSet) -> Permutation {
    min_right(&min_left(w, i), j)
}
pub(crate) fn max_double(i: &IndexSet, w: &Permutation, j: &IndexSet) -> Permutation {
    max_right(&max_left(w, i), j)
}

/// Minimal element of the right coset `w·W_J`.
pub fn minimal_right(w: &Permutation, j: &IndexSet) -> Result<Permutation, PermError> {
    check_indices(w.n(), j)?;
    Ok(min_right(w, j))
}

/// Maximal element of the right coset `w·W_J`.
pub fn maximal_right(w: &Permutation, j: &IndexSet) -> Result<Permutation, PermError> {
    check_indices(w.n(), j)?;
    Ok(max_right(w, j))
}

/// Minimal element of the left coset `W_I·w`.
pub fn minimal_left(w: &Permutation, i: &IndexSet) -> Result<Permutation, PermError> {
    check_indices(w.n(), i)?;
    Ok(min_left(w, i))
}

/// Maximal element of the left coset `W_I·w`.
pub fn maximal_left(w: &Permutation, i: &IndexSet) -> Result<Permutation, PermError> {
    check_indices(w.n(), i)?;
    Ok(max_left(w, i))
}

/// Minimal element of `W_I·w·W_J`: left reduction first, then right.
pub fn minimal(i: &IndexSet, w: &Permutation, j: &IndexSet) -> Result<Permutation, PermError> {
    check_indices(w.n(), i)?;
    check_indices(w.n(), j)?;
    Ok(min_double(i, w, j))
}

/// Maximal element of `W_I·w·W_J`: left first, then right.
pub fn maximal(i: &IndexSet, w: &Permutation, j: &IndexSet) -> Result<Permutation, PermError> {
    check_indices(w.n(), i)?;
    check_indices(w.n(), j)?;
    Ok(max_double(i, w, j))
}

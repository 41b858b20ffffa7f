//! Reading a Bruhat interval `[a, b]` as a parabolic double coset.
//!
//! The candidate presentation is forced: `I = D_L^c(a) ∩ D_L(b)` and
//! `J = D_R^c(a) ∩ D_R(b)`. Since `b` already descends on all of `I` and `J`
//! it is maximal in `W_I·b·W_J`, so the interval is a PDC iff `a` is the
//! minimal element.

use std::fmt;

use super::double::DoubleCoset;
use super::extremal::min_double;
use crate::perm::{IndexSet, PermError, Permutation};

/// Why an interval could not be presented as `W_I·b·W_J`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntervalError {
    /// Endpoints are not comparable permutations of the same size.
    Invalid(PermError),
    /// Valid input, but `a` is not the minimum of the forced coset.
    NotParabolic {
        left: IndexSet,
        right: IndexSet,
        minimal: Permutation,
    },
}

impl fmt::Display for IntervalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalError::Invalid(err) => write!(f, "invalid interval: {err}"),
            IntervalError::NotParabolic {
                left,
                right,
                minimal,
            } => write!(
                f,
                "not a parabolic double coset: W_{left}·b·W_{right} has minimal element ({minimal})"
            ),
        }
    }
}

impl std::error::Error for IntervalError {}

impl From<PermError> for IntervalError {
    fn from(err: PermError) -> Self {
        IntervalError::Invalid(err)
    }
}

/// Present `[a, b]` as `W_I·b·W_J`, or report the forced `I`, `J` and the
/// minimal element actually reached.
pub fn presentation(a: &Permutation, b: &Permutation) -> Result<DoubleCoset, IntervalError> {
    if a.n() != b.n() {
        return Err(PermError::SizeMismatch {
            expected: a.n(),
            found: b.n(),
        }
        .into());
    }
    let left = a.left_ascent_set().intersection(&b.left_descent_set());
    let right = a.right_ascent_set().intersection(&b.right_descent_set());
    let minimal = min_double(&left, b, &right);
    if &minimal != a {
        return Err(IntervalError::NotParabolic {
            left,
            right,
            minimal,
        });
    }
    Ok(DoubleCoset::new(left, b.clone(), right)?)
}

/// Whether `[a, b]` is a parabolic double coset.
pub fn is_parabolic_double_coset(a: &Permutation, b: &Permutation) -> bool {
    presentation(a, b).is_ok()
}

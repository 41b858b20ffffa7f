//! PyO3 bindings for selected `pdc` functions.
//!
//! Notes
//! - Permutations cross the boundary as lists in one-line notation.
//! - Oceans come back as plain tuples `(rafts, floats, ropes, tethers)`.
//! - Counts are exact Python ints.

mod common;

use common::{perm_from_py, value_err};
use pdc::api::{ocean as ocean_of, CosetCounter, Strategy};
use pyo3::prelude::*;

type RaftTuple = (usize, usize, usize, usize);

/// w-ocean of a permutation in one-line notation.
#[pyfunction]
fn ocean(w: Vec<usize>) -> PyResult<(Vec<RaftTuple>, Vec<isize>, Vec<isize>, Vec<isize>)> {
    let o = ocean_of(&perm_from_py(w)?);
    let rafts = o.rafts.iter().map(|r| r.as_tuple()).collect();
    Ok((rafts, o.floats, o.ropes, o.tethers))
}

/// Number of parabolic double cosets with minimal element `w`.
#[pyfunction]
fn c_w(w: Vec<usize>) -> PyResult<u128> {
    CosetCounter::new()
        .c(&perm_from_py(w)?)
        .map_err(value_err)
}

/// Number of parabolic double cosets of S_n.
#[pyfunction]
#[pyo3(signature = (n, strategy = "combined"))]
fn p_n(n: usize, strategy: &str) -> PyResult<u128> {
    let strategy: Strategy = strategy.parse().map_err(value_err)?;
    CosetCounter::new().p(n, strategy).map_err(value_err)
}

#[pymodule]
fn pdc_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ocean, m)?)?;
    m.add_function(wrap_pyfunction!(c_w, m)?)?;
    m.add_function(wrap_pyfunction!(p_n, m)?)?;
    Ok(())
}

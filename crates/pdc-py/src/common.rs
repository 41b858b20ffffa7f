use pdc::api::Permutation;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn perm_from_py(values: Vec<usize>) -> PyResult<Permutation> {
    Permutation::new(values).map_err(value_err)
}

pub fn value_err<E: std::fmt::Display>(err: E) -> PyErr {
    PyValueError::new_err(err.to_string())
}

use pyo3::prelude::*;

use crate::list;

/// Returns `seq` with `value` appended, unless it's already present.
///
/// `None` is treated as an empty list.
#[pyfunction]
#[pyo3(signature = (seq, value))]
fn add(seq: Option<Vec<String>>, value: &str) -> Vec<String> {
    list::add(seq, value)
}

/// Returns `seq` without the first occurrence of `value`. Returns `None` if `seq` is `None`.
#[pyfunction]
#[pyo3(signature = (seq, value))]
fn remove(seq: Option<Vec<String>>, value: &str) -> Option<Vec<String>> {
    list::remove(seq, value)
}

/// Returns whether `seq` contains `value`.
#[pyfunction]
#[pyo3(signature = (seq, value))]
#[allow(clippy::needless_pass_by_value)]
fn has(seq: Option<Vec<String>>, value: &str) -> bool {
    list::has(seq.as_deref(), value)
}

/// Returns the items of `seq` for which `keep(item)` is truthy. Returns `None` if `seq` is
/// `None`.
///
/// Exceptions raised by `keep` are propagated to the caller.
#[pyfunction]
#[pyo3(signature = (seq, keep))]
fn filter(seq: Option<Vec<String>>, keep: &Bound<'_, PyAny>) -> PyResult<Option<Vec<String>>> {
    list::try_filter(seq, |v| keep.call1((v,))?.is_truthy())
}

#[pymodule]
pub fn stringslice(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(add, m)?)?;
    m.add_function(wrap_pyfunction!(remove, m)?)?;
    m.add_function(wrap_pyfunction!(has, m)?)?;
    m.add_function(wrap_pyfunction!(filter, m)?)?;
    Ok(())
}

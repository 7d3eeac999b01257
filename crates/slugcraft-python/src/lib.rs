#![allow(clippy::useless_conversion)] // PyO3 generates conversions via proc macros

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Slugify text: lowercase letters, digits, `-`, `_`, `~` and `.`.
#[pyfunction]
fn slugify(text: &str) -> String {
    slugcraft::slugify(text)
}

/// Identifier form: lowercase letters, digits, `-` and `_`.
#[pyfunction]
fn idify(text: &str) -> String {
    slugcraft::idify(text)
}

/// Lowercase and transliterate, without classification or cleanup.
#[pyfunction]
fn sanitize_text(text: &str) -> String {
    slugcraft::sanitize_text(text)
}

/// Trim edge dashes and collapse dash runs.
#[pyfunction]
fn cleanup(text: &str) -> String {
    slugcraft::cleanup(text)
}

/// Transform text with a variant named "slug" or "id".
#[pyfunction]
#[pyo3(signature = (text, variant = "slug"))]
fn transform(text: &str, variant: &str) -> PyResult<String> {
    let variant: slugcraft::Variant = variant
        .parse()
        .map_err(|e: slugcraft::Error| PyValueError::new_err(e.to_string()))?;
    Ok(slugcraft::transform(text, variant))
}

/// Native accelerator module for slugcraft.
#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(slugify, m)?)?;
    m.add_function(wrap_pyfunction!(idify, m)?)?;
    m.add_function(wrap_pyfunction!(sanitize_text, m)?)?;
    m.add_function(wrap_pyfunction!(cleanup, m)?)?;
    m.add_function(wrap_pyfunction!(transform, m)?)?;
    Ok(())
}

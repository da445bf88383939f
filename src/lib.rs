//! CPython extension module `cmod`.
//!
//! `import cmod; cmod.hello_world()` returns `"hello world"`.

pub mod exports;

mod error;
mod logging;

use pyo3::prelude::*;

pub use exports::{hello_world, HELLO_WORLD, MODULE_NAME};

/// Module initializer, exported as `PyInit_cmod`.
///
/// Logging problems never fail the import. Errors from the interpreter while
/// creating the function objects are propagated unchanged.
#[pymodule(gil_used = false)]
pub fn cmod(module: &Bound<'_, PyModule>) -> PyResult<()> {
    if let Err(err) = logging::init(module.py()) {
        log::debug!("{err}");
    }

    let count = exports::register(module)?;
    log::debug!("registered module `{MODULE_NAME}` with {count} export(s)");
    Ok(())
}

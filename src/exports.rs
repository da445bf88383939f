//! Static registration table for the callables cmod exposes to Python.

use pyo3::prelude::*;
use pyo3::types::PyCFunction;

/// Name the interpreter's import machinery uses to locate the module.
pub const MODULE_NAME: &str = "cmod";

/// Name of the single exported callable.
pub const HELLO_WORLD: &str = "hello_world";

/// Builds the Python function object for an export, bound to `module`.
pub type WrapFn = for<'py> fn(&Bound<'py, PyModule>) -> PyResult<Bound<'py, PyCFunction>>;

/// One entry of the registration table.
pub struct Export {
    pub name: &'static str,
    pub wrap: WrapFn,
}

pub static EXPORTS: &[Export] = &[Export {
    name: HELLO_WORLD,
    wrap: wrap_hello_world,
}];

/// Returns the text `hello world`.
///
/// Takes no arguments, so pyo3 registers it with `METH_NOARGS` and the
/// interpreter rejects any positional or keyword argument before this runs.
#[pyfunction]
pub fn hello_world() -> &'static str {
    "hello world"
}

fn wrap_hello_world<'py>(module: &Bound<'py, PyModule>) -> PyResult<Bound<'py, PyCFunction>> {
    wrap_pyfunction!(hello_world, module)
}

/// Adds every entry of [`EXPORTS`] to `module` and returns how many were added.
///
/// The first interpreter error aborts registration and is returned unchanged.
pub(crate) fn register(module: &Bound<'_, PyModule>) -> PyResult<usize> {
    for export in EXPORTS {
        let function = (export.wrap)(module)?;
        module.add(export.name, function)?;
    }
    Ok(EXPORTS.len())
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn returns_hello_world() {
        assert_eq!(hello_world(), "hello world");
    }

    #[test]
    fn repeated_calls_are_byte_identical() {
        let first = hello_world().as_bytes();
        for _ in 0..1000 {
            assert_eq!(hello_world().as_bytes(), first);
        }
    }

    #[test]
    fn concurrent_calls_agree() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| (0..1000).all(|_| hello_world() == "hello world")))
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[test]
    fn table_has_a_single_hello_world_entry() {
        let names: Vec<_> = EXPORTS.iter().map(|export| export.name).collect();
        assert_eq!(names, [HELLO_WORLD]);
    }
}

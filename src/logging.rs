//! Routes cmod's `log` records into Python's `logging` module.
//!
//! Records land on the Python logger named after their target (`cmod`), so the
//! host application decides levels and handlers. Nothing is read from the
//! environment.

use pyo3::prelude::*;
use pyo3_log::{Caching, Logger};

use crate::error::LogError;

/// Installs the bridge as the `log` backend of this shared library.
pub(crate) fn init(py: Python<'_>) -> Result<(), LogError> {
    Logger::new(py, Caching::LoggersAndLevels)?.install()?;
    Ok(())
}

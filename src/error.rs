use log::SetLoggerError;
use pyo3::PyErr;
use thiserror::Error;

/// Failures while wiring cmod's logging into the interpreter.
///
/// These never reach Python: a broken logging setup leaves logging disabled and
/// the import proceeds.
#[derive(Debug, Error)]
pub(crate) enum LogError {
    #[error("python logging unavailable: {0}")]
    Python(#[from] PyErr),

    #[error("logging already initialized by another logger")]
    AlreadyInitialized(#[from] SetLoggerError),
}

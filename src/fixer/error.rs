//! Errors that abort a fix run.
//!
//! Per-file read failures are not here: they are logged and skipped.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixError {
    #[error("path `{0}` does not exist")]
    NotFound(PathBuf),

    #[error("`{0}` is not a directory")]
    NotADirectory(PathBuf),

    #[error("failed to scan `{0}`")]
    Walk(PathBuf, #[source] jwalk::Error),

    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] std::io::Error),
}

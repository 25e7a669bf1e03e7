//! Filesystem path helpers.

use std::path::{Path, PathBuf};

/// Make `path` absolute against the current directory.
///
/// Purely lexical: symlinks are kept and the path need not exist, so a
/// missing target can still be reported by its full name.
pub fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

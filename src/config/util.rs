//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find the config file for `config_name`.
///
/// Absolute names are used as-is. Relative names are tried in the current
/// directory and then in each ancestor; the nearest match wins.
///
/// ```text
/// /home/user/site/docs.doccarchive/  ← cwd
/// /home/user/site/path-fixer.toml    ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.is_file().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    find_upward(&cwd, config_name)
}

/// Search `start` and its ancestors for `name`.
fn find_upward(start: &Path, name: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

// ============================================================================
// tests
// ============================================================================

//! HTML file discovery.

use std::path::{Path, PathBuf};

use jwalk::WalkDir;

use super::FixError;

/// File name suffix of the pages to rewrite (case-sensitive).
pub const HTML_SUFFIX: &str = ".html";

/// Collect every regular `.html` file below `root`, sorted.
///
/// Subdirectories are read in parallel. Hidden entries are included and
/// symlinks are not followed. An unreadable directory aborts the scan.
pub fn collect_html_files(root: &Path) -> Result<Vec<PathBuf>, FixError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).skip_hidden(false).follow_links(false) {
        let entry = entry.map_err(|err| FixError::Walk(root.to_path_buf(), err))?;
        if !entry.file_type().is_file() {
            continue;
        }
        // Byte match so names that are not valid UTF-8 are still found.
        let is_html = entry
            .file_name()
            .as_encoded_bytes()
            .ends_with(HTML_SUFFIX.as_bytes());
        if is_html {
            files.push(entry.path());
        }
    }

    files.sort();
    Ok(files)
}

//! Fix driver: discover pages, rewrite them, write results back.
//!
//! # Flow
//!
//! ```text
//! validate_root ──▶ collect_html_files ──▶ par_iter(fix_file) ──▶ FixSummary
//!                                              │
//!                         read ─▶ Rewriter::rewrite ─▶ write (if changed)
//! ```
//!
//! A file that cannot be read is logged and counted as skipped; the batch
//! keeps going. Missing or non-directory roots, scan failures and write
//! failures abort the run.

mod error;
mod scan;

#[cfg(test)]
mod tests;

pub use error::FixError;
pub use scan::collect_html_files;

use std::fs;
use std::path::Path;

use rayon::prelude::*;

use crate::core::BaseUrl;
use crate::logger::{Logger, ProgressLine};
use crate::rewrite::Rewriter;
use crate::utils::plural_count;

/// Settings for one fix run.
#[derive(Debug, Clone, Default)]
pub struct FixOptions {
    /// Raw base URL as given by the user; normalized before use.
    pub base_url: String,
    /// Report what would change without touching any file.
    pub dry: bool,
    /// Show an in-place progress counter while processing.
    pub progress: bool,
}

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Content was rewritten (or would be, in dry mode).
    Fixed,
    /// Nothing matched; file untouched.
    Unchanged,
    /// File could not be read; file untouched.
    Skipped,
}

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixSummary {
    pub found: usize,
    pub fixed: usize,
    pub skipped: usize,
}

impl FixSummary {
    fn from_outcomes(outcomes: &[FileOutcome]) -> Self {
        let count = |kind| outcomes.iter().filter(|o| **o == kind).count();
        Self {
            found: outcomes.len(),
            fixed: count(FileOutcome::Fixed),
            skipped: count(FileOutcome::Skipped),
        }
    }

    #[inline]
    pub fn unchanged(&self) -> usize {
        self.found - self.fixed - self.skipped
    }
}

/// Ensure `root` exists and is a directory.
pub fn validate_root(root: &Path) -> Result<(), FixError> {
    if !root.exists() {
        return Err(FixError::NotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(FixError::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}

/// Rewrite every HTML file below `root`.
pub fn fix_archive(
    root: &Path,
    options: &FixOptions,
    logger: &dyn Logger,
) -> Result<FixSummary, FixError> {
    validate_root(root)?;

    logger.log(&format!("processing documentation: {}", root.display()));
    let shown = if options.base_url.is_empty() {
        "(none)"
    } else {
        options.base_url.as_str()
    };
    logger.log(&format!("using base URL: {shown}"));

    let rewriter = Rewriter::new(BaseUrl::normalize(&options.base_url));
    logger.debug(&format!("normalized base URL: {}", rewriter.base()));

    let files = collect_html_files(root)?;
    logger.log(&format!("found {}", plural_count(files.len(), "HTML file")));

    let progress = (options.progress && !files.is_empty())
        .then(|| ProgressLine::new("html", files.len()));

    let outcomes = files
        .par_iter()
        .map(|path| {
            let outcome = fix_file(path, &rewriter, options.dry, logger);
            if let Some(progress) = &progress {
                progress.inc();
            }
            outcome
        })
        .collect::<Result<Vec<_>, FixError>>()?;

    if let Some(progress) = progress {
        progress.finish();
    }

    let summary = FixSummary::from_outcomes(&outcomes);
    let verb = if options.dry { "would fix" } else { "fixed" };
    logger.log(&format!("{verb} {}", plural_count(summary.fixed, "file")));
    logger.debug(&format!("unchanged {}", plural_count(summary.unchanged(), "file")));
    if summary.skipped > 0 {
        logger.log(&format!("skipped {}", plural_count(summary.skipped, "file")));
    }
    logger.log("done");

    Ok(summary)
}

/// Rewrite a single file in place.
///
/// Read failures are logged and reported as [`FileOutcome::Skipped`].
/// With a root base URL the file is not read at all, so an unreadable
/// page is reported as unchanged rather than skipped.
pub fn fix_file(
    path: &Path,
    rewriter: &Rewriter,
    dry: bool,
    logger: &dyn Logger,
) -> Result<FileOutcome, FixError> {
    logger.debug(&format!("processing: {}", path.display()));

    if rewriter.is_noop() {
        logger.debug(&format!("no changes needed: {}", path.display()));
        return Ok(FileOutcome::Unchanged);
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            logger.error(
                &format!("failed to process {}", path.display()),
                Some(&err),
            );
            return Ok(FileOutcome::Skipped);
        }
    };

    let Some(new) = rewriter.rewrite(&content, logger).into_changed() else {
        logger.debug(&format!("no changes needed: {}", path.display()));
        return Ok(FileOutcome::Unchanged);
    };

    if dry {
        logger.debug(&format!("would fix: {}", path.display()));
    } else {
        fs::write(path, new).map_err(|err| FixError::Write(path.to_path_buf(), err))?;
        logger.debug(&format!("fixed: {}", path.display()));
    }
    Ok(FileOutcome::Fixed)
}

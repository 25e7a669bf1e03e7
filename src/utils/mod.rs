//! Small helpers shared across the codebase.

pub mod path;

/// Format a count with its noun, adding `s` unless the count is one.
///
/// - `plural_count(0, "file")` -> `"0 files"`
/// - `plural_count(1, "HTML file")` -> `"1 HTML file"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}

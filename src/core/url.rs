//! Base URL type for prefixing site-root paths.
//!
//! - Input: arbitrary user text (`""`, `"docs"`, `"//a/b//"`, ...)
//! - Output: canonical form, exactly `/` or `/segment[/segment...]`

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Normalized base URL under which the documentation is served.
///
/// Invariants:
/// - Always starts with exactly one `/`
/// - Never ends with `/`, except for the root value `/` itself
/// - `BaseUrl::normalize(base.as_str()) == base`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BaseUrl(Arc<str>);

impl BaseUrl {
    /// Canonicalize raw user input.
    ///
    /// Strips every leading and trailing `/`, then re-adds a single leading
    /// slash. Input that reduces to nothing becomes the root `/`.
    ///
    /// `""` -> `/`, `"docs"` -> `/docs`, `"/docs/"` -> `/docs`,
    /// `"///"` -> `/`, `"//a/b//"` -> `/a/b`
    pub fn normalize(raw: &str) -> Self {
        let trimmed = raw.trim_start_matches('/').trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::root();
        }
        Self(Arc::from(format!("/{trimmed}")))
    }

    /// The root base URL `/`.
    #[inline]
    pub fn root() -> Self {
        Self(Arc::from("/"))
    }

    /// Whether this is the root `/`, in which case there is nothing to prefix.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.as_ref() == "/"
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self::root()
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for BaseUrl {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BaseUrl {
    fn from(s: &str) -> Self {
        Self::normalize(s)
    }
}

impl From<String> for BaseUrl {
    fn from(s: String) -> Self {
        Self::normalize(&s)
    }
}

impl PartialEq<str> for BaseUrl {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for BaseUrl {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

//! Base URL rewriting for generated documentation HTML.
//!
//! Pure text transform: no HTML parsing, no I/O. Reading and writing files
//! is the job of [`crate::fixer`].
//!
//! ```text
//! raw base URL ──normalize──▶ BaseUrl ──(root?)──▶ Unchanged
//!                                 │
//!                                 ▼
//!         content ──SUBSTITUTIONS (in order)──▶ new content
//!                                 │
//!                      same? ─────┴───── differs?
//!                        ▼                  ▼
//!                    Unchanged          Changed(new)
//! ```

mod rules;

use rules::SUBSTITUTIONS;

use std::borrow::Cow;

use crate::core::BaseUrl;
use crate::logger::Logger;

/// Outcome of rewriting one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteResult {
    /// Content differs from the input; carries the full new content.
    Changed(String),
    /// Nothing to write back.
    Unchanged,
}

impl RewriteResult {
    /// New content, if any.
    pub fn into_changed(self) -> Option<String> {
        match self {
            Self::Changed(content) => Some(content),
            Self::Unchanged => None,
        }
    }
}

/// Substitutions bound to one normalized base URL.
///
/// Build once per run and share across worker threads.
#[derive(Debug, Clone)]
pub struct Rewriter {
    base: BaseUrl,
    /// `(pattern, expanded replacement)` in application order.
    rules: Vec<(&'static str, String)>,
}

impl Rewriter {
    pub fn new(base: BaseUrl) -> Self {
        let rules = SUBSTITUTIONS
            .iter()
            .map(|rule| (rule.pattern, rule.replacement(&base)))
            .collect();
        Self { base, rules }
    }

    #[inline]
    pub fn base(&self) -> &BaseUrl {
        &self.base
    }

    /// A root base URL has nothing to prefix.
    #[inline]
    pub fn is_noop(&self) -> bool {
        self.base.is_root()
    }

    /// Rewrite `content`, reporting the verdict through `logger`.
    pub fn rewrite(&self, content: &str, logger: &dyn Logger) -> RewriteResult {
        if self.is_noop() {
            logger.debug("base URL is root, nothing to rewrite");
            return RewriteResult::Unchanged;
        }

        let mut current = Cow::Borrowed(content);
        for (pattern, replacement) in &self.rules {
            if current.contains(*pattern) {
                current = Cow::Owned(current.replace(*pattern, replacement));
            }
        }

        match current {
            Cow::Owned(new) if new != content => {
                logger.debug("content modified");
                RewriteResult::Changed(new)
            }
            _ => {
                logger.debug("content needs no changes");
                RewriteResult::Unchanged
            }
        }
    }
}

/// Normalize `base_url` and rewrite `content` against it.
///
/// One-off form of [`Rewriter::rewrite`]; the driver builds its
/// [`Rewriter`] once per run instead.
#[cfg(test)]
pub fn rewrite(content: &str, base_url: &str, logger: &dyn Logger) -> RewriteResult {
    let base = BaseUrl::normalize(base_url);
    logger.debug(&format!("normalized base URL: {base}"));
    Rewriter::new(base).rewrite(content, logger)
}

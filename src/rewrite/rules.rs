//! Literal substitution rules for site-root references.
//!
//! The documentation generator emits a small, fixed set of root-relative
//! references. Each rule pairs one exact pattern with a replacement
//! template where `{base}` stands for the normalized base URL.

use crate::core::BaseUrl;

/// Placeholder substituted with the normalized base URL.
const BASE_PLACEHOLDER: &str = "{base}";

/// One literal search-and-replace pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    /// Exact text to find.
    pub pattern: &'static str,
    /// Replacement with `{base}` placeholder.
    pub template: &'static str,
}

impl Substitution {
    pub const fn new(pattern: &'static str, template: &'static str) -> Self {
        Self { pattern, template }
    }

    /// Expand the template for a concrete base URL.
    ///
    /// `href="{base}/css` with `/docs` -> `href="/docs/css`
    pub fn replacement(&self, base: &BaseUrl) -> String {
        self.template.replace(BASE_PLACEHOLDER, base.as_str())
    }
}

/// Applied in order, each pass on the output of the previous one.
pub const SUBSTITUTIONS: &[Substitution] = &[
    // Inline script: `var baseUrl = "/"`
    Substitution::new(r#"baseUrl = "/""#, r#"baseUrl = "{base}/""#),
    Substitution::new(r#"href="/css"#, r#"href="{base}/css"#),
    Substitution::new(r#"src="/js"#, r#"src="{base}/js"#),
];

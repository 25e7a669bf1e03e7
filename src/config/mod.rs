//! Optional `path-fixer.toml` configuration.
//!
//! # Example
//!
//! ```toml
//! [fix]
//! base_url = "my/base"   # Raw base URL, normalized at use
//! verbose = false        # Print per-file diagnostics
//! ```
//!
//! A missing file is not an error: every field has a default, and CLI
//! flags take precedence over the file.

mod error;
mod util;

pub use error::ConfigError;
use util::find_config_file;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::log;

/// Default config file name, searched upward from the current directory.
pub const DEFAULT_CONFIG_NAME: &str = "path-fixer.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing path-fixer.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FixerConfig {
    /// Absolute path of the loaded file, `None` when running on defaults
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// `[fix]` settings
    pub fix: FixSection,
}

/// `[fix]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FixSection {
    /// Base URL prefix. Empty means root, i.e. no rewriting.
    pub base_url: String,

    /// Print per-file diagnostics.
    pub verbose: bool,
}

impl FixerConfig {
    /// Locate and load the config file, falling back to defaults.
    ///
    /// Relative names are searched upward from the current directory.
    pub fn load(config_name: &Path) -> Result<Self, ConfigError> {
        match find_config_file(config_name) {
            Some(path) => Self::from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path. Unknown fields are reported and ignored.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        log!("warning"; "unknown fields in {}, ignoring: {}", path.display(), fields.join(", "));
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_parse_defaults() {
        let (config, ignored) = FixerConfig::parse_with_ignored("").unwrap();
        assert!(ignored.is_empty());
        assert!(config.fix.base_url.is_empty());
        assert!(!config.fix.verbose);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_fix_section() {
        let (config, ignored) =
            FixerConfig::parse_with_ignored("[fix]\nbase_url = \"/docs/\"\nverbose = true")
                .unwrap();
        assert!(ignored.is_empty());
        assert_eq!(config.fix.base_url, "/docs/");
        assert!(config.fix.verbose);
    }

    #[test]
    fn test_parse_collects_unknown_fields() {
        let (config, ignored) = FixerConfig::parse_with_ignored(
            "[fix]\nbase_url = \"docs\"\nbase = \"typo\"\n\n[serve]\nport = 1",
        )
        .unwrap();
        assert_eq!(config.fix.base_url, "docs");
        assert!(ignored.contains(&"fix.base".to_string()));
        assert!(ignored.contains(&"serve".to_string()));
    }

    #[test]
    fn test_parse_type_error() {
        let err = FixerConfig::parse_with_ignored("[fix]\nverbose = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_from_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_CONFIG_NAME);
        fs::write(&path, "[fix]\nbase_url = \"my/base\"\n").unwrap();

        let config = FixerConfig::from_path(&path).unwrap();
        assert_eq!(config.fix.base_url, "my/base");
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_from_path_missing() {
        let err = FixerConfig::from_path(&PathBuf::from("/nonexistent/path-fixer.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }

    #[test]
    fn test_load_missing_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = FixerConfig::load(&temp.path().join("absent.toml")).unwrap();
        assert!(config.config_path.is_none());
        assert!(config.fix.base_url.is_empty());
    }
}

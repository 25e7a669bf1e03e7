//! Fix command - rewrite a documentation archive for a base URL.

use std::io::IsTerminal;

use anyhow::{Context, Result};

use crate::cli::FixArgs;
use crate::config::FixerConfig;
use crate::fixer::{FixOptions, FixSummary, fix_archive};
use crate::logger::{ConsoleLogger, Logger};
use crate::utils::path::absolute_path;

/// Settings for one run after merging CLI flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixSettings {
    pub base_url: String,
    pub verbose: bool,
    pub dry: bool,
}

impl FixSettings {
    /// CLI `--base-url` wins over `fix.base_url`; verbose if either asks.
    pub fn resolve(args: &FixArgs, config: &FixerConfig) -> Self {
        Self {
            base_url: args
                .base_url
                .clone()
                .unwrap_or_else(|| config.fix.base_url.clone()),
            verbose: args.verbose || config.fix.verbose,
            dry: args.dry,
        }
    }
}

/// Run the fix command
pub fn run_fix(args: &FixArgs, config: &FixerConfig) -> Result<FixSummary> {
    let settings = FixSettings::resolve(args, config);
    let logger = ConsoleLogger::new(settings.verbose);

    logger.debug("verbose mode enabled");
    if let Some(path) = &config.config_path {
        logger.debug(&format!("loaded config: {}", path.display()));
    }

    let root = absolute_path(&args.path);
    let options = FixOptions {
        base_url: settings.base_url,
        dry: settings.dry,
        progress: !logger.is_verbose() && std::io::stdout().is_terminal(),
    };

    fix_archive(&root, &options, &logger)
        .with_context(|| format!("failed to fix `{}`", root.display()))
}

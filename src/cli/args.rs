//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_NAME;

/// Fix absolute asset paths in generated documentation for hosting under a base URL
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (searched upward from the current directory)
    #[arg(short = 'C', long, global = true, default_value = DEFAULT_CONFIG_NAME, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Rewrite absolute paths in a documentation archive's HTML files
    #[command(visible_alias = "f")]
    Fix {
        #[command(flatten)]
        args: FixArgs,
    },
}

/// Fix command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct FixArgs {
    /// Documentation directory to rewrite in place
    #[arg(value_name = "DOC_ARCHIVE_PATH", value_hint = clap::ValueHint::DirPath)]
    pub path: PathBuf,

    /// Base URL prefix the documentation will be served under.
    ///
    /// Leading and trailing slashes are optional: `docs`, `/docs` and
    /// `/docs/` are equivalent. Empty or `/` leaves every file untouched.
    ///
    /// Example: serving under https://example.com/my/base/
    ///   path-fixer fix ./Kit.doccarchive --base-url my/base
    #[arg(short, long = "base-url", value_name = "BASE_URL")]
    pub base_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,

    /// Report what would change without writing any file
    #[arg(short, long)]
    pub dry: bool,
}

//! path-fixer - rewrite absolute asset paths in generated documentation
//! so it can be served under a non-root base URL.

mod cli;
mod config;
mod core;
mod fixer;
mod logger;
mod rewrite;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::FixerConfig;

fn main() {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    if let Err(err) = run(&cli) {
        log!("error"; "{:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = FixerConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Fix { args } => cli::fix::run_fix(args, &config).map(|_| ()),
    }
}

//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - check: Check command arguments
//! - modules: Modules command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod check;
pub mod completions;
pub mod modules;

pub use check::CheckArgs;
pub use completions::CompletionsArgs;
pub use modules::ModulesArgs;

/// resprobe - packaged resource checker
///
/// Checks that the resources bundled with a package exist and can be read.
#[derive(Parser, Debug)]
#[command(
    name = "resprobe",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Checks that packaged resource files exist and can be read",
    long_about = "resprobe reports which of a package's bundled resources exist, then requires \
                  the public module definition to resolve to a non-empty file on disk.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  resprobe                              \x1b[90m# Check the current directory\x1b[0m\n   \
                  resprobe --root ./package check       \x1b[90m# Check another package root\x1b[0m\n   \
                  resprobe check --check-private        \x1b[90m# Also require the private module\x1b[0m\n   \
                  resprobe modules                      \x1b[90m# List public module definitions\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Package root (defaults to current directory)
    #[arg(long, short = 'r', global = true, env = "RESPROBE_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check packaged resources (default)
    Check(CheckArgs),

    /// List module definitions in a directory of the package
    Modules(ModulesArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

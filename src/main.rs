//! resprobe - packaged resource checker
//!
//! Reports which of a package's bundled resources exist and requires the
//! public module definition to resolve to a readable, non-empty file.

use clap::Parser;
use miette::Diagnostic;

mod checker;
mod cli;
mod commands;
mod config;
mod error;
mod hash;
mod modules;
mod resource;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::{CheckArgs, Cli, Commands};
use error::ResprobeError;

fn report(err: &ResprobeError) {
    if err.is_precondition_violation() {
        eprintln!("Error: precondition violated: {err}");
    } else {
        eprintln!("Error: {err}");
    }
    if let Some(code) = err.code() {
        eprintln!("  code: {code}");
    }
    if let Some(help) = err.help() {
        eprintln!("  help: {help}");
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        None => commands::check::run(cli.root, cli.verbose, &CheckArgs::default()),
        Some(Commands::Check(args)) => commands::check::run(cli.root, cli.verbose, &args),
        Some(Commands::Modules(args)) => commands::modules::run(cli.root, cli.verbose, &args),
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(&args),
    };

    if let Err(e) = result {
        report(&e);
        std::process::exit(1);
    }
}

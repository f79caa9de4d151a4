use clap::Parser;

/// Arguments for the check command
#[derive(Parser, Debug, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Check the package in the current directory:\n    resprobe check\n\n\
                  Check another package root:\n    resprobe --root ./dist/package check\n\n\
                  Also check the private module:\n    resprobe check --check-private")]
pub struct CheckArgs {
    /// Also require the private module to exist and be non-empty
    #[arg(long)]
    pub check_private: bool,
}

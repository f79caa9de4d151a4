use clap::Parser;
use std::path::PathBuf;

/// Arguments for the modules command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List public modules of the package:\n    resprobe modules\n\n\
                  List modules from another directory:\n    resprobe modules modules/private\n\n\
                  Show the structure of one module:\n    resprobe modules --name time\n\n\
                  Build a module from explicit files:\n    resprobe modules --file a.json --file b.json")]
pub struct ModulesArgs {
    /// Directory of module definitions, relative to the package root
    #[arg(default_value = "modules/public")]
    pub dir: PathBuf,

    /// Show the attribute tree of a single module
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Build one module from these definition files, relative to the package root,
    /// instead of scanning a directory
    #[arg(long = "file", short = 'f', value_name = "FILE", conflicts_with = "dir")]
    pub files: Vec<PathBuf>,
}

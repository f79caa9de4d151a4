//! Check command implementation

use std::path::PathBuf;

use crate::checker::Checker;
use crate::cli::CheckArgs;
use crate::config::ProbeConfig;
use crate::error::Result;
use crate::ui::Reporter;

/// Run check command
pub fn run(root: Option<PathBuf>, verbose: bool, args: &CheckArgs) -> Result<()> {
    let reporter = Reporter::new(verbose);
    let package = super::open_package(root)?;
    reporter.detail("Package root:", package.root().display());

    let mut config = ProbeConfig::load(package.root())?;
    match &config.source {
        Some(path) => reporter.detail("Config:", path.display()),
        None => reporter.detail("Config:", "built-in defaults"),
    }
    config.resources.check_private |= args.check_private;

    let checker = Checker::new(&package, &config.resources).with_reporter(reporter);
    let report = checker.run(&mut std::io::stdout().lock())?;

    for checked in std::iter::once(&report.public_module).chain(&report.private_module) {
        reporter.detail(
            "Readable:",
            format!("{} -> {} ({} bytes)", checked.id, checked.path.display(), checked.len),
        );
    }
    reporter.success(&format!("Checked {} resources", report.existence.len()));

    Ok(())
}

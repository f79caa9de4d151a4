//! Console output helpers
//!
//! Check output goes to stdout unstyled so it can be compared across runs.
//! Everything printed here is supplementary and goes to stderr.

use console::Style;

/// Verbose-aware reporter for supplementary output
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    verbose: bool,
}

impl Reporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print a labelled detail line, only in verbose mode
    pub fn detail(&self, label: &str, value: impl std::fmt::Display) {
        if self.verbose {
            eprintln!(
                "{} {}",
                Style::new().bold().dim().apply_to(label),
                Style::new().dim().apply_to(value)
            );
        }
    }

    /// Print a success line
    pub fn success(&self, message: &str) {
        if self.verbose {
            eprintln!("{}", Style::new().green().bold().apply_to(message));
        }
    }
}

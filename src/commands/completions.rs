//! Shell completions command

use clap::CommandFactory;

use crate::cli::CompletionsArgs;
use crate::error::{Result, config};

/// Generate shell completions
pub fn run(args: &CompletionsArgs) -> Result<()> {
    let shell = parse_shell(&args.shell)?;
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "resprobe", &mut std::io::stdout().lock());
    Ok(())
}

fn parse_shell(name: &str) -> Result<clap_complete::Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Ok(clap_complete::Shell::Bash),
        "elvish" => Ok(clap_complete::Shell::Elvish),
        "fish" => Ok(clap_complete::Shell::Fish),
        "powershell" | "pwsh" => Ok(clap_complete::Shell::PowerShell),
        "zsh" => Ok(clap_complete::Shell::Zsh),
        _ => Err(config::invalid(format!(
            "Unknown shell: {name} (supported shells: bash, elvish, fish, powershell, zsh)"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_shell {
        ($test_name:ident, $name:expr, $expected:expr) => {
            #[test]
            fn $test_name() {
                assert_eq!(parse_shell($name).unwrap(), $expected);
            }
        };
    }

    test_shell!(test_shell_bash, "bash", clap_complete::Shell::Bash);
    test_shell!(test_shell_elvish, "elvish", clap_complete::Shell::Elvish);
    test_shell!(test_shell_fish, "fish", clap_complete::Shell::Fish);
    test_shell!(test_shell_pwsh, "pwsh", clap_complete::Shell::PowerShell);
    test_shell!(test_shell_zsh_mixed_case, "Zsh", clap_complete::Shell::Zsh);
    test_shell!(test_shell_uppercase, "BASH", clap_complete::Shell::Bash);

    #[test]
    fn test_unknown_shell() {
        let err = parse_shell("tcsh").unwrap_err();
        assert!(err.to_string().contains("Unknown shell: tcsh"));
    }

    #[test]
    fn test_completions_bash() {
        let args = CompletionsArgs {
            shell: "bash".to_string(),
        };
        assert!(run(&args).is_ok());
    }
}

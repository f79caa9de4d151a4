use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    resprobe completions bash > ~/.bash_completion.d/resprobe\n\n\
                  Generate zsh completions:\n    resprobe completions zsh > ~/.zfunc/_resprobe\n\n\
                  Generate fish completions:\n    resprobe completions fish > ~/.config/fish/completions/resprobe.fish\n\n\
                  Generate PowerShell completions:\n    resprobe completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}

use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    instill completions --shell bash > ~/.bash_completion.d/instill\n\n\
                  Generate zsh completions:\n    instill completions --shell zsh > ~/.zfunc/_instill\n\n\
                  Generate fish completions:\n    instill completions --shell fish > ~/.config/fish/completions/instill.fish\n\n\
                  Generate PowerShell completions:\n    instill completions --shell powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}

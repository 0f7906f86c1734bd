use clap::Parser;

/// Arguments for the detect command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Agents used in this project:\n    instill detect\n\n\
                  Agents installed for the current user:\n    instill detect --global")]
pub struct DetectArgs {
    /// Probe global agent directories instead of the project's
    #[arg(long, short = 'g')]
    pub global: bool,
}

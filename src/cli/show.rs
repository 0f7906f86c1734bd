use clap::Parser;

use super::TargetArgs;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show installed version:\n    instill show my-skill\n\n\
                  Show the global install:\n    instill show my-skill -g -a claude-code\n\n\
                  Machine-readable output:\n    instill show my-skill --json")]
pub struct ShowArgs {
    /// Name of the skill bundle
    pub name: String,

    #[command(flatten)]
    pub target: TargetArgs,
}

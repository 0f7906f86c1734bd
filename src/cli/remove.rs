use clap::Parser;

use super::TargetArgs;

/// Arguments for the remove command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove a skill:\n    instill remove my-skill -a claude-code\n\n\
                  Remove a global skill:\n    instill remove my-skill -g -a cursor")]
pub struct RemoveArgs {
    /// Name of the skill bundle to remove
    pub name: String,

    #[command(flatten)]
    pub target: TargetArgs,
}

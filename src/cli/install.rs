use clap::Parser;
use std::path::PathBuf;

use super::TargetArgs;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install every skill under a directory:\n    instill install ./skills -a claude-code\n\n\
                  Install for several agents:\n    instill install ./skills -a cursor,codex\n\n\
                  Install globally:\n    instill install ./skills -g -a claude-code\n\n\
                  Install for the detected agents:\n    instill install ./skills")]
pub struct InstallArgs {
    /// Directory containing one or more skill bundles
    pub source: PathBuf,

    #[command(flatten)]
    pub target: TargetArgs,
}

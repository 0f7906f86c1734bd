//! Install command implementation

use tracing::info;

use super::Context;
use crate::cli::InstallArgs;
use crate::error::Result;
use crate::ui::{self, Action};

/// Run install command
pub fn run(ctx: &Context, args: InstallArgs) -> Result<()> {
    let options = ctx.options(&args.target)?;
    info!(source = %args.source.display(), agents = ?options.agents, global = options.global, "installing");

    let results = ctx.installer().install(&args.source, &options)?;
    ui::print_results(Action::Install, &results, ctx.json)
}

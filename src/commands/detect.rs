//! Detect command implementation

use super::Context;
use crate::cli::DetectArgs;
use crate::error::Result;
use crate::ui;

/// Run detect command
pub fn run(ctx: &Context, args: DetectArgs) -> Result<()> {
    let agents = ctx
        .installer()
        .detect(Some(ctx.project_dir()), args.global);
    ui::print_agents(&agents, ctx.json)
}

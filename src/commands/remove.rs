//! Remove command implementation

use super::Context;
use crate::cli::RemoveArgs;
use crate::error::Result;
use crate::ui::{self, Action};

/// Run remove command
pub fn run(ctx: &Context, args: RemoveArgs) -> Result<()> {
    let options = ctx.options(&args.target)?;
    let results = ctx.installer().remove(&args.name, &options)?;
    ui::print_results(Action::Remove, &results, ctx.json)
}

//! Show command implementation

use super::Context;
use crate::cli::ShowArgs;
use crate::error::Result;
use crate::path_utils::sanitize_name;
use crate::ui;

/// Run show command
pub fn run(ctx: &Context, args: ShowArgs) -> Result<()> {
    let options = ctx.options(&args.target)?;
    let version = ctx.installer().installed_version(&args.name, &options)?;
    ui::print_version(&sanitize_name(&args.name), &version, ctx.json)
}

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `hcore systems`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.catalog.summaries(), flags.format)
}

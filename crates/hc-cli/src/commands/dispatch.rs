use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Status(args) => commands::status::handle(&args, ctx, flags),
        Commands::Receptor(args) => commands::receptor::handle(&args, ctx, flags),
        Commands::System(args) => commands::system::handle(&args, ctx, flags),
        Commands::Systems => commands::systems::handle(ctx, flags),
        Commands::Schema(args) => commands::schema::handle(&args, &ctx.schemas, flags),
    }
}

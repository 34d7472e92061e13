use hc_core::responses::SystemReceptorsResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SystemArgs;
use crate::context::AppContext;
use crate::output::output_rows;

/// Handle `hcore system`.
pub fn handle(args: &SystemArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (system, receptors) = ctx.catalog.system_receptors(&args.id)?;

    let rows = receptors
        .iter()
        .map(|(id, entry)| {
            vec![
                id.clone(),
                entry.primary_receptor.clone(),
                entry.name.clone().unwrap_or_default(),
                entry.enhancers.len().to_string(),
                entry.inhibitors.len().to_string(),
            ]
        })
        .collect::<Vec<_>>();

    let response = SystemReceptorsResponse {
        system,
        count: receptors.len(),
        receptors: receptors.clone(),
    };

    output_rows(
        &response,
        &["id", "primary_receptor", "name", "enhancers", "inhibitors"],
        &rows,
        flags.format,
    )
}

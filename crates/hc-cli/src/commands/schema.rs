use anyhow::Context;
use hc_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `hcore schema`.
pub fn handle(args: &SchemaArgs, schemas: &SchemaRegistry, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.list {
        return output(&schemas.list(), flags.format);
    }

    let name = args.type_name.as_deref().unwrap_or_default();
    let schema = schemas.get(name).with_context(|| {
        format!(
            "unknown schema '{name}' (available: {})",
            schemas.list().join(", ")
        )
    })?;
    output(schema, flags.format)
}

use std::io::Read;

use anyhow::Context;
use hc_core::entities::NutrientReport;
use hc_core::responses::ReceptorStatusResponse;
use hc_schema::{NUTRIENT_REPORTS, SchemaRegistry};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StatusArgs;
use crate::context::AppContext;
use crate::output::output_rows;

/// Handle `hcore status`.
pub fn handle(args: &StatusArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let input = read_input(&args.input)?;
    let reports = parse_reports(&input, &ctx.schemas)?;
    tracing::debug!(reports = reports.len(), source = %args.input, "nutrient reports parsed");

    let user_id = args
        .user
        .clone()
        .or_else(|| ctx.config.general.default_user());
    let response = ctx.engine().report(&reports, user_id);

    output_rows(&response, &HEADERS, &rows(&response), flags.format)
}

const HEADERS: [&str; 5] = ["system", "efficiency", "receptors", "notes", "commentary"];

fn read_input(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read nutrient reports from stdin")?;
        return Ok(buffer);
    }
    std::fs::read_to_string(source)
        .with_context(|| format!("failed to read nutrient reports from {source}"))
}

/// Parse a JSON array of reports, validating its shape before deserializing.
fn parse_reports(input: &str, schemas: &SchemaRegistry) -> anyhow::Result<Vec<NutrientReport>> {
    let value: serde_json::Value =
        serde_json::from_str(input).context("nutrient reports are not valid JSON")?;
    schemas
        .validate(NUTRIENT_REPORTS, &value)
        .context("nutrient reports do not match the expected shape")?;
    serde_json::from_value(value).context("failed to decode nutrient reports")
}

fn rows(response: &ReceptorStatusResponse) -> Vec<Vec<String>> {
    response
        .systems
        .values()
        .map(|report| {
            vec![
                report.system.to_string(),
                format!("{:.1}", report.efficiency),
                report.active_receptors.to_string(),
                report.notes.clone(),
                report.commentary.clone(),
            ]
        })
        .collect()
}

use hc_core::errors::CoreError;
use hc_core::responses::ReceptorInfoResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReceptorArgs;
use crate::context::AppContext;
use crate::output::output_rows;

/// Handle `hcore receptor`.
pub fn handle(args: &ReceptorArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = lookup(ctx, &args.name)?;
    let entry = &response.entry;

    let rows = vec![
        vec!["system".to_string(), response.system.to_string()],
        vec!["id".to_string(), response.receptor_id.clone()],
        vec!["primary_receptor".to_string(), entry.primary_receptor.clone()],
        vec!["gene".to_string(), entry.gene.clone().unwrap_or_default()],
        vec!["location".to_string(), entry.location.clone().unwrap_or_default()],
        vec!["enhancers".to_string(), names(&entry.enhancers)],
        vec!["inhibitors".to_string(), names(&entry.inhibitors)],
    ];

    output_rows(&response, &["field", "value"], &rows, flags.format)
}

fn lookup(ctx: &AppContext, name: &str) -> Result<ReceptorInfoResponse, CoreError> {
    let (system, id, entry) = ctx
        .catalog
        .receptor_info(name)
        .ok_or_else(|| CoreError::not_found("receptor", name))?;

    Ok(ReceptorInfoResponse {
        system,
        receptor_id: id.to_string(),
        entry: entry.clone(),
    })
}

fn names(factors: &[hc_core::entities::Factor]) -> String {
    factors
        .iter()
        .map(|factor| factor.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use hc_config::HealthConfig;
    use hc_core::enums::BodySystem;

    use super::*;

    fn ctx() -> AppContext {
        AppContext::init(HealthConfig::default(), None).expect("context")
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let response = lookup(&ctx(), "dmt1").expect("DMT1 should exist");
        assert_eq!(response.system, BodySystem::Intestinal);
        assert_eq!(response.receptor_id, "iron");
        assert_eq!(response.entry.primary_receptor, "DMT1");
    }

    #[test]
    fn unknown_receptor_is_not_found() {
        let error = lookup(&ctx(), "GLUT4").expect_err("should be missing");
        assert!(matches!(error, CoreError::NotFound { .. }));
        assert!(error.to_string().contains("GLUT4"));
    }
}

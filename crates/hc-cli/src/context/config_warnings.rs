use hc_config::HealthConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &HealthConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &HealthConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.catalog.is_configured() && has_single_underscore_key(&env_keys, "HEALTHCORE_CATALOG")
    {
        warnings.push(
            "Catalog config appears default while HEALTHCORE_CATALOG* env vars exist. Use double underscores (example: HEALTHCORE_CATALOG__PATH)."
                .to_string(),
        );
    }

    if config.general.default_user().is_none()
        && has_single_underscore_key(&env_keys, "HEALTHCORE_GENERAL")
    {
        warnings.push(
            "General config appears default while HEALTHCORE_GENERAL* env vars exist. Use double underscores (example: HEALTHCORE_GENERAL__DEFAULT_USER_ID)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    let nested = format!("{prefix}__");
    keys.iter()
        .any(|key| key.starts_with(prefix) && !key.starts_with(&nested))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), "value".to_string()))
            .collect()
    }

    #[test]
    fn warns_on_single_underscore_catalog_key() {
        let warnings = collect_unconfigured_warnings(
            &HealthConfig::default(),
            env(&["HEALTHCORE_CATALOG_PATH"]),
        );
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("HEALTHCORE_CATALOG__PATH"));
    }

    #[test]
    fn no_warning_for_double_underscore_key() {
        let warnings = collect_unconfigured_warnings(
            &HealthConfig::default(),
            env(&["HEALTHCORE_CATALOG__PATH", "HEALTHCORE_GENERAL__LOG_LEVEL"]),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn warns_on_single_underscore_general_key() {
        let warnings = collect_unconfigured_warnings(
            &HealthConfig::default(),
            env(&["HEALTHCORE_GENERAL_DEFAULT_USER_ID", "PATH"]),
        );
        assert_eq!(warnings.len(), 1);
    }
}

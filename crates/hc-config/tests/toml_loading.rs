//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use hc_config::{ConfigError, HealthConfig};
use pretty_assertions::assert_eq;

#[test]
fn loads_catalog_and_general_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[catalog]
path = "data/receptors.toml"

[general]
default_user_id = "user-17"
log_level = "info"
"#,
        )?;

        let config: HealthConfig = Figment::from(Serialized::defaults(HealthConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.catalog.path, "data/receptors.toml");
        assert!(config.catalog.is_configured());
        assert_eq!(config.general.default_user().as_deref(), Some("user-17"));
        assert_eq!(config.general.log_level, "info");
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_user_id = "someone"
"#,
        )?;

        let config: HealthConfig = Figment::from(Serialized::defaults(HealthConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(!config.catalog.is_configured());
        assert_eq!(config.general.log_level, "warn");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[catalog]
path = "from-toml.toml"
"#,
        )?;
        jail.set_env("HEALTHCORE_CATALOG__PATH", "from-env.json");

        let config: HealthConfig = Figment::from(Serialized::defaults(HealthConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("HEALTHCORE_").split("__"))
            .extract()?;

        assert_eq!(config.catalog.path, "from-env.json");
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_default_chain() {
    Jail::expect_with(|jail| {
        jail.create_dir(".healthcore")?;
        jail.create_file(
            ".healthcore/config.toml",
            r#"
[catalog]
path = "custom.json"
"#,
        )?;

        let config = HealthConfig::load().expect("config loads");
        assert_eq!(config.catalog.path, "custom.json");
        Ok(())
    });
}

#[test]
fn unsupported_catalog_extension_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_dir(".healthcore")?;
        jail.create_file(
            ".healthcore/config.toml",
            r#"
[catalog]
path = "receptors.md"
"#,
        )?;

        let result = HealthConfig::load();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}

use std::path::Path;

use anyhow::Context;
use hc_config::HealthConfig;
use hc_receptors::{ReceptorCatalog, ReceptorEngine};
use hc_schema::SchemaRegistry;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: HealthConfig,
    pub catalog: ReceptorCatalog,
    pub schemas: SchemaRegistry,
}

impl AppContext {
    /// Load the receptor catalog and build the schema registry.
    ///
    /// The catalog comes from `catalog_override` when given, then from
    /// `catalog.path` in configuration, and otherwise from the built-in data.
    pub fn init(config: HealthConfig, catalog_override: Option<&Path>) -> anyhow::Result<Self> {
        let catalog = match catalog_override.map(Path::to_path_buf).or_else(|| config.catalog.path()) {
            Some(path) => ReceptorCatalog::from_path(&path)
                .with_context(|| format!("failed to load receptor catalog {}", path.display()))?,
            None => ReceptorCatalog::builtin().context("built-in receptor catalog is invalid")?,
        };

        tracing::debug!(
            systems = catalog.systems().count(),
            receptors = catalog.receptor_count(),
            "receptor catalog ready"
        );

        Ok(Self {
            config,
            catalog,
            schemas: SchemaRegistry::new(),
        })
    }

    #[must_use]
    pub const fn engine(&self) -> ReceptorEngine<'_> {
        ReceptorEngine::new(&self.catalog)
    }
}

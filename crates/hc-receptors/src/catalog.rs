//! Static receptor catalog.
//!
//! The catalog is built once (from the embedded TOML or a user-supplied file),
//! validated, and then only read. Share it by reference or behind an `Arc`.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use hc_core::entities::{ReceptorCatalogEntry, SystemCatalog};
use hc_core::enums::BodySystem;
use hc_core::errors::CoreError;
use hc_core::responses::SystemSummary;
use tracing::info;

use crate::error::ReceptorError;

const BUILTIN_CATALOG: &str = include_str!("../data/receptors.toml");

/// Read-only mapping of body system to its receptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceptorCatalog {
    systems: BTreeMap<BodySystem, SystemCatalog>,
}

impl ReceptorCatalog {
    /// Catalog shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded data is malformed.
    pub fn builtin() -> Result<Self, ReceptorError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Parse and validate a TOML catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`ReceptorError::Toml`] on parse failure or a validation error
    /// from [`ReceptorCatalog::from_raw`].
    pub fn from_toml_str(input: &str) -> Result<Self, ReceptorError> {
        let raw: BTreeMap<String, SystemCatalog> = toml::from_str(input)?;
        Self::from_raw(raw)
    }

    /// Parse and validate a JSON catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`ReceptorError::Json`] on parse failure or a validation error
    /// from [`ReceptorCatalog::from_raw`].
    pub fn from_json_str(input: &str) -> Result<Self, ReceptorError> {
        let raw: BTreeMap<String, SystemCatalog> = serde_json::from_str(input)?;
        Self::from_raw(raw)
    }

    /// Load a catalog file, choosing the parser by extension.
    ///
    /// # Errors
    ///
    /// Returns [`ReceptorError::Io`] if the file cannot be read and
    /// [`ReceptorError::UnsupportedFormat`] for extensions other than
    /// `.toml` and `.json`.
    pub fn from_path(path: &Path) -> Result<Self, ReceptorError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let parse: fn(&str) -> Result<Self, ReceptorError> = match extension.as_str() {
            "toml" => Self::from_toml_str,
            "json" => Self::from_json_str,
            _ => {
                return Err(ReceptorError::UnsupportedFormat(
                    path.display().to_string(),
                ));
            }
        };

        let contents = std::fs::read_to_string(path).map_err(|source| ReceptorError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = parse(&contents)?;
        info!(path = %path.display(), receptors = catalog.receptor_count(), "loaded receptor catalog");
        Ok(catalog)
    }

    /// Validate a string-keyed document into a typed catalog.
    ///
    /// Every body system must be present, every receptor id and primary
    /// receptor label non-empty, every factor named, and each receptor id must
    /// belong to exactly one system.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] describing the first violation.
    pub fn from_raw(raw: BTreeMap<String, SystemCatalog>) -> Result<Self, ReceptorError> {
        let mut systems = BTreeMap::new();

        for (key, section) in raw {
            let system: BodySystem = key.parse().map_err(|_| {
                CoreError::Validation(format!("unknown body system '{key}'"))
            })?;
            if systems.insert(system, section).is_some() {
                return Err(
                    CoreError::Validation(format!("body system '{system}' listed twice")).into(),
                );
            }
        }

        for system in BodySystem::ALL {
            if !systems.contains_key(&system) {
                return Err(
                    CoreError::Validation(format!("missing body system '{system}'")).into(),
                );
            }
        }

        let mut owners: HashMap<&str, BodySystem> = HashMap::new();
        for (system, section) in &systems {
            for (id, entry) in &section.receptors {
                validate_entry(*system, id, entry)?;
                if let Some(previous) = owners.insert(id.as_str(), *system) {
                    return Err(CoreError::Validation(format!(
                        "receptor '{id}' appears in both '{previous}' and '{system}'"
                    ))
                    .into());
                }
            }
        }

        Ok(Self { systems })
    }

    /// Section for one body system. Always present after validation.
    #[must_use]
    pub fn system(&self, system: BodySystem) -> Option<&SystemCatalog> {
        self.systems.get(&system)
    }

    /// Iterate systems in pathway order.
    pub fn systems(&self) -> impl Iterator<Item = (BodySystem, &SystemCatalog)> {
        self.systems.iter().map(|(system, section)| (*system, section))
    }

    /// Find a receptor by its primary receptor label, case-insensitively.
    ///
    /// Returns the owning system, the receptor id, and the entry.
    #[must_use]
    pub fn receptor_info(&self, name: &str) -> Option<(BodySystem, &str, &ReceptorCatalogEntry)> {
        let wanted = name.to_lowercase();
        self.systems().find_map(|(system, section)| {
            section
                .receptors
                .iter()
                .find(|(_, entry)| entry.primary_receptor.to_lowercase() == wanted)
                .map(|(id, entry)| (system, id.as_str(), entry))
        })
    }

    /// All receptors of a body system named by id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if `system_id` is not a body system.
    pub fn system_receptors(
        &self,
        system_id: &str,
    ) -> Result<(BodySystem, &BTreeMap<String, ReceptorCatalogEntry>), CoreError> {
        let system: BodySystem = system_id.parse()?;
        let section = self
            .system(system)
            .ok_or_else(|| CoreError::not_found("body_system", system_id))?;
        Ok((system, &section.receptors))
    }

    /// Display summaries of every system.
    #[must_use]
    pub fn summaries(&self) -> Vec<SystemSummary> {
        self.systems()
            .map(|(system, section)| SystemSummary {
                system,
                name: section.name.clone(),
                icon: section.icon.clone(),
                description: section.description.clone(),
                receptor_count: section.receptors.len(),
            })
            .collect()
    }

    /// Total receptors across all systems.
    #[must_use]
    pub fn receptor_count(&self) -> usize {
        self.systems.values().map(|s| s.receptors.len()).sum()
    }
}

fn validate_entry(
    system: BodySystem,
    id: &str,
    entry: &ReceptorCatalogEntry,
) -> Result<(), CoreError> {
    if id.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "empty receptor id in '{system}'"
        )));
    }
    if entry.primary_receptor.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "receptor '{id}' in '{system}' has no primary receptor"
        )));
    }
    let unnamed = entry
        .enhancers
        .iter()
        .chain(&entry.inhibitors)
        .any(|factor| factor.name.trim().is_empty());
    if unnamed {
        return Err(CoreError::Validation(format!(
            "receptor '{id}' in '{system}' has an unnamed factor"
        )));
    }
    Ok(())
}

//! In-memory type fact catalog.
//!
//! The catalog holds the facts of several modules (assemblies, crates, packages...) and
//! resolves type ids across all of them, so a type in one module may derive from a type
//! declared in another. Each module is exposed as its own [`TypeFactSource`], which lets the
//! analyzer process modules one by one into the same graph.
//!
//! JSON layout:
//!
//! ```json
//! { "modules": [ { "name": "Acme.Core", "types": [
//!     { "id": "Acme.Circle", "name": "Circle", "namespace": "Acme",
//!       "base_type": "Acme.Shape", "interfaces": ["Acme.IDrawable"] } ] } ] }
//! ```

use crate::domain::error::{GraphError, Result};
use crate::domain::ports::{TypeFact, TypeFactSource};
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Joins endpoints in edge ids, so type ids must not contain it.
const EDGE_SEPARATOR: &str = "->";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleFacts {
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeFact>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    modules: Vec<ModuleFacts>,
}

#[derive(Debug, Clone, Default)]
pub struct FactCatalog {
    modules: Vec<ModuleFacts>,
    /// type id → (module position, type position)
    index: HashMap<String, (usize, usize)>,
}

impl FactCatalog {
    pub fn new(modules: Vec<ModuleFacts>) -> Self {
        let mut index = HashMap::new();
        for (m, module) in modules.iter().enumerate() {
            for (t, fact) in module.types.iter().enumerate() {
                if index.contains_key(&fact.id) {
                    tracing::warn!(
                        "type '{}' declared again in module '{}', keeping first declaration",
                        fact.id,
                        module.name
                    );
                    continue;
                }
                index.insert(fact.id.clone(), (m, t));
            }
        }
        Self { modules, index }
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let file: CatalogFile =
            serde_json::from_str(json).context("Failed to parse type fact catalog JSON")?;
        Ok(Self::new(file.modules))
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read type fact catalog: {}", path.display()))?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        let file = CatalogFile {
            modules: self.modules.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    pub fn modules(&self) -> &[ModuleFacts] {
        &self.modules
    }

    pub fn type_count(&self) -> usize {
        self.index.len()
    }

    pub fn module_source(&self, name: &str) -> Option<ModuleSource<'_>> {
        self.modules
            .iter()
            .find(|m| m.name == name)
            .map(|module| ModuleSource {
                catalog: self,
                module,
            })
    }

    pub fn module_sources(&self) -> impl Iterator<Item = ModuleSource<'_>> {
        self.modules.iter().map(move |module| ModuleSource {
            catalog: self,
            module,
        })
    }

    /// Looks a type up across all modules and checks that it can be used.
    pub fn resolve(&self, id: &str) -> Result<TypeFact> {
        let &(m, t) = self
            .index
            .get(id)
            .ok_or_else(|| GraphError::UnknownType(id.to_string()))?;
        let fact = &self.modules[m].types[t];

        if let Some(reason) = &fact.load_error {
            return Err(GraphError::MalformedFact {
                id: id.to_string(),
                reason: reason.clone(),
            });
        }
        if fact.id.trim().is_empty() {
            return Err(GraphError::MalformedFact {
                id: id.to_string(),
                reason: "type has no id".to_string(),
            });
        }
        if fact.id.contains(EDGE_SEPARATOR) {
            return Err(GraphError::MalformedFact {
                id: id.to_string(),
                reason: format!("type id contains `{}`", EDGE_SEPARATOR),
            });
        }
        if fact.name.trim().is_empty() {
            return Err(GraphError::MalformedFact {
                id: id.to_string(),
                reason: "type has no name".to_string(),
            });
        }
        Ok(fact.clone())
    }
}

/// One module of a catalog, seen as a fact source.
#[derive(Clone, Copy)]
pub struct ModuleSource<'a> {
    catalog: &'a FactCatalog,
    module: &'a ModuleFacts,
}

impl ModuleSource<'_> {
    pub fn name(&self) -> &str {
        &self.module.name
    }
}

impl TypeFactSource for ModuleSource<'_> {
    fn type_ids(&self) -> Vec<String> {
        self.module.types.iter().map(|f| f.id.clone()).collect()
    }

    fn resolve(&self, id: &str) -> Result<TypeFact> {
        self.catalog.resolve(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "modules": [
            { "name": "Core", "types": [
                { "id": "Acme.Shape", "name": "Shape", "namespace": "Acme" },
                { "id": "Acme.Broken", "name": "Broken", "namespace": "Acme", "load_error": "missing dependency" }
            ] },
            { "name": "Geometry", "types": [
                { "id": "Acme.Circle", "name": "Circle", "namespace": "Acme", "base_type": "Acme.Shape" }
            ] }
        ]
    }"#;

    #[test]
    fn test_resolves_across_modules() {
        let catalog = FactCatalog::from_json(CATALOG).unwrap();
        let geometry = catalog.module_source("Geometry").unwrap();

        assert_eq!(geometry.type_ids(), vec!["Acme.Circle".to_string()]);
        let base = geometry.resolve("Acme.Shape").unwrap();
        assert_eq!(base.name, "Shape");
        assert_eq!(catalog.type_count(), 3);
    }

    #[test]
    fn test_load_error_is_malformed() {
        let catalog = FactCatalog::from_json(CATALOG).unwrap();
        assert!(matches!(
            catalog.resolve("Acme.Broken"),
            Err(GraphError::MalformedFact { .. })
        ));
        assert!(matches!(
            catalog.resolve("Acme.Nothing"),
            Err(GraphError::UnknownType(_))
        ));
    }

    #[test]
    fn test_edge_separator_in_id_is_malformed() {
        let catalog = FactCatalog::from_json(
            r#"{ "modules": [ { "name": "Core", "types": [
                { "id": "N.A", "name": "A", "namespace": "N", "base_type": "N.B->N.C" },
                { "id": "N.B->N.C", "name": "C", "namespace": "N" }
            ] } ] }"#,
        )
        .unwrap();

        assert!(matches!(
            catalog.resolve("N.B->N.C"),
            Err(GraphError::MalformedFact { .. })
        ));
        assert!(catalog.resolve("N.A").is_ok());
    }

    #[test]
    fn test_json_round_trip_keeps_modules() {
        let catalog = FactCatalog::from_json(CATALOG).unwrap();
        let again = FactCatalog::from_json(&catalog.to_json().unwrap()).unwrap();
        assert_eq!(again.modules(), catalog.modules());
    }

    #[test]
    fn test_invalid_json_reports_context() {
        let err = FactCatalog::from_json("{ not json").unwrap_err();
        assert!(err.to_string().contains("type fact catalog"));
    }
}

//! Mock implementations for integration tests.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use typeviz::domain::error::{GraphError, Result};
use typeviz::domain::ports::{TypeFact, TypeFactSource};

/// In-memory fact source.
///
/// `declared` ids are listed by `type_ids`; `known` facts can be resolved but are not listed,
/// like types referenced from another module.
#[derive(Default)]
pub struct MockFactSource {
    declared: Vec<String>,
    facts: HashMap<String, TypeFact>,
    failing: HashSet<String>,
}

impl MockFactSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, fact: TypeFact) -> Self {
        self.declared.push(fact.id.clone());
        self.facts.insert(fact.id.clone(), fact);
        self
    }

    pub fn with_known(mut self, fact: TypeFact) -> Self {
        self.facts.insert(fact.id.clone(), fact);
        self
    }

    /// Lists `id` but fails to resolve it.
    pub fn with_failing(mut self, id: &str) -> Self {
        self.declared.push(id.to_string());
        self.failing.insert(id.to_string());
        self
    }
}

impl TypeFactSource for MockFactSource {
    fn type_ids(&self) -> Vec<String> {
        self.declared.clone()
    }

    fn resolve(&self, id: &str) -> Result<TypeFact> {
        if self.failing.contains(id) {
            return Err(GraphError::MalformedFact {
                id: id.to_string(),
                reason: "mock load failure".to_string(),
            });
        }
        self.facts
            .get(id)
            .cloned()
            .ok_or_else(|| GraphError::UnknownType(id.to_string()))
    }
}

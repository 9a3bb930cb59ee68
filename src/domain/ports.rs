use crate::domain::error::Result;
use serde::{Deserialize, Serialize};

/// Raw facts about one type, as reported by an introspection provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeFact {
    pub id: String,
    pub name: String,
    /// Compiler generated types have no namespace.
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub base_type: Option<String>,
    /// Every interface the type implements, inherited ones included.
    #[serde(default)]
    pub interfaces: Vec<String>,
    /// Set by providers that could list the type but failed to load it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_error: Option<String>,
}

/// Type fact provider port (implemented by adapters and test mocks)
pub trait TypeFactSource {
    /// Ids of the types this source declares, in declaration order.
    fn type_ids(&self) -> Vec<String>;

    /// Resolve any type id (declared here or referenced from here) to its facts.
    fn resolve(&self, id: &str) -> Result<TypeFact>;
}

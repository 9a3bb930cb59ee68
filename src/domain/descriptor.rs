use crate::domain::id::NodeId;
use crate::domain::ports::TypeFact;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Identity and display attributes of one inspected type.
///
/// Two descriptors are equal iff their ids match; name and namespace are informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDescriptor {
    id: NodeId,
    name: String,
    namespace: String,
}

impl TypeDescriptor {
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    /// Facts without a namespace get an empty one.
    pub fn from_fact(fact: &TypeFact) -> Self {
        Self::new(
            fact.id.as_str(),
            fact.name.as_str(),
            fact.namespace.clone().unwrap_or_default(),
        )
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

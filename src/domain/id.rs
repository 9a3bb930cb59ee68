//! Strongly typed identifiers for graph elements.
//!
//! All ids are plain strings underneath. They implement `Borrow<str>` so that maps keyed by
//! an id can be queried with a `&str`.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifies a node. For relationship graphs this is the type id.
    NodeId
);

string_id!(
    /// Identifies an edge. Derived from the endpoints, see [`EdgeId::between`].
    EdgeId
);

string_id!(
    /// Identifies a cluster of nodes.
    ClusterId
);

impl EdgeId {
    /// A graph holds at most one edge per ordered pair, so the pair is a stable identity.
    pub fn between(source: &NodeId, target: &NodeId) -> Self {
        Self(format!("{}->{}", source, target))
    }
}

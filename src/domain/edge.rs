use crate::domain::id::EdgeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Edge kind - classification of a type relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    DerivesFrom, // Type → base type
    Implements,  // Type → interface
}

/// Side map from edge id to its kind.
///
/// Kept apart from the graph so consumers that only care about structure can share edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeKinds {
    kinds: BTreeMap<EdgeId, EdgeKind>,
}

impl EdgeKinds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the kind of a new edge. An edge keeps its first kind; returns false if it
    /// already had one.
    pub fn record(&mut self, edge: EdgeId, kind: EdgeKind) -> bool {
        if self.kinds.contains_key(&edge) {
            return false;
        }
        self.kinds.insert(edge, kind);
        true
    }

    pub fn get(&self, edge: &str) -> Option<EdgeKind> {
        self.kinds.get(edge).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EdgeId, EdgeKind)> {
        self.kinds.iter().map(|(id, kind)| (id, *kind))
    }

    pub fn count_of(&self, kind: EdgeKind) -> usize {
        self.kinds.values().filter(|k| **k == kind).count()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

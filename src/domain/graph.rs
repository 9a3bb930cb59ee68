use crate::domain::error::{GraphError, Result};
use crate::domain::id::{ClusterId, EdgeId, NodeId};
use petgraph::Direction;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
}

/// Named group of nodes, rendered as a nested region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    pub id: ClusterId,
    pub nodes: Vec<NodeId>,
}

/// Append-only directed graph.
///
/// Node ids are unique and an ordered (source, target) pair carries at most one edge.
/// Re-adding an existing element is a no-op reported as `None`. Enumeration follows
/// insertion order since nothing is ever removed.
#[derive(Debug, Default)]
pub struct Graph {
    /// The underlying petgraph storage
    pub graph: DiGraph<Node, Edge>,

    id_to_node: HashMap<NodeId, NodeIndex>,
    id_to_edge: HashMap<EdgeId, EdgeIndex>,
    clusters: Vec<Cluster>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node unless one with the same id exists.
    pub fn try_add_node(&mut self, id: impl Into<NodeId>) -> Option<NodeIndex> {
        let id = id.into();
        if self.id_to_node.contains_key(&id) {
            return None;
        }
        let idx = self.graph.add_node(Node { id: id.clone() });
        self.id_to_node.insert(id, idx);
        Some(idx)
    }

    /// Adds the edge `source -> target` unless present. Missing endpoints are created.
    pub fn try_add_edge(
        &mut self,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
    ) -> Option<&Edge> {
        let source = source.into();
        let target = target.into();
        let source_idx = self.get_or_add_node(&source);
        let target_idx = self.get_or_add_node(&target);

        if self.graph.find_edge(source_idx, target_idx).is_some() {
            return None;
        }

        let id = EdgeId::between(&source, &target);
        let idx = self.graph.add_edge(
            source_idx,
            target_idx,
            Edge {
                id: id.clone(),
                source,
                target,
            },
        );
        self.id_to_edge.insert(id, idx);
        Some(&self.graph[idx])
    }

    /// Adds a cluster over existing nodes. Returns `Ok(None)` if the cluster id is taken.
    pub fn try_add_cluster<I, N>(&mut self, id: impl Into<ClusterId>, nodes: I) -> Result<Option<&Cluster>>
    where
        I: IntoIterator<Item = N>,
        N: Into<NodeId>,
    {
        let id = id.into();
        if self.clusters.iter().any(|c| c.id == id) {
            return Ok(None);
        }

        let mut seen = HashSet::new();
        let mut members = Vec::new();
        for node in nodes {
            let node = node.into();
            if !self.id_to_node.contains_key(&node) {
                return Err(GraphError::UnknownNode(node.to_string()));
            }
            if seen.insert(node.clone()) {
                members.push(node);
            }
        }

        self.clusters.push(Cluster { id, nodes: members });
        Ok(self.clusters.last())
    }

    fn get_or_add_node(&mut self, id: &NodeId) -> NodeIndex {
        if let Some(&idx) = self.id_to_node.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(Node { id: id.clone() });
        self.id_to_node.insert(id.clone(), idx);
        idx
    }

    pub fn find_node(&self, id: &str) -> Option<&Node> {
        self.id_to_node.get(id).map(|&idx| &self.graph[idx])
    }

    pub fn find_edge(&self, id: &str) -> Option<&Edge> {
        self.id_to_edge.get(id).map(|&idx| &self.graph[idx])
    }

    pub fn find_cluster(&self, id: &str) -> Option<&Cluster> {
        self.clusters.iter().find(|c| c.id.as_str() == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.id_to_node.contains_key(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_weights()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.graph.edge_weights()
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Edges pointing at `id`, oldest first.
    pub fn incoming(&self, id: &str) -> Result<Vec<&Edge>> {
        self.edges_directed(id, Direction::Incoming)
    }

    /// Edges leaving `id`, oldest first.
    pub fn outgoing(&self, id: &str) -> Result<Vec<&Edge>> {
        self.edges_directed(id, Direction::Outgoing)
    }

    fn edges_directed(&self, id: &str, direction: Direction) -> Result<Vec<&Edge>> {
        let idx = self
            .id_to_node
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))?;

        // petgraph yields adjacency lists newest first
        let mut edges: Vec<_> = self.graph.edges_directed(idx, direction).collect();
        edges.sort_by_key(|e| e.id());
        Ok(edges.into_iter().map(|e| e.weight()).collect())
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

//! Analysis document - the result of one traversal or export request.
//!
//! A document owns its own copy of the selected types and edges plus the presentation hints
//! (clusters, captions, styles) a caller wants to attach. All collections deduplicate; list
//! views keep insertion order. Captions and styles are first-write-wins per owner id.

use crate::domain::descriptor::TypeDescriptor;
use crate::domain::edge::{EdgeKind, EdgeKinds};
use crate::domain::id::{ClusterId, EdgeId, NodeId};
use crate::domain::presentation::{Caption, EdgeStyle, NodeStyle};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Debug, Clone, Default)]
pub struct AnalysisDocument {
    nodes: Vec<TypeDescriptor>,
    node_index: HashMap<NodeId, usize>,
    edges: Vec<(NodeId, NodeId)>,
    edge_index: HashSet<(NodeId, NodeId)>,
    clusters: BTreeMap<ClusterId, Vec<NodeId>>,
    captions: Vec<Caption>,
    caption_owners: HashSet<String>,
    node_styles: Vec<NodeStyle>,
    node_style_owners: HashSet<String>,
    edge_styles: Vec<EdgeStyle>,
    edge_style_owners: HashSet<String>,
    edge_kinds: EdgeKinds,
}

/// Persisted shape of a document. Collections are order-insensitive for consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentExport {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<(NodeId, NodeId)>,
    pub clusters: BTreeMap<ClusterId, Vec<NodeId>>,
    pub captions: Vec<Caption>,
    pub node_styles: Vec<NodeStyle>,
    pub edge_styles: Vec<EdgeStyle>,
    pub edge_kinds: EdgeKinds,
}

impl AnalysisDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if a type with the same id is already present.
    pub fn add_node(&mut self, descriptor: TypeDescriptor) -> bool {
        if self.node_index.contains_key(descriptor.id()) {
            return false;
        }
        self.node_index
            .insert(descriptor.id().clone(), self.nodes.len());
        self.nodes.push(descriptor);
        true
    }

    /// Returns false if the pair is already present.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> bool {
        let pair = (source, target);
        if !self.edge_index.insert(pair.clone()) {
            return false;
        }
        self.edges.push(pair);
        true
    }

    pub fn add_to_cluster(&mut self, cluster: impl Into<ClusterId>, node: impl Into<NodeId>) {
        let node = node.into();
        let members = self.clusters.entry(cluster.into()).or_default();
        if !members.contains(&node) {
            members.push(node);
        }
    }

    pub fn add_caption(&mut self, caption: Caption) -> bool {
        if !self.caption_owners.insert(caption.owner_id.clone()) {
            return false;
        }
        self.captions.push(caption);
        true
    }

    pub fn add_node_style(&mut self, style: NodeStyle) -> bool {
        if !self.node_style_owners.insert(style.owner_id.clone()) {
            return false;
        }
        self.node_styles.push(style);
        true
    }

    pub fn add_edge_style(&mut self, style: EdgeStyle) -> bool {
        if !self.edge_style_owners.insert(style.owner_id.clone()) {
            return false;
        }
        self.edge_styles.push(style);
        true
    }

    pub fn set_edge_kind(&mut self, edge: EdgeId, kind: EdgeKind) -> bool {
        self.edge_kinds.record(edge, kind)
    }

    pub fn nodes(&self) -> &[TypeDescriptor] {
        &self.nodes
    }

    pub fn node(&self, id: &str) -> Option<&TypeDescriptor> {
        self.node_index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    pub fn clusters(&self) -> &BTreeMap<ClusterId, Vec<NodeId>> {
        &self.clusters
    }

    pub fn captions(&self) -> &[Caption] {
        &self.captions
    }

    pub fn node_styles(&self) -> &[NodeStyle] {
        &self.node_styles
    }

    pub fn edge_styles(&self) -> &[EdgeStyle] {
        &self.edge_styles
    }

    pub fn edge_kinds(&self) -> &EdgeKinds {
        &self.edge_kinds
    }

    pub fn export(&self) -> DocumentExport {
        DocumentExport {
            nodes: self.nodes.iter().map(|d| d.id().clone()).collect(),
            edges: self.edges.clone(),
            clusters: self.clusters.clone(),
            captions: self.captions.clone(),
            node_styles: self.node_styles.clone(),
            edge_styles: self.edge_styles.clone(),
            edge_kinds: self.edge_kinds.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desc(id: &str) -> TypeDescriptor {
        TypeDescriptor::new(id, id, "Acme")
    }

    #[test]
    fn test_nodes_and_edges_deduplicate() {
        let mut doc = AnalysisDocument::new();
        assert!(doc.add_node(desc("A")));
        assert!(!doc.add_node(desc("A")));
        assert!(doc.add_edge("A".into(), "B".into()));
        assert!(!doc.add_edge("A".into(), "B".into()));
        assert!(doc.add_edge("B".into(), "A".into()));

        assert_eq!(doc.nodes().len(), 1);
        assert_eq!(doc.edges().len(), 2);
    }

    #[test]
    fn test_caption_first_write_wins() {
        let mut doc = AnalysisDocument::new();
        assert!(doc.add_caption(Caption::new("A", "First")));
        assert!(!doc.add_caption(Caption::new("A", "Second")));
        assert_eq!(doc.captions().len(), 1);
        assert_eq!(doc.captions()[0].display_text, "First");
    }

    #[test]
    fn test_styles_first_write_wins() {
        let mut doc = AnalysisDocument::new();
        assert!(doc.add_node_style(NodeStyle::new("A", "Red")));
        assert!(!doc.add_node_style(NodeStyle::new("A", "Blue")));
        assert!(doc.add_edge_style(EdgeStyle::new("A->B", "Blue")));
        assert!(!doc.add_edge_style(EdgeStyle::new("A->B", "Red")));
        assert_eq!(doc.node_styles()[0].fill_color, "Red");
        assert_eq!(doc.edge_styles()[0].color, "Blue");
    }

    #[test]
    fn test_clusters_collect_unique_members() {
        let mut doc = AnalysisDocument::new();
        doc.add_to_cluster("Acme", "A");
        doc.add_to_cluster("Acme", "B");
        doc.add_to_cluster("Acme", "A");
        assert_eq!(doc.clusters()["Acme"].len(), 2);
    }

    #[test]
    fn test_export_shape() {
        let mut doc = AnalysisDocument::new();
        doc.add_node(desc("A"));
        doc.add_node(desc("B"));
        doc.add_edge("A".into(), "B".into());
        doc.set_edge_kind(EdgeId::from("A->B"), EdgeKind::DerivesFrom);
        doc.add_caption(Caption::new("A", "Alpha"));

        let json = serde_json::to_value(doc.export()).unwrap();
        assert_eq!(json["nodes"], serde_json::json!(["A", "B"]));
        assert_eq!(json["edges"], serde_json::json!([["A", "B"]]));
        assert_eq!(json["edge_kinds"]["A->B"], "DerivesFrom");
        assert_eq!(json["captions"][0]["display_text"], "Alpha");
    }
}

//! Graph presentation - a graph plus everything needed to show it.
//!
//! Captions and styles are property sets keyed by owner id (node, edge or cluster id) with a
//! default for owners that never got one. Visibility is driven by the node and edge mask
//! modules and queried through [`Picking`].

use crate::domain::document::AnalysisDocument;
use crate::domain::error::{GraphError, Result};
use crate::domain::graph::{Edge, Graph, Node};
use crate::domain::id::{EdgeId, NodeId};
use crate::domain::mask::MaskModule;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;

/// A value bound to one owner id, with a fallback for unset owners.
pub trait Property: Clone {
    fn owner_id(&self) -> &str;
    fn default_for(owner_id: &str) -> Self;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caption {
    pub owner_id: String,
    pub display_text: String,
}

impl Caption {
    pub fn new(owner_id: impl Into<String>, display_text: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            display_text: display_text.into(),
        }
    }

    /// True while the caption still shows the bare owner id.
    pub fn is_default(&self) -> bool {
        self.display_text == self.owner_id
    }
}

impl Property for Caption {
    fn owner_id(&self) -> &str {
        &self.owner_id
    }

    fn default_for(owner_id: &str) -> Self {
        Self::new(owner_id, owner_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStyle {
    pub owner_id: String,
    pub fill_color: String,
}

impl NodeStyle {
    pub const DEFAULT_FILL_COLOR: &'static str = "LightGray";

    pub fn new(owner_id: impl Into<String>, fill_color: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            fill_color: fill_color.into(),
        }
    }
}

impl Property for NodeStyle {
    fn owner_id(&self) -> &str {
        &self.owner_id
    }

    fn default_for(owner_id: &str) -> Self {
        Self::new(owner_id, Self::DEFAULT_FILL_COLOR)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeStyle {
    pub owner_id: String,
    pub color: String,
}

impl EdgeStyle {
    pub const DEFAULT_COLOR: &'static str = "Black";

    pub fn new(owner_id: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            color: color.into(),
        }
    }
}

impl Property for EdgeStyle {
    fn owner_id(&self) -> &str {
        &self.owner_id
    }

    fn default_for(owner_id: &str) -> Self {
        Self::new(owner_id, Self::DEFAULT_COLOR)
    }
}

#[derive(Debug, Clone)]
pub struct PropertySet<T> {
    values: HashMap<String, T>,
}

impl<T> Default for PropertySet<T> {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
        }
    }
}

impl<T: Property> PropertySet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `owner_id`, or the default when none was set.
    pub fn get(&self, owner_id: &str) -> Cow<'_, T> {
        match self.values.get(owner_id) {
            Some(value) => Cow::Borrowed(value),
            None => Cow::Owned(T::default_for(owner_id)),
        }
    }

    /// Replaces any previous value of the same owner.
    pub fn set(&mut self, value: T) {
        self.values.insert(value.owner_id().to_string(), value);
    }

    pub fn contains(&self, owner_id: &str) -> bool {
        self.values.contains_key(owner_id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct GraphPresentation {
    graph: Graph,
    captions: PropertySet<Caption>,
    node_styles: PropertySet<NodeStyle>,
    edge_styles: PropertySet<EdgeStyle>,
    node_masks: MaskModule<NodeId>,
    edge_masks: MaskModule<EdgeId>,
}

impl GraphPresentation {
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            ..Self::default()
        }
    }

    /// Builds a presentation showing exactly the content of `document`.
    ///
    /// Types without an explicit caption are captioned with their display name. Edges and
    /// clusters must only reference types of the document.
    pub fn from_document(document: &AnalysisDocument) -> Result<Self> {
        let mut graph = Graph::new();
        for node in document.nodes() {
            graph.try_add_node(node.id().clone());
        }

        for (source, target) in document.edges() {
            for endpoint in [source, target] {
                if !graph.contains_node(endpoint.as_str()) {
                    return Err(GraphError::UnknownNode(endpoint.to_string()));
                }
            }
            graph.try_add_edge(source.clone(), target.clone());
        }

        for (cluster, members) in document.clusters() {
            graph.try_add_cluster(cluster.clone(), members.iter().cloned())?;
        }

        let mut presentation = Self::new(graph);
        for caption in document.captions() {
            presentation.captions.set(caption.clone());
        }
        for node in document.nodes() {
            if !presentation.captions.contains(node.id().as_str()) {
                presentation
                    .captions
                    .set(Caption::new(node.id().as_str(), node.name()));
            }
        }
        for style in document.node_styles() {
            presentation.node_styles.set(style.clone());
        }
        for style in document.edge_styles() {
            presentation.edge_styles.set(style.clone());
        }

        Ok(presentation)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn captions(&self) -> &PropertySet<Caption> {
        &self.captions
    }

    pub fn captions_mut(&mut self) -> &mut PropertySet<Caption> {
        &mut self.captions
    }

    pub fn node_styles(&self) -> &PropertySet<NodeStyle> {
        &self.node_styles
    }

    pub fn node_styles_mut(&mut self) -> &mut PropertySet<NodeStyle> {
        &mut self.node_styles
    }

    pub fn edge_styles(&self) -> &PropertySet<EdgeStyle> {
        &self.edge_styles
    }

    pub fn edge_styles_mut(&mut self) -> &mut PropertySet<EdgeStyle> {
        &mut self.edge_styles
    }

    pub fn node_masks(&self) -> &MaskModule<NodeId> {
        &self.node_masks
    }

    pub fn node_masks_mut(&mut self) -> &mut MaskModule<NodeId> {
        &mut self.node_masks
    }

    pub fn edge_masks(&self) -> &MaskModule<EdgeId> {
        &self.edge_masks
    }

    pub fn edge_masks_mut(&mut self) -> &mut MaskModule<EdgeId> {
        &mut self.edge_masks
    }

    pub fn picking(&self) -> Picking<'_> {
        Picking {
            node_masks: &self.node_masks,
            edge_masks: &self.edge_masks,
        }
    }
}

/// Answers whether a node or edge is currently visible.
#[derive(Clone, Copy)]
pub struct Picking<'a> {
    node_masks: &'a MaskModule<NodeId>,
    edge_masks: &'a MaskModule<EdgeId>,
}

impl Picking<'_> {
    pub fn pick_node(&self, node: &Node) -> bool {
        self.node_masks.is_visible(&node.id)
    }

    /// Edge masks only; endpoint visibility is kept consistent by whoever pushes masks.
    pub fn pick_edge(&self, edge: &Edge) -> bool {
        self.edge_masks.is_visible(&edge.id)
    }
}

use crate::domain::error::{GraphError, Result};
use crate::domain::graph::Node;
use crate::domain::id::NodeId;
use crate::domain::mask::Mask;
use crate::domain::presentation::GraphPresentation;
use serde::{Deserialize, Serialize};

/// Which nodes count as dangling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DanglingMode {
    /// No visible edge at all
    #[default]
    All,
    /// No visible incoming edge
    Incomings,
    /// No visible outgoing edge
    Outgoings,
}

impl DanglingMode {
    fn mask_label(self) -> &'static str {
        match self {
            DanglingMode::All => "Nodes without edges",
            DanglingMode::Incomings => "Nodes without incomings",
            DanglingMode::Outgoings => "Nodes without outgoings",
        }
    }
}

/// Hides nodes that have no currently visible edges by pushing a hide mask.
pub struct RemoveNodesWithoutEdges<'a> {
    presentation: &'a mut GraphPresentation,
    mode: DanglingMode,
}

impl<'a> RemoveNodesWithoutEdges<'a> {
    pub fn new(presentation: &'a mut GraphPresentation, mode: DanglingMode) -> Self {
        Self { presentation, mode }
    }

    /// Considers every node of the graph. Returns the number of hidden nodes.
    pub fn execute(&mut self) -> Result<usize> {
        let candidates: Vec<NodeId> = self
            .presentation
            .graph()
            .nodes()
            .map(|n| n.id.clone())
            .collect();
        self.hide_dangling(&candidates)
    }

    /// Considers only the members of one cluster.
    pub fn execute_cluster(&mut self, cluster_id: &str) -> Result<usize> {
        let candidates = self
            .presentation
            .graph()
            .find_cluster(cluster_id)
            .map(|c| c.nodes.clone())
            .ok_or_else(|| GraphError::UnknownCluster(cluster_id.to_string()))?;
        self.hide_dangling(&candidates)
    }

    fn hide_dangling(&mut self, candidates: &[NodeId]) -> Result<usize> {
        let mut to_hide = Vec::new();
        for id in candidates {
            let node = self
                .presentation
                .graph()
                .find_node(id.as_str())
                .ok_or_else(|| GraphError::UnknownNode(id.to_string()))?;
            if self.is_dangling(node)? {
                to_hide.push(id.clone());
            }
        }

        let hidden = to_hide.len();
        tracing::debug!("{}: hiding {} nodes", self.mode.mask_label(), hidden);
        self.presentation
            .node_masks_mut()
            .push(Mask::hide(self.mode.mask_label(), to_hide));
        Ok(hidden)
    }

    fn is_dangling(&self, node: &Node) -> Result<bool> {
        let graph = self.presentation.graph();
        let picking = self.presentation.picking();

        let no_incomings = !graph
            .incoming(node.id.as_str())?
            .into_iter()
            .any(|e| picking.pick_edge(e));
        let no_outgoings = !graph
            .outgoing(node.id.as_str())?
            .into_iter()
            .any(|e| picking.pick_edge(e));

        Ok(match self.mode {
            DanglingMode::All => no_incomings && no_outgoings,
            DanglingMode::Incomings => no_incomings,
            DanglingMode::Outgoings => no_outgoings,
        })
    }
}

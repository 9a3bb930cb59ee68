use crate::domain::descriptor::TypeDescriptor;
use crate::domain::document::AnalysisDocument;
use crate::domain::edge::EdgeKinds;
use crate::domain::error::{GraphError, Result};
use crate::domain::graph::Graph;
use crate::domain::id::{EdgeId, NodeId};
use std::collections::{HashMap, HashSet};

/// Collects the bounded neighborhood of one type into an [`AnalysisDocument`].
///
/// Traversal is breadth-first along incoming edges only: starting at the root it gathers
/// every type deriving from or implementing it, transitively. Outgoing edges are not
/// followed; doing so would need a depth limit to stay bounded.
///
/// The root is the most derived-from type of the result: for `A -> B -> C` the neighborhood
/// of `C` holds all three types while the neighborhood of `A` is `A` alone.
pub struct NeighborhoodWriter<'a> {
    graph: &'a Graph,
    descriptors: &'a HashMap<NodeId, TypeDescriptor>,
    edge_kinds: &'a EdgeKinds,
}

impl<'a> NeighborhoodWriter<'a> {
    pub fn new(
        graph: &'a Graph,
        descriptors: &'a HashMap<NodeId, TypeDescriptor>,
        edge_kinds: &'a EdgeKinds,
    ) -> Self {
        Self {
            graph,
            descriptors,
            edge_kinds,
        }
    }

    pub fn write(&self, root_id: &str) -> Result<AnalysisDocument> {
        let root = self.descriptor(root_id)?;
        if !self.graph.contains_node(root_id) {
            return Err(GraphError::UnknownNode(root_id.to_string()));
        }

        let mut document = AnalysisDocument::new();
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut frontier = vec![root.id().clone()];

        while !frontier.is_empty() {
            let mut next = Vec::new();
            let mut queued = HashSet::new();

            for member in frontier {
                if !visited.insert(member.clone()) {
                    continue;
                }

                document.add_node(self.descriptor(member.as_str())?.clone());

                for edge in self.graph.incoming(member.as_str())? {
                    let source = self.descriptor(edge.source.as_str())?;
                    document.add_node(source.clone());
                    document.add_edge(source.id().clone(), member.clone());

                    if queued.insert(source.id().clone()) {
                        next.push(source.id().clone());
                    }
                }
            }

            next.retain(|id| !visited.contains(id));
            frontier = next;
        }

        let edge_ids: Vec<EdgeId> = document
            .edges()
            .iter()
            .map(|(source, target)| EdgeId::between(source, target))
            .collect();
        for edge_id in edge_ids {
            let kind = self
                .edge_kinds
                .get(edge_id.as_str())
                .ok_or_else(|| GraphError::MissingEdgeKind(edge_id.to_string()))?;
            document.set_edge_kind(edge_id, kind);
        }

        tracing::debug!(
            "neighborhood of '{}': {} types, {} edges",
            root_id,
            document.nodes().len(),
            document.edges().len()
        );
        Ok(document)
    }

    fn descriptor(&self, id: &str) -> Result<&'a TypeDescriptor> {
        self.descriptors
            .get(id)
            .ok_or_else(|| GraphError::UnknownType(id.to_string()))
    }
}

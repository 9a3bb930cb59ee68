//! DOT writer - renders the visible part of a presentation for Graphviz.
//!
//! Output layout:
//!
//! ```text
//! digraph {
//!   ratio="compress"
//!   rankdir=BT
//!   ranksep="2.0 equally"
//!   subgraph "cluster_Acme" {
//!     label = "Acme"
//!     "Acme.Shape" [label="Shape", color=LightGray]
//!   }
//!   "Acme.Circle" [label="Circle", color=LightGray]
//!   "Acme.Circle" -> "Acme.Shape" [label=".", color=Black]
//! }
//! ```
//!
//! Labels are always passed, also for edges: dot sizes bounding boxes from them and its
//! parser chokes on empty edge labels, hence the `.` placeholder.

use crate::domain::error::{GraphError, Result};
use crate::domain::graph::{Edge, Node};
use crate::domain::presentation::GraphPresentation;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const INDENT: &str = "  ";
const CLUSTER_PREFIX: &str = "cluster_";

/// Escape special characters for DOT ids and labels.
pub fn escape(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[derive(Debug, Clone, Default)]
pub struct DotWriter {
    fast_rendering_node_count_limit: Option<usize>,
    ignore_style: bool,
}

impl DotWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Above this many visible nodes, emit hints that trade layout quality for speed.
    pub fn with_fast_rendering_limit(mut self, limit: Option<usize>) -> Self {
        self.fast_rendering_node_count_limit = limit;
        self
    }

    /// Leave out fill and line colors.
    pub fn with_ignore_style(mut self, ignore_style: bool) -> Self {
        self.ignore_style = ignore_style;
        self
    }

    /// Renders into a string. Returns the text and the number of nodes written.
    pub fn render(&self, presentation: &GraphPresentation) -> Result<(String, usize)> {
        let mut buffer = Vec::new();
        let count = self.write(presentation, &mut buffer)?;
        Ok((String::from_utf8_lossy(&buffer).into_owned(), count))
    }

    /// Writes to a file, replacing it. The file is closed on every path out of this call.
    pub fn write_to_path(&self, presentation: &GraphPresentation, path: &Path) -> Result<usize> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        let count = self.write(presentation, &mut writer)?;
        writer.flush()?;
        Ok(count)
    }

    /// Writes the visible nodes, clusters and edges. Returns the number of nodes written.
    pub fn write<W: Write>(&self, presentation: &GraphPresentation, mut out: W) -> Result<usize> {
        let graph = presentation.graph();
        let picking = presentation.picking();

        writeln!(out, "digraph {{")?;
        writeln!(out, "{INDENT}ratio=\"compress\"")?;
        writeln!(out, "{INDENT}rankdir=BT")?;
        writeln!(out, "{INDENT}ranksep=\"2.0 equally\"")?;

        let visible_nodes: Vec<&Node> = graph.nodes().filter(|n| picking.pick_node(n)).collect();
        let visible_ids: HashSet<&str> = visible_nodes.iter().map(|n| n.id.as_str()).collect();

        if let Some(limit) = self.fast_rendering_node_count_limit
            && visible_nodes.len() > limit
        {
            // https://graphviz.org/docs/attrs/nslimit/
            writeln!(out, "{INDENT}nslimit=0.2")?;
            writeln!(out, "{INDENT}nslimit1=0.2")?;
            writeln!(out, "{INDENT}splines=line")?;
            writeln!(out, "{INDENT}mclimit=0.5")?;
        }

        let mut written: HashSet<&str> = HashSet::new();
        for cluster in graph.clusters() {
            let members: Vec<&Node> = cluster
                .nodes
                .iter()
                .filter(|id| visible_ids.contains(id.as_str()))
                .map(|id| {
                    graph
                        .find_node(id.as_str())
                        .ok_or_else(|| GraphError::UnknownNode(id.to_string()))
                })
                .collect::<Result<_>>()?;

            if members.is_empty() {
                continue;
            }

            let cluster_id = if cluster.id.as_str().starts_with(CLUSTER_PREFIX) {
                cluster.id.to_string()
            } else {
                format!("{CLUSTER_PREFIX}{}", cluster.id)
            };
            writeln!(out, "{INDENT}subgraph \"{}\" {{", escape(&cluster_id))?;

            let caption = presentation.captions().get(cluster.id.as_str());
            writeln!(out, "{INDENT}{INDENT}label = \"{}\"", escape(&caption.display_text))?;

            let nested = format!("{INDENT}{INDENT}");
            for node in members {
                if written.insert(node.id.as_str()) {
                    self.write_node(presentation, node, &nested, &mut out)?;
                }
            }

            writeln!(out, "{INDENT}}}")?;
        }

        for node in &visible_nodes {
            if written.insert(node.id.as_str()) {
                self.write_node(presentation, node, INDENT, &mut out)?;
            }
        }

        for edge in graph.edges().filter(|e| picking.pick_edge(e)) {
            self.write_edge(presentation, edge, INDENT, &mut out)?;
        }

        writeln!(out, "}}")?;
        Ok(visible_nodes.len())
    }

    fn write_node<W: Write>(
        &self,
        presentation: &GraphPresentation,
        node: &Node,
        indent: &str,
        out: &mut W,
    ) -> Result<()> {
        let caption = presentation.captions().get(node.id.as_str());
        write!(
            out,
            "{indent}\"{}\" [label=\"{}\"",
            escape(node.id.as_str()),
            escape(&caption.display_text)
        )?;

        if !self.ignore_style {
            let style = presentation.node_styles().get(node.id.as_str());
            write!(out, ", color={}", style.fill_color)?;
        }

        writeln!(out, "]")?;
        Ok(())
    }

    fn write_edge<W: Write>(
        &self,
        presentation: &GraphPresentation,
        edge: &Edge,
        indent: &str,
        out: &mut W,
    ) -> Result<()> {
        let caption = presentation.captions().get(edge.id.as_str());
        let label = if caption.is_default() {
            ".".to_string()
        } else {
            escape(&caption.display_text)
        };

        write!(
            out,
            "{indent}\"{}\" -> \"{}\" [label=\"{}\"",
            escape(edge.source.as_str()),
            escape(edge.target.as_str()),
            label
        )?;

        if !self.ignore_style {
            let style = presentation.edge_styles().get(edge.id.as_str());
            write!(out, ", color={}", style.color)?;
        }

        writeln!(out, "]")?;
        Ok(())
    }
}

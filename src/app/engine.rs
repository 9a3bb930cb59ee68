use crate::adapters::catalog::FactCatalog;
use crate::adapters::dot::DotWriter;
use crate::app::dto::*;
use crate::domain::algorithms::RemoveNodesWithoutEdges;
use crate::domain::analyzer::{AnalyzerOptions, InheritanceAnalyzer};
use crate::domain::document::AnalysisDocument;
use crate::domain::edge::EdgeKind;
use crate::domain::error::GraphError;
use crate::domain::id::EdgeId;
use crate::domain::presentation::{Caption, EdgeStyle, GraphPresentation, NodeStyle};
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::path::Path;

const DERIVES_FROM_COLOR: &str = "Black";
const IMPLEMENTS_COLOR: &str = "Blue";
const INTERFACE_FILL_COLOR: &str = "LightBlue";

/// Holds the analyzed relationship graph of one fact catalog and answers queries on it.
pub struct InspectionEngine {
    analyzer: InheritanceAnalyzer,
    modules: Vec<ModuleSummary>,
}

impl InspectionEngine {
    /// Analyzes every module of `catalog` into one graph.
    pub fn from_catalog(catalog: &FactCatalog, options: AnalyzerOptions) -> Self {
        let mut analyzer = InheritanceAnalyzer::new(options);
        let mut modules = Vec::new();

        for source in catalog.module_sources() {
            let stats = analyzer.process(&source);
            tracing::info!(
                "module '{}': {} types processed, {} skipped, {} malformed",
                source.name(),
                stats.processed,
                stats.skipped,
                stats.malformed
            );
            modules.push(ModuleSummary {
                name: source.name().to_string(),
                processed: stats.processed,
                skipped: stats.skipped,
                malformed: stats.malformed,
            });
        }

        Self { analyzer, modules }
    }

    pub fn load_from_json(json_path: &Path, options: AnalyzerOptions) -> Result<Self> {
        let catalog = FactCatalog::load(json_path)?;
        Ok(Self::from_catalog(&catalog, options))
    }

    pub fn analyzer(&self) -> &InheritanceAnalyzer {
        &self.analyzer
    }

    pub fn summary(&self) -> SummaryResponse {
        let graph = self.analyzer.graph();
        let kinds = self.analyzer.edge_kinds();
        SummaryResponse {
            modules: self.modules.clone(),
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            derives_from_count: kinds.count_of(EdgeKind::DerivesFrom),
            implements_count: kinds.count_of(EdgeKind::Implements),
        }
    }

    /// Case-insensitive substring search over type ids.
    pub fn search(&self, pattern: &str, limit: Option<usize>) -> Result<SearchResponse> {
        let graph = self.analyzer.graph();
        let pattern_lower = pattern.to_lowercase();

        let mut items = Vec::new();
        for node in graph.nodes() {
            if !node.id.as_str().to_lowercase().contains(&pattern_lower) {
                continue;
            }
            let desc = self
                .analyzer
                .descriptor(node.id.as_str())
                .ok_or_else(|| GraphError::UnknownType(node.id.to_string()))?;
            items.push(TypeItem {
                id: node.id.to_string(),
                name: desc.name().to_string(),
                namespace: desc.namespace().to_string(),
                incoming: graph.incoming(node.id.as_str())?.len(),
                outgoing: graph.outgoing(node.id.as_str())?.len(),
            });
        }

        items.sort_by(|a, b| a.id.cmp(&b.id));
        let total_matches = items.len();
        if let Some(limit) = limit {
            items.truncate(limit);
        }

        Ok(SearchResponse {
            items,
            total_matches,
        })
    }

    /// Neighborhood document of one type, decorated with captions, styles and clusters.
    pub fn document(&self, type_id: &str, cluster_by_namespace: bool) -> Result<AnalysisDocument> {
        let mut document = self
            .analyzer
            .write_neighborhood(type_id)
            .with_context(|| format!("Failed to collect neighborhood of '{}'", type_id))?;
        decorate(&mut document, cluster_by_namespace);
        Ok(document)
    }

    /// Document holding the whole relationship graph.
    pub fn full_document(&self, cluster_by_namespace: bool) -> Result<AnalysisDocument> {
        let graph = self.analyzer.graph();
        let mut document = AnalysisDocument::new();

        for node in graph.nodes() {
            let desc = self
                .analyzer
                .descriptor(node.id.as_str())
                .ok_or_else(|| GraphError::UnknownType(node.id.to_string()))?;
            document.add_node(desc.clone());
        }
        for edge in graph.edges() {
            let kind = self
                .analyzer
                .edge_kinds()
                .get(edge.id.as_str())
                .ok_or_else(|| GraphError::MissingEdgeKind(edge.id.to_string()))?;
            document.add_edge(edge.source.clone(), edge.target.clone());
            document.set_edge_kind(edge.id.clone(), kind);
        }

        decorate(&mut document, cluster_by_namespace);
        Ok(document)
    }

    /// Presentation for a render request, with the dangling-node filter already applied.
    pub fn presentation(&self, req: &RenderRequest) -> Result<GraphPresentation> {
        let document = match &req.type_id {
            Some(type_id) => self.document(type_id, req.cluster_by_namespace)?,
            None => self.full_document(req.cluster_by_namespace)?,
        };

        let mut presentation = GraphPresentation::from_document(&document)
            .context("Failed to build graph presentation")?;

        if let Some(mode) = req.drop_dangling.mode() {
            RemoveNodesWithoutEdges::new(&mut presentation, mode).execute()?;
        }

        Ok(presentation)
    }

    pub fn render(&self, req: &RenderRequest) -> Result<RenderResponse> {
        let presentation = self.presentation(req)?;
        let (dot, visible_node_count) = dot_writer(req)
            .render(&presentation)
            .context("Failed to render DOT")?;

        Ok(RenderResponse {
            dot,
            visible_node_count,
            node_count: presentation.graph().node_count(),
            edge_count: presentation.graph().edge_count(),
        })
    }

    /// Like [`render`](Self::render) but writes the DOT text to `path`.
    pub fn render_to_path(&self, req: &RenderRequest, path: &Path) -> Result<usize> {
        let presentation = self.presentation(req)?;
        let count = dot_writer(req)
            .write_to_path(&presentation, path)
            .with_context(|| format!("Failed to write DOT file: {}", path.display()))?;
        Ok(count)
    }
}

fn dot_writer(req: &RenderRequest) -> DotWriter {
    DotWriter::new()
        .with_fast_rendering_limit(req.fast_rendering_limit)
        .with_ignore_style(req.ignore_style)
}

/// Captions every type with its short name, colors edges by kind and marks interfaces.
/// Existing captions and styles win.
fn decorate(document: &mut AnalysisDocument, cluster_by_namespace: bool) {
    let mut interfaces = HashSet::new();
    let mut edge_styles = Vec::new();
    for (source, target) in document.edges() {
        let id = EdgeId::between(source, target);
        let color = match document.edge_kinds().get(id.as_str()) {
            Some(EdgeKind::Implements) => {
                interfaces.insert(target.clone());
                IMPLEMENTS_COLOR
            }
            Some(EdgeKind::DerivesFrom) | None => DERIVES_FROM_COLOR,
        };
        edge_styles.push(EdgeStyle::new(id.as_str(), color));
    }
    for style in edge_styles {
        document.add_edge_style(style);
    }

    let nodes = document.nodes().to_vec();
    for desc in &nodes {
        document.add_caption(Caption::new(desc.id().as_str(), desc.name()));
        if interfaces.contains(desc.id()) {
            document.add_node_style(NodeStyle::new(desc.id().as_str(), INTERFACE_FILL_COLOR));
        }
        if cluster_by_namespace && !desc.namespace().is_empty() {
            document.add_to_cluster(desc.namespace(), desc.id().clone());
        }
    }
}

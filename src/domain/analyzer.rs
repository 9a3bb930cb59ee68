//! Inheritance analyzer - derives the type relationship graph from type facts.
//!
//! The analyzer keeps one running graph that grows with every `process` call, so facts can
//! be fed module by module. Nodes and edges are only ever added; an edge that already exists
//! keeps its first classification.

use crate::domain::descriptor::TypeDescriptor;
use crate::domain::document::AnalysisDocument;
use crate::domain::edge::{EdgeKind, EdgeKinds};
use crate::domain::error::Result;
use crate::domain::graph::Graph;
use crate::domain::id::NodeId;
use crate::domain::neighborhood::NeighborhoodWriter;
use crate::domain::ports::{TypeFact, TypeFactSource};
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Analyzer configuration.
#[derive(Debug, Clone)]
pub struct AnalyzerOptions {
    /// Skip types living in the standard library namespace.
    pub ignore_std_types: bool,
    /// Standard library namespace; nested namespaces (`<std>.*`) are covered too.
    pub std_namespace: String,
    /// Universal roots every type derives from. Never turned into edges.
    pub root_types: Vec<String>,
    /// Additional namespaces to skip.
    pub exclude: Option<Regex>,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            ignore_std_types: false,
            std_namespace: "System".to_string(),
            root_types: vec![
                "System.Object".to_string(),
                "System.ValueType".to_string(),
                "System.Enum".to_string(),
            ],
            exclude: None,
        }
    }
}

impl AnalyzerOptions {
    pub fn ignoring_std_types() -> Self {
        Self {
            ignore_std_types: true,
            ..Self::default()
        }
    }
}

/// Counters of one `process` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessStats {
    pub processed: usize,
    pub skipped: usize,
    pub malformed: usize,
}

enum Outcome {
    Processed,
    Skipped,
}

/// Fully resolved facts of one type, gathered before the graph is touched.
struct ResolvedType {
    fact: TypeFact,
    base: Option<TypeFact>,
    interfaces: Vec<TypeFact>,
}

pub struct InheritanceAnalyzer {
    options: AnalyzerOptions,
    graph: Graph,
    descriptors: HashMap<NodeId, TypeDescriptor>,
    edge_kinds: EdgeKinds,
}

impl Default for InheritanceAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerOptions::default())
    }
}

impl InheritanceAnalyzer {
    pub fn new(options: AnalyzerOptions) -> Self {
        Self {
            options,
            graph: Graph::new(),
            descriptors: HashMap::new(),
            edge_kinds: EdgeKinds::new(),
        }
    }

    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    /// Adds every type declared by `source` to the running graph.
    ///
    /// Never fails: types that cannot be introspected are logged and treated as absent.
    pub fn process(&mut self, source: &dyn TypeFactSource) -> ProcessStats {
        let mut stats = ProcessStats::default();

        for id in source.type_ids() {
            match self.process_type(source, &id) {
                Ok(Outcome::Processed) => stats.processed += 1,
                Ok(Outcome::Skipped) => stats.skipped += 1,
                Err(e) => {
                    tracing::warn!("skipping type '{}': {}", id, e);
                    stats.malformed += 1;
                }
            }
        }

        tracing::debug!(
            "processed {} types ({} skipped, {} malformed); graph has {} nodes, {} edges",
            stats.processed,
            stats.skipped,
            stats.malformed,
            self.graph.node_count(),
            self.graph.edge_count()
        );
        stats
    }

    fn process_type(&mut self, source: &dyn TypeFactSource, id: &str) -> Result<Outcome> {
        let Some(resolved) = self.resolve(source, id)? else {
            return Ok(Outcome::Skipped);
        };

        let type_desc = TypeDescriptor::from_fact(&resolved.fact);
        self.graph.try_add_node(type_desc.id().clone());

        if let Some(base) = &resolved.base
            && !self.is_ignored(base)
        {
            let base_desc = TypeDescriptor::from_fact(base);
            if let Some(edge) = self.graph.try_add_edge(type_desc.id().clone(), base_desc.id().clone()) {
                self.edge_kinds.record(edge.id.clone(), EdgeKind::DerivesFrom);
            }
            self.descriptors.insert(base_desc.id().clone(), base_desc);
        }

        for iface in &resolved.interfaces {
            if self.is_ignored(iface) {
                continue;
            }

            let iface_desc = TypeDescriptor::from_fact(iface);
            match self.graph.try_add_edge(type_desc.id().clone(), iface_desc.id().clone()) {
                Some(edge) => {
                    self.edge_kinds.record(edge.id.clone(), EdgeKind::Implements);
                    self.descriptors.insert(iface_desc.id().clone(), iface_desc);
                }
                None => {
                    // edge already added - earlier pass or cyclic declaration
                    tracing::trace!("edge {} -> {} already present", type_desc.id(), iface_desc.id());
                }
            }
        }

        self.descriptors.insert(type_desc.id().clone(), type_desc);
        Ok(Outcome::Processed)
    }

    /// Returns `None` for types that are skipped by configuration.
    fn resolve(&self, source: &dyn TypeFactSource, id: &str) -> Result<Option<ResolvedType>> {
        let fact = source.resolve(id)?;

        if fact.namespace.is_none() {
            // compiler generated, nothing to show
            return Ok(None);
        }
        if self.is_ignored(&fact) {
            return Ok(None);
        }

        // roots are matched by id only and never introspected
        let base = fact
            .base_type
            .as_deref()
            .filter(|base_id| !self.is_root(base_id))
            .map(|base_id| source.resolve(base_id))
            .transpose()?;

        let inherited: HashSet<&str> = base
            .as_ref()
            .map(|b| b.interfaces.iter().map(String::as_str).collect())
            .unwrap_or_default();

        let mut seen = HashSet::new();
        let mut interfaces = Vec::new();
        for iface_id in &fact.interfaces {
            if inherited.contains(iface_id.as_str()) || !seen.insert(iface_id.as_str()) {
                continue;
            }
            interfaces.push(source.resolve(iface_id)?);
        }

        Ok(Some(ResolvedType {
            fact,
            base,
            interfaces,
        }))
    }

    fn is_ignored(&self, fact: &TypeFact) -> bool {
        let Some(namespace) = fact.namespace.as_deref() else {
            return false;
        };

        if self.options.ignore_std_types {
            let std = self.options.std_namespace.as_str();
            if namespace == std
                || namespace
                    .strip_prefix(std)
                    .is_some_and(|rest| rest.starts_with('.'))
            {
                return true;
            }
        }

        self.options
            .exclude
            .as_ref()
            .is_some_and(|re| re.is_match(namespace))
    }

    fn is_root(&self, id: &str) -> bool {
        self.options.root_types.iter().any(|root| root == id)
    }

    /// Writes the neighborhood of `root_id` into a fresh document.
    pub fn write_neighborhood(&self, root_id: &str) -> Result<AnalysisDocument> {
        NeighborhoodWriter::new(&self.graph, &self.descriptors, &self.edge_kinds).write(root_id)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn edge_kinds(&self) -> &EdgeKinds {
        &self.edge_kinds
    }

    pub fn descriptor(&self, id: &str) -> Option<&TypeDescriptor> {
        self.descriptors.get(id)
    }

    pub fn descriptors(&self) -> &HashMap<NodeId, TypeDescriptor> {
        &self.descriptors
    }
}

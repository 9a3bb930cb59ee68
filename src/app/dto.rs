use crate::domain::algorithms::DanglingMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DanglingFilter {
    #[default]
    None,
    All,
    Incomings,
    Outgoings,
}

impl DanglingFilter {
    pub fn mode(self) -> Option<DanglingMode> {
        match self {
            DanglingFilter::None => None,
            DanglingFilter::All => Some(DanglingMode::All),
            DanglingFilter::Incomings => Some(DanglingMode::Incomings),
            DanglingFilter::Outgoings => Some(DanglingMode::Outgoings),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleSummary {
    pub name: String,
    pub processed: usize,
    pub skipped: usize,
    pub malformed: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub modules: Vec<ModuleSummary>,
    pub node_count: usize,
    pub edge_count: usize,
    pub derives_from_count: usize,
    pub implements_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeItem {
    pub id: String,
    pub name: String,
    pub namespace: String,
    /// Types deriving from or implementing this one
    pub incoming: usize,
    /// Base type and interfaces
    pub outgoing: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub items: Vec<TypeItem>,
    pub total_matches: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderRequest {
    /// Root of the neighborhood; `None` renders the whole graph.
    pub type_id: Option<String>,
    #[serde(default)]
    pub cluster_by_namespace: bool,
    #[serde(default)]
    pub drop_dangling: DanglingFilter,
    #[serde(default)]
    pub ignore_style: bool,
    pub fast_rendering_limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResponse {
    pub dot: String,
    pub visible_node_count: usize,
    pub node_count: usize,
    pub edge_count: usize,
}

use thiserror::Error;

/// Errors raised by the graph domain.
///
/// `MalformedFact` and `UnknownType` are recovered by the analyzer (the type is skipped).
/// The lookup variants signal a broken invariant between a document, a presentation and the
/// graph backing it. `Io` comes from the serializer.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("type `{id}` cannot be introspected: {reason}")]
    MalformedFact { id: String, reason: String },

    #[error("unknown type `{0}`")]
    UnknownType(String),

    #[error("unknown node `{0}`")]
    UnknownNode(String),

    #[error("unknown cluster `{0}`")]
    UnknownCluster(String),

    #[error("no edge kind recorded for edge `{0}`")]
    MissingEdgeKind(String),

    #[error("failed to write graph output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;

//! Error types for the adjgraph library.

use thiserror::Error;

/// All errors that can occur in the adjgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Index-addressed access outside `[0, len)`.
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A vertex with this label already exists.
    #[error("Vertex {0:?} already exists")]
    DuplicateVertex(String),

    /// No vertex carries this label.
    #[error("Vertex {0:?} not found")]
    VertexNotFound(String),

    /// Origin and destination are the same vertex.
    #[error("Self-loop not allowed on vertex {0:?}")]
    SelfLoop(String),

    /// An edge for this ordered pair already exists.
    #[error("Edge {origin:?} -> {destination:?} already exists")]
    DuplicateEdge { origin: String, destination: String },

    /// No edge for this ordered pair.
    #[error("Edge {origin:?} -> {destination:?} not found")]
    EdgeNotFound { origin: String, destination: String },

    /// Traversal requested on a graph with no vertices.
    #[error("No vertices to traverse")]
    EmptyGraph,

    /// Configuration value rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A command script line could not be parsed.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl GraphError {
    /// True for rejections of a graph mutation (duplicate, self-loop, missing entity).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::DuplicateVertex(_)
                | Self::VertexNotFound(_)
                | Self::SelfLoop(_)
                | Self::DuplicateEdge { .. }
                | Self::EdgeNotFound { .. }
        )
    }
}

/// Convenience result type for adjgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;

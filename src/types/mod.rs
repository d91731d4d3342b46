//! All data types for the adjgraph library.

pub mod config;
pub mod edge;
pub mod error;
pub mod vertex;

pub use config::{GraphConfig, NeighborRule};
pub use edge::{Edge, EdgeKey};
pub use error::{GraphError, GraphResult};
pub use vertex::Vertex;

/// Weight given to edges inserted without an explicit one.
pub const DEFAULT_WEIGHT: i64 = 1;

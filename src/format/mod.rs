//! Rendering and (de)serialization of graphs for the CLI.

pub mod snapshot;
pub mod summary;

pub use snapshot::{EdgeRecord, GraphSnapshot};
pub use summary::{adjacent_labels, edge_line, Summary};

//! depdag — in-memory dependency graphs.
//!
//! Build a graph of identified nodes carrying opaque payloads, connect them
//! with directed edges, then find the roots, walk subgraphs breadth-first or
//! depth-first, and check the whole graph for cycles.

pub mod cli;
pub mod graph;
pub mod manifest;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Dag, DagBuilder, NodeRef};
pub use manifest::{EdgeSpec, Manifest, NodeSpec};
pub use types::{DagError, DagResult, Node, NodeIndex, WalkError, WalkStrategy};

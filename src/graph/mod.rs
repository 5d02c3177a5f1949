//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod cycle;
pub mod dag;
pub mod node_ref;
pub mod traversal;

pub use builder::DagBuilder;
pub use dag::Dag;
pub use node_ref::NodeRef;
pub use traversal::{walk_breadth_first, walk_depth_first};

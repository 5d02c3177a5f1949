//! All data types for the depdag library.

pub mod error;
pub mod node;
pub mod walk;

pub use error::{DagError, DagResult, WalkError};
pub use node::{Node, NodeIndex};
pub use walk::WalkStrategy;

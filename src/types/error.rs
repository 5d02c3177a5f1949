//! Error types for the depdag library.

use thiserror::Error;

/// All errors that can occur while building or inspecting a [`Dag`](crate::Dag).
#[derive(Error, Debug)]
pub enum DagError {
    /// A node with this ID is already registered.
    #[error("A node with id {0} already exists")]
    DuplicateNode(String),

    /// The ordered pair `(from, to)` was already recorded.
    #[error("Edge from {from} to {to} already exists")]
    DuplicateEdge { from: String, to: String },

    /// Node not found by ID.
    #[error("Node {0} not found")]
    NodeNotFound(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The graph manifest could not be parsed.
    #[error("Invalid manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    /// A command-line argument could not be interpreted.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience result type for depdag operations.
pub type DagResult<T> = Result<T, DagError>;

/// Outcome of a walk started by identifier through [`Dag::walk_from`](crate::Dag::walk_from).
///
/// Keeps the graph's own failure apart from whatever the visitor returned.
#[derive(Error, Debug)]
pub enum WalkError<E> {
    /// The walk could not start.
    #[error(transparent)]
    Graph(#[from] DagError),

    /// The visitor aborted the walk.
    #[error("Walk aborted by visitor: {0}")]
    Callback(E),
}

impl<E> WalkError<E> {
    /// The visitor's error, if that is what stopped the walk.
    pub fn into_callback(self) -> Option<E> {
        match self {
            WalkError::Callback(e) => Some(e),
            WalkError::Graph(_) => None,
        }
    }
}

//! The node record stored in a graph's arena.

use std::fmt;

use serde::Serialize;

/// Stable position of a node inside its graph.
///
/// Indices are handed out in creation order and never reused, since nodes are
/// never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeIndex(pub(crate) usize);

impl NodeIndex {
    /// The raw arena position.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A vertex: identifier, caller payload, outgoing edges and incoming edge count.
///
/// Children are indices into the owning graph, never owned nodes.
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub(crate) id: String,
    pub(crate) payload: T,
    pub(crate) children: Vec<NodeIndex>,
    pub(crate) in_degree: usize,
}

impl<T> Node<T> {
    pub(crate) fn new(id: String, payload: T) -> Self {
        Self {
            id,
            payload,
            children: Vec::new(),
            in_degree: 0,
        }
    }

    /// Unique identifier within the graph.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The caller-supplied value.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Outgoing edge targets, in insertion order.
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    /// Number of edges pointing at this node.
    pub fn in_degree(&self) -> usize {
        self.in_degree
    }

    /// True if the node has no outgoing edges.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// True if no edge points at the node.
    pub fn is_root(&self) -> bool {
        self.in_degree == 0
    }
}

//! Borrowed handle onto a node inside its graph.

use std::fmt;

use crate::types::{Node, NodeIndex, WalkStrategy};

use super::traversal::{walk_breadth_first, walk_depth_first};
use super::Dag;

/// A copyable view of one node that can follow its edges.
pub struct NodeRef<'a, T> {
    dag: &'a Dag<T>,
    index: NodeIndex,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(dag: &'a Dag<T>, index: NodeIndex) -> Self {
        Self { dag, index }
    }

    /// The graph this node belongs to.
    pub fn dag(&self) -> &'a Dag<T> {
        self.dag
    }

    /// The arena record behind this handle.
    pub fn node(&self) -> &'a Node<T> {
        self.dag.entry(self.index)
    }

    /// Position of the node in its graph.
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    /// Unique identifier within the graph.
    pub fn id(&self) -> &'a str {
        self.node().id()
    }

    /// The caller-supplied value.
    pub fn payload(&self) -> &'a T {
        self.node().payload()
    }

    /// Number of edges pointing at this node.
    pub fn in_degree(&self) -> usize {
        self.node().in_degree()
    }

    /// Direct successors, in edge insertion order.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a, T>> + 'a {
        let dag = self.dag;
        self.node()
            .children()
            .iter()
            .map(move |&index| NodeRef::new(dag, index))
    }

    /// True if the node has no outgoing edges.
    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    /// True if no edge points at the node.
    pub fn is_root(&self) -> bool {
        self.node().is_root()
    }

    /// Visit every node reachable from this one, this one included.
    ///
    /// Walks are not deduplicated: a node reached along several paths is
    /// visited once per path, and a reachable cycle keeps the walk going until
    /// `visit` returns an error. The first error stops the walk and is
    /// returned as is; nodes already visited stay visited.
    pub fn walk<E, F>(self, strategy: WalkStrategy, mut visit: F) -> Result<(), E>
    where
        F: FnMut(NodeRef<'a, T>) -> Result<(), E>,
    {
        match strategy {
            WalkStrategy::BreadthFirst => walk_breadth_first(self, &mut visit),
            WalkStrategy::DepthFirst => walk_depth_first(self, &mut visit),
        }
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.dag, other.dag) && self.index == other.index
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id())
            .field("index", &self.index)
            .field("in_degree", &self.in_degree())
            .field("children", &self.node().children().len())
            .finish()
    }
}

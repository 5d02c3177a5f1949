//! Core graph structure — an insertion-ordered node arena with edge bookkeeping.

use std::collections::{HashMap, HashSet};

use crate::types::{DagError, DagResult, Node, NodeIndex, WalkError, WalkStrategy};

use super::cycle;
use super::NodeRef;

/// A directed graph that owns its nodes and records edges as arena indices.
///
/// Nodes and edges are only ever added. Node creation order is kept, so
/// [`Dag::roots`] and [`Dag::nodes`] enumerate deterministically.
#[derive(Debug, Clone)]
pub struct Dag<T> {
    /// All nodes, in creation order. A node's position is its [`NodeIndex`].
    nodes: Vec<Node<T>>,
    /// Identifier lookup: id -> arena index.
    index: HashMap<String, NodeIndex>,
    /// Reverse edges: target -> set of sources. Only used to reject duplicates.
    reverse_edges: HashMap<NodeIndex, HashSet<NodeIndex>>,
    /// Number of recorded edges.
    edge_count: usize,
}

impl<T> Dag<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            reverse_edges: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Create an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            reverse_edges: HashMap::with_capacity(capacity),
            edge_count: 0,
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True if a node with this ID is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Look up a node by ID.
    pub fn get(&self, id: &str) -> Option<NodeRef<'_, T>> {
        self.index
            .get(id)
            .map(|&index| NodeRef::new(self, index))
    }

    /// Look up a node by arena index.
    pub fn node(&self, index: NodeIndex) -> Option<NodeRef<'_, T>> {
        if index.0 < self.nodes.len() {
            Some(NodeRef::new(self, index))
        } else {
            None
        }
    }

    /// All nodes, in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_, T>> + '_ {
        (0..self.nodes.len()).map(move |i| NodeRef::new(self, NodeIndex(i)))
    }

    /// Add a node and return a handle to it.
    ///
    /// Fails with [`DagError::DuplicateNode`] if the ID is taken, leaving the
    /// graph untouched.
    pub fn add_node(&mut self, id: impl Into<String>, payload: T) -> DagResult<NodeRef<'_, T>> {
        let id = id.into();
        if self.index.contains_key(&id) {
            log::debug!("Rejected duplicate node {}", id);
            return Err(DagError::DuplicateNode(id));
        }

        let index = NodeIndex(self.nodes.len());
        log::debug!("Adding node {} at {}", id, index);
        self.index.insert(id.clone(), index);
        self.nodes.push(Node::new(id, payload));

        Ok(NodeRef::new(self, index))
    }

    /// Add an edge `from -> to` between two existing nodes.
    ///
    /// Both endpoints are resolved before anything is touched, so a
    /// [`DagError::NodeNotFound`] or [`DagError::DuplicateEdge`] leaves the
    /// graph as it was.
    pub fn add_edge(&mut self, from: &str, to: &str) -> DagResult<()> {
        let source = self.resolve(from)?;
        let target = self.resolve(to)?;

        let sources = self.reverse_edges.entry(target).or_default();
        if !sources.insert(source) {
            log::debug!("Rejected duplicate edge {} -> {}", from, to);
            return Err(DagError::DuplicateEdge {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        self.nodes[source.0].children.push(target);
        self.nodes[target.0].in_degree += 1;
        self.edge_count += 1;
        log::debug!("Added edge {} -> {}", from, to);

        Ok(())
    }

    /// True if the ordered pair `from -> to` has been recorded.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(source), Some(target)) => self
                .reverse_edges
                .get(target)
                .is_some_and(|sources| sources.contains(source)),
            _ => false,
        }
    }

    /// All nodes without incoming edges, in creation order.
    pub fn roots(&self) -> Vec<NodeRef<'_, T>> {
        self.nodes().filter(|node| node.is_root()).collect()
    }

    /// All nodes without outgoing edges, in creation order.
    pub fn leaves(&self) -> Vec<NodeRef<'_, T>> {
        self.nodes().filter(|node| node.is_leaf()).collect()
    }

    /// Walk the subgraph reachable from the node with ID `start`.
    ///
    /// An unknown start is reported as [`WalkError::Graph`]; a visitor failure
    /// as [`WalkError::Callback`].
    pub fn walk_from<'a, E, F>(
        &'a self,
        start: &str,
        strategy: WalkStrategy,
        visit: F,
    ) -> Result<(), WalkError<E>>
    where
        F: FnMut(NodeRef<'a, T>) -> Result<(), E>,
    {
        let node = self
            .get(start)
            .ok_or_else(|| DagError::NodeNotFound(start.to_string()))?;
        node.walk(strategy, visit).map_err(WalkError::Callback)
    }

    /// True if no directed cycle exists anywhere in the graph.
    ///
    /// Every root is searched first, then any node no root reaches, so a cycle
    /// with no entry point is still found. Shared descendants (diamonds) are
    /// not cycles.
    pub fn is_acyclic(&self) -> bool {
        let acyclic = cycle::find_cycle(self).is_none();
        log::debug!(
            "Cycle check over {} nodes: {}",
            self.nodes.len(),
            if acyclic { "acyclic" } else { "cyclic" }
        );
        acyclic
    }

    /// The first directed cycle found, as a closed path `[n0, n1, .., n0]`.
    pub fn find_cycle(&self) -> Option<Vec<NodeRef<'_, T>>> {
        cycle::find_cycle(self).map(|path| {
            path.into_iter()
                .map(|index| NodeRef::new(self, index))
                .collect()
        })
    }

    /// The arena record at `index`. Indices handed out by this graph are always valid.
    pub(crate) fn entry(&self, index: NodeIndex) -> &Node<T> {
        &self.nodes[index.0]
    }

    fn resolve(&self, id: &str) -> DagResult<NodeIndex> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| DagError::NodeNotFound(id.to_string()))
    }
}

impl<T> Default for Dag<T> {
    fn default() -> Self {
        Self::new()
    }
}

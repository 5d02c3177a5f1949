//! Fluent API for building Dag instances.

use crate::types::DagResult;

use super::Dag;

/// Fluent builder for constructing a [`Dag`].
///
/// Nodes and edges are recorded as given and applied in that order by
/// [`DagBuilder::build`], which reports the first failure.
pub struct DagBuilder<T> {
    nodes: Vec<(String, T)>,
    edges: Vec<(String, String)>,
}

impl<T> DagBuilder<T> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a node.
    pub fn node(&mut self, id: impl Into<String>, payload: T) -> &mut Self {
        self.nodes.push((id.into(), payload));
        self
    }

    /// Add an edge between two nodes.
    pub fn edge(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        self.edges.push((from.into(), to.into()));
        self
    }

    /// Build the final Dag.
    pub fn build(self) -> DagResult<Dag<T>> {
        let mut dag = Dag::with_capacity(self.nodes.len());
        for (id, payload) in self.nodes {
            dag.add_node(id, payload)?;
        }
        for (from, to) in &self.edges {
            dag.add_edge(from, to)?;
        }
        Ok(dag)
    }
}

impl<T> Default for DagBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

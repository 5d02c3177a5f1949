//! JSON description of a graph, loadable into a [`Dag`].
//!
//! ```json
//! {
//!   "nodes": [{ "id": "bin", "payload": { "licence": "mit" } }, { "id": "lib" }],
//!   "edges": [{ "from": "bin", "to": "lib" }]
//! }
//! ```

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::graph::Dag;
use crate::types::{DagError, DagResult};

/// A node entry. `payload` defaults to `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: String,
    #[serde(default)]
    pub payload: Value,
}

/// An edge entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
}

/// Nodes and edges, applied in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl Manifest {
    /// Read and parse a manifest file.
    pub fn from_path(path: &Path) -> DagResult<Self> {
        let data = std::fs::read_to_string(path)?;
        let manifest: Self = data.parse()?;
        log::info!(
            "Loaded manifest {} ({} nodes, {} edges)",
            path.display(),
            manifest.nodes.len(),
            manifest.edges.len()
        );
        Ok(manifest)
    }

    /// Build the graph. Fails on the first duplicate node, duplicate edge or
    /// edge naming an unknown node.
    pub fn into_dag(self) -> DagResult<Dag<Value>> {
        let mut dag = Dag::with_capacity(self.nodes.len());
        for node in self.nodes {
            dag.add_node(node.id, node.payload)?;
        }
        for edge in &self.edges {
            dag.add_edge(&edge.from, &edge.to)?;
        }
        Ok(dag)
    }
}

impl FromStr for Manifest {
    type Err = DagError;

    fn from_str(s: &str) -> DagResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

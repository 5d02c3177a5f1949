//! Traversal strategy selection.

use serde::Serialize;

/// The order in which a walk visits the nodes reachable from its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkStrategy {
    /// Level order, driven by a FIFO queue.
    BreadthFirst,
    /// Pre-order: a node's whole subtree before its next sibling.
    DepthFirst,
}

impl WalkStrategy {
    /// Return a human-readable name for this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth_first",
            Self::DepthFirst => "depth_first",
        }
    }

    /// Parse a strategy from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "breadth_first" | "breadth-first" | "breadthfirst" => Some(Self::BreadthFirst),
            "dfs" | "depth_first" | "depth-first" | "depthfirst" => Some(Self::DepthFirst),
            _ => None,
        }
    }
}

impl Default for WalkStrategy {
    fn default() -> Self {
        Self::DepthFirst
    }
}

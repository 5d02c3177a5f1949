//! CLI command implementations.

use std::path::Path;

use serde_json::Value;

use crate::graph::{Dag, NodeRef};
use crate::manifest::Manifest;
use crate::types::{DagError, DagResult, WalkStrategy};

/// Visits allowed per walk when the caller gives no `--limit`.
pub const DEFAULT_WALK_LIMIT: usize = 10_000;

/// Returned by the walk visitor once the visit budget is spent.
#[derive(Debug)]
struct LimitReached;

/// One walk's visitation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkReport {
    pub start: String,
    pub order: Vec<String>,
    pub truncated: bool,
}

fn load(path: &Path) -> DagResult<Dag<Value>> {
    Manifest::from_path(path)?.into_dag()
}

fn ids(nodes: &[NodeRef<'_, Value>]) -> Vec<String> {
    nodes.iter().map(|n| n.id().to_string()).collect()
}

fn print_json(value: &Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Display node and edge counts, roots, leaves and acyclicity.
pub fn cmd_info(path: &Path, json: bool) -> DagResult<()> {
    let dag = load(path)?;
    let roots = ids(&dag.roots());
    let leaves = ids(&dag.leaves());
    let acyclic = dag.is_acyclic();

    if json {
        print_json(&serde_json::json!({
            "file": path.display().to_string(),
            "nodes": dag.node_count(),
            "edges": dag.edge_count(),
            "roots": roots,
            "leaves": leaves,
            "acyclic": acyclic,
        }));
    } else {
        println!("File: {}", path.display());
        println!("Nodes: {}", dag.node_count());
        println!("Edges: {}", dag.edge_count());
        println!("Roots: {}", roots.join(", "));
        println!("Leaves: {}", leaves.join(", "));
        println!("Acyclic: {}", if acyclic { "yes" } else { "no" });
    }
    Ok(())
}

/// List the nodes without incoming edges.
pub fn cmd_roots(path: &Path, json: bool) -> DagResult<()> {
    let dag = load(path)?;
    let roots = ids(&dag.roots());

    if json {
        print_json(&serde_json::json!({ "roots": roots }));
    } else {
        println!("Roots found: {}", roots.len());
        for root in &roots {
            println!("  {}", root);
        }
    }
    Ok(())
}

/// Walk the graph with a visit budget of `limit` nodes per walk.
///
/// Starts at `from`, or at every root in creation order when `from` is `None`.
pub fn walk_reports(
    dag: &Dag<Value>,
    from: Option<&str>,
    strategy: WalkStrategy,
    limit: usize,
) -> DagResult<Vec<WalkReport>> {
    let starts = match from {
        Some(id) => vec![dag
            .get(id)
            .ok_or_else(|| DagError::NodeNotFound(id.to_string()))?],
        None => dag.roots(),
    };

    let reports = starts
        .into_iter()
        .map(|start| {
            let mut order: Vec<String> = Vec::new();
            let outcome = start.walk(strategy, |node| {
                if order.len() >= limit {
                    return Err(LimitReached);
                }
                order.push(node.id().to_string());
                Ok(())
            });
            if outcome.is_err() {
                log::warn!(
                    "Walk from {} stopped after {} visits",
                    start.id(),
                    order.len()
                );
            }
            WalkReport {
                start: start.id().to_string(),
                order,
                truncated: outcome.is_err(),
            }
        })
        .collect();

    Ok(reports)
}

/// Print the visitation order of one or more walks.
pub fn cmd_walk(
    path: &Path,
    from: Option<&str>,
    strategy: WalkStrategy,
    limit: usize,
    json: bool,
) -> DagResult<()> {
    let dag = load(path)?;
    let reports = walk_reports(&dag, from, strategy, limit)?;

    if json {
        let walks: Vec<Value> = reports
            .iter()
            .map(|r| {
                serde_json::json!({
                    "start": r.start,
                    "order": r.order,
                    "truncated": r.truncated,
                })
            })
            .collect();
        print_json(&serde_json::json!({
            "strategy": strategy.name(),
            "walks": walks,
        }));
    } else {
        println!("Walking {}", strategy.name().replace('_', " "));
        for report in &reports {
            println!();
            println!("Root: {}", report.start);
            for id in &report.order {
                println!("  Visiting node {}", id);
            }
            if report.truncated {
                println!("  ... stopped after {} visits", report.order.len());
            }
        }
    }
    Ok(())
}

/// Check for directed cycles. Returns `true` when the graph is acyclic.
pub fn cmd_check(path: &Path, json: bool) -> DagResult<bool> {
    let dag = load(path)?;
    let cycle: Option<Vec<String>> = dag.find_cycle().map(|c| ids(&c));

    if json {
        print_json(&serde_json::json!({
            "acyclic": cycle.is_none(),
            "cycle": cycle,
        }));
    } else {
        match &cycle {
            None => println!("Acyclic: {} nodes, {} edges", dag.node_count(), dag.edge_count()),
            Some(path) => println!("Cycle found: {}", path.join(" -> ")),
        }
    }
    Ok(cycle.is_none())
}

//! Cycle detection over the whole graph.
//!
//! Roots are searched first, in creation order, then every node no root
//! reached. A cycle is a node met again while it is still on the current
//! search path; meeting a node whose search already finished (a diamond) is
//! not one.

use std::slice;

use crate::types::NodeIndex;

use super::Dag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Find the first directed cycle, returned closed: `[n0, n1, .., n0]`.
pub(crate) fn find_cycle<T>(dag: &Dag<T>) -> Option<Vec<NodeIndex>> {
    let mut marks = vec![Mark::Unvisited; dag.node_count()];

    let roots = dag.roots().into_iter().map(|node| node.index());
    let rest = dag.nodes().map(|node| node.index());

    for seed in roots.chain(rest) {
        if marks[seed.0] != Mark::Unvisited {
            continue;
        }
        if let Some(cycle) = search(dag, seed, &mut marks) {
            log::debug!("Cycle of length {} reached from {}", cycle.len() - 1, seed);
            return Some(cycle);
        }
    }

    None
}

/// Depth-first search from `seed`; `path` and `stack` always have equal length.
fn search<T>(dag: &Dag<T>, seed: NodeIndex, marks: &mut [Mark]) -> Option<Vec<NodeIndex>> {
    let mut path: Vec<NodeIndex> = vec![seed];
    let mut stack: Vec<slice::Iter<'_, NodeIndex>> = vec![dag.entry(seed).children().iter()];
    marks[seed.0] = Mark::OnPath;

    while let Some(cursor) = stack.last_mut() {
        match cursor.next() {
            Some(&child) => match marks[child.0] {
                Mark::OnPath => {
                    let start = path.iter().position(|&n| n == child).unwrap_or(0);
                    let mut cycle = path[start..].to_vec();
                    cycle.push(child);
                    return Some(cycle);
                }
                Mark::Done => {}
                Mark::Unvisited => {
                    marks[child.0] = Mark::OnPath;
                    path.push(child);
                    stack.push(dag.entry(child).children().iter());
                }
            },
            None => {
                stack.pop();
                if let Some(finished) = path.pop() {
                    marks[finished.0] = Mark::Done;
                }
            }
        }
    }

    None
}

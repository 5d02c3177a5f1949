//! Graph traversal algorithms (BFS and pre-order DFS).

use std::collections::VecDeque;
use std::slice;

use crate::types::NodeIndex;

use super::NodeRef;

/// Level-order walk from `start`, driven by a FIFO queue.
///
/// Queue has more -> pop -> visit -> push children -> repeat.
pub fn walk_breadth_first<'a, T, E, F>(start: NodeRef<'a, T>, visit: &mut F) -> Result<(), E>
where
    F: FnMut(NodeRef<'a, T>) -> Result<(), E>,
{
    let dag = start.dag();
    let mut queue: VecDeque<NodeIndex> = VecDeque::new();
    queue.push_back(start.index());

    while let Some(index) = queue.pop_front() {
        let node = NodeRef::new(dag, index);
        log::trace!("bfs visit {}", node.id());
        visit(node)?;
        queue.extend(node.node().children().iter().copied());
    }

    Ok(())
}

/// Pre-order walk from `start`: each child's whole subtree before the next sibling.
///
/// Uses a heap stack of child cursors, one per open level, instead of
/// recursion, so long chains cannot exhaust the call stack.
pub fn walk_depth_first<'a, T, E, F>(start: NodeRef<'a, T>, visit: &mut F) -> Result<(), E>
where
    F: FnMut(NodeRef<'a, T>) -> Result<(), E>,
{
    let dag = start.dag();
    log::trace!("dfs visit {}", start.id());
    visit(start)?;

    let mut stack: Vec<slice::Iter<'a, NodeIndex>> = vec![start.node().children().iter()];
    while let Some(cursor) = stack.last_mut() {
        match cursor.next() {
            Some(&index) => {
                let child = NodeRef::new(dag, index);
                log::trace!("dfs visit {}", child.id());
                visit(child)?;
                if !child.is_leaf() {
                    stack.push(child.node().children().iter());
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    Ok(())
}

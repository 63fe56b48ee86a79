//! Traversals over the arena graph.
//!
//! Every traversal follows the graph's native walk (see
//! [`Graph::edges`](crate::graph::Graph::edges)): the Outgoing list for
//! directed graphs, Outgoing then Incoming for undirected ones. Neighbor order
//! is therefore reverse insertion order, with no extra sorting.
//!
//! - `bfs`: breadth-first layers, parent and distance maps
//! - `dfs`: event-driven depth-first search with early exit, plus `dfs_tree`
//! - `dijkstra`: single-source shortest paths with lazy deletion

pub mod bfs;
pub mod dfs;
pub mod dijkstra;

pub use bfs::{bfs, BfsTree};
pub use dfs::{depth_first_search, dfs_tree, ControlSignal, DfsEvent, DfsTree, Time};
pub use dijkstra::{dijkstra, Measure, ShortestPaths};

use crate::graph::index::{IndexType, NodeIndex};

/// Follows a parent map from `target` back to its root.
///
/// Returns the path root-first. The caller checks that `target` was reached;
/// the walk is bounded by the map length, so a malformed map cannot loop.
pub(crate) fn trace_path<Ix: IndexType>(
    parents: &[Option<NodeIndex<Ix>>],
    target: NodeIndex<Ix>,
) -> Vec<NodeIndex<Ix>> {
    let mut path = vec![target];
    let mut cur = target;
    while let Some(parent) = parents.get(cur.index()).copied().flatten() {
        if path.len() > parents.len() {
            break;
        }
        path.push(parent);
        cur = parent;
    }
    path.reverse();
    path
}

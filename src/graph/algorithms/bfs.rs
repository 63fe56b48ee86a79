//! Breadth-first search.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::trace_path;
use crate::error::Result;
use crate::graph::arena::{EdgeType, Graph};
use crate::graph::index::{DefaultIx, IndexType, NodeIndex};

/// The BFS tree rooted at a source node.
///
/// Both maps are indexed by node position. `None` in `distances` is the
/// "unreachable" value; `None` in `parents` means "no predecessor", which
/// holds for the source and for every unreached node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BfsTree<Ix = DefaultIx> {
    source: NodeIndex<Ix>,
    parents: Vec<Option<NodeIndex<Ix>>>,
    distances: Vec<Option<usize>>,
}

impl<Ix: IndexType> BfsTree<Ix> {
    /// The node the search started from.
    pub fn source(&self) -> NodeIndex<Ix> {
        self.source
    }

    /// Number of edges on a shortest path from the source, `None` if unreached.
    pub fn distance(&self, node: NodeIndex<Ix>) -> Option<usize> {
        self.distances.get(node.index()).copied().flatten()
    }

    /// Predecessor of `node` in the BFS tree.
    pub fn parent(&self, node: NodeIndex<Ix>) -> Option<NodeIndex<Ix>> {
        self.parents.get(node.index()).copied().flatten()
    }

    /// Whether the search reached `node`.
    pub fn is_reachable(&self, node: NodeIndex<Ix>) -> bool {
        self.distance(node).is_some()
    }

    /// The tree path from the source to `node`, both ends included.
    pub fn path_to(&self, node: NodeIndex<Ix>) -> Option<Vec<NodeIndex<Ix>>> {
        self.is_reachable(node).then(|| trace_path(&self.parents, node))
    }

    /// Parent map and distance map.
    pub fn into_parts(self) -> (Vec<Option<NodeIndex<Ix>>>, Vec<Option<usize>>) {
        (self.parents, self.distances)
    }
}

/// Breadth-first search from `source`.
///
/// Neighbors are enqueued in the graph's native walk order. A node counts as
/// visited once it has a distance.
///
/// # Errors
/// [`GraphError::IndexOutOfRange`](crate::GraphError::IndexOutOfRange) if
/// `source` is not a node of `graph`.
pub fn bfs<N, E, Ty, Ix>(graph: &Graph<N, E, Ty, Ix>, source: NodeIndex<Ix>) -> Result<BfsTree<Ix>>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    let start = graph.check_node(source)?;
    let n = graph.node_count();
    tracing::debug!(source = start, nodes = n, "bfs: start");

    let mut parents = vec![None; n];
    let mut distances = vec![None; n];
    let mut frontier = VecDeque::new();

    distances[start] = Some(0);
    frontier.push_back((start, 0usize));

    while let Some((u, depth)) = frontier.pop_front() {
        for v in graph.walk(u) {
            let vi = v.index();
            if distances[vi].is_none() {
                distances[vi] = Some(depth + 1);
                parents[vi] = Some(NodeIndex::new(u));
                frontier.push_back((vi, depth + 1));
            }
        }
    }

    tracing::debug!(
        reached = distances.iter().filter(|d| d.is_some()).count(),
        "bfs: finished"
    );

    Ok(BfsTree {
        source,
        parents,
        distances,
    })
}

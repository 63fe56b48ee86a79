//! Structural self-check of the intrusive adjacency lists.
//!
//! The graph keeps every list consistent by construction; these checks make
//! the invariants explicit for tests and debug builds.

use super::{EdgeType, Graph};
use crate::graph::index::{Direction, IndexType};

/// Debug-asserts a structural invariant with a message.
#[inline(always)]
pub(super) fn invariant_assert_msg(condition: bool, message: &str) {
    debug_assert!(condition, "Graph invariant violated: {}", message);
}

impl<N, E, Ty, Ix> Graph<N, E, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    /// Verifies every adjacency list of the graph.
    ///
    /// Checks that:
    /// 1. All endpoints are within the node arena
    /// 2. Every head and link is the sentinel or within the edge arena
    /// 3. Each list only holds edges incident in its direction
    /// 4. Each list strictly descends in edge index (reverse insertion order,
    ///    hence acyclic)
    /// 5. Every edge is in exactly one Outgoing and one Incoming list
    ///
    /// Runs in \(O(n + m)\). Returns `true` if all invariants hold.
    pub fn validate_invariants(&self) -> bool {
        let n = self.nodes.len();
        let m = self.edges.len();

        if self
            .edges
            .iter()
            .any(|edge| edge.source().index() >= n || edge.target().index() >= n)
        {
            return false;
        }

        let mut seen = [vec![false; m], vec![false; m]];
        for (node_pos, node) in self.nodes.iter().enumerate() {
            for dir in Direction::ALL {
                let slot = dir.index();
                let mut cur = node.next[slot];
                while !cur.is_end() {
                    let pos = cur.index();
                    if pos >= m || seen[slot][pos] {
                        return false;
                    }
                    let edge = &self.edges[pos];
                    if edge.node[slot].index() != node_pos {
                        return false;
                    }
                    let next = edge.next[slot];
                    if !next.is_end() && next.index() >= pos {
                        return false;
                    }
                    seen[slot][pos] = true;
                    cur = next;
                }
            }
        }

        seen.iter().all(|slots| slots.iter().all(|&s| s))
    }
}

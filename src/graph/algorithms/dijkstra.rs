//! Single-source shortest paths.
//!
//! The frontier is a binary min-heap that may hold several entries for the
//! same node. An entry is only expanded if its distance still matches the best
//! recorded one; outdated entries are dropped when popped (lazy deletion).

use core::cmp::Ordering;
use core::fmt::Debug;
use core::ops::Add;
use std::collections::BinaryHeap;

use num_traits::{CheckedAdd, Zero};
use serde::{Deserialize, Serialize};

use super::trace_path;
use crate::error::{GraphError, Result};
use crate::graph::arena::{EdgeReference, EdgeType, Graph};
use crate::graph::index::{DefaultIx, IndexType, NodeIndex};

/// Cost types usable by [`dijkstra`].
///
/// Implemented for the primitive integers and floats.
pub trait Measure: Copy + PartialOrd + Add<Output = Self> + Zero + Debug {
    /// `self + rhs`, or `None` if the sum does not fit the type.
    ///
    /// Floats never fail: an infinite sum still orders correctly.
    fn checked_sum(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_measure_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Measure for $t {
                #[inline]
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &rhs)
                }
            }
        )*
    };
}

macro_rules! impl_measure_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Measure for $t {
                #[inline]
                fn checked_sum(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }
            }
        )*
    };
}

impl_measure_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_measure_float!(f32, f64);

/// Heap entry ordered so that `BinaryHeap` pops the smallest score first.
#[derive(Copy, Clone, Debug)]
struct MinScored<K, T>(K, T);

impl<K: PartialOrd, T> PartialEq for MinScored<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: PartialOrd, T> Eq for MinScored<K, T> {}

impl<K: PartialOrd, T> PartialOrd for MinScored<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: PartialOrd, T> Ord for MinScored<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap. Scores are never NaN: such costs are
        // rejected before they reach the heap.
        other.0.partial_cmp(&self.0).unwrap_or(Ordering::Equal)
    }
}

/// Shortest-path distances and the shortest-path tree from one source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShortestPaths<K, Ix = DefaultIx> {
    source: NodeIndex<Ix>,
    distances: Vec<Option<K>>,
    parents: Vec<Option<NodeIndex<Ix>>>,
}

impl<K: Measure, Ix: IndexType> ShortestPaths<K, Ix> {
    /// The node the search started from.
    pub fn source(&self) -> NodeIndex<Ix> {
        self.source
    }

    /// Minimal cumulative cost to `node`, `None` if it was never reached.
    pub fn distance(&self, node: NodeIndex<Ix>) -> Option<K> {
        self.distances.get(node.index()).copied().flatten()
    }

    /// Predecessor of `node` on a shortest path.
    pub fn parent(&self, node: NodeIndex<Ix>) -> Option<NodeIndex<Ix>> {
        self.parents.get(node.index()).copied().flatten()
    }

    /// Whether `node` was reached.
    pub fn is_reachable(&self, node: NodeIndex<Ix>) -> bool {
        self.distance(node).is_some()
    }

    /// A shortest path from the source to `node`, both ends included.
    pub fn path_to(&self, node: NodeIndex<Ix>) -> Option<Vec<NodeIndex<Ix>>> {
        self.is_reachable(node).then(|| trace_path(&self.parents, node))
    }

    /// Distance map and parent map.
    pub fn into_parts(self) -> (Vec<Option<K>>, Vec<Option<NodeIndex<Ix>>>) {
        (self.distances, self.parents)
    }
}

/// Dijkstra's algorithm from `source`.
///
/// `edge_cost` receives the tentative distance of the node being expanded and
/// one of its edges (in native walk order) and returns the cost of crossing
/// it; the neighbor's candidate distance is `distance + cost`. A neighbor is
/// updated only on a strict improvement, so the first shortest path found
/// wins ties.
///
/// # Errors
/// - [`GraphError::IndexOutOfRange`] if `source` is not a node of `graph`.
/// - [`GraphError::NegativeWeight`] as soon as `edge_cost` returns a value
///   that is not `>= 0` (a negative number, or NaN). No partial result is
///   returned.
/// - [`GraphError::DistanceOverflow`] if a candidate distance does not fit
///   `K`.
///
/// # Examples
/// ```
/// use arena_graph::graph::{dijkstra, DiGraph, NodeIndex};
///
/// let graph: DiGraph<(), u32> = DiGraph::from_edges([(0u32, 1u32, 4), (0, 2, 1), (2, 1, 2)]);
/// let paths = dijkstra(&graph, NodeIndex::new(0), |_, e| *e.weight()).unwrap();
/// assert_eq!(paths.distance(NodeIndex::new(1)), Some(3));
/// ```
pub fn dijkstra<N, E, Ty, Ix, F, K>(
    graph: &Graph<N, E, Ty, Ix>,
    source: NodeIndex<Ix>,
    mut edge_cost: F,
) -> Result<ShortestPaths<K, Ix>>
where
    Ty: EdgeType,
    Ix: IndexType,
    F: FnMut(K, EdgeReference<'_, E, Ix>) -> K,
    K: Measure,
{
    let start = graph.check_node(source)?;
    let n = graph.node_count();
    tracing::debug!(source = start, nodes = n, "dijkstra: start");

    let mut distances: Vec<Option<K>> = vec![None; n];
    let mut parents = vec![None; n];
    let mut frontier = BinaryHeap::new();
    let mut stale = 0usize;

    distances[start] = Some(K::zero());
    frontier.push(MinScored(K::zero(), start));

    while let Some(MinScored(dist, u)) = frontier.pop() {
        if distances[u].is_some_and(|best| dist > best) {
            stale += 1;
            tracing::trace!(node = u, ?dist, "dijkstra: skipping stale entry");
            continue;
        }

        for edge in graph.walk_edges(u) {
            let cost = edge_cost(dist, edge);
            match cost.partial_cmp(&K::zero()) {
                Some(Ordering::Greater | Ordering::Equal) => {}
                _ => {
                    tracing::warn!(edge = edge.id().index(), ?cost, "dijkstra: negative cost");
                    return Err(GraphError::NegativeWeight {
                        edge: edge.id().index(),
                    });
                }
            }

            let Some(candidate) = dist.checked_sum(cost) else {
                tracing::warn!(
                    edge = edge.id().index(),
                    ?dist,
                    ?cost,
                    "dijkstra: distance overflow"
                );
                return Err(GraphError::DistanceOverflow {
                    edge: edge.id().index(),
                });
            };
            let v = edge.neighbor().index();
            if distances[v].map_or(true, |best| candidate < best) {
                distances[v] = Some(candidate);
                parents[v] = Some(NodeIndex::new(u));
                frontier.push(MinScored(candidate, v));
            }
        }
    }

    tracing::debug!(stale, "dijkstra: finished");
    Ok(ShortestPaths {
        source,
        distances,
        parents,
    })
}

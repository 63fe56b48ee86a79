//! Event-driven depth-first search.
//!
//! The traversal reports its structure to a visitor as a stream of
//! [`DfsEvent`]s and lets the visitor stop it at any event. Exploration uses an
//! explicit stack of `(node, neighbor cursor)` pairs, so depth is bounded by
//! heap memory rather than the call stack.

use core::ops::ControlFlow;

use serde::{Deserialize, Serialize};

use super::trace_path;
use crate::error::Result;
use crate::graph::access::visited::VisitedSet;
use crate::graph::arena::{EdgeType, Graph};
use crate::graph::index::{DefaultIx, IndexType, NodeIndex};

/// A DFS timestamp. The counter starts at zero and ticks once per
/// [`DfsEvent::Discover`] and once per [`DfsEvent::Finish`].
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Time(pub usize);

/// One step of a depth-first search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DfsEvent<N> {
    /// First time the node is reached.
    Discover(N, Time),
    /// The edge led to discovering its target. Delivered before the target's
    /// `Discover`.
    TreeEdge(N, N),
    /// The target is discovered but not finished: an ancestor on the stack.
    ///
    /// In an undirected graph the edge leading back to the DFS parent is
    /// reported here too.
    BackEdge(N, N),
    /// The target is already finished.
    CrossOrForwardEdge(N, N),
    /// Every neighbor of the node has been explored.
    Finish(N, Time),
}

/// Return type of a DFS visitor.
///
/// `()` never breaks. [`ControlFlow`] breaks on `Break(value)`, and the value
/// is handed back to the caller of [`depth_first_search`].
pub trait ControlSignal {
    /// The value that lets the traversal proceed.
    fn continuing() -> Self;
    /// Whether the traversal must stop now.
    fn should_break(&self) -> bool;
}

impl ControlSignal for () {
    #[inline]
    fn continuing() {}

    #[inline]
    fn should_break(&self) -> bool {
        false
    }
}

impl<B> ControlSignal for ControlFlow<B> {
    #[inline]
    fn continuing() -> Self {
        ControlFlow::Continue(())
    }

    #[inline]
    fn should_break(&self) -> bool {
        self.is_break()
    }
}

/// Delivers one event; returns from the enclosing function on a break.
macro_rules! emit {
    ($visitor:expr, $event:expr) => {{
        let signal = $visitor($event);
        if signal.should_break() {
            return Ok(signal);
        }
    }};
}

#[inline]
fn tick(time: &mut Time) -> Time {
    let now = *time;
    time.0 += 1;
    now
}

/// Depth-first search from `source`, reporting every step to `visitor`.
///
/// Neighbors are explored in the graph's native walk order. Each examined
/// edge `(u, v)` is classified by the state of `v` at that moment: undiscovered
/// (tree edge), discovered but unfinished (back edge), or finished (cross or
/// forward edge).
///
/// Returns the visitor's breaking value if it stopped the search, otherwise
/// `C::continuing()`. Once the visitor breaks, no further events are delivered.
///
/// # Errors
/// [`GraphError::IndexOutOfRange`](crate::GraphError::IndexOutOfRange) if
/// `source` is not a node of `graph`. The visitor is not called in that case.
///
/// # Examples
/// ```
/// use core::ops::ControlFlow;
/// use arena_graph::graph::{depth_first_search, DfsEvent, DiGraph, NodeIndex};
///
/// let graph: DiGraph<(), ()> = DiGraph::from_edges([(0u32, 1u32), (1, 2)]);
/// let found = depth_first_search(&graph, NodeIndex::new(0), |event| match event {
///     DfsEvent::Discover(n, _) if n.index() == 2 => ControlFlow::Break(n),
///     _ => ControlFlow::Continue(()),
/// })
/// .unwrap();
/// assert_eq!(found, ControlFlow::Break(NodeIndex::new(2)));
/// ```
pub fn depth_first_search<N, E, Ty, Ix, F, C>(
    graph: &Graph<N, E, Ty, Ix>,
    source: NodeIndex<Ix>,
    mut visitor: F,
) -> Result<C>
where
    Ty: EdgeType,
    Ix: IndexType,
    F: FnMut(DfsEvent<NodeIndex<Ix>>) -> C,
    C: ControlSignal,
{
    let start = graph.check_node(source)?;
    let n = graph.node_count();
    tracing::debug!(source = start, nodes = n, "dfs: start");

    let mut discovered = VisitedSet::new(n);
    let mut finished = VisitedSet::new(n);
    let mut time = Time(0);

    discovered.try_visit(start);
    emit!(visitor, DfsEvent::Discover(source, tick(&mut time)));
    let mut stack = vec![(source, graph.walk(start))];

    loop {
        let (u, next) = match stack.last_mut() {
            Some((u, neighbors)) => (*u, neighbors.next()),
            None => break,
        };

        match next {
            Some(v) => {
                let vi = v.index();
                if discovered.try_visit(vi) {
                    emit!(visitor, DfsEvent::TreeEdge(u, v));
                    emit!(visitor, DfsEvent::Discover(v, tick(&mut time)));
                    stack.push((v, graph.walk(vi)));
                } else if !finished.is_visited(vi) {
                    emit!(visitor, DfsEvent::BackEdge(u, v));
                } else {
                    emit!(visitor, DfsEvent::CrossOrForwardEdge(u, v));
                }
            }
            None => {
                stack.pop();
                finished.try_visit(u.index());
                emit!(visitor, DfsEvent::Finish(u, tick(&mut time)));
            }
        }
    }

    tracing::debug!(final_time = time.0, "dfs: finished");
    Ok(C::continuing())
}

/// The DFS forest rooted at one source: parents, timestamps and discovery
/// order.
///
/// Nodes the search never reached have no parent and no times.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DfsTree<Ix = DefaultIx> {
    source: NodeIndex<Ix>,
    parents: Vec<Option<NodeIndex<Ix>>>,
    discovery: Vec<Option<Time>>,
    finish: Vec<Option<Time>>,
    order: Vec<NodeIndex<Ix>>,
}

impl<Ix: IndexType> DfsTree<Ix> {
    /// The node the search started from.
    pub fn source(&self) -> NodeIndex<Ix> {
        self.source
    }

    /// Tree-edge predecessor of `node`.
    pub fn parent(&self, node: NodeIndex<Ix>) -> Option<NodeIndex<Ix>> {
        self.parents.get(node.index()).copied().flatten()
    }

    /// Timestamp of the node's `Discover` event.
    pub fn discovery_time(&self, node: NodeIndex<Ix>) -> Option<Time> {
        self.discovery.get(node.index()).copied().flatten()
    }

    /// Timestamp of the node's `Finish` event.
    pub fn finish_time(&self, node: NodeIndex<Ix>) -> Option<Time> {
        self.finish.get(node.index()).copied().flatten()
    }

    /// `(discovery, finish)` of a reached node.
    pub fn times(&self, node: NodeIndex<Ix>) -> Option<(Time, Time)> {
        Some((self.discovery_time(node)?, self.finish_time(node)?))
    }

    /// Whether the search reached `node`.
    pub fn is_reachable(&self, node: NodeIndex<Ix>) -> bool {
        self.discovery_time(node).is_some()
    }

    /// The tree path from the source to `node`.
    pub fn path_to(&self, node: NodeIndex<Ix>) -> Option<Vec<NodeIndex<Ix>>> {
        self.is_reachable(node).then(|| trace_path(&self.parents, node))
    }

    /// Reached nodes in the order they were discovered.
    pub fn discovery_order(&self) -> &[NodeIndex<Ix>] {
        &self.order
    }
}

/// Runs [`depth_first_search`] to completion and records the resulting tree.
///
/// # Errors
/// [`GraphError::IndexOutOfRange`](crate::GraphError::IndexOutOfRange) if
/// `source` is not a node of `graph`.
pub fn dfs_tree<N, E, Ty, Ix>(
    graph: &Graph<N, E, Ty, Ix>,
    source: NodeIndex<Ix>,
) -> Result<DfsTree<Ix>>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    let n = graph.node_count();
    let mut parents = vec![None; n];
    let mut discovery = vec![None; n];
    let mut finish = vec![None; n];
    let mut order = Vec::new();

    depth_first_search(graph, source, |event| match event {
        DfsEvent::Discover(node, t) => {
            discovery[node.index()] = Some(t);
            order.push(node);
        }
        DfsEvent::TreeEdge(u, v) => parents[v.index()] = Some(u),
        DfsEvent::Finish(node, t) => finish[node.index()] = Some(t),
        DfsEvent::BackEdge(..) | DfsEvent::CrossOrForwardEdge(..) => {}
    })?;

    Ok(DfsTree {
        source,
        parents,
        discovery,
        finish,
        order,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::arena::{DiGraph, UnGraph};
    use DfsEvent::*;

    fn n(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    fn cyclic() -> DiGraph<(), ()> {
        DiGraph::from_edges([(0u32, 1u32), (1, 2), (2, 0), (0, 3), (3, 2)])
    }

    #[test]
    fn events_classify_every_edge() {
        let graph = cyclic();
        let mut events = Vec::new();
        depth_first_search(&graph, n(0), |e| events.push(e)).unwrap();

        assert_eq!(
            events,
            vec![
                Discover(n(0), Time(0)),
                TreeEdge(n(0), n(3)),
                Discover(n(3), Time(1)),
                TreeEdge(n(3), n(2)),
                Discover(n(2), Time(2)),
                BackEdge(n(2), n(0)),
                Finish(n(2), Time(3)),
                Finish(n(3), Time(4)),
                TreeEdge(n(0), n(1)),
                Discover(n(1), Time(5)),
                CrossOrForwardEdge(n(1), n(2)),
                Finish(n(1), Time(6)),
                Finish(n(0), Time(7)),
            ]
        );
    }

    #[test]
    fn break_on_kth_event_delivers_exactly_k() {
        let graph = cyclic();
        for k in 1..=13 {
            let mut delivered = 0;
            let out = depth_first_search(&graph, n(0), |_| {
                delivered += 1;
                if delivered == k {
                    ControlFlow::Break(k)
                } else {
                    ControlFlow::Continue(())
                }
            })
            .unwrap();
            assert_eq!(out, ControlFlow::Break(k));
            assert_eq!(delivered, k);
        }
    }

    #[test]
    fn completes_with_continue() {
        let graph = cyclic();
        let out: ControlFlow<()> =
            depth_first_search(&graph, n(0), |_| ControlFlow::Continue(())).unwrap();
        assert_eq!(out, ControlFlow::Continue(()));
    }

    #[test]
    fn self_loop_is_a_back_edge() {
        let mut graph: DiGraph<(), ()> = DiGraph::new();
        let a = graph.add_node(());
        graph.add_edge(a, a, ()).unwrap();
        let mut events = Vec::new();
        depth_first_search(&graph, a, |e| events.push(e)).unwrap();
        assert_eq!(
            events,
            vec![Discover(a, Time(0)), BackEdge(a, a), Finish(a, Time(1))]
        );
    }

    #[test]
    fn undirected_parent_edge_is_reported_back() {
        let graph: UnGraph<(), ()> = UnGraph::from_edges([(0u32, 1u32)]);
        let mut events = Vec::new();
        depth_first_search(&graph, n(0), |e| events.push(e)).unwrap();
        assert!(events.contains(&BackEdge(n(1), n(0))));
    }

    #[test]
    fn dfs_tree_records_times_and_parents() {
        let graph = cyclic();
        let tree = dfs_tree(&graph, n(0)).unwrap();
        assert_eq!(tree.source(), n(0));
        assert_eq!(tree.discovery_order(), &[n(0), n(3), n(2), n(1)]);
        assert_eq!(tree.parent(n(2)), Some(n(3)));
        assert_eq!(tree.parent(n(0)), None);
        assert_eq!(tree.times(n(0)), Some((Time(0), Time(7))));
        assert_eq!(tree.times(n(2)), Some((Time(2), Time(3))));
        assert_eq!(tree.path_to(n(2)).unwrap(), vec![n(0), n(3), n(2)]);
    }

    #[test]
    fn unreached_nodes_have_no_times() {
        let mut graph = cyclic();
        let lonely = graph.add_node(());
        let tree = dfs_tree(&graph, n(0)).unwrap();
        assert_eq!(tree.discovery_time(lonely), None);
        assert_eq!(tree.finish_time(lonely), None);
        assert!(!tree.is_reachable(lonely));
        assert_eq!(tree.path_to(lonely), None);
    }

    #[test]
    fn invalid_source_never_calls_the_visitor() {
        let graph = cyclic();
        let mut calls = 0;
        assert!(depth_first_search(&graph, n(42), |_| calls += 1).is_err());
        assert_eq!(calls, 0);
    }

    #[test]
    fn deep_chain_does_not_recurse() {
        let edges: Vec<(u32, u32)> = (0..50_000).map(|i| (i, i + 1)).collect();
        let graph: DiGraph<(), ()> = DiGraph::from_edges(edges);
        let tree = dfs_tree(&graph, n(0)).unwrap();
        assert_eq!(tree.discovery_order().len(), 50_001);
        assert_eq!(tree.finish_time(n(0)), Some(Time(100_001)));
    }
}

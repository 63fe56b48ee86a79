//! Bulk construction from edge lists.

use core::cmp;

use super::{EdgeType, Graph};
use crate::graph::index::{IndexType, NodeIndex};

/// Conversion into a `(source, target, weight)` triple.
///
/// Implemented for `(a, b)` pairs (weight `E::default()`), `(a, b, weight)`
/// triples and references to pairs.
pub trait IntoWeightedEdge<E> {
    /// Type of the endpoint identifiers.
    type NodeId;
    /// Splits the item into endpoints and payload.
    fn into_weighted_edge(self) -> (Self::NodeId, Self::NodeId, E);
}

impl<Id, E: Default> IntoWeightedEdge<E> for (Id, Id) {
    type NodeId = Id;

    fn into_weighted_edge(self) -> (Id, Id, E) {
        let (s, t) = self;
        (s, t, E::default())
    }
}

impl<Id, E> IntoWeightedEdge<E> for (Id, Id, E) {
    type NodeId = Id;

    fn into_weighted_edge(self) -> (Id, Id, E) {
        self
    }
}

impl<'a, Id: Copy, E: Default> IntoWeightedEdge<E> for &'a (Id, Id) {
    type NodeId = Id;

    fn into_weighted_edge(self) -> (Id, Id, E) {
        let (s, t) = *self;
        (s, t, E::default())
    }
}

impl<N, E, Ty, Ix> Graph<N, E, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    /// Builds a graph from an edge list.
    ///
    /// Nodes are created on demand with `N::default()` so that every endpoint
    /// mentioned exists; edges are inserted in iteration order.
    ///
    /// # Panics
    /// Panics if an endpoint is the sentinel `NodeIndex::end()`, or if the
    /// node or edge count outgrows `Ix`.
    pub fn from_edges<I>(iterable: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoWeightedEdge<E>,
        <I::Item as IntoWeightedEdge<E>>::NodeId: Into<NodeIndex<Ix>>,
        N: Default,
    {
        let mut g = Self::with_capacity(0, 0);
        g.extend_with_edges(iterable);
        g
    }

    /// Appends every edge of `iterable`, growing the node arena as needed.
    ///
    /// # Panics
    /// Panics if an endpoint is the sentinel `NodeIndex::end()`, or if the
    /// node or edge count outgrows `Ix`.
    pub fn extend_with_edges<I>(&mut self, iterable: I)
    where
        I: IntoIterator,
        I::Item: IntoWeightedEdge<E>,
        <I::Item as IntoWeightedEdge<E>>::NodeId: Into<NodeIndex<Ix>>,
        N: Default,
    {
        let iter = iterable.into_iter();
        let (low, _) = iter.size_hint();
        self.reserve_edges(low);

        for item in iter {
            let (source, target, weight) = item.into_weighted_edge();
            let (source, target): (NodeIndex<Ix>, NodeIndex<Ix>) = (source.into(), target.into());
            assert!(
                !source.is_end() && !target.is_end(),
                "Graph::extend_with_edges: endpoint is the end-of-list sentinel"
            );
            let highest = cmp::max(source.index(), target.index());
            while highest >= self.node_count() {
                self.add_node(N::default());
            }
            self.link_edge(source.index(), target.index(), weight);
        }
    }
}

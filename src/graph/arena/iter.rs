//! Adjacency walks over the intrusive lists, plus handle iterators.

use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ops::Range;

use super::{Edge, INCOMING, OUTGOING};
use crate::graph::index::{DefaultIx, Direction, EdgeIndex, IndexType, NodeIndex};

/// A borrowed view of one edge met during an adjacency walk.
#[derive(Debug)]
pub struct EdgeReference<'a, E, Ix = DefaultIx> {
    id: EdgeIndex<Ix>,
    edge: &'a Edge<E, Ix>,
    direction: Direction,
}

impl<'a, E, Ix: IndexType> Clone for EdgeReference<'a, E, Ix> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, E, Ix: IndexType> Copy for EdgeReference<'a, E, Ix> {}

impl<'a, E, Ix: IndexType> EdgeReference<'a, E, Ix> {
    /// Handle of the edge.
    #[inline]
    pub fn id(&self) -> EdgeIndex<Ix> {
        self.id
    }

    /// Stored source node.
    #[inline]
    pub fn source(&self) -> NodeIndex<Ix> {
        self.edge.source()
    }

    /// Stored target node.
    #[inline]
    pub fn target(&self) -> NodeIndex<Ix> {
        self.edge.target()
    }

    /// The edge payload.
    #[inline]
    pub fn weight(&self) -> &'a E {
        &self.edge.weight
    }

    /// Which of the walked node's lists the edge was found in.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The endpoint away from the walked node: the target for an edge found in
    /// an Outgoing list, the source for one found in an Incoming list.
    #[inline]
    pub fn neighbor(&self) -> NodeIndex<Ix> {
        self.edge.node[self.direction.opposite().index()]
    }
}

/// Walks one or both adjacency lists of a node.
///
/// The Outgoing list (slot 0) is drained first, then the Incoming list
/// (slot 1). Incoming edges whose source is `skip_start` are skipped; for an
/// undirected walk `skip_start` is the walked node itself, which drops the
/// second sighting of each self-loop.
pub struct Edges<'a, E, Ix: IndexType = DefaultIx> {
    edges: &'a [Edge<E, Ix>],
    next: [EdgeIndex<Ix>; 2],
    skip_start: NodeIndex<Ix>,
}

impl<'a, E, Ix: IndexType> Edges<'a, E, Ix> {
    pub(super) fn new(
        edges: &'a [Edge<E, Ix>],
        next: [EdgeIndex<Ix>; 2],
        skip_start: NodeIndex<Ix>,
    ) -> Self {
        Self {
            edges,
            next,
            skip_start,
        }
    }
}

impl<'a, E, Ix: IndexType> Clone for Edges<'a, E, Ix> {
    fn clone(&self) -> Self {
        Self {
            edges: self.edges,
            next: self.next,
            skip_start: self.skip_start,
        }
    }
}

impl<'a, E, Ix: IndexType> Iterator for Edges<'a, E, Ix> {
    type Item = EdgeReference<'a, E, Ix>;

    fn next(&mut self) -> Option<Self::Item> {
        // The sentinel is past the end of any arena, so `get` ends the list.
        if let Some(edge) = self.edges.get(self.next[OUTGOING].index()) {
            let id = self.next[OUTGOING];
            self.next[OUTGOING] = edge.next[OUTGOING];
            return Some(EdgeReference {
                id,
                edge,
                direction: Direction::Outgoing,
            });
        }

        while let Some(edge) = self.edges.get(self.next[INCOMING].index()) {
            let id = self.next[INCOMING];
            self.next[INCOMING] = edge.next[INCOMING];
            if edge.node[OUTGOING] != self.skip_start {
                return Some(EdgeReference {
                    id,
                    edge,
                    direction: Direction::Incoming,
                });
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.edges.len()))
    }
}

impl<'a, E, Ix: IndexType> FusedIterator for Edges<'a, E, Ix> {}

/// Nodes reached by an adjacency walk, see [`Edges`].
pub struct Neighbors<'a, E, Ix: IndexType = DefaultIx> {
    edges: Edges<'a, E, Ix>,
}

impl<'a, E, Ix: IndexType> Neighbors<'a, E, Ix> {
    pub(super) fn new(edges: Edges<'a, E, Ix>) -> Self {
        Self { edges }
    }
}

impl<'a, E, Ix: IndexType> Clone for Neighbors<'a, E, Ix> {
    fn clone(&self) -> Self {
        Self {
            edges: self.edges.clone(),
        }
    }
}

impl<'a, E, Ix: IndexType> Iterator for Neighbors<'a, E, Ix> {
    type Item = NodeIndex<Ix>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.edges.next().map(|edge| edge.neighbor())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

impl<'a, E, Ix: IndexType> FusedIterator for Neighbors<'a, E, Ix> {}

macro_rules! handle_iter {
    ($(#[$meta:meta])* $name:ident, $handle:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name<Ix = DefaultIx> {
            range: Range<usize>,
            ty: PhantomData<fn() -> Ix>,
        }

        impl<Ix: IndexType> $name<Ix> {
            pub(super) fn new(len: usize) -> Self {
                Self {
                    range: 0..len,
                    ty: PhantomData,
                }
            }
        }

        impl<Ix: IndexType> Iterator for $name<Ix> {
            type Item = $handle<Ix>;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.range.next().map($handle::new)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.range.size_hint()
            }
        }

        impl<Ix: IndexType> DoubleEndedIterator for $name<Ix> {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.range.next_back().map($handle::new)
            }
        }

        impl<Ix: IndexType> ExactSizeIterator for $name<Ix> {}
        impl<Ix: IndexType> FusedIterator for $name<Ix> {}
    };
}

handle_iter!(
    /// Node handles in insertion order.
    NodeIndices,
    NodeIndex
);
handle_iter!(
    /// Edge handles in insertion order.
    EdgeIndices,
    EdgeIndex
);

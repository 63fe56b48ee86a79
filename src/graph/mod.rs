//! Arena-indexed graphs and the traversals that run over them.
//!
//! - `index`: integer handles and the `Direction` selector
//! - `arena`: the graph itself, its adjacency walks and bulk builders
//! - `algorithms`: BFS, event-driven DFS and Dijkstra

pub(crate) mod access;
pub mod algorithms;
pub mod arena;
pub mod index;

pub use algorithms::{
    bfs, depth_first_search, dfs_tree, dijkstra, BfsTree, ControlSignal, DfsEvent, DfsTree,
    Measure, ShortestPaths, Time,
};
pub use arena::{
    DiGraph, Directed, Edge, EdgeIndices, EdgeReference, EdgeType, Edges, Graph, IntoWeightedEdge,
    Neighbors, Node, NodeIndices, UnGraph, Undirected,
};
pub use index::{DefaultIx, Direction, EdgeIndex, IndexType, NodeIndex};

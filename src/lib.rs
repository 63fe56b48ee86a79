//! # `arena-graph` - Arena-indexed graphs with intrusive adjacency lists
//!
//! Nodes and edges are stored in two flat, append-only arenas and addressed by
//! small integer handles ([`NodeIndex`], [`EdgeIndex`]). Each node heads two
//! singly-linked lists of incident edges, threaded through "next" links stored
//! in the edge records themselves, so adding an edge is two head updates and
//! no allocation beyond the arena push.
//!
//! ## Key Features
//!
//! - **Stable handles**: handles are plain integers, never invalidated by
//!   insertion; [`Graph::clear`] is the only operation that retires them.
//! - **Checked access**: every handle-taking operation validates bounds and
//!   reports [`GraphError::IndexOutOfRange`] instead of panicking.
//! - **One representation, two semantics**: directedness is a type parameter;
//!   undirected walks merge a node's Outgoing and Incoming lists.
//! - **Traversals**: breadth-first search, event-driven depth-first search with
//!   early exit, and Dijkstra with a caller-supplied cost function.
//!
//! ## Invariants
//!
//! For every node and direction, the list starting at the node's head visits
//! exactly the edges incident in that direction, most recently inserted first,
//! and ends at the sentinel. A self-loop sits in both lists of its node. See
//! [`Graph::validate_invariants`].
//!
//! ## Example
//!
//! ```rust
//! use arena_graph::graph::{bfs, UnGraph};
//!
//! let mut graph: UnGraph<&str, ()> = UnGraph::new_undirected();
//! let a = graph.add_node("a");
//! let b = graph.add_node("b");
//! let c = graph.add_node("c");
//! graph.add_edge(a, b, ())?;
//! graph.add_edge(c, b, ())?;
//!
//! let tree = bfs(&graph, a)?;
//! assert_eq!(tree.distance(c), Some(2));
//! assert_eq!(tree.path_to(c), Some(vec![a, b, c]));
//! # Ok::<(), arena_graph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;

pub use error::{GraphError, IndexKind, Result};
pub use graph::{DiGraph, Direction, EdgeIndex, Graph, NodeIndex, UnGraph};

// Handles are exactly as wide as their index type.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<NodeIndex<u32>>() == mem::size_of::<u32>());
    assert!(mem::size_of::<EdgeIndex<u16>>() == mem::size_of::<u16>());
    assert!(mem::size_of::<Direction>() == 1);
};

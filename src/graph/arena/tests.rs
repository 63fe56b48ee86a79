use super::*;
use crate::error::IndexKind;

fn collect<Ix: IndexType>(iter: impl Iterator<Item = NodeIndex<Ix>>) -> Vec<usize> {
    iter.map(NodeIndex::index).collect()
}

#[test]
fn arena_graph_basic_operations() {
    let mut graph: DiGraph<&str, u32> = DiGraph::new();
    assert!(graph.is_empty());
    assert!(graph.is_directed());

    let a = graph.add_node("a");
    let b = graph.add_node("b");
    let e = graph.add_edge(a, b, 7).unwrap();

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(*graph.node_weight(a).unwrap(), "a");
    assert_eq!(*graph.edge_weight(e).unwrap(), 7);
    assert_eq!(graph.edge_endpoints(e).unwrap(), (a, b));

    *graph.edge_weight_mut(e).unwrap() = 9;
    *graph.node_weight_mut(b).unwrap() = "bee";
    assert_eq!(graph[e], 9);
    assert_eq!(graph[b], "bee");
}

#[test]
fn new_edge_heads_source_outgoing_and_target_incoming() {
    let mut graph: DiGraph<(), ()> = DiGraph::new();
    let a = graph.add_node(());
    let b = graph.add_node(());
    let c = graph.add_node(());
    let first = graph.add_edge(a, c, ()).unwrap();
    let e = graph.add_edge(a, b, ()).unwrap();

    assert_eq!(graph.first_edge(a, Direction::Outgoing).unwrap(), Some(e));
    assert_eq!(graph.first_edge(b, Direction::Incoming).unwrap(), Some(e));
    assert_eq!(graph.next_edge(e, Direction::Outgoing).unwrap(), Some(first));
    assert_eq!(graph.next_edge(e, Direction::Incoming).unwrap(), None);

    // Not threaded into the "wrong" lists.
    assert_eq!(graph.first_edge(a, Direction::Incoming).unwrap(), None);
    assert_eq!(graph.first_edge(b, Direction::Outgoing).unwrap(), None);
    assert!(graph.validate_invariants());
}

#[test]
fn lists_are_walked_most_recent_first() {
    let mut graph: DiGraph<(), u8> = DiGraph::new();
    let hub = graph.add_node(());
    let leaves: Vec<_> = (0..4).map(|_| graph.add_node(())).collect();
    for (w, &leaf) in leaves.iter().enumerate() {
        graph.add_edge(hub, leaf, w as u8).unwrap();
    }

    assert_eq!(collect(graph.neighbors(hub).unwrap()), vec![4, 3, 2, 1]);
    let weights: Vec<u8> = graph.edges(hub).unwrap().map(|e| *e.weight()).collect();
    assert_eq!(weights, vec![3, 2, 1, 0]);
}

#[test]
fn self_loop_heads_both_lists() {
    let mut graph: DiGraph<(), ()> = DiGraph::new();
    let a = graph.add_node(());
    let b = graph.add_node(());
    let out = graph.add_edge(a, b, ()).unwrap();
    let inc = graph.add_edge(b, a, ()).unwrap();
    let lp = graph.add_edge(a, a, ()).unwrap();

    assert_eq!(graph.first_edge(a, Direction::Outgoing).unwrap(), Some(lp));
    assert_eq!(graph.first_edge(a, Direction::Incoming).unwrap(), Some(lp));
    // The loop keeps the prior head of each list as its link.
    assert_eq!(graph.next_edge(lp, Direction::Outgoing).unwrap(), Some(out));
    assert_eq!(graph.next_edge(lp, Direction::Incoming).unwrap(), Some(inc));
    assert!(graph.raw_edges()[lp.index()].is_self_loop());
    assert!(graph.validate_invariants());

    assert_eq!(collect(graph.neighbors_directed(a, Direction::Outgoing).unwrap()), vec![0, 1]);
    assert_eq!(collect(graph.neighbors_directed(a, Direction::Incoming).unwrap()), vec![0, 1]);
}

#[test]
fn self_loop_on_fresh_node_links_to_sentinel() {
    let mut graph: DiGraph<(), ()> = DiGraph::new();
    let a = graph.add_node(());
    let lp = graph.add_edge(a, a, ()).unwrap();

    let node = graph.node(a).unwrap();
    assert_eq!(node.next_edge(Direction::Outgoing), lp);
    assert_eq!(node.next_edge(Direction::Incoming), lp);
    let edge = graph.edge(lp).unwrap();
    assert!(edge.next_edge(Direction::Outgoing).is_end());
    assert!(edge.next_edge(Direction::Incoming).is_end());
}

#[test]
fn undirected_walk_merges_both_lists() {
    let mut graph: UnGraph<(), ()> = UnGraph::new_undirected();
    assert!(!graph.is_directed());
    let n: Vec<_> = (0..3).map(|_| graph.add_node(())).collect();
    graph.add_edge(n[0], n[1], ()).unwrap();
    graph.add_edge(n[2], n[0], ()).unwrap();

    // Outgoing list first, then Incoming.
    assert_eq!(collect(graph.neighbors(n[0]).unwrap()), vec![1, 2]);
    assert_eq!(collect(graph.neighbors(n[1]).unwrap()), vec![0]);
    assert_eq!(collect(graph.neighbors(n[2]).unwrap()), vec![0]);

    let dirs: Vec<_> = graph.edges(n[0]).unwrap().map(|e| e.direction()).collect();
    assert_eq!(dirs, vec![Direction::Outgoing, Direction::Incoming]);
}

#[test]
fn undirected_self_loop_is_yielded_once() {
    let mut graph: UnGraph<(), ()> = UnGraph::new_undirected();
    let a = graph.add_node(());
    let b = graph.add_node(());
    graph.add_edge(a, b, ()).unwrap();
    let lp = graph.add_edge(a, a, ()).unwrap();
    graph.add_edge(b, a, ()).unwrap();

    let edges: Vec<_> = graph.edges(a).unwrap().map(|e| e.id()).collect();
    assert_eq!(edges.iter().filter(|&&e| e == lp).count(), 1);
    assert_eq!(collect(graph.neighbors(a).unwrap()), vec![0, 1, 1]);
}

#[test]
fn directed_walk_ignores_incoming() {
    let mut graph: DiGraph<(), ()> = DiGraph::new();
    let a = graph.add_node(());
    let b = graph.add_node(());
    graph.add_edge(b, a, ()).unwrap();
    assert_eq!(graph.neighbors(a).unwrap().count(), 0);
    assert_eq!(collect(graph.neighbors_directed(a, Direction::Incoming).unwrap()), vec![1]);
}

#[test]
fn invalid_handles_are_rejected() {
    let mut graph: DiGraph<u8, u8> = DiGraph::new();
    let a = graph.add_node(1);
    let missing = NodeIndex::new(5);

    let err = graph.add_edge(a, missing, 0).unwrap_err();
    assert_eq!(
        err,
        GraphError::IndexOutOfRange {
            kind: IndexKind::Node,
            index: 5,
            len: 1
        }
    );
    assert!(graph.add_edge(NodeIndex::end(), a, 0).is_err());
    assert_eq!(graph.edge_count(), 0);

    assert!(graph.node_weight(missing).is_err());
    assert!(graph.neighbors(missing).is_err());
    assert!(matches!(
        graph.edge_weight(EdgeIndex::new(0)),
        Err(GraphError::IndexOutOfRange {
            kind: IndexKind::Edge,
            ..
        })
    ));
    assert!(graph.edge_endpoints(EdgeIndex::end()).is_err());
}

#[test]
fn clear_invalidates_handles() {
    let mut graph: DiGraph<u8, u8> = DiGraph::with_capacity(4, 4);
    let a = graph.add_node(1);
    let b = graph.add_node(2);
    let e = graph.add_edge(a, b, 3).unwrap();

    graph.clear();
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.node_weight(a).is_err());
    assert!(graph.edge_weight(e).is_err());
    assert!(graph.add_edge(a, b, 0).is_err());

    // Handles are reissued from zero.
    assert_eq!(graph.add_node(9), a);
}

#[test]
fn find_edge_respects_directedness() {
    let mut di: DiGraph<(), ()> = DiGraph::from_edges([(0u32, 1u32), (1, 2)]);
    let (n0, n1) = (NodeIndex::new(0), NodeIndex::new(1));
    assert_eq!(di.find_edge(n0, n1).unwrap(), Some(EdgeIndex::new(0)));
    assert_eq!(di.find_edge(n1, n0).unwrap(), None);
    let dup = di.add_edge(n0, n1, ()).unwrap();
    assert_eq!(di.find_edge(n0, n1).unwrap(), Some(dup));

    let un: UnGraph<(), ()> = UnGraph::from_edges([(0u32, 1u32)]);
    assert_eq!(un.find_edge(n1, n0).unwrap(), Some(EdgeIndex::new(0)));
    assert!(un.find_edge(n0, NodeIndex::new(9)).is_err());
}

#[test]
fn from_edges_creates_missing_nodes() {
    let graph: DiGraph<u8, i32> = DiGraph::from_edges([(0u32, 3u32, 10), (3, 1, 20)]);
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 2);
    assert!(graph.node_indices().all(|n| graph[n] == 0));
    assert_eq!(graph.edge_indices().map(|e| graph[e]).collect::<Vec<_>>(), vec![10, 20]);
    assert!(graph.validate_invariants());
}

#[test]
fn handle_iterators_are_exact() {
    let graph: DiGraph<(), ()> = DiGraph::from_edges(&[(0u32, 1u32), (1, 2), (2, 0)]);
    assert_eq!(graph.node_indices().len(), 3);
    assert_eq!(graph.edge_indices().rev().map(EdgeIndex::index).collect::<Vec<_>>(), vec![2, 1, 0]);
}

#[test]
#[should_panic(expected = "node index overflow")]
fn narrow_index_type_refuses_the_sentinel() {
    let mut graph: Graph<(), (), Directed, u8> = Graph::with_capacity(256, 0);
    for _ in 0..255 {
        graph.add_node(());
    }
    assert_eq!(graph.node_count(), 255);
    graph.add_node(());
}

#[test]
fn wide_handle_does_not_alias_a_narrow_node() {
    let mut graph: Graph<(), (), Directed, u8> = Graph::new();
    for _ in 0..50 {
        graph.add_node(());
    }
    let err = graph
        .add_edge(NodeIndex::new(300), NodeIndex::new(0), ())
        .unwrap_err();
    assert_eq!(
        err,
        GraphError::IndexOutOfRange {
            kind: IndexKind::Node,
            index: 255,
            len: 50
        }
    );
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.node_weight(NodeIndex::new(256 + 3)).is_err());
    assert!(graph.edge_weight(EdgeIndex::new(1000)).is_err());
}

#[test]
#[should_panic(expected = "end-of-list sentinel")]
fn from_edges_refuses_the_sentinel_endpoint() {
    let _: Graph<(), (), Directed, u16> = Graph::from_edges([(0u16, u16::MAX)]);
}

#[test]
fn invariants_detect_nothing_on_dense_graph() {
    let mut graph: UnGraph<usize, ()> = UnGraph::new_undirected();
    let nodes: Vec<_> = (0..6).map(|i| graph.add_node(i)).collect();
    for i in 0..nodes.len() {
        for j in i..nodes.len() {
            graph.add_edge(nodes[i], nodes[j], ()).unwrap();
        }
    }
    assert_eq!(graph.edge_count(), 21);
    assert!(graph.validate_invariants());
}

#[test]
fn capacity_and_membership() {
    let mut graph: UnGraph<(), ()> = UnGraph::default();
    graph.reserve_nodes(8);
    graph.reserve_edges(8);
    assert!(graph.is_empty());

    let a = graph.add_node(());
    let e = graph.add_edge(a, a, ()).unwrap();
    assert!(graph.contains_node(a));
    assert!(graph.contains_edge(e));
    assert!(!graph.contains_node(NodeIndex::new(1)));
    assert!(!graph.contains_edge(EdgeIndex::end()));
    assert_eq!(graph.raw_nodes().len(), 1);
}

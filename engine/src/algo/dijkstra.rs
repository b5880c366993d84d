//! Two variants of Dijkstra
//!
//! `array_scan` is the classic `O(n²)` formulation which finds the next node to settle by scanning all nodes.
//! `generic_dijkstra` keeps the frontier in an indexed heap instead.
//! Both settle nodes in order of `(distance, node id)`, so ties always go to the lowest id
//! and both produce exactly the same distances and paths.
//!
//! All per query state is allocated fresh for each query.

use super::*;
use crate::datastr::index_heap::*;

pub mod array_scan;
pub mod generic_dijkstra;
pub mod query;

pub use generic_dijkstra::GenericDijkstra;

/// Priority Queue entries
#[derive(Copy, Clone, Eq, PartialEq, Debug, PartialOrd, Ord)]
pub struct State {
    pub distance: Weight,
    pub node: NodeId,
}

impl Indexing for State {
    #[inline]
    fn as_index(&self) -> usize {
        self.node as usize
    }
}

/// Shortest path from `from` to `to` with the array scan variant.
///
/// Both ids have to be valid nodes of `graph`.
pub fn shortest_path<G: LinkIterable<Link>>(graph: &G, from: NodeId, to: NodeId) -> QueryResult {
    let mut dijkstra = array_scan::ArrayScanDijkstra::new(graph, from);
    dijkstra.run();
    dijkstra.result(to)
}

/// Walk the predecessor links back from `to` until `from` is reached.
fn node_path(predecessors: &[NodeId], from: NodeId, to: NodeId) -> Vec<NodeId> {
    let mut path = vec![to];

    while let Some(&last) = path.last().filter(|&&node| node != from) {
        path.push(predecessors[last as usize]);
    }

    path.reverse();

    path
}

/// Build the result for `to` from the final search state.
fn query_result(distances: &[Weight], predecessors: &[NodeId], from: NodeId, to: NodeId) -> QueryResult {
    let distance = distances[to as usize];
    if distance >= INFINITY {
        return QueryResult::Unreachable;
    }

    QueryResult::Found {
        distance,
        path: node_path(predecessors, from, to),
    }
}

//! Something with graphs 🤷‍♂️
//!
//! Several traits and structs for working with graphs.

pub mod adjacency_lists_graph;
pub mod first_out_graph;

pub use self::adjacency_lists_graph::LocationGraph;
pub use self::first_out_graph::{FirstOutGraph, OwnedGraph};

/// Node ids are 32bit unsigned ints
pub type NodeId = u32;
/// Edge ids are 32bit unsigned ints
pub type EdgeId = u32;
/// Basic weights are 32bit unsigned ints
pub type Weight = u32;
/// A sufficiently large infinity constant.
/// Set to `u32::MAX / 2` so that `INFINITY + x` for `x <= INFINITY` does not overflow.
pub const INFINITY: Weight = std::u32::MAX / 2;
/// Largest weight a single link may carry.
pub const MAX_WEIGHT: Weight = INFINITY / 2;

/// Simple struct for weighted links.
/// No behaviour, just a pure data struct.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Link {
    pub node: NodeId,
    pub weight: Weight,
}

/// Base trait for graphs.
/// Interesting behaviour will be added through subtraits.
pub trait Graph {
    fn num_nodes(&self) -> usize;
    fn num_arcs(&self) -> usize;
    fn degree(&self, node: NodeId) -> usize;
}

pub trait LinkIterable<Link>: Graph {
    /// Type of the outgoing neighbor iterator.
    type Iter<'a>: Iterator<Item = Link>
    where
        Self: 'a;

    /// Get a iterator over the outgoing links of the given node.
    fn link_iter(&self, node: NodeId) -> Self::Iter<'_>;
}

/// Weight of the lightest link from `from` to `to`, if there is any.
/// Parallel links are allowed, so all of them have to be looked at.
pub fn lightest_link<G: LinkIterable<Link>>(graph: &G, from: NodeId, to: NodeId) -> Option<Weight> {
    graph.link_iter(from).filter(|link| link.node == to).map(|link| link.weight).min()
}

/// Build the adjacency lists of an undirected graph from `(tail, head, weight)` triples.
/// Each triple ends up in both directions.
pub fn undirected_adjacency_lists(num_nodes: usize, edges: &[(NodeId, NodeId, Weight)]) -> Vec<Vec<Link>> {
    let mut adjacency_lists: Vec<Vec<Link>> = (0..num_nodes).map(|_| Vec::new()).collect();
    for &(tail, head, weight) in edges {
        adjacency_lists[tail as usize].push(Link { node: head, weight });
        adjacency_lists[head as usize].push(Link { node: tail, weight });
    }
    adjacency_lists
}

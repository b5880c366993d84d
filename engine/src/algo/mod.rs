//! Shortest path queries between locations.

use crate::datastr::graph::*;

pub mod dijkstra;

/// Simply a source-target pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    pub from: NodeId,
    pub to: NodeId,
}

/// Outcome of a single query.
/// A destination without any path from the source is an ordinary result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    Unreachable,
    Found {
        distance: Weight,
        /// Source to destination, both included.
        path: Vec<NodeId>,
    },
}

impl QueryResult {
    pub fn distance(&self) -> Option<Weight> {
        match self {
            QueryResult::Found { distance, .. } => Some(*distance),
            QueryResult::Unreachable => None,
        }
    }

    pub fn path(&self) -> Option<&[NodeId]> {
        match self {
            QueryResult::Found { path, .. } => Some(path),
            QueryResult::Unreachable => None,
        }
    }
}

/// Anything that can answer shortest path queries.
pub trait QueryServer {
    fn query(&mut self, query: Query) -> QueryResult;
}

/// One step of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leg {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

/// Split a node path into its legs.
/// The weight of each leg is looked up again in the graph; with parallel links the lightest one is used,
/// which is the one the search relaxed over.
pub fn route_legs<G: LinkIterable<Link>>(graph: &G, path: &[NodeId]) -> Vec<Leg> {
    path.windows(2)
        .map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            let weight = lightest_link(graph, from, to).expect("consecutive path nodes have to be linked");
            Leg { from, to, weight }
        })
        .collect()
}

//! Growable graph of named locations.
//!
//! Location names are mapped to dense node ids in the order they are first seen.
//! Ids are never reassigned and nothing is ever removed, so an id handed out once stays valid.
//! Each location owns a list of its outgoing links.
//! Once everything is resolved, `to_owned_graph` freezes the adjacency into a `FirstOutGraph`.

use super::*;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct LocationGraph {
    names: Vec<String>,
    ids: HashMap<String, NodeId>,
    outgoing: Vec<Vec<Link>>,
}

impl LocationGraph {
    pub fn new() -> LocationGraph {
        Self::default()
    }

    /// Id of the location with the given name.
    /// Unknown names get the next free id and an empty adjacency list.
    /// Names are compared exactly, so `Berlin` and `berlin` are two locations.
    pub fn resolve_location(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }

        let id = self.names.len() as NodeId;
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        self.outgoing.push(Vec::new());
        id
    }

    /// Id of the location with the given name, without creating it.
    pub fn location_id(&self, name: &str) -> Option<NodeId> {
        self.ids.get(name).copied()
    }

    /// Add a directed link.
    /// Parallel links are kept, the lighter one wins during relaxation anyway.
    pub fn add_connection(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        assert!((to as usize) < self.num_nodes());
        self.outgoing[from as usize].push(Link { node: to, weight });
    }

    /// Add a link in both directions with the same weight.
    pub fn add_undirected(&mut self, a: NodeId, b: NodeId, weight: Weight) {
        self.add_connection(a, b, weight);
        self.add_connection(b, a, weight);
    }

    pub fn name(&self, node: NodeId) -> &str {
        &self.names[node as usize]
    }

    /// All locations with their ids, ordered by id.
    pub fn locations(&self) -> impl Iterator<Item = (NodeId, &str)> + '_ {
        self.names.iter().enumerate().map(|(id, name)| (id as NodeId, name.as_str()))
    }

    pub fn to_owned_graph(&self) -> OwnedGraph {
        OwnedGraph::from_adjancecy_lists(self.outgoing.clone())
    }
}

impl Graph for LocationGraph {
    fn num_nodes(&self) -> usize {
        self.names.len()
    }

    fn num_arcs(&self) -> usize {
        self.outgoing.iter().map(Vec::len).sum()
    }

    fn degree(&self, node: NodeId) -> usize {
        self.outgoing[node as usize].len()
    }
}

impl LinkIterable<Link> for LocationGraph {
    type Iter<'a> = std::iter::Copied<std::slice::Iter<'a, Link>>
    where
        Self: 'a;

    fn link_iter(&self, node: NodeId) -> Self::Iter<'_> {
        self.outgoing[node as usize].iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolving_is_idempotent() {
        let mut graph = LocationGraph::new();
        let a = graph.resolve_location("A");
        let b = graph.resolve_location("B");
        assert_eq!((a, b), (0, 1));
        assert_eq!(graph.resolve_location("A"), a);
        assert_eq!(graph.num_nodes(), 2);
        assert_eq!(graph.location_id("B"), Some(b));
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut graph = LocationGraph::new();
        assert_ne!(graph.resolve_location("Berlin"), graph.resolve_location("berlin"));
        assert_eq!(graph.location_id("BERLIN"), None);
        assert_eq!(graph.num_nodes(), 2);
    }

    #[test]
    fn undirected_connections_and_parallel_links() {
        let mut graph = LocationGraph::new();
        let a = graph.resolve_location("A");
        let b = graph.resolve_location("B");
        graph.add_undirected(a, b, 5);
        graph.add_undirected(a, b, 3);

        assert_eq!(graph.num_arcs(), 4);
        assert_eq!(graph.degree(a), 2);
        assert_eq!(graph.link_iter(b).collect::<Vec<_>>(), vec![Link { node: a, weight: 5 }, Link { node: a, weight: 3 }]);
        assert_eq!(lightest_link(&graph, a, b), Some(3));
    }

    #[test]
    fn listing_in_first_seen_order() {
        let mut graph = LocationGraph::new();
        for name in ["Paris", "Rome", "Paris", "Oslo"] {
            graph.resolve_location(name);
        }
        assert_eq!(graph.locations().collect::<Vec<_>>(), vec![(0, "Paris"), (1, "Rome"), (2, "Oslo")]);
        assert_eq!(graph.name(2), "Oslo");
    }

    #[test]
    fn freezing_keeps_links() {
        let mut graph = LocationGraph::new();
        let a = graph.resolve_location("A");
        let b = graph.resolve_location("B");
        let c = graph.resolve_location("C");
        graph.add_undirected(a, b, 5);
        graph.add_undirected(b, c, 3);

        let frozen = graph.to_owned_graph();
        assert_eq!(frozen.num_nodes(), 3);
        assert_eq!(frozen.num_arcs(), graph.num_arcs());
        for node in 0..3 {
            assert_eq!(frozen.link_iter(node).collect::<Vec<_>>(), graph.link_iter(node).collect::<Vec<_>>());
        }
    }
}

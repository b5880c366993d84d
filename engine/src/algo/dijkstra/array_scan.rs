//! Dijkstra without a priority queue.
//!
//! Each round scans all nodes for the unvisited one with the smallest tentative distance,
//! settles it and relaxes its outgoing links.
//! `O(n²)` comparisons plus `O(m)` relaxations, which is plenty for graphs of a few hundred locations.

use super::*;

pub struct ArrayScanDijkstra<'g, G> {
    graph: &'g G,
    from: NodeId,

    distances: Vec<Weight>,
    visited: Vec<bool>,
    predecessors: Vec<NodeId>,

    num_settled_nodes: usize,
    num_relaxed_arcs: usize,
}

impl<'g, G: LinkIterable<Link>> ArrayScanDijkstra<'g, G> {
    /// Fresh search state for a search starting at `from`.
    pub fn new(graph: &'g G, from: NodeId) -> Self {
        let n = graph.num_nodes();
        assert!((from as usize) < n, "source {} is not a node of the graph", from);

        let mut distances = vec![INFINITY; n];
        distances[from as usize] = 0;
        // n marks an unset predecessor
        let mut predecessors = vec![n as NodeId; n];
        predecessors[from as usize] = from;

        ArrayScanDijkstra {
            graph,
            from,
            distances,
            visited: vec![false; n],
            predecessors,
            num_settled_nodes: 0,
            num_relaxed_arcs: 0,
        }
    }

    /// The unvisited node with the smallest finite distance.
    /// The scan runs in id order and only a strictly smaller distance replaces the candidate,
    /// so ties go to the lowest id.
    fn next_frontier_node(&self) -> Option<NodeId> {
        let mut best: Option<NodeId> = None;
        let mut best_distance = INFINITY;

        for (node, (&distance, &visited)) in self.distances.iter().zip(self.visited.iter()).enumerate() {
            if !visited && distance < best_distance {
                best_distance = distance;
                best = Some(node as NodeId);
            }
        }

        best
    }

    /// Settle the next frontier node.
    /// Returns `None` once every node reachable from the source has been settled.
    pub fn settle_next_node(&mut self) -> Option<NodeId> {
        let node = self.next_frontier_node()?;
        self.visited[node as usize] = true;
        self.num_settled_nodes += 1;

        let distance = self.distances[node as usize];
        for link in self.graph.link_iter(node) {
            self.num_relaxed_arcs += 1;
            let linked = distance.saturating_add(link.weight);

            if linked < self.distances[link.node as usize] {
                // Relaxation, we have now found a better way
                self.distances[link.node as usize] = linked;
                self.predecessors[link.node as usize] = node;
            }
        }

        Some(node)
    }

    /// Settle at most `n` nodes, stopping early once the rest is unreachable.
    pub fn run(&mut self) {
        for _ in 0..self.graph.num_nodes() {
            if self.settle_next_node().is_none() {
                break;
            }
        }
    }

    pub fn tentative_distance(&self, node: NodeId) -> Weight {
        self.distances[node as usize]
    }

    pub fn is_visited(&self, node: NodeId) -> bool {
        self.visited[node as usize]
    }

    pub fn predecessor(&self, node: NodeId) -> NodeId {
        self.predecessors[node as usize]
    }

    pub fn result(&self, to: NodeId) -> QueryResult {
        query_result(&self.distances, &self.predecessors, self.from, to)
    }

    pub fn num_settled_nodes(&self) -> usize {
        self.num_settled_nodes
    }

    pub fn num_relaxed_arcs(&self) -> usize {
        self.num_relaxed_arcs
    }
}

/// Query server running a complete array scan search for every query.
pub struct Server<'g, G> {
    graph: &'g G,
}

impl<'g, G: LinkIterable<Link>> Server<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Server { graph }
    }
}

impl<'g, G: LinkIterable<Link>> QueryServer for Server<'g, G> {
    fn query(&mut self, query: Query) -> QueryResult {
        report!("algo", "Array Scan Dijkstra");
        let mut dijkstra = ArrayScanDijkstra::new(self.graph, query.from);
        dijkstra.run();

        report!("num_settled_nodes", dijkstra.num_settled_nodes());
        report!("num_relaxed_arcs", dijkstra.num_relaxed_arcs());

        dijkstra.result(query.to)
    }
}

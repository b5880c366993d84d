//! Dijkstra with an indexed heap as priority queue.

use super::*;

pub struct GenericDijkstra<'g, G> {
    graph: &'g G,
    from: NodeId,

    distances: Vec<Weight>,
    predecessors: Vec<NodeId>,
    queue: IndexdMinHeap<State>,

    num_relaxed_arcs: usize,
    num_queue_pushs: usize,
}

impl<'g, G: LinkIterable<Link>> GenericDijkstra<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        let n = graph.num_nodes();

        GenericDijkstra {
            graph,
            from: n as NodeId,

            // initialize tentative distances to INFINITY
            distances: vec![INFINITY; n],
            predecessors: vec![n as NodeId; n],
            queue: IndexdMinHeap::new(n),

            num_relaxed_arcs: 0,
            num_queue_pushs: 0,
        }
    }

    pub fn initialize_query(&mut self, from: NodeId) {
        assert!((from as usize) < self.graph.num_nodes(), "source {} is not a node of the graph", from);

        // reset
        let n = self.graph.num_nodes();
        self.from = from;
        self.queue = IndexdMinHeap::new(n);
        self.distances.iter_mut().for_each(|distance| *distance = INFINITY);
        self.predecessors.iter_mut().for_each(|predecessor| *predecessor = n as NodeId);
        self.num_relaxed_arcs = 0;
        self.num_queue_pushs = 0;

        // Start with origin
        self.distances[from as usize] = 0;
        self.predecessors[from as usize] = from;
        self.queue.push(State { distance: 0, node: from });
        self.num_queue_pushs += 1;
    }

    fn settle_next_node(&mut self) -> Option<NodeId> {
        // Examine the frontier with lower distance nodes first (min-heap)
        let State { distance, node } = self.queue.pop()?;

        // For each node we can reach, see if we can find a way with
        // a lower distance going through this node
        for link in self.graph.link_iter(node) {
            self.num_relaxed_arcs += 1;
            let next = State {
                distance: distance.saturating_add(link.weight),
                node: link.node,
            };

            // If so, add it to the frontier and continue
            if next.distance < self.distances[next.node as usize] {
                // Relaxation, we have now found a better way
                self.distances[next.node as usize] = next.distance;
                self.predecessors[next.node as usize] = node;

                if self.queue.contains_index(next.as_index()) {
                    self.queue.decrease_key(next);
                } else {
                    self.num_queue_pushs += 1;
                    self.queue.push(next);
                }
            }
        }

        Some(node)
    }

    pub fn tentative_distance(&self, node: NodeId) -> Weight {
        self.distances[node as usize]
    }

    pub fn predecessor(&self, node: NodeId) -> NodeId {
        self.predecessors[node as usize]
    }

    /// Result for `to`.
    /// Only final once `to` was settled or the queue ran empty.
    pub fn result(&self, to: NodeId) -> QueryResult {
        query_result(&self.distances, &self.predecessors, self.from, to)
    }

    pub fn num_relaxed_arcs(&self) -> usize {
        self.num_relaxed_arcs
    }

    pub fn num_queue_pushs(&self) -> usize {
        self.num_queue_pushs
    }
}

impl<'g, G: LinkIterable<Link>> Iterator for GenericDijkstra<'g, G> {
    type Item = NodeId;

    #[inline]
    fn next(&mut self) -> Option<NodeId> {
        self.settle_next_node()
    }
}

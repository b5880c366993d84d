use super::*;
use generic_dijkstra::*;

/// Query server which stops the heap based search as soon as the destination is settled.
pub struct Server<'g, G> {
    dijkstra: GenericDijkstra<'g, G>,
}

impl<'g, G: LinkIterable<Link>> Server<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self {
            dijkstra: GenericDijkstra::new(graph),
        }
    }

    pub fn distance(&mut self, query: Query) -> Option<Weight> {
        report!("algo", "Dijkstra Query");
        self.dijkstra.initialize_query(query.from);

        let mut num_queue_pops = 0;
        let mut distance = None;
        while let Some(node) = self.dijkstra.next() {
            num_queue_pops += 1;
            if node == query.to {
                distance = Some(self.dijkstra.tentative_distance(node));
                break;
            }
        }

        report!("num_queue_pops", num_queue_pops);
        report!("num_queue_pushs", self.dijkstra.num_queue_pushs());
        report!("num_relaxed_arcs", self.dijkstra.num_relaxed_arcs());

        distance.filter(|&distance| distance < INFINITY)
    }
}

impl<'g, G: LinkIterable<Link>> QueryServer for Server<'g, G> {
    fn query(&mut self, query: Query) -> QueryResult {
        match self.distance(query) {
            Some(_) => self.dijkstra.result(query.to),
            None => QueryResult::Unreachable,
        }
    }
}

//! Static, read-only graph representation.
//!
//! Nodes and edges can be identified by a unique id, going from `0` to `n-1` and `m-1` respectively, where `n` is the number of nodes and `m` the number of directed arcs.
//! We store the graph as an adjacency array using three collections: `first_out`, `head` and `weight`.
//! `head` and `weight` have each `m` elements.
//! `first_out` has `n+1` elements.
//! The first element of `first_out` is always 0 and the last one `m`.
//! `first_out[x]` contains the id of the first edge that is an outgoing edge of node `x`.
//! Thus, `head[first_out[x]..first_out[x+1]]` contains all neighbors of `x`.

use super::*;
use std::ops::Range;

/// Container struct for the three collections of a graph.
/// Generic over the types of the three data collections.
/// Anything that can be viewed as a slice works, owned (`Vec<T>`, `Box<[T]>`) as well as borrowed (`&[T]`).
#[derive(Debug, Clone)]
pub struct FirstOutGraph<FirstOutContainer, HeadContainer, WeightContainer>
where
    FirstOutContainer: AsRef<[EdgeId]>,
    HeadContainer: AsRef<[NodeId]>,
    WeightContainer: AsRef<[Weight]>,
{
    // index of first edge of each node +1 entry in the end
    first_out: FirstOutContainer,
    // the node ids to which each edge points
    head: HeadContainer,
    // the weight of each edge
    weight: WeightContainer,
}

pub type OwnedGraph = FirstOutGraph<Vec<EdgeId>, Vec<NodeId>, Vec<Weight>>;

impl<FirstOutContainer, HeadContainer, WeightContainer> FirstOutGraph<FirstOutContainer, HeadContainer, WeightContainer>
where
    FirstOutContainer: AsRef<[EdgeId]>,
    HeadContainer: AsRef<[NodeId]>,
    WeightContainer: AsRef<[Weight]>,
{
    /// Borrow a slice of the first_out data
    pub fn first_out(&self) -> &[EdgeId] {
        self.first_out.as_ref()
    }
    /// Borrow a slice of the head data
    pub fn head(&self) -> &[NodeId] {
        self.head.as_ref()
    }
    /// Borrow a slice of the weight data
    pub fn weight(&self) -> &[Weight] {
        self.weight.as_ref()
    }

    /// Create a new `FirstOutGraph` from the three containers.
    pub fn new(first_out: FirstOutContainer, head: HeadContainer, weight: WeightContainer) -> Self {
        assert!(first_out.as_ref().len() < <NodeId>::max_value() as usize);
        assert!(head.as_ref().len() < <EdgeId>::max_value() as usize);
        assert_eq!(first_out.as_ref().first().copied(), Some(0));
        assert_eq!(first_out.as_ref().last().map(|&m| m as usize), Some(head.as_ref().len()));
        assert_eq!(weight.as_ref().len(), head.as_ref().len());

        FirstOutGraph { first_out, head, weight }
    }

    /// Range of the ids of the outgoing edges of `node`
    pub fn neighbor_edge_indices(&self, node: NodeId) -> Range<usize> {
        let node = node as usize;
        (self.first_out()[node] as usize)..(self.first_out()[node + 1] as usize)
    }
}

impl OwnedGraph {
    pub fn from_adjancecy_lists(adjancecy_lists: Vec<Vec<Link>>) -> OwnedGraph {
        // create first_out array by doing a prefix sum over the adjancecy list sizes
        let first_out = std::iter::once(0)
            .chain(adjancecy_lists.iter().scan(0, |prefix_sum, neighbors| {
                *prefix_sum += neighbors.len() as EdgeId;
                Some(*prefix_sum)
            }))
            .collect();

        // append all adjancecy list and split the pairs into two seperate vectors
        let (head, weight) = adjancecy_lists
            .into_iter()
            .flat_map(|neighbors| neighbors.into_iter().map(|Link { node, weight }| (node, weight)))
            .unzip();

        OwnedGraph::new(first_out, head, weight)
    }
}

impl<FirstOutContainer, HeadContainer, WeightContainer> Graph for FirstOutGraph<FirstOutContainer, HeadContainer, WeightContainer>
where
    FirstOutContainer: AsRef<[EdgeId]>,
    HeadContainer: AsRef<[NodeId]>,
    WeightContainer: AsRef<[Weight]>,
{
    fn num_nodes(&self) -> usize {
        self.first_out().len() - 1
    }

    fn num_arcs(&self) -> usize {
        self.head().len()
    }

    fn degree(&self, node: NodeId) -> usize {
        self.neighbor_edge_indices(node).len()
    }
}

impl<FirstOutContainer, HeadContainer, WeightContainer> LinkIterable<Link> for FirstOutGraph<FirstOutContainer, HeadContainer, WeightContainer>
where
    FirstOutContainer: AsRef<[EdgeId]>,
    HeadContainer: AsRef<[NodeId]>,
    WeightContainer: AsRef<[Weight]>,
{
    #[allow(clippy::type_complexity)]
    type Iter<'a> = std::iter::Map<std::iter::Zip<std::slice::Iter<'a, NodeId>, std::slice::Iter<'a, Weight>>, fn((&NodeId, &Weight)) -> Link>
    where
        Self: 'a;

    #[inline]
    fn link_iter(&self, node: NodeId) -> Self::Iter<'_> {
        let range = self.neighbor_edge_indices(node);
        self.head()[range.clone()]
            .iter()
            .zip(self.weight()[range].iter())
            .map(|(&neighbor, &weight)| Link { node: neighbor, weight })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_sum_over_degrees() {
        let graph = OwnedGraph::from_adjancecy_lists(vec![
            vec![Link { node: 1, weight: 5 }, Link { node: 2, weight: 10 }],
            vec![],
            vec![Link { node: 0, weight: 10 }],
        ]);

        assert_eq!(graph.first_out(), &[0, 2, 2, 3]);
        assert_eq!(graph.head(), &[1, 2, 0]);
        assert_eq!(graph.weight(), &[5, 10, 10]);
        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_arcs(), 3);
        assert_eq!(graph.degree(1), 0);
        assert_eq!(graph.link_iter(0).collect::<Vec<_>>(), vec![Link { node: 1, weight: 5 }, Link { node: 2, weight: 10 }]);
    }

    #[test]
    fn empty_graph() {
        let graph = OwnedGraph::from_adjancecy_lists(Vec::new());
        assert_eq!(graph.num_nodes(), 0);
        assert_eq!(graph.num_arcs(), 0);
    }

    #[test]
    #[should_panic]
    fn inconsistent_containers_are_rejected() {
        OwnedGraph::new(vec![0, 2], vec![1], vec![3]);
    }
}

use crate::algorithm::{Distance, Node, WeightedEdge};
use crate::graph::traits::{Graph, MutableGraph};
use std::collections::HashMap;

/// A directed graph implementation using adjacency lists
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, D>
where
    N: Node,
    D: Distance,
{
    /// Outgoing edges for each node: node -> [(weight, target)]
    outgoing_edges: HashMap<N, Vec<WeightedEdge<D, N>>>,
}

impl<N, D> DirectedGraph<N, D>
where
    N: Node,
    D: Distance,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            outgoing_edges: HashMap::new(),
        }
    }

    /// Builds a graph from `(from, to, weight)` triples
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, D)>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Iterates over all edges as `(from, edge)` pairs
    pub fn edges(&self) -> impl Iterator<Item = (&N, &WeightedEdge<D, N>)> {
        self.outgoing_edges
            .iter()
            .flat_map(|(from, edges)| edges.iter().map(move |edge| (from, edge)))
    }
}

impl<N, D> Default for DirectedGraph<N, D>
where
    N: Node,
    D: Distance,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, D> Graph<N, D> for DirectedGraph<N, D>
where
    N: Node,
    D: Distance,
{
    fn node_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn outgoing_edges(&self, node: &N) -> Vec<WeightedEdge<D, N>> {
        self.outgoing_edges.get(node).cloned().unwrap_or_default()
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<D> {
        self.outgoing_edges
            .get(from)?
            .iter()
            .find(|edge| edge.node == *to)
            .map(|edge| edge.distance)
    }
}

impl<N, D> MutableGraph<N, D> for DirectedGraph<N, D>
where
    N: Node,
    D: Distance,
{
    fn add_node(&mut self, node: N) -> bool {
        if self.outgoing_edges.contains_key(&node) {
            return false;
        }
        self.outgoing_edges.insert(node, Vec::new());
        true
    }

    fn add_edge(&mut self, from: N, to: N, weight: D) {
        self.add_node(to.clone());
        let outgoing = self.outgoing_edges.entry(from).or_default();

        // Check if edge already exists and update it if it does
        if let Some(edge) = outgoing.iter_mut().find(|edge| edge.node == to) {
            edge.distance = weight;
            return;
        }

        outgoing.push(WeightedEdge::new(weight, to));
    }
}

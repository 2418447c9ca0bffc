use crate::algorithm::{Distance, Node, WeightedEdge};

/// Trait representing an explicit weighted directed graph.
///
/// The shortest path engine only needs `outgoing_edges`, so any `Graph` can
/// be searched with `|node| graph.outgoing_edges(node)` as its adjacency.
pub trait Graph<N, D>
where
    N: Node,
    D: Distance,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the outgoing edges from a node; unknown nodes have none
    fn outgoing_edges(&self, node: &N) -> Vec<WeightedEdge<D, N>>;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &N, to: &N) -> Option<D>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<N, D>: Graph<N, D>
where
    N: Node,
    D: Distance,
{
    /// Adds a node; returns false if it was already present
    fn add_node(&mut self, node: N) -> bool;

    /// Adds or replaces a directed edge, inserting missing endpoints
    fn add_edge(&mut self, from: N, to: N, weight: D);
}

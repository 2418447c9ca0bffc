use crate::graph::{DirectedGraph, MutableGraph};
use rand::prelude::*;

/// Generates a random directed graph on nodes `0..node_count` with roughly
/// `edge_factor * node_count` edges and integer weights in `0..=max_weight`.
///
/// Zero weights are allowed on purpose so that equal-cost ties (and zero-cost
/// cycles) show up regularly. Self-loops are skipped.
pub fn generate_random_graph<R: Rng + ?Sized>(
    node_count: usize,
    edge_factor: f64,
    max_weight: u32,
    rng: &mut R,
) -> DirectedGraph<usize, u32> {
    assert!(node_count > 0, "node_count must be positive");

    let mut graph = DirectedGraph::new();
    for node in 0..node_count {
        graph.add_node(node);
    }

    let num_edges = (edge_factor * node_count as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..node_count);
        let v = rng.gen_range(0..node_count);
        if u != v {
            graph.add_edge(u, v, rng.gen_range(0..=max_weight));
        }
    }

    graph
}

/// Generates a layered graph where every node of a layer connects to every
/// node of the next layer with weight 1.
///
/// Node 0 is the source, nodes `1..=layers * width` form the layers and the
/// last node is the sink, so the sink is reached by `width^layers` distinct
/// shortest paths of cost `layers + 1` and every node lies on one of them.
pub fn generate_layered_graph(layers: usize, width: usize) -> DirectedGraph<usize, u32> {
    assert!(layers > 0 && width > 0, "layers and width must be positive");

    let mut graph = DirectedGraph::new();
    let sink = layers * width + 1;
    let layer = |index: usize| (1 + index * width)..(1 + (index + 1) * width);

    for node in layer(0) {
        graph.add_edge(0, node, 1);
    }
    for index in 1..layers {
        for from in layer(index - 1) {
            for to in layer(index) {
                graph.add_edge(from, to, 1);
            }
        }
    }
    for node in layer(layers - 1) {
        graph.add_edge(node, sink, 1);
    }

    graph
}

pub mod traits;
pub mod dijkstra;

pub use traits::{infinity, Distance, Node, ShortestPathEngine, ShortestPathTree, WeightedEdge};

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Add, Sub};

use num_traits::{Bounded, Zero};

use crate::Result;

/// Accumulated path cost.
///
/// Any ordered numeric type with a zero and bounds qualifies: the unsigned
/// and signed integers, or `OrderedFloat`. `Sub` is only used to test a sum
/// against the bounds before adding.
pub trait Distance:
    Copy + Ord + Debug + Zero + Bounded + Add<Output = Self> + Sub<Output = Self>
{
}

impl<T> Distance for T where
    T: Copy + Ord + Debug + Zero + Bounded + Add<Output = T> + Sub<Output = T>
{
}

/// Opaque graph vertex identifier. Only equality and hashing are needed.
pub trait Node: Clone + Eq + Hash {}

impl<T> Node for T where T: Clone + Eq + Hash {}

/// The "not yet reached" distance: the largest representable value.
pub fn infinity<D: Distance>() -> D {
    D::max_value()
}

/// One directed transition out of a node together with its traversal cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeightedEdge<D, N> {
    /// Cost of traversing the edge
    pub distance: D,

    /// Destination node
    pub node: N,
}

impl<D, N> WeightedEdge<D, N> {
    pub fn new(distance: D, node: N) -> Self {
        WeightedEdge { distance, node }
    }
}

impl<D, N> From<(D, N)> for WeightedEdge<D, N> {
    fn from((distance, node): (D, N)) -> Self {
        WeightedEdge { distance, node }
    }
}

/// Result of a full shortest path run from a single source
#[derive(Debug, Clone)]
pub struct ShortestPathTree<N, D>
where
    N: Node,
    D: Distance,
{
    /// Source node of the run
    pub(crate) source: N,

    /// Best distance for every reached node; the source is always present
    pub(crate) distances: HashMap<N, D>,

    /// Every node that reaches the key at the key's optimal distance
    pub(crate) predecessors: HashMap<N, HashSet<N>>,
}

impl<N, D> ShortestPathTree<N, D>
where
    N: Node,
    D: Distance,
{
    pub fn source(&self) -> &N {
        &self.source
    }

    /// Shortest distance to `node`, or `None` if it was never reached
    pub fn distance(&self, node: &N) -> Option<D> {
        self.distances.get(node).copied()
    }

    /// Shortest distance to `node`, with unreached nodes at [`infinity`]
    pub fn distance_or_infinity(&self, node: &N) -> D {
        self.distance(node).unwrap_or_else(infinity)
    }

    pub fn is_reachable(&self, node: &N) -> bool {
        self.distances.contains_key(node)
    }

    /// Number of reached nodes, source included
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn distances(&self) -> &HashMap<N, D> {
        &self.distances
    }

    /// Immediate predecessors of `node` on some shortest path from the source
    pub fn predecessors(&self, node: &N) -> Option<&HashSet<N>> {
        self.predecessors.get(node)
    }

    pub fn predecessor_table(&self) -> &HashMap<N, HashSet<N>> {
        &self.predecessors
    }

    /// Consumes the tree, handing both tables to the caller
    pub fn into_tables(self) -> (HashMap<N, D>, HashMap<N, HashSet<N>>) {
        (self.distances, self.predecessors)
    }

    /// Finds the best distance among several candidate destinations.
    ///
    /// Returns that distance together with every reachable candidate that
    /// achieves it, or `None` if no candidate was reached.
    pub fn min_distance_among<'a, I>(&self, candidates: I) -> Option<(D, Vec<N>)>
    where
        I: IntoIterator<Item = &'a N>,
        N: 'a,
    {
        let mut best: Option<(D, Vec<N>)> = None;

        for candidate in candidates {
            let Some(distance) = self.distance(candidate) else {
                continue;
            };
            let improves = match &best {
                None => true,
                Some((best_distance, _)) => distance < *best_distance,
            };

            if improves {
                best = Some((distance, vec![candidate.clone()]));
            } else if let Some((best_distance, nodes)) = &mut best {
                if distance == *best_distance && !nodes.contains(candidate) {
                    nodes.push(candidate.clone());
                }
            }
        }

        best
    }

    /// Collects every node lying on any minimum-cost path from the source to
    /// any of `destinations`.
    ///
    /// Walks the predecessor table backwards with a worklist; the visited set
    /// keeps cyclic predecessor graphs (zero-weight ties) from looping.
    /// Unreached destinations contribute nothing.
    pub fn optimal_path_nodes<'a, I>(&self, destinations: I) -> HashSet<N>
    where
        I: IntoIterator<Item = &'a N>,
        N: 'a,
    {
        let mut visited = HashSet::new();
        let mut worklist = VecDeque::new();

        for destination in destinations {
            if self.is_reachable(destination) && visited.insert(destination.clone()) {
                worklist.push_back(destination.clone());
            }
        }

        while let Some(current) = worklist.pop_front() {
            let Some(previous) = self.predecessors.get(&current) else {
                continue;
            };
            for node in previous {
                if visited.insert(node.clone()) {
                    worklist.push_back(node.clone());
                }
            }
        }

        visited
    }

    /// Reconstructs one minimum-cost path from the source to `target`.
    ///
    /// Searches backwards through the predecessor table for the source and
    /// then replays the discovered links forwards, so a cycle of equal-cost
    /// ties can never trap the walk.
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        if !self.is_reachable(target) {
            return None;
        }

        // successor[p] = the node p leads to on the way to `target`
        let mut successor: HashMap<N, N> = HashMap::new();
        let mut visited = HashSet::from([target.clone()]);
        let mut worklist = VecDeque::from([target.clone()]);

        while let Some(current) = worklist.pop_front() {
            if current == self.source {
                let mut path = vec![current.clone()];
                let mut node = current;
                while let Some(next) = successor.get(&node) {
                    path.push(next.clone());
                    node = next.clone();
                }
                return Some(path);
            }

            let Some(previous) = self.predecessors.get(&current) else {
                continue;
            };
            for node in previous {
                if visited.insert(node.clone()) {
                    successor.insert(node.clone(), current.clone());
                    worklist.push_back(node.clone());
                }
            }
        }

        log::warn!("Predecessor walk found no way back to the source");
        None
    }
}

/// Object-safe interface over shortest path engines
pub trait ShortestPathEngine<N, D>
where
    N: Node,
    D: Distance,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest distances and predecessor sets for every node
    /// reachable from `start`
    fn shortest_paths(
        &self,
        start: N,
        adjacency: &mut dyn FnMut(&N) -> Vec<WeightedEdge<D, N>>,
    ) -> Result<ShortestPathTree<N, D>>;

    /// Compute the shortest distance from `start` to `target`, if reachable
    fn distance_to(
        &self,
        start: N,
        target: &N,
        adjacency: &mut dyn FnMut(&N) -> Vec<WeightedEdge<D, N>>,
    ) -> Result<Option<D>>;
}

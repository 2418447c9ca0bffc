use std::collections::{HashMap, HashSet};

use crate::algorithm::{
    infinity, Distance, Node, ShortestPathEngine, ShortestPathTree, WeightedEdge,
};
use crate::data_structures::Frontier;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm over an implicitly defined graph.
///
/// The graph is never materialised: an adjacency function is asked for the
/// outgoing edges of each node as the search settles it. Edge weights must be
/// non-negative; by default a negative weight aborts the run with
/// [`Error::InvalidWeight`]. A path whose cost does not fit in the distance
/// type aborts the run with [`Error::DistanceOverflow`].
#[derive(Debug, Clone)]
pub struct Dijkstra {
    /// Reject negative edge weights as they are seen
    validate_weights: bool,
}

/// Counters for a single run, reported at debug level
#[derive(Debug, Default)]
struct RunStats {
    settled: usize,
    stale: usize,
    relaxations: usize,
    ties: usize,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            validate_weights: true,
        }
    }

    /// Enables or disables the negative weight check
    pub fn with_weight_validation(mut self, validate: bool) -> Self {
        self.validate_weights = validate;
        self
    }

    /// Computes shortest distances from `start` to every reachable node,
    /// together with the predecessor sets of all minimum-cost paths.
    pub fn compute_all<N, D, I, F>(
        &self,
        start: N,
        mut adjacency: F,
    ) -> Result<ShortestPathTree<N, D>>
    where
        N: Node,
        D: Distance,
        I: IntoIterator<Item = WeightedEdge<D, N>>,
        F: FnMut(&N) -> I,
    {
        self.try_compute_all(start, |node| Ok::<_, Error>(adjacency(node)))
    }

    /// Computes the shortest distance from `start` to `target`, stopping as
    /// soon as `target` is settled. Returns `None` if it is unreachable.
    pub fn compute_to_target<N, D, I, F>(
        &self,
        start: N,
        target: &N,
        mut adjacency: F,
    ) -> Result<Option<D>>
    where
        N: Node,
        D: Distance,
        I: IntoIterator<Item = WeightedEdge<D, N>>,
        F: FnMut(&N) -> I,
    {
        self.try_compute_to_target(start, target, |node| Ok::<_, Error>(adjacency(node)))
    }

    /// Like [`Dijkstra::compute_all`], but with a fallible adjacency function.
    /// The first adjacency error aborts the run and is returned unchanged.
    pub fn try_compute_all<N, D, I, E, F>(
        &self,
        start: N,
        mut adjacency: F,
    ) -> std::result::Result<ShortestPathTree<N, D>, E>
    where
        N: Node,
        D: Distance,
        I: IntoIterator<Item = WeightedEdge<D, N>>,
        E: From<Error>,
        F: FnMut(&N) -> std::result::Result<I, E>,
    {
        let mut distances: HashMap<N, D> = HashMap::new();
        let mut predecessors: HashMap<N, HashSet<N>> = HashMap::new();
        let mut frontier = Frontier::new();
        let mut stats = RunStats::default();

        distances.insert(start.clone(), D::zero());
        frontier.push(start.clone(), D::zero());

        while let Some((current, distance)) = frontier.pop() {
            // Lazy deletion: a better entry for this node was already settled
            if distance > distances.get(&current).copied().unwrap_or_else(infinity) {
                stats.stale += 1;
                continue;
            }
            stats.settled += 1;

            for edge in adjacency(&current)? {
                self.check_weight(edge.distance)?;
                let candidate = checked_sum(distance, edge.distance)?;

                match distances.get(&edge.node).copied() {
                    Some(best) if candidate > best => {}
                    Some(best) if candidate == best => {
                        stats.ties += 1;
                        predecessors
                            .entry(edge.node)
                            .or_default()
                            .insert(current.clone());
                    }
                    _ => {
                        stats.relaxations += 1;
                        distances.insert(edge.node.clone(), candidate);
                        // Strictly shorter: earlier predecessors are stale
                        predecessors.insert(edge.node.clone(), HashSet::from([current.clone()]));
                        frontier.push(edge.node, candidate);
                    }
                }
            }
        }

        log::debug!(
            "Dijkstra settled {} nodes ({} stale pops, {} relaxations, {} ties)",
            stats.settled,
            stats.stale,
            stats.relaxations,
            stats.ties
        );

        Ok(ShortestPathTree {
            source: start,
            distances,
            predecessors,
        })
    }

    /// Like [`Dijkstra::compute_to_target`], but with a fallible adjacency
    /// function. The first adjacency error aborts the run.
    pub fn try_compute_to_target<N, D, I, E, F>(
        &self,
        start: N,
        target: &N,
        mut adjacency: F,
    ) -> std::result::Result<Option<D>, E>
    where
        N: Node,
        D: Distance,
        I: IntoIterator<Item = WeightedEdge<D, N>>,
        E: From<Error>,
        F: FnMut(&N) -> std::result::Result<I, E>,
    {
        let mut distances: HashMap<N, D> = HashMap::new();
        let mut frontier = Frontier::new();
        let mut stats = RunStats::default();

        distances.insert(start.clone(), D::zero());
        frontier.push(start, D::zero());

        while let Some((current, distance)) = frontier.pop() {
            if distance > distances.get(&current).copied().unwrap_or_else(infinity) {
                stats.stale += 1;
                continue;
            }
            stats.settled += 1;

            if current == *target {
                log::debug!(
                    "Dijkstra reached target at {:?} after settling {} nodes",
                    distance,
                    stats.settled
                );
                return Ok(Some(distance));
            }

            for edge in adjacency(&current)? {
                self.check_weight(edge.distance)?;
                let candidate = checked_sum(distance, edge.distance)?;

                let improves = distances
                    .get(&edge.node)
                    .map_or(true, |&best| candidate < best);
                if improves {
                    stats.relaxations += 1;
                    distances.insert(edge.node.clone(), candidate);
                    frontier.push(edge.node, candidate);
                }
            }
        }

        log::debug!(
            "Dijkstra exhausted the frontier after settling {} nodes ({} stale pops); \
             target unreachable",
            stats.settled,
            stats.stale
        );
        Ok(None)
    }

    fn check_weight<D: Distance>(&self, weight: D) -> Result<()> {
        if self.validate_weights && weight < D::zero() {
            return Err(Error::InvalidWeight {
                weight: format!("{:?}", weight),
            });
        }
        Ok(())
    }
}

/// Adds an edge weight to a path distance, failing instead of wrapping when
/// the sum falls outside the distance type's bounds.
fn checked_sum<D: Distance>(distance: D, weight: D) -> Result<D> {
    let overflows = if weight > D::zero() {
        distance > D::max_value() - weight
    } else {
        distance < D::min_value() - weight
    };
    if overflows {
        return Err(Error::DistanceOverflow {
            distance: format!("{:?}", distance),
            weight: format!("{:?}", weight),
        });
    }
    Ok(distance + weight)
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, D> ShortestPathEngine<N, D> for Dijkstra
where
    N: Node,
    D: Distance,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn shortest_paths(
        &self,
        start: N,
        adjacency: &mut dyn FnMut(&N) -> Vec<WeightedEdge<D, N>>,
    ) -> Result<ShortestPathTree<N, D>> {
        self.compute_all(start, |node: &N| adjacency(node))
    }

    fn distance_to(
        &self,
        start: N,
        target: &N,
        adjacency: &mut dyn FnMut(&N) -> Vec<WeightedEdge<D, N>>,
    ) -> Result<Option<D>> {
        self.compute_to_target(start, target, |node: &N| adjacency(node))
    }
}

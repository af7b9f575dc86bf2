use crate::error::{Result, RoadtripError};
use crate::graph::store::Distance;
use crate::graph::types::{Route, RouteLeg, RouteOutcome};
use crate::graph::GraphProvider;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Frontier entry; wrapped in `Reverse` so `BinaryHeap` pops the cheapest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapEntry {
    pub node_id: String,
    pub accumulated_cost: Distance,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Ties settle by identifier so equal-length routes come out the same every run
        self.accumulated_cost
            .cmp(&other.accumulated_cost)
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}

/// Predecessor of a node in the shortest-path tree and the weight of the edge used
#[derive(Debug, Clone, PartialEq, Eq)]
struct Predecessor {
    node_id: String,
    weight: Distance,
}

/// Distances and predecessor links from one source to everything it reaches.
///
/// Nodes absent from `distances` were never reached (infinite distance).
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    distances: HashMap<String, Distance>,
    predecessors: HashMap<String, Predecessor>,
}

impl ShortestPathTree {
    /// Final distance to `target`, or `None` when it is unreachable
    pub fn distance_to(&self, target: &str) -> Option<Distance> {
        self.distances.get(target).copied()
    }

    /// Identifiers from source to `target`.
    ///
    /// Returns `None` when `target` never received a predecessor, which covers
    /// both unreachable targets and `target == source`.
    pub fn path_to(&self, target: &str) -> Option<Vec<String>> {
        self.legs_to(target).map(|legs| {
            let mut path: Vec<String> = legs.iter().map(|leg| leg.from.clone()).collect();
            path.push(target.to_string());
            path
        })
    }

    /// Legs from source to `target`, with the weight of every edge taken
    fn legs_to(&self, target: &str) -> Option<Vec<RouteLeg>> {
        if !self.predecessors.contains_key(target) {
            return None;
        }

        let mut legs = Vec::new();
        let mut current = target;
        while let Some(pred) = self.predecessors.get(current) {
            legs.push(RouteLeg {
                from: pred.node_id.clone(),
                to: current.to_string(),
                distance: pred.weight,
            });
            current = pred.node_id.as_str();
        }
        legs.reverse();

        Some(legs)
    }
}

/// State tracked during Dijkstra traversal
struct DijkstraState {
    visited: HashSet<String>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    distances: HashMap<String, Distance>,
    predecessors: HashMap<String, Predecessor>,
}

impl DijkstraState {
    fn new(source: &str) -> Self {
        let mut state = Self {
            visited: HashSet::new(),
            heap: BinaryHeap::new(),
            distances: HashMap::new(),
            predecessors: HashMap::new(),
        };
        state.distances.insert(source.to_string(), 0);
        state.heap.push(Reverse(HeapEntry {
            node_id: source.to_string(),
            accumulated_cost: 0,
        }));
        state
    }

    /// Relax the edge `current -> neighbor`.
    ///
    /// A node may sit in the heap several times; stale copies are discarded
    /// at extraction by the visited check.
    fn relax(&mut self, current: &str, current_cost: Distance, neighbor: String, weight: Distance) {
        if self.visited.contains(&neighbor) {
            return;
        }

        let candidate = current_cost.saturating_add(weight);
        let improves = self
            .distances
            .get(&neighbor)
            .is_none_or(|&known| candidate < known);
        if !improves {
            return;
        }

        self.distances.insert(neighbor.clone(), candidate);
        self.predecessors.insert(
            neighbor.clone(),
            Predecessor {
                node_id: current.to_string(),
                weight,
            },
        );
        self.heap.push(Reverse(HeapEntry {
            node_id: neighbor,
            accumulated_cost: candidate,
        }));
    }
}

/// Run Dijkstra from `source` until the frontier is empty
#[tracing::instrument(skip_all, fields(source = %source, settled = tracing::field::Empty))]
pub fn shortest_path_tree(provider: &dyn GraphProvider, source: &str) -> ShortestPathTree {
    let mut state = DijkstraState::new(source);

    while let Some(Reverse(HeapEntry {
        node_id: current_id,
        accumulated_cost,
    })) = state.heap.pop()
    {
        if !state.visited.insert(current_id.clone()) {
            continue;
        }

        for (neighbor_id, weight) in provider.neighbors(&current_id) {
            state.relax(&current_id, accumulated_cost, neighbor_id, weight);
        }
    }

    tracing::Span::current().record("settled", state.visited.len());

    ShortestPathTree {
        distances: state.distances,
        predecessors: state.predecessors,
    }
}

fn ensure_known(provider: &dyn GraphProvider, source: &str, target: &str) -> Result<()> {
    for id in [source, target] {
        if !provider.contains(id) {
            return Err(RoadtripError::unknown_location(id));
        }
    }
    Ok(())
}

/// Shortest total distance between two locations.
///
/// `Ok(None)` means both locations exist but are not connected.
pub fn shortest_distance(
    provider: &dyn GraphProvider,
    source: &str,
    target: &str,
) -> Result<Option<Distance>> {
    ensure_known(provider, source, target)?;
    Ok(shortest_path_tree(provider, source).distance_to(target))
}

/// Shortest path between two locations as identifiers from source to target.
///
/// `Ok(None)` means "no path": the locations are disconnected, or they are the
/// same location (a single-stop path is never returned).
pub fn shortest_path(
    provider: &dyn GraphProvider,
    source: &str,
    target: &str,
) -> Result<Option<Vec<String>>> {
    ensure_known(provider, source, target)?;
    Ok(shortest_path_tree(provider, source).path_to(target))
}

/// Distance and per-leg breakdown of the shortest route, from a single traversal
#[tracing::instrument(skip_all, fields(source = %source, target = %target))]
pub fn find_route(
    provider: &dyn GraphProvider,
    source: &str,
    target: &str,
) -> Result<RouteOutcome> {
    ensure_known(provider, source, target)?;

    let tree = shortest_path_tree(provider, source);
    let (Some(total_distance), Some(legs)) = (tree.distance_to(target), tree.legs_to(target))
    else {
        tracing::debug!("no path");
        return Ok(RouteOutcome::NoPath);
    };

    tracing::debug!(total_distance, hops = legs.len(), "route found");
    Ok(RouteOutcome::Found(Route {
        from: source.to_string(),
        to: target.to_string(),
        total_distance,
        legs,
    }))
}

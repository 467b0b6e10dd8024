use super::{GraphNodeMap, NO_PARENT, PathResult, trace_path};

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug};
use num_traits::{CheckedAdd, Zero};
use indexmap::map::Entry::{Occupied, Vacant};
use tracing::trace;



/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start Node, traverse through graph until a node meets the goal criteria
/// The first node settled that meets the goal is returned, so among equally cheap goals
/// the one settled first wins
pub fn dijkstra<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G) -> PathResult<N, C>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + CheckedAdd + Ord + Copy + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    // Build the graph - terminates when the goal is met
    let (node_map, goal_index) = build_dijkstra_graph(start, neighbors, goal);

    match goal_index {
        Some(goal_index) => trace_path(&node_map, goal_index),
        None => PathResult::unreachable(),
    }
}


/// Returns a full map of the graph, includes all (reachable) nodes and costs
/// The start node is always at index 0
pub fn dijkstra_nodes_full<N, C, IT, NN>(start: N, neighbors: NN) -> GraphNodeMap<N, C>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + CheckedAdd + Ord + Copy + Debug,
    {

    let (node_map, _) = build_dijkstra_graph(start, neighbors, |_| false);
    node_map
}


/// Traverses the graph using Dijkstra's algorithm
/// Returns a map of nodes with their smallest costs along with the index of the goal node
/// Edge costs must be non-negative, a relaxation that would overflow `C` is dropped
fn build_dijkstra_graph<N, C, IT, NN, G>(start: N, neighbors: NN, goal_fn: G) -> (GraphNodeMap<N, C>, Option<usize>)
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + CheckedAdd + Ord + Copy + Debug,
    G: Fn(&N) -> bool
    {

    // Nodes to visit - binary heap sorts Biggest to Smallest, NodeId flips the order
    let mut nodes_to_visit: BinaryHeap<NodeId<C>> = BinaryHeap::new();

    // Discovered nodes with (parent_index, best known cost)
    let mut nodes_map: GraphNodeMap<N, C> = GraphNodeMap::default();

    let start_index = nodes_map.insert_full(start, (NO_PARENT, Zero::zero())).0;
    nodes_to_visit.push(NodeId {
        index: start_index,
        cost: Zero::zero(),
    });

    let mut settled = 0usize;

    // Loop over each node to visit, removing the smallest node
    while let Some(NodeId { cost, index }) = nodes_to_visit.pop() {

        // fetch current best cost for node
        let Some((node, &(_, c))) = nodes_map.get_index(index) else {
            continue;
        };

        // A cheaper entry for this node was already expanded
        if cost > c {
            continue;
        }
        settled += 1;

        if goal_fn(node) {
            trace!(settled, discovered = nodes_map.len(), "dijkstra reached goal");
            return (nodes_map, Some(index));
        }

        let node = node.clone();
        for (neighbor, edge_cost) in neighbors(&node) {

            let Some(new_cost) = c.checked_add(&edge_cost) else {
                continue;
            };

            let neighbor_index = match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    let i = e.index();
                    e.insert((index, new_cost));
                    i
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        e.insert((index, new_cost));
                        e.index()
                    } else {
                        // The existing path is at least as good
                        continue;
                    }
                }
            };

            nodes_to_visit.push(NodeId {
                index: neighbor_index,
                cost: new_cost,
            });
        }
    }

    trace!(settled, discovered = nodes_map.len(), "dijkstra exhausted queue");
    (nodes_map, None)
}


/// Heap entry - for ordering we only need cost and a way to identify the node
/// Equal costs fall back to the lower map index so that pops are deterministic
#[derive(Debug)]
struct NodeId<T> {
    index: usize,
    cost: T
}

impl<T: Ord> Ord for NodeId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
            .then_with(|| other.index.cmp(&self.index))
    }
}
impl<T: Ord> PartialOrd for NodeId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialEq> PartialEq for NodeId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.index == other.index
    }
}
impl<T: PartialEq> Eq for NodeId<T> {}

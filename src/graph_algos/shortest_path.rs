use super::{GraphNodeMap, NO_PARENT};
use serde::{Deserialize, Serialize};


/// Outcome of a shortest path query
/// A missing distance together with an empty path means the end was unreachable
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult<N, C> {
    pub distance: Option<C>,
    pub path: Vec<N>,
}

impl<N, C> PathResult<N, C> {

    pub fn unreachable() -> Self {
        Self { distance: None, path: Vec::new() }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_some() && !self.path.is_empty()
    }

    /// Convert node identifiers, keeping the distance
    pub fn map_nodes<M, F>(self, f: F) -> PathResult<M, C>
    where
        F: FnMut(N) -> M,
    {
        PathResult {
            distance: self.distance,
            path: self.path.into_iter().map(f).collect(),
        }
    }
}


/// Construct the path from the start node to the node at `goal_index`
/// Follows parent links back to the start, then reverses them
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// An index outside the map (or a broken parent chain) yields an unreachable result
pub fn trace_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> PathResult<N, C>
where
    N: Clone,
    C: Copy,
{
    let Some((_, &(_, distance))) = node_map.get_index(goal_index) else {
        return PathResult::unreachable();
    };

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != NO_PARENT {
        match node_map.get_index(current_index) {
            Some((node, &(parent_index, _))) => {
                path.push(node.clone());
                current_index = parent_index;
            }
            None => return PathResult::unreachable(),
        }
        // A chain longer than the map can only be a cycle
        if path.len() > node_map.len() {
            return PathResult::unreachable();
        }
    }

    path.reverse();

    PathResult { distance: Some(distance), path }
}

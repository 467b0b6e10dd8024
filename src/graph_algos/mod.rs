pub mod dijkstra;
pub mod search;
mod shortest_path;

pub use shortest_path::{PathResult, trace_path};
pub use search::{Route, nearest_of, shortest_path};

use crate::collections::FxIndexMap;

/// Type alias for the node map built by the path planning algorithms
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map, usize::MAX for the start
/// - cost is the total cost to reach this node from the start
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;

/// Parent index marking the start node
pub(crate) const NO_PARENT: usize = usize::MAX;

use super::{PathResult, trace_path};
use super::dijkstra::{dijkstra, dijkstra_nodes_full};
use crate::graph::{Distance, Graph};

use tracing::trace;


/// Shortest path between graph nodes, identified by node id
pub type Route = PathResult<String, Distance>;


/// Neighbors with edge weights widened to route cost
fn weighted_neighbors<'a>(graph: &'a Graph, id: &str) -> impl Iterator<Item = (&'a str, Distance)> + use<'a> {
    graph.neighbors_of(id).map(|(neighbor, weight)| (neighbor, Distance::from(weight)))
}


/// Shortest path from `start` to `end` over the undirected graph
/// Unknown start or end nodes give an unreachable route
pub fn shortest_path(graph: &Graph, start: &str, end: &str) -> Route {
    if !graph.contains(start) || !graph.contains(end) {
        return Route::unreachable();
    }

    dijkstra(start, |node: &&str| weighted_neighbors(graph, node), |node| *node == end)
        .map_nodes(str::to_string)
}


/// Route from `start` to the cheapest reachable node among `candidates`
/// Runs Dijkstra once to completion and compares every candidate afterwards
/// Ties on distance go to the candidate listed first; unreachable candidates are ignored
pub fn nearest_of<S: AsRef<str>>(graph: &Graph, start: &str, candidates: &[S]) -> Route {
    if !graph.contains(start) {
        return Route::unreachable();
    }

    let node_map = dijkstra_nodes_full(start, |node: &&str| weighted_neighbors(graph, node));

    let mut best: Option<(usize, Distance)> = None;
    for candidate in candidates {
        let Some((index, _, &(_, cost))) = node_map.get_full(candidate.as_ref()) else {
            trace!(candidate = candidate.as_ref(), "candidate unreachable");
            continue;
        };
        if best.is_none_or(|(_, best_cost)| cost < best_cost) {
            best = Some((index, cost));
        }
    }

    match best {
        Some((index, _)) => trace_path(&node_map, index).map_nodes(str::to_string),
        None => Route::unreachable(),
    }
}

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::DispatchError;
use crate::graph::{Category, Distance, Graph, Weight};
use crate::graph_algos::nearest_of;
use crate::records::{EdgeRecord, NodeRecord, parse_edges, parse_nodes};
use crate::vehicle::VehicleType;


/// One routing request: a graph, where the vehicle starts and what kind of vehicle it is
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DispatchRequest {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
    pub start: String,
    pub vehicle: String,
}


/// Route from the start node to the nearest node the vehicle must reach
#[derive(Clone, Debug)]
pub struct DispatchPlan {
    pub vehicle: VehicleType,
    pub destination: Category,
    pub distance: Distance,
    pub path: Vec<String>,
    /// The graph the route was computed on, for rendering
    pub graph: Graph,
}

impl DispatchPlan {
    /// Node the route ends at
    pub fn target(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }
}


/// Build a fresh graph from records, edges may only reference listed nodes
pub fn build_graph(nodes: &[NodeRecord], edges: &[EdgeRecord]) -> Result<Graph, DispatchError> {
    let mut graph = Graph::new();
    for node in nodes {
        graph.add_node(node.id.as_str(), node.x, node.y, node.category());
    }
    for edge in edges {
        graph.add_edge(&edge.src, &edge.dest, edge.weight)?;
    }
    Ok(graph)
}


/// Compute the route for a request
/// Checks run in order: vehicle type, graph construction, start node, reachable destination
pub fn plan(request: &DispatchRequest) -> Result<DispatchPlan, DispatchError> {
    let vehicle = request.vehicle.parse::<VehicleType>().inspect_err(|e| warn!(error = %e, "rejected request"))?;
    let destination = vehicle.destination_category();

    debug!(
        %vehicle,
        %destination,
        start = %request.start,
        nodes = request.nodes.len(),
        edges = request.edges.len(),
        "planning dispatch route"
    );

    let graph = build_graph(&request.nodes, &request.edges).inspect_err(|e| warn!(error = %e, "rejected graph"))?;

    if !graph.contains(&request.start) {
        warn!(start = %request.start, "start node missing");
        return Err(DispatchError::StartNodeNotFound(request.start.clone()));
    }

    let candidates = graph.nodes_of_category(&destination);
    let route = nearest_of(&graph, &request.start, &candidates);

    let Some(distance) = route.distance.filter(|_| route.is_reachable()) else {
        debug!(candidates = candidates.len(), %destination, "no reachable destination");
        return Err(DispatchError::NoPathFound { category: destination.to_string() });
    };

    debug!(distance, hops = route.path.len().saturating_sub(1), target = ?route.path.last(), "route found");

    Ok(DispatchPlan {
        vehicle,
        destination,
        distance,
        path: route.path,
        graph,
    })
}


/// Plan from the raw text blocks of the dispatch form
pub fn plan_from_text(vehicle: &str, start: &str, nodes: &str, edges: &str) -> Result<DispatchPlan, DispatchError> {
    let request = DispatchRequest {
        nodes: parse_nodes(nodes)?,
        edges: parse_edges(edges)?,
        start: start.trim().to_string(),
        vehicle: vehicle.to_string(),
    };
    plan(&request)
}

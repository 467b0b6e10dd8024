mod category;

pub use category::Category;

use crate::collections::{FxHashMap, FxIndexMap};
use crate::errors::{DispatchError, Endpoint};
use crate::geometry::Point;

use serde::{Deserialize, Serialize};
use tracing::trace;


/// Edge weight, non-negative by construction
pub type Weight = u64;

/// Accumulated route cost
/// Wider than `Weight` so that summing any path of `Weight` edges cannot overflow
pub type Distance = u128;


/// Node attributes, keyed by identifier in the graph
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub position: Point,
    pub category: Category,
}

impl Node {
    pub fn new(x: f64, y: f64, category: Category) -> Self {
        Self { position: Point::new(x, y), category }
    }
}


/// Undirected edge as it was supplied, kept for display
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub src: String,
    pub dest: String,
    pub weight: Weight,
}


/// Weighted undirected graph
/// - nodes keep their first registration order, used for deterministic candidate ordering
/// - adjacency maps node id -> neighbor id -> weight, mirrored in both directions
/// - edges keeps the input order and direction of every distinct pair
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: FxIndexMap<String, Node>,
    adjacency: FxHashMap<String, FxIndexMap<String, Weight>>,
    edges: Vec<Edge>,
    edge_lookup: FxHashMap<(String, String), usize>,
}

impl Graph {

    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node, re-registering an id overwrites its attributes
    pub fn add_node(&mut self, id: impl Into<String>, x: f64, y: f64, category: Category) {
        let id = id.into();
        trace!(node = %id, %category, "add node");
        self.nodes.insert(id, Node::new(x, y, category));
    }

    /// Register an undirected edge between two known nodes
    /// Re-adding the same pair (in either direction) replaces the weight
    pub fn add_edge(&mut self, src: &str, dest: &str, weight: Weight) -> Result<(), DispatchError> {
        let missing = match (self.contains(src), self.contains(dest)) {
            (true, true) => None,
            (false, true) => Some(Endpoint::Source),
            (true, false) => Some(Endpoint::Destination),
            (false, false) => Some(Endpoint::Both),
        };
        if let Some(missing) = missing {
            return Err(DispatchError::UnknownNode {
                src: src.to_string(),
                dest: dest.to_string(),
                missing,
            });
        }

        self.adjacency
            .entry(src.to_string())
            .or_default()
            .insert(dest.to_string(), weight);
        self.adjacency
            .entry(dest.to_string())
            .or_default()
            .insert(src.to_string(), weight);

        let key = if src <= dest {
            (src.to_string(), dest.to_string())
        } else {
            (dest.to_string(), src.to_string())
        };
        match self.edge_lookup.get(&key) {
            Some(&index) => self.edges[index].weight = weight,
            None => {
                self.edge_lookup.insert(key, self.edges.len());
                self.edges.push(Edge {
                    src: src.to_string(),
                    dest: dest.to_string(),
                    weight,
                });
            }
        }

        Ok(())
    }

    /// Neighbors of a node with the connecting weight
    /// Empty for isolated or unknown nodes
    pub fn neighbors_of<'a>(&'a self, id: &str) -> impl Iterator<Item = (&'a str, Weight)> + use<'a> {
        self.adjacency
            .get(id)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(|(n, w)| (n.as_str(), *w)))
    }

    /// Weight of the edge between two nodes, if any
    pub fn weight_between(&self, a: &str, b: &str) -> Option<Weight> {
        self.adjacency.get(a).and_then(|neighbors| neighbors.get(b)).copied()
    }

    /// Ids of nodes in the given category, in registration order
    pub fn nodes_of_category(&self, category: &Category) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.category == *category)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Nodes in registration order
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.nodes.iter().map(|(id, node)| (id.as_str(), node))
    }

    /// Distinct edges in input order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

use serde::Serialize;

use crate::collections::{FxIndexMap, FxIndexSet};
use crate::config::ViewConfig;
use crate::dispatch::DispatchPlan;
use crate::geometry::Point;
use crate::graph::{Category, Distance, Weight};
use crate::vehicle::VehicleType;


#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodeView {
    pub x: f64,
    pub y: f64,
    pub category: Category,
    pub on_path: bool,
    /// Adjacent node id -> weight
    pub edges: FxIndexMap<String, Weight>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EdgeView {
    pub src: String,
    pub dest: String,
    pub weight: Weight,
    pub on_path: bool,
}


/// Everything a renderer needs to draw the graph and highlight the route
/// Edges are listed in input order, each followed by its reverse
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SceneView {
    pub vehicle: VehicleType,
    pub color: &'static str,
    pub destination: Category,
    pub distance: Distance,
    pub path: Vec<String>,
    pub nodes: FxIndexMap<String, NodeView>,
    pub edges: Vec<EdgeView>,
}

impl SceneView {

    pub fn new(plan: &DispatchPlan, config: &ViewConfig) -> Self {
        let on_path_nodes: FxIndexSet<&str> = plan.path.iter().map(String::as_str).collect();
        let on_path_edges: FxIndexSet<(&str, &str)> = plan
            .path
            .windows(2)
            .flat_map(|pair| [(pair[0].as_str(), pair[1].as_str()), (pair[1].as_str(), pair[0].as_str())])
            .collect();

        let nodes = plan
            .graph
            .nodes()
            .map(|(id, node)| {
                let Point { x, y } = node.position.scaled(config.scale, config.offset);
                let view = NodeView {
                    x,
                    y,
                    category: node.category.clone(),
                    on_path: on_path_nodes.contains(id),
                    edges: plan
                        .graph
                        .neighbors_of(id)
                        .map(|(neighbor, weight)| (neighbor.to_string(), weight))
                        .collect(),
                };
                (id.to_string(), view)
            })
            .collect();

        let edges = plan
            .graph
            .edges()
            .iter()
            .flat_map(|edge| [(edge.src.as_str(), edge.dest.as_str()), (edge.dest.as_str(), edge.src.as_str())]
                .map(|(src, dest)| EdgeView {
                    src: src.to_string(),
                    dest: dest.to_string(),
                    weight: edge.weight,
                    on_path: on_path_edges.contains(&(src, dest)),
                }))
            .collect();

        SceneView {
            vehicle: plan.vehicle,
            color: plan.vehicle.color(),
            destination: plan.destination.clone(),
            distance: plan.distance,
            path: plan.path.clone(),
            nodes,
            edges,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::plan_from_text;

    fn scene() -> SceneView {
        let plan = plan_from_text(
            "ambulance",
            "A",
            "A 0 0\nB 1 0\nH 2 0 hospital\nC 0 1\n",
            "A B 3\nB H 4\nA C 1\n",
        )
        .unwrap();
        SceneView::new(&plan, &ViewConfig::default())
    }

    #[test]
    fn test_nodes_are_scaled_and_flagged() {
        let scene = scene();

        let b = &scene.nodes["B"];
        assert_eq!((b.x, b.y), (150.0, 50.0));
        assert!(b.on_path);
        assert!(!scene.nodes["C"].on_path);
        assert_eq!(b.edges.get("A"), Some(&3));
        assert_eq!(b.edges.get("H"), Some(&4));
        assert_eq!(scene.color, "#DC143C");
        assert_eq!(scene.distance, 7);
    }

    #[test]
    fn test_edges_listed_both_ways_in_input_order() {
        let scene = scene();
        let pairs: Vec<(&str, &str, bool)> = scene
            .edges
            .iter()
            .map(|e| (e.src.as_str(), e.dest.as_str(), e.on_path))
            .collect();

        assert_eq!(pairs, vec![
            ("A", "B", true),
            ("B", "A", true),
            ("B", "H", true),
            ("H", "B", true),
            ("A", "C", false),
            ("C", "A", false),
        ]);
    }

    #[test]
    fn test_json_shape() {
        let json: serde_json::Value = serde_json::from_str(&scene().to_json().unwrap()).unwrap();
        assert_eq!(json["vehicle"], "ambulance");
        assert_eq!(json["destination"], "hospital");
        assert_eq!(json["path"], serde_json::json!(["A", "B", "H"]));
        assert_eq!(json["nodes"]["H"]["category"], "hospital");
        assert_eq!(json["nodes"]["A"]["x"], 50.0);
    }
}

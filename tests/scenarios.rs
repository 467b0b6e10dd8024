use responder_nav::{
    Category, DispatchError, DispatchRequest, Graph, SceneView, ViewConfig, nearest_of, plan,
    plan_from_text, shortest_path,
};
use responder_nav::records::{EdgeRecord, NodeRecord};

fn node(id: &str, x: f64, y: f64, category: Option<&str>) -> NodeRecord {
    NodeRecord { id: id.to_string(), x, y, category: category.map(String::from) }
}

fn edge(src: &str, dest: &str, weight: u64) -> EdgeRecord {
    EdgeRecord { src: src.to_string(), dest: dest.to_string(), weight }
}

#[test]
fn ambulance_reaches_hospital_through_chain() {
    let request = DispatchRequest {
        nodes: vec![
            node("A", 0.0, 0.0, Some("regular")),
            node("B", 1.0, 0.0, Some("regular")),
            node("H", 2.0, 0.0, Some("hospital")),
        ],
        edges: vec![edge("A", "B", 3), edge("B", "H", 4)],
        start: "A".to_string(),
        vehicle: "ambulance".to_string(),
    };

    let plan = plan(&request).unwrap();
    assert_eq!(plan.path, vec!["A", "B", "H"]);
    assert_eq!(plan.distance, 7);
}

#[test]
fn nearest_of_two_hospitals_wins() {
    let plan = plan_from_text(
        "ambulance",
        "S",
        "S 0 0\nH1 5 0 hospital\nX 0 2\nH2 0 4 hospital\n",
        "S H1 10\nS X 2\nX H2 2\n",
    )
    .unwrap();

    assert_eq!(plan.target(), Some("H2"));
    assert_eq!(plan.distance, 4);
    assert_eq!(plan.path, vec!["S", "X", "H2"]);
}

#[test]
fn edge_to_unknown_node_names_it() {
    let err = plan_from_text("ambulance", "A", "A 0 0\nH 1 0 hospital\n", "A H 1\nH Z 2\n").unwrap_err();

    assert!(matches!(err, DispatchError::UnknownNode { .. }));
    assert_eq!(err.missing_node().as_deref(), Some("Z"));
    assert!(err.to_string().contains('Z'));
}

#[test]
fn tank_is_not_a_vehicle() {
    let err = plan_from_text("tank", "A", "A 0 0\n", "").unwrap_err();
    assert_eq!(err, DispatchError::UnrecognizedVehicleType("tank".to_string()));
}

#[test]
fn missing_destination_category_is_no_path() {
    let err = plan_from_text("firetruck", "A", "A 0 0\nB 1 0 hospital\n", "A B 1\n").unwrap_err();
    assert!(matches!(err, DispatchError::NoPathFound { ref category } if category == "fire-station"));
}

#[test]
fn disconnected_destinations_are_no_path() {
    let err = plan_from_text("police", "A", "A 0 0\nB 1 0\nP 5 5 police station\n", "A B 1\n").unwrap_err();
    assert!(matches!(err, DispatchError::NoPathFound { .. }));
}

#[test]
fn unknown_start_is_rejected_before_routing() {
    let err = plan_from_text("ambulance", "Q", "A 0 0\nH 1 0 hospital\n", "A H 1\n").unwrap_err();
    assert_eq!(err, DispatchError::StartNodeNotFound("Q".to_string()));
}

#[test]
fn start_on_destination_is_zero_length_route() {
    let plan = plan_from_text("ambulance", "H", "A 0 0\nH 1 0 hospital\n", "A H 1\n").unwrap();
    assert_eq!(plan.distance, 0);
    assert_eq!(plan.path, vec!["H"]);
}

#[test]
fn empty_graph_is_unreachable() {
    let graph = Graph::new();
    let route = shortest_path(&graph, "A", "B");
    assert!(!route.is_reachable());
    assert!(route.path.is_empty());
    assert!(nearest_of(&graph, "A", &["B"]).path.is_empty());
}

#[test]
fn nodes_without_edges_are_valid_input() {
    let mut graph = Graph::new();
    graph.add_node("A", 0.0, 0.0, Category::regular());
    graph.add_node("B", 1.0, 1.0, Category::new("hospital"));

    assert_eq!(graph.edge_count(), 0);
    assert!(!shortest_path(&graph, "A", "B").is_reachable());
    assert_eq!(shortest_path(&graph, "A", "A").distance, Some(0));
}

#[test]
fn scene_highlights_route() {
    let plan = plan_from_text("police", "A", "A 0 0\nB 1 0\nP 2 0 Police Station\n", "A B 1\nB P 1\n").unwrap();
    let scene = SceneView::new(&plan, &ViewConfig { scale: 10.0, offset: 5.0 });

    assert_eq!(scene.color, "#3498DB");
    assert_eq!((scene.nodes["P"].x, scene.nodes["P"].y), (25.0, 5.0));
    assert!(scene.edges.iter().all(|e| e.on_path));
}

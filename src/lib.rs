//! Nearest-facility routing for emergency vehicles
//!
//! A request carries a small graph (placed nodes tagged with a category, weighted
//! undirected edges), a start node and a vehicle type. The route goes to the closest
//! node of the category the vehicle serves: ambulance -> hospital,
//! firetruck -> fire-station, police -> police-station.
//!
//! Every request builds its own [`graph::Graph`]; nothing is shared between calls.
//!
//! ```
//! use responder_nav::dispatch::plan_from_text;
//!
//! let plan = plan_from_text("ambulance", "A", "A 0 0\nB 1 0\nH 2 0 hospital", "A B 3\nB H 4").unwrap();
//! assert_eq!(plan.distance, 7);
//! assert_eq!(plan.path, vec!["A", "B", "H"]);
//! ```

pub mod collections;
pub mod config;
pub mod dispatch;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod records;
pub mod vehicle;
pub mod view;

pub use config::ViewConfig;
pub use dispatch::{DispatchPlan, DispatchRequest, plan, plan_from_text};
pub use errors::{DispatchError, Endpoint};
pub use graph::{Category, Distance, Graph, Weight};
pub use graph_algos::{PathResult, Route, nearest_of, shortest_path};
pub use vehicle::VehicleType;
pub use view::SceneView;

use serde::{Deserialize, Serialize};


/// 2D Point
/// Placement only, coordinates carry no geographic meaning
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Apply a uniform scale followed by an offset on both axes
    pub fn scaled(&self, scale: f64, offset: f64) -> Point {
        Point {
            x: self.x * scale + offset,
            y: self.y * scale + offset,
        }
    }
}

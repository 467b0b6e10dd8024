use std::fmt;
use serde::{Deserialize, Serialize};


/// Normalized node category
/// Lower-cased, whitespace runs collapsed into single hyphens: "Fire Station" -> "fire-station"
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Category(String);

impl Category {

    pub const REGULAR: &'static str = "regular";
    pub const HOSPITAL: &'static str = "hospital";
    pub const FIRE_STATION: &'static str = "fire-station";
    pub const POLICE_STATION: &'static str = "police-station";

    /// Normalize a raw label, an empty label falls back to `regular`
    pub fn new(raw: &str) -> Self {
        let normalized = raw
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-");

        if normalized.is_empty() {
            Self::regular()
        } else {
            Category(normalized)
        }
    }

    pub fn regular() -> Self {
        Category(Self::REGULAR.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compare against a raw label after normalizing it
    pub fn matches(&self, raw: &str) -> bool {
        *self == Category::new(raw)
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::regular()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        Category::new(raw)
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        Category::new(&raw)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.0
    }
}

use std::fmt;
use thiserror::Error;


/// Which side of an edge referenced a node that was never registered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Destination,
    Both,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Source => write!(f, "source"),
            Endpoint::Destination => write!(f, "destination"),
            Endpoint::Both => write!(f, "source and destination"),
        }
    }
}


/// Failures surfaced while building a graph or planning a dispatch route
/// None of these are retried: the computation is deterministic
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    #[error("malformed record on line {line}: {reason} (got `{record}`, expected `{expected}`)")]
    MalformedRecord {
        line: usize,
        record: String,
        expected: &'static str,
        reason: String,
    },

    #[error("edge {src} - {dest} references unknown {missing} node `{}`", missing_id(.src, .dest, .missing))]
    UnknownNode {
        src: String,
        dest: String,
        missing: Endpoint,
    },

    #[error("unrecognized vehicle type `{0}` (expected ambulance, firetruck or police)")]
    UnrecognizedVehicleType(String),

    #[error("no path found to any `{category}` node")]
    NoPathFound { category: String },

    #[error("start node `{0}` does not exist in the graph")]
    StartNodeNotFound(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DispatchError {
    /// Identifier(s) of the missing node for an `UnknownNode` error
    pub fn missing_node(&self) -> Option<String> {
        match self {
            DispatchError::UnknownNode { src, dest, missing } => Some(missing_id(src, dest, missing)),
            _ => None,
        }
    }
}

fn missing_id(src: &str, dest: &str, missing: &Endpoint) -> String {
    match missing {
        Endpoint::Source => src.to_string(),
        Endpoint::Destination => dest.to_string(),
        Endpoint::Both => format!("{src}, {dest}"),
    }
}

//! Line-oriented node and edge records, as typed into the dispatch form
//!
//! Nodes: `<id> <x> <y> [category words...]`
//! Edges: `<src> <dest> <weight>`
//!
//! Blank lines are skipped, line numbers in errors are 1-based.

use std::num::IntErrorKind;
use serde::{Deserialize, Serialize};

use crate::errors::DispatchError;
use crate::graph::{Category, Weight};


pub const NODE_FORMAT: &str = "<id> <x> <y> [category]";
pub const EDGE_FORMAT: &str = "<src> <dest> <weight>";


#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub category: Option<String>,
}

impl NodeRecord {
    /// Normalized category, `regular` when absent
    pub fn category(&self) -> Category {
        self.category.as_deref().map(Category::new).unwrap_or_default()
    }
}


#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub src: String,
    pub dest: String,
    pub weight: Weight,
}


fn malformed(line: usize, record: &str, expected: &'static str, reason: impl Into<String>) -> DispatchError {
    DispatchError::MalformedRecord {
        line,
        record: record.to_string(),
        expected,
        reason: reason.into(),
    }
}

fn parse_coordinate(line: usize, record: &str, axis: &str, token: &str) -> Result<f64, DispatchError> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(malformed(line, record, NODE_FORMAT, format!("{axis} coordinate `{token}` is not a finite number"))),
    }
}


/// Parse a single node record
pub fn parse_node_line(line: usize, record: &str) -> Result<NodeRecord, DispatchError> {
    let mut tokens = record.split_whitespace();

    let (Some(id), Some(x), Some(y)) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(malformed(line, record, NODE_FORMAT, "expected at least 3 fields"));
    };

    let x = parse_coordinate(line, record, "x", x)?;
    let y = parse_coordinate(line, record, "y", y)?;

    let rest: Vec<&str> = tokens.collect();
    let category = (!rest.is_empty()).then(|| rest.join(" "));

    Ok(NodeRecord { id: id.to_string(), x, y, category })
}


/// Non-negative integer weight, `-0` reads as zero
fn parse_weight(token: &str) -> Result<Weight, String> {
    match token.parse::<Weight>() {
        Ok(weight) => Ok(weight),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            Err(format!("weight `{token}` is out of range (maximum {})", Weight::MAX))
        }
        Err(_) => match token.parse::<i64>() {
            Ok(0) => Ok(0),
            Ok(_) => Err(format!("weight `{token}` must be non-negative")),
            Err(e) if *e.kind() == IntErrorKind::NegOverflow => Err(format!("weight `{token}` must be non-negative")),
            Err(_) => Err(format!("weight `{token}` is not an integer")),
        },
    }
}


/// Parse a single edge record
pub fn parse_edge_line(line: usize, record: &str) -> Result<EdgeRecord, DispatchError> {
    let tokens: Vec<&str> = record.split_whitespace().collect();

    let &[src, dest, weight] = tokens.as_slice() else {
        return Err(malformed(line, record, EDGE_FORMAT, format!("expected 3 fields, found {}", tokens.len())));
    };

    let weight = parse_weight(weight).map_err(|reason| malformed(line, record, EDGE_FORMAT, reason))?;

    Ok(EdgeRecord { src: src.to_string(), dest: dest.to_string(), weight })
}


fn parse_lines<T>(
    text: &str,
    parse: impl Fn(usize, &str) -> Result<T, DispatchError>,
) -> Result<Vec<T>, DispatchError> {
    text.lines()
        .enumerate()
        .map(|(i, record)| (i + 1, record.trim()))
        .filter(|(_, record)| !record.is_empty())
        .map(|(line, record)| parse(line, record))
        .collect()
}

/// Parse newline separated node records
pub fn parse_nodes(text: &str) -> Result<Vec<NodeRecord>, DispatchError> {
    parse_lines(text, parse_node_line)
}

/// Parse newline separated edge records
pub fn parse_edges(text: &str) -> Result<Vec<EdgeRecord>, DispatchError> {
    parse_lines(text, parse_edge_line)
}

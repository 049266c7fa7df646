//! The normalized flowchart model.
//!
//! A chart arrives from an upstream analysis service as a loosely-shaped
//! node/edge structure. After normalization every node carries a non-empty,
//! unique `id` and a non-empty `label`; after layout every node additionally
//! carries canvas coordinates. Edges keep whatever endpoint ids they resolved
//! to, even when an endpoint id has no matching node; a rendering surface is
//! expected to skip edges it cannot anchor.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// A chart node with resolved identity and display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartNode {
    pub id: String,
    pub label: String,
}

impl ChartNode {
    /// Creates a new node from an id and a display label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A directed edge between two chart nodes, referenced by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl ChartEdge {
    /// Creates a new edge from an id and its endpoint node ids.
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }
}

/// A chart node with assigned canvas coordinates.
///
/// Serializes with the coordinates inlined (`{"id": .., "label": .., "x": ..,
/// "y": ..}`), which is the shape rendering surfaces consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedNode {
    pub id: String,
    pub label: String,
    #[serde(flatten)]
    pub position: Point,
}

/// The renderable result of a layout pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<ChartEdge>,
}

impl ChartLayout {
    /// Returns true if the layout contains nothing to render.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positioned_node_serializes_flat_coordinates() {
        let node = PositionedNode {
            id: "a".to_string(),
            label: "Start".to_string(),
            position: Point::new(40.0, 160.0),
        };

        let json = serde_json::to_value(&node).expect("node should serialize");
        assert_eq!(json["id"], "a");
        assert_eq!(json["label"], "Start");
        assert_eq!(json["x"], 40.0);
        assert_eq!(json["y"], 160.0);
    }

    #[test]
    fn test_empty_layout() {
        assert!(ChartLayout::default().is_empty());
    }
}

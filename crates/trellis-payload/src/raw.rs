//! Untrusted input shapes, as close to the wire as still being typed allows.
//!
//! The upstream service spells the same concept several ways (`id` vs `_id`,
//! `label` vs `text` vs `title`, `target` vs `to` vs `t`). Decoding folds the
//! alternate spellings together, so each raw field holds the first usable
//! spelling or nothing. Positional fallbacks (synthesizing an id from a
//! node's index, pointing an edge at a neighbouring node) depend on the
//! whole collection and are applied later, during normalization.

use serde_json::Value;

/// Coerces a scalar JSON value to its display string.
///
/// Empty strings, nulls, arrays, and objects yield `None`, making the value
/// fall through to the next link of a fallback chain. Numbers (including
/// zero) and booleans coerce to their display form.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn field(value: &Value, names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| value.get(name))
        .find_map(scalar_to_string)
}

/// A node descriptor as received, before positional fallbacks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawChartNode {
    /// First usable spelling of `id` / `_id`.
    pub id: Option<String>,
    /// First usable spelling of `label` / `text` / `title`.
    pub label: Option<String>,
}

impl RawChartNode {
    /// Decodes a node descriptor. Non-object descriptors decode to an empty
    /// node; normalization will synthesize its identity from position.
    pub fn from_value(value: &Value) -> Self {
        Self {
            id: field(value, &["id", "_id"]),
            label: field(value, &["label", "text", "title"]),
        }
    }
}

/// An edge descriptor as received, before positional fallbacks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawChartEdge {
    pub id: Option<String>,
    /// First usable spelling of `source` / `from`.
    pub source: Option<String>,
    /// First usable spelling of `target` / `to` / `t`.
    pub target: Option<String>,
}

impl RawChartEdge {
    /// Decodes an edge descriptor.
    pub fn from_value(value: &Value) -> Self {
        Self {
            id: field(value, &["id"]),
            source: field(value, &["source", "from"]),
            target: field(value, &["target", "to", "t"]),
        }
    }
}

/// An unvalidated chart: node and edge descriptors in wire order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawChart {
    pub nodes: Vec<RawChartNode>,
    pub edges: Vec<RawChartEdge>,
}

impl RawChart {
    /// Decodes a chart from a JSON value.
    ///
    /// Returns `None` unless the value carries an array `nodes` field; the
    /// caller treats that as "nothing to show", not as an error. A missing
    /// or non-array `edges` field decodes as no edges.
    pub fn from_value(value: &Value) -> Option<Self> {
        let nodes = value.get("nodes")?.as_array()?;

        let edges = value
            .get("edges")
            .and_then(Value::as_array)
            .map(|edges| edges.iter().map(RawChartEdge::from_value).collect())
            .unwrap_or_default();

        Some(Self {
            nodes: nodes.iter().map(RawChartNode::from_value).collect(),
            edges,
        })
    }
}

/// A quiz item as received: question text, option map, answer key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawQuizItem {
    pub question: Option<String>,
    pub options: serde_json::Map<String, Value>,
    pub answer: Option<String>,
}

impl RawQuizItem {
    /// Decodes a quiz item. Question and answer must be strings; anything
    /// else decodes as absent and the item is dropped during normalization.
    pub fn from_value(value: &Value) -> Self {
        Self {
            question: value
                .get("question")
                .and_then(Value::as_str)
                .map(str::to_string),
            options: value
                .get("options")
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default(),
            answer: value
                .get("answer")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

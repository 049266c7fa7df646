//! Classification of backend responses into payload variants.

use std::str::FromStr;

use log::debug;
use serde_json::Value;

use crate::{
    error::PayloadError,
    extract,
    raw::{RawChart, RawQuizItem},
};

/// One backend response, classified.
///
/// The service answers every endpoint with a bare JSON object whose shape
/// announces what it is: a `summary` string, a `quiz` array, or a flowchart.
/// Flowcharts may sit under a `flowchart` or `flow` envelope key or at the
/// top level; `Chart(None)` means the response claimed to be a chart but
/// carried no usable node list.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisPayload {
    Chart(Option<RawChart>),
    Summary(String),
    Quiz(Vec<RawQuizItem>),
}

impl AnalysisPayload {
    /// Classifies an already-parsed JSON value.
    pub fn classify(value: &Value) -> Self {
        if let Some(summary) = value.get("summary").and_then(Value::as_str) {
            debug!(len = summary.len(); "Classified payload as summary");
            return Self::Summary(summary.to_string());
        }

        if let Some(items) = quiz_items(value) {
            debug!(item_count = items.len(); "Classified payload as quiz");
            return Self::Quiz(items);
        }

        let chart = value
            .get("flowchart")
            .filter(|v| !v.is_null())
            .or_else(|| value.get("flow").filter(|v| !v.is_null()))
            .unwrap_or(value);

        let chart = RawChart::from_value(chart);
        debug!(usable = chart.is_some(); "Classified payload as chart");
        Self::Chart(chart)
    }
}

fn quiz_items(value: &Value) -> Option<Vec<RawQuizItem>> {
    // A bare top-level array is how the generating model emits a quiz
    // before the service wraps it.
    let items = value
        .get("quiz")
        .and_then(Value::as_array)
        .or_else(|| value.as_array())?;

    Some(items.iter().map(RawQuizItem::from_value).collect())
}

impl FromStr for AnalysisPayload {
    type Err = PayloadError;

    /// Parses response text, falling back to relaxed JSON recovery when the
    /// text is not strict JSON. Errors only when nothing can be recovered.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let value = match serde_json::from_str::<Value>(text) {
            Ok(value) => value,
            Err(err) => {
                debug!(err:err; "Strict parse failed, attempting recovery");
                extract::document(text).ok_or(PayloadError::NoDocument)?
            }
        };

        Ok(Self::classify(&value))
    }
}

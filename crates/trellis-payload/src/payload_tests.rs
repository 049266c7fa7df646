//! Unit tests for payload decoding and classification.
//!
//! These cover the forgiving-decode contract: alternate field spellings,
//! scalar coercion, envelope sniffing, and recovery from decorated model
//! output.

use serde_json::{Value, json};

use crate::{AnalysisPayload, RawChart, RawChartEdge, RawChartNode, scalar_to_string};

fn classify(value: Value) -> AnalysisPayload {
    AnalysisPayload::classify(&value)
}

mod coercion {
    use super::*;

    #[test]
    fn strings_pass_through() {
        assert_eq!(scalar_to_string(&json!("abc")), Some("abc".to_string()));
    }

    #[test]
    fn empty_string_is_absent() {
        assert_eq!(scalar_to_string(&json!("")), None);
    }

    #[test]
    fn numbers_coerce_including_zero() {
        assert_eq!(scalar_to_string(&json!(0)), Some("0".to_string()));
        assert_eq!(scalar_to_string(&json!(3.5)), Some("3.5".to_string()));
    }

    #[test]
    fn booleans_coerce() {
        assert_eq!(scalar_to_string(&json!(false)), Some("false".to_string()));
    }

    #[test]
    fn containers_and_null_are_absent() {
        assert_eq!(scalar_to_string(&json!(null)), None);
        assert_eq!(scalar_to_string(&json!([1])), None);
        assert_eq!(scalar_to_string(&json!({"a": 1})), None);
    }
}

mod raw_shapes {
    use super::*;

    #[test]
    fn node_folds_alternate_spellings() {
        let node = RawChartNode::from_value(&json!({"_id": "n1", "title": "Start"}));

        assert_eq!(node.id.as_deref(), Some("n1"));
        assert_eq!(node.label.as_deref(), Some("Start"));
    }

    #[test]
    fn node_prefers_earlier_spellings() {
        let node = RawChartNode::from_value(&json!({
            "id": "a", "_id": "b",
            "label": "one", "text": "two", "title": "three"
        }));

        assert_eq!(node.id.as_deref(), Some("a"));
        assert_eq!(node.label.as_deref(), Some("one"));
    }

    #[test]
    fn node_empty_string_falls_through() {
        let node = RawChartNode::from_value(&json!({"label": "", "text": "fallback"}));

        assert_eq!(node.label.as_deref(), Some("fallback"));
    }

    #[test]
    fn node_from_non_object_is_empty() {
        let node = RawChartNode::from_value(&json!("just a string"));

        assert_eq!(node, RawChartNode::default());
    }

    #[test]
    fn edge_folds_alternate_spellings() {
        let edge = RawChartEdge::from_value(&json!({"from": "a", "t": "b"}));

        assert_eq!(edge.source.as_deref(), Some("a"));
        assert_eq!(edge.target.as_deref(), Some("b"));
        assert_eq!(edge.id, None);
    }

    #[test]
    fn chart_requires_array_nodes() {
        assert!(RawChart::from_value(&json!({"nodes": "oops"})).is_none());
        assert!(RawChart::from_value(&json!({"edges": []})).is_none());
        assert!(RawChart::from_value(&json!(null)).is_none());
    }

    #[test]
    fn chart_tolerates_missing_edges() {
        let chart = RawChart::from_value(&json!({"nodes": []})).expect("nodes array is enough");

        assert!(chart.nodes.is_empty());
        assert!(chart.edges.is_empty());
    }

    #[test]
    fn chart_ignores_non_array_edges() {
        let chart = RawChart::from_value(&json!({"nodes": [{}], "edges": {"not": "a list"}}))
            .expect("chart should decode");

        assert_eq!(chart.nodes.len(), 1);
        assert!(chart.edges.is_empty());
    }
}

mod envelopes {
    use super::*;

    #[test]
    fn summary_payload() {
        let payload = classify(json!({"summary": "Short text."}));

        assert_eq!(payload, AnalysisPayload::Summary("Short text.".to_string()));
    }

    #[test]
    fn quiz_payload() {
        let payload = classify(json!({"quiz": [{"question": "Q1"}]}));

        match payload {
            AnalysisPayload::Quiz(items) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].question.as_deref(), Some("Q1"));
            }
            other => panic!("expected quiz payload, got {other:?}"),
        }
    }

    #[test]
    fn bare_array_is_a_quiz() {
        let payload = classify(json!([{"question": "Q1"}]));

        assert!(matches!(payload, AnalysisPayload::Quiz(items) if items.len() == 1));
    }

    #[test]
    fn flowchart_envelope_preferred_over_flow() {
        let payload = classify(json!({
            "flowchart": {"nodes": [{"id": "a"}]},
            "flow": {"nodes": [{"id": "b"}]}
        }));

        match payload {
            AnalysisPayload::Chart(Some(chart)) => {
                assert_eq!(chart.nodes[0].id.as_deref(), Some("a"));
            }
            other => panic!("expected chart payload, got {other:?}"),
        }
    }

    #[test]
    fn flow_envelope_used_when_flowchart_missing() {
        let payload = classify(json!({"flow": {"nodes": [{"id": "b"}]}}));

        assert!(matches!(payload, AnalysisPayload::Chart(Some(_))));
    }

    #[test]
    fn null_flowchart_falls_through_to_flow() {
        let payload = classify(json!({
            "flowchart": null,
            "flow": {"nodes": []}
        }));

        assert!(matches!(payload, AnalysisPayload::Chart(Some(_))));
    }

    #[test]
    fn top_level_chart() {
        let payload = classify(json!({"nodes": [], "edges": []}));

        assert!(matches!(payload, AnalysisPayload::Chart(Some(_))));
    }

    #[test]
    fn unusable_object_is_an_empty_chart() {
        let payload = classify(json!({"unrelated": true}));

        assert_eq!(payload, AnalysisPayload::Chart(None));
    }
}

mod from_str {
    use super::*;

    #[test]
    fn strict_json_parses_directly() {
        let payload: AnalysisPayload = r#"{"summary": "ok"}"#
            .parse()
            .expect("strict JSON should parse");

        assert_eq!(payload, AnalysisPayload::Summary("ok".to_string()));
    }

    #[test]
    fn fenced_chart_is_recovered() {
        let text = "```json\n{\"nodes\": [{\"id\": \"a\"}], \"edges\": []}\n```";
        let payload: AnalysisPayload = text.parse().expect("fenced JSON should be recovered");

        assert!(matches!(payload, AnalysisPayload::Chart(Some(_))));
    }

    #[test]
    fn fenced_quiz_array_is_recovered() {
        let text = "Here you go:\n```json\n[{\"question\": \"Q1\"}]\n```";
        let payload: AnalysisPayload = text.parse().expect("fenced array should be recovered");

        assert!(matches!(payload, AnalysisPayload::Quiz(_)));
    }

    #[test]
    fn plain_prose_errors() {
        let result = "I could not produce a flowchart, sorry.".parse::<AnalysisPayload>();

        assert!(result.is_err());
    }
}

//! Recovery of JSON documents from raw model output.
//!
//! Generating models are asked for bare JSON but routinely wrap it in code
//! fences, use single quotes, or add commentary around the document. The
//! repair steps here mirror what the upstream service applies before
//! parsing: convert single quotes to double quotes, drop code fences, then
//! slice from the first opening bracket to the last closing one. The quote
//! conversion is naive (it also rewrites apostrophes inside values), but a
//! mangled value is preferable to losing the whole document.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde_json::Value;

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:json)?").expect("code fence pattern is valid"));

/// Recovers a JSON object from raw response text.
pub fn object(text: &str) -> Option<Value> {
    slice_parse(&repair(text), '{', '}')
}

/// Recovers a JSON array from raw response text.
pub fn array(text: &str) -> Option<Value> {
    slice_parse(&repair(text), '[', ']')
}

/// Recovers whichever document opens first in the text, object or array.
pub fn document(text: &str) -> Option<Value> {
    let repaired = repair(text);

    let array_first = match (repaired.find('{'), repaired.find('[')) {
        (None, Some(_)) => true,
        (Some(obj), Some(arr)) => arr < obj,
        _ => false,
    };

    if array_first {
        slice_parse(&repaired, '[', ']').or_else(|| slice_parse(&repaired, '{', '}'))
    } else {
        slice_parse(&repaired, '{', '}').or_else(|| slice_parse(&repaired, '[', ']'))
    }
}

fn slice_parse(repaired: &str, open: char, close: char) -> Option<Value> {
    let candidate = match (repaired.find(open), repaired.rfind(close)) {
        (Some(start), Some(end)) if start < end => &repaired[start..=end],
        _ => repaired,
    };

    match serde_json::from_str(candidate) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(err:err; "JSON recovery failed");
            None
        }
    }
}

fn repair(text: &str) -> String {
    let text = text.replace('\'', "\"");
    CODE_FENCE.replace_all(&text, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_from_fenced_output() {
        let text = "```json\n{\"nodes\": [], \"edges\": []}\n```";

        let value = object(text).expect("fenced object should be recovered");
        assert!(value["nodes"].is_array());
    }

    #[test]
    fn test_object_from_single_quoted_output() {
        let text = "{'nodes': [{'id': '1', 'label': 'Start'}], 'edges': []}";

        let value = object(text).expect("single-quoted object should be recovered");
        assert_eq!(value["nodes"][0]["label"], "Start");
    }

    #[test]
    fn test_object_surrounded_by_commentary() {
        let text = "Here is the flowchart you asked for:\n{\"nodes\": []}\nLet me know!";

        let value = object(text).expect("object should be sliced out of commentary");
        assert!(value["nodes"].is_array());
    }

    #[test]
    fn test_array_recovery() {
        let text = "Sure! ```json\n[{\"question\": \"Q1\"}]\n```";

        let value = array(text).expect("fenced array should be recovered");
        assert_eq!(value[0]["question"], "Q1");
    }

    #[test]
    fn test_document_prefers_first_opener() {
        let text = "[{\"question\": \"Q1\"}]";

        let value = document(text).expect("array should be recovered");
        assert!(value.is_array(), "array of objects must not collapse to its first object");
    }

    #[test]
    fn test_document_object() {
        let value = document("{\"nodes\": []} trailing [1, 2]").expect("object should win");
        assert!(value.is_object());
    }

    #[test]
    fn test_unrecoverable_text() {
        assert!(object("no json here at all").is_none());
        assert!(array("still nothing").is_none());
        assert!(document("nothing again").is_none());
    }
}

//! Permissive decoding of learning-assistant backend payloads.
//!
//! The upstream document-analysis service answers with loosely-typed JSON:
//! sometimes a flowchart (under a `flowchart` or `flow` envelope, or at the
//! top level), sometimes a `summary` string, sometimes a `quiz` array, and
//! sometimes all of it wrapped in code fences or commentary the generating
//! model added on its own. This crate recovers a usable document from that
//! text and classifies it into an [`AnalysisPayload`].
//!
//! Decoding is deliberately forgiving: alternate field spellings are folded
//! together, scalar values are coerced to strings, and anything unusable is
//! represented as absence rather than as an error. The only error surfaced is
//! [`PayloadError::NoDocument`], raised when no JSON document can be
//! recovered from the response text at all.

mod envelope;
mod error;
pub mod extract;
mod raw;

#[cfg(test)]
mod payload_tests;

pub use envelope::AnalysisPayload;
pub use error::PayloadError;
pub use raw::{RawChart, RawChartEdge, RawChartNode, RawQuizItem, scalar_to_string};

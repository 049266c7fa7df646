//! Quiz questions, submissions, and grading reports.
//!
//! Option keys are fixed to `A`–`D`. [`IndexMap`] keeps that order stable
//! through serialization, so consumers always see options in display order.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The multiple-choice option keys, in display order.
pub const OPTION_KEYS: [&str; 4] = ["A", "B", "C", "D"];

/// A normalized multiple-choice question.
///
/// `options` always carries exactly the keys in [`OPTION_KEYS`]; a key whose
/// text was missing upstream maps to an empty string. `answer` is trimmed and
/// uppercased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: IndexMap<String, String>,
    pub answer: String,
}

/// A quiz together with the answers a user selected.
///
/// `answers` maps question index to the selected option key. On the wire the
/// keys are stringified indices (`{"0": "A"}`), which serde handles
/// transparently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSubmission {
    #[serde(default)]
    pub quiz: Vec<QuizQuestion>,
    #[serde(default)]
    pub answers: HashMap<usize, String>,
}

/// The graded outcome for a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOutcome {
    pub index: usize,
    pub question: String,
    pub selected: String,
    pub correct: String,
    pub ok: bool,
}

/// The graded result for a whole submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizReport {
    pub score: usize,
    pub total: usize,
    pub results: Vec<QuizOutcome>,
}

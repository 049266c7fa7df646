//! Trellis - layout and structuring for AI learning-assistant content.
//!
//! A document-analysis service answers uploads with loosely-shaped JSON:
//! flowcharts, summaries, or quizzes. Trellis decodes those responses,
//! classifies them, and turns each into a displayable artifact: a layered
//! top-down chart layout, heading/bullet summary sections, or a normalized
//! (and gradeable) quiz.

pub mod config;

mod error;
mod grading;
mod layout;
mod summarize;

pub use trellis_core::{chart, geometry, quiz, summary};
pub use trellis_payload::{
    AnalysisPayload, PayloadError, RawChart, RawChartEdge, RawChartNode, RawQuizItem,
};

pub use error::TrellisError;
pub use grading::{grade_quiz, normalize_quiz};
pub use layout::layout_chart;
pub use summarize::{clean_summary, structure_summary};

use log::{debug, info};
use serde::Serialize;

use trellis_core::chart::ChartLayout;
use trellis_core::quiz::{QuizQuestion, QuizReport, QuizSubmission};
use trellis_core::summary::Section;

use config::AppConfig;

/// A fully processed backend response, ready for serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Analysis {
    Chart(ChartLayout),
    Summary(Vec<Section>),
    Quiz(Vec<QuizQuestion>),
}

/// Entry point for decoding and processing backend responses.
///
/// Holds the processing configuration and exposes one method per stage, plus
/// [`Assistant::process`] to run whichever stage a payload calls for.
///
/// # Examples
///
/// ```rust
/// use trellis::{Assistant, config::AppConfig};
///
/// let assistant = Assistant::new(AppConfig::default());
///
/// let payload = assistant
///     .decode(r#"{"nodes": [{"id": "a", "label": "Start"}], "edges": []}"#)
///     .expect("valid JSON decodes");
///
/// let analysis = assistant.process(&payload);
/// ```
#[derive(Debug, Default)]
pub struct Assistant {
    config: AppConfig,
}

impl Assistant {
    /// Creates a new assistant with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Decodes backend response text into a classified payload.
    ///
    /// Strict JSON is parsed directly; decorated model output (code fences,
    /// single quotes, surrounding commentary) goes through relaxed recovery.
    ///
    /// # Errors
    ///
    /// Returns `TrellisError` when no JSON document can be recovered from
    /// the text at all.
    pub fn decode(&self, text: &str) -> Result<AnalysisPayload, TrellisError> {
        info!(len = text.len(); "Decoding backend response");

        let payload = text.parse::<AnalysisPayload>()?;

        debug!("Response decoded");
        Ok(payload)
    }

    /// Processes a payload with whichever stage it calls for.
    pub fn process(&self, payload: &AnalysisPayload) -> Analysis {
        match payload {
            AnalysisPayload::Chart(raw) => Analysis::Chart(self.layout_chart(raw.as_ref())),
            AnalysisPayload::Summary(text) => Analysis::Summary(self.structure_summary(text)),
            AnalysisPayload::Quiz(items) => Analysis::Quiz(self.normalize_quiz(items)),
        }
    }

    /// Lays out a chart on the configured grid.
    ///
    /// Never fails: an absent or nodeless chart lays out as an empty
    /// [`ChartLayout`].
    pub fn layout_chart(&self, raw: Option<&RawChart>) -> ChartLayout {
        layout::layout_chart(raw, self.config.layout())
    }

    /// Structures summary text into heading/bullet sections.
    pub fn structure_summary(&self, text: &str) -> Vec<Section> {
        summarize::structure_summary(text, self.config.summary())
    }

    /// Normalizes raw quiz items into displayable questions.
    pub fn normalize_quiz(&self, items: &[RawQuizItem]) -> Vec<QuizQuestion> {
        grading::normalize_quiz(items, self.config.quiz())
    }

    /// Grades a quiz submission.
    pub fn grade_quiz(&self, submission: &QuizSubmission) -> QuizReport {
        grading::grade_quiz(submission)
    }
}

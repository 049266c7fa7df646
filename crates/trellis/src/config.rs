//! Configuration types for trellis processing.
//!
//! This module provides configuration structures that control how charts are
//! laid out, how summaries are segmented, and how quizzes are normalized.
//! All types implement [`serde::Deserialize`] for flexible loading from
//! external sources (the CLI loads them from TOML).
//!
//! # Example
//!
//! ```
//! # use trellis::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.quiz().max_questions(), 10);
//! ```

use serde::Deserialize;

/// Top-level application configuration combining all processing options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Chart layout section.
    #[serde(default)]
    layout: LayoutOptions,

    /// Summary structuring section.
    #[serde(default)]
    summary: SummaryOptions,

    /// Quiz normalization section.
    #[serde(default)]
    quiz: QuizOptions,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(layout: LayoutOptions, summary: SummaryOptions, quiz: QuizOptions) -> Self {
        Self {
            layout,
            summary,
            quiz,
        }
    }

    /// Returns the chart layout options.
    pub fn layout(&self) -> &LayoutOptions {
        &self.layout
    }

    /// Returns the summary structuring options.
    pub fn summary(&self) -> &SummaryOptions {
        &self.summary
    }

    /// Returns the quiz normalization options.
    pub fn quiz(&self) -> &QuizOptions {
        &self.quiz
    }
}

/// Grid geometry for the layered chart layout.
///
/// Nodes are placed on a fixed top-down grid: layer index selects the row,
/// position within the layer selects the column. There is no collision
/// avoidance or re-centering.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    origin_x: f32,
    origin_y: f32,
    column_width: f32,
    row_height: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            origin_x: 40.0,
            origin_y: 40.0,
            column_width: 260.0,
            row_height: 120.0,
        }
    }
}

impl LayoutOptions {
    /// X coordinate of the first column.
    pub fn origin_x(&self) -> f32 {
        self.origin_x
    }

    /// Y coordinate of the first row.
    pub fn origin_y(&self) -> f32 {
        self.origin_y
    }

    /// Horizontal spacing between columns.
    pub fn column_width(&self) -> f32 {
        self.column_width
    }

    /// Vertical spacing between rows.
    pub fn row_height(&self) -> f32 {
        self.row_height
    }
}

/// Thresholds for the summary segmentation heuristic.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SummaryOptions {
    max_heading_words: usize,
    min_point_chars: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            max_heading_words: 6,
            min_point_chars: 4,
        }
    }
}

impl SummaryOptions {
    /// Longest word count a line may have and still read as a heading.
    pub fn max_heading_words(&self) -> usize {
        self.max_heading_words
    }

    /// Sentence fragments at or below this length are discarded.
    pub fn min_point_chars(&self) -> usize {
        self.min_point_chars
    }
}

/// Limits applied while normalizing generated quizzes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QuizOptions {
    max_questions: usize,
}

impl Default for QuizOptions {
    fn default() -> Self {
        Self { max_questions: 10 }
    }
}

impl QuizOptions {
    /// Upper bound on questions kept from a generated quiz.
    pub fn max_questions(&self) -> usize {
        self.max_questions
    }
}

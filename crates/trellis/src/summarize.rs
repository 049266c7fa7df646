//! Summary cleaning and structuring.
//!
//! Turns the flat summary string returned by the analysis service into
//! heading/bullet sections for display. This is a best-effort text
//! segmentation, not a parser: it assumes Latin-script sentence punctuation
//! (plus the fullwidth colon) and will happily read a short declarative
//! sentence as a heading. That trade-off is accepted: the output feeds a
//! reading view, nothing downstream depends on the split being exact.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use trellis_core::summary::Section;

use crate::config::SummaryOptions;

static MARKDOWN_DECOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[#*_`>~\-]+").expect("decoration pattern is valid"));
static MULTI_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern is valid"));
static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("blank line pattern is valid"));
static TITLE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Za-z0-9\s]{1,60}$").expect("title pattern is valid"));
static SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]").expect("sentence pattern is valid"));
static FRAGMENT_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("boundary pattern is valid"));

/// Strips markdown decoration and collapses whitespace.
///
/// The passes run in a fixed order: decoration characters first, then runs
/// of two or more whitespace characters down to one space (which also folds
/// most blank lines), then any surviving blank lines down to one newline.
pub fn clean_summary(text: &str) -> String {
    let text = MARKDOWN_DECOR.replace_all(text, "");
    let text = MULTI_WHITESPACE.replace_all(&text, " ");
    let text = BLANK_LINES.replace_all(&text, "\n");
    text.trim().to_string()
}

/// Segments cleaned summary text into heading/bullet sections.
///
/// A line reads as a heading when it ends with a colon, or when it is a
/// short title-cased phrase. Everything else is split into sentence-like
/// fragments and accumulated under the current heading (initially
/// "Overview"). Sections without points are dropped. When nothing at all is
/// collected from a non-empty text, the whole text becomes a single
/// "Overview" section.
pub fn structure_summary(text: &str, options: &SummaryOptions) -> Vec<Section> {
    let cleaned = clean_summary(text);

    let mut sections = Vec::new();
    let mut current = Section::new("Overview");

    for line in cleaned.split('\n').map(str::trim).filter(|l| !l.is_empty()) {
        if is_heading(line, options) {
            if !current.points.is_empty() {
                sections.push(current);
            }
            current = Section::new(strip_trailing_colon(line));
        } else {
            current
                .points
                .extend(split_fragments(line, options.min_point_chars()));
        }
    }
    if !current.points.is_empty() {
        sections.push(current);
    }

    if sections.is_empty() && !cleaned.is_empty() {
        let mut points: Vec<String> = SENTENCE
            .find_iter(&cleaned)
            .map(|m| m.as_str().trim().to_string())
            .collect();
        if points.is_empty() {
            points.push(cleaned.clone());
        }
        sections.push(Section {
            heading: "Overview".to_string(),
            points,
        });
    }

    debug!(section_count = sections.len(); "Summary structured");
    sections
}

fn is_heading(line: &str, options: &SummaryOptions) -> bool {
    if line.ends_with(':') || line.ends_with('：') {
        return true;
    }
    TITLE_LINE.is_match(line) && line.split_whitespace().count() <= options.max_heading_words()
}

fn strip_trailing_colon(line: &str) -> &str {
    line.strip_suffix(':')
        .or_else(|| line.strip_suffix('：'))
        .unwrap_or(line)
}

/// Splits a line after sentence-terminal punctuation followed by whitespace,
/// keeping fragments longer than `min_chars` characters.
fn split_fragments(line: &str, min_chars: usize) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut start = 0;

    for boundary in FRAGMENT_BOUNDARY.find_iter(line) {
        // The terminal punctuation is a single byte; keep it, drop the
        // whitespace run.
        fragments.push(&line[start..=boundary.start()]);
        start = boundary.end();
    }
    if start < line.len() {
        fragments.push(&line[start..]);
    }

    fragments
        .into_iter()
        .filter(|fragment| fragment.chars().count() > min_chars)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structure(text: &str) -> Vec<Section> {
        structure_summary(text, &SummaryOptions::default())
    }

    #[test]
    fn test_clean_strips_markdown() {
        assert_eq!(
            clean_summary("## **Photosynthesis** is `key`"),
            "Photosynthesis is key"
        );
    }

    #[test]
    fn test_clean_collapses_whitespace() {
        assert_eq!(clean_summary("one  two\n\nthree"), "one two three");
    }

    #[test]
    fn test_colon_heading() {
        let sections = structure("Key Concepts:\nCells divide. Energy flows.");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading, "Key Concepts");
        assert_eq!(sections[0].points, ["Cells divide.", "Energy flows."]);
    }

    #[test]
    fn test_fullwidth_colon_heading() {
        let sections = structure("核心：\nCells divide everywhere.");

        assert_eq!(sections[0].heading, "核心");
    }

    #[test]
    fn test_title_case_heading() {
        let sections = structure("Cell Biology Basics\nMitochondria produce energy. They are small.");

        assert_eq!(sections[0].heading, "Cell Biology Basics");
        assert_eq!(sections[0].points.len(), 2);
    }

    #[test]
    fn test_long_phrase_is_not_a_heading() {
        let sections =
            structure("This sentence has rather too many words to be a heading really\nPoint one follows.");

        assert_eq!(sections[0].heading, "Overview");
        assert_eq!(sections[0].points.len(), 2);
    }

    #[test]
    fn test_heading_without_points_is_dropped() {
        let sections = structure("First Heading:\nSecond Heading:\nActual content lives here.");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading, "Second Heading");
    }

    #[test]
    fn test_short_fragments_filtered() {
        let sections = structure("Go. The mitochondria is the powerhouse of the cell.");

        assert_eq!(
            sections[0].points,
            ["The mitochondria is the powerhouse of the cell."]
        );
    }

    #[test]
    fn test_whole_text_fallback() {
        // A single short heading-like line collects no points, so the whole
        // text falls back into one section.
        let sections = structure("Photosynthesis");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].heading, "Overview");
        assert_eq!(sections[0].points, ["Photosynthesis"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(structure("").is_empty());
        assert!(structure("   \n  ").is_empty());
    }

    #[test]
    fn test_multiple_sections() {
        let text = "Introduction:\nPlants make food from light. This is vital.\nDetails:\nChlorophyll absorbs photons efficiently.";
        let sections = structure(text);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].heading, "Introduction");
        assert_eq!(sections[0].points.len(), 2);
        assert_eq!(sections[1].heading, "Details");
        assert_eq!(sections[1].points.len(), 1);
    }
}

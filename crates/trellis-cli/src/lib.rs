//! CLI logic for the trellis toolkit.
//!
//! This module contains the core CLI logic: load configuration, read the
//! input file, run the selected processing mode, and write the result as
//! pretty-printed JSON.

pub mod error;

mod args;
mod config;

pub use args::{Args, Command};
pub use error::CliError;

use std::fs;

use log::{info, warn};
use serde::Serialize;

use trellis::{AnalysisPayload, Assistant, chart::ChartLayout, quiz::QuizSubmission};

/// Run the trellis CLI application
///
/// Reads the input file, processes it according to the selected mode, and
/// writes the resulting JSON to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Unrecoverable payload text
/// - Malformed quiz submissions
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.command.input(),
        output_path = args.command.output();
        "Processing input"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let assistant = Assistant::new(app_config);

    let text = fs::read_to_string(args.command.input())?;

    match &args.command {
        Command::Auto { output, .. } => {
            let payload = assistant.decode(&text)?;
            let analysis = assistant.process(&payload);
            write_json(output, &analysis)?;
        }
        Command::Chart { output, .. } => {
            let payload = assistant.decode(&text)?;
            let layout = match &payload {
                AnalysisPayload::Chart(raw) => assistant.layout_chart(raw.as_ref()),
                _ => {
                    warn!("Payload is not a chart, emitting an empty layout");
                    ChartLayout::default()
                }
            };
            write_json(output, &layout)?;
        }
        Command::Summary { output, .. } => {
            // A summary payload is unwrapped first; anything else is taken
            // as the summary text itself.
            let sections = match assistant.decode(&text) {
                Ok(AnalysisPayload::Summary(summary)) => assistant.structure_summary(&summary),
                _ => assistant.structure_summary(&text),
            };
            write_json(output, &sections)?;
        }
        Command::Quiz { output, .. } => {
            let submission: QuizSubmission =
                serde_json::from_str(&text).map_err(CliError::Submission)?;
            let report = assistant.grade_quiz(&submission);
            write_json(output, &report)?;
        }
    }

    info!(output_file = args.command.output(); "Result written");

    Ok(())
}

fn write_json<T: Serialize>(path: &str, value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value).map_err(CliError::Encode)?;
    fs::write(path, json)?;
    Ok(())
}

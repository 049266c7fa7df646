//! Command-line argument definitions for the trellis CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the processing mode, input/output paths,
//! configuration file, and logging verbosity.

use clap::{Parser, Subcommand};

/// Command-line arguments for the trellis toolkit
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Processing mode
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

/// Processing modes, one per backend payload shape
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify a backend payload and emit whatever it processes into
    Auto {
        /// Path to the payload file
        input: String,

        /// Path to the output JSON file
        #[arg(short, long, default_value = "out.json")]
        output: String,
    },

    /// Lay out a flowchart payload as positioned nodes and edges
    Chart {
        /// Path to the payload file
        input: String,

        /// Path to the output JSON file
        #[arg(short, long, default_value = "out.json")]
        output: String,
    },

    /// Structure summary text into headed bullet sections
    Summary {
        /// Path to the payload or plain-text file
        input: String,

        /// Path to the output JSON file
        #[arg(short, long, default_value = "out.json")]
        output: String,
    },

    /// Grade a quiz submission
    Quiz {
        /// Path to the submission file (quiz plus selected answers)
        input: String,

        /// Path to the output JSON file
        #[arg(short, long, default_value = "out.json")]
        output: String,
    },
}

impl Command {
    /// Returns the input path for any mode.
    pub fn input(&self) -> &str {
        match self {
            Self::Auto { input, .. }
            | Self::Chart { input, .. }
            | Self::Summary { input, .. }
            | Self::Quiz { input, .. } => input,
        }
    }

    /// Returns the output path for any mode.
    pub fn output(&self) -> &str {
        match self {
            Self::Auto { output, .. }
            | Self::Chart { output, .. }
            | Self::Summary { output, .. }
            | Self::Quiz { output, .. } => output,
        }
    }
}

//! Structured summary sections.

use serde::{Deserialize, Serialize};

/// A heading with the bullet points accumulated under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub points: Vec<String>,
}

impl Section {
    /// Creates an empty section under the given heading.
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            points: Vec::new(),
        }
    }
}

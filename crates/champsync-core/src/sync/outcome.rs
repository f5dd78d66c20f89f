//! Per-icon results of a sync run.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::safe_name::icon_file_name;

/// What happened to one manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Icon fetched with HTTP 200 and written to `path`.
    Saved {
        name: String,
        safe_name: String,
        path: PathBuf,
    },
    /// Server answered with something other than 200; nothing written.
    NotFound { name: String, id: i64, status: u32 },
    /// The request (or writing the fetched icon) failed.
    TransportError { name: String, message: String },
}

impl Outcome {
    /// Display name of the champion this outcome is about.
    pub fn name(&self) -> &str {
        match self {
            Outcome::Saved { name, .. }
            | Outcome::NotFound { name, .. }
            | Outcome::TransportError { name, .. } => name,
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, Outcome::Saved { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Saved {
                name, safe_name, ..
            } => write!(f, "Saved: {} -> {}", name, icon_file_name(safe_name)),
            Outcome::NotFound { name, id, status } => {
                write!(f, "Not found: {} (id {}, HTTP {})", name, id, status)
            }
            Outcome::TransportError { name, message } => {
                write!(f, "Error downloading {}: {}", name, message)
            }
        }
    }
}

/// Ordered outcomes of one run, one per processed entry.
#[derive(Debug, Clone)]
pub struct OutcomeLog {
    output_dir: PathBuf,
    outcomes: Vec<Outcome>,
}

impl OutcomeLog {
    pub(crate) fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            outcomes: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn saved(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_saved()).count()
    }

    pub fn not_found(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::NotFound { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::TransportError { .. }))
            .count()
    }

    /// Final line printed after the run.
    pub fn summary(&self) -> String {
        format!(
            "Done. {} saved, {} not found, {} failed; icons are in '{}'.",
            self.saved(),
            self.not_found(),
            self.failed(),
            self.output_dir.display()
        )
    }
}

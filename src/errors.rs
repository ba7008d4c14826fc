use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimelineError {
    // IO-related.
    #[error("Error reading file '{}'.", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error writing file '{}'.", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parsing-related.
    #[error("Invalid month: {month}.")]
    InvalidMonth { month: i64 },
    #[error("Invalid year: {year} (supported years are 0000 to 9999).")]
    InvalidYear { year: i64 },
    #[error("Invalid calendar month string: '{value}' (expected YYYY-MM).")]
    InvalidFormat { value: String },
    #[error("Failed to load projects: {details}.")]
    Deserialization { details: String },
    #[error("Failed to export projects: {details}.")]
    Serialization { details: String },
    #[error("Failed to export timeline as CSV: {details}.")]
    Csv { details: String },

    // Record-store-related.
    #[error("Invalid input: {details}.")]
    Validation { details: String },
    #[error("Project index {index} out of range (store has {len} projects).")]
    ProjectIndexOutOfRange { index: usize, len: usize },
    #[error(
        "Position index {index} out of range (project {project_index} has {len} positions)."
    )]
    PositionIndexOutOfRange {
        project_index: usize,
        index: usize,
        len: usize,
    },
}

impl TimelineError {
    pub(crate) fn validation(details: impl Into<String>) -> Self {
        TimelineError::Validation {
            details: details.into(),
        }
    }

    pub(crate) fn deserialization(details: impl std::fmt::Display) -> Self {
        TimelineError::Deserialization {
            details: details.to_string(),
        }
    }

    /// Prefixes a load failure with the record it came from. Other errors are
    /// folded into a load failure first.
    pub(crate) fn within(self, context: impl std::fmt::Display) -> Self {
        let details = match self {
            TimelineError::Deserialization { details } => details,
            other => other.to_string(),
        };
        TimelineError::Deserialization {
            details: format!("{context}: {details}"),
        }
    }

    pub(crate) fn serialization(details: impl std::fmt::Display) -> Self {
        TimelineError::Serialization {
            details: details.to_string(),
        }
    }

    pub fn is_index_out_of_range(&self) -> bool {
        matches!(
            self,
            TimelineError::ProjectIndexOutOfRange { .. }
                | TimelineError::PositionIndexOutOfRange { .. }
        )
    }
}

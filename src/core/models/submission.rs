//! Submission model
//!
//! One student's attempt at one assignment. Submissions are rebuilt from the
//! collaborator feed on every load and discarded afterwards.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Grade, GradingLabel, SubmissionStatus};

/// An uploaded artifact belonging to a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionFile {
    /// Opaque locator of the file
    pub url: String,

    /// When the file was last modified
    pub timestamp: Option<DateTime<Utc>>,
}

/// A submission to classify
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// Owner of the submission
    pub user_id: i64,

    /// Lifecycle state reported by the collaborator
    pub status: SubmissionStatus,

    /// Grading workflow label reported by the collaborator
    pub grading_label: GradingLabel,

    /// Grade, if one was recorded and could be read
    pub grade: Option<Grade>,

    /// Uploaded files, in feed order
    pub files: Vec<SubmissionFile>,

    /// When the submission content was last modified
    pub timestamp: Option<DateTime<Utc>>,

    /// Zero-based attempt counter
    pub attempt_number: u32,
}

impl Submission {
    /// Create a submission with no grade, files or timestamp
    #[must_use]
    pub fn new(user_id: i64, status: SubmissionStatus) -> Self {
        Self {
            user_id,
            status,
            grading_label: GradingLabel::default(),
            grade: None,
            files: Vec::new(),
            timestamp: None,
            attempt_number: 0,
        }
    }

    /// Set the grading label
    #[must_use]
    pub fn with_label(mut self, label: GradingLabel) -> Self {
        self.grading_label = label;
        self
    }

    /// Set the grade
    #[must_use]
    pub fn with_grade(mut self, grade: Grade) -> Self {
        self.grade = Some(grade);
        self
    }

    /// Set the last content modification instant
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Append an uploaded file
    #[must_use]
    pub fn with_file(mut self, file: SubmissionFile) -> Self {
        self.files.push(file);
        self
    }

    /// Most recent modification instant across the uploaded files
    #[must_use]
    pub fn last_file_modified(&self) -> Option<DateTime<Utc>> {
        self.files.iter().filter_map(|f| f.timestamp).max()
    }
}

impl std::fmt::Display for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Submission(user_id={}, status={}, grading={}, files={})",
            self.user_id,
            self.status,
            self.grading_label,
            self.files.len()
        )
    }
}

//! Submission status and grading label
//!
//! The collaborator reports both as free-form strings. Known literals map to
//! variants; anything else is kept verbatim in `Other` so new upstream
//! values never break comparisons.

use serde::Serialize;

/// Lifecycle state of a submission
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// Nothing submitted yet
    #[default]
    New,
    /// Saved but not submitted for grading
    Draft,
    /// Submitted for grading
    Submitted,
    /// Reopened for another attempt
    Reopened,
    /// A status this crate does not know about
    #[serde(untagged)]
    Other(String),
}

impl SubmissionStatus {
    /// The literal the collaborator uses for this status
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::New => "new",
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::Reopened => "reopened",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for SubmissionStatus {
    fn from(s: &str) -> Self {
        match s {
            "new" => Self::New,
            "draft" => Self::Draft,
            "submitted" => Self::Submitted,
            "reopened" => Self::Reopened,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grading workflow label attached to a submission
///
/// Only `released` carries meaning for resolution; the marking workflow
/// states are kept so reports can show them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GradingLabel {
    /// Not graded
    #[default]
    NotGraded,
    /// Graded, visibility depends on the workflow
    Graded,
    /// Marker started but has not finished
    InMarking,
    /// Marking finished, waiting for release
    ReadyForRelease,
    /// Grade and feedback visible to the student
    Released,
    /// A label this crate does not know about
    #[serde(untagged)]
    Other(String),
}

impl GradingLabel {
    /// The literal the collaborator uses for this label
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::NotGraded => "notgraded",
            Self::Graded => "graded",
            Self::InMarking => "inmarking",
            Self::ReadyForRelease => "readyforrelease",
            Self::Released => "released",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for GradingLabel {
    fn from(s: &str) -> Self {
        match s {
            "" | "notgraded" | "not graded" => Self::NotGraded,
            "graded" => Self::Graded,
            "inmarking" => Self::InMarking,
            "readyforrelease" => Self::ReadyForRelease,
            "released" => Self::Released,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for GradingLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Assignment model
//!
//! An assignment with the submissions loaded for it in one query cycle.

use super::Submission;
use crate::core::services::resolver;

/// An assignment and its submissions
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Internal id used by the collaborator API
    pub id: i64,

    /// Course module id, the one shown in the course UI
    pub cmid: i64,

    /// Assignment name
    pub name: String,

    /// Assignment description
    pub description: String,

    /// Locators of files attached to the assignment itself
    pub attachments: Vec<String>,

    /// One submission per user
    pub submissions: Vec<Submission>,
}

impl Assignment {
    /// Submissions that need grading
    #[must_use]
    pub fn ungraded(&self) -> Vec<&Submission> {
        self.submissions.iter().filter(|s| resolver::needs_grading(s)).collect()
    }

    /// Submissions finalized for grading
    #[must_use]
    pub fn submitted(&self) -> Vec<&Submission> {
        self.submissions.iter().filter(|s| resolver::is_submitted(s)).collect()
    }

    /// Submission of a given user
    #[must_use]
    pub fn submission_of(&self, user_id: i64) -> Option<&Submission> {
        self.submissions.iter().find(|s| s.user_id == user_id)
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Assignment(id={}, name={}, submissions={})",
            self.id,
            self.name,
            self.submissions.len()
        )
    }
}

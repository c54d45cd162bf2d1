//! Grading-state resolution
//!
//! Reconciles the three independently timestamped facts of a submission
//! (content, grade, files) into a small set of flags. Resolution never
//! fails: fields that are absent degrade the flags to `false`, except where
//! absence itself means work is pending (no grade yet).

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::models::{Grade, GradingLabel, Submission, SubmissionStatus};

/// Derived grading facts of one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SubmissionState {
    /// Finalized for grading
    pub submitted: bool,
    /// Content changed at or after the grade was saved
    pub resubmitted: bool,
    /// Grade visible to the student
    pub released: bool,
    /// A grader has to look at it
    pub needs_grading: bool,
}

/// Resolve every flag of a submission
///
/// # Examples
///
/// ```
/// use gradesheet::core::models::{Submission, SubmissionStatus};
/// use gradesheet::core::services::resolve;
///
/// let sub = Submission::new(1, SubmissionStatus::Submitted)
///     .with_timestamp(chrono::Utc::now());
/// let state = resolve(&sub);
/// assert!(state.submitted);
/// assert!(state.needs_grading);
/// assert!(!state.resubmitted);
/// ```
#[must_use]
pub fn resolve(submission: &Submission) -> SubmissionState {
    SubmissionState {
        submitted: is_submitted(submission),
        resubmitted: is_resubmitted(submission),
        released: is_released(submission),
        needs_grading: needs_grading(submission),
    }
}

/// Whether the submission was finalized for grading
#[must_use]
pub fn is_submitted(submission: &Submission) -> bool {
    submission.status == SubmissionStatus::Submitted
}

/// Whether the grade is stale relative to the submission content
///
/// A grade saved at the same instant as the last content change counts as
/// stale: timestamps have second granularity and simultaneity is ambiguous.
#[must_use]
pub fn is_resubmitted(submission: &Submission) -> bool {
    match (submission.grade.as_ref().and_then(|g| g.timestamp), submission.timestamp) {
        (Some(graded_at), Some(modified_at)) => graded_at <= modified_at,
        _ => false,
    }
}

/// Whether the grade has been released to the student
#[must_use]
pub fn is_released(submission: &Submission) -> bool {
    submission.grading_label == GradingLabel::Released
}

/// Whether a grader still has to look at the submission
#[must_use]
pub fn needs_grading(submission: &Submission) -> bool {
    if !has_timestamp(submission.timestamp) || !is_submitted(submission) {
        return false;
    }

    match &submission.grade {
        None => true,
        Some(grade) => {
            is_resubmitted(submission) || !has_timestamp(grade.timestamp) || grade.is_withheld()
        },
    }
}

/// Whether a grade is usable as a final grade
#[must_use]
pub fn has_grade(grade: Option<&Grade>) -> bool {
    grade.is_some_and(|g| !g.is_withheld())
}

/// Whether an instant was recorded
#[must_use]
pub const fn has_timestamp(timestamp: Option<DateTime<Utc>>) -> bool {
    timestamp.is_some()
}

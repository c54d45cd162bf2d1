//! Ungraded work statistics
//!
//! Aggregates resolved submission states across the assignments of a
//! course. Ignored students still count as submissions but not as ungraded
//! work.

use std::collections::BTreeMap;

use log::info;
use serde::Serialize;

use super::resolver;
use crate::core::models::{Assignment, IgnoreList};

/// Counts for one assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ExerciseStatistics {
    /// Submissions loaded for the assignment
    pub submissions: usize,
    /// Submissions that need grading, ignored students excluded
    pub ungraded: usize,
    /// Submitted work changed after grading
    pub resubmissions: usize,
    /// Submitted work graded but not released
    pub unreleased: usize,
    /// Ungraded submissions of ignored students
    pub ignored: usize,
}

/// Counts for a course
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SubmissionStatistics {
    /// Submissions across all assignments
    pub total_submissions: usize,
    /// Ungraded submissions across all assignments
    pub total_ungraded: usize,
    /// Resubmissions across all assignments
    pub total_resubmissions: usize,
    /// Unreleased grades across all assignments
    pub total_unreleased: usize,
    /// Per-assignment counts keyed by assignment name
    pub exercises: BTreeMap<String, ExerciseStatistics>,
}

/// Count one assignment
#[must_use]
pub fn exercise_statistics(assignment: &Assignment, ignore: &IgnoreList) -> ExerciseStatistics {
    let mut stats = ExerciseStatistics {
        submissions: assignment.submissions.len(),
        ..ExerciseStatistics::default()
    };

    for submission in assignment.submitted() {
        let state = resolver::resolve(submission);
        if state.resubmitted {
            stats.resubmissions += 1;
        }
        if resolver::has_grade(submission.grade.as_ref()) && !state.released {
            stats.unreleased += 1;
        }
    }

    let mut ignored_names = Vec::new();
    for submission in assignment.ungraded() {
        match ignore.name_of(submission.user_id) {
            Some(name) => {
                stats.ignored += 1;
                ignored_names.push(name);
            },
            None => stats.ungraded += 1,
        }
    }

    if !ignored_names.is_empty() {
        info!(
            "Ignored {} submissions for assignment '{}' (CMID {}, ID {}): {}",
            ignored_names.len(),
            assignment.name,
            assignment.cmid,
            assignment.id,
            ignored_names.join(", ")
        );
    }

    stats
}

/// Count every assignment of a course
#[must_use]
pub fn submissions_statistics(
    assignments: &[Assignment],
    ignore: &IgnoreList,
) -> SubmissionStatistics {
    let mut totals = SubmissionStatistics::default();

    for assignment in assignments {
        let stats = exercise_statistics(assignment, ignore);

        if stats.ungraded != 0 {
            info!(
                "Total ungraded for assignment [{}] (CMID {}, ID {}): {}/{}",
                assignment.name, assignment.cmid, assignment.id, stats.ungraded, stats.submissions
            );
        }

        totals.total_submissions += stats.submissions;
        totals.total_ungraded += stats.ungraded;
        totals.total_resubmissions += stats.resubmissions;
        totals.total_unreleased += stats.unreleased;
        totals.exercises.insert(assignment.name.clone(), stats);
    }

    totals
}

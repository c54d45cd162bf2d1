//! Property-based tests for grading-state resolution and normalization
//!
//! Uses proptest to verify properties that should hold for all inputs.

use gradesheet::core::models::{Grade, IgnoreList, Submission, SubmissionStatus};
use gradesheet::core::services::{needs_grading, normalize, resolve};
use proptest::prelude::*;

use crate::common::fixtures::{HEADER, at};

fn status() -> impl Strategy<Value = SubmissionStatus> {
    prop_oneof![
        Just(SubmissionStatus::New),
        Just(SubmissionStatus::Draft),
        Just(SubmissionStatus::Submitted),
        Just(SubmissionStatus::Reopened),
        "[a-z]{3,8}".prop_map(|s| SubmissionStatus::from(s.as_str())),
    ]
}

fn grade() -> impl Strategy<Value = Option<Grade>> {
    proptest::option::of((-1.0f64..100.0, proptest::option::of(0i64..10_000)).prop_map(
        |(value, saved)| Grade {
            grade: value,
            timestamp: saved.map(at),
        },
    ))
}

fn submission(
    status: SubmissionStatus,
    grade: Option<Grade>,
    modified: Option<i64>,
) -> Submission {
    let mut sub = Submission::new(1, status);
    sub.grade = grade;
    sub.timestamp = modified.map(at);
    sub
}

proptest! {
    /// Work that is not finalized never needs grading
    #[test]
    fn unsubmitted_never_needs_grading(
        status in status(),
        grade in grade(),
        modified in proptest::option::of(0i64..10_000)
    ) {
        prop_assume!(status != SubmissionStatus::Submitted);
        let sub = submission(status, grade, modified);
        prop_assert!(!needs_grading(&sub));
    }

    /// Submitted work without a grade needs grading and is never a resubmission
    #[test]
    fn ungraded_submission_needs_grading(modified in 0i64..10_000) {
        let sub = submission(SubmissionStatus::Submitted, None, Some(modified));
        let state = resolve(&sub);
        prop_assert!(state.needs_grading);
        prop_assert!(!state.resubmitted);
    }

    /// A usable grade saved after the last change settles the submission
    #[test]
    fn fresh_grade_is_settled(
        value in 0.0f64..100.0,
        modified in 0i64..10_000,
        delay in 1i64..10_000
    ) {
        let grade = Grade { grade: value, timestamp: Some(at(modified + delay)) };
        let sub = submission(SubmissionStatus::Submitted, Some(grade), Some(modified));
        prop_assert!(!needs_grading(&sub));
    }

    /// A grade saved at or before the last change is stale
    #[test]
    fn stale_grade_is_resubmission(
        value in -1.0f64..100.0,
        saved in 0i64..10_000,
        delay in 0i64..10_000
    ) {
        let grade = Grade { grade: value, timestamp: Some(at(saved)) };
        let sub = submission(SubmissionStatus::Submitted, Some(grade), Some(saved + delay));
        let state = resolve(&sub);
        prop_assert!(state.resubmitted);
        prop_assert!(state.needs_grading);
    }

    /// Normalized worksheets come out sorted and normalize to themselves
    #[test]
    fn normalize_is_sorted_and_idempotent(names in proptest::collection::vec("[A-Za-z]{1,8}", 0..8)) {
        let mut raw = format!("{HEADER}\n");
        for (i, name) in names.iter().enumerate() {
            raw.push_str(&format!("{i},{name},{name}@x.com,Submitted for grading,,,\n"));
        }

        let once = normalize(&raw, &IgnoreList::new()).unwrap();
        let twice = normalize(&once.table, &IgnoreList::new()).unwrap();
        prop_assert_eq!(&once.table, &twice.table);
        prop_assert_eq!(once.counts.new_submissions, names.len());

        let emitted: Vec<&str> = once
            .table
            .lines()
            .skip(1)
            .map(|line| line.split(',').nth(1).unwrap())
            .collect();
        let mut expected: Vec<&str> = names.iter().map(String::as_str).collect();
        expected.sort_unstable();
        prop_assert_eq!(emitted, expected);
    }
}

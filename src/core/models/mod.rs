//! Domain models for gradesheet
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Submission`] - One student's attempt at an assignment
//! - [`Grade`] - A recorded evaluation with its save time
//! - [`Assignment`] - An assignment with its loaded submissions
//! - [`IgnoreList`] - Students left out of grading work
//! - [`HeaderMap`] - Column lookup for a grading worksheet

mod assignment;
mod grade;
mod ignore;
mod status;
mod submission;
mod worksheet;

pub use assignment::Assignment;
pub use grade::{Grade, MissingGrade};
pub use ignore::IgnoreList;
pub use status::{GradingLabel, SubmissionStatus};
pub use submission::{Submission, SubmissionFile};
pub use worksheet::{Column, HeaderMap, InvalidCsv, WorksheetError};

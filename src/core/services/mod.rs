//! Business logic services
//!
//! Pure logic that operates on domain models. Worksheet processing touches
//! storage only through the [`WorksheetStore`](crate::core::ports::WorksheetStore) port.
//!
//! - [`resolver`] - Grading state of a single submission
//! - [`normalizer`] - Grading worksheet filtering, projection and sorting
//! - [`statistics`] - Ungraded work across assignments

pub mod normalizer;
pub mod resolver;
pub mod statistics;

pub use normalizer::{
    Classification, NormalizeCounts, Normalized, has_grade, is_empty_field, is_resubmission,
    normalize, parse_timestamp, process, sort_by_full_name, write_canonical,
};
pub use resolver::{SubmissionState, needs_grading, resolve};
pub use statistics::{ExerciseStatistics, SubmissionStatistics, submissions_statistics};

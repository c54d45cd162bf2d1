//! gradesheet - grading-state resolution and grading worksheet normalization
//!
//! This library decides, from the timestamped submission, grade and file
//! records of a course, which submissions still need grading, which were
//! resubmitted after grading and which grades are not released yet. It also
//! turns raw grading worksheet exports into canonical worksheets that can be
//! uploaded back.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
pub mod shared;

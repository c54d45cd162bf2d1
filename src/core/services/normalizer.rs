//! Grading worksheet normalization
//!
//! Turns a raw grading worksheet export into the canonical worksheet that is
//! uploaded back after grading: rows that need no attention are dropped, the
//! rest are reduced to the canonical columns and sorted by full name.
//!
//! A row survives when it has a submission, its student is not ignored, and
//! it is either ungraded or a resubmission. Resubmissions are recognised by
//! the explicit follow-up marker in the status text, or else by the grade
//! having been saved at or before the last submission change.

use std::collections::HashSet;
use std::path::Path;

use chrono::{NaiveDateTime, Weekday};
use log::{debug, info, warn};
use serde::Serialize;

use crate::core::models::{Column, HeaderMap, IgnoreList, InvalidCsv, WorksheetError};
use crate::core::ports::WorksheetStore;
use crate::paths;
use crate::shared::table;

/// Status suffix the collaborator uses for an explicit resubmission
pub const FOLLOW_UP_MARKER: &str = "- follow up submission received";

/// Status suffix of a graded submission
pub const GRADED_MARKER: &str = "- Graded";

/// Status prefix of a row without a submission
pub const NO_SUBMISSION_PREFIX: &str = "No submission";

/// Timestamp format of worksheet cells, e.g. `Thursday, 9 February 2023, 8:52 AM`
pub const TIMESTAMP_FORMAT: &str = "%A, %d %B %Y, %I:%M %p";

/// [`TIMESTAMP_FORMAT`] after the weekday name
const DATE_FORMAT: &str = "%d %B %Y, %I:%M %p";

/// How a surviving row is counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// First submission waiting for a grade
    NewSubmission,
    /// Submission changed after it was graded
    Resubmission,
}

/// Row counts of a normalized worksheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NormalizeCounts {
    /// Rows classified as new submissions
    pub new_submissions: usize,
    /// Rows classified as resubmissions
    pub resubmissions: usize,
}

impl NormalizeCounts {
    /// Count one classified row
    pub fn record(&mut self, classification: Classification) {
        match classification {
            Classification::NewSubmission => self.new_submissions += 1,
            Classification::Resubmission => self.resubmissions += 1,
        }
    }

    /// All rows kept
    #[must_use]
    pub const fn total(&self) -> usize {
        self.new_submissions + self.resubmissions
    }
}

impl std::ops::AddAssign for NormalizeCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.new_submissions += rhs.new_submissions;
        self.resubmissions += rhs.resubmissions;
    }
}

/// A canonical worksheet and its counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Canonical table text
    pub table: String,
    /// Kept row counts
    pub counts: NormalizeCounts,
}

/// Whether a cell holds no value (blank, whitespace or a lone dash)
#[must_use]
pub fn is_empty_field(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == "-"
}

/// Whether a grade cell holds a usable grade
///
/// Zero is a grade; negative values and text that is not a number are not.
#[must_use]
pub fn has_grade(value: &str) -> bool {
    !is_empty_field(value) && value.trim().parse::<f64>().is_ok_and(|g| g >= 0.0)
}

/// Parse a worksheet timestamp cell
///
/// Empty cells are `None`; anything else must parse. The weekday name must
/// be a weekday but is not checked against the date.
pub fn parse_timestamp(value: &str) -> Result<Option<NaiveDateTime>, WorksheetError> {
    if is_empty_field(value) {
        return Ok(None);
    }

    let trimmed = value.trim();
    let parsed = match trimmed.split_once(", ") {
        Some((weekday, dated)) if weekday.parse::<Weekday>().is_ok() => {
            NaiveDateTime::parse_from_str(dated, DATE_FORMAT)
        },
        _ => NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT),
    };
    parsed
        .map(Some)
        .map_err(|source| WorksheetError::Timestamp {
            value: value.to_string(),
            source,
        })
}

/// Whether a row describes a resubmission
///
/// The follow-up marker wins. Otherwise both timestamps are required and the
/// row is a resubmission when the grade was saved at or before the last
/// submission change. Without both timestamps the row is a new submission
/// and neither cell is parsed.
pub fn is_resubmission(
    status: &str,
    last_modified_grade: Option<&str>,
    last_modified_submission: Option<&str>,
) -> Result<bool, WorksheetError> {
    if status.ends_with(FOLLOW_UP_MARKER) {
        return Ok(true);
    }

    let (Some(graded), Some(modified)) = (
        last_modified_grade.filter(|c| !is_empty_field(c)),
        last_modified_submission.filter(|c| !is_empty_field(c)),
    ) else {
        return Ok(false);
    };

    Ok(match (parse_timestamp(graded)?, parse_timestamp(modified)?) {
        (Some(graded_at), Some(modified_at)) => graded_at <= modified_at,
        _ => false,
    })
}

/// Whether the status text alone rules a row out
///
/// Rows without a submission are always dropped; graded rows only when they
/// are not resubmissions.
#[must_use]
pub fn should_skip_status(status: &str, resubmitted: bool) -> bool {
    status.starts_with(NO_SUBMISSION_PREFIX) || (status.ends_with(GRADED_MARKER) && !resubmitted)
}

/// Classify one data row, `None` when the row is dropped
pub fn classify_row(
    header: &HeaderMap,
    row: &[String],
    ignore: &IgnoreList,
) -> Result<Option<Classification>, WorksheetError> {
    let field = |column| header.get(row, column).unwrap_or_default();

    let status = field(Column::Status);
    if status.starts_with(NO_SUBMISSION_PREFIX) {
        return Ok(None);
    }

    let name = field(Column::FullName);
    if ignore.contains_name(name) {
        debug!("Student {name} made a submission, ignoring it...");
        return Ok(None);
    }

    let resubmitted = is_resubmission(
        status,
        header.get(row, Column::LastModifiedGrade),
        header.get(row, Column::LastModifiedSubmission),
    )?;

    if should_skip_status(status, resubmitted) {
        return Ok(None);
    }
    if has_grade(field(Column::Grade)) && !resubmitted {
        return Ok(None);
    }

    Ok(Some(if resubmitted {
        Classification::Resubmission
    } else {
        Classification::NewSubmission
    }))
}

/// Filter and project a raw worksheet, keeping input row order
pub fn write_canonical(raw: &str, ignore: &IgnoreList) -> Result<Normalized, WorksheetError> {
    let mut records = table::parse(raw)?.into_iter();
    let header = records.next().ok_or(InvalidCsv::Empty)?;
    let map = HeaderMap::from_header(&header.fields)?;
    if !map.has(Column::LastModifiedSubmission) {
        debug!("No submission timestamps, only the follow-up marker marks resubmissions");
    }

    let mut rows = vec![map.canonical_header()];
    let mut seen = HashSet::new();
    let mut counts = NormalizeCounts::default();

    for record in records {
        if record.fields.len() < map.width() {
            return Err(InvalidCsv::ShortRow {
                line: record.line,
                expected: map.width(),
                found: record.fields.len(),
            }
            .into());
        }

        let Some(classification) = classify_row(&map, &record.fields, ignore)? else {
            continue;
        };

        let projected = map.project(&record.fields);
        if !seen.insert(projected.clone()) {
            debug!("Duplicate row at line {} dropped", record.line);
            continue;
        }

        counts.record(classification);
        rows.push(projected);
    }

    Ok(Normalized {
        table: table::write(&rows),
        counts,
    })
}

/// Sort a canonical worksheet by full name, keeping the header first
///
/// The sort is stable and compares names byte-wise.
pub fn sort_by_full_name(canonical: &str) -> Result<String, WorksheetError> {
    let mut records = table::parse(canonical)?.into_iter();
    let header = records.next().ok_or(InvalidCsv::Empty)?;
    let name_idx = header
        .fields
        .iter()
        .position(|h| h == Column::FullName.header())
        .ok_or_else(|| InvalidCsv::MissingColumns {
            missing: vec![Column::FullName.header().to_string()],
        })?;

    let mut rows: Vec<Vec<String>> = records.map(|r| r.fields).collect();
    rows.sort_by(|a, b| a.get(name_idx).cmp(&b.get(name_idx)));
    rows.insert(0, header.fields);

    Ok(table::write(&rows))
}

/// Normalize a raw worksheet into a sorted canonical worksheet
///
/// # Examples
///
/// ```
/// use gradesheet::core::models::IgnoreList;
/// use gradesheet::core::services::normalize;
///
/// let raw = "Identifier,Full name,Email address,Status,Grade,Last modified (grade),Feedback comments\n\
///            Participant 2,Zed,z@x.com,Submitted for grading,,,\n\
///            Participant 1,Amy,a@x.com,Submitted for grading,,,\n";
/// let normalized = normalize(raw, &IgnoreList::new()).unwrap();
/// assert_eq!(normalized.counts.new_submissions, 2);
/// assert!(normalized.table.find("Amy").unwrap() < normalized.table.find("Zed").unwrap());
/// ```
pub fn normalize(raw: &str, ignore: &IgnoreList) -> Result<Normalized, WorksheetError> {
    let canonical = write_canonical(raw, ignore)?;
    Ok(Normalized {
        table: sort_by_full_name(&canonical.table)?,
        counts: canonical.counts,
    })
}

/// Normalize the worksheet at `path` in place
///
/// The canonical worksheet is written next to the source (see
/// [`paths::processed_path`]); the source is removed only once that write
/// succeeded, and the written worksheet is then sorted.
pub fn process<S: WorksheetStore + ?Sized>(
    store: &S,
    path: &Path,
    ignore: &IgnoreList,
) -> Result<NormalizeCounts, WorksheetError> {
    let raw = store.read(path)?;
    let canonical = write_canonical(&raw, ignore)?;

    let target = paths::processed_path(path);
    if store.exists(&target) {
        warn!("Overwriting {}", target.display());
    }
    store.write(&target, &canonical.table)?;
    store.remove(path)?;

    let written = store.read(&target)?;
    store.write(&target, &sort_by_full_name(&written)?)?;

    info!(
        "Processed {}: {} new, {} resubmitted",
        path.display(),
        canonical.counts.new_submissions,
        canonical.counts.resubmissions
    );
    Ok(canonical.counts)
}

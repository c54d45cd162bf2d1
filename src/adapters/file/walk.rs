//! Batch processing of a download folder

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Serialize;
use walkdir::WalkDir;

use super::FsWorksheetStore;
use crate::core::models::{IgnoreList, WorksheetError};
use crate::core::services::{NormalizeCounts, process};
use crate::paths;

/// Outcome of processing a folder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FolderReport {
    /// Counts per processed worksheet
    pub processed: Vec<(PathBuf, NormalizeCounts)>,
    /// Worksheets skipped because they are not grading worksheets
    pub skipped: Vec<PathBuf>,
}

impl FolderReport {
    /// Counts summed over all processed worksheets
    #[must_use]
    pub fn totals(&self) -> NormalizeCounts {
        let mut totals = NormalizeCounts::default();
        for (_, counts) in &self.processed {
            totals += *counts;
        }
        totals
    }
}

/// Find raw worksheets below `root`, sorted by path
pub fn collect_worksheets(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry?;
        if entry.file_type().is_file() && paths::is_raw_worksheet(entry.path()) {
            found.push(entry.into_path());
        }
    }

    // Sort for deterministic output
    found.sort();
    Ok(found)
}

/// Process every raw worksheet below `root`
///
/// Files that are not valid grading worksheets are skipped with a warning;
/// any other failure stops the batch.
pub fn process_folder(root: &Path, ignore: &IgnoreList) -> anyhow::Result<FolderReport> {
    let store = FsWorksheetStore::new();
    let mut report = FolderReport::default();

    for path in collect_worksheets(root)? {
        match process(&store, &path, ignore) {
            Ok(counts) => report.processed.push((path, counts)),
            Err(WorksheetError::InvalidCsv(e)) => {
                warn!("Skipping {}: {e}", path.display());
                report.skipped.push(path);
            },
            Err(e) => {
                let context = format!("Failed to process {}", path.display());
                return Err(anyhow::Error::new(e).context(context));
            },
        }
    }

    let totals = report.totals();
    info!(
        "Processed {} worksheet(s) in {}: {} new, {} resubmitted, {} skipped",
        report.processed.len(),
        root.display(),
        totals.new_submissions,
        totals.resubmissions,
        report.skipped.len()
    );
    Ok(report)
}

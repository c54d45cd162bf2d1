//! Normalize command - turn raw worksheets into canonical worksheets

use std::path::{Path, PathBuf};

use anyhow::Context;

use gradesheet::adapters::file::{FsWorksheetStore, process_folder};
use gradesheet::core::models::IgnoreList;
use gradesheet::core::services::{NormalizeCounts, process};
use gradesheet::output::{NormalizeResult, OutputMode, WorksheetResult};
use gradesheet::paths;

fn worksheet_result(path: &Path, counts: NormalizeCounts) -> WorksheetResult {
    WorksheetResult {
        source: path.display().to_string(),
        output: paths::processed_path(path).display().to_string(),
        new_submissions: counts.new_submissions,
        resubmissions: counts.resubmissions,
    }
}

/// Normalize worksheet files and every raw worksheet below folders
///
/// An explicitly named file must be a valid worksheet; inside folders,
/// files that are not are skipped.
pub fn normalize(
    targets: &[PathBuf],
    ignore: &IgnoreList,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let store = FsWorksheetStore::new();
    let mut result = NormalizeResult::default();

    for target in targets {
        if target.is_dir() {
            let report = process_folder(target, ignore)?;
            for (path, counts) in &report.processed {
                result.push(worksheet_result(path, *counts));
            }
            result.skipped.extend(report.skipped.iter().map(|p| p.display().to_string()));
        } else {
            let counts = process(&store, target, ignore)
                .with_context(|| format!("Failed to normalize {}", target.display()))?;
            result.push(worksheet_result(target, counts));
        }
    }

    result.render(output_mode);
    Ok(())
}

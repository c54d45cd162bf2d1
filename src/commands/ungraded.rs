//! Ungraded command - report work waiting for a grade

use std::fs;
use std::path::Path;

use anyhow::Context;

use gradesheet::adapters::moodle;
use gradesheet::core::models::IgnoreList;
use gradesheet::core::services::submissions_statistics;
use gradesheet::output::{OutputMode, StatisticsResult};

/// Load a feed and print its ungraded statistics
pub fn ungraded(feed: &Path, ignore: &IgnoreList, output_mode: OutputMode) -> anyhow::Result<()> {
    let json = fs::read_to_string(feed)
        .with_context(|| format!("Failed to read feed {}", feed.display()))?;
    let assignments = moodle::parse_feed(&json)
        .with_context(|| format!("Invalid feed {}", feed.display()))?;

    let result = StatisticsResult {
        statistics: submissions_statistics(&assignments, ignore),
    };
    result.render(output_mode);
    Ok(())
}

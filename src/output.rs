//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::services::SubmissionStatistics;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Counts for one processed worksheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorksheetResult {
    /// Raw worksheet that was processed
    pub source: String,
    /// Canonical worksheet that was written
    pub output: String,
    /// New submissions kept
    pub new_submissions: usize,
    /// Resubmissions kept
    pub resubmissions: usize,
}

/// Result of a normalize operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizeResult {
    /// Processed worksheets
    pub worksheets: Vec<WorksheetResult>,
    /// Files skipped as invalid worksheets
    pub skipped: Vec<String>,
    /// New submissions across all worksheets
    pub total_new_submissions: usize,
    /// Resubmissions across all worksheets
    pub total_resubmissions: usize,
}

/// Result of an ungraded statistics operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatisticsResult {
    /// Aggregated statistics
    #[serde(flatten)]
    pub statistics: SubmissionStatistics,
}

impl NormalizeResult {
    /// Add one processed worksheet
    pub fn push(&mut self, worksheet: WorksheetResult) {
        self.total_new_submissions += worksheet.new_submissions;
        self.total_resubmissions += worksheet.resubmissions;
        self.worksheets.push(worksheet);
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.worksheets.is_empty() && self.skipped.is_empty() {
            println!("No worksheets found.");
            return;
        }

        for w in &self.worksheets {
            println!("{}", w.output);
            println!(
                "  {} new submission(s), {} resubmission(s)",
                w.new_submissions, w.resubmissions
            );
        }
        for s in &self.skipped {
            println!("{} {s}", "Skipped:".yellow());
        }

        println!(
            "\nTotal: {} new submission(s), {} resubmission(s)",
            self.total_new_submissions.to_string().bold(),
            self.total_resubmissions.to_string().bold()
        );
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl StatisticsResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let stats = &self.statistics;
        if stats.exercises.is_empty() {
            println!("No assignments found.");
            return;
        }

        println!("Assignments:\n");
        for (name, e) in &stats.exercises {
            let ungraded = if e.ungraded > 0 {
                e.ungraded.to_string().red().bold()
            } else {
                e.ungraded.to_string().green()
            };
            println!("  {name}");
            println!(
                "    ungraded {ungraded}/{}  resubmissions {}  unreleased {}",
                e.submissions, e.resubmissions, e.unreleased
            );
            if e.ignored > 0 {
                println!("    ignored {}", e.ignored);
            }
        }

        println!(
            "\nTotal: {} ungraded of {} submission(s), {} resubmission(s), {} unreleased",
            stats.total_ungraded.to_string().bold(),
            stats.total_submissions,
            stats.total_resubmissions,
            stats.total_unreleased
        );
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

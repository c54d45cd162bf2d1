//! Assignment feed decoding
//!
//! Turns the collaborator's JSON (assignments with their submissions and
//! grades, as returned by `mod_assign_get_assignments`,
//! `mod_assign_get_submissions` and `mod_assign_get_grades`) into
//! [`Assignment`] values. Instants arrive as Unix seconds.

use chrono::{DateTime, Utc};
use log::warn;
use serde::Deserialize;

use crate::core::models::{
    Assignment, Grade, GradingLabel, MissingGrade, Submission, SubmissionFile, SubmissionStatus,
};

/// Plugin type that carries uploaded files
const FILE_PLUGIN: &str = "file";

/// A feed file: every assignment of a course
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Feed {
    /// Assignment entries
    #[serde(default)]
    pub assignments: Vec<AssignmentJson>,
}

/// One assignment with the submissions and grades loaded for it
#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentJson {
    /// Internal assignment id
    pub id: i64,
    /// Course module id
    pub cmid: i64,
    /// Assignment name
    pub name: String,
    /// Description
    #[serde(default)]
    pub intro: String,
    /// Files attached to the assignment
    #[serde(default)]
    pub introattachments: Vec<FileJson>,
    /// Submission records
    #[serde(default)]
    pub submissions: Vec<SubmissionJson>,
    /// Grade records
    #[serde(default)]
    pub grades: Vec<GradeJson>,
}

/// A submission record
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionJson {
    /// Owner
    pub userid: i64,
    /// Lifecycle status literal
    pub status: String,
    /// Grading workflow literal
    #[serde(default)]
    pub gradingstatus: String,
    /// Last content modification
    #[serde(default)]
    pub timemodified: Option<i64>,
    /// Attempt counter
    #[serde(default)]
    pub attemptnumber: u32,
    /// Submission plugins
    #[serde(default)]
    pub plugins: Vec<PluginJson>,
}

/// A submission plugin
#[derive(Debug, Clone, Deserialize)]
pub struct PluginJson {
    /// Plugin type, `file` for uploads
    #[serde(rename = "type")]
    pub kind: String,
    /// File areas of the plugin
    #[serde(default)]
    pub fileareas: Vec<FileAreaJson>,
}

/// A file area of a plugin
#[derive(Debug, Clone, Deserialize)]
pub struct FileAreaJson {
    /// Files in the area
    #[serde(default)]
    pub files: Vec<FileJson>,
}

/// An uploaded file
#[derive(Debug, Clone, Deserialize)]
pub struct FileJson {
    /// Download locator
    pub fileurl: String,
    /// Last modification
    #[serde(default)]
    pub timemodified: Option<i64>,
}

/// A grade record
#[derive(Debug, Clone, Deserialize)]
pub struct GradeJson {
    /// Graded user
    pub userid: i64,
    /// When the grade was last saved
    #[serde(default)]
    pub timemodified: Option<i64>,
    /// Grade value, usually a decimal string
    #[serde(default)]
    pub grade: serde_json::Value,
}

impl GradeJson {
    /// Grade value as text
    #[must_use]
    pub fn raw_grade(&self) -> String {
        match &self.grade {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

fn instant(secs: Option<i64>) -> Option<DateTime<Utc>> {
    secs.and_then(|s| DateTime::from_timestamp(s, 0))
}

impl From<&FileJson> for SubmissionFile {
    fn from(file: &FileJson) -> Self {
        Self {
            url: file.fileurl.clone(),
            timestamp: instant(file.timemodified),
        }
    }
}

/// Build a submission from its record and the user's grade record
pub fn build_submission(
    submission: &SubmissionJson,
    grade: Option<&GradeJson>,
) -> Result<Submission, MissingGrade> {
    let grade = grade
        .map(|g| Grade::parse(&g.raw_grade(), instant(g.timemodified)))
        .transpose()?;

    let files = submission
        .plugins
        .iter()
        .filter(|p| p.kind == FILE_PLUGIN)
        .flat_map(|p| &p.fileareas)
        .flat_map(|area| &area.files)
        .map(SubmissionFile::from)
        .collect();

    Ok(Submission {
        user_id: submission.userid,
        status: SubmissionStatus::from(submission.status.as_str()),
        grading_label: GradingLabel::from(submission.gradingstatus.as_str()),
        grade,
        files,
        timestamp: instant(submission.timemodified),
        attempt_number: submission.attemptnumber,
    })
}

/// Build an assignment, one submission per user
///
/// Submissions that were never started are left out. A grade record whose
/// value is not a number is logged and the submission is kept ungraded.
/// When a user has several records, the highest attempt is kept.
#[must_use]
pub fn build_assignment(entry: &AssignmentJson) -> Assignment {
    let mut submissions: Vec<Submission> = Vec::new();

    for record in &entry.submissions {
        if SubmissionStatus::from(record.status.as_str()) == SubmissionStatus::New {
            continue;
        }

        let grade = entry.grades.iter().find(|g| g.userid == record.userid);
        let submission = match build_submission(record, grade) {
            Ok(submission) => submission,
            Err(e) => {
                warn!(
                    "Missing grade for user {} in assignment \"{}\" (CMID {}): {e}",
                    record.userid, entry.name, entry.cmid
                );
                match build_submission(record, None) {
                    Ok(submission) => submission,
                    Err(_) => continue,
                }
            },
        };

        // One submission per user, the latest attempt wins
        match submissions.iter_mut().find(|s| s.user_id == submission.user_id) {
            Some(existing) if existing.attempt_number < submission.attempt_number => {
                *existing = submission;
            },
            Some(existing) => {
                warn!(
                    "Duplicate submission for user {} in \"{}\" (attempt {}) ignored",
                    existing.user_id, entry.name, submission.attempt_number
                );
            },
            None => submissions.push(submission),
        }
    }

    Assignment {
        id: entry.id,
        cmid: entry.cmid,
        name: entry.name.clone(),
        description: entry.intro.clone(),
        attachments: entry.introattachments.iter().map(|a| a.fileurl.clone()).collect(),
        submissions,
    }
}

/// Parse a feed document into assignments
pub fn parse_feed(json: &str) -> anyhow::Result<Vec<Assignment>> {
    let feed: Feed = serde_json::from_str(json)?;
    Ok(feed.assignments.iter().map(build_assignment).collect())
}

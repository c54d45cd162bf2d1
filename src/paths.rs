//! Centralized path definitions for gradesheet
//!
//! ## Storage Layout
//!
//! ### Worksheets
//!
//! ```text
//! downloads/
//! ├── grades-assignment-1.csv             # Raw export (removed once processed)
//! └── grades-assignment-1_processed.csv   # Canonical worksheet
//! ```
//!
//! ### Global (User-Level)
//!
//! ```text
//! ~/.config/gradesheet/
//! └── config.toml               # Ignored students
//! ```

use std::path::{Path, PathBuf};

// =============================================================================
// Worksheet paths
// =============================================================================

/// Extension of worksheet files
pub const WORKSHEET_EXTENSION: &str = "csv";

/// Suffix appended to the stem of a processed worksheet
pub const PROCESSED_SUFFIX: &str = "_processed";

/// Get the canonical worksheet path for a raw worksheet.
///
/// `grades.csv` becomes `grades_processed.csv` in the same directory.
#[must_use]
pub fn processed_path(raw: &Path) -> PathBuf {
    let stem = raw.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let name = match raw.extension() {
        Some(ext) => format!("{stem}{PROCESSED_SUFFIX}.{}", ext.to_string_lossy()),
        None => format!("{stem}{PROCESSED_SUFFIX}"),
    };
    raw.with_file_name(name)
}

/// Whether a path names a canonical worksheet produced by this tool.
#[must_use]
pub fn is_processed(path: &Path) -> bool {
    path.file_stem().is_some_and(|s| s.to_string_lossy().ends_with(PROCESSED_SUFFIX))
}

/// Whether a path names a raw worksheet that still needs processing.
#[must_use]
pub fn is_raw_worksheet(path: &Path) -> bool {
    path.extension().is_some_and(|e| e.eq_ignore_ascii_case(WORKSHEET_EXTENSION))
        && !is_processed(path)
}

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Global config directory name
const GLOBAL_DIR: &str = "gradesheet";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global gradesheet directory.
///
/// Returns `~/.config/gradesheet` on Linux, the platform config dir elsewhere.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Contains the ignored students.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

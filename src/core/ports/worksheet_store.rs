//! Worksheet store port
//!
//! Defines where worksheets are read from and written to.

use std::path::Path;

/// Storage for worksheet text
///
/// A store owns one location per path; callers serialize access to the
/// same path.
pub trait WorksheetStore: Send + Sync {
    /// Read the whole worksheet at `path`
    fn read(&self, path: &Path) -> anyhow::Result<String>;

    /// Replace the worksheet at `path` with `content`
    fn write(&self, path: &Path, content: &str) -> anyhow::Result<()>;

    /// Delete the worksheet at `path`
    fn remove(&self, path: &Path) -> anyhow::Result<()>;

    /// Whether a worksheet exists at `path`
    fn exists(&self, path: &Path) -> bool;
}

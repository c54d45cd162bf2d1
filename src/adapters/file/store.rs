//! File-backed worksheet store

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::core::ports::WorksheetStore;

/// Worksheet store reading and writing files directly
#[derive(Debug, Clone, Copy, Default)]
pub struct FsWorksheetStore;

impl FsWorksheetStore {
    /// Create a new store
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl WorksheetStore for FsWorksheetStore {
    fn read(&self, path: &Path) -> anyhow::Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }

    fn write(&self, path: &Path, content: &str) -> anyhow::Result<()> {
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
    }

    fn remove(&self, path: &Path) -> anyhow::Result<()> {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

//! Global configuration management
//!
//! Config is stored at `~/.config/gradesheet/config.toml` (XDG standard):
//!
//! ```toml
//! [students_to_ignore]
//! 1234 = "Test Student"
//! ```
//!
//! `GRADESHEET_STUDENTS_TO_IGNORE` (`1234=Test Student,5678=Other`) adds to
//! or overrides the file entries. The configuration is loaded once and
//! handed to the services as an [`IgnoreList`].

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::IgnoreList;
use crate::paths;

/// Environment variable holding extra ignored students
pub const IGNORE_ENV: &str = "GRADESHEET_STUDENTS_TO_IGNORE";

/// Global gradesheet configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Students to leave out, keyed by user id
    #[serde(default)]
    pub students_to_ignore: BTreeMap<String, String>,
}

impl Config {
    /// Load the config from the default location
    ///
    /// A missing file yields the default config.
    pub fn load() -> anyhow::Result<Self> {
        let path = paths::global_config();
        if path.exists() { Self::load_from(&path) } else { Ok(Self::default()) }
    }

    /// Load the config from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Parse config text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Merge entries in the `id=Name,id=Name` form over the file entries
    pub fn merge_env_value(&mut self, value: &str) -> anyhow::Result<()> {
        for entry in value.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (id, name) = entry
                .split_once('=')
                .with_context(|| format!("Expected id=Name, got {entry:?}"))?;
            self.students_to_ignore.insert(id.trim().to_string(), name.trim().to_string());
        }
        Ok(())
    }

    /// Apply `GRADESHEET_STUDENTS_TO_IGNORE` if set
    pub fn merge_env(&mut self) -> anyhow::Result<()> {
        match std::env::var(IGNORE_ENV) {
            Ok(value) => self.merge_env_value(&value).with_context(|| format!("Invalid {IGNORE_ENV}")),
            Err(_) => Ok(()),
        }
    }

    /// Build the ignore list, validating user ids
    pub fn ignore_list(&self) -> anyhow::Result<IgnoreList> {
        self.students_to_ignore
            .iter()
            .map(|(id, name)| {
                let user_id = id
                    .trim()
                    .parse::<i64>()
                    .with_context(|| format!("Ignored student id {id:?} is not a number"))?;
                Ok((user_id, name.clone()))
            })
            .collect()
    }
}

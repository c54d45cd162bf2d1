//! Ignored students
//!
//! Users whose submissions are left out of worksheets and ungraded counts,
//! keyed by user id with the display name used for worksheet matching.

use std::collections::BTreeMap;

/// Students to leave out of grading work
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList {
    students: BTreeMap<i64, String>,
}

impl IgnoreList {
    /// Create an empty ignore list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a student
    pub fn insert(&mut self, user_id: i64, name: impl Into<String>) {
        self.students.insert(user_id, name.into());
    }

    /// Whether a worksheet full name belongs to an ignored student
    ///
    /// Surrounding whitespace on the candidate is dropped; the comparison
    /// itself is exact and case-sensitive.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        let name = name.trim();
        self.students.values().any(|n| n == name)
    }

    /// Display name of an ignored user
    #[must_use]
    pub fn name_of(&self, user_id: i64) -> Option<&str> {
        self.students.get(&user_id).map(String::as_str)
    }

    /// Number of ignored students
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether nobody is ignored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl FromIterator<(i64, String)> for IgnoreList {
    fn from_iter<I: IntoIterator<Item = (i64, String)>>(iter: I) -> Self {
        Self {
            students: iter.into_iter().collect(),
        }
    }
}

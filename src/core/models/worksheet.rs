//! Grading worksheet schema
//!
//! A worksheet is the flat table an instructor downloads for offline
//! grading. Column positions are whatever the header row declares, so every
//! field lookup goes through a [`HeaderMap`] built from that header.

use thiserror::Error;

/// Errors that make a worksheet unusable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCsv {
    /// There is no header row
    #[error("worksheet is empty")]
    Empty,

    /// The header lacks required columns
    #[error("headers mismatch, missing required columns: {}", missing.join(", "))]
    MissingColumns {
        /// Names of the absent columns
        missing: Vec<String>,
    },

    /// A data row is shorter than the header
    #[error("row at line {line} has {found} fields, header declares {expected}")]
    ShortRow {
        /// 1-based line the row starts on
        line: usize,
        /// Number of header columns
        expected: usize,
        /// Number of fields in the row
        found: usize,
    },

    /// A quoted field is never closed
    #[error("unterminated quoted field starting at line {line}")]
    UnterminatedQuote {
        /// 1-based line the field starts on
        line: usize,
    },
}

/// Errors raised while normalizing a worksheet
#[derive(Debug, Error)]
pub enum WorksheetError {
    /// The worksheet structure is invalid
    #[error("invalid csv: {0}")]
    InvalidCsv(#[from] InvalidCsv),

    /// A timestamp cell is present but malformed
    #[error("malformed timestamp {value:?}")]
    Timestamp {
        /// The offending cell text
        value: String,
        /// Underlying parse failure
        #[source]
        source: chrono::ParseError,
    },

    /// Reading or writing the worksheet failed
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// A worksheet column this crate reads or emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    /// Participant identifier
    Identifier,
    /// Student full name
    FullName,
    /// Student email address
    Email,
    /// Submission status text
    Status,
    /// Grade text
    Grade,
    /// Last modification of the submission
    LastModifiedSubmission,
    /// Last modification of the grade
    LastModifiedGrade,
    /// Feedback comments
    Feedback,
}

impl Column {
    /// All columns in canonical emission order
    pub const CANONICAL: [Self; 8] = [
        Self::Identifier,
        Self::FullName,
        Self::Email,
        Self::Status,
        Self::Grade,
        Self::LastModifiedSubmission,
        Self::LastModifiedGrade,
        Self::Feedback,
    ];

    /// Header text of the column
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Identifier => "Identifier",
            Self::FullName => "Full name",
            Self::Email => "Email address",
            Self::Status => "Status",
            Self::Grade => "Grade",
            Self::LastModifiedSubmission => "Last modified (submission)",
            Self::LastModifiedGrade => "Last modified (grade)",
            Self::Feedback => "Feedback comments",
        }
    }

    /// Whether a worksheet is invalid without this column
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::LastModifiedSubmission)
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.header())
    }
}

/// Name to position mapping for the columns of one worksheet
///
/// Entries are kept in canonical order, not input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMap {
    columns: Vec<(Column, usize)>,
    width: usize,
}

impl HeaderMap {
    /// Validate a header row and map its columns
    pub fn from_header(header: &[String]) -> Result<Self, InvalidCsv> {
        let position = |col: Column| header.iter().position(|h| h == col.header());

        let missing: Vec<String> = Column::CANONICAL
            .iter()
            .filter(|col| col.is_required() && position(**col).is_none())
            .map(|col| col.header().to_string())
            .collect();
        if !missing.is_empty() {
            return Err(InvalidCsv::MissingColumns { missing });
        }

        let columns = Column::CANONICAL
            .iter()
            .filter_map(|col| position(*col).map(|idx| (*col, idx)))
            .collect();

        Ok(Self {
            columns,
            width: header.len(),
        })
    }

    /// Number of fields the header declares
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Whether the worksheet carries a column
    #[must_use]
    pub fn has(&self, column: Column) -> bool {
        self.columns.iter().any(|(c, _)| *c == column)
    }

    /// Columns kept in the canonical output, in emission order
    pub fn columns(&self) -> impl Iterator<Item = Column> + '_ {
        self.columns.iter().map(|(c, _)| *c)
    }

    /// Field of a row for a column
    #[must_use]
    pub fn get<'r>(&self, row: &'r [String], column: Column) -> Option<&'r str> {
        self.columns
            .iter()
            .find(|(c, _)| *c == column)
            .and_then(|(_, idx)| row.get(*idx))
            .map(String::as_str)
    }

    /// Canonical header row
    #[must_use]
    pub fn canonical_header(&self) -> Vec<String> {
        self.columns().map(|c| c.header().to_string()).collect()
    }

    /// Reduce a row to the canonical columns
    #[must_use]
    pub fn project(&self, row: &[String]) -> Vec<String> {
        self.columns
            .iter()
            .map(|(_, idx)| row.get(*idx).cloned().unwrap_or_default())
            .collect()
    }
}

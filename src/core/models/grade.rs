//! Grade model
//!
//! A grade is one grading decision for one submission attempt. A grade can
//! only exist with a numeric value: text that does not parse yields
//! [`MissingGrade`] so "not graded yet" stays distinct from "graded as zero".

use chrono::{DateTime, Utc};
use thiserror::Error;

/// The grade record exists but its value is not a number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing grade: {raw:?} is not a numeric grade")]
pub struct MissingGrade {
    /// The raw grade text as received
    pub raw: String,
}

/// A recorded evaluation of a submission
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grade {
    /// Numeric grade value (negative means withheld)
    pub grade: f64,

    /// When the grade was last saved
    pub timestamp: Option<DateTime<Utc>>,
}

impl Grade {
    /// Build a grade from its raw text value
    ///
    /// # Examples
    ///
    /// ```
    /// use gradesheet::core::models::Grade;
    ///
    /// let grade = Grade::parse("65.00000", None).unwrap();
    /// assert!((grade.grade - 65.0).abs() < f64::EPSILON);
    ///
    /// assert!(Grade::parse("", None).is_err());
    /// ```
    pub fn parse(raw: &str, timestamp: Option<DateTime<Utc>>) -> Result<Self, MissingGrade> {
        let grade = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|g| !g.is_nan())
            .ok_or_else(|| MissingGrade {
                raw: raw.to_string(),
            })?;

        Ok(Self { grade, timestamp })
    }

    /// Whether the grade carries the negative "withheld" sentinel
    #[must_use]
    pub fn is_withheld(&self) -> bool {
        self.grade < 0.0
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.timestamp {
            Some(ts) => write!(f, "{} (saved {})", self.grade, ts.to_rfc3339()),
            None => write!(f, "{}", self.grade),
        }
    }
}

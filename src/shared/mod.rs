//! Shared utilities used across the codebase
//!
//! - [`table`] - Comma-separated table reading and writing

pub mod table;

//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file/` - Worksheet files on disk, folder batches
//! - `moodle/` - Assignment feed JSON decoding

pub mod file;
pub mod moodle;

//! Core domain logic for gradesheet
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Submission, Grade, Assignment, worksheet schema)
//! - `services/` - Status resolution, worksheet normalization, statistics
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;

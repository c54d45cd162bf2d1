//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (filesystem, remote grading services).
//!
//! Implementations live in the `adapters` module.

mod worksheet_store;

pub use worksheet_store::WorksheetStore;

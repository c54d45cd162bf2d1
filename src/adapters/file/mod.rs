//! Filesystem worksheet storage
//!
//! Implements `WorksheetStore` on plain files and processes whole download
//! folders.

mod store;
mod walk;

pub use store::FsWorksheetStore;
pub use walk::{FolderReport, collect_worksheets, process_folder};

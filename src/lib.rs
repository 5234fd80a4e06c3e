//! Core library surface for the Personal Library Manager.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as potential external tooling can reuse the same
//! pieces. Keeping the glue logic documented makes it easy to recall why each
//! re-export exists when revisiting the project.
pub mod db;
pub mod models;
pub mod ui;

/// Convenience re-export for the persistence layer. `main.rs` uses it to
/// locate the database and run the idempotent schema migration before the
/// menu comes up.
pub use db::Library;

/// The domain types that cross the layer boundary.
pub use models::{Book, LibraryStats, SearchField};

/// The interactive menu loop and its stdin/stdout entry point.
pub use ui::{run_app, App};

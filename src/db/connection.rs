use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use rusqlite::Connection;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".personal-library-manager";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "library.db";

/// Handle to the on-disk book collection. The struct stores only the database
/// path; every operation opens its own short-lived connection and lets it
/// close when the call returns, so no handle outlives the query it served and
/// an error inside one operation never wedges the next.
pub struct Library {
    db_path: PathBuf,
}

impl Library {
    /// Create a handle for an explicit database file. Used by tests and any
    /// tooling that wants to point at a collection outside the home directory.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Create a handle at the well-known per-user location,
    /// `~/.personal-library-manager/library.db`.
    pub fn at_default_location() -> Result<Self> {
        let base_dirs =
            BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
        let db_path = base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME);
        Ok(Self { db_path })
    }

    /// Open a fresh connection for one operation.
    pub(super) fn connection(&self) -> Result<Connection> {
        Connection::open(&self.db_path).context("failed to open SQLite database")
    }

    /// Create the data directory and the `books` table if either is missing.
    /// The statement is idempotent, so this runs unconditionally at startup and
    /// also repairs a database file that exists without the table.
    pub fn ensure_schema(&self) -> Result<()> {
        if let Some(parent) = self.db_path.parent() {
            // A bare file name yields an empty parent; nothing to create then.
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context("failed to create data directory")?;
            }
        }

        let conn = self.connection()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS books (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                author TEXT NOT NULL,
                year INTEGER NOT NULL,
                genre TEXT NOT NULL,
                read_status INTEGER NOT NULL
            )",
            [],
        )
        .context("failed to create books table")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn ensure_schema_creates_missing_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("library.db");
        let library = Library::new(&path);

        assert!(!path.parent().unwrap().exists());
        library.ensure_schema().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn ensure_schema_is_idempotent() {
        let dir = tempdir().unwrap();
        let library = Library::new(dir.path().join("library.db"));

        library.ensure_schema().unwrap();
        library
            .add_book("Dune", "Frank Herbert", 1965, "Science Fiction", true)
            .unwrap();

        // A second pass must neither fail nor disturb existing rows.
        library.ensure_schema().unwrap();
        let books = library.fetch_all_books().unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Dune");
    }

    #[test]
    fn ensure_schema_adds_table_to_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.db");

        // An empty database file without the table, as another tool might
        // leave behind.
        Connection::open(&path).unwrap();
        assert!(path.exists());

        let library = Library::new(&path);
        library.ensure_schema().unwrap();
        assert!(library.fetch_all_books().unwrap().is_empty());
    }
}

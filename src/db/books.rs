//! Queries against the `books` table. Every function opens its own scoped
//! connection through [`Library::connection`], so the sequence for each
//! operation is open, act, close, with the close handled by `Drop` on success
//! and error paths alike.

use anyhow::{Context, Result};
use rusqlite::params;

use crate::models::{Book, LibraryStats, SearchField};

use super::connection::Library;

// SQL lives at module level so the SELECT column order, which doubles as the
// contract for `row_to_book`, is stated once.
const INSERT_BOOK: &str =
    "INSERT INTO books (title, author, year, genre, read_status) VALUES (?1, ?2, ?3, ?4, ?5)";
const DELETE_BOOKS_BY_TITLE: &str = "DELETE FROM books WHERE title = ?1";
const SELECT_ALL_BOOKS: &str = "SELECT id, title, author, year, genre, read_status FROM books";
const SEARCH_BY_TITLE: &str =
    "SELECT id, title, author, year, genre, read_status FROM books WHERE LOWER(title) LIKE ?1";
const SEARCH_BY_AUTHOR: &str =
    "SELECT id, title, author, year, genre, read_status FROM books WHERE LOWER(author) LIKE ?1";
const COUNT_BOOKS: &str = "SELECT COUNT(*) FROM books";
const COUNT_READ_BOOKS: &str = "SELECT COUNT(*) FROM books WHERE read_status = 1";

impl Library {
    /// Insert a new book, returning the hydrated struct so the caller gets the
    /// engine-assigned id without a follow-up query. The boolean read flag is
    /// stored as INTEGER 0/1.
    pub fn add_book(
        &self,
        title: &str,
        author: &str,
        year: i32,
        genre: &str,
        read_status: bool,
    ) -> Result<Book> {
        let conn = self.connection()?;
        conn.execute(INSERT_BOOK, params![title, author, year, genre, read_status])
            .context("failed to insert book")?;

        let id = conn.last_insert_rowid();
        Ok(Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            year,
            genre: genre.to_string(),
            read_status,
        })
    }

    /// Delete every book whose title equals `title` exactly, byte for byte.
    /// Returns the number of rows removed so the caller can tell a successful
    /// removal apart from a title that was never there. Removal is
    /// deliberately case-sensitive even though search is not.
    pub fn remove_books(&self, title: &str) -> Result<usize> {
        let conn = self.connection()?;
        let deleted = conn
            .execute(DELETE_BOOKS_BY_TITLE, params![title])
            .context("failed to delete books")?;
        Ok(deleted)
    }

    /// Case-insensitive substring search over the title or author column. An
    /// empty term matches everything. Results come back in storage order; no
    /// ordering is imposed.
    pub fn search_books(&self, field: SearchField, term: &str) -> Result<Vec<Book>> {
        let sql = match field {
            SearchField::Title => SEARCH_BY_TITLE,
            SearchField::Author => SEARCH_BY_AUTHOR,
        };
        let pattern = format!("%{}%", term.to_lowercase());

        let conn = self.connection()?;
        let mut stmt = conn.prepare(sql).context("failed to prepare search query")?;
        let books = stmt
            .query_map(params![pattern], row_to_book)
            .context("failed to run search query")?
            .collect::<Result<Vec<_>, _>>()
            .context("failed to collect search results")?;

        Ok(books)
    }

    /// Retrieve every book on record, in storage order.
    pub fn fetch_all_books(&self) -> Result<Vec<Book>> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare(SELECT_ALL_BOOKS).context("failed to prepare book query")?;
        let books = stmt
            .query_map([], row_to_book)
            .context("failed to load books")?
            .collect::<Result<Vec<_>, _>>()
            .context("failed to collect books")?;

        Ok(books)
    }

    /// Count the collection and its read subset over a single connection. The
    /// percentage lives on [`LibraryStats`] so the empty-library case stays in
    /// one place.
    pub fn fetch_statistics(&self) -> Result<LibraryStats> {
        let conn = self.connection()?;
        let total = conn
            .query_row(COUNT_BOOKS, [], |row| row.get(0))
            .context("failed to count books")?;
        let read = conn
            .query_row(COUNT_READ_BOOKS, [], |row| row.get(0))
            .context("failed to count read books")?;

        Ok(LibraryStats { total, read })
    }
}

/// Map one row from any of the SELECTs above into a [`Book`].
fn row_to_book(row: &rusqlite::Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        year: row.get(3)?,
        genre: row.get(4)?,
        read_status: row.get(5)?,
    })
}

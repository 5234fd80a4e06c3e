//! Domain models that mirror the SQLite schema and get passed between the
//! persistence layer and the menu shell. The intent is that these types stay
//! light-weight data holders so other layers can focus on prompting and
//! persistence logic. Keeping the commentary here means later refactors can
//! reconstruct the assumptions even if other context is lost.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One record from the `books` table. The fields deliberately match the
/// column names and types so a database file written by any other front end
/// stays readable.
pub struct Book {
    /// Primary key from the database. Assigned by SQLite on insert and never
    /// reused, so callers can treat it as a stable identity.
    pub id: i64,
    /// Title exactly as the user entered it. Duplicates are allowed.
    pub title: String,
    /// Author exactly as the user entered it.
    pub author: String,
    /// Publication year. Stored as a plain integer with no range checks so the
    /// collection can hold anything from ancient texts to preprints.
    pub year: i32,
    /// Free-form genre label.
    pub genre: String,
    /// Whether the user has read the book. Persisted as INTEGER 0/1 in the
    /// table and converted on the way through.
    pub read_status: bool,
}

impl Book {
    /// Human-readable form of the read flag, shared by every listing.
    pub fn status_label(&self) -> &'static str {
        if self.read_status {
            "Read"
        } else {
            "Unread"
        }
    }
}

impl fmt::Display for Book {
    /// Write the single-line console form used by listings and search results.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} ({}) - {} - {}",
            self.title,
            self.author,
            self.year,
            self.genre,
            self.status_label()
        )
    }
}

/// Which column a search should match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Aggregate counts for the statistics view. The percentage is derived here
/// rather than in SQL so an empty library never divides by zero.
pub struct LibraryStats {
    /// Total number of books on record.
    pub total: i64,
    /// How many of them are marked as read.
    pub read: i64,
}

impl LibraryStats {
    /// Share of the collection marked as read, in percent. Defined as zero for
    /// an empty library.
    pub fn percent_read(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.read as f64 / self.total as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_display_matches_listing_format() {
        let book = Book {
            id: 1,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            year: 1965,
            genre: "Science Fiction".to_string(),
            read_status: true,
        };
        assert_eq!(
            book.to_string(),
            "Dune by Frank Herbert (1965) - Science Fiction - Read"
        );
    }

    #[test]
    fn unread_books_are_labelled_unread() {
        let book = Book {
            id: 2,
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            year: 1949,
            genre: "Dystopian".to_string(),
            read_status: false,
        };
        assert_eq!(book.status_label(), "Unread");
        assert!(book.to_string().ends_with("- Unread"));
    }

    #[test]
    fn percent_read_is_zero_for_empty_library() {
        let stats = LibraryStats { total: 0, read: 0 };
        assert_eq!(stats.percent_read(), 0.0);
    }

    #[test]
    fn percent_read_covers_partial_collections() {
        let stats = LibraryStats { total: 2, read: 1 };
        assert_eq!(stats.percent_read(), 50.0);
        let stats = LibraryStats { total: 3, read: 3 };
        assert_eq!(stats.percent_read(), 100.0);
    }
}

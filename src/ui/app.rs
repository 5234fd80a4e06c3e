//! Menu-driven console front end. Each loop iteration prints the banner menu,
//! reads one choice, and runs exactly one persistence operation before the
//! menu comes back. The loop is deliberately forgiving: unusable input asks
//! again, a storage error prints its cause and returns to the menu, and only
//! choosing Exit (or the input stream ending) leaves the program.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::db::Library;
use crate::models::SearchField;

use super::helpers::surface_error;
use super::prompt::{parse_year, parse_yes_no, read_line, InputClosed};

/// Wire the menu loop to the real stdin and stdout and run it until the user
/// exits.
pub fn run_app(library: Library) -> Result<()> {
    let input = io::stdin().lock();
    let out = io::stdout().lock();
    App::new(library, input, out).run()
}

/// The interactive shell, generic over its input and output streams so tests
/// can drive a whole session from an in-memory script and inspect the
/// transcript.
pub struct App<R, W> {
    library: Library,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Build a shell around an already-initialized library.
    pub fn new(library: Library, input: R, out: W) -> Self {
        Self {
            library,
            input,
            out,
        }
    }

    /// Drive the menu until the user picks Exit or the input stream ends. A
    /// failed operation reports its root cause and the loop carries on; the
    /// next operation opens the database independently, so one failure never
    /// poisons the session.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;
            let choice = match self.prompt("Enter your choice: ") {
                Ok(choice) => choice,
                Err(err) if err.is::<InputClosed>() => return Ok(()),
                Err(err) => return Err(err),
            };
            match self.handle_choice(&choice) {
                Ok(true) => return Ok(()),
                Ok(false) => {}
                Err(err) if err.is::<InputClosed>() => return Ok(()),
                Err(err) => writeln!(self.out, "Error: {}", surface_error(&err))?,
            }
        }
    }

    /// Dispatch one menu choice. Returns `true` when the user asked to exit so
    /// the outer loop can stop.
    fn handle_choice(&mut self, choice: &str) -> Result<bool> {
        match choice {
            "1" => self.add_book()?,
            "2" => self.remove_book()?,
            "3" => self.search_books()?,
            "4" => self.display_books()?,
            "5" => self.display_statistics()?,
            "6" => {
                writeln!(self.out, "Goodbye!")?;
                return Ok(true);
            }
            _ => writeln!(self.out, "Invalid choice! Please try again.")?,
        }
        Ok(false)
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "------------ Welcome to your Personal Library Manager! --------------"
        )?;
        writeln!(self.out, "1. Add a book")?;
        writeln!(self.out, "2. Remove a book")?;
        writeln!(self.out, "3. Search for a book")?;
        writeln!(self.out, "4. Display all books")?;
        writeln!(self.out, "5. Display statistics")?;
        writeln!(self.out, "6. Exit")?;
        Ok(())
    }

    /// Collect the five fields for a new book and persist it. Each field asks
    /// again until the answer is usable, so a typo in the year costs one
    /// retry, not the whole entry.
    fn add_book(&mut self) -> Result<()> {
        let title = self.prompt_required("Enter the book title: ", "Title is required.")?;
        let author = self.prompt_required("Enter the author: ", "Author is required.")?;
        let year = self.prompt_year("Enter the publication year: ")?;
        let genre = self.prompt_required("Enter the genre: ", "Genre is required.")?;
        let read_status = self.prompt_yes_no("Have you read this book? (yes/no): ")?;

        self.library.add_book(&title, &author, year, &genre, read_status)?;
        writeln!(self.out, "Book added successfully!")?;
        Ok(())
    }

    /// Delete every book matching the entered title exactly. The affected-row
    /// count from the persistence layer distinguishes a removal from a title
    /// that was never there.
    fn remove_book(&mut self) -> Result<()> {
        let title = self.prompt_required(
            "Enter the title of the book to remove: ",
            "Title is required.",
        )?;
        let removed = self.library.remove_books(&title)?;
        if removed > 0 {
            writeln!(self.out, "Book removed successfully!")?;
        } else {
            writeln!(self.out, "Book not found!")?;
        }
        Ok(())
    }

    /// Ask which column to search, then run a case-insensitive substring match
    /// and print the results. An unrecognized mode choice drops straight back
    /// to the menu without touching anything.
    fn search_books(&mut self) -> Result<()> {
        writeln!(self.out, "Search by:")?;
        writeln!(self.out, "1. Title")?;
        writeln!(self.out, "2. Author")?;
        let mode = self.prompt("Enter your choice: ")?;

        let (field, label) = match mode.as_str() {
            "1" => (SearchField::Title, "Enter the title: "),
            "2" => (SearchField::Author, "Enter the author: "),
            _ => {
                writeln!(self.out, "Invalid choice!")?;
                return Ok(());
            }
        };

        let term = self.prompt(label)?;
        let books = self.library.search_books(field, &term)?;
        if books.is_empty() {
            writeln!(self.out, "No matching books found!")?;
        } else {
            writeln!(self.out, "Matching Books:")?;
            for book in &books {
                writeln!(self.out, "{book}")?;
            }
        }
        Ok(())
    }

    fn display_books(&mut self) -> Result<()> {
        let books = self.library.fetch_all_books()?;
        if books.is_empty() {
            writeln!(self.out, "Your library is empty!")?;
            return Ok(());
        }

        writeln!(self.out, "Your Library:")?;
        for book in &books {
            writeln!(self.out, "{book}")?;
        }
        Ok(())
    }

    fn display_statistics(&mut self) -> Result<()> {
        let stats = self.library.fetch_statistics()?;
        writeln!(self.out, "Total books: {}", stats.total)?;
        writeln!(self.out, "Percentage read: {:.1}%", stats.percent_read())?;
        Ok(())
    }

    /// Print a prompt without a trailing newline, flush, and read the trimmed
    /// reply.
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        read_line(&mut self.input)
    }

    /// Prompt until the reply is non-empty after trimming.
    fn prompt_required(&mut self, label: &str, missing: &str) -> Result<String> {
        loop {
            let value = self.prompt(label)?;
            if value.is_empty() {
                writeln!(self.out, "{missing}")?;
            } else {
                return Ok(value);
            }
        }
    }

    /// Prompt until the reply parses as an integer year.
    fn prompt_year(&mut self, label: &str) -> Result<i32> {
        loop {
            let raw = self.prompt(label)?;
            match parse_year(&raw) {
                Some(year) => return Ok(year),
                None => writeln!(self.out, "Publication year must be an integer.")?,
            }
        }
    }

    /// Prompt until the reply is a recognizable yes/no answer.
    fn prompt_yes_no(&mut self, label: &str) -> Result<bool> {
        loop {
            let raw = self.prompt(label)?;
            match parse_yes_no(&raw) {
                Some(answer) => return Ok(answer),
                None => writeln!(self.out, "Please answer yes or no.")?,
            }
        }
    }
}

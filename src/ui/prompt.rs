//! Input primitives for the menu shell: one line-reading helper plus the
//! parsers that decide whether an answer is usable. Keeping the parsers free
//! of I/O makes them trivial to test and keeps the re-prompt loops in the app
//! layer readable.

use std::io::BufRead;

use anyhow::{Context, Result};
use thiserror::Error;

/// Raised when the input stream ends while a prompt is waiting for an answer.
/// The menu loop downcasts to this type and exits cleanly instead of treating
/// an exhausted stdin as a failure.
#[derive(Debug, Error)]
#[error("input closed")]
pub(crate) struct InputClosed;

/// Read one line from `input` and return it trimmed. Every prompt in the shell
/// wants surrounding whitespace gone, so the trim lives here rather than at
/// each call site.
pub(crate) fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line).context("failed to read input")?;
    if bytes == 0 {
        return Err(InputClosed.into());
    }
    Ok(line.trim().to_string())
}

/// Parse a publication year. Any integer is acceptable; there is no
/// plausibility check on the value.
pub(crate) fn parse_year(raw: &str) -> Option<i32> {
    raw.parse().ok()
}

/// Interpret a yes/no answer, accepting the single-letter forms in either
/// case. Anything else is `None` so the caller can ask again.
pub(crate) fn parse_yes_no(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_line_trims_surrounding_whitespace() {
        let mut input = Cursor::new("  Dune  \n");
        assert_eq!(read_line(&mut input).unwrap(), "Dune");
    }

    #[test]
    fn read_line_reports_end_of_input() {
        let mut input = Cursor::new("");
        let err = read_line(&mut input).unwrap_err();
        assert!(err.is::<InputClosed>());
    }

    #[test]
    fn read_line_consumes_one_line_per_call() {
        let mut input = Cursor::new("first\nsecond\n");
        assert_eq!(read_line(&mut input).unwrap(), "first");
        assert_eq!(read_line(&mut input).unwrap(), "second");
        assert!(read_line(&mut input).unwrap_err().is::<InputClosed>());
    }

    #[test]
    fn parse_year_accepts_any_integer() {
        assert_eq!(parse_year("1965"), Some(1965));
        assert_eq!(parse_year("-500"), Some(-500));
        assert_eq!(parse_year("196s"), None);
        assert_eq!(parse_year(""), None);
    }

    #[test]
    fn parse_yes_no_accepts_short_forms_in_any_case() {
        assert_eq!(parse_yes_no("yes"), Some(true));
        assert_eq!(parse_yes_no("YES"), Some(true));
        assert_eq!(parse_yes_no("y"), Some(true));
        assert_eq!(parse_yes_no("no"), Some(false));
        assert_eq!(parse_yes_no("N"), Some(false));
        assert_eq!(parse_yes_no("maybe"), None);
        assert_eq!(parse_yes_no(""), None);
    }
}

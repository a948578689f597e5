use std::fmt;

/// A parsed menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Exit,
    /// Every catalog entry, in order.
    All,
    /// One catalog entry, by 1-based menu number.
    One(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    NotANumber(String),
    OutOfRange(i64),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::NotANumber(_) => write!(f, "Invalid input. Enter a number."),
            SelectionError::OutOfRange(_) => write!(f, "Invalid option."),
        }
    }
}

impl std::error::Error for SelectionError {}

const EXIT_WORDS: &[&str] = &["exit", "quit", "q"];

/// Parses a menu input line against a catalog of `catalog_len` entries.
/// Surrounding whitespace is ignored; exit words are case-insensitive.
pub fn parse(input: &str, catalog_len: usize) -> Result<Selection, SelectionError> {
    let input = input.trim();

    if EXIT_WORDS.iter().any(|w| input.eq_ignore_ascii_case(w)) {
        return Ok(Selection::Exit);
    }

    let number: i64 = input
        .parse()
        .map_err(|_| SelectionError::NotANumber(input.to_string()))?;

    match usize::try_from(number) {
        Ok(0) => Ok(Selection::All),
        Ok(k) if k <= catalog_len => Ok(Selection::One(k)),
        _ => Err(SelectionError::OutOfRange(number)),
    }
}

//! Line-oriented input commands.
//!
//! Each non-empty line is one event:
//!
//! ```text
//! year 1992
//! click Moscow Oblast
//! # comments and blank lines are ignored
//! ```

use natality_types::{RegionName, Year};

/// An input event for the view synchroniser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move the slider to a raw year.
    Year(Year),
    /// Click a region by name.
    Click(RegionName),
}

/// Errors for lines that are not valid commands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// The first word is not a known command.
    #[error("unknown command: {0:?}")]
    Unknown(String),

    /// `year` was not followed by an integer.
    #[error("invalid year: {0:?}")]
    InvalidYear(String),

    /// `click` was not followed by a region name.
    #[error("click requires a region name")]
    MissingRegion,
}

/// Parse one input line. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match verb {
        "year" => rest
            .parse::<i32>()
            .map(|year| Some(Command::Year(Year::new(year))))
            .map_err(|_err| CommandError::InvalidYear(rest.to_owned())),
        "click" if rest.is_empty() => Err(CommandError::MissingRegion),
        "click" => Ok(Some(Command::Click(RegionName::from(rest)))),
        other => Err(CommandError::Unknown(other.to_owned())),
    }
}

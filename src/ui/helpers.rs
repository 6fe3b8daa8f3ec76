use crossterm::style::Color;
use log::debug;

use crate::error::SurahError;

/// Generic message for anything that could not be parsed.
pub(crate) const INVALID_INPUT: &str = "Error: Invalid input! Please try again.";

/// How a line of console output should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Plain,
    Heading,
    Info,
    Error,
}

impl StatusKind {
    pub(crate) fn color(&self) -> Option<Color> {
        match self {
            StatusKind::Plain => None,
            StatusKind::Heading => Some(Color::Cyan),
            StatusKind::Info => Some(Color::Green),
            StatusKind::Error => Some(Color::Red),
        }
    }
}

/// Turn a failed operation into the line shown to the user. Not-found errors
/// are specific; malformed input is reported generically.
pub(crate) fn surface_error(err: &SurahError) -> String {
    match err {
        SurahError::NotFound(missing) => format!("Error: {missing}"),
        SurahError::MalformedInput(detail) => {
            debug!("rejected input: {detail}");
            INVALID_INPUT.to_string()
        }
    }
}

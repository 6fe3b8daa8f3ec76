//! Menu options and the typed prompts each operation asks for.

use super::terminal::Prompt;
use crate::error::SurahError;

/// Header printed above the menu options.
pub(crate) const MENU_HEADER: &str = "--- Surah Management ---";
pub(crate) const CHOICE_PROMPT: &str = "Enter your choice: ";

/// The six entries of the Surah management menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Assign,
    Create,
    Read,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Assign,
        MenuChoice::Create,
        MenuChoice::Read,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::Exit,
    ];

    /// Map a typed menu number to its entry.
    pub fn from_number(number: i64) -> Option<Self> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|choice| *choice == self)
            .map_or(0, |index| index + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Assign => "Assign Surah to Student",
            MenuChoice::Create => "Create Surah",
            MenuChoice::Read => "Read Surahs",
            MenuChoice::Update => "Update Surah",
            MenuChoice::Delete => "Delete Surah",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Ask for a free-text value. Running out of input or failing to read counts
/// as malformed input.
pub(crate) fn ask_text<P: Prompt>(prompt: &mut P, label: &str) -> Result<String, SurahError> {
    match prompt.ask(label) {
        Ok(Some(line)) => Ok(line),
        Ok(None) => Err(SurahError::MalformedInput(format!(
            "input ended while waiting for {label:?}"
        ))),
        Err(err) => Err(SurahError::MalformedInput(format!("could not read input: {err}"))),
    }
}

/// Ask for an integer value; surrounding whitespace is ignored.
pub(crate) fn ask_int<P: Prompt>(prompt: &mut P, label: &str) -> Result<i64, SurahError> {
    let raw = ask_text(prompt, label)?;
    parse_int(&raw)
}

pub(crate) fn parse_int(raw: &str) -> Result<i64, SurahError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| SurahError::MalformedInput(format!("{raw:?} is not an integer")))
}

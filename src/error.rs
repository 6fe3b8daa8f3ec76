//! Typed failures for the Surah operations. Both kinds are recoverable: the
//! console loop reports them and keeps running.

use std::fmt;

use thiserror::Error;

/// What a lookup failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFound {
    Student(i64),
    Surah(i64),
    /// No Surah with this id is assigned to this student. Covers both a wrong
    /// Surah id and a wrong owner.
    OwnedSurah { surah_id: i64, student_id: i64 },
}

#[derive(Debug, Error)]
pub enum SurahError {
    #[error("{0}")]
    NotFound(NotFound),
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFound::Student(_) => write!(f, "Student not found!"),
            NotFound::Surah(id) => write!(f, "Surah with ID {id} not found!"),
            NotFound::OwnedSurah { surah_id, .. } => {
                write!(f, "Surah with ID {surah_id} not found or incorrect Student ID!")
            }
        }
    }
}

impl From<NotFound> for SurahError {
    fn from(missing: NotFound) -> Self {
        SurahError::NotFound(missing)
    }
}

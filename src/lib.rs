//! Core library surface for the Hifz Manager console application, which
//! tracks memorization progress of Surahs assigned to students.
//!
//! The binary only wires configuration, logging, and stdin/stdout together;
//! everything it drives lives here so tests and other front-ends can reuse it.
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod ui;

/// Path resolution for the Surah and student files.
pub use config::Config;

/// The persistence layer: the Surah store and the student lookup it joins on.
pub use db::{StudentDirectory, StudentFile, SurahStore, SurahUpdate};

pub use error::{NotFound, SurahError};
pub use models::{Surah, UNASSIGNED};

/// The interactive menu and the console it talks through.
pub use ui::{run_app, App, Console, Prompt};

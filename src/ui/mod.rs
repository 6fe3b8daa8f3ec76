//! Console front-end for Surah management: a numbered menu read one line at a
//! time through the [`Prompt`] trait.

mod app;
mod forms;
mod helpers;
mod terminal;

pub use app::App;
pub use forms::MenuChoice;
pub use helpers::StatusKind;
pub use terminal::{run_app, Console, Prompt};

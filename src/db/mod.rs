//! Persistence module split across logical submodules.

mod file;
mod students;
mod surahs;

pub(crate) use file::read_line_lossy;
pub use students::{StudentDirectory, StudentFile};
pub use surahs::{Assignment, SurahStore, SurahUpdate};

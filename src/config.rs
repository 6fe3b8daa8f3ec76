//! Resolve where the Surah and student files live. Defaults sit under a
//! dot-directory in the user's home; environment variables override them so
//! tests and alternative installs can point at their own files.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".hifz-manager";
/// Surah records, owned and rewritten by this program.
const SURAH_FILE_NAME: &str = "surah_data.txt";
/// Student records, owned by the student subsystem and only read here.
const STUDENT_FILE_NAME: &str = "student_data.txt";

const DATA_DIR_ENV: &str = "HIFZ_DATA_DIR";
const SURAH_FILE_ENV: &str = "HIFZ_SURAH_FILE";
const STUDENT_FILE_ENV: &str = "HIFZ_STUDENT_FILE";
const NO_COLOR_ENV: &str = "NO_COLOR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub surah_file: PathBuf,
    pub student_file: PathBuf,
    /// Whether console messages get coloured.
    pub color: bool,
}

impl Config {
    /// Lay out both files inside `data_dir` with their default names.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            surah_file: data_dir.join(SURAH_FILE_NAME),
            student_file: data_dir.join(STUDENT_FILE_NAME),
            data_dir,
            color: true,
        }
    }

    /// Build the configuration from the process environment, falling back to
    /// the home directory when no data directory is given.
    pub fn from_env() -> Result<Self> {
        let data_dir = match env::var_os(DATA_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        };

        let mut config = Self::in_dir(data_dir);
        if let Some(path) = env::var_os(SURAH_FILE_ENV) {
            config.surah_file = PathBuf::from(path);
        }
        if let Some(path) = env::var_os(STUDENT_FILE_ENV) {
            config.student_file = PathBuf::from(path);
        }
        config.color = env::var_os(NO_COLOR_ENV).is_none();
        Ok(config)
    }

    /// Create the data directory so the first save has somewhere to land.
    pub fn ensure_data_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir).with_context(|| {
            format!("failed to create data directory {}", self.data_dir.display())
        })
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME))
}

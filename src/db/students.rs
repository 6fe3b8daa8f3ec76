//! Read-only view of the student file. The student subsystem owns that file;
//! this side only ever asks "what is the name for this id?" and rescans on
//! every call so edits made elsewhere show up immediately.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use log::warn;

use super::file::read_line_lossy;

/// Resolve a student's display name from their id.
pub trait StudentDirectory {
    fn lookup_name(&self, student_id: i64) -> Option<String>;
}

/// Student lookup backed by a comma-separated file whose first two fields are
/// `id,name`.
#[derive(Debug, Clone)]
pub struct StudentFile {
    path: PathBuf,
}

impl StudentFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StudentDirectory for StudentFile {
    /// Linear scan returning the name from the first matching line. Lines that
    /// do not start with an integer id and a name are passed over.
    fn lookup_name(&self, student_id: i64) -> Option<String> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) => {
                warn!("error loading student data from {}: {err}", self.path.display());
                return None;
            }
        };

        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        loop {
            let line = match read_line_lossy(&mut reader, &mut buf) {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(err) => {
                    warn!("error reading student data from {}: {err}", self.path.display());
                    return None;
                }
            };

            let mut fields = line.split(',');
            let (Some(id), Some(name)) = (fields.next(), fields.next()) else {
                continue;
            };
            if id.trim().parse::<i64>().ok() == Some(student_id) {
                return Some(name.to_string());
            }
        }
    }
}

/// In-memory directory, handy when the student records already live in a map.
impl StudentDirectory for HashMap<i64, String> {
    fn lookup_name(&self, student_id: i64) -> Option<String> {
        self.get(&student_id).cloned()
    }
}

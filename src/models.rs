//! Domain model for a tracked Surah. The struct is a plain data holder that
//! mirrors one line of the backing text file, so the persistence layer can
//! focus on reading and rewriting the file and the console layer can focus on
//! prompting.

use std::fmt;

use crate::error::SurahError;

/// Assignment value meaning "no student currently owns this Surah".
pub const UNASSIGNED: i64 = -1;

/// Number of comma-separated fields in a stored Surah line.
const FIELD_COUNT: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A chapter being tracked for memorization. Field order matches the on-disk
/// layout `id,name,currentAyahs,totalAyahs,assignedStudentId,dateCreated`.
pub struct Surah {
    /// Caller-supplied identifier. Duplicates are tolerated; lookups take the
    /// first match in collection order.
    pub id: i64,
    pub name: String,
    /// Ayahs memorized so far. Not bounded by `total_ayahs`.
    pub current_ayahs: i64,
    pub total_ayahs: i64,
    /// Either [`UNASSIGNED`] or a student id that was never validated on write.
    pub assigned_student_id: i64,
    /// Free-form text, usually `YYYY-MM-DD`. Never parsed.
    pub date_created: String,
}

impl Surah {
    /// Build a freshly created, unassigned Surah.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        total_ayahs: i64,
        current_ayahs: i64,
        date_created: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            current_ayahs,
            total_ayahs,
            assigned_student_id: UNASSIGNED,
            date_created: date_created.into(),
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned_student_id != UNASSIGNED
    }

    /// Whether this record is the one addressed by the `(surah, student)`
    /// ownership key used by update and delete.
    pub fn is_owned_by(&self, surah_id: i64, student_id: i64) -> bool {
        self.id == surah_id && self.assigned_student_id == student_id
    }

    /// Parse one stored line. Fields beyond the sixth are ignored, which
    /// matches how a name containing a comma was always (mis)read.
    pub fn from_line(line: &str) -> Result<Self, SurahError> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < FIELD_COUNT {
            return Err(SurahError::MalformedInput(format!(
                "expected {FIELD_COUNT} fields, found {}",
                fields.len()
            )));
        }

        Ok(Self {
            id: parse_int(fields[0], "id")?,
            name: fields[1].to_string(),
            current_ayahs: parse_int(fields[2], "current ayahs")?,
            total_ayahs: parse_int(fields[3], "total ayahs")?,
            assigned_student_id: parse_int(fields[4], "assigned student id")?,
            date_created: fields[5].to_string(),
        })
    }

    /// Encode the record as a stored line, without the trailing newline.
    pub fn to_line(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            self.id,
            self.name,
            self.current_ayahs,
            self.total_ayahs,
            self.assigned_student_id,
            self.date_created
        )
    }
}

impl fmt::Display for Surah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Total Ayahs: {}, Current Ayahs: {}, Assigned to Student ID: {}, Created on: {}",
            self.id,
            self.name,
            self.total_ayahs,
            self.current_ayahs,
            self.assigned_student_id,
            self.date_created
        )
    }
}

/// Reject text that would split or break a stored line. The file format has no
/// escaping, so a comma or line break in a name or date would lose the record
/// on the next load.
pub fn check_text_field(field: &str, value: &str) -> Result<(), SurahError> {
    if value.contains([',', '\n', '\r']) {
        return Err(SurahError::MalformedInput(format!(
            "{field} may not contain commas or line breaks: {value:?}"
        )));
    }
    Ok(())
}

fn parse_int(raw: &str, field: &str) -> Result<i64, SurahError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| SurahError::MalformedInput(format!("{field} is not an integer: {raw:?}")))
}

//! The Surah store: the in-memory collection and the only writer of the Surah
//! file. Every successful mutation rewrites the whole file before returning.
//! A failed save is logged and leaves the in-memory change in place, so memory
//! and disk can drift apart until the next successful save.

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{debug, error, info, warn};

use super::file::{read_surahs, write_surahs};
use super::students::StudentDirectory;
use crate::error::{NotFound, SurahError};
use crate::models::{check_text_field, Surah};

/// Line shown by [`SurahStore::list`] when there is nothing to show.
pub const EMPTY_LISTING: &str = "No Surahs available.";

/// Result of a successful assignment, carrying the names the console reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub surah_name: String,
    pub student_name: String,
}

/// New values for an owned Surah.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurahUpdate {
    pub name: String,
    pub current_ayahs: i64,
    pub date_created: String,
}

pub struct SurahStore<D> {
    path: PathBuf,
    surahs: Vec<Surah>,
    students: D,
}

impl<D: StudentDirectory> SurahStore<D> {
    /// Load the collection from `path`. A missing or unreadable file yields an
    /// empty store and a warning; it is never fatal.
    pub fn open(path: impl Into<PathBuf>, students: D) -> Self {
        let path = path.into();
        let surahs = match read_surahs(&path) {
            Ok(loaded) => {
                if loaded.skipped > 0 {
                    warn!(
                        "skipped {} malformed line(s) in {}",
                        loaded.skipped,
                        path.display()
                    );
                }
                debug!("loaded {} surah(s) from {}", loaded.surahs.len(), path.display());
                loaded.surahs
            }
            Err(err) => {
                warn!("error loading surah data: {err:#}");
                Vec::new()
            }
        };

        Self {
            path,
            surahs,
            students,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records in collection order.
    pub fn surahs(&self) -> &[Surah] {
        &self.surahs
    }

    pub fn is_empty(&self) -> bool {
        self.surahs.is_empty()
    }

    /// Rewrite the backing file from the current collection.
    pub fn save(&self) -> Result<()> {
        write_surahs(&self.path, &self.surahs)
    }

    /// Append a new unassigned Surah. Duplicate ids are accepted; text that
    /// would not survive the unescaped line format is rejected up front.
    pub fn create(
        &mut self,
        id: i64,
        name: &str,
        total_ayahs: i64,
        current_ayahs: i64,
        date_created: &str,
    ) -> Result<&Surah, SurahError> {
        check_text_field("name", name)?;
        check_text_field("date", date_created)?;
        if self.position(|surah| surah.id == id).is_some() {
            debug!("creating surah with duplicate id {id}");
        }
        self.surahs
            .push(Surah::new(id, name, total_ayahs, current_ayahs, date_created));
        self.persist();
        info!("created surah {id} ({name})");
        Ok(&self.surahs[self.surahs.len() - 1])
    }

    /// Resolve a student's display name, failing when the lookup finds nobody.
    pub fn student_name(&self, student_id: i64) -> Result<String, SurahError> {
        self.students
            .lookup_name(student_id)
            .ok_or(SurahError::NotFound(NotFound::Student(student_id)))
    }

    /// Point the first Surah with `surah_id` at `student_id`. The student is
    /// resolved first, so an unknown student fails whether or not the Surah
    /// exists.
    pub fn assign_to_student(
        &mut self,
        student_id: i64,
        surah_id: i64,
    ) -> Result<Assignment, SurahError> {
        let student_name = self.student_name(student_id)?;
        self.assign_resolved(student_id, student_name, surah_id)
    }

    /// Assignment for a student whose name the caller already looked up with
    /// [`SurahStore::student_name`].
    pub fn assign_resolved(
        &mut self,
        student_id: i64,
        student_name: String,
        surah_id: i64,
    ) -> Result<Assignment, SurahError> {
        let index = self
            .position(|surah| surah.id == surah_id)
            .ok_or(NotFound::Surah(surah_id))?;

        self.surahs[index].assigned_student_id = student_id;
        self.persist();
        info!("assigned surah {surah_id} to student {student_id}");

        Ok(Assignment {
            surah_name: self.surahs[index].name.clone(),
            student_name,
        })
    }

    /// The first Surah matching both ids, the ownership key for update/delete.
    pub fn find_owned(&self, student_id: i64, surah_id: i64) -> Result<&Surah, SurahError> {
        let index = self.owned_position(student_id, surah_id)?;
        Ok(&self.surahs[index])
    }

    /// Overwrite the name, current ayah count, and date of an owned Surah.
    pub fn update(
        &mut self,
        student_id: i64,
        surah_id: i64,
        update: SurahUpdate,
    ) -> Result<&Surah, SurahError> {
        let index = self.owned_position(student_id, surah_id)?;
        check_text_field("name", &update.name)?;
        check_text_field("date", &update.date_created)?;

        let surah = &mut self.surahs[index];
        surah.name = update.name;
        surah.current_ayahs = update.current_ayahs;
        surah.date_created = update.date_created;
        surah.assigned_student_id = student_id;

        self.persist();
        info!("updated surah {surah_id} for student {student_id}");
        Ok(&self.surahs[index])
    }

    /// Remove an owned Surah and hand it back.
    pub fn delete(&mut self, student_id: i64, surah_id: i64) -> Result<Surah, SurahError> {
        let index = self.owned_position(student_id, surah_id)?;
        let removed = self.surahs.remove(index);
        self.persist();
        info!("deleted surah {surah_id} for student {student_id}");
        Ok(removed)
    }

    /// One display line per record, naming the assigned student when the
    /// lookup resolves. An empty store lists a single placeholder line.
    pub fn list(&self) -> Vec<String> {
        if self.surahs.is_empty() {
            return vec![EMPTY_LISTING.to_string()];
        }

        self.surahs
            .iter()
            .map(|surah| {
                let student = if surah.is_assigned() {
                    self.students.lookup_name(surah.assigned_student_id)
                } else {
                    None
                };
                match student {
                    Some(name) => format!("{surah}, Assigned to: {name}"),
                    None => format!("{surah}, Not Assigned"),
                }
            })
            .collect()
    }

    fn position(&self, predicate: impl Fn(&Surah) -> bool) -> Option<usize> {
        self.surahs.iter().position(predicate)
    }

    fn owned_position(&self, student_id: i64, surah_id: i64) -> Result<usize, SurahError> {
        self.position(|surah| surah.is_owned_by(surah_id, student_id))
            .ok_or(SurahError::NotFound(NotFound::OwnedSurah {
                surah_id,
                student_id,
            }))
    }

    fn persist(&self) {
        if let Err(err) = self.save() {
            error!("error saving surah data: {err:#}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;

    use super::*;
    use crate::models::UNASSIGNED;

    fn students() -> HashMap<i64, String> {
        HashMap::from([(42, "Amir".to_string()), (7, "Bilal".to_string())])
    }

    fn store_with(contents: &str) -> (tempfile::TempDir, SurahStore<HashMap<i64, String>>) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("surah_data.txt");
        fs::write(&path, contents).unwrap();
        let store = SurahStore::open(&path, students());
        (dir, store)
    }

    fn on_disk(store: &SurahStore<HashMap<i64, String>>) -> String {
        fs::read_to_string(store.path()).unwrap()
    }

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SurahStore::open(dir.path().join("absent.txt"), students());
        assert!(store.is_empty());
        assert_eq!(store.list(), vec![EMPTY_LISTING.to_string()]);
    }

    #[test]
    fn create_appends_unassigned_and_saves() {
        let (_dir, mut store) = store_with("");
        let created = store
            .create(1, "Al-Fatiha", 7, 5, "2024-01-01")
            .unwrap()
            .clone();

        assert_eq!(created.assigned_student_id, UNASSIGNED);
        assert_eq!(on_disk(&store), "1,Al-Fatiha,5,7,-1,2024-01-01\n");
        assert_eq!(
            store.list(),
            vec![format!("{created}, Not Assigned")]
        );
    }

    #[test]
    fn duplicate_ids_are_kept_and_first_wins() {
        let (_dir, mut store) = store_with("");
        store.create(1, "First", 7, 0, "2024-01-01").unwrap();
        store.create(1, "Second", 7, 0, "2024-01-02").unwrap();
        assert_eq!(store.surahs().len(), 2);

        let assignment = store.assign_to_student(42, 1).unwrap();
        assert_eq!(assignment.surah_name, "First");
        assert_eq!(store.surahs()[1].assigned_student_id, UNASSIGNED);
    }

    #[test]
    fn assign_rewrites_the_line() {
        let (_dir, mut store) = store_with("1,Al-Fatiha,5,7,-1,2024-01-01\n");
        let assignment = store.assign_to_student(42, 1).unwrap();

        assert_eq!(assignment.student_name, "Amir");
        assert_eq!(assignment.surah_name, "Al-Fatiha");
        assert_eq!(on_disk(&store), "1,Al-Fatiha,5,7,42,2024-01-01\n");
    }

    #[test]
    fn assign_to_unknown_student_fails_even_for_missing_surah() {
        let (_dir, mut store) = store_with("1,Al-Fatiha,5,7,-1,2024-01-01\n");

        for surah_id in [1, 99] {
            let err = store.assign_to_student(5, surah_id).unwrap_err();
            assert!(matches!(err, SurahError::NotFound(NotFound::Student(5))));
        }
        assert_eq!(on_disk(&store), "1,Al-Fatiha,5,7,-1,2024-01-01\n");
    }

    #[test]
    fn assign_to_missing_surah_fails() {
        let (_dir, mut store) = store_with("1,Al-Fatiha,5,7,-1,2024-01-01\n");
        let err = store.assign_to_student(42, 2).unwrap_err();
        assert!(matches!(err, SurahError::NotFound(NotFound::Surah(2))));
    }

    #[test]
    fn update_requires_ownership() {
        let (_dir, mut store) = store_with("1,Al-Fatiha,5,7,42,2024-01-01\n");
        let update = SurahUpdate {
            name: "Al-Fatihah".to_string(),
            current_ayahs: 7,
            date_created: "2024-05-05".to_string(),
        };

        let wrong_owner = store.update(7, 1, update.clone()).unwrap_err();
        let wrong_surah = store.update(42, 2, update.clone()).unwrap_err();
        assert!(matches!(
            wrong_owner,
            SurahError::NotFound(NotFound::OwnedSurah { surah_id: 1, student_id: 7 })
        ));
        assert!(matches!(
            wrong_surah,
            SurahError::NotFound(NotFound::OwnedSurah { .. })
        ));
        assert_eq!(
            wrong_owner.to_string(),
            "Surah with ID 1 not found or incorrect Student ID!"
        );

        let updated = store.update(42, 1, update).unwrap().clone();
        assert_eq!(updated.name, "Al-Fatihah");
        assert_eq!(updated.current_ayahs, 7);
        assert_eq!(updated.total_ayahs, 7);
        assert_eq!(updated.assigned_student_id, 42);
        assert_eq!(on_disk(&store), "1,Al-Fatihah,7,7,42,2024-05-05\n");
    }

    #[test]
    fn text_with_commas_is_rejected_before_saving() {
        let (_dir, mut store) = store_with("1,Al-Fatiha,5,7,42,2024-01-01\n");

        let err = store
            .create(2, "Al-Baqarah, The Cow", 286, 0, "2024-01-02")
            .unwrap_err();
        assert!(matches!(err, SurahError::MalformedInput(_)));
        assert!(store.create(2, "Al-Baqarah", 286, 0, "2024,01,02").is_err());

        let update = SurahUpdate {
            name: "Al-Fatiha, The Opening".to_string(),
            current_ayahs: 7,
            date_created: "2024-05-05".to_string(),
        };
        assert!(matches!(
            store.update(42, 1, update),
            Err(SurahError::MalformedInput(_))
        ));

        assert_eq!(store.surahs().len(), 1);
        assert_eq!(store.surahs()[0].name, "Al-Fatiha");
        assert_eq!(on_disk(&store), "1,Al-Fatiha,5,7,42,2024-01-01\n");
    }

    #[test]
    fn assign_resolved_reuses_the_given_name() {
        let (_dir, mut store) = store_with("1,Al-Fatiha,5,7,-1,2024-01-01\n");
        let name = store.student_name(42).unwrap();

        let assignment = store.assign_resolved(42, name, 1).unwrap();
        assert_eq!(assignment.student_name, "Amir");
        assert_eq!(on_disk(&store), "1,Al-Fatiha,5,7,42,2024-01-01\n");
        assert!(matches!(
            store.assign_resolved(42, "Amir".to_string(), 9),
            Err(SurahError::NotFound(NotFound::Surah(9)))
        ));
    }

    #[test]
    fn delete_requires_ownership() {
        let (_dir, mut store) = store_with("1,Al-Fatiha,5,7,42,2024-01-01\n");

        let err = store.delete(99, 1).unwrap_err();
        assert!(matches!(err, SurahError::NotFound(NotFound::OwnedSurah { .. })));
        assert_eq!(on_disk(&store), "1,Al-Fatiha,5,7,42,2024-01-01\n");

        let removed = store.delete(42, 1).unwrap();
        assert_eq!(removed.name, "Al-Fatiha");
        assert!(store.is_empty());
        assert_eq!(on_disk(&store), "");
    }

    #[test]
    fn unassigned_surah_cannot_be_claimed_through_update() {
        let (_dir, mut store) = store_with("1,Al-Fatiha,5,7,-1,2024-01-01\n");
        assert!(store.find_owned(42, 1).is_err());
        assert!(store.find_owned(UNASSIGNED, 1).is_ok());
    }

    #[test]
    fn list_names_assigned_students() {
        let (_dir, store) = store_with(
            "1,Al-Fatiha,5,7,42,2024-01-01\n2,Al-Baqarah,10,286,-1,2024-01-02\n3,Al-Imran,1,200,500,2024-01-03\n",
        );
        let lines = store.list();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with(", Assigned to: Amir"));
        assert!(lines[1].ends_with(", Not Assigned"));
        // Dangling student ids are reported as unassigned.
        assert!(lines[2].ends_with(", Not Assigned"));
        assert_eq!(lines, store.list());
    }

    #[test]
    fn failed_save_keeps_memory_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("surah_data.txt");
        let mut store = SurahStore::open(&path, students());

        store.create(1, "Al-Fatiha", 7, 5, "2024-01-01").unwrap();
        assert_eq!(store.surahs().len(), 1);
        assert!(store.save().is_err());
        assert!(!path.exists());
    }
}

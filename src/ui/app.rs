use anyhow::Result;
use log::debug;

use crate::db::{StudentDirectory, SurahStore, SurahUpdate};
use crate::error::SurahError;

use super::forms::{ask_int, ask_text, parse_int, MenuChoice, CHOICE_PROMPT, MENU_HEADER};
use super::helpers::{surface_error, StatusKind, INVALID_INPUT};
use super::terminal::Prompt;

const INVALID_CHOICE: &str = "Error: Invalid choice. Please select a valid option.";
const EXIT_MESSAGE: &str = "Exiting Surah Management...";
const LISTING_HEADER: &str = "List of Surahs:";

/// What a dispatched menu entry produced.
enum Reply {
    /// A mutation succeeded; the message confirms it.
    Done(String),
    /// Lines to print verbatim.
    Listing(Vec<String>),
    Exit,
}

/// The Surah management menu. Owns the store and turns one menu choice at a
/// time into a store operation, prompting for that operation's own inputs.
pub struct App<D> {
    store: SurahStore<D>,
}

impl<D: StudentDirectory> App<D> {
    pub fn new(store: SurahStore<D>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SurahStore<D> {
        &self.store
    }

    /// Run one menu iteration: render, read a choice, dispatch, report.
    ///
    /// Returns `false` once the user picks exit (or input runs out), telling
    /// the caller to stop looping. Unreadable input and operation failures
    /// are reported and keep the menu alive; only a broken output stream is
    /// an error here.
    pub fn step<P: Prompt>(&mut self, prompt: &mut P) -> Result<bool> {
        self.render_menu(prompt)?;

        let raw = match prompt.ask(CHOICE_PROMPT) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("input closed at the menu prompt");
                prompt.show(StatusKind::Plain, EXIT_MESSAGE)?;
                return Ok(false);
            }
            Err(err) => {
                debug!("could not read menu choice: {err}");
                prompt.show(StatusKind::Error, INVALID_INPUT)?;
                return Ok(true);
            }
        };

        let choice = match parse_int(&raw) {
            Ok(number) => MenuChoice::from_number(number),
            Err(err) => {
                prompt.show(StatusKind::Error, &surface_error(&err))?;
                return Ok(true);
            }
        };
        let Some(choice) = choice else {
            prompt.show(StatusKind::Error, INVALID_CHOICE)?;
            return Ok(true);
        };

        match self.dispatch(choice, prompt) {
            Ok(Reply::Done(message)) => prompt.show(StatusKind::Info, &message)?,
            Ok(Reply::Listing(lines)) => {
                for line in lines {
                    prompt.show(StatusKind::Plain, &line)?;
                }
            }
            Ok(Reply::Exit) => {
                prompt.show(StatusKind::Plain, EXIT_MESSAGE)?;
                return Ok(false);
            }
            Err(err) => prompt.show(StatusKind::Error, &surface_error(&err))?,
        }

        Ok(true)
    }

    fn render_menu<P: Prompt>(&self, prompt: &mut P) -> Result<()> {
        prompt.show(StatusKind::Plain, "")?;
        prompt.show(StatusKind::Heading, MENU_HEADER)?;
        for choice in MenuChoice::ALL {
            prompt.show(
                StatusKind::Plain,
                &format!("{}. {}", choice.number(), choice.label()),
            )?;
        }
        Ok(())
    }

    fn dispatch<P: Prompt>(
        &mut self,
        choice: MenuChoice,
        prompt: &mut P,
    ) -> Result<Reply, SurahError> {
        match choice {
            MenuChoice::Assign => self.assign(prompt),
            MenuChoice::Create => self.create(prompt),
            MenuChoice::Read => Ok(self.read()),
            MenuChoice::Update => self.update(prompt),
            MenuChoice::Delete => self.delete(prompt),
            MenuChoice::Exit => Ok(Reply::Exit),
        }
    }

    /// The student is resolved before the Surah id is even asked for.
    fn assign<P: Prompt>(&mut self, prompt: &mut P) -> Result<Reply, SurahError> {
        let student_id = ask_int(prompt, "Enter Student ID: ")?;
        let student_name = self.store.student_name(student_id)?;

        let surah_id = ask_int(prompt, "Enter Surah ID to assign: ")?;
        let assignment = self
            .store
            .assign_resolved(student_id, student_name, surah_id)?;
        Ok(Reply::Done(format!(
            "Surah {} assigned to {} successfully!",
            assignment.surah_name, assignment.student_name
        )))
    }

    fn create<P: Prompt>(&mut self, prompt: &mut P) -> Result<Reply, SurahError> {
        let id = ask_int(prompt, "Enter Surah ID: ")?;
        let name = ask_text(prompt, "Enter Surah Name: ")?;
        let total_ayahs = ask_int(prompt, "Enter Total Ayahs: ")?;
        let current_ayahs = ask_int(prompt, "Enter Current Ayahs: ")?;
        let date_created = ask_text(prompt, "Enter Date Created (YYYY-MM-DD): ")?;

        let surah = self
            .store
            .create(id, &name, total_ayahs, current_ayahs, &date_created)?;
        Ok(Reply::Done(format!(
            "Surah added successfully on {}!",
            surah.date_created
        )))
    }

    fn read(&self) -> Reply {
        let mut lines = Vec::new();
        if !self.store.is_empty() {
            lines.push(LISTING_HEADER.to_string());
        }
        lines.extend(self.store.list());
        Reply::Listing(lines)
    }

    /// Ownership is checked before asking for the new values.
    fn update<P: Prompt>(&mut self, prompt: &mut P) -> Result<Reply, SurahError> {
        let student_id = ask_int(prompt, "Enter Student ID to verify: ")?;
        let surah_id = ask_int(prompt, "Enter Surah ID to update: ")?;
        self.store.find_owned(student_id, surah_id)?;

        let name = ask_text(prompt, "Enter new Surah Name: ")?;
        let current_ayahs = ask_int(prompt, "Enter new current Number of Ayahs: ")?;
        let date_created = ask_text(prompt, "Enter updated Date Created (YYYY-MM-DD): ")?;

        let surah = self.store.update(
            student_id,
            surah_id,
            SurahUpdate {
                name,
                current_ayahs,
                date_created,
            },
        )?;
        Ok(Reply::Done(format!(
            "Surah updated successfully on {}!",
            surah.date_created
        )))
    }

    fn delete<P: Prompt>(&mut self, prompt: &mut P) -> Result<Reply, SurahError> {
        let student_id = ask_int(prompt, "Enter Student ID to verify: ")?;
        let surah_id = ask_int(prompt, "Enter Surah ID to delete: ")?;
        self.store.delete(student_id, surah_id)?;
        Ok(Reply::Done("Surah deleted successfully!".to_string()))
    }
}

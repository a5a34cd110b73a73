//! Catalog view-model, separated from UI logic.
//!
//! `HubState` holds the catalog together with the view state that drives
//! it: the draft form, the edit cursor, and the filter settings. UI
//! components receive it as a parameter and call the operations below
//! instead of mutating the catalog directly.

use std::time::Instant;

use crate::catalog::{seed_catalog, Application, Category, CategoryFilter};
use crate::language::Language;
use crate::validation::validate_draft;

/// Whether the draft form creates a new entry or overwrites an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DraftMode {
    #[default]
    Creating,
    /// Catalog position the draft will overwrite on the next upsert.
    Editing(usize),
}

/// Search, category and language selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_text: String,
    pub category_filter: CategoryFilter,
    pub target_language: Language,
}

impl FilterState {
    /// Category match plus case-insensitive substring match on the name.
    pub fn matches(&self, app: &Application) -> bool {
        self.category_filter.matches(app.category)
            && app
                .name
                .to_lowercase()
                .contains(&self.search_text.to_lowercase())
    }
}

/// Snapshot handed to the backend when a bulk translation starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub records: Vec<Application>,
    pub target: Language,
}

/// Severity of a status toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// Core view-model for the catalog window.
#[derive(Debug, Default)]
pub struct HubState {
    /// Ordered catalog. Position is identity.
    pub catalog: Vec<Application>,

    /// Staging record behind the create/edit form.
    pub draft: Application,

    /// Edit cursor.
    pub mode: DraftMode,

    pub filter: FilterState,

    /// A bulk translation is in flight.
    pub translating: bool,

    /// Status toast messages with severity and creation time (auto-expire).
    pub status_messages: Vec<(String, StatusLevel, Instant)>,
}

impl HubState {
    /// Create a state holding the seed catalog and an empty draft.
    pub fn new() -> Self {
        Self::with_catalog(seed_catalog())
    }

    pub fn with_catalog(catalog: Vec<Application>) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Entries visible under `filter`, in catalog order.
    pub fn list(&self, filter: &FilterState) -> Vec<&Application> {
        self.catalog.iter().filter(|app| filter.matches(app)).collect()
    }

    /// Like [`HubState::list`], paired with each entry's catalog position.
    ///
    /// Edit and delete must be dispatched with these positions, not with
    /// the index inside the filtered view.
    pub fn list_indexed(&self, filter: &FilterState) -> Vec<(usize, &Application)> {
        self.catalog
            .iter()
            .enumerate()
            .filter(|(_, app)| filter.matches(app))
            .collect()
    }

    /// Entries visible under the current filter state.
    pub fn visible(&self) -> Vec<(usize, &Application)> {
        self.list_indexed(&self.filter)
    }

    /// Commit the draft: overwrite the edited entry or append a new one.
    ///
    /// Returns `false` and leaves everything untouched when the draft has
    /// an empty name or description.
    pub fn upsert(&mut self) -> bool {
        if let Err(e) = validate_draft(&self.draft) {
            tracing::debug!(error = %e, "draft rejected");
            return false;
        }

        let draft = std::mem::replace(&mut self.draft, Self::empty_draft());
        match self.mode {
            DraftMode::Editing(position) if position < self.catalog.len() => {
                tracing::debug!(position, name = %draft.name, "replacing entry");
                self.catalog[position] = draft;
            }
            DraftMode::Editing(position) => {
                // The edited entry was deleted meanwhile.
                tracing::debug!(position, "edit cursor out of range, appending");
                self.catalog.push(draft);
            }
            DraftMode::Creating => {
                tracing::debug!(name = %draft.name, "appending entry");
                self.catalog.push(draft);
            }
        }
        self.mode = DraftMode::Creating;
        true
    }

    /// Remove the entry at `position`, shifting later entries down.
    pub fn remove(&mut self, position: usize) -> Option<Application> {
        if position >= self.catalog.len() {
            tracing::debug!(position, len = self.catalog.len(), "remove out of range");
            return None;
        }
        if let DraftMode::Editing(cursor) = self.mode {
            if cursor == position {
                // The draft now points at nothing; the next upsert appends.
                self.mode = DraftMode::Editing(usize::MAX);
            } else if cursor > position {
                self.mode = DraftMode::Editing(cursor - 1);
            }
        }
        Some(self.catalog.remove(position))
    }

    /// Load the entry at `position` into the draft and point the edit cursor at it.
    pub fn begin_edit(&mut self, position: usize) {
        match self.catalog.get(position) {
            Some(app) => {
                self.draft = app.clone();
                self.mode = DraftMode::Editing(position);
            }
            None => {
                tracing::debug!(position, "begin_edit out of range");
            }
        }
    }

    /// Snapshot the catalog for translation into the selected language.
    pub fn begin_translation(&mut self) -> TranslationRequest {
        self.translating = true;
        TranslationRequest {
            records: self.catalog.clone(),
            target: self.filter.target_language,
        }
    }

    /// Replace the whole catalog with translated records.
    ///
    /// Edits made while the translation was in flight are discarded.
    pub fn commit_translation(&mut self, records: Vec<Application>) {
        self.catalog = records;
        self.translating = false;
    }

    /// A translation failed; the catalog stays as it was.
    pub fn fail_translation(&mut self) {
        self.translating = false;
    }

    pub fn push_status(&mut self, message: impl Into<String>) {
        self.status_messages
            .push((message.into(), StatusLevel::Info, Instant::now()));
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.status_messages
            .push((message.into(), StatusLevel::Error, Instant::now()));
    }

    /// Purge status messages older than the given duration.
    pub fn purge_old_status_messages(&mut self, max_age_secs: u64) {
        self.status_messages
            .retain(|(_, _, created)| created.elapsed().as_secs() < max_age_secs);
    }

    fn empty_draft() -> Application {
        Application {
            name: String::new(),
            description: String::new(),
            category: Category::Other,
        }
    }
}

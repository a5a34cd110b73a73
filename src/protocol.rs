use crate::catalog::Application;
use crate::language::Language;

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone)]
pub enum BackendAction {
    /// Translate a snapshot of the catalog into `target`
    TranslateAll {
        records: Vec<Application>,
        target: Language,
    },
    /// Stop the backend loop
    Shutdown,
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuiEvent {
    /// Backend could not do its job at all
    Error(String),
    /// Translation requests were issued
    TranslationStarted { requests: usize, target: Language },
    /// Every request succeeded; replaces the whole catalog
    TranslationFinished(Vec<Application>),
    /// At least one request failed; the catalog must stay untouched
    TranslationFailed(String),
}

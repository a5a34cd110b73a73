//! Core HubApp struct definition and initialization

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use crate::backend::run_backend;
use crate::config::Settings;
use crate::language::Language;
use crate::protocol::{BackendAction, GuiEvent};
use crate::state::HubState;
use crate::translate::{MyMemoryClient, TranslateError, Translator};
use crate::ui;
use crate::ui::CardAction;

pub struct HubApp {
    // Catalog and view state
    pub state: HubState,

    // Channels for backend communication
    pub action_tx: Sender<BackendAction>,
    pub event_rx: Receiver<GuiEvent>,
}

impl HubApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        ui::apply_app_style(&cc.egui_ctx);

        let settings = Settings::load();
        let translator: Arc<dyn Translator> = match MyMemoryClient::from_settings(&settings) {
            Ok(client) => {
                tracing::info!(base_url = client.base_url(), "translation client ready");
                Arc::new(client)
            }
            Err(e) => {
                tracing::error!(error = %e, "translation disabled");
                Arc::new(UnavailableTranslator(e))
            }
        };

        Self::with_translator(&settings, translator)
    }

    /// Build the app around an explicit translator and spawn the backend thread.
    pub fn with_translator(settings: &Settings, translator: Arc<dyn Translator>) -> Self {
        // Create channels for UI <-> Backend
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<GuiEvent>();

        // Spawn the backend thread
        thread::spawn(move || {
            run_backend(action_rx, event_tx, translator);
        });

        let mut state = HubState::new();
        state.filter.target_language = settings.default_language;

        Self {
            state,
            action_tx,
            event_rx,
        }
    }

    /// Send the current catalog to the backend for translation.
    /// Ignored while a translation is already in flight, or when the
    /// target is the catalog's own language.
    pub fn request_translation(&mut self) {
        if self.state.translating {
            return;
        }
        if self.state.filter.target_language == Language::SOURCE {
            tracing::debug!("target equals source language, nothing to translate");
            return;
        }
        let request = self.state.begin_translation();
        let action = BackendAction::TranslateAll {
            records: request.records,
            target: request.target,
        };
        if self.action_tx.send(action).is_err() {
            tracing::error!("backend thread is gone");
            self.state.fail_translation();
            self.state.push_error("Error: el servicio de traducción no está disponible");
        }
    }

    pub fn apply_card_action(&mut self, action: CardAction) {
        match action {
            CardAction::Edit(position) => self.state.begin_edit(position),
            CardAction::Delete(position) => {
                if let Some(removed) = self.state.remove(position) {
                    tracing::debug!(position, name = %removed.name, "entry deleted");
                }
            }
        }
    }

    pub fn submit_draft(&mut self) {
        self.state.upsert();
    }
}

impl Drop for HubApp {
    fn drop(&mut self) {
        let _ = self.action_tx.send(BackendAction::Shutdown);
    }
}

/// Stand-in used when the HTTP client cannot be built; every request fails.
struct UnavailableTranslator(TranslateError);

#[async_trait::async_trait]
impl Translator for UnavailableTranslator {
    async fn translate(&self, _: &str, _: Language, _: Language) -> Result<String, TranslateError> {
        Err(self.0.clone())
    }
}

//! Routing of UI actions to translation jobs.

use crossbeam_channel::Sender;
use std::sync::Arc;

use crate::protocol::{BackendAction, GuiEvent};
use crate::translate::{translate_catalog, Translator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flow {
    Continue,
    Stop,
}

/// Handle one action. Must be called from within the backend runtime.
pub(super) fn handle_backend_action(
    action: BackendAction,
    translator: &Arc<dyn Translator>,
    event_tx: &Sender<GuiEvent>,
) -> Flow {
    match action {
        BackendAction::TranslateAll { records, target } => {
            let requests = records.len() * 2;
            tracing::info!(entries = records.len(), requests, target = target.code(), "translating catalog");
            let _ = event_tx.send(GuiEvent::TranslationStarted { requests, target });

            let translator = Arc::clone(translator);
            let event_tx = event_tx.clone();
            tokio::spawn(async move {
                let event = match translate_catalog(translator, &records, target).await {
                    Ok(translated) => {
                        tracing::info!(entries = translated.len(), target = target.code(), "catalog translated");
                        GuiEvent::TranslationFinished(translated)
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, target = target.code(), "catalog translation failed");
                        GuiEvent::TranslationFailed(e.to_string())
                    }
                };
                // UI gone means nobody is left to apply the result
                let _ = event_tx.send(event);
            });
            Flow::Continue
        }
        BackendAction::Shutdown => Flow::Stop,
    }
}

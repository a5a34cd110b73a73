//! Backend event processing (translation progress and results).

use crate::protocol::GuiEvent;
use crate::state::HubState;

/// Apply a single backend event to the view-model.
pub fn process_single_event(state: &mut HubState, event: GuiEvent) {
    match event {
        GuiEvent::TranslationStarted { requests, target } => {
            tracing::debug!(requests, target = target.code(), "translation in flight");
            state.push_status(format!("Traduciendo al {}...", target.label().to_lowercase()));
        }

        GuiEvent::TranslationFinished(records) => {
            let count = records.len();
            state.commit_translation(records);
            state.push_status(format!("{} aplicaciones traducidas", count));
        }

        GuiEvent::TranslationFailed(reason) => {
            state.fail_translation();
            state.push_error(format!("Error de traducción: {}", reason));
        }

        GuiEvent::Error(msg) => {
            tracing::error!(error = %msg, "backend error");
            state.fail_translation();
            state.push_error(format!("Error: {}", msg));
        }
    }
}

//! Backend main event loop.

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

use super::handlers::{self, Flow};
use crate::protocol::{BackendAction, GuiEvent};
use crate::translate::Translator;

/// Run the backend event loop on a tokio runtime.
///
/// Returns when `Shutdown` is received or the UI drops its sender.
/// Translations still in flight at that point are cancelled.
pub fn run_backend(
    action_rx: Receiver<BackendAction>,
    event_tx: Sender<GuiEvent>,
    translator: Arc<dyn Translator>,
) {
    // Create a Tokio runtime for this thread
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!(error = %e, "failed to create Tokio runtime");
            let _ = event_tx.send(GuiEvent::Error(format!(
                "Failed to create Tokio runtime: {}",
                e
            )));
            return;
        }
    };

    rt.block_on(async move {
        tracing::debug!("backend loop started");
        loop {
            match action_rx.try_recv() {
                Ok(action) => {
                    if handlers::handle_backend_action(action, &translator, &event_tx) == Flow::Stop {
                        break;
                    }
                }
                Err(TryRecvError::Empty) => {
                    // Nothing queued, sleep a bit to avoid busy-looping
                    tokio::time::sleep(Duration::from_millis(50)).await;
                }
                Err(TryRecvError::Disconnected) => break,
            }
        }
        tracing::debug!("backend loop stopped");
    });
}

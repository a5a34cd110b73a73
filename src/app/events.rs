//! Event processing from backend

use super::HubApp;
use crate::events;

impl HubApp {
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            events::process_single_event(&mut self.state, event);
        }
    }
}

//! Application module structure for HubApp
//!
//! - `core`: HubApp struct, initialization and user intents
//! - `events`: Event processing from backend
//! - `update`: Main update loop and panel layout

pub mod core;
pub mod events;
pub mod update;

// Re-export HubApp for public API
pub use self::core::HubApp;

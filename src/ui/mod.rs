//! UI rendering modules for the catalog window.
//!
//! All egui code lives here, organized by component:
//! - `toolbar`: search, category filter, language and translate controls
//! - `catalog_grid`: the card grid with edit/delete buttons
//! - `draft_form`: create/edit form at the bottom
//! - `status_toasts`: transient notifications
//! - `theme`: colors and styling utilities

pub mod catalog_grid;
pub mod draft_form;
pub mod status_toasts;
pub mod theme;
pub mod toolbar;

pub use catalog_grid::{render_catalog_grid, CardAction};
pub use draft_form::render_draft_form;
pub use status_toasts::render_status_toasts;
pub use theme::{apply_app_style, HubTheme};
pub use toolbar::{render_toolbar, ToolbarAction};

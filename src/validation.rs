//! Input validation for the draft form

use thiserror::Error;

use crate::catalog::Application;

/// Why a draft cannot be committed to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("application name cannot be empty")]
    EmptyName,
    #[error("application description cannot be empty")]
    EmptyDescription,
}

/// Validates a draft before it is added or saved.
///
/// Only emptiness is checked. Whitespace-only text is accepted.
pub fn validate_draft(draft: &Application) -> Result<(), DraftError> {
    if draft.name.is_empty() {
        return Err(DraftError::EmptyName);
    }
    if draft.description.is_empty() {
        return Err(DraftError::EmptyDescription);
    }
    Ok(())
}

//! Catalog translation through a remote translation service.
//!
//! - `error`: typed failures of a single translation request
//! - `mymemory`: HTTP client for the MyMemory REST API
//! - `fanout`: concurrent, all-or-nothing translation of a whole catalog

mod error;
mod fanout;
mod mymemory;

pub use error::TranslateError;
pub use fanout::translate_catalog;
pub use mymemory::{MyMemoryClient, DEFAULT_MYMEMORY_BASE_URL};

use crate::language::Language;

/// A service able to translate a single piece of text.
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, TranslateError>;
}

//! Shared fakes for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::language::Language;
use crate::translate::{TranslateError, Translator};

/// Prefixes text with the target code, e.g. `[en] Hola`.
///
/// Fails for the input equal to `fail_on`, and waits `delay` before
/// answering so tests can act while a translation is in flight.
pub struct FakeTranslator {
    pub calls: AtomicUsize,
    pub fail_on: Option<String>,
    pub delay: Duration,
}

impl FakeTranslator {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_on: None,
            delay: Duration::ZERO,
        }
    }

    pub fn failing_on(text: &str) -> Self {
        Self {
            fail_on: Some(text.to_string()),
            ..Self::new()
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Translator for FakeTranslator {
    async fn translate(
        &self,
        text: &str,
        _source: Language,
        target: Language,
    ) -> Result<String, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail_on.as_deref() == Some(text) {
            return Err(TranslateError::Status {
                status: 503,
                body: "unavailable".into(),
            });
        }
        Ok(format!("[{}] {}", target.code(), text))
    }
}

//! Whole-catalog translation as an explicit task group.
//!
//! One task per field per record. Every task must succeed before the
//! replacement catalog is built; the first failure aborts the rest.

use std::sync::Arc;
use tokio::task::JoinSet;

use super::{TranslateError, Translator};
use crate::catalog::Application;
use crate::language::Language;

#[derive(Debug, Clone, Copy)]
enum Field {
    Name,
    Description,
}

impl Field {
    fn of(self, app: &Application) -> &str {
        match self {
            Field::Name => &app.name,
            Field::Description => &app.description,
        }
    }
}

/// Translate every name and description from Spanish into `target`.
///
/// The result has the same length, order and categories as `records`.
/// On error no partial result is returned.
pub async fn translate_catalog(
    translator: Arc<dyn Translator>,
    records: &[Application],
    target: Language,
) -> Result<Vec<Application>, TranslateError> {
    let mut tasks = JoinSet::new();
    for (index, app) in records.iter().enumerate() {
        for field in [Field::Name, Field::Description] {
            let translator = Arc::clone(&translator);
            let text = field.of(app).to_owned();
            tasks.spawn(async move {
                let translated = translator.translate(&text, Language::SOURCE, target).await;
                (index, field, translated)
            });
        }
    }
    tracing::debug!(requests = tasks.len(), target = target.code(), "translation fan-out started");

    let mut names: Vec<Option<String>> = vec![None; records.len()];
    let mut descriptions: Vec<Option<String>> = vec![None; records.len()];

    while let Some(joined) = tasks.join_next().await {
        let (index, field, translated) = match joined {
            Ok(outcome) => outcome,
            Err(e) => {
                tasks.abort_all();
                return Err(TranslateError::Task(e.to_string()));
            }
        };
        let text = match translated {
            Ok(text) => text,
            Err(e) => {
                tasks.abort_all();
                tracing::debug!(index, ?field, error = %e, "translation request failed");
                return Err(e);
            }
        };
        match field {
            Field::Name => names[index] = Some(text),
            Field::Description => descriptions[index] = Some(text),
        }
    }

    records
        .iter()
        .zip(names.into_iter().zip(descriptions))
        .map(|(app, (name, description))| match (name, description) {
            (Some(name), Some(description)) => Ok(Application {
                name,
                description,
                category: app.category,
            }),
            _ => Err(TranslateError::Task("translation result missing".into())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{seed_catalog, Category};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Barrier;

    /// Prefixes the target code; fails on one chosen input.
    struct FakeTranslator {
        calls: AtomicUsize,
        fail_on: Option<&'static str>,
    }

    impl FakeTranslator {
        fn new(fail_on: Option<&'static str>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_on,
            }
        }
    }

    #[async_trait::async_trait]
    impl Translator for FakeTranslator {
        async fn translate(
            &self,
            text: &str,
            source: Language,
            target: Language,
        ) -> Result<String, TranslateError> {
            assert_eq!(source, Language::Es);
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_on == Some(text) {
                return Err(TranslateError::Request("connection reset".into()));
            }
            Ok(format!("[{}] {}", target.code(), text))
        }
    }

    /// Finishes later for earlier inputs so completion order is reversed.
    struct SlowFirstTranslator;

    #[async_trait::async_trait]
    impl Translator for SlowFirstTranslator {
        async fn translate(&self, text: &str, _: Language, _: Language) -> Result<String, TranslateError> {
            let delay = match text {
                "ChatGPT" => 40,
                "DALL·E" => 20,
                _ => 0,
            };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(text.to_uppercase())
        }
    }

    /// Blocks every request until all of them are in flight.
    struct BarrierTranslator(Barrier);

    #[async_trait::async_trait]
    impl Translator for BarrierTranslator {
        async fn translate(&self, text: &str, _: Language, _: Language) -> Result<String, TranslateError> {
            self.0.wait().await;
            Ok(text.to_string())
        }
    }

    #[tokio::test]
    async fn test_translates_every_field() {
        let fake = Arc::new(FakeTranslator::new(None));
        let records = seed_catalog();
        let translated = translate_catalog(fake.clone(), &records, Language::En)
            .await
            .unwrap();

        assert_eq!(fake.calls.load(Ordering::SeqCst), 6);
        assert_eq!(translated.len(), 3);
        for (before, after) in records.iter().zip(&translated) {
            assert_eq!(after.name, format!("[en] {}", before.name));
            assert_eq!(after.description, format!("[en] {}", before.description));
            assert_eq!(after.category, before.category);
        }
    }

    #[tokio::test]
    async fn test_single_failure_fails_everything() {
        let fake = Arc::new(FakeTranslator::new(Some("Reconocimiento de voz avanzado")));
        let result = translate_catalog(fake, &seed_catalog(), Language::En).await;
        assert!(matches!(result, Err(TranslateError::Request(_))));
    }

    #[tokio::test]
    async fn test_order_survives_out_of_order_completion() {
        let records = seed_catalog();
        let translated = translate_catalog(Arc::new(SlowFirstTranslator), &records, Language::Fr)
            .await
            .unwrap();
        let names: Vec<&str> = translated.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["CHATGPT", "DALL·E", "WHISPER"]);
    }

    #[tokio::test]
    async fn test_requests_run_concurrently() {
        let records = seed_catalog();
        let translator = Arc::new(BarrierTranslator(Barrier::new(records.len() * 2)));
        let result = tokio::time::timeout(
            Duration::from_secs(5),
            translate_catalog(translator, &records, Language::It),
        )
        .await
        .expect("requests were not issued concurrently");
        assert_eq!(result.unwrap(), records);
    }

    #[tokio::test]
    async fn test_empty_catalog() {
        let fake = Arc::new(FakeTranslator::new(None));
        let translated = translate_catalog(fake.clone(), &[], Language::En)
            .await
            .unwrap();
        assert!(translated.is_empty());
        assert_eq!(fake.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_duplicate_texts_keep_their_slots() {
        let records = vec![
            Application::new("Igual", "Igual", Category::Audio),
            Application::new("Igual", "Otro", Category::Other),
        ];
        let translated = translate_catalog(Arc::new(FakeTranslator::new(None)), &records, Language::Pt)
            .await
            .unwrap();
        assert_eq!(translated[0].description, "[pt] Igual");
        assert_eq!(translated[1].description, "[pt] Otro");
        assert_eq!(translated[1].category, Category::Other);
    }
}

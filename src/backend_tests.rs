//! Backend thread tests: action handling, event flow, shutdown

use crossbeam_channel::unbounded;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crate::catalog::seed_catalog;
use crate::language::Language;
use crate::protocol::{BackendAction, GuiEvent};
use crate::test_support::FakeTranslator;
use crate::translate::Translator;

fn spawn_backend(
    translator: Arc<dyn Translator>,
) -> (
    crossbeam_channel::Sender<BackendAction>,
    crossbeam_channel::Receiver<GuiEvent>,
    JoinHandle<()>,
) {
    let (action_tx, action_rx) = unbounded::<BackendAction>();
    let (event_tx, event_rx) = unbounded::<GuiEvent>();
    let handle = std::thread::spawn(move || {
        crate::backend::run_backend(action_rx, event_tx, translator);
    });
    (action_tx, event_rx, handle)
}

fn wait_finished(handle: &JoinHandle<()>) -> bool {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        if handle.is_finished() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    false
}

#[test]
fn test_translate_all_success_flow() {
    let fake = Arc::new(FakeTranslator::new());
    let (action_tx, event_rx, _handle) = spawn_backend(fake.clone());

    action_tx
        .send(BackendAction::TranslateAll {
            records: seed_catalog(),
            target: Language::En,
        })
        .unwrap();

    match event_rx.recv_timeout(Duration::from_secs(2)) {
        Ok(GuiEvent::TranslationStarted { requests, target }) => {
            assert_eq!(requests, 6);
            assert_eq!(target, Language::En);
        }
        other => panic!("Expected TranslationStarted, got {other:?}"),
    }

    match event_rx.recv_timeout(Duration::from_secs(2)) {
        Ok(GuiEvent::TranslationFinished(records)) => {
            assert_eq!(records.len(), 3);
            assert_eq!(records[0].name, "[en] ChatGPT");
            assert_eq!(records[2].description, "[en] Reconocimiento de voz avanzado");
        }
        other => panic!("Expected TranslationFinished, got {other:?}"),
    }
    assert_eq!(fake.calls(), 6);
}

#[test]
fn test_translate_all_failure_flow() {
    let fake = Arc::new(FakeTranslator::failing_on("DALL·E"));
    let (action_tx, event_rx, _handle) = spawn_backend(fake);

    action_tx
        .send(BackendAction::TranslateAll {
            records: seed_catalog(),
            target: Language::Fr,
        })
        .unwrap();

    assert!(matches!(
        event_rx.recv_timeout(Duration::from_secs(2)),
        Ok(GuiEvent::TranslationStarted { .. })
    ));
    match event_rx.recv_timeout(Duration::from_secs(2)) {
        Ok(GuiEvent::TranslationFailed(reason)) => assert!(reason.contains("503"), "{reason}"),
        other => panic!("Expected TranslationFailed, got {other:?}"),
    }
}

#[test]
fn test_shutdown_stops_backend() {
    let (action_tx, _event_rx, handle) = spawn_backend(Arc::new(FakeTranslator::new()));
    action_tx.send(BackendAction::Shutdown).unwrap();
    assert!(wait_finished(&handle), "backend did not stop on Shutdown");
}

#[test]
fn test_dropping_sender_stops_backend() {
    let (action_tx, _event_rx, handle) = spawn_backend(Arc::new(FakeTranslator::new()));
    drop(action_tx);
    assert!(wait_finished(&handle), "backend did not stop after UI hung up");
}

#[test]
fn test_empty_catalog_translates_to_empty() {
    let fake = Arc::new(FakeTranslator::new());
    let (action_tx, event_rx, _handle) = spawn_backend(fake.clone());
    action_tx
        .send(BackendAction::TranslateAll {
            records: Vec::new(),
            target: Language::De,
        })
        .unwrap();

    assert_eq!(
        event_rx.recv_timeout(Duration::from_secs(2)).ok(),
        Some(GuiEvent::TranslationStarted {
            requests: 0,
            target: Language::De
        })
    );
    assert_eq!(
        event_rx.recv_timeout(Duration::from_secs(2)).ok(),
        Some(GuiEvent::TranslationFinished(Vec::new()))
    );
    assert_eq!(fake.calls(), 0);
}

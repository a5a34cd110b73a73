//! AI Hub - a catalog of AI applications built with egui
//!
//! Architecture:
//! - Main thread: runs the egui UI and owns the catalog state
//! - Backend thread: runs a Tokio runtime for the translation requests
//! - Communication via crossbeam channels (lock-free, sync-safe)

use ai_hub::app::HubApp;
use ai_hub::logging;
use eframe::egui;

fn main() -> eframe::Result<()> {
    logging::init();
    tracing::info!("starting AI Hub");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 680.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Centro de Aplicaciones de IA",
        options,
        Box::new(|cc| Ok(Box::new(HubApp::new(cc)))),
    )
}

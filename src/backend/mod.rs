/// Backend submodules for the translation worker
///
/// - `handlers`: action routing and translation job spawning
/// - `main_loop`: Tokio runtime and the action polling loop
mod handlers;
mod main_loop;

// Re-export the main backend entry point
pub use main_loop::run_backend;

//! AI Hub library.
//!
//! This module re-exports the core components for testing and extension.

pub mod app;
pub mod backend;
pub mod catalog;
pub mod config;
pub mod events;
pub mod language;
pub mod logging;
pub mod protocol;
pub mod state;
pub mod translate;
pub mod ui;
pub mod validation;

#[cfg(test)]
mod backend_tests;
#[cfg(test)]
mod test_support;

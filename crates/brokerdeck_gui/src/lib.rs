//! Desktop console library entry point.
//!
//! Exposes a `run` helper so the binary stays a thin exit-code wrapper.

mod app;
/// Backend worker + protocol types used by the GUI and headless tests.
pub mod backend;

use app::ConsoleApp;
use brokerdeck_core::{Config, HttpFiltersRepository};
use eframe::egui;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("brokerdeck_core=info,brokerdeck_gui=info"))
        .unwrap();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

/// Start the console UI with tracing enabled.
///
/// # Errors
/// Propagates any `eframe` initialization or runtime error, including app
/// creation failures when the management API client cannot be built.
pub fn run() -> eframe::Result<()> {
    init_tracing();

    let config = Config::from_env();
    let repository = HttpFiltersRepository::from_config(&config)
        .map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;
    let app = ConsoleApp::new(config, Arc::new(repository));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(app::MIN_WINDOW_SIZE)
            .with_title("Brokerdeck"),
        ..Default::default()
    };

    eframe::run_native("Brokerdeck", options, Box::new(|_cc| Ok(Box::new(app))))
}

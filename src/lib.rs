#![recursion_limit = "256"]

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod options;
pub mod pages;
pub mod prefs;
pub mod render;
pub mod theme;
pub mod types;
pub mod upload;
pub mod workflow;

pub use api::ApiClient;
pub use config::AppConfig;
pub use types::{ComparisonResult, DrawingAnalysisResult};
pub use workflow::{Phase, Workflow};

/// Browser entry point: install logging and mount the app.
pub fn run() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!("DI-2D starting");

    leptos::mount::mount_to_body(app::App);
}

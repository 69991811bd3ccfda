//! Piezo GUI Client - Main Entry Point
//!
//! Native dashboard for piezoelectric floor tile energy monitoring.

use piezo_gui::app::application::run_app;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Piezo GUI Client...");

    // Run the GPUI application
    run_app();
}

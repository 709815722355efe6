//! Native entry point for the landing page
//!
//! Run with: cargo run

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use eframe::egui;
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tldr_landing=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("TLDR Bot")
            .with_inner_size([1180.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "TLDR Bot",
        options,
        Box::new(|cc| Ok(Box::new(tldr_landing::LandingApp::new(cc)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}

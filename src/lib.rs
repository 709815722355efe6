//! TLDR Bot landing page
//!
//! Marketing front-end for an article search/summarize/chat backend:
//! - Hero page with semantic search box
//! - Results list with on-demand summaries
//! - Per-article chat panel
//! - Mouse-reactive animated dot-grid background
//!
//! Runs natively and in the browser via eframe.

pub mod api;
#[cfg(not(target_arch = "wasm32"))]
pub mod api_native;
#[cfg(target_arch = "wasm32")]
pub mod api_wasm;
pub mod app;
pub mod dots;
pub mod theme;
pub mod time;

pub use app::LandingApp;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Entry point for the web build, invoked from index.html.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();

    // Route tracing to the browser console
    tracing_wasm::set_as_global_default();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let canvas = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document")
            .get_element_by_id("canvas")
            .expect("no canvas element")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("not a canvas element");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(LandingApp::new(cc)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}

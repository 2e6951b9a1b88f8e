//! Quick Image Server - browser frontend.
//!
//! WebAssembly glue for the server-rendered pages: the import console and
//! the upload preview modal. Both attach to existing markup by element ID
//! once the page has loaded.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  boot() (window load)                                         │
//! ├──────────────────────────────┬───────────────────────────────┤
//! │  ImportConsole (Leptos)      │  PreviewModal<DomSurface>     │
//! │  ├── ImportTrigger           │  ├── AssetLinks               │
//! │  └── EventSource /import-api │  └── run_delete_flow          │
//! └──────────────────────────────┴───────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Endpoints, element IDs, messages
//! - [`types`] - Common types (ImportLine, PreviewTarget, AppError)
//! - [`components`] - DOM wiring for the import console and preview modal
//! - [`services`] - Browser-independent state machines and requests

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Event;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use types::{
    // Import
    ImportLine, ImportMessage,
    // Preview
    PreviewTarget, DeleteTarget, DeleteOutcome,
    // Errors
    AppError, AppResult,
};

pub use components::*;
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically once the module is instantiated.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(config::LOG_LEVEL);

    log::info!("Quick Image Server frontend starting");

    let document = gloo_utils::document();
    if page_loaded(&document.ready_state()) {
        boot();
        return;
    }

    let onload = Closure::once(move |_: Event| boot());
    if let Err(e) = gloo_utils::window()
        .add_event_listener_with_callback("load", onload.as_ref().unchecked_ref())
    {
        log::error!("Failed to wait for page load: {}", AppError::from(e));
    }
    onload.forget();
}

/// Whether `document.readyState` means the `load` event already fired.
fn page_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// Attaches both behaviors to the current page.
///
/// Pages carry either, both or neither; whatever is missing is skipped.
pub fn boot() {
    let document = gloo_utils::document();

    if let Err(e) = mount_import_console(&document) {
        log::debug!("No import console on this page: {}", e);
    }

    init_preview_modal(&document);
}

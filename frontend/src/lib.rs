//! GalacticCollectibles - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for the GalacticCollectibles amateur astronomy
//! community.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  HomePage (route "/")                                        │
//! │  └── MoreInfo (banner image + project blurb)                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - View tree and error types
//! - [`components`] - UI components (HomePage, MoreInfo)
//! - [`config`] - Compile-time settings

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // View
    ViewNode,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point.
///
/// Run by the `galactic-frontend` binary under trunk, and exported to JS
/// for hosts that load the library build directly.
#[wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(LOG_LEVEL);

    log::info!("🔭 {} - Starting Leptos App", APP_NAME);

    if let Err(e) = mount() {
        log::error!("❌ {}", e);
    }
}

/// Attach [`App`] to the page.
///
/// Mounts into `#app` when the host page provides it, otherwise into
/// `<body>`.
pub fn mount() -> AppResult<()> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| AppError::Mount("no browser document available".to_string()))?;

    let target = document
        .get_element_by_id(MOUNT_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match target {
        Some(parent) => {
            log::debug!("Mounting into #{}", MOUNT_ID);
            mount_to(parent, || view! { <App/> });
        }
        None => {
            log::warn!("⚠️ No #{} element, mounting to <body>", MOUNT_ID);
            let body = document
                .body()
                .ok_or_else(|| AppError::Mount("document has no <body>".to_string()))?;
            mount_to(body, || view! { <App/> });
        }
    }

    Ok(())
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

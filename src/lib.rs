//! Lens - Image Similarity Search Frontend
//!
//! A WebAssembly frontend for uploading an image and browsing the
//! visually-similar matches returned by the search backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (title banner)                                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (file input, in-flight indicator)        │
//! │  └── ResultsSection (preview + matches, when completed)     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`workflow`] - the upload-and-result state machine
//! - [`types`] - wire and error types
//! - [`components`] - UI components
//! - [`services`] - backend communication

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod types;
pub mod workflow;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{MatchResult, UploadError, UploadResponse, UploadResult};

// Workflow
pub use workflow::{PreviewReference, UploadState, UploadWorkflow};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Lens - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // The single workflow instance owning the upload state for this page.
    let workflow = UploadWorkflow::new();

    view! {
        <Header/>

        <div class="container">
            <Hero/>
            <UploadSection workflow=workflow/>
            <ResultsSection workflow=workflow/>
        </div>

        <Footer/>
    }
}

//! Menu Cart - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that uploads a PDF menu, shows the parsed
//! dishes and lets the user build a cart without leaving the page.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (cart toggle + badge)                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection / LoadingSection                         │
//! │  └── MenuSection (when a menu is loaded)                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  CartSidebar (slides in over the page)                       │
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Menu, upload response and error types
//! - [`cart`] - Cart state and quantity arithmetic
//! - [`presenter`] - Render-ready snapshots of cart and menu
//! - [`components`] - UI components (Header, Upload, Menu, Cart, etc.)
//! - [`services`] - Upload and user notification

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod cart;
pub mod presenter;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Menu
    ItemId, Menu, MenuItem, Price,
    // Page
    UploadPhase,
    // API
    UploadResponse,
    // Errors
    AppError, AppResult,
};

// Cart
pub use cart::{step_quantity, Cart, CartEntry, CartSummary};
pub use presenter::{CartView, MenuCategoryView, MenuEntryView};

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

    log::info!("🦀 Menu Cart - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Menu Cart"/>
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
    // Page state; the cart lives only as long as the tab
    let (phase, set_phase) = create_signal(UploadPhase::Idle);
    let (menu, set_menu) = create_signal(None::<Menu>);
    let cart = create_rw_signal(Cart::new());
    let (cart_open, set_cart_open) = create_signal(false);

    let cart_view = create_memo(move |_| cart.with(CartView::from_cart));

    view! {
        <Header
            badge=Signal::derive(move || cart_view.get().badge)
            show_toggle=Signal::derive(move || phase.get().shows_menu())
            set_cart_open=set_cart_open
        />

        <div class="container">
            <Hero/>

            <UploadSection
                visible=Signal::derive(move || phase.get().shows_upload_form())
                set_phase=set_phase
                set_menu=set_menu
            />

            <LoadingSection visible=Signal::derive(move || phase.get().shows_spinner())/>

            <MenuSection menu=menu cart=cart/>
        </div>

        <CartSidebar
            cart=cart
            view_model=cart_view
            open=cart_open
            set_open=set_cart_open
        />

        <Footer/>
    }
}

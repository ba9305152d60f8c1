//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Menu Cart • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-note">"Your cart lives in this tab only and is cleared on reload."</div>
        </footer>
    }
}

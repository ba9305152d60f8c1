//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Menu to Cart"</h1>
            <p class="subtitle">
                "Upload a restaurant menu as a PDF. "
                "Pick your dishes, set quantities and watch your order add up."
            </p>
        </div>
    }
}

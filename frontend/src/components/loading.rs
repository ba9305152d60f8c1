use leptos::*;
use crate::config::ids;

#[component]
pub fn LoadingSection(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <div
            class="loading-section"
            id=ids::LOADING_SECTION
            style:display=move || if visible.get() { "block" } else { "none" }
        >
            <div class="spinner"></div>
            <div class="loading-text">"⏳ Reading your menu..."</div>
            <div class="loading-hint">"This can take a few seconds for long menus."</div>
        </div>
    }
}

//! Cart sidebar: lines, total and remove buttons.

use leptos::*;
use crate::cart::Cart;
use crate::config::ids;
use crate::presenter::CartView;

#[component]
pub fn CartSidebar(
    cart: RwSignal<Cart>,
    /// Snapshot recomputed on every cart change
    #[prop(into)]
    view_model: Signal<CartView>,
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
) -> impl IntoView {
    view! {
        <aside class="cart-sidebar" id=ids::CART_SIDEBAR class:open=move || open.get()>
            <div class="cart-header">
                <span class="cart-title">"🛒 Your Cart"</span>
                <button class="cart-close" on:click=move |_| set_open.set(false)>"×"</button>
            </div>

            <div class="cart-items" id=ids::CART_ITEMS>
                {move || {
                    view_model.get().placeholder.map(|text| view! {
                        <div class="cart-item cart-empty">{text}</div>
                    })
                }}
                <For
                    each=move || view_model.get().lines
                    key=|line| (line.id.clone(), line.detail.clone())
                    children=move |line| {
                        let id = line.id.clone();
                        let on_remove = move |_| {
                            let summary = cart.try_update(|cart| cart.remove(&id));
                            log::info!("🗑️ Removed {} ({:?})", id, summary);
                        };

                        view! {
                            <div class="cart-item">
                                <div class="cart-item-info">
                                    <div class="cart-item-name">{line.name}</div>
                                    <div class="cart-item-detail">{line.detail}</div>
                                </div>
                                <button class="cart-remove" on:click=on_remove>"🗑️"</button>
                            </div>
                        }
                    }
                />
            </div>

            <div class="cart-total" id=ids::CART_TOTAL>
                {move || view_model.get().total_label}
            </div>
        </aside>
    }
}

use leptos::*;
use crate::config::ids;

#[component]
pub fn Header(
    /// Number of items in the cart
    #[prop(into)]
    badge: Signal<u32>,
    /// Toggle is hidden until a menu is showing
    #[prop(into)]
    show_toggle: Signal<bool>,
    set_cart_open: WriteSignal<bool>,
) -> impl IntoView {
    let on_toggle = move |_| {
        set_cart_open.update(|open| *open = !*open);
        log::debug!("🛒 Cart panel toggled");
    };

    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">"MENU CART"</a>
            </div>
            <div class="header-right">
                <button
                    class="cart-toggle"
                    id=ids::CART_TOGGLE
                    on:click=on_toggle
                    style:display=move || if show_toggle.get() { "flex" } else { "none" }
                >
                    <span class="cart-icon">"🛒"</span>
                    <span class="cart-badge" id=ids::CART_BADGE>
                        {move || badge.get()}
                    </span>
                </button>
            </div>
        </header>
    }
}

//! Menu display: categories, item cards and quantity steppers.

use leptos::*;
use crate::cart::{quantity_after_add, step_quantity, Cart};
use crate::config::ids;
use crate::presenter::{menu_view, MenuCategoryView, MenuEntryView};
use crate::services::{notify_error, BrowserAlert};
use crate::types::Menu;

#[component]
pub fn MenuSection(
    menu: ReadSignal<Option<Menu>>,
    cart: RwSignal<Cart>,
) -> impl IntoView {
    view! {
        <div
            class="menu-section"
            id=ids::MENU_SECTION
            style:display=move || if menu.with(Option::is_some) { "block" } else { "none" }
        >
            <div id=ids::MENU_CONTENT>
                <h2 class="menu-title">"🍽️ Menu"</h2>
                {move || {
                    menu.with(|menu| {
                        menu.as_ref()
                            .map(menu_view)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|category| view! { <MenuCategory category=category cart=cart/> })
                            .collect_view()
                    })
                }}
            </div>
        </div>
    }
}

#[component]
fn MenuCategory(category: MenuCategoryView, cart: RwSignal<Cart>) -> impl IntoView {
    view! {
        <div class="category-header">"📋 " {category.category}</div>
        {category
            .entries
            .into_iter()
            .map(|entry| view! { <MenuItemCard entry=entry cart=cart/> })
            .collect_view()}
    }
}

#[component]
fn MenuItemCard(entry: MenuEntryView, cart: RwSignal<Cart>) -> impl IntoView {
    let (quantity, set_quantity) = create_signal(0u32);
    let qty_id = entry.quantity_dom_id();

    let on_minus = move |_| set_quantity.update(|q| *q = step_quantity(*q, -1));
    let on_plus = move |_| set_quantity.update(|q| *q = step_quantity(*q, 1));

    let on_add = {
        let entry = entry.clone();
        move |_| {
            let requested = quantity.get_untracked();
            let Some(added) = cart.try_update(|cart| {
                cart.add(entry.id.clone(), entry.name.clone(), entry.price, requested)
            }) else {
                log::warn!("Cart is no longer available");
                return;
            };

            set_quantity.set(quantity_after_add(requested, &added));
            match added {
                Ok(summary) => log::info!(
                    "🛒 Added {} x {} ({} items, total {})",
                    requested,
                    entry.name,
                    summary.count,
                    summary.total
                ),
                Err(e) => notify_error(&BrowserAlert, &e),
            }
        }
    };

    view! {
        <div class="menu-item">
            <div class="menu-item-info">
                <div class="item-name">{entry.name}</div>
                <div class="item-desc">{entry.desc}</div>
                <div class="item-price">{entry.price_label}</div>
            </div>
            <div class="menu-item-actions">
                <div class="quantity-controls">
                    <button class="qty-btn" on:click=on_minus>"−"</button>
                    <div class="qty-display" id=qty_id>{move || quantity.get()}</div>
                    <button class="qty-btn" on:click=on_plus>"+"</button>
                </div>
                <button class="add-to-cart" on:click=on_add>"🛒 Add to Cart"</button>
            </div>
        </div>
    }
}

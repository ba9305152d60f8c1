//! Render-ready snapshots of the cart and menu.
//!
//! Components only draw what these snapshots contain, so everything the
//! user reads (labels, totals, the empty placeholder) is decided here and
//! can be tested without a DOM.

use crate::cart::Cart;
use crate::config::{CURRENCY_SYMBOL, EMPTY_CART_MESSAGE};
use crate::types::{ItemId, Menu, Price};

/// Format a price with the currency symbol.
///
/// Amounts are rounded to cents; whole amounts print without decimals,
/// like the server sends them.
pub fn format_price(price: Price) -> String {
    let rounded = (price * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}{}", CURRENCY_SYMBOL, rounded)
    } else {
        format!("{}{:.2}", CURRENCY_SYMBOL, rounded)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// One rendered cart line.
#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    pub id: ItemId,
    pub name: String,
    /// e.g. `₹40 × 2`
    pub detail: String,
}

/// Everything the cart sidebar and badge display.
#[derive(Clone, Debug, PartialEq)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    /// e.g. `Total: ₹200`
    pub total_label: String,
    pub badge: u32,
    /// Set when there is nothing to list.
    pub placeholder: Option<&'static str>,
}

impl CartView {
    pub fn from_cart(cart: &Cart) -> Self {
        let summary = cart.summary();
        let lines = cart
            .iter()
            .map(|(id, entry)| CartLine {
                id: id.clone(),
                name: entry.name.clone(),
                detail: format!("{} × {}", format_price(entry.price), entry.quantity),
            })
            .collect();

        Self {
            lines,
            total_label: format!("Total: {}", format_price(summary.total)),
            badge: summary.count,
            placeholder: (summary.count == 0).then_some(EMPTY_CART_MESSAGE),
        }
    }
}

// =============================================================================
// Menu
// =============================================================================

/// One rendered menu card.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuEntryView {
    pub id: ItemId,
    pub name: String,
    pub desc: String,
    pub price: Price,
    pub price_label: String,
}

impl MenuEntryView {
    /// Id of the element showing this item's stepper value.
    pub fn quantity_dom_id(&self) -> String {
        format!("qty_{}", self.id)
    }
}

/// A category header and its cards.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuCategoryView {
    pub category: String,
    pub entries: Vec<MenuEntryView>,
}

/// Flatten a menu into render order, assigning each item its [`ItemId`].
pub fn menu_view(menu: &Menu) -> Vec<MenuCategoryView> {
    menu.iter()
        .map(|(category, items)| MenuCategoryView {
            category: category.clone(),
            entries: items
                .iter()
                .enumerate()
                .map(|(index, item)| MenuEntryView {
                    id: ItemId::new(category.clone(), index),
                    name: item.name.clone(),
                    desc: item.desc.clone(),
                    price: item.price,
                    price_label: format_price(item.price),
                })
                .collect(),
        })
        .collect()
}

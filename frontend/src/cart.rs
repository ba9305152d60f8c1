//! Shopping cart state.
//!
//! The cart is a plain owned value: components keep it in a `RwSignal` and
//! call the methods here, which return the recomputed [`CartSummary`].
//! Nothing in this module touches the browser.

use indexmap::IndexMap;

use crate::types::{AppError, AppResult, ItemId, Price};

/// One line of the cart.
#[derive(Clone, Debug, PartialEq)]
pub struct CartEntry {
    pub name: String,
    pub price: Price,
    pub quantity: u32,
}

impl CartEntry {
    /// Price times quantity.
    pub fn subtotal(&self) -> Price {
        self.price * f64::from(self.quantity)
    }
}

/// Aggregates derived from the cart contents.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CartSummary {
    /// Sum of quantities (badge count)
    pub count: u32,
    /// Sum of price x quantity
    pub total: Price,
}

/// Items chosen so far, keyed by menu position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cart {
    entries: IndexMap<ItemId, CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of an item, merging with an existing line.
    ///
    /// A zero quantity is rejected and leaves the cart untouched.
    pub fn add(
        &mut self,
        id: ItemId,
        name: impl Into<String>,
        price: Price,
        quantity: u32,
    ) -> AppResult<CartSummary> {
        if quantity == 0 {
            return Err(AppError::EmptyQuantity);
        }

        self.entries
            .entry(id)
            .and_modify(|entry| entry.quantity = entry.quantity.saturating_add(quantity))
            .or_insert_with(|| CartEntry {
                name: name.into(),
                price,
                quantity,
            });

        Ok(self.summary())
    }

    /// Drop a line entirely. Unknown ids are ignored.
    pub fn remove(&mut self, id: &ItemId) -> CartSummary {
        self.entries.shift_remove(id);
        self.summary()
    }

    /// Recompute count and total from the current lines.
    pub fn summary(&self) -> CartSummary {
        self.entries
            .values()
            .fold(CartSummary::default(), |acc, entry| CartSummary {
                count: acc.count.saturating_add(entry.quantity),
                total: acc.total + entry.subtotal(),
            })
    }

    pub fn get(&self, id: &ItemId) -> Option<&CartEntry> {
        self.entries.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, &CartEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Apply a stepper click to a quantity, clamping at zero.
pub fn step_quantity(current: u32, delta: i32) -> u32 {
    if delta < 0 {
        current.saturating_sub(delta.unsigned_abs())
    } else {
        current.saturating_add(delta.unsigned_abs())
    }
}

/// Stepper value once an add-to-cart attempt has finished.
///
/// A successful add starts the stepper over at zero; a rejected one keeps
/// whatever the user had chosen.
pub fn quantity_after_add(requested: u32, outcome: &AppResult<CartSummary>) -> u32 {
    match outcome {
        Ok(_) => 0,
        Err(_) => requested,
    }
}

//! Cart store
//!
//! Authoritative in-memory list of cart lines, keyed by menu item id. The
//! store is plain owned state: the page that owns it passes it by reference
//! to whatever consumes it, there is no ambient global.

use crate::config::PricingConfig;
use crate::pricing;
use shared::models::{CartLineItem, MenuItem, OrderSummary};

#[derive(Debug, Default)]
pub struct CartStore {
    items: Vec<CartLineItem>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a menu item.
    ///
    /// If a line for this id already exists its quantity is incremented;
    /// otherwise a new line with quantity 1 is appended. Safe to call
    /// repeatedly.
    pub fn add_item(&mut self, item: &MenuItem) {
        match self.items.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.items.push(CartLineItem::from_menu_item(item)),
        }
        tracing::debug!(id = %item.id, name = %item.name, "added to cart");
    }

    /// Set a line's quantity exactly (not additive).
    ///
    /// A quantity of zero removes the line, keeping the invariant that a
    /// stored quantity is always >= 1. No-op when the id is not present.
    pub fn set_quantity(&mut self, id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove_item(id);
            return;
        }
        if let Some(line) = self.items.iter_mut().find(|line| line.id == id) {
            line.quantity = quantity;
            tracing::debug!(id, quantity, "updated cart quantity");
        }
    }

    /// Delete a line if present; no-op otherwise
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|line| line.id != id);
    }

    /// Empty the cart. Invoked after a successful checkout.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Current lines, in insertion order
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all lines, recomputed on demand.
    /// Feeds the header badge.
    pub fn total_item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Priced summary of the current contents, re-derived on every call
    pub fn summary(&self, pricing: &PricingConfig) -> OrderSummary {
        pricing::compute_summary(&self.items, pricing)
    }

    /// Amount still needed to qualify for free delivery, if any
    pub fn free_delivery_gap(&self, pricing: &PricingConfig) -> Option<i64> {
        pricing::free_delivery_gap(self.summary(pricing).subtotal, pricing)
    }
}

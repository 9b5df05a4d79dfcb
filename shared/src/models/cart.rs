//! Cart and order models

use super::menu::MenuItem;
use serde::{Deserialize, Serialize};

/// One line of the cart, keyed by menu item id.
///
/// Invariant: quantity is always >= 1 while the line exists. A reduction
/// to zero removes the line instead of persisting it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    /// Menu item id this line refers to
    pub id: String,
    pub name: String,
    /// Unit price in whole currency units, copied from the menu item
    pub price: i64,
    pub quantity: u32,
    pub is_veg: bool,
    pub image: String,
}

impl CartLineItem {
    /// Create a fresh line with quantity 1 from a catalog entry
    pub fn from_menu_item(item: &MenuItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity: 1,
            is_veg: item.is_veg,
            image: item.image.clone(),
        }
    }

    /// Line total: unit price times quantity
    pub fn line_total(&self) -> i64 {
        self.price * i64::from(self.quantity)
    }
}

/// Priced summary of a cart. Derived, never stored; recomputed from the
/// line items on every read.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: i64,
    pub delivery_fee: i64,
    pub tax: i64,
    pub total: i64,
}

/// Payment method chosen at checkout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Card,
    Upi,
    CashOnDelivery,
}

impl PaymentMethod {
    /// Short display label as shown on the pay button
    pub fn label(&self) -> &'static str {
        match self {
            Self::Card => "Card",
            Self::Upi => "UPI",
            Self::CashOnDelivery => "COD",
        }
    }
}

/// Completed order, produced by a successful checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: String,
    pub items: Vec<CartLineItem>,
    pub summary: OrderSummary,
    pub payment_method: PaymentMethod,
    /// Gateway transaction reference
    pub transaction_id: String,
    /// Millisecond Unix timestamp
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu_item() -> MenuItem {
        MenuItem {
            id: "si1".to_string(),
            name: "Medu Vada".to_string(),
            description: "Crispy lentil donuts".to_string(),
            price: 120,
            original_price: None,
            category: "south-indian".to_string(),
            sub_category: "starters".to_string(),
            is_veg: true,
            is_special: true,
            is_bestseller: false,
            is_spicy: false,
            rating: 4.5,
            image: "/placeholder.svg".to_string(),
        }
    }

    #[test]
    fn test_line_from_menu_item_starts_at_one() {
        let line = CartLineItem::from_menu_item(&menu_item());
        assert_eq!(line.quantity, 1);
        assert_eq!(line.price, 120);
        assert_eq!(line.line_total(), 120);
    }

    #[test]
    fn test_line_total_scales_with_quantity() {
        let mut line = CartLineItem::from_menu_item(&menu_item());
        line.quantity = 4;
        assert_eq!(line.line_total(), 480);
    }

    #[test]
    fn test_payment_method_labels() {
        assert_eq!(PaymentMethod::Card.label(), "Card");
        assert_eq!(PaymentMethod::Upi.label(), "UPI");
        assert_eq!(PaymentMethod::CashOnDelivery.label(), "COD");
    }
}

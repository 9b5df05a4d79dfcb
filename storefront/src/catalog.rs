//! Static menu catalog and restaurant data
//!
//! The catalog is embedded at build time and loaded once. Nothing here is
//! mutated at runtime; a real deployment would swap this module for a
//! catalog service behind the same read-only contract.

use shared::models::{MenuCategory, MenuItem, OpeningHours, StoreInfo};
use std::sync::OnceLock;

static MENU_JSON: &str = include_str!("../data/menu.json");

/// Offered reservation time slots, as displayed on the booking form
pub const TIME_SLOTS: [&str; 18] = [
    "11:00 AM", "11:30 AM", "12:00 PM", "12:30 PM", "1:00 PM", "1:30 PM", "2:00 PM", "2:30 PM",
    "3:00 PM", "6:00 PM", "6:30 PM", "7:00 PM", "7:30 PM", "8:00 PM", "8:30 PM", "9:00 PM",
    "9:30 PM", "10:00 PM",
];

/// Offered party sizes
pub const GUEST_OPTIONS: [&str; 10] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10+"];

/// Read-only menu catalog
#[derive(Debug)]
pub struct Catalog {
    items: Vec<MenuItem>,
    categories: Vec<MenuCategory>,
}

impl Catalog {
    /// The built-in catalog, parsed from the embedded menu data on first use.
    ///
    /// The embedded JSON is covered by a test; a parse failure here is a
    /// build defect, not a runtime condition.
    pub fn builtin() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            let items: Vec<MenuItem> =
                serde_json::from_str(MENU_JSON).expect("embedded menu data is valid JSON");
            tracing::debug!(count = items.len(), "loaded built-in menu catalog");
            Catalog {
                items,
                categories: vec![
                    MenuCategory::new("south-indian", "South Indian"),
                    MenuCategory::new("north-indian", "North Indian"),
                    MenuCategory::new("beverages", "Beverages"),
                    MenuCategory::new("desserts", "Desserts"),
                ],
            }
        })
    }

    /// All catalog entries, in menu order
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Menu browser tabs, in display order
    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    /// Look up one entry by id
    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Entries under one category tab
    pub fn by_category(&self, category: &str) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(move |i| i.category == category)
    }

    /// Vegetarian entries only
    pub fn veg_only(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(|i| i.is_veg)
    }
}

/// Restaurant contact card and opening hours
pub fn store_info() -> StoreInfo {
    StoreInfo {
        name: "Spice Garden".to_string(),
        phone: "+91 98765 43210".to_string(),
        reservation_email: "reservations@spicegarden.com".to_string(),
        opening_hours: vec![
            OpeningHours {
                days: "Monday - Thursday".to_string(),
                hours: "11:00 AM - 10:00 PM".to_string(),
            },
            OpeningHours {
                days: "Friday - Saturday".to_string(),
                hours: "11:00 AM - 11:00 PM".to_string(),
            },
            OpeningHours {
                days: "Sunday".to_string(),
                hours: "11:00 AM - 10:00 PM".to_string(),
            },
        ],
    }
}

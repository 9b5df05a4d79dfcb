//! Menu catalog models

use serde::{Deserialize, Serialize};

/// Catalog entry. Defined at build time and never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in whole currency units (rupees)
    pub price: i64,
    /// Pre-discount price, shown struck through when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<i64>,
    /// Category tag (e.g. "south-indian")
    pub category: String,
    /// Sub-category tag (e.g. "starters")
    pub sub_category: String,
    pub is_veg: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_special: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_bestseller: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_spicy: bool,
    /// Customer rating, 0.0 to 5.0
    pub rating: f32,
    /// Image reference (asset path)
    pub image: String,
}

/// Menu browser tab
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
}

impl MenuCategory {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

//! Domain models
//!
//! All models are plain serde-serializable data. Catalog entries are
//! immutable once loaded; cart and order types are mutated only through
//! the storefront's store operations.

pub mod cart;
pub mod contact;
pub mod menu;
pub mod reservation;
pub mod store_info;

pub use cart::{CartLineItem, OrderReceipt, OrderSummary, PaymentMethod};
pub use contact::ContactMessage;
pub use menu::{MenuCategory, MenuItem};
pub use reservation::ReservationRequest;
pub use store_info::{OpeningHours, StoreInfo};

//! Single-page restaurant storefront: menu catalog, cart and checkout,
//! and the controlled forms behind the contact, reservation, login, and
//! newsletter sections.
//!
//! Everything network-shaped sits behind the ports in [`submit`], wired to
//! simulated gateways here and swappable for real ones without touching
//! the flows.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod favorites;
pub mod forms;
pub mod notify;
pub mod pricing;
pub mod submit;

pub use cart::CartStore;
pub use catalog::Catalog;
pub use checkout::CheckoutService;
pub use config::{Config, PricingConfig};
pub use favorites::Favorites;
pub use forms::{FormPayload, FormSession, SessionState};
pub use notify::{LogNotifier, MemoryNotifier, Notification, NotificationKind, Notifier};
pub use submit::{
    PaymentPort, SimulatedGateway, SimulatedPaymentGateway, SubmissionPort, SubmitReceipt,
};

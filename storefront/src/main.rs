//! Demo walk-through of the storefront flows: browse the menu, fill a
//! cart, check out, and book a table through the reservation form.

use std::sync::Arc;
use storefront::forms::reservation::ReservationForm;
use storefront::{
    CartStore, Catalog, CheckoutService, Config, LogNotifier, SimulatedGateway,
    SimulatedPaymentGateway,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    let catalog = Catalog::builtin();
    let info = storefront::catalog::store_info();
    tracing::info!(
        store = %info.name,
        items = catalog.items().len(),
        "storefront ready"
    );

    let notifier = Arc::new(LogNotifier);

    // Fill a cart and walk it through checkout.
    let mut cart = CartStore::new();
    for id in ["si6", "ni11", "bv1"] {
        match catalog.get(id) {
            Some(item) => cart.add_item(item),
            None => anyhow::bail!("catalog is missing {id}"),
        }
    }
    cart.set_quantity("bv1", 2);

    let summary = cart.summary(&config.pricing);
    tracing::info!(
        subtotal = summary.subtotal,
        delivery_fee = summary.delivery_fee,
        tax = summary.tax,
        total = summary.total,
        "cart priced"
    );

    let checkout = CheckoutService::new(
        Arc::new(SimulatedPaymentGateway::new(config.payment_delay())),
        notifier.clone(),
        config.pricing,
    );
    let receipt = checkout
        .checkout(&mut cart, shared::models::PaymentMethod::Upi)
        .await?;
    tracing::info!(order_id = %receipt.order_id, "order placed");

    // Book a table for tomorrow evening.
    let gateway = SimulatedGateway::new(config.form_submit_delay());
    let mut reservation = ReservationForm::new();
    reservation.update(|r| {
        r.name = "Demo Guest".to_string();
        r.email = "guest@example.com".to_string();
        r.phone = "+91 90000 00000".to_string();
        r.date = Some(chrono::Utc::now().date_naive() + chrono::Days::new(1));
        r.time = "7:30 PM".to_string();
        r.guests = "2".to_string();
    });
    let booking = reservation.submit(&gateway, notifier.as_ref()).await?;
    tracing::info!(confirmation_id = %booking.confirmation_id, "table booked");

    Ok(())
}

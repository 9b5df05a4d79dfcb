//! Checkout flow
//!
//! Gates payment on a non-empty cart, charges through the injected
//! [`PaymentPort`], and clears the cart only after the gateway approves.
//! Dropping the in-flight future leaves the cart untouched.

use crate::cart::CartStore;
use crate::config::PricingConfig;
use crate::notify::{Notification, Notifier};
use crate::submit::PaymentPort;
use shared::models::{OrderReceipt, PaymentMethod};
use shared::{AppError, AppResult, util};
use std::sync::Arc;
use uuid::Uuid;

pub struct CheckoutService {
    gateway: Arc<dyn PaymentPort>,
    notifier: Arc<dyn Notifier>,
    pricing: PricingConfig,
}

impl CheckoutService {
    pub fn new(
        gateway: Arc<dyn PaymentPort>,
        notifier: Arc<dyn Notifier>,
        pricing: PricingConfig,
    ) -> Self {
        Self {
            gateway,
            notifier,
            pricing,
        }
    }

    /// Charge the cart's current total and, on approval, clear the cart
    /// and hand back the receipt.
    ///
    /// Refuses an empty cart before touching the gateway; the cart UI
    /// disables checkout in that state, so hitting this error means the
    /// caller bypassed the gate.
    pub async fn checkout(
        &self,
        cart: &mut CartStore,
        method: PaymentMethod,
    ) -> AppResult<OrderReceipt> {
        if cart.is_empty() {
            return Err(AppError::empty_cart());
        }

        let summary = cart.summary(&self.pricing);
        match self.gateway.charge(method, &summary).await {
            Ok(confirmation) => {
                let receipt = OrderReceipt {
                    order_id: Uuid::new_v4().to_string(),
                    items: cart.items().to_vec(),
                    summary,
                    payment_method: method,
                    transaction_id: confirmation.transaction_id,
                    created_at: util::now_millis(),
                };
                cart.clear();
                self.notifier.notify(Notification::success(
                    "Payment Successful!",
                    format!(
                        "Your order of ₹{} has been confirmed. You'll receive a confirmation SMS shortly.",
                        receipt.summary.total
                    ),
                ));
                tracing::info!(
                    order_id = %receipt.order_id,
                    total = receipt.summary.total,
                    method = method.label(),
                    "checkout completed"
                );
                Ok(receipt)
            }
            Err(err) => {
                self.notifier.notify(Notification::error(
                    "Payment Failed",
                    "There was an issue processing your payment. Please try again.",
                ));
                tracing::warn!(code = %err.code, "checkout failed: {}", err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::notify::{MemoryNotifier, NotificationKind};
    use crate::submit::{PaymentConfirmation, SimulatedPaymentGateway};
    use async_trait::async_trait;
    use shared::ErrorCode;
    use shared::models::OrderSummary;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Gateway that counts charges and always declines
    #[derive(Default)]
    struct DecliningGateway {
        charges: AtomicUsize,
    }

    #[async_trait]
    impl PaymentPort for DecliningGateway {
        async fn charge(
            &self,
            _method: PaymentMethod,
            _summary: &OrderSummary,
        ) -> AppResult<PaymentConfirmation> {
            self.charges.fetch_add(1, Ordering::SeqCst);
            Err(AppError::payment("card declined"))
        }
    }

    fn filled_cart() -> CartStore {
        let mut cart = CartStore::new();
        let catalog = Catalog::builtin();
        cart.add_item(catalog.get("si6").expect("si6")); // 450
        cart.add_item(catalog.get("ni11").expect("ni11")); // 80
        cart
    }

    #[tokio::test]
    async fn test_empty_cart_is_rejected_before_gateway() {
        let gateway = Arc::new(DecliningGateway::default());
        let service = CheckoutService::new(
            gateway.clone(),
            Arc::new(MemoryNotifier::new()),
            PricingConfig::default(),
        );

        let mut cart = CartStore::new();
        let err = service
            .checkout(&mut cart, PaymentMethod::Card)
            .await
            .expect_err("empty cart");
        assert_eq!(err.code, ErrorCode::EmptyCart);
        assert_eq!(gateway.charges.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_successful_checkout_clears_cart_and_notifies() {
        let notifier = Arc::new(MemoryNotifier::new());
        let service = CheckoutService::new(
            Arc::new(SimulatedPaymentGateway::instant()),
            notifier.clone(),
            PricingConfig::default(),
        );

        let mut cart = filled_cart();
        let receipt = service
            .checkout(&mut cart, PaymentMethod::Upi)
            .await
            .expect("approved");

        // subtotal 530 > 500 threshold => free delivery; tax round(530*0.18)=95
        assert_eq!(receipt.summary.subtotal, 530);
        assert_eq!(receipt.summary.delivery_fee, 0);
        assert_eq!(receipt.summary.tax, 95);
        assert_eq!(receipt.summary.total, 625);
        assert_eq!(receipt.items.len(), 2);
        assert!(cart.is_empty());

        let shown = notifier.shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].kind, NotificationKind::Success);
        assert!(shown[0].body.contains("₹625"));
    }

    #[tokio::test]
    async fn test_declined_payment_retains_cart() {
        let notifier = Arc::new(MemoryNotifier::new());
        let service = CheckoutService::new(
            Arc::new(DecliningGateway::default()),
            notifier.clone(),
            PricingConfig::default(),
        );

        let mut cart = filled_cart();
        let err = service
            .checkout(&mut cart, PaymentMethod::Card)
            .await
            .expect_err("declined");
        assert_eq!(err.code, ErrorCode::PaymentFailed);
        assert_eq!(cart.items().len(), 2);

        let shown = notifier.shown();
        assert_eq!(shown[0].kind, NotificationKind::Error);
    }
}

//! Submission and payment ports
//!
//! All "network" operations sit behind these traits so the simulated
//! fixed-delay gateways can be swapped for instant fakes in tests, and for
//! real API calls later without touching the forms or the cart.

use async_trait::async_trait;
use serde::Serialize;
use shared::models::{OrderSummary, PaymentMethod};
use shared::{AppError, AppResult, util};
use std::time::Duration;
use uuid::Uuid;

/// Acknowledgement for an accepted form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub confirmation_id: String,
    /// Millisecond Unix timestamp
    pub submitted_at: i64,
}

impl SubmitReceipt {
    fn issue() -> Self {
        Self {
            confirmation_id: Uuid::new_v4().to_string(),
            submitted_at: util::now_millis(),
        }
    }
}

/// Outbound boundary for form payloads (contact, reservation, login,
/// newsletter). A real implementation would POST to an API.
#[async_trait]
pub trait SubmissionPort<P>: Send + Sync
where
    P: Send + 'static,
{
    async fn submit(&self, payload: P) -> AppResult<SubmitReceipt>;
}

/// Gateway that accepts every payload after a fixed artificial delay.
///
/// This is the demo backend: it logs the payload and issues a receipt.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Zero-delay variant for tests
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait]
impl<P> SubmissionPort<P> for SimulatedGateway
where
    P: Serialize + Send + 'static,
{
    async fn submit(&self, payload: P) -> AppResult<SubmitReceipt> {
        tokio::time::sleep(self.delay).await;
        let receipt = SubmitReceipt::issue();
        let payload = serde_json::to_value(&payload).unwrap_or(serde_json::Value::Null);
        tracing::info!(
            confirmation_id = %receipt.confirmation_id,
            %payload,
            "simulated submission accepted"
        );
        Ok(receipt)
    }
}

/// Gateway that rejects every payload, for exercising failure paths
#[derive(Debug, Clone)]
pub struct RejectingGateway {
    error: AppError,
}

impl RejectingGateway {
    pub fn new(error: AppError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl<P> SubmissionPort<P> for RejectingGateway
where
    P: Send + 'static,
{
    async fn submit(&self, _payload: P) -> AppResult<SubmitReceipt> {
        Err(self.error.clone())
    }
}

/// Confirmation returned by a successful charge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentConfirmation {
    pub transaction_id: String,
    pub amount: i64,
    pub method: PaymentMethod,
}

/// Outbound boundary for checkout. A real implementation would call a
/// payment gateway and surface its success/failure.
#[async_trait]
pub trait PaymentPort: Send + Sync {
    async fn charge(
        &self,
        method: PaymentMethod,
        summary: &OrderSummary,
    ) -> AppResult<PaymentConfirmation>;
}

/// Payment processor stand-in: fixed delay, always approves
#[derive(Debug, Clone)]
pub struct SimulatedPaymentGateway {
    delay: Duration,
}

impl SimulatedPaymentGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Zero-delay variant for tests
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait]
impl PaymentPort for SimulatedPaymentGateway {
    async fn charge(
        &self,
        method: PaymentMethod,
        summary: &OrderSummary,
    ) -> AppResult<PaymentConfirmation> {
        tokio::time::sleep(self.delay).await;
        let confirmation = PaymentConfirmation {
            transaction_id: Uuid::new_v4().to_string(),
            amount: summary.total,
            method,
        };
        tracing::info!(
            transaction_id = %confirmation.transaction_id,
            amount = confirmation.amount,
            method = method.label(),
            "simulated payment approved"
        );
        Ok(confirmation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ContactMessage;

    #[tokio::test]
    async fn test_simulated_gateway_accepts() {
        let gateway = SimulatedGateway::instant();
        let receipt = gateway
            .submit(ContactMessage::default())
            .await
            .expect("accepted");
        assert!(!receipt.confirmation_id.is_empty());
    }

    #[tokio::test]
    async fn test_rejecting_gateway_returns_configured_error() {
        let gateway = RejectingGateway::new(AppError::invalid_credentials());
        let err = gateway
            .submit(ContactMessage::default())
            .await
            .expect_err("rejected");
        assert_eq!(err.code, shared::ErrorCode::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_simulated_payment_echoes_total() {
        let gateway = SimulatedPaymentGateway::instant();
        let summary = OrderSummary {
            subtotal: 400,
            delivery_fee: 50,
            tax: 72,
            total: 522,
        };
        let confirmation = gateway
            .charge(PaymentMethod::Upi, &summary)
            .await
            .expect("approved");
        assert_eq!(confirmation.amount, 522);
        assert_eq!(confirmation.method, PaymentMethod::Upi);
    }
}

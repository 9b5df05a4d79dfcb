//! Order total policy
//!
//! Pure derivation of an [`OrderSummary`] from a list of cart lines. Totals
//! are computed with `Decimal` and converted back at the boundary so the tax
//! rounding is exact. Rounding strategy for the tax is half away from zero.

use crate::config::PricingConfig;
use rust_decimal::prelude::*;
use shared::models::{CartLineItem, OrderSummary};

/// Compute the priced summary for a set of cart lines.
///
/// Pure function of its inputs; callers re-derive it on every cart
/// mutation rather than caching. An empty cart still carries the flat
/// delivery fee (total 50 at defaults), but checkout refuses an empty
/// cart so that summary is display-only.
pub fn compute_summary(items: &[CartLineItem], pricing: &PricingConfig) -> OrderSummary {
    let subtotal: i64 = items.iter().map(CartLineItem::line_total).sum();

    let delivery_fee = if subtotal > pricing.free_delivery_threshold {
        0
    } else {
        pricing.delivery_fee
    };

    let tax = (Decimal::from(subtotal) * Decimal::from(pricing.tax_rate_percent)
        / Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_else(|| {
            tracing::error!(subtotal, "tax overflowed i64, defaulting to zero");
            0
        });

    OrderSummary {
        subtotal,
        delivery_fee,
        tax,
        total: subtotal + delivery_fee + tax,
    }
}

/// How much more must be added to reach free delivery.
///
/// Returns `None` once the subtotal qualifies. Used for the
/// "add ₹N more for free delivery" nudge under the cart total.
pub fn free_delivery_gap(subtotal: i64, pricing: &PricingConfig) -> Option<i64> {
    if subtotal > pricing.free_delivery_threshold {
        None
    } else {
        Some(pricing.free_delivery_threshold - subtotal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, price: i64, quantity: u32) -> CartLineItem {
        CartLineItem {
            id: id.to_string(),
            name: id.to_string(),
            price,
            quantity,
            is_veg: true,
            image: "/placeholder.svg".to_string(),
        }
    }

    #[test]
    fn test_below_threshold_pays_delivery() {
        // 200 x 2 => subtotal 400, fee 50, tax round(400*0.18)=72, total 522
        let summary = compute_summary(&[line("a", 200, 2)], &PricingConfig::default());
        assert_eq!(summary.subtotal, 400);
        assert_eq!(summary.delivery_fee, 50);
        assert_eq!(summary.tax, 72);
        assert_eq!(summary.total, 522);
    }

    #[test]
    fn test_above_threshold_delivery_is_free() {
        // 300 x 2 => subtotal 600, fee 0, tax 108, total 708
        let summary = compute_summary(&[line("a", 300, 2)], &PricingConfig::default());
        assert_eq!(summary.subtotal, 600);
        assert_eq!(summary.delivery_fee, 0);
        assert_eq!(summary.tax, 108);
        assert_eq!(summary.total, 708);
    }

    #[test]
    fn test_exactly_at_threshold_still_pays_delivery() {
        // Free delivery requires subtotal strictly greater than the threshold
        let summary = compute_summary(&[line("a", 500, 1)], &PricingConfig::default());
        assert_eq!(summary.delivery_fee, 50);
    }

    #[test]
    fn test_empty_cart_summary() {
        let summary = compute_summary(&[], &PricingConfig::default());
        assert_eq!(summary.subtotal, 0);
        assert_eq!(summary.delivery_fee, 50);
        assert_eq!(summary.tax, 0);
        assert_eq!(summary.total, 50);
    }

    #[test]
    fn test_tax_rounds_half_away_from_zero() {
        // subtotal 125 => 125 * 0.18 = 22.5, rounds to 23
        let summary = compute_summary(&[line("a", 125, 1)], &PricingConfig::default());
        assert_eq!(summary.tax, 23);

        // subtotal 130 => 23.4, rounds to 23
        let summary = compute_summary(&[line("a", 130, 1)], &PricingConfig::default());
        assert_eq!(summary.tax, 23);
    }

    #[test]
    fn test_summary_is_pure() {
        let items = vec![line("a", 120, 3), line("b", 450, 1)];
        let pricing = PricingConfig::default();
        assert_eq!(
            compute_summary(&items, &pricing),
            compute_summary(&items, &pricing)
        );
    }

    #[test]
    fn test_free_delivery_gap() {
        let pricing = PricingConfig::default();
        assert_eq!(free_delivery_gap(400, &pricing), Some(100));
        // At exactly the threshold delivery is still charged
        assert_eq!(free_delivery_gap(500, &pricing), Some(0));
        assert_eq!(free_delivery_gap(501, &pricing), None);
    }
}

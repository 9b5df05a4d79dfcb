//! Environment-driven configuration

use std::time::Duration;

/// Pricing constants used by the order total policy.
///
/// Amounts are whole currency units; the tax rate is an integer percentage
/// so it survives env parsing without float drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingConfig {
    /// Subtotal above which delivery is free
    pub free_delivery_threshold: i64,
    /// Flat delivery fee below the threshold
    pub delivery_fee: i64,
    /// GST percentage applied to the subtotal
    pub tax_rate_percent: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            free_delivery_threshold: 500,
            delivery_fee: 50,
            tax_rate_percent: 18,
        }
    }
}

/// Storefront configuration.
///
/// `Default` yields the built-in values; only `from_env` consults the
/// environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub pricing: PricingConfig,
    /// Simulated latency for form submissions (contact, reservation, login)
    pub form_submit_delay_ms: u64,
    /// Simulated latency for checkout payment processing
    pub payment_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            pricing: PricingConfig {
                free_delivery_threshold: env_parse("FREE_DELIVERY_THRESHOLD", 500),
                delivery_fee: env_parse("DELIVERY_FEE", 50),
                tax_rate_percent: env_parse("TAX_RATE_PERCENT", 18),
            },
            form_submit_delay_ms: env_parse("FORM_SUBMIT_DELAY_MS", 2000),
            payment_delay_ms: env_parse("PAYMENT_DELAY_MS", 3000),
        }
    }

    pub fn form_submit_delay(&self) -> Duration {
        Duration::from_millis(self.form_submit_delay_ms)
    }

    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pricing: PricingConfig::default(),
            form_submit_delay_ms: 2000,
            payment_delay_ms: 3000,
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

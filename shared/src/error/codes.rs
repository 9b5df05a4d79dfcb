//! Standardized error codes

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes grouped by domain.
///
/// The numeric ranges mirror the module layout: validation (1xxx),
/// authentication (2xxx), cart/order (4xxx), payment (5xxx), system (9xxx).
/// Codes serialize as their u16 value for cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ========== Validation (1xxx) ==========
    /// Generic validation failure
    ValidationFailed = 1001,
    /// A required field is empty or missing
    MissingField = 1002,
    /// Email address is malformed
    InvalidEmail = 1003,
    /// Value outside the accepted set (time slot, guest count)
    InvalidChoice = 1004,

    // ========== Authentication (2xxx) ==========
    /// Credentials rejected by the auth backend
    InvalidCredentials = 2001,

    // ========== Cart / Order (4xxx) ==========
    /// Referenced line item does not exist in the cart
    ItemNotFound = 4001,
    /// Checkout attempted with no line items
    EmptyCart = 4002,
    /// Quantity outside the accepted range
    InvalidQuantity = 4003,

    // ========== Payment (5xxx) ==========
    /// Payment gateway reported a failure
    PaymentFailed = 5001,

    // ========== System (9xxx) ==========
    /// Internal error
    InternalError = 9001,
}

impl ErrorCode {
    /// Numeric code
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message
    pub fn message(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "Validation failed",
            Self::MissingField => "Required field is missing",
            Self::InvalidEmail => "Please enter a valid email address",
            Self::InvalidChoice => "Value is not one of the accepted options",
            Self::InvalidCredentials => "Invalid credentials",
            Self::ItemNotFound => "Item not found in cart",
            Self::EmptyCart => "Cart is empty",
            Self::InvalidQuantity => "Invalid quantity",
            Self::PaymentFailed => "Payment failed",
            Self::InternalError => "Internal error",
        }
    }

    /// Domain this code belongs to
    pub fn category(&self) -> &'static str {
        match self.code() {
            1000..=1999 => "validation",
            2000..=2999 => "auth",
            4000..=4999 => "order",
            5000..=5999 => "payment",
            _ => "system",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code.code()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Error returned when a numeric code does not map to a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1001 => Ok(Self::ValidationFailed),
            1002 => Ok(Self::MissingField),
            1003 => Ok(Self::InvalidEmail),
            1004 => Ok(Self::InvalidChoice),
            2001 => Ok(Self::InvalidCredentials),
            4001 => Ok(Self::ItemNotFound),
            4002 => Ok(Self::EmptyCart),
            4003 => Ok(Self::InvalidQuantity),
            5001 => Ok(Self::PaymentFailed),
            9001 => Ok(Self::InternalError),
            other => Err(InvalidErrorCode(other)),
        }
    }
}

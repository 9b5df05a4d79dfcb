//! Reservation form payload

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Captured reservation form fields.
///
/// `date` stays `None` until the guest picks one; the form layer treats a
/// missing date as a required-field failure. Membership of `time` and
/// `guests` in the offered slots is also checked by the form layer, which
/// owns the slot tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct ReservationRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    pub date: Option<NaiveDate>,
    #[validate(length(min = 1, message = "time is required"))]
    pub time: String,
    #[validate(length(min = 1, message = "guests is required"))]
    pub guests: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub special_requests: String,
}

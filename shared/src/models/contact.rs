//! Contact form payload

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Captured contact form fields.
///
/// `phone` is optional on the form; everything else is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct ContactMessage {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[validate(length(min = 1, message = "subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}

//! Footer newsletter signup, a single email field

use super::{FormPayload, FormSession};
use crate::notify::Notification;
use serde::{Deserialize, Serialize};
use shared::{AppError, AppResult, util};

pub type NewsletterForm = FormSession<NewsletterSignup>;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewsletterSignup {
    pub email: String,
}

impl FormPayload for NewsletterSignup {
    fn form_name() -> &'static str {
        "newsletter"
    }

    fn validate(&self) -> AppResult<()> {
        if self.email.is_empty() {
            return Err(AppError::missing_field("email"));
        }
        if !util::looks_like_email(&self.email) {
            return Err(AppError::invalid_email("email"));
        }
        Ok(())
    }

    fn success_notification(&self) -> Notification {
        Notification::success(
            "Subscribed!",
            "Thank you for subscribing to our newsletter.",
        )
    }
}

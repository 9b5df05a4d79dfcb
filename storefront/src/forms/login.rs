//! Login form
//!
//! Credentials are checked for shape only; the demo gateway accepts any
//! well-formed pair, mirroring a mock auth backend.

use super::{FormPayload, FormSession};
use crate::notify::Notification;
use serde::{Deserialize, Serialize};
use shared::{AppError, AppResult, util};

pub type LoginForm = FormSession<LoginCredentials>;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl FormPayload for LoginCredentials {
    fn form_name() -> &'static str {
        "login"
    }

    fn validate(&self) -> AppResult<()> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(AppError::validation("Please fill in all fields"));
        }
        if !util::looks_like_email(&self.email) {
            return Err(AppError::invalid_email("email"));
        }
        Ok(())
    }

    fn success_notification(&self) -> Notification {
        Notification::success(
            "Welcome Back!",
            format!(
                "Successfully logged in as {}. Redirecting to home...",
                self.email
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::MemoryNotifier;
    use crate::submit::{RejectingGateway, SimulatedGateway};
    use shared::ErrorCode;

    #[tokio::test]
    async fn test_blank_fields_are_rejected() {
        let mut form = LoginForm::new();
        form.update(|c| c.email = "guest@example.com".to_string());

        let err = form
            .submit(&SimulatedGateway::instant(), &MemoryNotifier::new())
            .await
            .expect_err("blocked");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn test_malformed_email_is_rejected() {
        let mut form = LoginForm::new();
        form.update(|c| {
            c.email = "guest-at-example".to_string();
            c.password = "hunter2".to_string();
        });

        let err = form
            .submit(&SimulatedGateway::instant(), &MemoryNotifier::new())
            .await
            .expect_err("blocked");
        assert_eq!(err.code, ErrorCode::InvalidEmail);
    }

    #[tokio::test]
    async fn test_successful_login_greets_by_email() {
        let mut form = LoginForm::new();
        form.update(|c| {
            c.email = "guest@example.com".to_string();
            c.password = "hunter2".to_string();
        });

        let notifier = MemoryNotifier::new();
        form.submit(&SimulatedGateway::instant(), &notifier)
            .await
            .expect("accepted");

        assert_eq!(form.fields(), &LoginCredentials::default());
        let shown = notifier.shown();
        assert_eq!(shown.len(), 1);
        assert!(shown[0].body.contains("guest@example.com"));
    }

    #[tokio::test]
    async fn test_rejected_login_keeps_credentials_for_retry() {
        let mut form = LoginForm::new();
        form.update(|c| {
            c.email = "guest@example.com".to_string();
            c.password = "hunter2".to_string();
        });

        let gateway = RejectingGateway::new(AppError::invalid_credentials());
        let err = form
            .submit(&gateway, &MemoryNotifier::new())
            .await
            .expect_err("rejected");
        assert_eq!(err.code, ErrorCode::InvalidCredentials);
        assert_eq!(form.fields().email, "guest@example.com");
        assert!(form.error().is_some());
    }
}

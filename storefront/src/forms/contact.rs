//! Contact form

use super::{FormPayload, FormSession, map_validation_errors};
use crate::notify::Notification;
use shared::AppResult;
use shared::models::ContactMessage;
use validator::Validate;

pub type ContactForm = FormSession<ContactMessage>;

impl FormPayload for ContactMessage {
    fn form_name() -> &'static str {
        "contact"
    }

    fn validate(&self) -> AppResult<()> {
        Validate::validate(self).map_err(map_validation_errors)
    }

    fn success_notification(&self) -> Notification {
        Notification::success(
            "Message Sent!",
            "Message sent successfully! We will get back to you soon.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::MemoryNotifier;
    use crate::submit::{RejectingGateway, SimulatedGateway};
    use shared::ErrorCode;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.update(|m| {
            m.name = "Priya".to_string();
            m.email = "priya@example.com".to_string();
            m.subject = "Catering".to_string();
            m.message = "Do you cater for 30 guests?".to_string();
        });
        form
    }

    #[tokio::test]
    async fn test_blank_message_is_rejected_before_gateway() {
        // A rejecting gateway would surface InvalidCredentials; seeing the
        // required-field error instead proves the gateway was never called.
        let mut form = filled();
        form.update(|m| m.message.clear());

        let gateway = RejectingGateway::new(shared::AppError::invalid_credentials());
        let err = form
            .submit(&gateway, &MemoryNotifier::new())
            .await
            .expect_err("blocked");
        assert_eq!(err.code, ErrorCode::MissingField);
    }

    #[tokio::test]
    async fn test_bad_email_is_rejected() {
        let mut form = filled();
        form.update(|m| m.email = "not-an-email".to_string());

        let err = form
            .submit(&SimulatedGateway::instant(), &MemoryNotifier::new())
            .await
            .expect_err("blocked");
        assert_eq!(err.code, ErrorCode::InvalidEmail);
    }

    #[tokio::test]
    async fn test_phone_is_optional() {
        let mut form = filled();
        let notifier = MemoryNotifier::new();
        form.submit(&SimulatedGateway::instant(), &notifier)
            .await
            .expect("accepted");

        assert_eq!(form.fields(), &ContactMessage::default());
        let shown = notifier.shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "Message Sent!");
    }
}

//! Generic controlled-form session
//!
//! One [`FormSession`] instance backs each form on the site (contact,
//! reservation, login, newsletter). The session is a small state machine:
//! Editing accepts field updates; `submit` moves it to Submitting for the
//! duration of the gateway call and back to Editing afterwards, resetting
//! the fields on success or retaining them with the error on failure.
//!
//! Dropping the in-flight `submit` future abandons the pending call and
//! returns the session to Editing without any other mutation.
//!
//! `submit` holds the exclusive borrow of the session for the duration of
//! the call, so re-entry while Submitting cannot happen; the state enum
//! exists for the cancellation path and for rendering the in-flight UI.

pub mod contact;
pub mod login;
pub mod newsletter;
pub mod reservation;

use crate::notify::{Notification, Notifier};
use crate::submit::{SubmissionPort, SubmitReceipt};
use shared::{AppError, AppResult};

/// Per-form payload behavior: defaults, the required-field check, and the
/// confirmation shown after a successful submission.
pub trait FormPayload: Clone + Default + Send + 'static {
    /// Form name used in logs
    fn form_name() -> &'static str;

    /// Client-side required-field check, run before the gateway is touched
    fn validate(&self) -> AppResult<()>;

    /// Transient confirmation for a successful submission, built from the
    /// submitted values before the fields are reset
    fn success_notification(&self) -> Notification;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Editing,
    Submitting,
}

/// Controlled-form state: current field values, the submitting flag, and
/// the last error, if any.
#[derive(Debug, Default)]
pub struct FormSession<P: FormPayload> {
    fields: P,
    state: SessionState,
    error: Option<AppError>,
}

impl<P: FormPayload> FormSession<P> {
    pub fn new() -> Self {
        Self {
            fields: P::default(),
            state: SessionState::Editing,
            error: None,
        }
    }

    /// Current field values
    pub fn fields(&self) -> &P {
        &self.fields
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SessionState::Submitting
    }

    /// Error from the last rejected update or failed submission
    pub fn error(&self) -> Option<&AppError> {
        self.error.as_ref()
    }

    /// Edit the fields, clearing any prior error. An in-flight `submit`
    /// holds the exclusive borrow, so edits only happen between
    /// submissions.
    pub fn update(&mut self, edit: impl FnOnce(&mut P)) {
        self.error = None;
        edit(&mut self.fields);
    }

    /// Validate and submit the current fields through the gateway.
    ///
    /// Validation failures block the submission before the gateway is
    /// called and are retained on the session. On gateway success the
    /// fields reset to defaults and the confirmation is shown; on failure
    /// the entered values are kept for correction.
    pub async fn submit<G>(
        &mut self,
        gateway: &G,
        notifier: &dyn Notifier,
    ) -> AppResult<SubmitReceipt>
    where
        G: SubmissionPort<P> + ?Sized,
    {
        if let Err(err) = self.fields.validate() {
            tracing::debug!(form = P::form_name(), code = %err.code, "submission blocked: {}", err);
            self.error = Some(err.clone());
            return Err(err);
        }

        let notification = self.fields.success_notification();
        let call = gateway.submit(self.fields.clone());
        let guard = SubmitGuard::engage(self);
        match call.await {
            Ok(receipt) => {
                guard.session.fields = P::default();
                guard.session.error = None;
                drop(guard);
                notifier.notify(notification);
                tracing::info!(
                    form = P::form_name(),
                    confirmation_id = %receipt.confirmation_id,
                    "form submitted"
                );
                Ok(receipt)
            }
            Err(err) => {
                guard.session.error = Some(err.clone());
                drop(guard);
                tracing::warn!(form = P::form_name(), code = %err.code, "submission failed: {}", err);
                Err(err)
            }
        }
    }
}

/// Holds the session in Submitting for the duration of the gateway call;
/// restores Editing on drop, including when the future is cancelled.
struct SubmitGuard<'a, P: FormPayload> {
    session: &'a mut FormSession<P>,
}

impl<'a, P: FormPayload> SubmitGuard<'a, P> {
    fn engage(session: &'a mut FormSession<P>) -> Self {
        session.state = SessionState::Submitting;
        Self { session }
    }
}

impl<P: FormPayload> Drop for SubmitGuard<'_, P> {
    fn drop(&mut self) {
        self.session.state = SessionState::Editing;
    }
}

/// Map the first derive-level validation failure to an [`AppError`],
/// picking the error code from the kind of check that failed.
pub(crate) fn map_validation_errors(errors: validator::ValidationErrors) -> AppError {
    for (field, field_errors) in errors.field_errors() {
        if let Some(error) = field_errors.first() {
            return match &*error.code {
                "email" => AppError::invalid_email(&field),
                "length" => AppError::missing_field(&field),
                _ => {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field));
                    AppError::validation(message).with_detail("field", field.to_string())
                }
            };
        }
    }
    AppError::validation("Validation failed")
}

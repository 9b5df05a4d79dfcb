//! Table reservation form
//!
//! On top of the derive-level field checks this form verifies that a date
//! was picked and that the chosen time and party size come from the
//! offered slot tables.

use super::{FormPayload, FormSession, map_validation_errors};
use crate::catalog::{GUEST_OPTIONS, TIME_SLOTS};
use crate::notify::Notification;
use shared::models::ReservationRequest;
use shared::{AppError, AppResult};
use validator::Validate;

pub type ReservationForm = FormSession<ReservationRequest>;

impl FormPayload for ReservationRequest {
    fn form_name() -> &'static str {
        "reservation"
    }

    fn validate(&self) -> AppResult<()> {
        Validate::validate(self).map_err(map_validation_errors)?;
        if self.date.is_none() {
            return Err(AppError::missing_field("date"));
        }
        if !TIME_SLOTS.contains(&self.time.as_str()) {
            return Err(AppError::invalid_choice(
                "time",
                format!("{} is not an offered time slot", self.time),
            ));
        }
        if !GUEST_OPTIONS.contains(&self.guests.as_str()) {
            return Err(AppError::invalid_choice(
                "guests",
                format!("{} is not an offered party size", self.guests),
            ));
        }
        Ok(())
    }

    fn success_notification(&self) -> Notification {
        Notification::success(
            "Reservation Confirmed!",
            "Reservation confirmed! We will contact you shortly.",
        )
    }
}

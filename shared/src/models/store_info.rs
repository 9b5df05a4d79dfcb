//! Static restaurant information

use serde::{Deserialize, Serialize};

/// Opening hours for a span of weekdays
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpeningHours {
    /// Display range, e.g. "Monday - Thursday"
    pub days: String,
    /// Display hours, e.g. "11:00 AM - 10:00 PM"
    pub hours: String,
}

/// Restaurant contact card shown across the site
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreInfo {
    pub name: String,
    pub phone: String,
    pub reservation_email: String,
    pub opening_hours: Vec<OpeningHours>,
}

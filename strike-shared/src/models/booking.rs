use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Wire format of the combined booking timestamp, e.g. `2024-12-25T18:00`.
pub const WHEN_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Payload sent to `POST /booking`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingRequest {
    pub when: String,
    pub people: u32,
    pub lanes: u32,
    pub shoes: Vec<String>,
}

impl BookingRequest {
    pub fn new(date: NaiveDate, time: NaiveTime, people: u32, lanes: u32, shoes: Vec<String>) -> Self {
        Self {
            when: format_when(date, time),
            people,
            lanes,
            shoes,
        }
    }
}

/// Combine the date and time fields into the ISO-8601 string the API expects.
pub fn format_when(date: NaiveDate, time: NaiveTime) -> String {
    NaiveDateTime::new(date, time).format(WHEN_FORMAT).to_string()
}

/// Success body of `POST /booking`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking_details: ConfirmationRecord,
}

/// The result of a successful booking, as shown on the confirmation screen.
///
/// Serialized in camelCase both on the wire and in session storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationRecord {
    pub booking_id: String,
    pub when: String,
    pub people: u32,
    pub lanes: u32,
    pub shoes: Vec<String>,
    pub price: u32,
}

impl ConfirmationRecord {
    /// `when` with the date/time separator shown as a space.
    pub fn display_when(&self) -> String {
        self.when.replacen('T', " ", 1)
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One bookable start time produced by the engine. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    /// Local calendar date of the slot, `YYYY-MM-DD` in the store's zone.
    pub day_key: String,

    pub start: DateTime<Utc>,

    /// Always `start + service duration`.
    pub end: DateTime<Utc>,

    /// Local `HH:MM` of `start` in the store's zone, for direct display.
    pub display_label: String,
}

/// One calendar day in the availability horizon. Present even when the store
/// is closed that day, so the caller can render the full horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityDay {
    pub day_key: String,
    pub date: NaiveDate,

    /// Abbreviated weekday name, e.g. `"Mon"`.
    pub weekday_label: String,

    /// Day of month, 1..=31.
    pub day_number: u32,

    /// Long-form label, e.g. `"Monday, March 9"`.
    pub full_label: String,

    pub has_slots: bool,
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Scheduling policy of one store.
///
/// Loaded once per availability computation and treated as immutable for the
/// duration of the call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub id: Uuid,

    /// IANA time zone identifier, e.g. `"America/New_York"`.
    pub timezone: String,

    /// Store-wide default stride between candidate start times, in minutes.
    /// When absent the service duration is used instead; either way the
    /// effective stride is clamped to at least 5 minutes.
    pub slot_step_minutes: Option<i64>,

    /// Padding applied before a service's occupied interval when comparing
    /// against existing bookings. Not reflected in a slot's start/end.
    pub buffer_before_minutes: i64,

    /// Padding applied after a service's occupied interval.
    pub buffer_after_minutes: i64,
}

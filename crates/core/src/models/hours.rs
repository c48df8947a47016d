use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opening hours for one weekday of one store.
///
/// A store has at most one row per weekday; weekdays without a row are
/// treated as closed. `day_of_week` uses the 0=Sunday..6=Saturday convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyHours {
    pub store_id: Uuid,

    /// 0 = Sunday .. 6 = Saturday.
    pub day_of_week: u8,

    pub is_closed: bool,

    /// Local wall-clock opening time. `None` means the day is unusable even
    /// if `is_closed` is false.
    pub open_time: Option<NaiveTime>,

    /// Local wall-clock closing time.
    pub close_time: Option<NaiveTime>,
}

impl WeeklyHours {
    /// Returns the open/close bounds when the day is actually bookable:
    /// not flagged closed, and both bounds present.
    pub fn open_window(&self) -> Option<(NaiveTime, NaiveTime)> {
        if self.is_closed {
            return None;
        }
        match (self.open_time, self.close_time) {
            (Some(open), Some(close)) => Some((open, close)),
            _ => None,
        }
    }
}

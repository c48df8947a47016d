use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable offering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDef {
    pub id: Uuid,
    pub name: String,

    /// Length of one appointment, in minutes. Must be positive.
    pub duration_minutes: i64,
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A person or resource that performs services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderDef {
    pub id: Uuid,
    pub name: String,

    /// Number of bookings the provider can hold simultaneously. Must be at
    /// least 1; a capacity of 2 means two customers may be served in
    /// parallel.
    pub capacity: i64,
}

pub mod availability;
pub mod booking;
pub mod hours;
pub mod provider;
pub mod service;
pub mod store;

pub use availability::{AvailabilityDay, AvailabilitySlot};
pub use booking::{BookingRecord, BookingStatus};
pub use hours::WeeklyHours;
pub use provider::ProviderDef;
pub use service::ServiceDef;
pub use store::StoreConfig;

use chrono::{DateTime, NaiveTime, Utc};
use eyre::{Result, eyre};
use serde::{Deserialize, Serialize};
use slotwise_core::models::{
    BookingRecord, BookingStatus, ProviderDef, ServiceDef, StoreConfig, WeeklyHours,
};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbStoreConfig {
    pub id: Uuid,
    pub timezone: String,
    pub slot_step_minutes: Option<i64>,
    pub buffer_before_minutes: i64,
    pub buffer_after_minutes: i64,
    pub created_at: DateTime<Utc>,
}

impl From<DbStoreConfig> for StoreConfig {
    fn from(row: DbStoreConfig) -> Self {
        StoreConfig {
            id: row.id,
            timezone: row.timezone,
            slot_step_minutes: row.slot_step_minutes,
            buffer_before_minutes: row.buffer_before_minutes,
            buffer_after_minutes: row.buffer_after_minutes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWeeklyHours {
    pub store_id: Uuid,
    pub day_of_week: i16,
    pub is_closed: bool,
    pub open_time: Option<NaiveTime>,
    pub close_time: Option<NaiveTime>,
}

impl From<DbWeeklyHours> for WeeklyHours {
    fn from(row: DbWeeklyHours) -> Self {
        WeeklyHours {
            store_id: row.store_id,
            day_of_week: row.day_of_week as u8,
            is_closed: row.is_closed,
            open_time: row.open_time,
            close_time: row.close_time,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbService {
    pub id: Uuid,
    pub store_id: Uuid,
    pub name: String,
    pub duration_minutes: i64,
    pub created_at: DateTime<Utc>,
}

impl From<DbService> for ServiceDef {
    fn from(row: DbService) -> Self {
        ServiceDef {
            id: row.id,
            name: row.name,
            duration_minutes: row.duration_minutes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbProvider {
    pub id: Uuid,
    pub store_id: Uuid,
    pub name: String,
    pub capacity: i64,
    pub created_at: DateTime<Utc>,
}

impl From<DbProvider> for ProviderDef {
    fn from(row: DbProvider) -> Self {
        ProviderDef {
            id: row.id,
            name: row.name,
            capacity: row.capacity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub store_id: Uuid,
    pub provider_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl DbBooking {
    /// Convert the row into a domain record, rejecting statuses the schema
    /// constraint should have prevented.
    pub fn into_record(self) -> Result<BookingRecord> {
        let status = match self.status.as_str() {
            "pending" => BookingStatus::Pending,
            "confirmed" => BookingStatus::Confirmed,
            "completed" => BookingStatus::Completed,
            "cancelled" => BookingStatus::Cancelled,
            "no_show" => BookingStatus::NoShow,
            other => return Err(eyre!("Unknown booking status: {other}")),
        };

        Ok(BookingRecord {
            id: self.id,
            start: self.start_time,
            end: self.end_time,
            status,
        })
    }
}

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration as StdDuration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveTime, Utc};
use slotwise_core::errors::LedgerError;
use slotwise_core::ledger::BookingLedger;
use slotwise_core::models::{
    BookingRecord, BookingStatus, ProviderDef, ServiceDef, StoreConfig, WeeklyHours,
};
use slotwise_engine::{AvailabilityEngine, AvailabilityInputs, EngineConfig};
use uuid::Uuid;

pub fn utc(timestamp: &str) -> DateTime<Utc> {
    timestamp.parse().expect("valid RFC 3339 timestamp")
}

pub fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid wall-clock time")
}

pub fn store(timezone: &str, slot_step_minutes: Option<i64>) -> StoreConfig {
    StoreConfig {
        id: Uuid::new_v4(),
        timezone: timezone.to_string(),
        slot_step_minutes,
        buffer_before_minutes: 0,
        buffer_after_minutes: 0,
    }
}

pub fn store_with_buffers(
    timezone: &str,
    slot_step_minutes: Option<i64>,
    buffer_before_minutes: i64,
    buffer_after_minutes: i64,
) -> StoreConfig {
    StoreConfig {
        buffer_before_minutes,
        buffer_after_minutes,
        ..store(timezone, slot_step_minutes)
    }
}

pub fn service(duration_minutes: i64) -> ServiceDef {
    ServiceDef {
        id: Uuid::new_v4(),
        name: "Haircut".to_string(),
        duration_minutes,
    }
}

pub fn provider(capacity: i64) -> ProviderDef {
    ProviderDef {
        id: Uuid::new_v4(),
        name: "Alex".to_string(),
        capacity,
    }
}

pub fn open_day(store: &StoreConfig, day_of_week: u8, open: NaiveTime, close: NaiveTime) -> WeeklyHours {
    WeeklyHours {
        store_id: store.id,
        day_of_week,
        is_closed: false,
        open_time: Some(open),
        close_time: Some(close),
    }
}

pub fn closed_day(store: &StoreConfig, day_of_week: u8) -> WeeklyHours {
    WeeklyHours {
        store_id: store.id,
        day_of_week,
        is_closed: true,
        open_time: None,
        close_time: None,
    }
}

pub fn booking(start: &str, end: &str, status: BookingStatus) -> BookingRecord {
    BookingRecord {
        id: Uuid::new_v4(),
        start: utc(start),
        end: utc(end),
        status,
    }
}

pub fn inputs(
    store: StoreConfig,
    hours: Vec<WeeklyHours>,
    service: ServiceDef,
    provider: ProviderDef,
) -> AvailabilityInputs {
    AvailabilityInputs {
        store: Some(store),
        hours,
        service: Some(service),
        provider: Some(provider),
    }
}

// Ledger fakes

/// Always answers with the same bookings.
pub struct StaticLedger(pub Vec<BookingRecord>);

#[async_trait]
impl BookingLedger for StaticLedger {
    async fn bookings_in_range(
        &self,
        _store_id: Uuid,
        _provider_id: Uuid,
        _from: DateTime<Utc>,
        _to: DateTime<Utc>,
    ) -> Result<Vec<BookingRecord>, LedgerError> {
        Ok(self.0.clone())
    }
}

/// Simulates a row-level-security style authorization failure.
pub struct DenyLedger;

#[async_trait]
impl BookingLedger for DenyLedger {
    async fn bookings_in_range(
        &self,
        _store_id: Uuid,
        _provider_id: Uuid,
        _from: DateTime<Utc>,
        _to: DateTime<Utc>,
    ) -> Result<Vec<BookingRecord>, LedgerError> {
        Err(LedgerError::PermissionDenied(
            "permission denied for table bookings".to_string(),
        ))
    }
}

/// Simulates an infrastructure failure.
pub struct FailLedger;

#[async_trait]
impl BookingLedger for FailLedger {
    async fn bookings_in_range(
        &self,
        _store_id: Uuid,
        _provider_id: Uuid,
        _from: DateTime<Utc>,
        _to: DateTime<Utc>,
    ) -> Result<Vec<BookingRecord>, LedgerError> {
        Err(LedgerError::Unavailable(eyre::eyre!("connection refused")))
    }
}

/// Answers after a delay, for deadline and cancellation tests.
pub struct SlowLedger {
    pub delay: StdDuration,
    pub bookings: Vec<BookingRecord>,
}

#[async_trait]
impl BookingLedger for SlowLedger {
    async fn bookings_in_range(
        &self,
        _store_id: Uuid,
        _provider_id: Uuid,
        _from: DateTime<Utc>,
        _to: DateTime<Utc>,
    ) -> Result<Vec<BookingRecord>, LedgerError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.bookings.clone())
    }
}

pub fn engine_with(horizon_days: u32, ledger: Arc<dyn BookingLedger>) -> AvailabilityEngine {
    let config = EngineConfig {
        horizon_days,
        ledger_timeout: StdDuration::from_secs(5),
    };
    AvailabilityEngine::new(config, ledger)
}

//! Postgres implementation of the booking-ledger port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use slotwise_core::errors::LedgerError;
use slotwise_core::ledger::BookingLedger;
use slotwise_core::models::BookingRecord;
use tracing::debug;
use uuid::Uuid;

use crate::DbPool;
use crate::repositories::booking::get_bookings_in_range;

/// SQLSTATE for insufficient_privilege, raised e.g. when row-level security
/// denies the read.
const PERMISSION_DENIED_CODE: &str = "42501";

pub struct PgBookingLedger {
    pool: DbPool,
}

impl PgBookingLedger {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingLedger for PgBookingLedger {
    async fn bookings_in_range(
        &self,
        store_id: Uuid,
        provider_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<BookingRecord>, LedgerError> {
        let rows = get_bookings_in_range(&self.pool, store_id, provider_id, from, to)
            .await
            .map_err(classify_fetch_error)?;

        debug!(%provider_id, rows = rows.len(), "Fetched booking ledger window");

        rows.into_iter()
            .map(|row| row.into_record().map_err(LedgerError::Unavailable))
            .collect()
    }
}

/// Split ledger read failures into the recoverable permission class and
/// everything else.
fn classify_fetch_error(err: eyre::Report) -> LedgerError {
    let code = err
        .downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .and_then(|db| db.code().map(|c| c.into_owned()));

    match code.as_deref() {
        Some(PERMISSION_DENIED_CODE) => LedgerError::PermissionDenied(err.to_string()),
        _ => LedgerError::Unavailable(err),
    }
}

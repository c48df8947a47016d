//! Read-only port onto the external booking ledger.
//!
//! The engine never writes bookings; it only needs to know which existing
//! reservations occupy a provider inside the availability horizon. Concrete
//! implementations live elsewhere (`slotwise-db` provides the Postgres one),
//! so the engine stays testable against in-memory fakes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::LedgerError;
use crate::models::BookingRecord;

/// Query interface for a provider's existing bookings.
#[async_trait]
pub trait BookingLedger: Send + Sync {
    /// Fetch the bookings for `provider_id` at `store_id` whose `start` falls
    /// in the half-open range `[from, to)`, ordered ascending by `start`.
    ///
    /// All statuses are returned; the caller decides which ones occupy
    /// capacity. Implementations must surface authorization failures as
    /// [`LedgerError::PermissionDenied`] so callers can degrade gracefully
    /// instead of failing outright.
    async fn bookings_in_range(
        &self,
        store_id: Uuid,
        provider_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<BookingRecord>, LedgerError>;
}

/// What the engine learned about the provider's existing bookings.
///
/// A permission-denied ledger read is not fatal: availability is still
/// computed, just without exclusions, and the caller is warned. Modeling that
/// as a tagged value keeps the degraded path explicit instead of threading an
/// error through the slot computation.
#[derive(Debug, Clone)]
pub enum BusySnapshot {
    /// The ledger was readable; these are the bookings in the horizon.
    Known(Vec<BookingRecord>),

    /// The ledger denied access; proceed without filtering.
    Unknown,
}

impl BusySnapshot {
    /// The bookings to filter against. `Unknown` filters against nothing.
    pub fn bookings(&self) -> &[BookingRecord] {
        match self {
            BusySnapshot::Known(bookings) => bookings,
            BusySnapshot::Unknown => &[],
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, BusySnapshot::Unknown)
    }
}

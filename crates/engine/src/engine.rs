//! One-shot availability computation.
//!
//! [`AvailabilityEngine::compute`] is the whole algorithm: validate the
//! selection, fetch the provider's bookings for the horizon window, then walk
//! the horizon day by day generating and filtering candidate slots. Failures
//! never propagate past this boundary; they are folded into the returned
//! [`Availability`] so the caller decides how to present them.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Days, Duration, Utc};
use serde::Serialize;
use slotwise_core::errors::LedgerError;
use slotwise_core::ledger::{BookingLedger, BusySnapshot};
use slotwise_core::models::{
    AvailabilityDay, AvailabilitySlot, BookingRecord, ProviderDef, ServiceDef, StoreConfig,
    WeeklyHours,
};
use tokio::time::timeout;
use tracing::{debug, error, warn};

use crate::config::EngineConfig;
use crate::slots::{self, SchedulePlan};

/// Warning surfaced when the booking ledger denied the read and slots were
/// computed without exclusions.
pub const LEDGER_DEGRADED_WARNING: &str =
    "We cannot verify existing reservations in real time; your slot selection \
     will be confirmed manually.";

/// Generic user-facing message for fatal failures.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Availability could not be computed. Please try again.";

/// The caller's current selection. Until all three of store, service, and
/// provider are chosen there is nothing to compute, which is an idle state
/// rather than an error.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityInputs {
    pub store: Option<StoreConfig>,
    pub hours: Vec<WeeklyHours>,
    pub service: Option<ServiceDef>,
    pub provider: Option<ProviderDef>,
}

impl AvailabilityInputs {
    fn selection(&self) -> Option<(&StoreConfig, &ServiceDef, &ProviderDef)> {
        Some((
            self.store.as_ref()?,
            self.service.as_ref()?,
            self.provider.as_ref()?,
        ))
    }
}

/// Output of one availability computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Availability {
    /// Slots keyed by local day (`YYYY-MM-DD`), each day's sequence ascending
    /// by start. Days without slots have no entry.
    pub slots_by_day: BTreeMap<String, Vec<AvailabilitySlot>>,

    /// One entry per horizon day in chronological order, closed days
    /// included with `has_slots = false`.
    pub days: Vec<AvailabilityDay>,

    pub has_any_slot: bool,

    /// `None` on success. A warning in degraded mode, a generic message on
    /// fatal failure.
    pub error: Option<String>,
}

impl Availability {
    /// The "nothing selected yet" output: empty, and not an error.
    pub fn idle() -> Self {
        Self {
            slots_by_day: BTreeMap::new(),
            days: Vec::new(),
            has_any_slot: false,
            error: None,
        }
    }

    /// Empty output carrying a user-facing failure message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::idle()
        }
    }
}

/// The availability engine. Stateless between invocations: every `compute`
/// call re-reads the ledger and recomputes from scratch.
pub struct AvailabilityEngine {
    config: EngineConfig,
    ledger: Arc<dyn BookingLedger>,
}

impl AvailabilityEngine {
    pub fn new(config: EngineConfig, ledger: Arc<dyn BookingLedger>) -> Self {
        Self { config, ledger }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Computes bookable slots for each day in `[now, now + horizon)`.
    ///
    /// `now` is injected rather than read from the clock so tests can pin it.
    /// The result always comes back as a value: missing inputs yield the
    /// idle output, a permission-denied ledger read degrades to unfiltered
    /// slots with a warning, and any other failure yields an empty output
    /// with a generic message.
    pub async fn compute(&self, inputs: &AvailabilityInputs, now: DateTime<Utc>) -> Availability {
        let Some((store, service, provider)) = inputs.selection() else {
            return Availability::idle();
        };

        let plan = match SchedulePlan::try_new(store, service, provider) {
            Ok(plan) => plan,
            Err(err) => {
                error!(store_id = %store.id, error = %err, "Rejected availability computation");
                return Availability::failed(GENERIC_FAILURE_MESSAGE);
            }
        };

        let horizon_end = now + Duration::days(i64::from(self.config.horizon_days));
        let snapshot = match self.fetch_busy(&plan, now, horizon_end).await {
            Ok(snapshot) => snapshot,
            Err(_) => return Availability::failed(GENERIC_FAILURE_MESSAGE),
        };

        let mut availability = build_schedule(
            &plan,
            &inputs.hours,
            snapshot.bookings(),
            now,
            self.config.horizon_days,
        );

        if snapshot.is_unknown() {
            availability.error = Some(LEDGER_DEGRADED_WARNING.to_string());
        }

        debug!(
            store_id = %plan.store_id,
            provider_id = %plan.provider_id,
            days = availability.days.len(),
            has_any_slot = availability.has_any_slot,
            degraded = snapshot.is_unknown(),
            "Computed availability"
        );

        availability
    }

    /// Reads the provider's bookings for the horizon window, bounded by the
    /// configured deadline.
    ///
    /// Permission denial degrades to an `Unknown` snapshot; a timeout or any
    /// other failure is fatal for the invocation.
    async fn fetch_busy(
        &self,
        plan: &SchedulePlan,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<BusySnapshot, LedgerError> {
        let fetch = self
            .ledger
            .bookings_in_range(plan.store_id, plan.provider_id, from, to);

        match timeout(self.config.ledger_timeout, fetch).await {
            Ok(Ok(bookings)) => Ok(BusySnapshot::Known(bookings)),
            Ok(Err(err)) if err.is_permission_denied() => {
                warn!(
                    provider_id = %plan.provider_id,
                    error = %err,
                    "Booking ledger denied access; computing availability without exclusions"
                );
                Ok(BusySnapshot::Unknown)
            }
            Ok(Err(err)) => {
                error!(provider_id = %plan.provider_id, error = %err, "Booking ledger read failed");
                Err(err)
            }
            Err(_) => {
                let err = LedgerError::Timeout(self.config.ledger_timeout);
                error!(provider_id = %plan.provider_id, error = %err, "Booking ledger read timed out");
                Err(err)
            }
        }
    }
}

/// Walk the horizon in the store's local calendar, generating slots for each
/// open day.
fn build_schedule(
    plan: &SchedulePlan,
    hours: &[WeeklyHours],
    bookings: &[BookingRecord],
    now: DateTime<Utc>,
    horizon_days: u32,
) -> Availability {
    let today = now.with_timezone(&plan.timezone).date_naive();

    let mut slots_by_day = BTreeMap::new();
    let mut days = Vec::with_capacity(horizon_days as usize);
    let mut has_any_slot = false;

    for offset in 0..horizon_days {
        let date = today + Days::new(u64::from(offset));
        let weekday = slots::weekday_index(date);

        let day_slots = match slots::hours_for_weekday(hours, weekday)
            .and_then(WeeklyHours::open_window)
        {
            Some((open, close)) => slots::slots_for_day(plan, date, open, close, now, bookings),
            // Closed, no hours row, or a null bound: the day still appears in
            // `days`, just without slots.
            None => Vec::new(),
        };

        let has_slots = !day_slots.is_empty();
        days.push(slots::day_metadata(date, has_slots));
        if has_slots {
            has_any_slot = true;
            slots_by_day.insert(slots::day_key(date), day_slots);
        }
    }

    Availability {
        slots_by_day,
        days,
        has_any_slot,
        error: None,
    }
}

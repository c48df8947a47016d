//! Pure per-day slot generation.
//!
//! Everything here is synchronous and deterministic: given a validated
//! [`SchedulePlan`], one local calendar date with its open/close wall-clock
//! bounds, the current instant, and a snapshot of existing bookings, produce
//! the bookable slots for that day.
//!
//! ## Slot generation
//!
//! A cursor starts at the day's opening instant and advances by the effective
//! slot step. Each cursor position is a candidate start time:
//!
//! 1. If the service cannot finish before closing, the day is done. No later
//!    cursor position can fit either, so the loop breaks rather than skips.
//! 2. Candidates at or before "now" are never offered.
//! 3. The candidate interval, expanded by the store's buffers, is compared
//!    against every busy booking, itself expanded by the same buffers. The
//!    candidate is admitted while fewer than `capacity` bookings overlap it.
//!
//! The cursor advances by the step even when a candidate is rejected: the
//! step denominates offer frequency, not end-to-next-start spacing, so
//! successive offered slots may overlap each other. That is intentional: a
//! provider with capacity above one serves customers in parallel.

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use slotwise_core::errors::{SchedulingError, SchedulingResult};
use slotwise_core::models::{
    AvailabilityDay, AvailabilitySlot, BookingRecord, ProviderDef, ServiceDef, StoreConfig,
    WeeklyHours,
};
use uuid::Uuid;

/// Minimum stride between candidate start times, in minutes.
pub const MIN_SLOT_STEP_MINUTES: i64 = 5;

/// Validated, zone-resolved scheduling parameters for one computation.
///
/// Construction rejects invalid configuration up front so the per-day loop
/// never has to re-check it.
#[derive(Debug, Clone)]
pub struct SchedulePlan {
    pub store_id: Uuid,
    pub provider_id: Uuid,
    pub timezone: Tz,

    /// Stride between candidate start times. Independent of, and possibly
    /// different from, the service duration.
    pub step: Duration,

    /// Service duration; every slot's end is `start + duration`.
    pub duration: Duration,

    pub buffer_before: Duration,
    pub buffer_after: Duration,

    /// Simultaneous bookings the provider can hold.
    pub capacity: usize,
}

impl SchedulePlan {
    /// Validates the selected store/service/provider into a plan.
    ///
    /// # Errors
    ///
    /// Returns `SchedulingError::Configuration` when the service duration is
    /// not positive, the capacity is below 1, a buffer is negative, or the
    /// store's timezone is not a known IANA identifier.
    pub fn try_new(
        store: &StoreConfig,
        service: &ServiceDef,
        provider: &ProviderDef,
    ) -> SchedulingResult<Self> {
        if service.duration_minutes <= 0 {
            return Err(SchedulingError::Configuration(format!(
                "Service duration must be positive, got {}",
                service.duration_minutes
            )));
        }
        if provider.capacity < 1 {
            return Err(SchedulingError::Configuration(format!(
                "Provider capacity must be at least 1, got {}",
                provider.capacity
            )));
        }
        if store.buffer_before_minutes < 0 || store.buffer_after_minutes < 0 {
            return Err(SchedulingError::Configuration(
                "Buffers must not be negative".to_string(),
            ));
        }

        let timezone: Tz = store.timezone.parse().map_err(|_| {
            SchedulingError::Configuration(format!("Unknown time zone: {}", store.timezone))
        })?;

        // Effective stride: store default, falling back to the service
        // duration, floored at 5 minutes.
        let step_minutes = store
            .slot_step_minutes
            .unwrap_or(service.duration_minutes)
            .max(MIN_SLOT_STEP_MINUTES);

        Ok(Self {
            store_id: store.id,
            provider_id: provider.id,
            timezone,
            step: Duration::minutes(step_minutes),
            duration: Duration::minutes(service.duration_minutes),
            buffer_before: Duration::minutes(store.buffer_before_minutes),
            buffer_after: Duration::minutes(store.buffer_after_minutes),
            capacity: provider.capacity as usize,
        })
    }
}

/// Local calendar date string used as the key into `slots_by_day`.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Weekday index in the 0=Sunday..6=Saturday convention used by
/// [`WeeklyHours`].
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// The weekly-hours row for one weekday, if the store defined one. The table
/// may be sparse; a missing row means the store is closed that day.
pub fn hours_for_weekday(hours: &[WeeklyHours], weekday: u8) -> Option<&WeeklyHours> {
    hours.iter().find(|row| row.day_of_week == weekday)
}

/// Display metadata for one calendar day of the horizon.
pub fn day_metadata(date: NaiveDate, has_slots: bool) -> AvailabilityDay {
    AvailabilityDay {
        day_key: day_key(date),
        date,
        weekday_label: date.format("%a").to_string(),
        day_number: date.day(),
        full_label: date.format("%A, %B %-d").to_string(),
        has_slots,
    }
}

/// Resolve a local wall-clock time on a date to an absolute instant in the
/// store's zone.
///
/// DST makes this partial: an ambiguous local time (fall-back) resolves to
/// the earliest instant, and a nonexistent local time (spring-forward gap)
/// rolls forward one hour to the first valid instant. `None` means the bound
/// cannot be resolved at all and the day should be treated as closed.
fn local_to_instant(tz: Tz, date: NaiveDate, time: NaiveTime) -> Option<DateTime<Utc>> {
    let local = date.and_time(time);
    match tz.from_local_datetime(&local) {
        LocalResult::Single(instant) => Some(instant.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => tz
            .from_local_datetime(&(local + Duration::hours(1)))
            .earliest()
            .map(|instant| instant.with_timezone(&Utc)),
    }
}

/// Number of busy bookings whose buffer-expanded interval overlaps the
/// buffered candidate interval `[candidate_start, candidate_end)`.
///
/// Cancelled and no-show bookings never count. Two intervals overlap when
/// each starts before the other ends.
pub fn overlap_count(
    bookings: &[BookingRecord],
    candidate_start: DateTime<Utc>,
    candidate_end: DateTime<Utc>,
    buffer_before: Duration,
    buffer_after: Duration,
) -> usize {
    bookings
        .iter()
        .filter(|booking| booking.status.is_busy())
        .filter(|booking| {
            let expanded_start = booking.start - buffer_before;
            let expanded_end = booking.end + buffer_after;
            candidate_start < expanded_end && candidate_end > expanded_start
        })
        .count()
}

/// Generate the bookable slots for one open day.
///
/// `open` and `close` are the day's local wall-clock bounds; `bookings` is
/// the already-fetched ledger snapshot for the horizon. The returned slots
/// are strictly ascending by start, a postcondition of the monotonically
/// advancing cursor.
pub fn slots_for_day(
    plan: &SchedulePlan,
    date: NaiveDate,
    open: NaiveTime,
    close: NaiveTime,
    now: DateTime<Utc>,
    bookings: &[BookingRecord],
) -> Vec<AvailabilitySlot> {
    let Some(open_instant) = local_to_instant(plan.timezone, date, open) else {
        return Vec::new();
    };
    let Some(close_instant) = local_to_instant(plan.timezone, date, close) else {
        return Vec::new();
    };

    let key = day_key(date);
    let mut slots = Vec::new();
    let mut cursor = open_instant;

    while cursor <= close_instant {
        let service_end = cursor + plan.duration;

        // No later cursor position can fit the service before closing, so
        // stop outright instead of skipping. Skipping would let uneven
        // step/window combinations admit out-of-window slots.
        if service_end > close_instant {
            break;
        }

        // Never offer a slot in the past or starting exactly now.
        if cursor <= now {
            cursor = cursor + plan.step;
            continue;
        }

        let candidate_start = cursor - plan.buffer_before;
        let candidate_end = service_end + plan.buffer_after;
        let occupied = overlap_count(
            bookings,
            candidate_start,
            candidate_end,
            plan.buffer_before,
            plan.buffer_after,
        );

        if occupied < plan.capacity {
            slots.push(AvailabilitySlot {
                day_key: key.clone(),
                start: cursor,
                end: service_end,
                display_label: cursor
                    .with_timezone(&plan.timezone)
                    .format("%H:%M")
                    .to_string(),
            });
        }

        cursor = cursor + plan.step;
    }

    debug_assert!(
        slots.windows(2).all(|pair| pair[0].start < pair[1].start),
        "slots must be strictly ascending by start"
    );

    slots
}

//! # Slotwise Engine
//!
//! The availability engine: given a store's opening hours, a service's
//! duration, a provider's concurrency capacity, and the provider's existing
//! bookings, compute the bookable time slots over a forward-looking horizon.
//!
//! ## Architecture
//!
//! The crate is split into small layers:
//!
//! - **Slots**: pure per-day computation: zone-correct window conversion,
//!   the candidate cursor loop, buffered overlap counting, capacity admission
//! - **Engine**: one-shot orchestration: input validation, the booking
//!   ledger fetch with its deadline, degraded-mode handling
//! - **Service**: the reactive layer the host application talks to,
//!   `refresh()` plus an observable `{loading, availability}` state
//! - **Config**: environment-driven horizon and fetch-deadline settings
//!
//! The engine owns no persistent state. Every invocation recomputes from
//! scratch against a fresh ledger snapshot, read through the
//! [`BookingLedger`](slotwise_core::ledger::BookingLedger) port; the Postgres
//! implementation lives in `slotwise-db`.

/// Engine configuration loaded from the environment
pub mod config;
/// One-shot availability computation and its output types
pub mod engine;
/// Reactive refresh layer exposed to the host application
pub mod service;
/// Pure per-day slot generation
pub mod slots;

pub use config::EngineConfig;
pub use engine::{
    Availability, AvailabilityEngine, AvailabilityInputs, GENERIC_FAILURE_MESSAGE,
    LEDGER_DEGRADED_WARNING,
};
pub use service::{AvailabilityService, AvailabilityState};
pub use slots::SchedulePlan;

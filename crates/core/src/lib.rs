//! # Slotwise Core
//!
//! Domain models and error types for the Slotwise availability engine.
//! This crate holds the vocabulary shared by the database adapters and the
//! engine itself: store scheduling policy, weekly opening hours, bookable
//! services, providers with concurrency capacity, booking records, and the
//! availability output types.
//!
//! It contains no I/O and no business logic beyond small inherent helpers on
//! the models; the computation lives in `slotwise-engine`.

pub mod errors;
pub mod ledger;
pub mod models;

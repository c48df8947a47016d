//! Reactive layer behavior: publishing, the loading flag, and discarding
//! stale refreshes after an input change.

mod test_utils;

use std::sync::Arc;
use std::time::Duration as StdDuration;

use pretty_assertions::assert_eq;
use slotwise_core::models::{StoreConfig, WeeklyHours};
use slotwise_engine::{AvailabilityEngine, AvailabilityService, EngineConfig};
use test_utils::*;

fn all_week_hours(store: &StoreConfig) -> Vec<WeeklyHours> {
    (0u8..7)
        .map(|dow| open_day(store, dow, hm(0, 0), hm(23, 30)))
        .collect()
}

#[tokio::test]
async fn test_initial_state_is_idle() {
    let service_layer = AvailabilityService::new(engine_with(7, Arc::new(StaticLedger(Vec::new()))));
    let state = service_layer.subscribe().borrow().clone();

    assert!(!state.loading);
    assert!(state.availability.days.is_empty());
    assert_eq!(state.availability.error, None);
}

#[tokio::test]
async fn test_refresh_publishes_computed_availability() {
    let store_def = store("UTC", Some(30));
    let hours = all_week_hours(&store_def);
    let service_layer = AvailabilityService::new(engine_with(7, Arc::new(StaticLedger(Vec::new()))));

    service_layer
        .set_inputs(inputs(store_def, hours, service(30), provider(1)))
        .await;
    service_layer.refresh().await;

    let state = service_layer.subscribe().borrow().clone();
    assert!(!state.loading);
    assert_eq!(state.availability.days.len(), 7);
    assert!(state.availability.has_any_slot);
    assert_eq!(state.availability.error, None);
}

#[tokio::test]
async fn test_loading_toggles_around_refresh() {
    let store_def = store("UTC", Some(30));
    let hours = all_week_hours(&store_def);
    let service_layer = AvailabilityService::new(AvailabilityEngine::new(
        EngineConfig::default(),
        Arc::new(SlowLedger {
            delay: StdDuration::from_millis(100),
            bookings: Vec::new(),
        }),
    ));
    let mut receiver = service_layer.subscribe();

    service_layer
        .set_inputs(inputs(store_def, hours, service(30), provider(1)))
        .await;

    let worker = Arc::clone(&service_layer);
    let refresh = tokio::spawn(async move { worker.refresh().await });

    receiver.changed().await.expect("service dropped");
    assert!(receiver.borrow().loading);

    receiver.changed().await.expect("service dropped");
    let state = receiver.borrow().clone();
    assert!(!state.loading);
    assert!(state.availability.has_any_slot);

    refresh.await.expect("refresh task panicked");
}

// Changing the inputs while a refresh is fetching makes that refresh stale:
// its result must be discarded, not published.
#[tokio::test]
async fn test_stale_refresh_is_discarded_after_input_change() {
    let store_def = store("UTC", Some(30));
    let hours = all_week_hours(&store_def);
    let service_layer = AvailabilityService::new(AvailabilityEngine::new(
        EngineConfig::default(),
        Arc::new(SlowLedger {
            delay: StdDuration::from_millis(100),
            bookings: Vec::new(),
        }),
    ));

    service_layer
        .set_inputs(inputs(store_def.clone(), hours.clone(), service(30), provider(1)))
        .await;

    let worker = Arc::clone(&service_layer);
    let stale_refresh = tokio::spawn(async move { worker.refresh().await });

    // Let the stale refresh reach its ledger fetch, then change the inputs.
    tokio::time::sleep(StdDuration::from_millis(20)).await;
    service_layer
        .set_inputs(inputs(store_def, hours, service(60), provider(2)))
        .await;

    stale_refresh.await.expect("refresh task panicked");

    // The stale result was dropped: still the initial idle availability.
    let state = service_layer.subscribe().borrow().clone();
    assert!(!state.loading);
    assert!(state.availability.days.is_empty());

    // A fresh refresh against the new inputs publishes normally.
    service_layer.refresh().await;
    let state = service_layer.subscribe().borrow().clone();
    assert!(state.availability.has_any_slot);
}

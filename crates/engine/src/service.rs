//! Reactive layer over the engine.
//!
//! The host application (the booking UI) does not call
//! [`AvailabilityEngine::compute`] directly. It holds an
//! [`AvailabilityService`], pushes input changes into it, triggers
//! `refresh()`, and observes `{loading, availability}` through a watch
//! channel. Slot availability is time-sensitive, so every refresh re-fetches
//! the ledger; there is no caching and no partial patching of results.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use tokio::sync::{Mutex, watch};

use crate::engine::{Availability, AvailabilityEngine, AvailabilityInputs};

/// Observable state of the service.
#[derive(Debug, Clone)]
pub struct AvailabilityState {
    /// True while a refresh is in flight.
    pub loading: bool,

    /// Result of the most recent completed, non-stale refresh.
    pub availability: Availability,
}

/// Owns the engine, the current inputs, and the published state.
///
/// Invocations are independent: a refresh whose inputs were replaced while
/// its ledger fetch was in flight is stale, and its result is discarded
/// rather than published. The generation counter is the only coordination
/// between refreshes.
pub struct AvailabilityService {
    engine: AvailabilityEngine,
    inputs: Mutex<AvailabilityInputs>,
    generation: AtomicU64,
    state: watch::Sender<AvailabilityState>,
}

impl AvailabilityService {
    pub fn new(engine: AvailabilityEngine) -> Arc<Self> {
        let (state, _) = watch::channel(AvailabilityState {
            loading: false,
            availability: Availability::idle(),
        });

        Arc::new(Self {
            engine,
            inputs: Mutex::new(AvailabilityInputs::default()),
            generation: AtomicU64::new(0),
            state,
        })
    }

    /// Observe `{loading, availability}`. The receiver yields the current
    /// value immediately and every published change afterwards.
    pub fn subscribe(&self) -> watch::Receiver<AvailabilityState> {
        self.state.subscribe()
    }

    /// Replace the current inputs.
    ///
    /// Bumps the generation so any refresh already in flight discards its
    /// result; callers are expected to follow up with [`refresh`].
    ///
    /// [`refresh`]: AvailabilityService::refresh
    pub async fn set_inputs(&self, inputs: AvailabilityInputs) {
        *self.inputs.lock().await = inputs;
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Re-run the full computation against the current inputs and publish
    /// the result, unless the inputs changed while the computation ran.
    pub async fn refresh(&self) {
        let generation = self.generation.load(Ordering::SeqCst);
        let inputs = self.inputs.lock().await.clone();

        self.state.send_modify(|state| state.loading = true);

        let availability = self.engine.compute(&inputs, Utc::now()).await;

        if self.generation.load(Ordering::SeqCst) == generation {
            self.state.send_replace(AvailabilityState {
                loading: false,
                availability,
            });
        } else {
            // Stale: the inputs changed mid-flight. Drop the result and only
            // clear the loading flag this refresh set.
            self.state.send_modify(|state| state.loading = false);
        }
    }
}

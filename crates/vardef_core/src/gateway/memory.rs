//! In-memory gateway double.
//!
//! Acts as a backend holding its own definition set, records every call,
//! and replays scripted failures. Used for offline hosts and tests.

use crate::gateway::{GatewayError, GatewayResult, SaveRequest, SyncGateway};
use crate::model::attributes::VarDefMap;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Number of calls received per endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub load: usize,
    pub save: usize,
    pub apply: usize,
}

#[derive(Debug, Default)]
struct MemoryState {
    definitions: VarDefMap,
    calls: CallCounts,
    saved: Vec<SaveRequest>,
    load_failures: VecDeque<GatewayError>,
    save_failures: VecDeque<GatewayError>,
    apply_failures: VecDeque<GatewayError>,
}

/// Thread-safe recording gateway.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    state: Mutex<MemoryState>,
}

impl MemoryGateway {
    pub fn new(definitions: VarDefMap) -> Self {
        Self {
            state: Mutex::new(MemoryState {
                definitions,
                ..MemoryState::default()
            }),
        }
    }

    /// Makes the next `load_all` fail with `err`.
    pub fn fail_next_load(&self, err: GatewayError) {
        self.lock().load_failures.push_back(err);
    }

    /// Makes the next `save_one` fail with `err`.
    pub fn fail_next_save(&self, err: GatewayError) {
        self.lock().save_failures.push_back(err);
    }

    /// Makes the next `apply_all` fail with `err`.
    pub fn fail_next_apply(&self, err: GatewayError) {
        self.lock().apply_failures.push_back(err);
    }

    pub fn call_counts(&self) -> CallCounts {
        self.lock().calls
    }

    /// Requests accepted by `save_one`, in arrival order.
    pub fn saved_requests(&self) -> Vec<SaveRequest> {
        self.lock().saved.clone()
    }

    /// Current backend-side definition set.
    pub fn definitions(&self) -> VarDefMap {
        self.lock().definitions.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SyncGateway for MemoryGateway {
    fn load_all(&self) -> GatewayResult<VarDefMap> {
        let mut state = self.lock();
        state.calls.load += 1;
        if let Some(err) = state.load_failures.pop_front() {
            return Err(err);
        }
        Ok(state.definitions.clone())
    }

    fn save_one(&self, request: &SaveRequest) -> GatewayResult<()> {
        let mut state = self.lock();
        state.calls.save += 1;
        if let Some(err) = state.save_failures.pop_front() {
            return Err(err);
        }
        state
            .definitions
            .insert(request.name.clone(), request.attributes());
        state.saved.push(request.clone());
        Ok(())
    }

    fn apply_all(&self, definitions: &VarDefMap) -> GatewayResult<()> {
        let mut state = self.lock();
        state.calls.apply += 1;
        if let Some(err) = state.apply_failures.pop_front() {
            return Err(err);
        }
        state.definitions = definitions.clone();
        Ok(())
    }
}

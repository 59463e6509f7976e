//! Timer-driven simulation of AI processing progress.
//!
//! Each simulated run is a spawned task keyed by process id. Starting an id
//! that is already running cancels the stale task first, so a process can
//! never receive interleaved updates from two generations of the same
//! simulation. Dropping the engine aborts everything outstanding.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task::JoinHandle;
use tracing::debug;

use reels_shared::constants::{
    CREATOR_MAX_STEP, CREATOR_TICK_MS, PROGRESS_COMPLETE, TOOLS_MAX_STEP, TOOLS_TICK_MS,
};
use reels_shared::types::ProcessStatus;

use crate::actions::{Action, ProcessPatch};
use crate::store::AppStore;

/// Tick interval and per-tick step bound of one simulation.
#[derive(Debug, Clone, Copy)]
pub struct ProgressProfile {
    pub tick: Duration,
    /// Each tick adds a step drawn uniformly from `0..max_step`.
    pub max_step: f64,
}

impl ProgressProfile {
    /// The creator-view pacing.
    pub fn creator() -> Self {
        Self {
            tick: Duration::from_millis(CREATOR_TICK_MS),
            max_step: CREATOR_MAX_STEP,
        }
    }

    /// The AI-tools-view pacing.
    pub fn tools() -> Self {
        Self {
            tick: Duration::from_millis(TOOLS_TICK_MS),
            max_step: TOOLS_MAX_STEP,
        }
    }
}

type TaskMap = Arc<Mutex<HashMap<String, JoinHandle<()>>>>;

/// Owns the running simulations, keyed by process id. Cheap to clone.
#[derive(Clone)]
pub struct ProgressEngine {
    inner: Arc<EngineInner>,
}

struct EngineInner {
    store: AppStore,
    tasks: TaskMap,
    seed: Option<u64>,
}

impl ProgressEngine {
    pub fn new(store: AppStore) -> Self {
        Self::build(store, None)
    }

    /// An engine whose step draws are deterministic.
    pub fn seeded(store: AppStore, seed: u64) -> Self {
        Self::build(store, Some(seed))
    }

    fn build(store: AppStore, seed: Option<u64>) -> Self {
        Self {
            inner: Arc::new(EngineInner {
                store,
                tasks: Arc::new(Mutex::new(HashMap::new())),
                seed,
            }),
        }
    }

    /// Start simulating progress for `process_id`, cancelling any stale
    /// simulation already running under the same id.
    ///
    /// The spawned task dispatches a monotonically non-decreasing progress
    /// update per tick and finishes with status `Completed` at exactly 100.
    pub fn start(&self, process_id: &str, profile: ProgressProfile) {
        let id = process_id.to_string();
        let store = self.inner.store.clone();
        let tasks = Arc::clone(&self.inner.tasks);
        let mut rng = match self.inner.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let task_id = id.clone();
        let handle = tokio::spawn(async move {
            let mut progress = 0.0_f64;

            loop {
                tokio::time::sleep(profile.tick).await;
                progress += rng.gen_range(0.0..profile.max_step);

                if progress >= PROGRESS_COMPLETE {
                    store.dispatch(Action::UpdateAiProcess {
                        id: task_id.clone(),
                        patch: ProcessPatch {
                            status: Some(ProcessStatus::Completed),
                            progress: Some(PROGRESS_COMPLETE),
                            ..Default::default()
                        },
                    });
                    break;
                }

                store.dispatch(Action::UpdateAiProcess {
                    id: task_id.clone(),
                    patch: ProcessPatch {
                        progress: Some(progress),
                        ..Default::default()
                    },
                });
            }

            lock(&tasks).remove(&task_id);
            debug!(process_id = %task_id, "progress simulation completed");
        });

        if let Some(stale) = lock(&self.inner.tasks).insert(id.clone(), handle) {
            stale.abort();
            debug!(process_id = %id, "cancelled stale progress simulation");
        }
    }

    /// Cancel the simulation for `process_id`, if one is running.
    pub fn cancel(&self, process_id: &str) -> bool {
        match lock(&self.inner.tasks).remove(process_id) {
            Some(handle) => {
                handle.abort();
                debug!(process_id, "progress simulation cancelled");
                true
            }
            None => false,
        }
    }

    /// Number of simulations currently running.
    pub fn active(&self) -> usize {
        lock(&self.inner.tasks).len()
    }
}

impl Drop for EngineInner {
    fn drop(&mut self) {
        for (_, handle) in lock(&self.tasks).drain() {
            handle.abort();
        }
    }
}

fn lock<K, V>(map: &Mutex<HashMap<K, V>>) -> MutexGuard<'_, HashMap<K, V>> {
    map.lock().unwrap_or_else(PoisonError::into_inner)
}

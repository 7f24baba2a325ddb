//! In-process state store

use std::collections::HashMap;
use std::sync::Mutex;

use super::{HealthSnapshot, PlanState, StateRepository};
use crate::error::{Error, Result};

#[derive(Debug, Default)]
pub struct MemoryStateRepository {
    state: Mutex<Option<PlanState>>,
    snapshots: Mutex<HashMap<String, HealthSnapshot>>,
}

impl MemoryStateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `state` already saved
    pub fn with_state(state: PlanState) -> Self {
        Self {
            state: Mutex::new(Some(state)),
            snapshots: Mutex::default(),
        }
    }
}

fn poisoned<T>(_: T) -> Error {
    Error::Repository("state lock poisoned".into())
}

impl StateRepository for MemoryStateRepository {
    fn name(&self) -> &str {
        "memory"
    }

    fn load_state(&self) -> Result<Option<PlanState>> {
        Ok(self.state.lock().map_err(poisoned)?.clone())
    }

    fn save_state(&self, state: &PlanState) -> Result<()> {
        *self.state.lock().map_err(poisoned)? = Some(state.clone());
        Ok(())
    }

    fn save_snapshot(&self, snapshot: &HealthSnapshot) -> Result<()> {
        self.snapshots
            .lock()
            .map_err(poisoned)?
            .insert(snapshot.user_id.clone(), snapshot.clone());
        Ok(())
    }

    fn load_snapshot(&self, user_id: &str) -> Result<Option<HealthSnapshot>> {
        Ok(self.snapshots.lock().map_err(poisoned)?.get(user_id).cloned())
    }
}

//! JSON file state store
//!
//! State and snapshots share one pretty-printed JSON document. Writes go to a
//! sibling temp file first and are renamed into place.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use wealthwise_core::{Error, HealthSnapshot, PlanState, Result, StateRepository};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    state: Option<PlanState>,
    #[serde(default)]
    snapshots: BTreeMap<String, HealthSnapshot>,
}

pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<StoreFile> {
        if !self.path.exists() {
            return Ok(StoreFile::default());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| {
            Error::Repository(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        if content.trim().is_empty() {
            return Ok(StoreFile::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write(&self, store: &StoreFile) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::Repository(format!(
                        "Failed to create state directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
                info!("Created state directory: {}", parent.display());
            }
        }

        let json = serde_json::to_string_pretty(store)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .and_then(|_| fs::rename(&tmp, &self.path))
            .map_err(|e| {
                Error::Repository(format!("Failed to write {}: {}", self.path.display(), e))
            })?;
        debug!("Wrote state to {}", self.path.display());
        Ok(())
    }
}

impl StateRepository for JsonFileRepository {
    fn name(&self) -> &str {
        "json-file"
    }

    fn load_state(&self) -> Result<Option<PlanState>> {
        Ok(self.read()?.state)
    }

    fn save_state(&self, state: &PlanState) -> Result<()> {
        let mut store = self.read()?;
        store.state = Some(state.clone());
        self.write(&store)
    }

    fn save_snapshot(&self, snapshot: &HealthSnapshot) -> Result<()> {
        let mut store = self.read()?;
        store
            .snapshots
            .insert(snapshot.user_id.clone(), snapshot.clone());
        self.write(&store)
    }

    fn load_snapshot(&self, user_id: &str) -> Result<Option<HealthSnapshot>> {
        Ok(self.read()?.snapshots.remove(user_id))
    }
}

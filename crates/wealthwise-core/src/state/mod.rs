//! Plan state persistence with pluggable stores
//!
//! The core never reads a clock or touches storage itself. Callers supply the
//! current day for streaks and pick a `StateRepository` implementation:
//!
//! - `MemoryStateRepository` keeps everything in process (tests, embedding)
//! - file-backed stores live with the binary that owns the file system

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::goals::GoalBook;
use crate::models::{Profile, Settings};
use crate::recommendations::HealthReport;

mod memory;

pub use memory::MemoryStateRepository;

/// Default user id for single-user setups
pub const DEFAULT_USER_ID: &str = "demo";

/// Consecutive-day usage counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub count: u32,
    pub last_day: Option<NaiveDate>,
}

impl Streak {
    /// Count `today` once. Calling again on the same day is a no-op.
    pub fn bump(&mut self, today: NaiveDate) -> u32 {
        if self.last_day != Some(today) {
            self.count += 1;
            self.last_day = Some(today);
        }
        self.count
    }
}

/// Everything a user has entered, persisted between runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanState {
    pub user_id: String,
    pub profile: Profile,
    pub settings: Settings,
    pub goals: GoalBook,
    pub streak: Streak,
}

impl Default for PlanState {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_USER_ID.to_string(),
            profile: Profile::default(),
            settings: Settings::default(),
            goals: GoalBook::default(),
            streak: Streak::default(),
        }
    }
}

/// Last computed health score for a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSnapshot {
    pub user_id: String,
    pub at: DateTime<Utc>,
    pub score: i32,
    pub badges: Vec<String>,
}

impl HealthSnapshot {
    pub fn new(user_id: impl Into<String>, at: DateTime<Utc>, health: &HealthReport) -> Self {
        Self {
            user_id: user_id.into(),
            at,
            score: health.score,
            badges: health.badges.clone(),
        }
    }
}

/// Storage backend for plan state and health snapshots
pub trait StateRepository: Send + Sync {
    /// Human-readable name for this store
    fn name(&self) -> &str;

    /// Load saved state, `None` when nothing has been saved yet
    fn load_state(&self) -> Result<Option<PlanState>>;

    fn save_state(&self, state: &PlanState) -> Result<()>;

    /// Store a snapshot, replacing any previous one for the same user
    fn save_snapshot(&self, snapshot: &HealthSnapshot) -> Result<()>;

    fn load_snapshot(&self, user_id: &str) -> Result<Option<HealthSnapshot>>;

    /// Saved state or a fresh default
    fn load_state_or_default(&self) -> Result<PlanState> {
        Ok(self.load_state()?.unwrap_or_default())
    }
}

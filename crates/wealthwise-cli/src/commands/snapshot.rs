//! Health snapshot commands

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use wealthwise_core::{compute_plan, HealthSnapshot, StateRepository};

use super::load_state;
use crate::config::Config;

pub fn cmd_snapshot_save(
    repo: &dyn StateRepository,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<()> {
    let state = load_state(repo, config)?;
    let report = compute_plan(&state.profile, &state.settings, &config.plan)
        .context("Cannot compute health score")?;

    let snapshot = HealthSnapshot::new(&state.user_id, now, &report.health);
    repo.save_snapshot(&snapshot)
        .context("Failed to save snapshot")?;

    println!(
        "📸 Snapshot saved for '{}': score {} [{}]",
        snapshot.user_id,
        snapshot.score,
        snapshot.badges.join(", ")
    );
    Ok(())
}

pub fn cmd_snapshot_show(repo: &dyn StateRepository, config: &Config) -> Result<()> {
    let state = load_state(repo, config)?;
    match repo.load_snapshot(&state.user_id)? {
        Some(snapshot) => {
            println!(
                "📸 {} at {}: score {} [{}]",
                snapshot.user_id,
                snapshot.at.format("%Y-%m-%d %H:%M UTC"),
                snapshot.score,
                snapshot.badges.join(", ")
            );
        }
        None => println!("No snapshot saved for '{}'", state.user_id),
    }
    Ok(())
}

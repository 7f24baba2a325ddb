//! Savings goal commands

use anyhow::{Context, Result};
use wealthwise_core::models::{format_currency, Goal};
use wealthwise_core::StateRepository;

use super::{load_state, truncate};
use crate::config::Config;

pub fn cmd_goals_add(
    repo: &dyn StateRepository,
    config: &Config,
    name: &str,
    target: f64,
    saved: f64,
    monthly: f64,
) -> Result<()> {
    let mut state = load_state(repo, config)?;
    state
        .goals
        .upsert(Goal::new(name, target, saved, monthly))
        .context("Goal not saved")?;
    repo.save_state(&state).context("Failed to save state")?;

    println!("✅ Goal '{}' saved ({} goals)", name.trim(), state.goals.len());
    Ok(())
}

pub fn cmd_goals_list(repo: &dyn StateRepository, config: &Config) -> Result<()> {
    let state = load_state(repo, config)?;
    if state.goals.is_empty() {
        println!("No goals yet. Add one with: wealthwise goals add --name House --target 50000");
        return Ok(());
    }

    let progress = state.goals.progress()?;

    println!();
    println!("🎯 Goals");
    println!(
        "   {:20} │ {:>10} │ {:>10} │ {:>9} │ {:>4} │ {:>8}",
        "Name", "Target", "Saved", "Monthly", "%", "ETA"
    );
    println!("   ─────────────────────┼────────────┼────────────┼───────────┼──────┼─────────");
    for goal in &progress {
        println!(
            "   {:20} │ {:>10} │ {:>10} │ {:>9} │ {:>3}% │ {:>8}",
            truncate(&goal.name, 20),
            format_currency(goal.target),
            format_currency(goal.saved),
            format_currency(goal.monthly_contribution),
            goal.percent_complete,
            goal.eta.to_string()
        );
    }
    Ok(())
}

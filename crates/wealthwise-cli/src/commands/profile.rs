//! Profile and settings commands
//!
//! This module contains:
//! - `load_state` - Shared utility to load saved state with config defaults
//! - `cmd_profile_set` / `cmd_profile_show`
//! - `cmd_settings_set` / `cmd_settings_show`

use anyhow::{Context, Result};
use wealthwise_core::models::format_currency;
use wealthwise_core::{LenientNumber, PlanState, ProfileInput, SettingsInput, StateRepository};

use crate::cli::{ProfileFields, SettingsFields};
use crate::config::Config;

/// Load saved state, or a fresh one seeded with the configured default settings
pub fn load_state(repo: &dyn StateRepository, config: &Config) -> Result<PlanState> {
    let state = repo
        .load_state()
        .with_context(|| format!("Failed to load state from {} store", repo.name()))?;
    Ok(state.unwrap_or_else(|| PlanState {
        settings: config.default_settings.clone(),
        ..PlanState::default()
    }))
}

fn overlay(field: &mut Option<LenientNumber>, raw: &Option<String>) {
    if let Some(text) = raw {
        *field = Some(LenientNumber::Text(text.clone()));
    }
}

pub fn cmd_profile_set(
    repo: &dyn StateRepository,
    config: &Config,
    fields: &ProfileFields,
    user: Option<&str>,
) -> Result<()> {
    let mut state = load_state(repo, config)?;

    let mut input = ProfileInput::from(&state.profile);
    overlay(&mut input.age, &fields.age);
    overlay(&mut input.credit_score, &fields.credit_score);
    overlay(&mut input.annual_income, &fields.income);
    overlay(&mut input.current_money, &fields.current_money);
    overlay(&mut input.asset_value, &fields.assets);
    overlay(&mut input.total_debt, &fields.debt);
    overlay(&mut input.student_loans, &fields.student_loans);
    overlay(&mut input.debt_interest_rate, &fields.debt_rate);

    state.profile = input
        .resolve()
        .context("Profile not saved (set --income to a positive amount)")?;
    if let Some(user) = user.map(str::trim).filter(|u| !u.is_empty()) {
        state.user_id = user.to_string();
    }

    repo.save_state(&state).context("Failed to save state")?;
    println!("✅ Profile saved for '{}'", state.user_id);
    print_profile(&state);
    Ok(())
}

pub fn cmd_profile_show(repo: &dyn StateRepository, config: &Config) -> Result<()> {
    let state = load_state(repo, config)?;
    if state.profile.annual_income <= 0.0 {
        println!("No profile saved yet. Run: wealthwise profile set --income 75000 ...");
        return Ok(());
    }
    print_profile(&state);
    Ok(())
}

fn print_profile(state: &PlanState) {
    let p = &state.profile;
    println!();
    println!("👤 Profile ({})", state.user_id);
    println!("   ─────────────────────────────");
    println!("   Age:             {}", p.age);
    println!(
        "   Credit score:    {}",
        if p.credit_score == 0 {
            "-".to_string()
        } else {
            p.credit_score.to_string()
        }
    );
    println!("   Annual income:   {}", format_currency(p.annual_income));
    println!("   Current money:   {}", format_currency(p.current_money));
    println!("   Assets:          {}", format_currency(p.asset_value));
    println!("   Total debt:      {}", format_currency(p.total_debt));
    println!("   Student loans:   {}", format_currency(p.student_loans));
    println!("   Debt rate:       {:.2}%", p.debt_interest_rate);
    println!("   Net worth:       {}", format_currency(p.net_worth()));
}

pub fn cmd_settings_set(
    repo: &dyn StateRepository,
    config: &Config,
    fields: &SettingsFields,
) -> Result<()> {
    let mut state = load_state(repo, config)?;

    let input = SettingsInput {
        expected_return: fields.expected_return.clone().map(LenientNumber::Text),
        inflation: fields.inflation.clone().map(LenientNumber::Text),
        save_rate: fields.save_rate.clone().map(LenientNumber::Text),
        sensitivity: fields.sensitivity.clone(),
    };
    state.settings = input.resolve_with(&state.settings);

    repo.save_state(&state).context("Failed to save state")?;
    println!("✅ Settings saved");
    print_settings(&state);
    Ok(())
}

pub fn cmd_settings_show(repo: &dyn StateRepository, config: &Config) -> Result<()> {
    let state = load_state(repo, config)?;
    print_settings(&state);
    Ok(())
}

fn print_settings(state: &PlanState) {
    let s = &state.settings;
    println!();
    println!("⚙️  Settings");
    println!("   ─────────────────────────────");
    println!("   Expected return: {:.1}%", s.expected_return * 100.0);
    println!("   Inflation:       {:.1}%", s.inflation * 100.0);
    println!("   Savings rate:    {:.1}%", s.save_rate * 100.0);
    println!("   Sensitivity:     {}", s.sensitivity);
}

//! Plan report command

use anyhow::{Context, Result};
use chrono::NaiveDate;
use wealthwise_core::models::format_currency;
use wealthwise_core::{compute_plan, PlanReport, Priority, StateRepository};

use super::{load_state, percent};
use crate::config::Config;

/// Compute the plan, count today toward the streak and save state
pub fn cmd_plan(
    repo: &dyn StateRepository,
    config: &Config,
    today: NaiveDate,
    json: bool,
) -> Result<()> {
    let mut state = load_state(repo, config)?;
    let report = compute_plan(&state.profile, &state.settings, &config.plan)
        .context("Cannot compute plan (run 'wealthwise profile set --income ...' first)")?;

    let streak = state.streak.bump(today);
    repo.save_state(&state).context("Failed to save state")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    println!();
    println!("🔥 Streak: {} day{}", streak, if streak == 1 { "" } else { "s" });
    Ok(())
}

fn priority_icon(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "🔴",
        Priority::Medium => "🟡",
        Priority::Low => "🟢",
    }
}

fn print_report(report: &PlanReport) {
    println!();
    println!("📊 Plan Summary");
    println!("   ─────────────────────────────────────────────");
    for card in &report.summary {
        println!("   {:28} {:>14}", card.label, card.value);
    }

    println!();
    println!(
        "📈 Growth ({:.1}% nominal, {:.1}% real)",
        report.growth.annual_return * 100.0,
        report.growth.real_return * 100.0
    );
    println!("   {:>6} │ {:>14} │ {:>14}", "Year", "Nominal", "Real");
    println!("   ───────┼────────────────┼───────────────");
    for point in &report.growth.points {
        println!(
            "   {:>6} │ {:>14} │ {:>14}",
            point.years,
            format_currency(point.nominal),
            format_currency(point.real)
        );
    }

    if report.monthly_debt_payment > 0.0 {
        println!();
        println!(
            "💳 Debt Payoff (minimum {}/mo)",
            format_currency(report.monthly_debt_payment)
        );
        for scenario in &report.debt_scenarios {
            let outcome = match scenario.payoff_year() {
                Some(year) => format!("paid off in year {}", year),
                None => format!(
                    "{} left after {} years",
                    format_currency(scenario.balances.last().copied().unwrap_or(0.0)),
                    scenario.balances.len().saturating_sub(1)
                ),
            };
            println!("   {:12} {}", scenario.label, outcome);
        }
    }

    println!();
    println!("🏁 Benchmarks ({} income)", report.benchmarks.income_category);
    for axis in &report.benchmarks.axes {
        println!(
            "   {:14} you {:>5}  vs  {:>5}",
            axis.label,
            percent(axis.yours),
            percent(axis.benchmark)
        );
    }

    println!();
    println!("💡 Recommendations");
    for rec in &report.recommendations {
        println!("   {} {}", priority_icon(rec.priority), rec.title);
        println!("      {}", rec.body);
    }

    println!();
    println!("🧾 Monthly Budget");
    for row in &report.budget {
        println!(
            "   {:16} {:>5}  {:>10}",
            row.category,
            percent(row.share),
            format_currency(row.monthly_amount)
        );
    }

    println!();
    println!(
        "❤️  Health Score: {}  [{}]",
        report.health.score,
        report.health.badges.join(", ")
    );
}

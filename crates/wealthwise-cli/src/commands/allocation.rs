//! Asset allocation command

use anyhow::Result;
use wealthwise_core::{
    allocation_gaps, normalize_current, target_allocation, IncomeCategory, StateRepository,
};

use super::load_state;
use crate::config::Config;

pub fn cmd_allocation(
    repo: &dyn StateRepository,
    config: &Config,
    cash: f64,
    stocks: f64,
    bonds: f64,
    real_estate: f64,
) -> Result<()> {
    let state = load_state(repo, config)?;
    let target = target_allocation(state.profile.age, state.profile.annual_income);
    let current = normalize_current(cash, stocks, bonds, real_estate);

    println!();
    println!(
        "🥧 Allocation (age {}, {})",
        state.profile.age,
        IncomeCategory::classify(state.profile.annual_income)
    );
    println!("   {:10} │ {:>7} │ {:>7} │ {:>7}", "Asset", "Target", "Current", "Gap");
    println!("   ───────────┼─────────┼─────────┼────────");
    let gaps = allocation_gaps(&current, &target);
    let rows = [
        (target.cash, current.cash),
        (target.stocks, current.stocks),
        (target.bonds, current.bonds),
        (target.real_estate, current.real_estate),
    ];
    for (gap, (t, c)) in gaps.iter().zip(rows) {
        println!(
            "   {:10} │ {:>6.0}% │ {:>6.0}% │ {:>+6.0}%",
            gap.asset, t, c, gap.gap
        );
    }
    println!(
        "   {:10} │ {:>6.0}% │ {:>7} │",
        "Emergency", target.emergency_fund, "-"
    );
    Ok(())
}

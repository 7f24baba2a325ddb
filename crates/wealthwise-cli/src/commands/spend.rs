//! Spend analysis command

use std::fs::File;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use wealthwise_core::import::parse_transactions;
use wealthwise_core::models::format_currency;
use wealthwise_core::spend::DEFAULT_DRILLDOWN_LIMIT;
use wealthwise_core::{aggregate, Category, SpendAnalysis};

use super::truncate;

pub fn cmd_spend(file: &Path, json: bool, drilldown: Option<&str>) -> Result<()> {
    let reader =
        File::open(file).with_context(|| format!("Failed to open {}", file.display()))?;
    let records = parse_transactions(reader)
        .with_context(|| format!("Failed to parse {}", file.display()))?;
    let analysis = aggregate(&records);

    if let Some(name) = drilldown {
        let category: Category = name.parse().map_err(|e: String| anyhow!(e))?;
        let drill = analysis.drilldown(category, DEFAULT_DRILLDOWN_LIMIT);
        if json {
            println!("{}", serde_json::to_string_pretty(&drill)?);
            return Ok(());
        }

        println!();
        println!("🔎 {} - Top Merchants", category);
        if drill.top_merchants.is_empty() {
            println!("   -");
        }
        for (merchant, sum) in &drill.top_merchants {
            println!("   {:20} {:>10}", merchant, format_currency(*sum));
        }
        println!();
        println!("   Largest Transactions");
        if drill.largest_transactions.is_empty() {
            println!("   -");
        }
        for tx in &drill.largest_transactions {
            println!(
                "   {:>10}  {}",
                format!("${:.2}", tx.amount),
                truncate(&tx.description, 40)
            );
        }
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    print_analysis(&analysis);
    Ok(())
}

fn print_analysis(analysis: &SpendAnalysis) {
    println!();
    println!("💸 Spending Analysis");
    println!("   ─────────────────────────────────────────");
    println!("   Total: ${:.2}", analysis.total);
    if let Some((category, amount)) = analysis.top_category() {
        println!("   Top category: {} (${:.2})", category, amount);
    }
    if analysis.skipped > 0 || analysis.undated > 0 {
        println!(
            "   {} rows skipped (no amount), {} without a usable date",
            analysis.skipped, analysis.undated
        );
    }

    println!();
    println!("   {:18} │ {:>10} │ {:>6} │ {:>5}", "Category", "Amount", "%", "Count");
    println!("   ───────────────────┼────────────┼────────┼──────");
    for category in Category::ALL {
        let amount = analysis.totals.get(&category).copied().unwrap_or(0.0);
        let count = analysis.categorized.get(&category).map_or(0, Vec::len);
        if count == 0 {
            continue;
        }
        let share = if analysis.total > 0.0 {
            amount / analysis.total * 100.0
        } else {
            0.0
        };
        println!(
            "   {:18} │ {:>10.2} │ {:>5.1}% │ {:>5}",
            category.as_str(),
            amount,
            share,
            count
        );
    }

    let monthly = analysis.monthly_spend();
    if !monthly.is_empty() {
        println!();
        println!("   Monthly");
        for (month, amount) in &monthly {
            println!("   {:8} {:>10}", month, format_currency(*amount));
        }
    }

    println!();
    if analysis.insights.is_empty() {
        println!("   No major issues detected. 🎉");
    }
    for insight in &analysis.insights {
        println!("   [{}] {}: {}", insight.priority, insight.title, insight.body);
    }
}

//! Domain models for WealthWise

use serde::{Deserialize, Serialize};

/// Financial profile snapshot supplied per computation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub age: u32,
    /// FICO-style score, 300-850 (0 when unknown)
    pub credit_score: u32,
    pub annual_income: f64,
    pub current_money: f64,
    pub asset_value: f64,
    pub total_debt: f64,
    pub student_loans: f64,
    /// Annual debt interest rate in percent (5.5 = 5.5%)
    pub debt_interest_rate: f64,
}

impl Profile {
    pub fn monthly_income(&self) -> f64 {
        self.annual_income / 12.0
    }

    /// Liquid money plus assets minus debt; the only field allowed to go negative
    pub fn net_worth(&self) -> f64 {
        self.current_money + self.asset_value - self.total_debt
    }

    /// Six months of income
    pub fn emergency_fund_target(&self) -> f64 {
        self.monthly_income() * 6.0
    }
}

/// Return-assumption sensitivity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sensitivity {
    Conservative,
    #[default]
    Base,
    Aggressive,
}

impl Sensitivity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Base => "base",
            Self::Aggressive => "aggressive",
        }
    }

    /// Adjustment applied to the expected annual return
    pub fn return_adjustment(&self) -> f64 {
        match self {
            Self::Conservative => -0.01,
            Self::Base => 0.0,
            Self::Aggressive => 0.01,
        }
    }
}

impl std::str::FromStr for Sensitivity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "conservative" => Ok(Self::Conservative),
            "base" => Ok(Self::Base),
            "aggressive" => Ok(Self::Aggressive),
            _ => Err(format!(
                "Unknown sensitivity: {} (valid: conservative, base, aggressive)",
                s
            )),
        }
    }
}

impl std::fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Projection settings, all rates as fractions (0.07 = 7%)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub expected_return: f64,
    pub inflation: f64,
    /// The savings rate the user has chosen
    pub save_rate: f64,
    pub sensitivity: Sensitivity,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            expected_return: 0.07,
            inflation: 0.03,
            save_rate: 0.15,
            sensitivity: Sensitivity::Base,
        }
    }
}

/// A savings goal, keyed by name within a goal list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub name: String,
    pub target: f64,
    #[serde(default)]
    pub saved: f64,
    #[serde(default, alias = "monthly")]
    pub monthly_contribution: f64,
}

impl Goal {
    pub fn new(name: impl Into<String>, target: f64, saved: f64, monthly: f64) -> Self {
        Self {
            name: name.into(),
            target,
            saved,
            monthly_contribution: monthly,
        }
    }
}

/// A raw row handed over by the ingestion collaborator
///
/// `amount` is `None` when the source value was missing or not numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub description: String,
    pub amount: Option<f64>,
    pub date: String,
}

impl TransactionRecord {
    pub fn new(description: impl Into<String>, amount: Option<f64>, date: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount,
            date: date.into(),
        }
    }
}

/// A categorized transaction (amount is always the absolute value)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub description: String,
    pub amount: f64,
    /// Date text as received
    pub date: String,
}

/// Priority of a recommendation or spend insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A derived, priority-tagged observation (never persisted on its own)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub title: String,
    pub body: String,
}

impl Recommendation {
    pub fn new(priority: Priority, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            priority,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Key/value card for the dashboard summary grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryCard {
    pub label: String,
    pub value: String,
}

impl SummaryCard {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// One row of the needs/wants/savings budget split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRow {
    pub category: String,
    /// Share of monthly income as a fraction
    pub share: f64,
    pub monthly_amount: f64,
}

/// Three-row monthly budget: needs 50%, wants 30%, savings at the user's rate
pub fn budget_breakdown(annual_income: f64, save_rate: f64) -> Vec<BudgetRow> {
    let monthly = annual_income / 12.0;
    [("Needs", 0.50), ("Wants", 0.30), ("Savings/Invest", save_rate)]
        .into_iter()
        .map(|(category, share)| BudgetRow {
            category: category.to_string(),
            share,
            monthly_amount: monthly * share,
        })
        .collect()
}

/// Format a currency amount with thousands separators and no decimals
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "-".to_string();
    }
    let rounded = amount.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(rounded.unsigned_abs()))
}

/// Like [`format_currency`] but keeps cents: `$25,500.50`
pub fn format_currency_cents(amount: f64) -> String {
    if !amount.is_finite() {
        return "-".to_string();
    }
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, group_thousands(abs / 100), abs % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_worth_can_be_negative() {
        let profile = Profile {
            current_money: 1_000.0,
            asset_value: 500.0,
            total_debt: 5_000.0,
            ..Default::default()
        };
        assert_eq!(profile.net_worth(), -3_500.0);
    }

    #[test]
    fn test_sensitivity_from_str() {
        assert_eq!("Aggressive".parse::<Sensitivity>().unwrap(), Sensitivity::Aggressive);
        assert_eq!(" base ".parse::<Sensitivity>().unwrap(), Sensitivity::Base);
        assert!("reckless".parse::<Sensitivity>().is_err());
    }

    #[test]
    fn test_budget_breakdown() {
        let rows = budget_breakdown(60_000.0, 0.15);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].category, "Needs");
        assert!((rows[0].monthly_amount - 2_500.0).abs() < 1e-9);
        assert!((rows[1].monthly_amount - 1_500.0).abs() < 1e-9);
        assert!((rows[2].monthly_amount - 750.0).abs() < 1e-9);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(1234.4), "$1,234");
        assert_eq!(format_currency(1_234_567.5), "$1,234,568");
        assert_eq!(format_currency(-19_000.0), "-$19,000");
        assert_eq!(format_currency(f64::NAN), "-");
    }

    #[test]
    fn test_format_currency_cents() {
        assert_eq!(format_currency_cents(25_500.5), "$25,500.50");
        assert_eq!(format_currency_cents(0.07), "$0.07");
        assert_eq!(format_currency_cents(-1_234.0), "-$1,234.00");
    }

    #[test]
    fn test_goal_accepts_short_monthly_alias() {
        let goal: Goal =
            serde_json::from_str(r#"{"name":"Trip","target":2000,"saved":100,"monthly":50}"#)
                .unwrap();
        assert_eq!(goal.monthly_contribution, 50.0);
    }
}

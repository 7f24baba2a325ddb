//! Peer benchmark comparison
//!
//! The medians are fixed placeholder figures, not sourced data.

use serde::{Deserialize, Serialize};

use crate::models::Profile;
use crate::recommendations::IncomeCategory;

pub const MEDIAN_DTI: f64 = 0.25;

pub fn median_save_rate(income: IncomeCategory) -> f64 {
    match income {
        IncomeCategory::Low => 0.06,
        IncomeCategory::Medium => 0.10,
        IncomeCategory::High => 0.15,
    }
}

/// Rule-of-thumb net worth: income times age over ten
pub fn net_worth_target(annual_income: f64, age: u32) -> f64 {
    annual_income * age as f64 / 10.0
}

/// One compared dimension, both sides on a 0..1 scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkAxis {
    pub label: String,
    pub yours: f64,
    pub benchmark: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    pub income_category: IncomeCategory,
    pub median_save_rate: f64,
    pub median_dti: f64,
    pub net_worth_target: f64,
    pub axes: Vec<BenchmarkAxis>,
}

pub fn compare(profile: &Profile, user_save_rate: f64, dti: f64) -> BenchmarkComparison {
    let income_category = IncomeCategory::classify(profile.annual_income);
    let median_rate = median_save_rate(income_category);
    let target = net_worth_target(profile.annual_income, profile.age);
    let divisor = if target == 0.0 { 1.0 } else { target };

    let axis = |label: &str, yours: f64, benchmark: f64| BenchmarkAxis {
        label: label.to_string(),
        yours,
        benchmark,
    };

    BenchmarkComparison {
        income_category,
        median_save_rate: median_rate,
        median_dti: MEDIAN_DTI,
        net_worth_target: target,
        axes: vec![
            axis("Savings Rate", user_save_rate, median_rate),
            axis("Debt Health", 1.0 - dti, 1.0 - MEDIAN_DTI),
            axis("Net Worth", (profile.net_worth() / divisor).min(1.0), 1.0),
        ],
    }
}

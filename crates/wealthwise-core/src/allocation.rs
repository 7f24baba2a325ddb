//! Target asset allocation by age and income
//!
//! All figures are whole-percent shares. The target also reserves a slice for
//! the emergency fund, which has no counterpart in the current holdings.

use serde::{Deserialize, Serialize};

use crate::recommendations::IncomeCategory;

/// Percent shares per asset class
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub cash: f64,
    pub stocks: f64,
    pub bonds: f64,
    /// Real estate / REITs
    pub real_estate: f64,
    /// Emergency-fund slice; zero for current holdings
    pub emergency_fund: f64,
}

impl Allocation {
    pub fn total(&self) -> f64 {
        self.cash + self.stocks + self.bonds + self.real_estate + self.emergency_fund
    }
}

/// Current minus target for one asset class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationGap {
    pub asset: String,
    pub gap: f64,
}

/// "100 minus age" equity share with an income-dependent split
pub fn target_allocation(age: u32, annual_income: f64) -> Allocation {
    let stock = (100.0 - age as f64).max(20.0);
    match IncomeCategory::classify(annual_income) {
        IncomeCategory::Low => Allocation {
            cash: 10.0,
            stocks: (stock * 0.6).max(25.0),
            bonds: (100.0 - stock).min(25.0),
            real_estate: 5.0,
            emergency_fund: 35.0,
        },
        IncomeCategory::Medium => Allocation {
            cash: 5.0,
            stocks: (stock * 0.6).max(30.0),
            bonds: (100.0 - stock).min(20.0),
            real_estate: 15.0,
            emergency_fund: 20.0,
        },
        IncomeCategory::High => Allocation {
            cash: 5.0,
            stocks: (stock * 0.5).max(25.0),
            bonds: (100.0 - stock).min(15.0),
            real_estate: 20.0,
            emergency_fund: 15.0,
        },
    }
}

/// Convert current holdings (any unit) into rounded percent shares
pub fn normalize_current(cash: f64, stocks: f64, bonds: f64, real_estate: f64) -> Allocation {
    let [cash, stocks, bonds, real_estate] = [cash, stocks, bonds, real_estate].map(|v| v.max(0.0));
    let sum = cash + stocks + bonds + real_estate;
    if sum <= 0.0 {
        return Allocation::default();
    }
    let pct = |v: f64| (v / sum * 100.0).round();
    Allocation {
        cash: pct(cash),
        stocks: pct(stocks),
        bonds: pct(bonds),
        real_estate: pct(real_estate),
        emergency_fund: 0.0,
    }
}

pub fn allocation_gaps(current: &Allocation, target: &Allocation) -> Vec<AllocationGap> {
    [
        ("Cash", current.cash - target.cash),
        ("Stocks", current.stocks - target.stocks),
        ("Bonds", current.bonds - target.bonds),
        ("RE/REITs", current.real_estate - target.real_estate),
    ]
    .into_iter()
    .map(|(asset, gap)| AllocationGap {
        asset: asset.to_string(),
        gap,
    })
    .collect()
}

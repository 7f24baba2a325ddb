//! Fixed-rate amortization and debt payoff simulation

use serde::{Deserialize, Serialize};

/// Default amortization term (10 years)
pub const DEFAULT_TERM_MONTHS: u32 = 120;

/// Monthly payment that retires `principal` over `term_months` at a fixed annual rate.
///
/// Returns 0 when there is nothing to repay. At a zero rate the balance is
/// retired straight-line (`principal / n`).
pub fn monthly_payment(principal: f64, annual_rate_percent: f64, term_months: u32) -> f64 {
    if principal <= 0.0 || term_months == 0 {
        return 0.0;
    }
    let n = term_months as f64;
    let r = annual_rate_percent / 100.0 / 12.0;
    if r == 0.0 {
        return principal / n;
    }
    let growth = (1.0 + r).powf(n);
    principal * r * growth / (growth - 1.0)
}

/// Year-end balances when paying `min_payment + extra_monthly` each month.
///
/// Element 0 is the starting balance; one element follows per simulated year.
/// Once the balance reaches zero it stays there.
pub fn simulate_debt_payoff(
    balance: f64,
    annual_rate_percent: f64,
    min_payment: f64,
    extra_monthly: f64,
    horizon_years: u32,
) -> Vec<f64> {
    let r = annual_rate_percent / 100.0 / 12.0;
    let payment = min_payment + extra_monthly;
    let mut current = balance.max(0.0);
    let mut balances = Vec::with_capacity(horizon_years as usize + 1);
    balances.push(current);

    for _ in 0..horizon_years {
        for _ in 0..12 {
            if current <= 0.0 {
                break;
            }
            current = (current * (1.0 + r) - payment).max(0.0);
        }
        balances.push(current);
    }

    balances
}

/// A named payoff trajectory (minimum payment or minimum plus an extra)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffScenario {
    pub label: String,
    pub extra_monthly: f64,
    /// Year-end balances rounded to whole currency units, starting at year 0
    pub balances: Vec<f64>,
}

impl PayoffScenario {
    /// First simulated year at which the balance is zero
    pub fn payoff_year(&self) -> Option<usize> {
        self.balances.iter().position(|b| *b <= 0.0)
    }
}

/// Minimum-payment trajectory followed by one trajectory per extra payment
pub fn payoff_scenarios(
    total_debt: f64,
    annual_rate_percent: f64,
    term_months: u32,
    extras: &[f64],
    horizon_years: u32,
) -> Vec<PayoffScenario> {
    let min_payment = monthly_payment(total_debt, annual_rate_percent, term_months);
    std::iter::once(0.0)
        .chain(extras.iter().copied())
        .map(|extra| {
            let label = if extra == 0.0 {
                "Minimum".to_string()
            } else {
                format!("+${:.0}/mo", extra)
            };
            let balances = simulate_debt_payoff(
                total_debt,
                annual_rate_percent,
                min_payment,
                extra,
                horizon_years,
            )
            .into_iter()
            .map(f64::round)
            .collect();
            PayoffScenario {
                label,
                extra_monthly: extra,
                balances,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_payment_reference_value() {
        let payment = monthly_payment(28_000.0, 5.5, DEFAULT_TERM_MONTHS);
        assert!((payment - 303.87).abs() < 0.01, "got {}", payment);
    }

    #[test]
    fn test_monthly_payment_no_debt() {
        assert_eq!(monthly_payment(0.0, 5.5, 120), 0.0);
        assert_eq!(monthly_payment(-10.0, 5.5, 120), 0.0);
    }

    #[test]
    fn test_monthly_payment_zero_rate_is_straight_line() {
        assert_eq!(monthly_payment(12_000.0, 0.0, 120), 100.0);
    }

    #[test]
    fn test_payment_retires_balance_within_term() {
        for (principal, rate, term) in [(28_000.0, 5.5, 120), (5_000.0, 19.9, 36), (250_000.0, 6.8, 360)] {
            let payment = monthly_payment(principal, rate, term);
            let r = rate / 100.0 / 12.0;
            let mut balance = principal;
            for _ in 0..term {
                balance = balance * (1.0 + r) - payment;
            }
            assert!(balance <= 1e-6, "balance {} left for {}", balance, principal);
        }
    }

    #[test]
    fn test_simulation_starts_with_balance_and_floors_at_zero() {
        let payment = monthly_payment(10_000.0, 6.0, 24);
        let balances = simulate_debt_payoff(10_000.0, 6.0, payment, 0.0, 4);
        assert_eq!(balances.len(), 5);
        assert_eq!(balances[0], 10_000.0);
        assert!(balances[1] < balances[0]);
        assert!(balances[2].abs() < 1e-6);
        assert_eq!(balances[3], 0.0);
        assert_eq!(balances[4], 0.0);
    }

    #[test]
    fn test_extra_payment_pays_off_sooner() {
        let scenarios = payoff_scenarios(28_000.0, 5.5, 120, &[200.0, 500.0], 10);
        assert_eq!(scenarios.len(), 3);
        assert_eq!(scenarios[0].label, "Minimum");
        assert_eq!(scenarios[1].label, "+$200/mo");
        let min_year = scenarios[0].payoff_year().unwrap_or(usize::MAX);
        let extra_year = scenarios[2].payoff_year().expect("pays off");
        assert!(extra_year < min_year);
        for scenario in &scenarios {
            assert!(scenario.balances.windows(2).all(|w| w[1] <= w[0]));
        }
    }

    #[test]
    fn test_simulation_is_pure() {
        let a = simulate_debt_payoff(5_000.0, 12.0, 150.0, 50.0, 5);
        let b = simulate_debt_payoff(5_000.0, 12.0, 150.0, 50.0, 5);
        assert_eq!(a, b);
    }
}

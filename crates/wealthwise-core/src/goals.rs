//! Goal completion solver and the name-keyed goal book

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::growth::future_value;
use crate::models::Goal;

/// Annual rate assumed for goal savings
pub const DEFAULT_GOAL_RATE: f64 = 0.05;

/// Search ceiling in months (50 years)
pub const MAX_GOAL_MONTHS: u32 = 600;

/// Months until a goal is met, or `Unreachable`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "months")]
pub enum GoalEta {
    Months(u32),
    Unreachable,
}

impl GoalEta {
    pub fn months(&self) -> Option<u32> {
        match self {
            Self::Months(n) => Some(*n),
            Self::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Months(_))
    }
}

impl std::fmt::Display for GoalEta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Months(n) => write!(f, "{}y {}m", n / 12, n % 12),
            Self::Unreachable => write!(f, "—"),
        }
    }
}

/// Balance after `months` months of monthly compounding with contributions
pub fn goal_balance(saved: f64, monthly_contribution: f64, annual_rate: f64, months: u32) -> f64 {
    future_value(saved, monthly_contribution, annual_rate / 12.0, months as f64)
}

/// Smallest month count at which savings reach `target`.
///
/// Negative or non-finite rates are rejected: the balance must be
/// non-decreasing in the month count for the binary search to hold.
pub fn time_to_goal(
    target: f64,
    saved: f64,
    monthly_contribution: f64,
    annual_rate: f64,
) -> Result<GoalEta> {
    if !annual_rate.is_finite() || annual_rate < 0.0 {
        debug!("Rejected goal rate {}", annual_rate);
        return Err(Error::DegenerateRate(format!(
            "goal rate must be a non-negative number, got {}",
            annual_rate
        )));
    }
    if saved >= target {
        return Ok(GoalEta::Months(0));
    }
    if monthly_contribution <= 0.0 {
        return Ok(GoalEta::Unreachable);
    }
    if goal_balance(saved, monthly_contribution, annual_rate, MAX_GOAL_MONTHS) < target {
        debug!(target, saved, monthly_contribution, "Goal not reachable within search horizon");
        return Ok(GoalEta::Unreachable);
    }

    let (mut lo, mut hi) = (0u32, MAX_GOAL_MONTHS);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if goal_balance(saved, monthly_contribution, annual_rate, mid) >= target {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    Ok(GoalEta::Months(lo))
}

/// Progress record for one goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub name: String,
    pub target: f64,
    pub saved: f64,
    pub monthly_contribution: f64,
    /// Whole percent, capped at 100
    pub percent_complete: u32,
    pub eta: GoalEta,
}

/// Ordered, name-keyed list of goals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalBook {
    goals: Vec<Goal>,
}

impl GoalBook {
    pub fn new(goals: Vec<Goal>) -> Self {
        Self { goals }
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn get(&self, name: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.name == name)
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Insert a goal or replace the one with the same name in place
    pub fn upsert(&mut self, mut goal: Goal) -> Result<()> {
        goal.name = goal.name.trim().to_string();
        if goal.name.is_empty() {
            return Err(Error::InvalidData("goal name is required".into()));
        }
        if goal.target.is_nan() || goal.target <= 0.0 {
            return Err(Error::InvalidData(format!(
                "goal '{}' needs a positive target",
                goal.name
            )));
        }
        goal.saved = goal.saved.max(0.0);
        goal.monthly_contribution = goal.monthly_contribution.max(0.0);

        match self.goals.iter_mut().find(|g| g.name == goal.name) {
            Some(existing) => *existing = goal,
            None => self.goals.push(goal),
        }
        Ok(())
    }

    /// Progress for every goal, in list order
    pub fn progress(&self) -> Result<Vec<GoalProgress>> {
        self.goals
            .iter()
            .map(|g| {
                let eta = time_to_goal(g.target, g.saved, g.monthly_contribution, DEFAULT_GOAL_RATE)?;
                let percent = ((g.saved / g.target) * 100.0).round().clamp(0.0, 100.0) as u32;
                Ok(GoalProgress {
                    name: g.name.clone(),
                    target: g.target,
                    saved: g.saved,
                    monthly_contribution: g.monthly_contribution,
                    percent_complete: percent,
                    eta,
                })
            })
            .collect()
    }

    pub fn into_inner(self) -> Vec<Goal> {
        self.goals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_met() {
        assert_eq!(time_to_goal(1000.0, 1000.0, 0.0, 0.05).unwrap(), GoalEta::Months(0));
        assert_eq!(time_to_goal(1000.0, 1500.0, 10.0, 0.05).unwrap(), GoalEta::Months(0));
    }

    #[test]
    fn test_no_contribution_is_unreachable() {
        assert_eq!(time_to_goal(1000.0, 0.0, 0.0, 0.05).unwrap(), GoalEta::Unreachable);
        assert_eq!(time_to_goal(1000.0, 10.0, -5.0, 0.05).unwrap(), GoalEta::Unreachable);
    }

    #[test]
    fn test_beyond_horizon_is_unreachable() {
        let eta = time_to_goal(10_000_000.0, 0.0, 10.0, 0.0).unwrap();
        assert_eq!(eta, GoalEta::Unreachable);
        assert_eq!(eta.months(), None);
    }

    #[test]
    fn test_zero_rate_is_linear() {
        assert_eq!(time_to_goal(1_000.0, 100.0, 100.0, 0.0).unwrap(), GoalEta::Months(9));
    }

    #[test]
    fn test_negative_rate_rejected() {
        assert!(matches!(
            time_to_goal(1_000.0, 0.0, 100.0, -0.01),
            Err(Error::DegenerateRate(_))
        ));
        assert!(time_to_goal(1_000.0, 0.0, 100.0, f64::NAN).is_err());
    }

    #[test]
    fn test_result_straddles_target() {
        let n = time_to_goal(10_000.0, 2_000.0, 300.0, 0.05)
            .unwrap()
            .months()
            .expect("reachable");
        assert!(goal_balance(2_000.0, 300.0, 0.05, n) >= 10_000.0);
        assert!(goal_balance(2_000.0, 300.0, 0.05, n - 1) < 10_000.0);
    }

    #[test]
    fn test_monotone_in_contribution_and_saved() {
        let mut last = u32::MAX;
        for monthly in [50.0, 100.0, 200.0, 400.0, 800.0] {
            let n = time_to_goal(20_000.0, 1_000.0, monthly, 0.05).unwrap().months().unwrap();
            assert!(n <= last);
            last = n;
        }
        let mut last = u32::MAX;
        for saved in [0.0, 1_000.0, 5_000.0, 15_000.0, 25_000.0] {
            let n = time_to_goal(20_000.0, saved, 250.0, 0.05).unwrap().months().unwrap();
            assert!(n <= last);
            last = n;
        }
    }

    #[test]
    fn test_eta_display() {
        assert_eq!(GoalEta::Months(27).to_string(), "2y 3m");
        assert_eq!(GoalEta::Unreachable.to_string(), "—");
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut book = GoalBook::default();
        book.upsert(Goal::new("House", 50_000.0, 5_000.0, 500.0)).unwrap();
        book.upsert(Goal::new("Car", 20_000.0, 0.0, 300.0)).unwrap();
        book.upsert(Goal::new(" House ", 60_000.0, 6_000.0, 600.0)).unwrap();

        assert_eq!(book.len(), 2);
        assert_eq!(book.goals()[0].name, "House");
        assert_eq!(book.goals()[0].target, 60_000.0);
        assert_eq!(book.goals()[1].name, "Car");
    }

    #[test]
    fn test_upsert_validates() {
        let mut book = GoalBook::default();
        assert!(book.upsert(Goal::new("  ", 100.0, 0.0, 0.0)).is_err());
        assert!(book.upsert(Goal::new("Trip", 0.0, 0.0, 0.0)).is_err());
        assert!(book.is_empty());
    }

    #[test]
    fn test_progress_caps_percent() {
        let book = GoalBook::new(vec![
            Goal::new("Done", 1_000.0, 1_500.0, 0.0),
            Goal::new("Stalled", 1_000.0, 250.0, 0.0),
        ]);
        let progress = book.progress().unwrap();
        assert_eq!(progress[0].percent_complete, 100);
        assert_eq!(progress[0].eta, GoalEta::Months(0));
        assert_eq!(progress[1].percent_complete, 25);
        assert_eq!(progress[1].eta, GoalEta::Unreachable);
    }
}

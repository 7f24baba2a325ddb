//! Rule-based recommendations and the weighted financial health score
//!
//! Classification thresholds are fixed. Recommendation triggers are an ordered
//! list evaluated top to bottom; every rule that fires contributes one record
//! and no rule suppresses another.

use serde::{Deserialize, Serialize};

use crate::models::{format_currency_cents, Priority, Profile, Recommendation};

/// Income band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeCategory {
    Low,
    Medium,
    High,
}

impl IncomeCategory {
    pub fn classify(annual_income: f64) -> Self {
        if annual_income < 50_000.0 {
            Self::Low
        } else if annual_income < 100_000.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    fn base_save_rate(&self) -> f64 {
        match self {
            Self::Low => 0.10,
            Self::Medium => 0.15,
            Self::High => 0.20,
        }
    }
}

impl std::fmt::Display for IncomeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Life-stage band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgeGroup {
    Young,
    EarlyCareer,
    MidCareer,
    PreRetirement,
    Retirement,
}

impl AgeGroup {
    pub fn classify(age: u32) -> Self {
        match age {
            0..=24 => Self::Young,
            25..=34 => Self::EarlyCareer,
            35..=49 => Self::MidCareer,
            50..=64 => Self::PreRetirement,
            _ => Self::Retirement,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Young => "young",
            Self::EarlyCareer => "early-career",
            Self::MidCareer => "mid-career",
            Self::PreRetirement => "pre-retirement",
            Self::Retirement => "retirement",
        }
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Floor for any recommended savings rate
pub const MIN_RECOMMENDED_SAVE_RATE: f64 = 0.05;

/// Recommended savings rate for an income band, age band and debt load
pub fn recommended_save_rate(income: IncomeCategory, age: AgeGroup, dti: f64) -> f64 {
    let mut rate = income.base_save_rate();
    match age {
        AgeGroup::Young => rate += 0.02,
        AgeGroup::PreRetirement => rate += 0.05,
        _ => {}
    }
    if dti > 0.30 {
        rate -= 0.05;
    }
    if dti > 0.50 {
        rate -= 0.05;
    }
    rate.max(MIN_RECOMMENDED_SAVE_RATE)
}

/// Everything the recommendation rules look at
#[derive(Debug, Clone, Copy)]
pub struct RecommendationContext<'a> {
    pub profile: &'a Profile,
    /// Debt-to-income as a ratio
    pub dti: f64,
    pub recommended_save_rate: f64,
    pub user_save_rate: f64,
}

/// A named trigger; `evaluate` returns a record when the rule fires
pub struct RecommendationRule {
    pub name: &'static str,
    pub evaluate: fn(&RecommendationContext<'_>) -> Option<Recommendation>,
}

/// Trigger rules in display-priority order
pub const RECOMMENDATION_RULES: &[RecommendationRule] = &[
    RecommendationRule {
        name: "high_dti",
        evaluate: high_dti,
    },
    RecommendationRule {
        name: "emergency_fund",
        evaluate: emergency_fund,
    },
    RecommendationRule {
        name: "credit_score",
        evaluate: credit_score,
    },
    RecommendationRule {
        name: "student_loans",
        evaluate: student_loans,
    },
    RecommendationRule {
        name: "savings_rate",
        evaluate: savings_rate,
    },
];

fn high_dti(ctx: &RecommendationContext<'_>) -> Option<Recommendation> {
    (ctx.dti > 0.40).then(|| {
        Recommendation::new(
            Priority::High,
            "High Debt-to-Income",
            format!(
                "DTI {:.1}%, target < 30%. Consider consolidation/refi or +$200-$500/mo extra debt payments.",
                ctx.dti * 100.0
            ),
        )
    })
}

fn emergency_fund(ctx: &RecommendationContext<'_>) -> Option<Recommendation> {
    let target = ctx.profile.emergency_fund_target();
    (ctx.profile.current_money < target).then(|| {
        Recommendation::new(
            Priority::High,
            "Build Emergency Fund",
            format!(
                "You need ~{} more to reach 6 months. Move surplus to HYSA.",
                format_currency_cents(target - ctx.profile.current_money)
            ),
        )
    })
}

fn credit_score(ctx: &RecommendationContext<'_>) -> Option<Recommendation> {
    (ctx.profile.credit_score < 670).then(|| {
        Recommendation::new(
            Priority::High,
            "Boost Credit Score",
            "Focus on on-time payments & <30% utilization. 50-100pt gain can lower APRs materially.",
        )
    })
}

fn student_loans(ctx: &RecommendationContext<'_>) -> Option<Recommendation> {
    (ctx.profile.student_loans > ctx.profile.annual_income * 0.5).then(|| {
        Recommendation::new(
            Priority::Medium,
            "Student Loan Optimization",
            "Check IDR/PSLF options or refinance if stable income & high score.",
        )
    })
}

// Always fires, so callers never reach a "no issues" fallback.
fn savings_rate(ctx: &RecommendationContext<'_>) -> Option<Recommendation> {
    Some(Recommendation::new(
        Priority::Medium,
        "Savings Rate",
        format!(
            "Aim ≥ {:.0}% (you set {:.0}%).",
            ctx.recommended_save_rate * 100.0,
            ctx.user_save_rate * 100.0
        ),
    ))
}

/// Evaluate every rule in order and collect those that fire
pub fn build_recommendations(ctx: &RecommendationContext<'_>) -> Vec<Recommendation> {
    RECOMMENDATION_RULES
        .iter()
        .filter_map(|rule| {
            let rec = (rule.evaluate)(ctx);
            if rec.is_some() {
                tracing::debug!(rule = rule.name, "Recommendation rule fired");
            }
            rec
        })
        .collect()
}

pub const SAVINGS_WEIGHT: f64 = 0.35;
pub const DEBT_WEIGHT: f64 = 0.25;
pub const NET_WORTH_WEIGHT: f64 = 0.20;
pub const CREDIT_WEIGHT: f64 = 0.20;

/// Normalized sub-scores behind a health score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthComponents {
    /// 0..1
    pub savings: f64,
    /// 0..1, higher means less debt
    pub debt: f64,
    /// -1..1, negative when net worth is negative
    pub net_worth: f64,
    /// 0..1
    pub credit: f64,
}

impl HealthComponents {
    pub fn compute(save_rate: f64, dti: f64, net_worth: f64, age: u32, credit_score: u32) -> Self {
        Self {
            savings: save_rate.clamp(0.0, 0.40) / 0.40,
            debt: 1.0 - dti.clamp(0.0, 0.60) / 0.60,
            net_worth: (net_worth / (age as f64 * 10_000.0 + 1.0)).tanh(),
            credit: ((credit_score as f64 - 300.0) / 550.0).clamp(0.0, 1.0),
        }
    }

    pub fn weighted_sum(&self) -> f64 {
        self.savings * SAVINGS_WEIGHT
            + self.debt * DEBT_WEIGHT
            + self.net_worth * NET_WORTH_WEIGHT
            + self.credit * CREDIT_WEIGHT
    }

    /// Weighted sum on the 0-100 scale, rounded
    pub fn score(&self) -> i32 {
        (self.weighted_sum() * 100.0).round() as i32
    }
}

/// Composite 0-100 health score.
///
/// The total is not clamped: a strongly negative net worth can pull it below 0.
pub fn health_score(save_rate: f64, dti: f64, net_worth: f64, age: u32, credit_score: u32) -> i32 {
    HealthComponents::compute(save_rate, dti, net_worth, age, credit_score).score()
}

/// Score plus the badges shown next to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub score: i32,
    pub components: HealthComponents,
    pub badges: Vec<String>,
}

impl HealthReport {
    pub fn compute(save_rate: f64, dti: f64, net_worth: f64, age: u32, credit_score: u32) -> Self {
        let components = HealthComponents::compute(save_rate, dti, net_worth, age, credit_score);
        let score = components.score();
        Self {
            score,
            components,
            badges: badges(score, save_rate),
        }
    }
}

/// Badge labels for a score and the user's savings rate
pub fn badges(score: i32, user_save_rate: f64) -> Vec<String> {
    let mut out = Vec::new();
    if score >= 80 {
        out.push("Excellent".to_string());
    }
    if score >= 60 {
        out.push("On Track".to_string());
    } else {
        out.push("Improve".to_string());
    }
    if user_save_rate >= 0.20 {
        out.push("Saver 20%".to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            age: 28,
            credit_score: 720,
            annual_income: 75_000.0,
            current_money: 12_000.0,
            asset_value: 35_000.0,
            total_debt: 28_000.0,
            student_loans: 18_000.0,
            debt_interest_rate: 5.5,
        }
    }

    #[test]
    fn test_income_category_thresholds() {
        assert_eq!(IncomeCategory::classify(49_999.99), IncomeCategory::Low);
        assert_eq!(IncomeCategory::classify(50_000.0), IncomeCategory::Medium);
        assert_eq!(IncomeCategory::classify(99_999.0), IncomeCategory::Medium);
        assert_eq!(IncomeCategory::classify(100_000.0), IncomeCategory::High);
    }

    #[test]
    fn test_age_group_thresholds() {
        assert_eq!(AgeGroup::classify(24), AgeGroup::Young);
        assert_eq!(AgeGroup::classify(25), AgeGroup::EarlyCareer);
        assert_eq!(AgeGroup::classify(35), AgeGroup::MidCareer);
        assert_eq!(AgeGroup::classify(50), AgeGroup::PreRetirement);
        assert_eq!(AgeGroup::classify(65), AgeGroup::Retirement);
        assert_eq!(AgeGroup::PreRetirement.to_string(), "pre-retirement");
    }

    #[test]
    fn test_recommended_save_rate_adjustments() {
        let r = recommended_save_rate(IncomeCategory::Medium, AgeGroup::Young, 0.1);
        assert!((r - 0.17).abs() < 1e-12);
        let r = recommended_save_rate(IncomeCategory::High, AgeGroup::PreRetirement, 0.35);
        assert!((r - 0.20).abs() < 1e-12);
        // Both debt penalties stack
        let r = recommended_save_rate(IncomeCategory::Medium, AgeGroup::MidCareer, 0.55);
        assert!((r - 0.05).abs() < 1e-12);
        // Floor
        let r = recommended_save_rate(IncomeCategory::Low, AgeGroup::Retirement, 0.9);
        assert_eq!(r, MIN_RECOMMENDED_SAVE_RATE);
    }

    #[test]
    fn test_all_rules_fire_in_order() {
        let profile = Profile {
            credit_score: 600,
            current_money: 1_000.0,
            student_loans: 60_000.0,
            ..profile()
        };
        let ctx = RecommendationContext {
            profile: &profile,
            dti: 0.45,
            recommended_save_rate: 0.10,
            user_save_rate: 0.15,
        };
        let recs = build_recommendations(&ctx);
        let titles: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "High Debt-to-Income",
                "Build Emergency Fund",
                "Boost Credit Score",
                "Student Loan Optimization",
                "Savings Rate",
            ]
        );
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[3].priority, Priority::Medium);
        assert!(recs[1].body.contains("$36,500"));
    }

    #[test]
    fn test_emergency_gap_keeps_cents() {
        let profile = Profile {
            annual_income: 75_001.0,
            current_money: 1_000.0,
            ..profile()
        };
        let ctx = RecommendationContext {
            profile: &profile,
            dti: 0.05,
            recommended_save_rate: 0.10,
            user_save_rate: 0.15,
        };
        let recs = build_recommendations(&ctx);
        let gap = recs.iter().find(|r| r.title == "Build Emergency Fund").unwrap();
        assert!(gap.body.contains("$36,500.50"));
    }

    #[test]
    fn test_savings_note_always_present() {
        let profile = Profile {
            current_money: 100_000.0,
            student_loans: 0.0,
            ..profile()
        };
        let ctx = RecommendationContext {
            profile: &profile,
            dti: 0.05,
            recommended_save_rate: 0.15,
            user_save_rate: 0.15,
        };
        let recs = build_recommendations(&ctx);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].title, "Savings Rate");
        assert_eq!(recs[0].body, "Aim ≥ 15% (you set 15%).");
    }

    #[test]
    fn test_weights_sum_to_one() {
        let total = SAVINGS_WEIGHT + DEBT_WEIGHT + NET_WORTH_WEIGHT + CREDIT_WEIGHT;
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_profile_approaches_100() {
        assert_eq!(health_score(0.40, 0.0, 1e12, 30, 850), 100);
    }

    #[test]
    fn test_negative_net_worth_is_not_clamped() {
        let score = health_score(0.0, 0.60, -1e9, 30, 300);
        assert_eq!(score, -20);
    }

    #[test]
    fn test_health_report_badges() {
        let report = HealthReport::compute(0.25, 0.05, 19_000.0, 28, 720);
        assert_eq!(report.score, health_score(0.25, 0.05, 19_000.0, 28, 720));
        assert_eq!(report.score, report.components.score());
        assert!(report.badges.contains(&"On Track".to_string()));
        assert!(report.badges.contains(&"Saver 20%".to_string()));

        assert_eq!(badges(85, 0.1), vec!["Excellent", "On Track"]);
        assert_eq!(badges(40, 0.1), vec!["Improve"]);
    }
}

//! Full plan computation: one pass from profile and settings to every
//! figure the dashboard shows.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::amortization::{monthly_payment, payoff_scenarios, PayoffScenario, DEFAULT_TERM_MONTHS};
use crate::benchmarks::{self, BenchmarkComparison};
use crate::error::{Error, Result};
use crate::growth::{effective_return, project, GrowthProjection, DEFAULT_HORIZONS};
use crate::models::{budget_breakdown, format_currency, BudgetRow, Profile, Recommendation, Settings, SummaryCard};
use crate::recommendations::{
    build_recommendations, recommended_save_rate, AgeGroup, HealthReport, IncomeCategory,
    RecommendationContext,
};

/// Contribution floor used for growth projection, whatever the user's rate
pub const MIN_CONTRIBUTION_RATE: f64 = 0.05;

/// Tunables for a plan run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanOptions {
    pub horizons: Vec<u32>,
    pub debt_term_months: u32,
    pub debt_horizon_years: u32,
    /// Extra monthly payments simulated alongside the minimum
    pub extra_payments: Vec<f64>,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            horizons: DEFAULT_HORIZONS.to_vec(),
            debt_term_months: DEFAULT_TERM_MONTHS,
            debt_horizon_years: 10,
            extra_payments: vec![200.0, 500.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    pub monthly_income: f64,
    pub net_worth: f64,
    pub monthly_debt_payment: f64,
    /// Debt-to-income as a ratio
    pub dti: f64,
    pub income_category: IncomeCategory,
    pub age_group: AgeGroup,
    pub recommended_save_rate: f64,
    pub user_save_rate: f64,
    /// Expected return after sensitivity and clamping
    pub effective_return: f64,
    pub annual_contribution: f64,
    pub summary: Vec<SummaryCard>,
    pub growth: GrowthProjection,
    pub debt_scenarios: Vec<PayoffScenario>,
    pub benchmarks: BenchmarkComparison,
    pub recommendations: Vec<Recommendation>,
    pub budget: Vec<BudgetRow>,
    pub health: HealthReport,
}

pub fn compute_plan(profile: &Profile, settings: &Settings, options: &PlanOptions) -> Result<PlanReport> {
    if profile.annual_income <= 0.0 {
        debug!("Plan rejected: annual income is {}", profile.annual_income);
        return Err(Error::MissingRequiredInput(
            "annual income must be greater than zero".into(),
        ));
    }

    let monthly_income = profile.monthly_income();
    let net_worth = profile.net_worth();
    let payment = monthly_payment(
        profile.total_debt,
        profile.debt_interest_rate,
        options.debt_term_months,
    );
    let dti = payment * 12.0 / profile.annual_income;

    let income_category = IncomeCategory::classify(profile.annual_income);
    let age_group = AgeGroup::classify(profile.age);
    let rec_rate = recommended_save_rate(income_category, age_group, dti);
    let user_rate = settings.save_rate;
    let annual_return = effective_return(settings.expected_return, settings.sensitivity);
    let annual_contribution = profile.annual_income * user_rate.max(MIN_CONTRIBUTION_RATE);

    debug!(
        dti,
        annual_return,
        income = %income_category,
        age = %age_group,
        "Plan inputs resolved"
    );

    let summary = vec![
        SummaryCard::new("Net Worth", format_currency(net_worth)),
        SummaryCard::new(
            "Emergency Fund Goal",
            format_currency(profile.emergency_fund_target()),
        ),
        SummaryCard::new("Debt/Income (DTI)", format!("{:.1}%", dti * 100.0)),
        SummaryCard::new("Recommended Savings Rate", format!("{:.0}%", rec_rate * 100.0)),
        SummaryCard::new("Your Savings Rate", format!("{:.0}%", user_rate * 100.0)),
        SummaryCard::new(
            "Monthly Target Savings",
            format_currency(annual_contribution / 12.0),
        ),
    ];

    let growth = project(
        net_worth,
        annual_contribution,
        annual_return,
        settings.inflation,
        &options.horizons,
    );
    let debt_scenarios = payoff_scenarios(
        profile.total_debt,
        profile.debt_interest_rate,
        options.debt_term_months,
        &options.extra_payments,
        options.debt_horizon_years,
    );

    let recommendations = build_recommendations(&RecommendationContext {
        profile,
        dti,
        recommended_save_rate: rec_rate,
        user_save_rate: user_rate,
    });
    let health = HealthReport::compute(user_rate, dti, net_worth, profile.age, profile.credit_score);

    info!(
        "Plan computed: score {}, {} recommendations",
        health.score,
        recommendations.len()
    );

    Ok(PlanReport {
        monthly_income,
        net_worth,
        monthly_debt_payment: payment,
        dti,
        income_category,
        age_group,
        recommended_save_rate: rec_rate,
        user_save_rate: user_rate,
        effective_return: annual_return,
        annual_contribution,
        summary,
        growth,
        debt_scenarios,
        benchmarks: benchmarks::compare(profile, user_rate, dti),
        recommendations,
        budget: budget_breakdown(profile.annual_income, user_rate),
        health,
    })
}

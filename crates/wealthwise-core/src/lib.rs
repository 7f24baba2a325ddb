//! WealthWise Core Library
//!
//! Deterministic projection and spend-classification engine:
//! - Amortization and debt payoff simulation
//! - Compound-growth projection (nominal and inflation-adjusted)
//! - Goal completion-time solver and goal book
//! - Rule-based recommendations, health score and benchmarks
//! - Transaction categorization, aggregation and CSV ingestion
//! - Asset allocation targets
//! - Plan state persistence behind a pluggable repository
//!
//! Every computation is a pure function of its inputs. Reading files, clocks
//! and the network is left to the caller.

pub mod allocation;
pub mod amortization;
pub mod benchmarks;
pub mod error;
pub mod goals;
pub mod growth;
pub mod import;
pub mod inputs;
pub mod models;
pub mod plan;
pub mod recommendations;
pub mod spend;
pub mod state;

pub use allocation::{allocation_gaps, normalize_current, target_allocation, Allocation, AllocationGap};
pub use amortization::{monthly_payment, payoff_scenarios, simulate_debt_payoff, PayoffScenario};
pub use benchmarks::{BenchmarkAxis, BenchmarkComparison};
pub use error::{Error, Result};
pub use goals::{time_to_goal, GoalBook, GoalEta, GoalProgress};
pub use growth::{effective_return, project, GrowthPoint, GrowthProjection};
pub use inputs::{LenientNumber, ProfileInput, SettingsInput};
pub use models::{
    BudgetRow, Goal, Priority, Profile, Recommendation, Sensitivity, Settings, SummaryCard,
    Transaction, TransactionRecord,
};
pub use plan::{compute_plan, PlanOptions, PlanReport};
pub use recommendations::{
    build_recommendations, health_score, recommended_save_rate, AgeGroup, HealthReport,
    IncomeCategory,
};
pub use spend::{aggregate, categorize, detect_merchant, normalize_date, Category, Drilldown, SpendAnalysis};
pub use state::{HealthSnapshot, MemoryStateRepository, PlanState, StateRepository, Streak};

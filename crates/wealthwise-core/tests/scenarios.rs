//! End-to-end scenarios for wealthwise-core
//!
//! These tests drive the public API the way a front end does: lenient form
//! input in, plan report and spend analysis out, state threaded through a
//! repository.

use chrono::NaiveDate;
use wealthwise_core::{
    aggregate, compute_plan,
    import::parse_transactions,
    models::Goal,
    spend::{Category, DEFAULT_DRILLDOWN_LIMIT},
    GoalEta, HealthSnapshot, MemoryStateRepository, PlanOptions, PlanState, ProfileInput,
    SettingsInput, StateRepository,
};

fn reference_profile_json() -> &'static str {
    r#"{
        "age": 28,
        "creditScore": 720,
        "annualIncome": "75000",
        "currentMoney": 12000,
        "assetValue": 35000,
        "totalDebt": 28000,
        "studentLoans": 18000,
        "debtInterestRate": 5.5
    }"#
}

fn statement_csv() -> &'static str {
    r#"Date,Description,Amount
2024-01-02,Starbucks Coffee,-6.50
2024-01-03,Netflix,-15.99
2024-01-05,Joe's Pizza Restaurant,-120.00
2024-01-18,Amazon Marketplace,-64.20
01/21/2024,Uber trip,-18.40
2024-02-02,Whole Foods,-95.10
2024-02-10,Chevron,-48.00
,Comcast Internet,-79.99
2024-02-15,Refund,0
"#
}

// =============================================================================
// Plan
// =============================================================================

#[test]
fn test_reference_profile_plan() {
    let input: ProfileInput = serde_json::from_str(reference_profile_json()).unwrap();
    let profile = input.resolve().expect("income present");
    let settings = SettingsInput::default().resolve();

    let report = compute_plan(&profile, &settings, &PlanOptions::default()).unwrap();

    assert_eq!(report.net_worth, 19_000.0);
    assert!((report.monthly_debt_payment - 303.87).abs() < 0.01);
    assert!((report.dti - 0.0486).abs() < 0.0001);
    assert!(report.health.score > 0 && report.health.score <= 100);

    // Growth from a positive net worth never loses value in nominal terms
    let nominal: Vec<f64> = report.growth.points.iter().map(|p| p.nominal).collect();
    assert!(nominal.windows(2).all(|w| w[1] >= w[0]));

    // Larger extra payments never leave a larger balance
    let last = |i: usize| *report.debt_scenarios[i].balances.last().unwrap();
    assert!(last(2) <= last(1) && last(1) <= last(0));
}

#[test]
fn test_missing_income_blocks_plan() {
    let input: ProfileInput = serde_json::from_str(r#"{"age": 40, "annualIncome": ""}"#).unwrap();
    assert!(input.resolve().is_err());
}

// =============================================================================
// Spend
// =============================================================================

#[test]
fn test_statement_import_and_analysis() {
    let records = parse_transactions(statement_csv().as_bytes()).unwrap();
    assert_eq!(records.len(), 9);

    let analysis = aggregate(&records);
    assert_eq!(analysis.skipped, 1);
    assert_eq!(analysis.undated, 1);

    let sum: f64 = analysis.totals.values().sum();
    assert!((sum - analysis.total).abs() < 1e-9);
    assert_eq!(analysis.totals[&Category::Utilities], 79.99);
    assert_eq!(analysis.totals[&Category::DiningOut], 120.0);
    assert!(analysis.insights.is_empty());

    let months: Vec<String> = analysis.monthly_spend().into_keys().collect();
    assert_eq!(months, vec!["2024-01", "2024-02"]);

    let (top, amount) = analysis.top_category().unwrap();
    assert_eq!(top, Category::DiningOut);
    assert_eq!(amount, 120.0);

    let drill = analysis.drilldown(Category::GasTransport, DEFAULT_DRILLDOWN_LIMIT);
    assert_eq!(drill.top_merchants, vec![("Uber".to_string(), 18.4)]);
    assert_eq!(drill.largest_transactions[0].description, "Chevron");
}

#[test]
fn test_two_transaction_example() {
    let csv = "Description,Amount\nStarbucks Coffee,6.5\nNetflix,15.99\n";
    let analysis = aggregate(&parse_transactions(csv.as_bytes()).unwrap());
    assert_eq!(analysis.totals[&Category::CoffeeBeverages], 6.5);
    assert_eq!(analysis.totals[&Category::Subscriptions], 15.99);
    assert!((analysis.total - 22.49).abs() < 1e-9);
    assert!(analysis.insights.is_empty());
    assert!(analysis.daily_spend.is_empty());
}

// =============================================================================
// State
// =============================================================================

#[test]
fn test_state_round_trip_through_repository() {
    let repo = MemoryStateRepository::new();
    let mut state = repo.load_state_or_default().unwrap();
    state.profile = serde_json::from_str::<ProfileInput>(reference_profile_json())
        .unwrap()
        .resolve()
        .unwrap();
    state
        .goals
        .upsert(Goal::new("Emergency", 37_500.0, 12_000.0, 600.0))
        .unwrap();

    let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    state.streak.bump(today);
    state.streak.bump(today);
    repo.save_state(&state).unwrap();

    let loaded: PlanState = repo.load_state().unwrap().unwrap();
    assert_eq!(loaded.streak.count, 1);

    let progress = loaded.goals.progress().unwrap();
    assert_eq!(progress[0].percent_complete, 32);
    assert!(matches!(progress[0].eta, GoalEta::Months(n) if n > 0 && n < 60));

    let report = compute_plan(&loaded.profile, &loaded.settings, &PlanOptions::default()).unwrap();
    let at = today.and_hms_opt(9, 0, 0).unwrap().and_utc();
    repo.save_snapshot(&HealthSnapshot::new(&loaded.user_id, at, &report.health))
        .unwrap();
    let snap = repo.load_snapshot("demo").unwrap().unwrap();
    assert_eq!(snap.score, report.health.score);
}

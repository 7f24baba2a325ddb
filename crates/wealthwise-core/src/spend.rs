//! Transaction categorization and spend aggregation
//!
//! Categories are assigned by an ordered rule list: the first pattern that
//! matches a description wins, and anything unmatched lands in `Other`.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{format_currency, Priority, Recommendation, Transaction, TransactionRecord};

/// Spend category. Declaration order is the rule order and the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Coffee/Beverages")]
    CoffeeBeverages,
    #[serde(rename = "Dining Out")]
    DiningOut,
    Subscriptions,
    Shopping,
    Entertainment,
    #[serde(rename = "Gas/Transport")]
    GasTransport,
    Groceries,
    Utilities,
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Self::CoffeeBeverages,
        Self::DiningOut,
        Self::Subscriptions,
        Self::Shopping,
        Self::Entertainment,
        Self::GasTransport,
        Self::Groceries,
        Self::Utilities,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CoffeeBeverages => "Coffee/Beverages",
            Self::DiningOut => "Dining Out",
            Self::Subscriptions => "Subscriptions",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::GasTransport => "Gas/Transport",
            Self::Groceries => "Groceries",
            Self::Utilities => "Utilities",
            Self::Other => "Other",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    /// Accepts the display label or a short key (`coffee`, `dining`, `transport`, ...)
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        if let Some(cat) = Self::ALL.iter().find(|c| c.as_str().to_lowercase() == key) {
            return Ok(*cat);
        }
        match key.as_str() {
            "coffee" | "beverages" => Ok(Self::CoffeeBeverages),
            "dining" => Ok(Self::DiningOut),
            "subs" => Ok(Self::Subscriptions),
            "gas" | "transport" => Ok(Self::GasTransport),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered (category, pattern) rules; `Other` is the implicit fallback
fn category_rules() -> &'static [(Category, Regex)] {
    static RULES: OnceLock<Vec<(Category, Regex)>> = OnceLock::new();
    RULES.get_or_init(|| {
        [
            (Category::CoffeeBeverages, r"(?i)starbucks|coffee|dunkin"),
            (
                Category::DiningOut,
                r"(?i)restaurant|pizza|burger|doordash|ubereats|delivery",
            ),
            (
                Category::Subscriptions,
                r"(?i)netflix|spotify|hulu|subscription|prime",
            ),
            (Category::Shopping, r"(?i)amazon|target|walmart|shopping"),
            (Category::Entertainment, r"(?i)movie|entertainment|game|steam"),
            (Category::GasTransport, r"(?i)gas|fuel|uber|lyft|shell|chevron"),
            (
                Category::Groceries,
                r"(?i)grocery|supermarket|whole foods|trader joe",
            ),
            (
                Category::Utilities,
                r"(?i)electric|utility|water|internet|pg&e|att|comcast",
            ),
        ]
        .into_iter()
        .map(|(cat, pattern)| (cat, Regex::new(pattern).expect("valid regex")))
        .collect()
    })
}

/// First matching category for a description
pub fn categorize(description: &str) -> Category {
    category_rules()
        .iter()
        .find(|(_, re)| re.is_match(description))
        .map(|(cat, _)| *cat)
        .unwrap_or(Category::Other)
}

const MERCHANTS: [(&str, &str); 6] = [
    ("starbucks", "Starbucks"),
    ("amazon", "Amazon"),
    ("uber", "Uber"),
    ("lyft", "Lyft"),
    ("walmart", "Walmart"),
    ("target", "Target"),
];

/// Well-known merchant named in a description, used for drill-down only
pub fn detect_merchant(description: &str) -> Option<&'static str> {
    let lower = description.to_lowercase();
    MERCHANTS
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map(|(_, name)| *name)
}

/// Resolve free-form date text to a calendar date
pub fn normalize_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    let formats = [
        "%Y-%m-%d",  // 2024-01-15
        "%m/%d/%Y",  // 01/15/2024
        "%m/%d/%y",  // 01/15/24
        "%m-%d-%Y",  // 01-15-2024
        "%Y/%m/%d",  // 2024/01/15
        "%b %d, %Y", // Jan 15, 2024
        "%B %d, %Y", // January 15, 2024
    ];
    formats
        .iter()
        .filter_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        // %Y happily reads "24" as year 24; leave short years to %y
        .find(|d| d.year() >= 1000)
}

/// Top merchants and largest transactions for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drilldown {
    pub category: Category,
    pub top_merchants: Vec<(String, f64)>,
    pub largest_transactions: Vec<Transaction>,
}

/// Result of aggregating a transaction list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpendAnalysis {
    /// Every category is present, including those with no spend
    pub totals: BTreeMap<Category, f64>,
    pub total: f64,
    pub daily_spend: BTreeMap<NaiveDate, f64>,
    pub categorized: BTreeMap<Category, Vec<Transaction>>,
    pub merchant_totals: BTreeMap<Category, BTreeMap<String, f64>>,
    pub insights: Vec<Recommendation>,
    /// Rows dropped for a zero or missing amount
    pub skipped: usize,
    /// Counted rows whose date could not be resolved
    pub undated: usize,
}

impl SpendAnalysis {
    /// Category with the strictly greatest total; ties go to the earlier category
    pub fn top_category(&self) -> Option<(Category, f64)> {
        let mut best: Option<(Category, f64)> = None;
        for cat in Category::ALL {
            let amount = self.totals.get(&cat).copied().unwrap_or(0.0);
            if best.map_or(true, |(_, max)| amount > max) {
                best = Some((cat, amount));
            }
        }
        best
    }

    /// Daily series rolled up into `YYYY-MM` buckets, ascending
    pub fn monthly_spend(&self) -> BTreeMap<String, f64> {
        let mut months = BTreeMap::new();
        for (date, amount) in &self.daily_spend {
            *months.entry(date.format("%Y-%m").to_string()).or_insert(0.0) += amount;
        }
        months
    }

    pub fn drilldown(&self, category: Category, limit: usize) -> Drilldown {
        let mut top_merchants: Vec<(String, f64)> = self
            .merchant_totals
            .get(&category)
            .map(|m| m.iter().map(|(k, v)| (k.clone(), *v)).collect())
            .unwrap_or_default();
        top_merchants.sort_by(|a, b| b.1.total_cmp(&a.1));
        top_merchants.truncate(limit);

        let mut largest_transactions = self.categorized.get(&category).cloned().unwrap_or_default();
        largest_transactions.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        largest_transactions.truncate(limit);

        Drilldown {
            category,
            top_merchants,
            largest_transactions,
        }
    }
}

/// Default row count for drill-down lists
pub const DEFAULT_DRILLDOWN_LIMIT: usize = 10;

/// Categorize and sum a list of transactions
pub fn aggregate(records: &[TransactionRecord]) -> SpendAnalysis {
    let mut analysis = SpendAnalysis {
        totals: Category::ALL.iter().map(|c| (*c, 0.0)).collect(),
        categorized: Category::ALL.iter().map(|c| (*c, Vec::new())).collect(),
        ..Default::default()
    };

    for record in records {
        let amount = match record.amount.map(f64::abs) {
            Some(a) if a > 0.0 && a.is_finite() => a,
            _ => {
                analysis.skipped += 1;
                continue;
            }
        };

        let category = categorize(&record.description);
        *analysis.totals.entry(category).or_insert(0.0) += amount;
        analysis.total += amount;
        analysis
            .categorized
            .entry(category)
            .or_default()
            .push(Transaction {
                description: record.description.clone(),
                amount,
                date: record.date.clone(),
            });

        match normalize_date(&record.date) {
            Some(date) => *analysis.daily_spend.entry(date).or_insert(0.0) += amount,
            None => analysis.undated += 1,
        }

        if let Some(merchant) = detect_merchant(&record.description) {
            *analysis
                .merchant_totals
                .entry(category)
                .or_default()
                .entry(merchant.to_string())
                .or_insert(0.0) += amount;
        }
    }

    analysis.insights = spend_insights(&analysis.totals);
    debug!(
        "Aggregated {} transactions ({} skipped, {} undated)",
        records.len() - analysis.skipped,
        analysis.skipped,
        analysis.undated
    );
    analysis
}

/// Fixed-threshold observations about category totals
pub fn spend_insights(totals: &BTreeMap<Category, f64>) -> Vec<Recommendation> {
    let total = |cat: Category| totals.get(&cat).copied().unwrap_or(0.0);
    let mut insights = Vec::new();

    let dining = total(Category::DiningOut);
    if dining > 200.0 {
        insights.push(Recommendation::new(
            Priority::High,
            "Dining Out",
            format!(
                "{} this period. Cut 30% to save ~{} /mo.",
                format_currency(dining),
                format_currency(dining * 0.3)
            ),
        ));
    }

    let coffee = total(Category::CoffeeBeverages);
    if coffee > 100.0 {
        insights.push(Recommendation::new(
            Priority::Medium,
            "Coffee",
            format!(
                "{}, home brew could save ~{} /mo.",
                format_currency(coffee),
                format_currency(coffee * 0.6)
            ),
        ));
    }

    let subscriptions = total(Category::Subscriptions);
    if subscriptions > 50.0 {
        insights.push(Recommendation::new(
            Priority::Low,
            "Subscriptions",
            format!(
                "{}, audit & cancel unused services.",
                format_currency(subscriptions)
            ),
        ));
    }

    insights
}

//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// WealthWise - Plan savings, debt payoff and spending
#[derive(Parser)]
#[command(name = "wealthwise")]
#[command(about = "Personal finance projection and spend analysis", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to <data dir>/wealthwise/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// State file (overrides [storage] state_file from the config)
    #[arg(long, global = true)]
    pub state: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the financial profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Manage projection settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Compute the full plan (summary, growth, debt, recommendations, health)
    Plan {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Categorize and summarize a transaction CSV
    Spend {
        /// CSV file with Description, Amount and Date columns
        #[arg(short, long)]
        file: PathBuf,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,

        /// Show top merchants and largest transactions for a category
        #[arg(long)]
        drilldown: Option<String>,
    },

    /// Manage savings goals
    Goals {
        #[command(subcommand)]
        action: Option<GoalsAction>,
    },

    /// Save or show the health score snapshot
    Snapshot {
        #[command(subcommand)]
        action: SnapshotAction,
    },

    /// Compare current holdings against the target allocation
    Allocation {
        /// Current cash holdings
        #[arg(long, default_value = "0")]
        cash: f64,

        /// Current stock holdings
        #[arg(long, default_value = "0")]
        stocks: f64,

        /// Current bond holdings
        #[arg(long, default_value = "0")]
        bonds: f64,

        /// Current real estate / REIT holdings
        #[arg(long, default_value = "0")]
        re: f64,
    },
}

/// Raw profile fields. Values are taken as text and resolved leniently.
#[derive(Args, Debug, Default, Clone)]
pub struct ProfileFields {
    #[arg(long)]
    pub age: Option<String>,

    #[arg(long)]
    pub credit_score: Option<String>,

    /// Annual income (required before a plan can be computed)
    #[arg(long)]
    pub income: Option<String>,

    /// Cash and savings
    #[arg(long)]
    pub current_money: Option<String>,

    /// Other assets (home equity, investments, vehicles)
    #[arg(long)]
    pub assets: Option<String>,

    /// Total outstanding debt
    #[arg(long)]
    pub debt: Option<String>,

    #[arg(long)]
    pub student_loans: Option<String>,

    /// Annual debt interest rate in percent
    #[arg(long)]
    pub debt_rate: Option<String>,
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Update profile fields (unspecified fields keep their saved values)
    Set {
        #[command(flatten)]
        fields: ProfileFields,

        /// User id to store the profile under
        #[arg(long)]
        user: Option<String>,
    },
    /// Show the saved profile
    Show,
}

/// Raw settings fields; rates are percents (7 means 7%)
#[derive(Args, Debug, Default, Clone)]
pub struct SettingsFields {
    #[arg(long)]
    pub expected_return: Option<String>,

    #[arg(long)]
    pub inflation: Option<String>,

    #[arg(long)]
    pub save_rate: Option<String>,

    /// conservative, base or aggressive
    #[arg(long)]
    pub sensitivity: Option<String>,
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Update settings (unspecified fields keep their saved values)
    Set {
        #[command(flatten)]
        fields: SettingsFields,
    },
    /// Show the saved settings
    Show,
}

#[derive(Subcommand)]
pub enum GoalsAction {
    /// Add a goal or replace the one with the same name
    Add {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        target: f64,

        #[arg(short, long, default_value = "0")]
        saved: f64,

        /// Monthly contribution
        #[arg(short, long, default_value = "0")]
        monthly: f64,
    },
    /// List goals with progress and ETA
    List,
}

#[derive(Subcommand)]
pub enum SnapshotAction {
    /// Compute the health score and store it as the latest snapshot
    Save,
    /// Show the latest stored snapshot
    Show,
}

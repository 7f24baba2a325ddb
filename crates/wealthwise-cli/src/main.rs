//! WealthWise CLI - Personal finance planner
//!
//! Usage:
//!   wealthwise profile set --income 75000 --age 28   Save the financial profile
//!   wealthwise plan                                  Show the full plan
//!   wealthwise spend --file statement.csv            Analyze spending
//!   wealthwise goals add --name House --target 50000 Track a savings goal

mod cli;
mod commands;
mod config;
mod repository;


use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;
use repository::JsonFileRepository;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = config::load_config(cli.config.as_deref())?;
    let state_path = cli.state.clone().unwrap_or_else(|| config.state_file.clone());
    debug!("State file: {}", state_path.display());
    let repo = JsonFileRepository::new(state_path);

    match cli.command {
        Commands::Profile { action } => match action {
            ProfileAction::Set { fields, user } => {
                commands::cmd_profile_set(&repo, &config, &fields, user.as_deref())
            }
            ProfileAction::Show => commands::cmd_profile_show(&repo, &config),
        },
        Commands::Settings { action } => match action {
            SettingsAction::Set { fields } => commands::cmd_settings_set(&repo, &config, &fields),
            SettingsAction::Show => commands::cmd_settings_show(&repo, &config),
        },
        Commands::Plan { json } => {
            let today = chrono::Local::now().date_naive();
            commands::cmd_plan(&repo, &config, today, json)
        }
        Commands::Spend {
            file,
            json,
            drilldown,
        } => commands::cmd_spend(&file, json, drilldown.as_deref()),
        Commands::Goals { action } => match action {
            None | Some(GoalsAction::List) => commands::cmd_goals_list(&repo, &config),
            Some(GoalsAction::Add {
                name,
                target,
                saved,
                monthly,
            }) => commands::cmd_goals_add(&repo, &config, &name, target, saved, monthly),
        },
        Commands::Snapshot { action } => match action {
            SnapshotAction::Save => commands::cmd_snapshot_save(&repo, &config, chrono::Utc::now()),
            SnapshotAction::Show => commands::cmd_snapshot_show(&repo, &config),
        },
        Commands::Allocation {
            cash,
            stocks,
            bonds,
            re,
        } => commands::cmd_allocation(&repo, &config, cash, stocks, bonds, re),
    }
}

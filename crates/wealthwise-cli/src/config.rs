//! CLI configuration
//!
//! Loaded from an explicit `--config` path, else the per-user override in the
//! data directory, else the defaults compiled into the binary.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::debug;
use wealthwise_core::{LenientNumber, PlanOptions, Settings, SettingsInput};

const DEFAULT_CONFIG: &str = include_str!("../../../config/wealthwise.toml");

/// Resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Settings used until the user saves their own
    pub default_settings: Settings,
    pub plan: PlanOptions,
    pub state_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_settings: Settings::default(),
            plan: PlanOptions::default(),
            state_file: default_state_path(),
        }
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("wealthwise").join("config.toml"))
}

/// Default state file location
pub fn default_state_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("wealthwise").join("state.json"))
        .unwrap_or_else(|| PathBuf::from("wealthwise-state.json"))
}

/// Load configuration (explicit path, then user override, then built-in)
pub fn load_config(override_path: Option<&Path>) -> Result<Config> {
    let content = match override_path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => {
                debug!("Using config override {}", path.display());
                fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?
            }
            None => DEFAULT_CONFIG.to_string(),
        },
    };

    parse_config(&content)
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    defaults: Option<RawDefaults>,
    projection: Option<RawProjection>,
    storage: Option<RawStorage>,
}

#[derive(Debug, Deserialize)]
struct RawDefaults {
    expected_return: Option<f64>,
    inflation: Option<f64>,
    save_rate: Option<f64>,
    sensitivity: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawProjection {
    horizons: Option<Vec<u32>>,
    debt_term_months: Option<u32>,
    debt_horizon_years: Option<u32>,
    extra_payments: Option<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
struct RawStorage {
    state_file: Option<PathBuf>,
}

/// Parse config from TOML content
pub fn parse_config(content: &str) -> Result<Config> {
    let raw: RawConfig = toml::from_str(content).context("Invalid config TOML")?;

    let mut config = Config::default();

    if let Some(defaults) = raw.defaults {
        let input = SettingsInput {
            expected_return: defaults.expected_return.map(LenientNumber::Number),
            inflation: defaults.inflation.map(LenientNumber::Number),
            save_rate: defaults.save_rate.map(LenientNumber::Number),
            sensitivity: defaults.sensitivity,
        };
        config.default_settings = input.resolve();
    }

    if let Some(projection) = raw.projection {
        if let Some(horizons) = projection.horizons {
            if horizons.is_empty() {
                bail!("projection.horizons must list at least one year");
            }
            config.plan.horizons = horizons;
        }
        if let Some(term) = projection.debt_term_months {
            if term == 0 {
                bail!("projection.debt_term_months must be positive");
            }
            config.plan.debt_term_months = term;
        }
        if let Some(years) = projection.debt_horizon_years {
            config.plan.debt_horizon_years = years;
        }
        if let Some(extras) = projection.extra_payments {
            config.plan.extra_payments = extras.into_iter().filter(|e| *e > 0.0).collect();
        }
    }

    if let Some(path) = raw.storage.and_then(|s| s.state_file) {
        config.state_file = path;
    }

    Ok(config)
}

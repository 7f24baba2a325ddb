//! Lenient request payloads and per-field default resolution
//!
//! Callers hand over whatever the form produced: numbers, numeric strings,
//! blanks or nulls. Each field is resolved on its own so one bad value never
//! discards the rest of the payload.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::models::{Profile, Sensitivity, Settings};

/// Default annual debt interest rate in percent
pub const DEFAULT_DEBT_RATE_PERCENT: f64 = 6.5;

pub const MIN_CREDIT_SCORE: u32 = 300;
pub const MAX_CREDIT_SCORE: u32 = 850;

/// A number as it arrives from a form: either a JSON number or text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LenientNumber {
    Number(f64),
    Text(String),
}

impl LenientNumber {
    /// Numeric value, or `None` for blank or unparseable text
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.is_finite().then_some(*n),
            Self::Text(s) => {
                let cleaned: String = s
                    .chars()
                    .filter(|c| !matches!(c, '$' | ',' | '%') && !c.is_whitespace())
                    .collect();
                if cleaned.is_empty() {
                    return None;
                }
                cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
            }
        }
    }
}

impl From<f64> for LenientNumber {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for LenientNumber {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

fn numeric(field: &Option<LenientNumber>) -> Option<f64> {
    field.as_ref().and_then(LenientNumber::value)
}

/// Currency field: missing means 0, negatives are floored at 0
fn currency(field: &Option<LenientNumber>) -> f64 {
    numeric(field).unwrap_or(0.0).max(0.0)
}

/// Rate field given in percent form (7 means 0.07)
fn rate(field: &Option<LenientNumber>, default: f64) -> f64 {
    numeric(field).map_or(default, |v| v / 100.0)
}

/// Profile payload before defaults are applied
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileInput {
    pub age: Option<LenientNumber>,
    pub credit_score: Option<LenientNumber>,
    pub annual_income: Option<LenientNumber>,
    pub current_money: Option<LenientNumber>,
    pub asset_value: Option<LenientNumber>,
    pub total_debt: Option<LenientNumber>,
    pub student_loans: Option<LenientNumber>,
    pub debt_interest_rate: Option<LenientNumber>,
}

impl ProfileInput {
    /// Apply per-field defaults. Income is the one field that is never defaulted.
    pub fn resolve(&self) -> Result<Profile> {
        let annual_income = numeric(&self.annual_income).unwrap_or(0.0);
        if annual_income <= 0.0 {
            return Err(Error::MissingRequiredInput(
                "annual income must be greater than zero".into(),
            ));
        }

        let age = numeric(&self.age).unwrap_or(0.0).round().max(0.0) as u32;
        let credit_score = match numeric(&self.credit_score).unwrap_or(0.0).round().max(0.0) as u32 {
            0 => 0,
            score => score.clamp(MIN_CREDIT_SCORE, MAX_CREDIT_SCORE),
        };
        let debt_interest_rate = numeric(&self.debt_interest_rate)
            .unwrap_or(DEFAULT_DEBT_RATE_PERCENT)
            .max(0.0);

        Ok(Profile {
            age,
            credit_score,
            annual_income,
            current_money: currency(&self.current_money),
            asset_value: currency(&self.asset_value),
            total_debt: currency(&self.total_debt),
            student_loans: currency(&self.student_loans),
            debt_interest_rate,
        })
    }
}

impl From<&Profile> for ProfileInput {
    fn from(p: &Profile) -> Self {
        Self {
            age: Some((p.age as f64).into()),
            credit_score: Some((p.credit_score as f64).into()),
            annual_income: Some(p.annual_income.into()),
            current_money: Some(p.current_money.into()),
            asset_value: Some(p.asset_value.into()),
            total_debt: Some(p.total_debt.into()),
            student_loans: Some(p.student_loans.into()),
            debt_interest_rate: Some(p.debt_interest_rate.into()),
        }
    }
}

/// Settings payload before defaults are applied
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsInput {
    pub expected_return: Option<LenientNumber>,
    pub inflation: Option<LenientNumber>,
    pub save_rate: Option<LenientNumber>,
    pub sensitivity: Option<String>,
}

impl SettingsInput {
    /// Resolve against `defaults`; unknown sensitivities fall back to the default
    pub fn resolve_with(&self, defaults: &Settings) -> Settings {
        let sensitivity = match self.sensitivity.as_deref().map(str::trim) {
            None | Some("") => defaults.sensitivity,
            Some(s) => s.parse::<Sensitivity>().unwrap_or_else(|e| {
                warn!("{}; using {}", e, defaults.sensitivity);
                defaults.sensitivity
            }),
        };

        Settings {
            expected_return: rate(&self.expected_return, defaults.expected_return),
            inflation: rate(&self.inflation, defaults.inflation),
            save_rate: rate(&self.save_rate, defaults.save_rate).max(0.0),
            sensitivity,
        }
    }

    pub fn resolve(&self) -> Settings {
        self.resolve_with(&Settings::default())
    }
}

//! Error types for WealthWise

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A field the plan cannot be computed without (annual income)
    #[error("Missing required input: {0}")]
    MissingRequiredInput(String),

    /// A rate that would break a geometric-growth formula
    #[error("Degenerate rate: {0}")]
    DegenerateRate(String),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

pub type Result<T> = std::result::Result<T, Error>;

//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `allocation` - Target vs. current asset allocation
//! - `goals` - Savings goal management (add, list)
//! - `plan` - Full plan report
//! - `profile` - Profile and settings commands, shared state loading
//! - `snapshot` - Health score snapshots
//! - `spend` - Transaction CSV analysis

pub mod allocation;
pub mod goals;
pub mod plan;
pub mod profile;
pub mod snapshot;
pub mod spend;

// Re-export command functions for main.rs
pub use allocation::*;
pub use goals::*;
pub use plan::*;
pub use profile::*;
pub use snapshot::*;
pub use spend::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format a fraction as a whole percent
pub fn percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

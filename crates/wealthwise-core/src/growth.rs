//! Compound-growth projection with periodic contributions

use serde::{Deserialize, Serialize};

use crate::models::Sensitivity;

/// Sanity floor for an assumed long-run annual return
pub const MIN_ANNUAL_RETURN: f64 = 0.03;
/// Sanity ceiling for an assumed long-run annual return
pub const MAX_ANNUAL_RETURN: f64 = 0.12;

/// Horizons (in years) shown on the growth chart
pub const DEFAULT_HORIZONS: [u32; 8] = [1, 2, 3, 4, 5, 10, 20, 30];

/// Apply the sensitivity adjustment and clamp into the allowed return band
pub fn effective_return(expected_return: f64, sensitivity: Sensitivity) -> f64 {
    (expected_return + sensitivity.return_adjustment()).clamp(MIN_ANNUAL_RETURN, MAX_ANNUAL_RETURN)
}

/// Fisher-style real rate for a nominal rate and inflation
pub fn real_rate(annual_return: f64, inflation: f64) -> f64 {
    (1.0 + annual_return) / (1.0 + inflation) - 1.0
}

/// Future value of `start` plus `contribution` per period after `periods` periods.
///
/// A zero rate falls back to the linear sum `start + contribution * periods`.
pub fn future_value(start: f64, contribution: f64, rate: f64, periods: f64) -> f64 {
    if rate == 0.0 {
        return start + contribution * periods;
    }
    let growth = (1.0 + rate).powf(periods);
    start * growth + contribution * (growth - 1.0) / rate
}

/// Projected value at one horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub years: u32,
    pub nominal: f64,
    /// Inflation-adjusted value
    pub real: f64,
}

/// Nominal and real projections for a list of horizons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthProjection {
    pub annual_return: f64,
    pub real_return: f64,
    pub points: Vec<GrowthPoint>,
}

/// Project `starting_value` with `annual_contribution` added each year.
///
/// `annual_return` is expected to be clamped by the caller
/// (see [`effective_return`]). Values are rounded to whole currency units.
pub fn project(
    starting_value: f64,
    annual_contribution: f64,
    annual_return: f64,
    inflation: f64,
    horizons: &[u32],
) -> GrowthProjection {
    let real_return = real_rate(annual_return, inflation);
    let points = horizons
        .iter()
        .map(|&years| {
            let t = years as f64;
            GrowthPoint {
                years,
                nominal: future_value(starting_value, annual_contribution, annual_return, t)
                    .round(),
                real: future_value(starting_value, annual_contribution, real_return, t).round(),
            }
        })
        .collect();

    GrowthProjection {
        annual_return,
        real_return,
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_return_clamps() {
        assert_eq!(effective_return(0.20, Sensitivity::Aggressive), MAX_ANNUAL_RETURN);
        assert_eq!(effective_return(0.01, Sensitivity::Conservative), MIN_ANNUAL_RETURN);
        assert!((effective_return(0.07, Sensitivity::Conservative) - 0.06).abs() < 1e-12);
        assert!((effective_return(0.07, Sensitivity::Aggressive) - 0.08).abs() < 1e-12);
    }

    #[test]
    fn test_future_value_zero_rate() {
        assert_eq!(future_value(1_000.0, 500.0, 0.0, 10.0), 6_000.0);
    }

    #[test]
    fn test_project_known_values() {
        let projection = project(10_000.0, 1_000.0, 0.05, 0.0, &[1, 2]);
        assert_eq!(projection.points[0].nominal, 11_500.0);
        // 10000 * 1.1025 + 1000 * 2.05
        assert_eq!(projection.points[1].nominal, 13_075.0);
        // No inflation: real equals nominal
        assert_eq!(projection.points[1].real, projection.points[1].nominal);
    }

    #[test]
    fn test_real_rate_zero_when_return_matches_inflation() {
        let projection = project(1_000.0, 100.0, 0.03, 0.03, &[10]);
        assert!(projection.real_return.abs() < 1e-12);
        assert_eq!(projection.points[0].real, 2_000.0);
        assert!(projection.points[0].real.is_finite());
    }

    #[test]
    fn test_nominal_non_decreasing_with_contributions() {
        let projection = project(-5_000.0, 9_000.0, 0.07, 0.03, &DEFAULT_HORIZONS);
        assert!(projection
            .points
            .windows(2)
            .all(|w| w[1].nominal >= w[0].nominal));

        let positive = project(20_000.0, 9_000.0, 0.07, 0.03, &DEFAULT_HORIZONS);
        assert!(positive.points.iter().all(|p| p.real <= p.nominal));
    }
}

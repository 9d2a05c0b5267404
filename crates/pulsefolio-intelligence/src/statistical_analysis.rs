// ABOUTME: Least-squares regression and small numeric helpers for trend projection
// ABOUTME: Fits improvement trends over dated efforts with guarded denominators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

use pulsefolio_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Linear regression results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Slope of the regression line (rate of change per x unit)
    pub slope: f64,
    /// Y-intercept of the regression line
    pub intercept: f64,
    /// Coefficient of determination (goodness of fit, 0-1)
    pub r_squared: f64,
    /// Pearson correlation coefficient (-1 to 1)
    pub correlation: f64,
    /// Standard error of the estimate
    pub standard_error: f64,
    /// Degrees of freedom (n - 2)
    pub degrees_of_freedom: usize,
}

impl RegressionResult {
    /// Value of the fitted line at `x`
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }
}

/// Statistical analyzer over `(x, y)` samples
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Ordinary least-squares fit of `y` against `x`
    ///
    /// # Errors
    ///
    /// Returns an error with fewer than two points or when every `x` is equal
    pub fn linear_regression(points: &[(f64, f64)]) -> AppResult<RegressionResult> {
        if points.len() < 2 {
            return Err(AppError::invalid_input(format!(
                "Insufficient data points for regression: need at least 2, got {}",
                points.len()
            )));
        }

        let n = points.len() as f64;
        let sum_x = points.iter().map(|(x, _)| x).sum::<f64>();
        let sum_y = points.iter().map(|(_, y)| y).sum::<f64>();
        let sum_xx = points.iter().map(|(x, _)| x * x).sum::<f64>();
        let sum_x_y = points.iter().map(|(x, y)| x * y).sum::<f64>();
        let sum_yy = points.iter().map(|(_, y)| y * y).sum::<f64>();

        let mean_x = sum_x / n;
        let mean_y = sum_y / n;

        let denominator = (n * mean_x).mul_add(-mean_x, sum_xx);
        if denominator.abs() < f64::EPSILON {
            return Err(AppError::invalid_input(
                "Cannot calculate regression: zero variance in x",
            ));
        }

        let numerator = (n * mean_x).mul_add(-mean_y, sum_x_y);
        let slope = numerator / denominator;
        let intercept = slope.mul_add(-mean_x, mean_y);

        let denominator_corr = (denominator * (n * mean_y).mul_add(-mean_y, sum_yy)).sqrt();
        let correlation = if denominator_corr > 0.0 {
            numerator / denominator_corr
        } else {
            0.0
        };

        let sse = points
            .iter()
            .map(|(x, y)| {
                let diff = y - slope.mul_add(*x, intercept);
                diff * diff
            })
            .sum::<f64>();

        let degrees_of_freedom = points.len().saturating_sub(2);
        let standard_error = if degrees_of_freedom > 0 {
            (sse / degrees_of_freedom as f64).sqrt()
        } else {
            0.0
        };

        Ok(RegressionResult {
            slope,
            intercept,
            r_squared: correlation * correlation,
            correlation,
            standard_error,
            degrees_of_freedom,
        })
    }

    /// Arithmetic mean, or `None` for an empty slice
    #[must_use]
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        }
    }

    /// `numerator / denominator` as a percentage, 0 when the denominator is not positive
    #[must_use]
    pub fn safe_percent(numerator: f64, denominator: f64) -> f64 {
        if denominator > 0.0 {
            numerator / denominator * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regression_recovers_exact_line() {
        let points = [(0.0, 50.0), (7.0, 48.6), (14.0, 47.2)];
        let regression = StatisticalAnalyzer::linear_regression(&points);
        assert!(matches!(
            regression,
            Ok(ref r) if (r.slope + 0.2).abs() < 1e-9 && (r.intercept - 50.0).abs() < 1e-9
        ));
    }

    #[test]
    fn test_regression_rejects_single_point_and_flat_x() {
        assert!(StatisticalAnalyzer::linear_regression(&[(1.0, 2.0)]).is_err());
        assert!(StatisticalAnalyzer::linear_regression(&[(1.0, 2.0), (1.0, 3.0)]).is_err());
    }

    #[test]
    fn test_safe_percent_guards_zero() {
        assert!(StatisticalAnalyzer::safe_percent(5.0, 0.0).abs() < f64::EPSILON);
        assert!((StatisticalAnalyzer::safe_percent(5.0, 20.0) - 25.0).abs() < 1e-12);
    }
}

// ABOUTME: Recovery risk scoring configuration
// ABOUTME: Thresholds, weights and caps of each risk rule plus status cut-offs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

use crate::physiological_constants::recovery_risk::{
    CAUTION_SCORE_THRESHOLD, LONG_EFFORT_CAP, LONG_EFFORT_THRESHOLD_PERCENT, LONG_EFFORT_WEIGHT,
    MAX_RECOVERY_HOURS, MIN_RECOVERY_HOURS, REST_SCORE_THRESHOLD, VOLUME_CAP,
    VOLUME_THRESHOLD_PERCENT, VOLUME_WEIGHT, WEEKLY_INCREASE_CAP,
    WEEKLY_INCREASE_THRESHOLD_PERCENT, WEEKLY_INCREASE_WEIGHT,
};
use serde::{Deserialize, Serialize};

/// Threshold, weight and cap of a single risk rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskRuleConfig {
    /// Observed percent at which the rule starts contributing
    pub threshold_percent: f64,
    /// Points per percent above the threshold
    pub weight: f64,
    /// Maximum contribution of this rule
    pub cap: f64,
}

impl RiskRuleConfig {
    /// Contribution for an observed percentage
    #[must_use]
    pub fn contribution(&self, observed_percent: f64) -> f64 {
        let excess = observed_percent - self.threshold_percent;
        if excess <= 0.0 {
            return 0.0;
        }
        (excess * self.weight).min(self.cap)
    }
}

/// Recovery risk advisor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryRiskConfig {
    /// Week-over-week increase rule (observed as percent increase)
    pub weekly_increase: RiskRuleConfig,
    /// Volume against the rolling average (observed as percent above average)
    pub volume_vs_average: RiskRuleConfig,
    /// Longest effort against rolling average longest (observed as percent of average)
    pub long_effort: RiskRuleConfig,
    /// Minimum score for Caution
    pub caution_score_threshold: f64,
    /// Score above which the status is Rest
    pub rest_score_threshold: f64,
    /// Hours recommended at the caution threshold
    pub min_recovery_hours: f64,
    /// Hours recommended at the maximum score
    pub max_recovery_hours: f64,
}

impl Default for RecoveryRiskConfig {
    fn default() -> Self {
        Self {
            weekly_increase: RiskRuleConfig {
                threshold_percent: WEEKLY_INCREASE_THRESHOLD_PERCENT,
                weight: WEEKLY_INCREASE_WEIGHT,
                cap: WEEKLY_INCREASE_CAP,
            },
            volume_vs_average: RiskRuleConfig {
                threshold_percent: VOLUME_THRESHOLD_PERCENT,
                weight: VOLUME_WEIGHT,
                cap: VOLUME_CAP,
            },
            long_effort: RiskRuleConfig {
                threshold_percent: LONG_EFFORT_THRESHOLD_PERCENT,
                weight: LONG_EFFORT_WEIGHT,
                cap: LONG_EFFORT_CAP,
            },
            caution_score_threshold: CAUTION_SCORE_THRESHOLD,
            rest_score_threshold: REST_SCORE_THRESHOLD,
            min_recovery_hours: MIN_RECOVERY_HOURS,
            max_recovery_hours: MAX_RECOVERY_HOURS,
        }
    }
}

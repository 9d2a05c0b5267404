// ABOUTME: Intelligence configuration for stress, prediction, recovery and zone analysis
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

//! Intelligence Configuration Module
//!
//! Every tunable weight and threshold of the analysis components, grouped by
//! component:
//! - `stress` - training stress zone scale and pace fallback
//! - `prediction` - Riegel exponent, effort window, confidence weights
//! - `recovery` - risk rule thresholds, weights, caps and status cut-offs
//! - `heart_rate` - LTHR proxy window and zone balance cut-offs
//!
//! Configuration is passed explicitly to the components. [`IntelligenceConfig::load`]
//! builds a validated value from defaults plus `PULSEFOLIO_*` environment
//! overrides; nothing is cached process-wide.

pub mod error;
pub mod heart_rate;
pub mod prediction;
pub mod recovery;
pub mod stress;

pub use error::ConfigError;
pub use heart_rate::HeartRateConfig;
pub use prediction::RacePredictionConfig;
pub use recovery::{RecoveryRiskConfig, RiskRuleConfig};
pub use stress::TrainingStressConfig;

use crate::physiological_constants::race_prediction::MAX_RECENT_EFFORT_WINDOW_DAYS;
use crate::physiological_constants::recovery_risk::MAX_RISK_SCORE;
use crate::physiological_constants::training_stress::{MAX_ZONE_MULTIPLIER, MIN_ZONE_MULTIPLIER};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Tolerance when checking that confidence weights sum to one
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Main intelligence configuration container
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Training stress estimation
    pub training_stress: TrainingStressConfig,
    /// Race time prediction
    pub race_prediction: RacePredictionConfig,
    /// Injury and overtraining risk scoring
    pub recovery_risk: RecoveryRiskConfig,
    /// Heart rate zone analysis
    pub heart_rate: HeartRateConfig,
}

impl IntelligenceConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(?config, "Loaded intelligence configuration");
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_training_stress()?;
        self.validate_race_prediction()?;
        self.validate_recovery_risk()?;
        self.validate_heart_rate()
    }

    fn validate_training_stress(&self) -> Result<(), ConfigError> {
        let stress = &self.training_stress;
        if !stress.zone_hour_points.is_finite() || stress.zone_hour_points <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "zone_hour_points must be positive",
            ));
        }
        if !(MIN_ZONE_MULTIPLIER..=MAX_ZONE_MULTIPLIER).contains(&stress.baseline_zone_multiplier)
        {
            return Err(ConfigError::ValueOutOfRange(
                "baseline_zone_multiplier must be within 1-5",
            ));
        }
        if !stress.pace_intensity_exponent.is_finite() || stress.pace_intensity_exponent <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "pace_intensity_exponent must be positive",
            ));
        }
        if stress.rolling_pace_window == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "rolling_pace_window must be at least 1",
            ));
        }
        Ok(())
    }

    fn validate_race_prediction(&self) -> Result<(), ConfigError> {
        let prediction = &self.race_prediction;
        if !(1.0..=1.2).contains(&prediction.riegel_exponent) {
            return Err(ConfigError::ValueOutOfRange(
                "riegel_exponent must be within 1.0-1.2",
            ));
        }
        if !prediction.qualifying_distance_ratio.is_finite()
            || prediction.qualifying_distance_ratio < 1.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "qualifying_distance_ratio must be at least 1.0",
            ));
        }
        if !(1..=MAX_RECENT_EFFORT_WINDOW_DAYS).contains(&prediction.recent_effort_window_days) {
            return Err(ConfigError::ValueOutOfRange(
                "recent_effort_window_days must be within 1-36500",
            ));
        }
        if prediction.confidence_distance_weight < 0.0 || prediction.confidence_sample_weight < 0.0
        {
            return Err(ConfigError::InvalidWeights(
                "confidence weights must be non-negative",
            ));
        }
        let weight_sum =
            prediction.confidence_distance_weight + prediction.confidence_sample_weight;
        if (weight_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(
                "confidence weights must sum to 1.0",
            ));
        }
        Ok(())
    }

    fn validate_recovery_risk(&self) -> Result<(), ConfigError> {
        let risk = &self.recovery_risk;
        for rule in [risk.weekly_increase, risk.volume_vs_average, risk.long_effort] {
            if rule.threshold_percent < 0.0 || rule.weight < 0.0 || rule.cap < 0.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "risk rule threshold, weight and cap must be non-negative",
                ));
            }
        }
        if risk.weekly_increase.cap + risk.volume_vs_average.cap + risk.long_effort.cap
            > MAX_RISK_SCORE
        {
            return Err(ConfigError::InvalidWeights(
                "risk rule caps must not sum above 100",
            ));
        }
        if risk.caution_score_threshold >= risk.rest_score_threshold {
            return Err(ConfigError::InvalidRange(
                "caution_score_threshold must be < rest_score_threshold",
            ));
        }
        if risk.rest_score_threshold >= MAX_RISK_SCORE {
            return Err(ConfigError::ValueOutOfRange(
                "rest_score_threshold must be below 100",
            ));
        }
        if risk.min_recovery_hours <= 0.0 || risk.min_recovery_hours >= risk.max_recovery_hours {
            return Err(ConfigError::InvalidRange(
                "min_recovery_hours must be positive and < max_recovery_hours",
            ));
        }
        Ok(())
    }

    fn validate_heart_rate(&self) -> Result<(), ConfigError> {
        let hr = &self.heart_rate;
        if hr.threshold_effort_min_minutes <= 0.0
            || hr.threshold_effort_min_minutes >= hr.threshold_effort_max_minutes
        {
            return Err(ConfigError::InvalidRange(
                "threshold effort minutes must be positive and min < max",
            ));
        }
        if !(0.0..=100.0).contains(&hr.aerobic_base_min_percent)
            || !(0.0..=100.0).contains(&hr.high_intensity_max_percent)
        {
            return Err(ConfigError::ValueOutOfRange(
                "zone balance percentages must be within 0-100",
            ));
        }
        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }

    /// Apply `PULSEFOLIO_*` environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Training stress
        Self::apply_env_var(
            "PULSEFOLIO_ZONE_HOUR_POINTS",
            &mut self.training_stress.zone_hour_points,
        )?;
        Self::apply_env_var(
            "PULSEFOLIO_BASELINE_ZONE_MULTIPLIER",
            &mut self.training_stress.baseline_zone_multiplier,
        )?;
        Self::apply_env_var(
            "PULSEFOLIO_PACE_INTENSITY_EXPONENT",
            &mut self.training_stress.pace_intensity_exponent,
        )?;
        Self::apply_env_var(
            "PULSEFOLIO_ROLLING_PACE_WINDOW",
            &mut self.training_stress.rolling_pace_window,
        )?;

        // Race prediction
        Self::apply_env_var(
            "PULSEFOLIO_RIEGEL_EXPONENT",
            &mut self.race_prediction.riegel_exponent,
        )?;
        Self::apply_env_var(
            "PULSEFOLIO_QUALIFYING_DISTANCE_RATIO",
            &mut self.race_prediction.qualifying_distance_ratio,
        )?;
        Self::apply_env_var(
            "PULSEFOLIO_RECENT_EFFORT_WINDOW_DAYS",
            &mut self.race_prediction.recent_effort_window_days,
        )?;
        Self::apply_env_var(
            "PULSEFOLIO_CONFIDENCE_DISTANCE_WEIGHT",
            &mut self.race_prediction.confidence_distance_weight,
        )?;
        Self::apply_env_var(
            "PULSEFOLIO_CONFIDENCE_SAMPLE_WEIGHT",
            &mut self.race_prediction.confidence_sample_weight,
        )?;

        // Recovery risk
        let risk = &mut self.recovery_risk;
        Self::apply_env_var(
            "PULSEFOLIO_RISK_WEEKLY_INCREASE_THRESHOLD",
            &mut risk.weekly_increase.threshold_percent,
        )?;
        Self::apply_env_var(
            "PULSEFOLIO_RISK_WEEKLY_INCREASE_WEIGHT",
            &mut risk.weekly_increase.weight,
        )?;
        Self::apply_env_var(
            "PULSEFOLIO_RISK_WEEKLY_INCREASE_CAP",
            &mut risk.weekly_increase.cap,
        )?;
        Self::apply_env_var(
            "PULSEFOLIO_RISK_VOLUME_THRESHOLD",
            &mut risk.volume_vs_average.threshold_percent,
        )?;
        Self::apply_env_var(
            "PULSEFOLIO_RISK_VOLUME_WEIGHT",
            &mut risk.volume_vs_average.weight,
        )?;
        Self::apply_env_var("PULSEFOLIO_RISK_VOLUME_CAP", &mut risk.volume_vs_average.cap)?;
        Self::apply_env_var(
            "PULSEFOLIO_RISK_LONG_EFFORT_THRESHOLD",
            &mut risk.long_effort.threshold_percent,
        )?;
        Self::apply_env_var(
            "PULSEFOLIO_RISK_LONG_EFFORT_WEIGHT",
            &mut risk.long_effort.weight,
        )?;
        Self::apply_env_var("PULSEFOLIO_RISK_LONG_EFFORT_CAP", &mut risk.long_effort.cap)?;
        Self::apply_env_var(
            "PULSEFOLIO_RISK_CAUTION_SCORE",
            &mut risk.caution_score_threshold,
        )?;
        Self::apply_env_var("PULSEFOLIO_RISK_REST_SCORE", &mut risk.rest_score_threshold)?;
        Self::apply_env_var("PULSEFOLIO_RECOVERY_MIN_HOURS", &mut risk.min_recovery_hours)?;
        Self::apply_env_var("PULSEFOLIO_RECOVERY_MAX_HOURS", &mut risk.max_recovery_hours)?;

        // Heart rate
        Self::apply_env_var(
            "PULSEFOLIO_LTHR_MIN_EFFORT_MINUTES",
            &mut self.heart_rate.threshold_effort_min_minutes,
        )?;
        Self::apply_env_var(
            "PULSEFOLIO_LTHR_MAX_EFFORT_MINUTES",
            &mut self.heart_rate.threshold_effort_max_minutes,
        )?;
        Self::apply_env_var(
            "PULSEFOLIO_HR_AEROBIC_BASE_MIN_PERCENT",
            &mut self.heart_rate.aerobic_base_min_percent,
        )?;
        Self::apply_env_var(
            "PULSEFOLIO_HR_HIGH_INTENSITY_MAX_PERCENT",
            &mut self.heart_rate.high_intensity_max_percent,
        )?;

        Ok(self)
    }
}

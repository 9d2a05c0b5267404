// ABOUTME: Training analytics engine: stress, fitness load, race prediction, recovery and zones
// ABOUTME: Pure computations over an immutable activity history, fronted by AnalyticsEngine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

#![deny(unsafe_code)]

//! # Pulsefolio Intelligence
//!
//! Turns an activity history into fitness state, race forecasts, injury risk
//! advice, heart rate zone time and performance patterns. No component reads
//! the clock or touches I/O; every "today" is a caller-supplied date or the
//! latest date in the data.
//!
//! ## Example
//!
//! ```rust
//! use pulsefolio_intelligence::{AnalysisRequest, AnalyticsEngine};
//!
//! let engine = AnalyticsEngine::default();
//! let report = engine.analyze(&[], &AnalysisRequest::default());
//! assert!(report.is_ok_and(|r| r.fitness.is_empty() && r.race_predictions.is_empty()));
//! ```

/// LTHR estimation and zone-weighted stress scoring
pub mod algorithms;

/// Engine facade running every analysis over one snapshot
pub mod analyzer;

/// Tunable weights and thresholds with environment overrides
pub mod config;

/// Five-zone heart rate distribution
pub mod heart_rate_zones;

/// Speed by day of week, time of day and rest interval
pub mod performance_factors;

/// Riegel race-time forecasts with confidence and goal gap
pub mod performance_prediction;

/// Named defaults for every calculation
pub mod physiological_constants;

/// Injury risk scoring and rest advice
pub mod recovery_advisor;

/// Regression and guarded numeric helpers
pub mod statistical_analysis;

/// CTL, ATL and TSB series
pub mod training_load;

/// Per-session training stress
pub mod training_stress;

pub use analyzer::{AnalysisReport, AnalysisRequest, AnalyticsEngine};
pub use config::{ConfigError, IntelligenceConfig};
pub use heart_rate_zones::{HeartRateZoneAnalyzer, HeartRateZoneDistribution, Zone, ZoneBalance};
pub use performance_factors::{
    PerformanceAnalysis, PerformanceFactor, PerformanceFactorAnalyzer, PerformanceHeadline,
    PerformanceInsight, TimeOfDay,
};
pub use performance_prediction::{GoalProgress, RacePerformancePredictor, RacePrediction};
pub use recovery_advisor::{
    LoadSnapshot, RecoveryAction, RecoveryAdvice, RecoveryRiskAdvisor, RecoveryStatus, RiskReason,
    RiskRule, RiskTrigger,
};
pub use training_load::{DailyLoad, FitnessLoadTracker, FitnessMetrics, FitnessSummary, FormStatus};
pub use training_stress::{SessionStress, StressMethod, TrainingStressEstimator};

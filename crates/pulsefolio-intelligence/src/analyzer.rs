// ABOUTME: Analytics engine facade validating a history once and running every analysis
// ABOUTME: Shares one LTHR estimate across consumers and fans them out on the rayon pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

//! Engine facade
//!
//! The five analyses are independent pure functions of the same snapshot, so
//! the engine runs them with nested `rayon::join` calls. The result is
//! identical to running them one after another.

use std::borrow::Cow;

use crate::algorithms::LthrAlgorithm;
use crate::config::IntelligenceConfig;
use crate::heart_rate_zones::{HeartRateZoneAnalyzer, HeartRateZoneDistribution};
use crate::performance_factors::{PerformanceAnalysis, PerformanceFactorAnalyzer};
use crate::performance_prediction::{RacePerformancePredictor, RacePrediction};
use crate::recovery_advisor::{RecoveryAdvice, RecoveryRiskAdvisor};
use crate::training_load::{FitnessLoadTracker, FitnessMetrics, FitnessSummary};
use crate::training_stress::{SessionStress, TrainingStressEstimator};
use chrono::{Days, NaiveDate};
use pulsefolio_core::errors::AppResult;
use pulsefolio_core::models::{validate_activities, Activity, TrainingGoal};
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span, warn};

/// Caller options for one analysis run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Reference date; defaults to the latest activity date. Activities
    /// dated after it are left out of every analysis.
    pub as_of: Option<NaiveDate>,
    /// Race goals to compare predictions against
    pub goals: Vec<TrainingGoal>,
    /// Known LTHR in bpm, replacing the estimate from the history
    pub lthr_override: Option<f64>,
    /// Only analyze activities from the last N days before `as_of`
    pub history_days: Option<u32>,
}

impl AnalysisRequest {
    /// Request with an explicit reference date
    #[must_use]
    pub fn as_of(date: NaiveDate) -> Self {
        Self {
            as_of: Some(date),
            ..Self::default()
        }
    }

    /// Add a race goal
    #[must_use]
    pub fn with_goal(mut self, goal: TrainingGoal) -> Self {
        self.goals.push(goal);
        self
    }

    /// Use a known LTHR instead of estimating one
    #[must_use]
    pub const fn with_lthr(mut self, lthr: f64) -> Self {
        self.lthr_override = Some(lthr);
        self
    }

    /// Limit the history considered
    #[must_use]
    pub const fn with_history_days(mut self, days: u32) -> Self {
        self.history_days = Some(days);
        self
    }
}

/// Everything the engine derives from one history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// LTHR used for stress and zones, if any
    pub lthr: Option<f64>,
    /// Activities analyzed after history scoping
    pub activity_count: usize,
    /// Stress per session, chronological
    pub sessions: Vec<SessionStress>,
    /// Daily CTL/ATL/TSB series
    pub fitness: Vec<FitnessMetrics>,
    /// Latest fitness state
    pub fitness_summary: Option<FitnessSummary>,
    /// Race forecasts for the standard distances
    pub race_predictions: Vec<RacePrediction>,
    /// Injury risk and rest advice
    pub recovery: RecoveryAdvice,
    /// Heart rate zone distribution
    pub heart_rate_zones: HeartRateZoneDistribution,
    /// Speed against day, time and rest patterns
    pub performance: PerformanceAnalysis,
}

/// Stateless facade over the analysis components
#[derive(Debug, Clone, Default)]
pub struct AnalyticsEngine {
    config: IntelligenceConfig,
}

impl AnalyticsEngine {
    /// Create an engine with a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if the configuration fails validation
    pub fn new(config: IntelligenceConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig {
        &self.config
    }

    /// Run every analysis over `activities`
    ///
    /// The batch is validated once up front; an invalid activity rejects the
    /// whole batch. Sparse or empty histories produce empty results, not errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch fails validation, the LTHR override is
    /// outside the physiological range, or a goal is invalid
    pub fn analyze(
        &self,
        activities: &[Activity],
        request: &AnalysisRequest,
    ) -> AppResult<AnalysisReport> {
        let span = info_span!(
            "analytics_engine",
            activities = activities.len(),
            goals = request.goals.len()
        );
        let _entered = span.enter();

        validate_activities(activities).inspect_err(|error| {
            warn!(
                resource_id = error.context.resource_id.as_deref().unwrap_or("-"),
                "Rejected activity batch: {}", error.message
            );
        })?;
        for goal in &request.goals {
            goal.validate()?;
        }

        let scoped = Self::scope_history(activities, request);
        let activities = scoped.as_ref();
        let lthr = self.resolve_lthr(activities, request.lthr_override)?;
        debug!(scoped = activities.len(), ?lthr, "Prepared activity snapshot");

        let stress_estimator =
            TrainingStressEstimator::new(self.config.training_stress.clone(), lthr);
        let predictor = RacePerformancePredictor::new(self.config.race_prediction.clone());
        let advisor = RecoveryRiskAdvisor::new(self.config.recovery_risk.clone());
        let zone_analyzer = HeartRateZoneAnalyzer::new(self.config.heart_rate.clone());

        let ((fitness_result, race_predictions), (recovery, (heart_rate_zones, performance))) =
            rayon::join(
                || {
                    rayon::join(
                        || {
                            let sessions = stress_estimator.estimate_history(activities);
                            FitnessLoadTracker::from_sessions(&sessions, request.as_of)
                                .map(|metrics| (sessions, metrics))
                        },
                        || predictor.predict(activities, &request.goals),
                    )
                },
                || {
                    rayon::join(
                        || advisor.advise(activities, request.as_of),
                        || {
                            rayon::join(
                                || zone_analyzer.analyze(activities, lthr),
                                || PerformanceFactorAnalyzer::analyze(activities),
                            )
                        },
                    )
                },
            );

        let (sessions, fitness) = fitness_result?;
        let fitness_summary = FitnessLoadTracker::summarize(&fitness);

        debug!(
            days = fitness.len(),
            predictions = race_predictions.len(),
            risk_score = recovery.risk_score,
            "Completed analysis"
        );

        Ok(AnalysisReport {
            lthr,
            activity_count: activities.len(),
            sessions,
            fitness,
            fitness_summary,
            race_predictions,
            recovery,
            heart_rate_zones,
            performance,
        })
    }

    /// Keep activities between `history_days` before the reference date and
    /// `as_of` itself
    fn scope_history<'a>(
        activities: &'a [Activity],
        request: &AnalysisRequest,
    ) -> Cow<'a, [Activity]> {
        if request.history_days.is_none() && request.as_of.is_none() {
            return Cow::Borrowed(activities);
        }
        let Some(reference) = request
            .as_of
            .or_else(|| activities.iter().map(Activity::date).max())
        else {
            return Cow::Borrowed(activities);
        };
        let start = request.history_days.map_or(NaiveDate::MIN, |days| {
            reference
                .checked_sub_days(Days::new(u64::from(days)))
                .unwrap_or(NaiveDate::MIN)
        });
        Cow::Owned(
            activities
                .iter()
                .filter(|a| (start..=reference).contains(&a.date()))
                .cloned()
                .collect(),
        )
    }

    fn resolve_lthr(
        &self,
        activities: &[Activity],
        lthr_override: Option<f64>,
    ) -> AppResult<Option<f64>> {
        let algorithm = lthr_override.map_or(LthrAlgorithm::ThresholdEffortProxy, |bpm| {
            LthrAlgorithm::Fixed { bpm }
        });
        debug!(algorithm = algorithm.name(), "Resolving LTHR");
        algorithm.estimate_lthr(activities, &self.config.heart_rate)
    }
}

// ABOUTME: Race time prediction with Riegel extrapolation, confidence, and goal tracking
// ABOUTME: Selects representative recent runs per target distance and projects goal dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

use std::cmp::Ordering;

use crate::config::intelligence::RacePredictionConfig;
use crate::physiological_constants::race_prediction::{
    CLOSE_GOAL_GAP_PERCENT, CONFIDENCE_SAMPLE_HALF_SATURATION, REACHABLE_GOAL_GAP_PERCENT,
    RIEGEL_EXPONENT,
};
use crate::statistical_analysis::StatisticalAnalyzer;
use chrono::{Days, NaiveDate};
use pulsefolio_core::constants::race_distances::{
    self, DISTANCE_MATCH_TOLERANCE_KM, STANDARD_RACE_DISTANCES_KM,
};
use pulsefolio_core::constants::units::SECONDS_PER_MINUTE;
use pulsefolio_core::errors::{AppError, AppResult};
use pulsefolio_core::models::{Activity, SportType, TrainingGoal};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How far the prediction is from a goal, relative to the target time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalProgress {
    /// Predicted time already meets the target
    Achievable,
    /// Within 5% of the target
    Close,
    /// Within 10% of the target
    Reachable,
    /// More than 10% away
    Distant,
}

impl GoalProgress {
    /// Classify a gap (predicted - target) against the target time
    #[must_use]
    pub fn from_gap(gap_min: f64, target_time_min: f64) -> Self {
        if gap_min <= 0.0 {
            return Self::Achievable;
        }
        let gap_percent = StatisticalAnalyzer::safe_percent(gap_min, target_time_min);
        if gap_percent <= CLOSE_GOAL_GAP_PERCENT {
            Self::Close
        } else if gap_percent <= REACHABLE_GOAL_GAP_PERCENT {
            Self::Reachable
        } else {
            Self::Distant
        }
    }
}

/// Predicted race time for one target distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RacePrediction {
    /// Target distance in kilometers
    pub distance_km: f64,
    /// Display label ("5K", "Half Marathon", ...)
    pub label: String,
    /// Predicted finishing time in minutes
    pub predicted_time_min: f64,
    /// Pace of the reference effort in minutes per kilometer
    pub current_pace_min_per_km: f64,
    /// Confidence in the prediction (0-100)
    pub confidence_percent: u8,
    /// Target time of the matching goal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_time_min: Option<f64>,
    /// Projected days until the goal is met at the observed improvement rate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_target_days: Option<u32>,
    /// Predicted minus target time (positive means slower than the goal)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_gap_min: Option<f64>,
    /// Gap classification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_progress: Option<GoalProgress>,
    /// Identifier of the reference activity
    pub reference_activity_id: String,
    /// Distance of the reference effort in kilometers
    pub reference_distance_km: f64,
    /// Moving time of the reference effort in minutes
    pub reference_time_min: f64,
    /// Qualifying recent efforts (1 for a best-pace fallback)
    pub qualifying_efforts: usize,
}

/// A candidate effort with its Riegel-equivalent time at the target
struct Candidate<'a> {
    activity: &'a Activity,
    equivalent_time_min: f64,
}

/// Race performance predictor
#[derive(Debug, Clone, Default)]
pub struct RacePerformancePredictor {
    config: RacePredictionConfig,
}

impl RacePerformancePredictor {
    /// Create a predictor with the given configuration
    #[must_use]
    pub const fn new(config: RacePredictionConfig) -> Self {
        Self { config }
    }

    /// Predict race time using Riegel formula
    ///
    /// Riegel's formula: Time2 = Time1 × (Distance2 / Distance1)^1.06
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` if any distance or time is non-positive
    pub fn predict_time_riegel(
        known_distance_km: f64,
        known_time_min: f64,
        target_distance_km: f64,
    ) -> AppResult<f64> {
        Self::riegel_with_exponent(
            known_distance_km,
            known_time_min,
            target_distance_km,
            RIEGEL_EXPONENT,
        )
    }

    fn riegel_with_exponent(
        known_distance_km: f64,
        known_time_min: f64,
        target_distance_km: f64,
        exponent: f64,
    ) -> AppResult<f64> {
        if known_distance_km <= 0.0 || known_time_min <= 0.0 || target_distance_km <= 0.0 {
            return Err(AppError::invalid_input(
                "All distances and times must be positive".to_owned(),
            ));
        }
        let ratio = target_distance_km / known_distance_km;
        Ok(known_time_min * ratio.powf(exponent))
    }

    /// Confidence (0-100) for a distance match and effort count
    ///
    /// `100 × (w_d × match^0.5 + w_s × n / (n + 2))` where `match` is the
    /// min/max ratio of reference and target distance. Increases with both
    /// the match and the number of efforts.
    #[must_use]
    pub fn confidence_percent(&self, distance_match: f64, efforts: usize) -> u8 {
        let n = efforts as f64;
        let distance_term = distance_match.clamp(0.0, 1.0).sqrt();
        let sample_term = n / (n + CONFIDENCE_SAMPLE_HALF_SATURATION);
        let raw = 100.0
            * self.config.confidence_distance_weight.mul_add(
                distance_term,
                self.config.confidence_sample_weight * sample_term,
            );
        if raw.is_finite() {
            raw.clamp(0.0, 100.0).round() as u8
        } else {
            0
        }
    }

    /// Predict the standard race distances (5K, 10K, half, marathon)
    #[must_use]
    pub fn predict(&self, activities: &[Activity], goals: &[TrainingGoal]) -> Vec<RacePrediction> {
        self.predict_distances(activities, &STANDARD_RACE_DISTANCES_KM, goals)
    }

    /// Predict arbitrary target distances
    ///
    /// Returns an empty collection when no recent run has distance and time.
    #[must_use]
    pub fn predict_distances(
        &self,
        activities: &[Activity],
        targets_km: &[f64],
        goals: &[TrainingGoal],
    ) -> Vec<RacePrediction> {
        let recent = self.recent_runs(activities);
        if recent.is_empty() {
            return Vec::new();
        }

        let predictions: Vec<RacePrediction> = targets_km
            .iter()
            .filter(|target| target.is_finite() && **target > 0.0)
            .filter_map(|target| self.predict_target(&recent, *target, goals))
            .collect();

        debug!(
            recent_runs = recent.len(),
            predictions = predictions.len(),
            "Generated race predictions"
        );
        predictions
    }

    /// Runs with a usable pace inside the recent window of the latest run
    fn recent_runs<'a>(&self, activities: &'a [Activity]) -> Vec<&'a Activity> {
        let runs: Vec<&Activity> = activities
            .iter()
            .filter(|a| a.sport_type() == SportType::Run && a.has_pace())
            .collect();
        let Some(latest) = runs.iter().map(|a| a.date()).max() else {
            return Vec::new();
        };
        let window_start = latest
            .checked_sub_days(Days::new(
                self.config.recent_effort_window_days.unsigned_abs(),
            ))
            .unwrap_or(NaiveDate::MIN);
        runs.into_iter()
            .filter(|a| a.date() >= window_start)
            .collect()
    }

    fn predict_target(
        &self,
        recent: &[&Activity],
        target_km: f64,
        goals: &[TrainingGoal],
    ) -> Option<RacePrediction> {
        let qualifying: Vec<&Activity> = recent
            .iter()
            .copied()
            .filter(|a| {
                distance_ratio(a.distance_km(), target_km)
                    <= self.config.qualifying_distance_ratio
            })
            .collect();

        let (pool, efforts) = if qualifying.is_empty() {
            let best = recent.iter().copied().max_by(|a, b| {
                a.average_speed_kmh()
                    .partial_cmp(&b.average_speed_kmh())
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a.start_date_local().cmp(&b.start_date_local()))
            })?;
            (vec![best], 1)
        } else {
            let count = qualifying.len();
            (qualifying, count)
        };

        let candidates: Vec<Candidate<'_>> = pool
            .into_iter()
            .filter_map(|activity| {
                self.riegel(activity.distance_km(), activity.moving_time_min(), target_km)
                    .ok()
                    .filter(|time| time.is_finite())
                    .map(|equivalent_time_min| Candidate {
                        activity,
                        equivalent_time_min,
                    })
            })
            .collect();

        let reference = candidates.iter().min_by(|a, b| {
            a.equivalent_time_min
                .partial_cmp(&b.equivalent_time_min)
                .unwrap_or(Ordering::Equal)
                .then_with(|| {
                    b.activity
                        .start_date_local()
                        .cmp(&a.activity.start_date_local())
                })
        })?;

        let activity = reference.activity;
        let predicted_time_min = reference.equivalent_time_min;
        let confidence_percent =
            self.confidence_percent(distance_match(activity.distance_km(), target_km), efforts);

        let goal = goals
            .iter()
            .find(|goal| goal.matches_distance(target_km, DISTANCE_MATCH_TOLERANCE_KM));
        let target_time_min = goal.map(|g| g.target_time_min);
        let goal_gap_min = target_time_min.map(|target| predicted_time_min - target);
        let goal_progress = target_time_min
            .zip(goal_gap_min)
            .map(|(target, gap)| GoalProgress::from_gap(gap, target));
        let time_to_target_days = goal_gap_min
            .filter(|gap| *gap > 0.0)
            .and_then(|gap| Self::days_to_close_gap(&candidates, gap));

        Some(RacePrediction {
            distance_km: target_km,
            label: race_distances::label(target_km),
            predicted_time_min,
            current_pace_min_per_km: activity.pace_min_per_km().unwrap_or_default(),
            confidence_percent,
            target_time_min,
            time_to_target_days,
            goal_gap_min,
            goal_progress,
            reference_activity_id: activity.id().to_owned(),
            reference_distance_km: activity.distance_km(),
            reference_time_min: activity.moving_time_min(),
            qualifying_efforts: efforts,
        })
    }

    fn riegel(
        &self,
        known_distance_km: f64,
        known_time_min: f64,
        target_km: f64,
    ) -> AppResult<f64> {
        Self::riegel_with_exponent(
            known_distance_km,
            known_time_min,
            target_km,
            self.config.riegel_exponent,
        )
    }

    /// Days to close `gap_min` at the improvement rate of the candidate efforts
    ///
    /// The rate is the negated least-squares slope of equivalent time against
    /// days. No improving trend means no projection.
    fn days_to_close_gap(candidates: &[Candidate<'_>], gap_min: f64) -> Option<u32> {
        let first_date = candidates.iter().map(|c| c.activity.date()).min()?;
        let points: Vec<(f64, f64)> = candidates
            .iter()
            .map(|c| {
                (
                    (c.activity.date() - first_date).num_days() as f64,
                    c.equivalent_time_min,
                )
            })
            .collect();

        let regression = StatisticalAnalyzer::linear_regression(&points).ok()?;
        let improvement_per_day = -regression.slope;
        if !improvement_per_day.is_finite() || improvement_per_day <= 0.0 {
            return None;
        }
        let days = (gap_min / improvement_per_day).ceil();
        if days.is_finite() && days <= f64::from(u32::MAX) {
            Some(days as u32)
        } else {
            None
        }
    }

    /// Format time in minutes to human-readable format (H:MM:SS or M:SS)
    #[must_use]
    pub fn format_time(minutes: f64) -> String {
        let total_seconds = (minutes.max(0.0) * SECONDS_PER_MINUTE).round() as u64;
        let hours = total_seconds / 3600;
        let mins = (total_seconds % 3600) / 60;
        let secs = total_seconds % 60;

        if hours > 0 {
            format!("{hours}:{mins:02}:{secs:02}")
        } else {
            format!("{mins}:{secs:02}")
        }
    }

    /// Format pace in min/km as M:SS
    #[must_use]
    pub fn format_pace(min_per_km: f64) -> String {
        if !min_per_km.is_finite() || min_per_km <= 0.0 {
            return "N/A".to_owned();
        }
        Self::format_time(min_per_km)
    }
}

/// Ratio of the longer to the shorter distance (1.0 is an exact match)
fn distance_ratio(distance_km: f64, target_km: f64) -> f64 {
    let shorter = distance_km.min(target_km);
    if shorter > 0.0 {
        distance_km.max(target_km) / shorter
    } else {
        f64::INFINITY
    }
}

/// Ratio of the shorter to the longer distance (1.0 is an exact match)
fn distance_match(distance_km: f64, target_km: f64) -> f64 {
    let longer = distance_km.max(target_km);
    if longer > 0.0 {
        distance_km.min(target_km) / longer
    } else {
        0.0
    }
}

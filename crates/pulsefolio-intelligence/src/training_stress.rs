// ABOUTME: Training stress estimation for single activities and whole histories
// ABOUTME: Heart-rate zone weighting with a pace-relative fallback when HR is missing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

use std::collections::{HashMap, VecDeque};

use crate::algorithms::ZoneWeightedTrimp;
use crate::config::intelligence::TrainingStressConfig;
use crate::physiological_constants::training_stress::{MAX_ZONE_MULTIPLIER, MIN_ZONE_MULTIPLIER};
use chrono::NaiveDate;
use pulsefolio_core::constants::units::MINUTES_PER_HOUR;
use pulsefolio_core::models::{Activity, SportType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How a session's stress was derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressMethod {
    /// Zone-weighted from average heart rate and LTHR
    HeartRate,
    /// Pace relative to the rolling same-sport average
    Pace,
    /// No usable pace; scored at the baseline zone
    Baseline,
    /// Zero moving time
    NoDuration,
}

/// Stress contributed by one activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStress {
    /// Activity identifier
    pub activity_id: String,
    /// Calendar day the activity started on
    pub date: NaiveDate,
    /// Training stress points (non-negative)
    pub stress: f64,
    /// Derivation used
    pub method: StressMethod,
}

/// Converts activities into scalar training stress
#[derive(Debug, Clone)]
pub struct TrainingStressEstimator {
    config: TrainingStressConfig,
    lthr: Option<f64>,
}

impl TrainingStressEstimator {
    /// Create an estimator; `lthr` enables the heart-rate path
    #[must_use]
    pub fn new(config: TrainingStressConfig, lthr: Option<f64>) -> Self {
        Self {
            config,
            lthr: lthr.filter(|value| value.is_finite() && *value > 0.0),
        }
    }

    /// Estimate stress for one activity
    ///
    /// `rolling_avg_speed_kmh` is the athlete's recent same-sport average speed,
    /// used only on the pace path. `None` treats the session as average.
    #[must_use]
    pub fn estimate(&self, activity: &Activity, rolling_avg_speed_kmh: Option<f64>) -> f64 {
        self.estimate_with_method(activity, rolling_avg_speed_kmh).0
    }

    fn estimate_with_method(
        &self,
        activity: &Activity,
        rolling_avg_speed_kmh: Option<f64>,
    ) -> (f64, StressMethod) {
        let minutes = activity.moving_time_min();
        if minutes <= 0.0 {
            return (0.0, StressMethod::NoDuration);
        }

        if let (Some(avg_hr), Some(lthr)) = (activity.average_heartrate(), self.lthr) {
            if let Ok(stress) =
                ZoneWeightedTrimp::calculate(avg_hr, minutes, lthr, self.config.zone_hour_points)
            {
                return (stress, StressMethod::HeartRate);
            }
        }

        if activity.has_pace() {
            let factor =
                self.pace_intensity_factor(activity.average_speed_kmh(), rolling_avg_speed_kmh);
            (minutes * factor, StressMethod::Pace)
        } else {
            let factor = self.config.baseline_zone_multiplier * self.config.zone_hour_points
                / MINUTES_PER_HOUR;
            (minutes * factor, StressMethod::Baseline)
        }
    }

    /// Stress points per minute for a session at `speed_kmh`
    ///
    /// `baseline_zone × (speed / rolling_avg)^exponent × zone_hour_points / 60`,
    /// with the effective zone multiplier clamped to 1-5. Without a positive
    /// rolling average the speed ratio is 1.
    #[must_use]
    pub fn pace_intensity_factor(&self, speed_kmh: f64, rolling_avg_speed_kmh: Option<f64>) -> f64 {
        let ratio = rolling_avg_speed_kmh
            .filter(|avg| *avg > 0.0)
            .map_or(1.0, |avg| speed_kmh / avg);
        let multiplier = (self.config.baseline_zone_multiplier
            * ratio.powf(self.config.pace_intensity_exponent))
        .clamp(MIN_ZONE_MULTIPLIER, MAX_ZONE_MULTIPLIER);
        multiplier * self.config.zone_hour_points / MINUTES_PER_HOUR
    }

    /// Estimate stress for every activity in chronological order
    ///
    /// The rolling average for each activity is the mean speed of the
    /// previous `rolling_pace_window` activities of the same sport that had a
    /// usable pace.
    #[must_use]
    pub fn estimate_history(&self, activities: &[Activity]) -> Vec<SessionStress> {
        let mut ordered: Vec<&Activity> = activities.iter().collect();
        ordered.sort_by(|a, b| {
            a.start_date_local()
                .cmp(&b.start_date_local())
                .then_with(|| a.id().cmp(b.id()))
        });

        let window = self.config.rolling_pace_window.max(1);
        let mut recent_speeds: HashMap<SportType, VecDeque<f64>> = HashMap::new();
        let mut sessions = Vec::with_capacity(ordered.len());

        for activity in ordered {
            let history = recent_speeds.entry(activity.sport_type()).or_default();
            let rolling_avg =
                (!history.is_empty()).then(|| history.iter().sum::<f64>() / history.len() as f64);

            let (stress, method) = self.estimate_with_method(activity, rolling_avg);
            sessions.push(SessionStress {
                activity_id: activity.id().to_owned(),
                date: activity.date(),
                stress,
                method,
            });

            if activity.has_pace() {
                if history.len() == window {
                    history.pop_front();
                }
                history.push_back(activity.average_speed_kmh());
            }
        }

        debug!(
            sessions = sessions.len(),
            heart_rate_path = sessions
                .iter()
                .filter(|s| s.method == StressMethod::HeartRate)
                .count(),
            "Estimated training stress"
        );
        sessions
    }
}

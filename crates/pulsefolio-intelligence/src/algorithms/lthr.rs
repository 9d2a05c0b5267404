// ABOUTME: LTHR (Lactate Threshold Heart Rate) estimation from recorded runs or known values
// ABOUTME: Implements a threshold-effort proxy, a MaxHR percentage method, and a fixed override
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

use crate::config::intelligence::HeartRateConfig;
use crate::physiological_constants::heart_rate::{
    MAX_LTHR_FRACTION, MAX_PHYSIOLOGICAL_HR, MIN_LTHR_FRACTION, MIN_PHYSIOLOGICAL_HR,
};
use pulsefolio_core::errors::{AppError, AppResult};
use pulsefolio_core::models::{Activity, SportType};
use serde::{Deserialize, Serialize};

/// How the lactate threshold heart rate is obtained
///
/// The proxy only approximates a lab-measured threshold; callers that know
/// their LTHR should pass it as [`LthrAlgorithm::Fixed`].
///
/// See Friel, "The Cyclist's Training Bible" (2009) for the field-test
/// conventions behind the 20-90 minute effort window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LthrAlgorithm {
    /// Threshold-effort proxy from the activity history
    ///
    /// Candidates are runs lasting 20-90 minutes whose average speed is at or
    /// above the mean speed of all runs with heart rate. The highest average
    /// heart rate among them is the estimate. Without candidates, the highest
    /// average heart rate of any run of at least 20 minutes is used, and
    /// failing that, of any run with heart rate at all.
    #[default]
    ThresholdEffortProxy,

    /// `max_hr * percentage`
    FromMaxHr {
        /// Measured or age-predicted maximum, in bpm
        max_hr: f64,
        /// Fraction of the maximum, between 0.80 and 0.95
        percentage: f64,
    },

    /// Known LTHR supplied by the caller
    Fixed {
        /// Lactate threshold heart rate (bpm)
        bpm: f64,
    },
}

impl LthrAlgorithm {
    /// Resolve a threshold in bpm, or `None` when the proxy has no
    /// heart-rate runs to look at
    ///
    /// # Errors
    ///
    /// `ValueOutOfRange` when a supplied bpm falls outside 40-220 or the
    /// fraction outside 0.80-0.95.
    pub fn estimate_lthr(
        &self,
        activities: &[Activity],
        config: &HeartRateConfig,
    ) -> AppResult<Option<f64>> {
        match self {
            Self::ThresholdEffortProxy => Ok(Self::threshold_effort_proxy(activities, config)),
            Self::FromMaxHr { max_hr, percentage } => {
                check_bpm(*max_hr, "max HR")?;
                if !(MIN_LTHR_FRACTION..=MAX_LTHR_FRACTION).contains(percentage) {
                    return Err(AppError::out_of_range(format!(
                        "LTHR fraction {percentage:.2} not within \
                         {MIN_LTHR_FRACTION:.2}-{MAX_LTHR_FRACTION:.2}"
                    )));
                }
                Ok(Some(max_hr * percentage))
            }
            Self::Fixed { bpm } => check_bpm(*bpm, "LTHR").map(|()| Some(*bpm)),
        }
    }

    fn threshold_effort_proxy(activities: &[Activity], config: &HeartRateConfig) -> Option<f64> {
        let hr_runs: Vec<(&Activity, f64)> = activities
            .iter()
            .filter(|a| a.sport_type() == SportType::Run && a.moving_time_min() > 0.0)
            .filter_map(|a| a.average_heartrate().map(|hr| (a, hr)))
            .collect();

        if hr_runs.is_empty() {
            return None;
        }

        let paced: Vec<f64> = hr_runs
            .iter()
            .filter(|(a, _)| a.has_pace())
            .map(|(a, _)| a.average_speed_kmh())
            .collect();
        let mean_speed = if paced.is_empty() {
            0.0
        } else {
            paced.iter().sum::<f64>() / paced.len() as f64
        };

        let duration_window =
            config.threshold_effort_min_minutes..=config.threshold_effort_max_minutes;
        let threshold_like = hr_runs
            .iter()
            .filter(|(a, _)| {
                a.has_pace()
                    && duration_window.contains(&a.moving_time_min())
                    && a.average_speed_kmh() >= mean_speed
            })
            .map(|(_, hr)| *hr)
            .fold(None, max_option);

        threshold_like
            .or_else(|| {
                hr_runs
                    .iter()
                    .filter(|(a, _)| a.moving_time_min() >= config.threshold_effort_min_minutes)
                    .map(|(_, hr)| *hr)
                    .fold(None, max_option)
            })
            // no heart-rate run reached the effort window
            .or_else(|| hr_runs.iter().map(|(_, hr)| *hr).fold(None, max_option))
    }

    /// Stable identifier used in logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ThresholdEffortProxy => "threshold_effort_proxy",
            Self::FromMaxHr { .. } => "from_max_hr",
            Self::Fixed { .. } => "fixed",
        }
    }
}

fn check_bpm(bpm: f64, label: &str) -> AppResult<()> {
    if (MIN_PHYSIOLOGICAL_HR..=MAX_PHYSIOLOGICAL_HR).contains(&bpm) {
        Ok(())
    } else {
        Err(AppError::out_of_range(format!(
            "{label} of {bpm:.1} bpm not within \
             {MIN_PHYSIOLOGICAL_HR:.0}-{MAX_PHYSIOLOGICAL_HR:.0}"
        )))
    }
}

fn max_option(best: Option<f64>, value: f64) -> Option<f64> {
    Some(best.map_or(value, |current| current.max(value)))
}

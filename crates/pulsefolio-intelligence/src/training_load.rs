// ABOUTME: Fitness load tracking with CTL, ATL, and TSB daily series
// ABOUTME: Implements exponential moving averages over gap-filled daily training stress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

use std::collections::BTreeMap;

use crate::physiological_constants::fitness_load::{
    ACWR_HIGH_RISK_THRESHOLD, ATL_TIME_CONSTANT_DAYS, CTL_TIME_CONSTANT_DAYS,
    HIGH_FATIGUE_TSB_THRESHOLD, OPTIMAL_FORM_TSB_THRESHOLD,
};
use crate::training_stress::SessionStress;
use chrono::{Days, NaiveDate};
use pulsefolio_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Training stress accumulated on one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyLoad {
    /// Calendar day
    pub date: NaiveDate,
    /// Summed stress of all sessions that day (0 on rest days)
    pub training_stress: f64,
}

/// Fitness state for one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitnessMetrics {
    /// Calendar day
    pub date: NaiveDate,
    /// Chronic Training Load (42-day exponential average), represents fitness
    pub ctl: f64,
    /// Acute Training Load (7-day exponential average), represents fatigue
    pub atl: f64,
    /// Training Stress Balance entering the day (previous day's CTL - ATL)
    pub tsb: f64,
}

/// Form interpretation of TSB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    /// TSB > 10: fresh and ready to perform
    OptimalForm,
    /// TSB -10 to 10: balanced training
    Stable,
    /// TSB < -10: accumulated fatigue
    HighFatigue,
}

impl FormStatus {
    /// Interpret a TSB value
    #[must_use]
    pub fn from_tsb(tsb: f64) -> Self {
        if tsb > OPTIMAL_FORM_TSB_THRESHOLD {
            Self::OptimalForm
        } else if tsb < HIGH_FATIGUE_TSB_THRESHOLD {
            Self::HighFatigue
        } else {
            Self::Stable
        }
    }

    /// Short label for display
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::OptimalForm => "optimal form",
            Self::Stable => "stable",
            Self::HighFatigue => "high fatigue",
        }
    }
}

/// Snapshot of the most recent fitness day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessSummary {
    /// Day the summary describes
    pub date: NaiveDate,
    /// Chronic training load
    pub ctl: f64,
    /// Acute training load
    pub atl: f64,
    /// Training stress balance
    pub tsb: f64,
    /// Form interpretation of `tsb`
    pub form_status: FormStatus,
    /// Acute:chronic workload ratio (ATL / CTL); `None` when CTL is zero
    pub acute_chronic_ratio: Option<f64>,
    /// Whether the ratio exceeds the commonly cited 1.5 injury-risk threshold
    pub acwr_elevated: bool,
}

/// Builds daily load series and runs the CTL/ATL/TSB recurrence
pub struct FitnessLoadTracker;

impl FitnessLoadTracker {
    /// Sum session stress per calendar day and gap-fill rest days with zero
    ///
    /// The series runs from the first session date to `through` (or the last
    /// session date). Sessions after `through` are ignored; a `through` before
    /// the first session yields an empty series.
    #[must_use]
    pub fn daily_loads(sessions: &[SessionStress], through: Option<NaiveDate>) -> Vec<DailyLoad> {
        let mut per_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for session in sessions {
            if through.is_some_and(|end| session.date > end) {
                continue;
            }
            *per_day.entry(session.date).or_insert(0.0) += session.stress;
        }

        let Some((&first, _)) = per_day.first_key_value() else {
            return Vec::new();
        };
        let last = match through {
            Some(end) => end,
            None => per_day.last_key_value().map_or(first, |(&date, _)| date),
        };

        first
            .iter_days()
            .take_while(|date| *date <= last)
            .map(|date| DailyLoad {
                date,
                training_stress: per_day.get(&date).copied().unwrap_or(0.0),
            })
            .collect()
    }

    /// Run the exponentially weighted recurrence over contiguous daily loads
    ///
    /// ```text
    /// ctl[d] = ctl[d-1] + (stress[d] - ctl[d-1]) / 42
    /// atl[d] = atl[d-1] + (stress[d] - atl[d-1]) / 7
    /// tsb[d] = ctl[d-1] - atl[d-1]
    /// ```
    ///
    /// seeded with `ctl[0] = atl[0] = stress[0]` and `tsb[0] = 0`. TSB uses the
    /// previous day's values: it describes the state entering the day.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if loads are negative or non-finite,
    /// out of order, or skip a day
    pub fn compute(daily_loads: &[DailyLoad]) -> AppResult<Vec<FitnessMetrics>> {
        Self::validate_series(daily_loads)?;

        let Some(seed) = daily_loads.first() else {
            return Ok(Vec::new());
        };

        let mut metrics = Vec::with_capacity(daily_loads.len());
        let mut ctl = seed.training_stress;
        let mut atl = seed.training_stress;
        metrics.push(FitnessMetrics {
            date: seed.date,
            ctl,
            atl,
            tsb: 0.0,
        });

        for day in &daily_loads[1..] {
            let tsb = ctl - atl;
            ctl += (day.training_stress - ctl) / CTL_TIME_CONSTANT_DAYS;
            atl += (day.training_stress - atl) / ATL_TIME_CONSTANT_DAYS;
            metrics.push(FitnessMetrics {
                date: day.date,
                ctl,
                atl,
                tsb,
            });
        }

        debug!(days = metrics.len(), ctl, atl, "Computed fitness series");
        Ok(metrics)
    }

    /// Daily loads followed by the recurrence in one call
    ///
    /// # Errors
    ///
    /// Propagates validation errors from [`Self::compute`]
    pub fn from_sessions(
        sessions: &[SessionStress],
        through: Option<NaiveDate>,
    ) -> AppResult<Vec<FitnessMetrics>> {
        Self::compute(&Self::daily_loads(sessions, through))
    }

    fn validate_series(daily_loads: &[DailyLoad]) -> AppResult<()> {
        for load in daily_loads {
            if !load.training_stress.is_finite() || load.training_stress < 0.0 {
                return Err(AppError::invalid_input(format!(
                    "training stress on {} must be a finite non-negative number, got {}",
                    load.date, load.training_stress
                )));
            }
        }
        for pair in daily_loads.windows(2) {
            let expected = pair[0].date.checked_add_days(Days::new(1));
            if expected != Some(pair[1].date) {
                return Err(AppError::invalid_input(format!(
                    "daily loads must be sorted and contiguous: {} is followed by {}",
                    pair[0].date, pair[1].date
                )));
            }
        }
        Ok(())
    }

    /// Summary of the last day in the series, `None` for an empty series
    #[must_use]
    pub fn summarize(metrics: &[FitnessMetrics]) -> Option<FitnessSummary> {
        let latest = metrics.last()?;
        let acute_chronic_ratio = (latest.ctl > 0.0).then(|| latest.atl / latest.ctl);
        Some(FitnessSummary {
            date: latest.date,
            ctl: latest.ctl,
            atl: latest.atl,
            tsb: latest.tsb,
            form_status: FormStatus::from_tsb(latest.tsb),
            acute_chronic_ratio,
            acwr_elevated: acute_chronic_ratio.is_some_and(|r| r > ACWR_HIGH_RISK_THRESHOLD),
        })
    }

    /// Last `days` entries of the series
    #[must_use]
    pub fn trailing_window(metrics: &[FitnessMetrics], days: usize) -> &[FitnessMetrics] {
        &metrics[metrics.len().saturating_sub(days)..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(offset: u64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.checked_add_days(Days::new(offset)))
            .unwrap_or_default()
    }

    #[test]
    fn test_form_status_thresholds() {
        assert_eq!(FormStatus::from_tsb(10.5), FormStatus::OptimalForm);
        assert_eq!(FormStatus::from_tsb(10.0), FormStatus::Stable);
        assert_eq!(FormStatus::from_tsb(-10.0), FormStatus::Stable);
        assert_eq!(FormStatus::from_tsb(-10.5), FormStatus::HighFatigue);
    }

    #[test]
    fn test_gap_is_rejected() {
        let loads = [
            DailyLoad {
                date: day(0),
                training_stress: 10.0,
            },
            DailyLoad {
                date: day(2),
                training_stress: 10.0,
            },
        ];
        assert!(FitnessLoadTracker::compute(&loads).is_err());
    }

    #[test]
    fn test_tsb_lags_one_day() {
        let loads = [
            DailyLoad {
                date: day(0),
                training_stress: 0.0,
            },
            DailyLoad {
                date: day(1),
                training_stress: 70.0,
            },
            DailyLoad {
                date: day(2),
                training_stress: 0.0,
            },
        ];
        let metrics = FitnessLoadTracker::compute(&loads).unwrap_or_default();
        assert_eq!(metrics.len(), 3);
        // Day 1 training is not reflected in day 1 TSB
        assert!(metrics[1].tsb.abs() < f64::EPSILON);
        assert!((metrics[2].tsb - (metrics[1].ctl - metrics[1].atl)).abs() < 1e-12);
        assert!(metrics[2].tsb < 0.0);
    }

    #[test]
    fn test_trailing_window_clamps() {
        let loads: Vec<DailyLoad> = (0..5)
            .map(|offset| DailyLoad {
                date: day(offset),
                training_stress: 1.0,
            })
            .collect();
        let metrics = FitnessLoadTracker::compute(&loads).unwrap_or_default();
        assert_eq!(FitnessLoadTracker::trailing_window(&metrics, 3).len(), 3);
        assert_eq!(FitnessLoadTracker::trailing_window(&metrics, 90).len(), 5);
    }
}

// ABOUTME: Injury and overtraining risk scoring from weekly load trends
// ABOUTME: Applies the 10% rule, volume-vs-average and long-effort spike rules to advise rest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

//! Recovery Risk Advisor
//!
//! Scores risk from three excess-only rules over 7-day windows ending on the
//! `as_of` date. Each rule contributes nothing below its threshold, so a
//! lighter week can never raise the score.
//!
//! # Scientific References
//!
//! - Gabbett, T.J. (2016). The training-injury prevention paradox: should athletes be training
//!   smarter and harder? *British Journal of Sports Medicine*, 50(5), 273-280.
//!
//! - Nielsen, R.O., et al. (2014). Excessive progression in weekly running distance and risk of
//!   running-related injuries. *JOSPT*, 44(10), 739-747.

use crate::config::intelligence::{RecoveryRiskConfig, RiskRuleConfig};
use crate::physiological_constants::recovery_risk::{MAX_RISK_SCORE, ROLLING_WEEKS};
use crate::statistical_analysis::StatisticalAnalyzer;
use chrono::{Days, NaiveDate};
use pulsefolio_core::constants::units::DAYS_PER_WEEK;
use pulsefolio_core::models::Activity;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Readiness derived from the risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryStatus {
    /// Score below 40: train as planned
    Ready,
    /// Score 40 to 70: keep it easy
    Caution,
    /// Score above 70: rest
    Rest,
}

/// Rule that raised the risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskRule {
    /// Weekly distance rose more than 10% over last week
    TenPercentRule,
    /// Weekly distance exceeds the 4-week rolling average
    VolumeVsAverage,
    /// Longest effort exceeds the rolling average longest effort
    LongEffortSpike,
}

impl RiskRule {
    /// Human-readable explanation of the rule
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::TenPercentRule => "Weekly distance increased by more than 10% over last week",
            Self::VolumeVsAverage => "Weekly distance is well above your 4-week average",
            Self::LongEffortSpike => "Longest effort this week is far beyond your usual long effort",
        }
    }
}

/// One rule that contributed to the score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskTrigger {
    /// Rule that fired
    pub rule: RiskRule,
    /// Observed value in percent (increase, excess, or share of average)
    pub observed_percent: f64,
    /// Threshold the observation exceeded
    pub threshold_percent: f64,
    /// Points added to the score
    pub contribution: f64,
}

/// Structured cause of a risk score
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskReason {
    /// Triggered rules, strongest contribution first
    pub triggers: Vec<RiskTrigger>,
}

impl RiskReason {
    /// Whether no rule fired
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// Strongest rule, if any fired
    #[must_use]
    pub fn primary(&self) -> Option<RiskRule> {
        self.triggers.first().map(|trigger| trigger.rule)
    }

    /// Whether a given rule fired
    #[must_use]
    pub fn cites(&self, rule: RiskRule) -> bool {
        self.triggers.iter().any(|trigger| trigger.rule == rule)
    }
}

/// Weekly load figures the score is computed from
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadSnapshot {
    /// Last day of the current week (`None` without activities)
    pub as_of: Option<NaiveDate>,
    /// Distance over the 7 days ending on `as_of`
    pub this_week_km: f64,
    /// Distance over the preceding 7 days
    pub last_week_km: f64,
    /// Mean weekly distance over the 4 weeks before this week
    pub rolling_average_km: f64,
    /// Longest single effort this week
    pub longest_this_week_km: f64,
    /// Mean weekly longest effort over the 4 previous weeks that had activity
    pub rolling_average_longest_km: f64,
    /// Days between the latest activity and `as_of`
    pub days_since_last_activity: Option<i64>,
}

/// Concrete next step for the athlete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryAction {
    /// A hard session is fine
    IntenseSessionOk,
    /// A long effort is fine
    LongEffortOk,
    /// Keep up hydration
    StayHydrated,
    /// Watch for unusual soreness
    ListenToBody,
    /// Easy endurance only
    EasyEnduranceOnly,
    /// Skip intervals and races
    AvoidIntervals,
    /// Track fatigue and sleep closely
    MonitorFatigue,
    /// Take a full rest day
    FullRestDay,
    /// Prioritize sleep and nutrition
    PrioritizeSleep,
    /// Light mobility or walking at most
    ActiveRecoveryOnly,
    /// No intensity until the score drops
    AvoidIntensity,
}

impl RecoveryAction {
    /// Actions recommended for a status
    #[must_use]
    pub fn for_status(status: RecoveryStatus) -> Vec<Self> {
        match status {
            RecoveryStatus::Ready => vec![
                Self::IntenseSessionOk,
                Self::LongEffortOk,
                Self::StayHydrated,
                Self::ListenToBody,
            ],
            RecoveryStatus::Caution => vec![
                Self::EasyEnduranceOnly,
                Self::AvoidIntervals,
                Self::MonitorFatigue,
            ],
            RecoveryStatus::Rest => vec![
                Self::FullRestDay,
                Self::PrioritizeSleep,
                Self::ActiveRecoveryOnly,
                Self::AvoidIntensity,
            ],
        }
    }

    /// Display text
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::IntenseSessionOk => "You can schedule an intense session",
            Self::LongEffortOk => "A long effort is fine this week",
            Self::StayHydrated => "Stay hydrated before and after training",
            Self::ListenToBody => "Listen to your body and back off if something hurts",
            Self::EasyEnduranceOnly => "Keep the next sessions easy and aerobic",
            Self::AvoidIntervals => "Avoid intervals and races for now",
            Self::MonitorFatigue => "Monitor fatigue, resting heart rate and sleep",
            Self::FullRestDay => "Take a full rest day",
            Self::PrioritizeSleep => "Prioritize sleep and nutrition",
            Self::ActiveRecoveryOnly => "Limit activity to light mobility or walking",
            Self::AvoidIntensity => "Avoid any intensity until load settles",
        }
    }
}

/// Recovery recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryAdvice {
    /// Readiness status
    pub status: RecoveryStatus,
    /// Risk score (0-100)
    pub risk_score: f64,
    /// Rules that produced the score
    pub reason: RiskReason,
    /// Suggested hours before the next hard session (0 when Ready)
    pub hours_recommended: u32,
    /// Load figures behind the score
    pub load: LoadSnapshot,
    /// Status-specific actions
    pub recommendations: Vec<RecoveryAction>,
}

/// Injury and overtraining risk advisor
#[derive(Debug, Clone, Default)]
pub struct RecoveryRiskAdvisor {
    config: RecoveryRiskConfig,
}

impl RecoveryRiskAdvisor {
    /// Create an advisor with the given configuration
    #[must_use]
    pub const fn new(config: RecoveryRiskConfig) -> Self {
        Self { config }
    }

    /// Advise on recovery as of `as_of` (default: latest activity date)
    ///
    /// Only runs and rides count; activities after `as_of` are ignored.
    /// Without activities the advice is Ready with score 0.
    #[must_use]
    pub fn advise(&self, activities: &[Activity], as_of: Option<NaiveDate>) -> RecoveryAdvice {
        let load = Self::snapshot(activities, as_of);
        let (risk_score, reason) = self.score(&load);
        let status = self.status_for_score(risk_score);
        let hours_recommended = self.hours_for_score(status, risk_score);

        debug!(
            risk_score,
            ?status,
            this_week_km = load.this_week_km,
            last_week_km = load.last_week_km,
            rolling_average_km = load.rolling_average_km,
            "Assessed recovery risk"
        );

        RecoveryAdvice {
            status,
            risk_score,
            reason,
            hours_recommended,
            load,
            recommendations: RecoveryAction::for_status(status),
        }
    }

    /// Build the weekly load snapshot ending on `as_of`
    #[must_use]
    pub fn snapshot(activities: &[Activity], as_of: Option<NaiveDate>) -> LoadSnapshot {
        let relevant: Vec<&Activity> = activities
            .iter()
            .filter(|a| a.sport_type().is_endurance())
            .filter(|a| !as_of.is_some_and(|end| a.date() > end))
            .collect();

        let Some(as_of) = as_of.or_else(|| relevant.iter().map(|a| a.date()).max()) else {
            return LoadSnapshot::default();
        };

        let this_week = WeekTotals::collect(&relevant, as_of, 0);
        let last_week = WeekTotals::collect(&relevant, as_of, 1);
        let previous: Vec<WeekTotals> = (1..=ROLLING_WEEKS)
            .map(|weeks_back| WeekTotals::collect(&relevant, as_of, weeks_back))
            .collect();

        let rolling_average_km =
            previous.iter().map(|w| w.distance_km).sum::<f64>() / ROLLING_WEEKS as f64;
        let active_longest: Vec<f64> = previous
            .iter()
            .filter(|w| w.sessions > 0)
            .map(|w| w.longest_km)
            .collect();

        LoadSnapshot {
            as_of: Some(as_of),
            this_week_km: this_week.distance_km,
            last_week_km: last_week.distance_km,
            rolling_average_km,
            longest_this_week_km: this_week.longest_km,
            rolling_average_longest_km: StatisticalAnalyzer::mean(&active_longest)
                .unwrap_or_default(),
            days_since_last_activity: relevant
                .iter()
                .map(|a| a.date())
                .max()
                .map(|latest| (as_of - latest).num_days()),
        }
    }

    /// Risk score and the rules behind it
    #[must_use]
    pub fn score(&self, load: &LoadSnapshot) -> (f64, RiskReason) {
        let weekly_increase_percent = StatisticalAnalyzer::safe_percent(
            load.this_week_km - load.last_week_km,
            load.last_week_km,
        );
        let volume_excess_percent = StatisticalAnalyzer::safe_percent(
            load.this_week_km - load.rolling_average_km,
            load.rolling_average_km,
        );
        let long_effort_percent = StatisticalAnalyzer::safe_percent(
            load.longest_this_week_km,
            load.rolling_average_longest_km,
        );

        let mut triggers: Vec<RiskTrigger> = [
            (
                RiskRule::TenPercentRule,
                self.config.weekly_increase,
                weekly_increase_percent,
            ),
            (
                RiskRule::VolumeVsAverage,
                self.config.volume_vs_average,
                volume_excess_percent,
            ),
            (
                RiskRule::LongEffortSpike,
                self.config.long_effort,
                long_effort_percent,
            ),
        ]
        .into_iter()
        .filter_map(|(rule, rule_config, observed)| Self::trigger(rule, rule_config, observed))
        .collect();

        triggers.sort_by(|a, b| b.contribution.total_cmp(&a.contribution));

        let score = triggers
            .iter()
            .map(|t| t.contribution)
            .sum::<f64>()
            .clamp(0.0, MAX_RISK_SCORE);
        (score, RiskReason { triggers })
    }

    fn trigger(
        rule: RiskRule,
        config: RiskRuleConfig,
        observed_percent: f64,
    ) -> Option<RiskTrigger> {
        let contribution = config.contribution(observed_percent);
        (contribution > 0.0).then_some(RiskTrigger {
            rule,
            observed_percent,
            threshold_percent: config.threshold_percent,
            contribution,
        })
    }

    /// Status for a score
    #[must_use]
    pub fn status_for_score(&self, score: f64) -> RecoveryStatus {
        if score < self.config.caution_score_threshold {
            RecoveryStatus::Ready
        } else if score <= self.config.rest_score_threshold {
            RecoveryStatus::Caution
        } else {
            RecoveryStatus::Rest
        }
    }

    /// Recommended recovery hours: 0 when Ready, else a linear map of
    /// the score from `[caution, 100]` onto `[min_hours, max_hours]`
    #[must_use]
    pub fn hours_for_score(&self, status: RecoveryStatus, score: f64) -> u32 {
        if status == RecoveryStatus::Ready {
            return 0;
        }
        let span = MAX_RISK_SCORE - self.config.caution_score_threshold;
        let fraction = if span > 0.0 {
            ((score - self.config.caution_score_threshold) / span).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let hours = (self.config.max_recovery_hours - self.config.min_recovery_hours)
            .mul_add(fraction, self.config.min_recovery_hours);
        hours.round().max(0.0) as u32
    }
}

/// Distance totals for one 7-day window
struct WeekTotals {
    distance_km: f64,
    longest_km: f64,
    sessions: usize,
}

impl WeekTotals {
    /// Totals for the window ending `weeks_back` weeks before `as_of`
    fn collect(activities: &[&Activity], as_of: NaiveDate, weeks_back: i64) -> Self {
        let end_offset = (weeks_back * DAYS_PER_WEEK).unsigned_abs();
        let start_offset = end_offset + (DAYS_PER_WEEK - 1).unsigned_abs();
        let end = as_of.checked_sub_days(Days::new(end_offset));
        let start = as_of.checked_sub_days(Days::new(start_offset));

        let mut totals = Self {
            distance_km: 0.0,
            longest_km: 0.0,
            sessions: 0,
        };
        let (Some(start), Some(end)) = (start, end) else {
            return totals;
        };

        for activity in activities {
            let date = activity.date();
            if date >= start && date <= end {
                totals.distance_km += activity.distance_km();
                totals.longest_km = totals.longest_km.max(activity.distance_km());
                totals.sessions += 1;
            }
        }
        totals
    }
}

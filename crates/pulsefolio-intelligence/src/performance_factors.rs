// ABOUTME: Correlates running speed with day of week, time of day and rest interval
// ABOUTME: Buckets runs by actual start timestamps and surfaces the strongest patterns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

use std::collections::BTreeMap;

use crate::physiological_constants::performance_factors::{
    AFTERNOON_START_HOUR, EVENING_START_HOUR, MAX_HEADLINE_FACTORS, MAX_REST_BUCKET_DAYS,
    MORNING_START_HOUR, NIGHT_START_HOUR, NOTABLE_IMPROVEMENT_PERCENT,
};
use crate::statistical_analysis::StatisticalAnalyzer;
use chrono::{Datelike, Timelike};
use pulsefolio_core::models::{Activity, SportType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Factor a bucket belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceFactor {
    /// Monday to Sunday
    DayOfWeek,
    /// Morning, afternoon, evening, night
    TimeOfDay,
    /// Rest days since the previous run
    RestInterval,
}

impl PerformanceFactor {
    /// All factors in reporting order
    pub const ALL: [Self; 3] = [Self::DayOfWeek, Self::TimeOfDay, Self::RestInterval];
}

/// Named time-of-day range based on the local start hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    /// 05:00 to 11:59
    Morning,
    /// 12:00 to 16:59
    Afternoon,
    /// 17:00 to 20:59
    Evening,
    /// 21:00 to 04:59
    Night,
}

impl TimeOfDay {
    /// Bucket for a local start hour (0-23)
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        if hour >= NIGHT_START_HOUR || hour < MORNING_START_HOUR {
            Self::Night
        } else if hour >= EVENING_START_HOUR {
            Self::Evening
        } else if hour >= AFTERNOON_START_HOUR {
            Self::Afternoon
        } else {
            Self::Morning
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::Night => "Night",
        }
    }
}

/// Speed of one bucket against the global average
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceInsight {
    /// Factor the bucket belongs to
    pub factor: PerformanceFactor,
    /// Bucket label ("Tuesday", "Morning", "1 rest day", ...)
    pub label: String,
    /// Mean speed of the bucket's runs
    pub average_speed_kmh: f64,
    /// Bucket speed relative to the global average, in percent
    pub improvement_percent: f64,
    /// Runs in the bucket; small counts deserve less trust
    pub activity_count: usize,
}

/// One-line takeaway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PerformanceHeadline {
    /// Up to two factors whose best bucket is at least 5% faster than average
    Notable {
        /// Strongest first
        insights: Vec<PerformanceInsight>,
    },
    /// No factor reaches 5%, but this bucket is still above average
    Modest {
        /// Best positive bucket across all factors
        insight: PerformanceInsight,
    },
    /// No bucket beats the average
    Consistent,
}

/// Full factor analysis
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PerformanceAnalysis {
    /// Every non-empty bucket, grouped by factor in natural bucket order
    pub insights: Vec<PerformanceInsight>,
    /// Best bucket per factor (ties go to the earlier bucket)
    pub best_by_factor: Vec<PerformanceInsight>,
    /// Mean of per-run speeds
    pub global_average_speed_kmh: f64,
    /// Runs analyzed
    pub run_count: usize,
    /// Takeaway; `None` without runs
    pub headline: Option<PerformanceHeadline>,
}

/// Running speed sums for one bucket
#[derive(Default)]
struct BucketStats {
    speed_sum: f64,
    count: usize,
}

/// Performance factor analyzer
pub struct PerformanceFactorAnalyzer;

impl PerformanceFactorAnalyzer {
    /// Analyze runs with a usable pace
    ///
    /// Buckets with no runs are omitted. The first run has no previous run
    /// and is left out of the rest-interval factor.
    #[must_use]
    pub fn analyze(activities: &[Activity]) -> PerformanceAnalysis {
        let mut runs: Vec<&Activity> = activities
            .iter()
            .filter(|a| a.sport_type() == SportType::Run && a.has_pace())
            .collect();
        runs.sort_by(|a, b| {
            a.start_date_local()
                .cmp(&b.start_date_local())
                .then_with(|| a.id().cmp(b.id()))
        });

        let speeds: Vec<f64> = runs.iter().map(|a| a.average_speed_kmh()).collect();
        let Some(global_average) = StatisticalAnalyzer::mean(&speeds).filter(|avg| *avg > 0.0)
        else {
            return PerformanceAnalysis::default();
        };

        let mut by_day: BTreeMap<u32, BucketStats> = BTreeMap::new();
        let mut by_time: BTreeMap<TimeOfDay, BucketStats> = BTreeMap::new();
        let mut by_rest: BTreeMap<i64, BucketStats> = BTreeMap::new();

        for (position, run) in runs.iter().enumerate() {
            let speed = run.average_speed_kmh();
            let start = run.start_date_local();
            add(
                by_day.entry(start.weekday().num_days_from_monday()).or_default(),
                speed,
            );
            add(
                by_time.entry(TimeOfDay::from_hour(start.hour())).or_default(),
                speed,
            );
            if let Some(previous) = position.checked_sub(1).and_then(|i| runs.get(i)) {
                let rest_days = ((run.date() - previous.date()).num_days() - 1)
                    .clamp(0, MAX_REST_BUCKET_DAYS);
                add(by_rest.entry(rest_days).or_default(), speed);
            }
        }

        let mut insights = Vec::new();
        insights.extend(by_day.iter().map(|(day, stats)| {
            insight(PerformanceFactor::DayOfWeek, weekday_label(*day), stats, global_average)
        }));
        insights.extend(by_time.iter().map(|(time, stats)| {
            insight(
                PerformanceFactor::TimeOfDay,
                time.label().to_owned(),
                stats,
                global_average,
            )
        }));
        insights.extend(by_rest.iter().map(|(days, stats)| {
            insight(
                PerformanceFactor::RestInterval,
                rest_label(*days),
                stats,
                global_average,
            )
        }));

        let best_by_factor: Vec<PerformanceInsight> = PerformanceFactor::ALL
            .iter()
            .filter_map(|factor| {
                insights
                    .iter()
                    .filter(|i| i.factor == *factor)
                    .fold(None::<&PerformanceInsight>, |best, candidate| match best {
                        Some(current) if current.improvement_percent >= candidate.improvement_percent => {
                            Some(current)
                        }
                        _ => Some(candidate),
                    })
                    .cloned()
            })
            .collect();

        let headline = Some(Self::headline(&best_by_factor));
        debug!(
            runs = runs.len(),
            buckets = insights.len(),
            global_average,
            "Analyzed performance factors"
        );

        PerformanceAnalysis {
            insights,
            best_by_factor,
            global_average_speed_kmh: global_average,
            run_count: runs.len(),
            headline,
        }
    }

    fn headline(best_by_factor: &[PerformanceInsight]) -> PerformanceHeadline {
        let mut notable: Vec<PerformanceInsight> = best_by_factor
            .iter()
            .filter(|i| i.improvement_percent >= NOTABLE_IMPROVEMENT_PERCENT)
            .cloned()
            .collect();
        if !notable.is_empty() {
            notable.sort_by(|a, b| b.improvement_percent.total_cmp(&a.improvement_percent));
            notable.truncate(MAX_HEADLINE_FACTORS);
            return PerformanceHeadline::Notable { insights: notable };
        }

        best_by_factor
            .iter()
            .filter(|i| i.improvement_percent > 0.0)
            .fold(None::<&PerformanceInsight>, |best, candidate| match best {
                Some(current) if current.improvement_percent >= candidate.improvement_percent => {
                    Some(current)
                }
                _ => Some(candidate),
            })
            .map_or(PerformanceHeadline::Consistent, |insight| {
                PerformanceHeadline::Modest {
                    insight: insight.clone(),
                }
            })
    }
}

fn add(stats: &mut BucketStats, speed: f64) {
    stats.speed_sum += speed;
    stats.count += 1;
}

fn insight(
    factor: PerformanceFactor,
    label: String,
    stats: &BucketStats,
    global_average: f64,
) -> PerformanceInsight {
    let average_speed_kmh = stats.speed_sum / stats.count.max(1) as f64;
    PerformanceInsight {
        factor,
        label,
        average_speed_kmh,
        improvement_percent: StatisticalAnalyzer::safe_percent(
            average_speed_kmh - global_average,
            global_average,
        ),
        activity_count: stats.count,
    }
}

fn weekday_label(days_from_monday: u32) -> String {
    const NAMES: [&str; 7] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];
    NAMES
        .get(days_from_monday as usize)
        .copied()
        .unwrap_or("Sunday")
        .to_owned()
}

fn rest_label(days: i64) -> String {
    match days {
        1 => "1 rest day".to_owned(),
        d if d >= MAX_REST_BUCKET_DAYS => format!("{MAX_REST_BUCKET_DAYS}+ rest days"),
        d => format!("{d} rest days"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_boundaries() {
        assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(21), TimeOfDay::Night);
    }

    #[test]
    fn test_rest_labels() {
        assert_eq!(rest_label(0), "0 rest days");
        assert_eq!(rest_label(1), "1 rest day");
        assert_eq!(rest_label(3), "3+ rest days");
    }

    #[test]
    fn test_empty_input_has_no_headline() {
        let analysis = PerformanceFactorAnalyzer::analyze(&[]);
        assert!(analysis.insights.is_empty());
        assert!(analysis.headline.is_none());
    }
}

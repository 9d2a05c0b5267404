// ABOUTME: Integration tests for speed correlations with weekday, time of day and rest
// ABOUTME: Covers bucket omission, best-bucket ties and every headline outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{at, date, ride};
use pulsefolio::intelligence::{
    PerformanceFactor, PerformanceFactorAnalyzer, PerformanceHeadline, PerformanceInsight,
};
use pulsefolio::models::{Activity, ActivityBuilder, SportType};

fn timed_run(id: &str, day: (i32, u32, u32), hour: u32, km: f64, minutes: f64) -> Activity {
    ActivityBuilder::new(
        id,
        SportType::Run,
        at(date(day.0, day.1, day.2), hour, 0),
        km,
        minutes,
    )
    .build()
}

/// Monday mornings at 12 km/h, Wednesday evenings at 10 km/h
fn two_week_pattern() -> Vec<Activity> {
    vec![
        timed_run("mon-1", (2024, 1, 1), 7, 10.0, 50.0),
        timed_run("wed-1", (2024, 1, 3), 18, 10.0, 60.0),
        timed_run("mon-2", (2024, 1, 8), 7, 10.0, 50.0),
        timed_run("wed-2", (2024, 1, 10), 18, 10.0, 60.0),
    ]
}

fn labels_for(insights: &[PerformanceInsight], factor: PerformanceFactor) -> Vec<String> {
    insights
        .iter()
        .filter(|i| i.factor == factor)
        .map(|i| i.label.clone())
        .collect()
}

#[test]
fn test_empty_buckets_are_omitted() {
    let analysis = PerformanceFactorAnalyzer::analyze(&two_week_pattern());

    assert_eq!(
        labels_for(&analysis.insights, PerformanceFactor::DayOfWeek),
        vec!["Monday", "Wednesday"]
    );
    assert_eq!(
        labels_for(&analysis.insights, PerformanceFactor::TimeOfDay),
        vec!["Morning", "Evening"]
    );
    assert_eq!(
        labels_for(&analysis.insights, PerformanceFactor::RestInterval),
        vec!["1 rest day", "3+ rest days"]
    );
    assert_eq!(analysis.run_count, 4);
}

#[test]
fn test_improvement_relative_to_global_average() {
    let analysis = PerformanceFactorAnalyzer::analyze(&two_week_pattern());
    assert!((analysis.global_average_speed_kmh - 11.0).abs() < 1e-9);

    let monday = analysis
        .insights
        .iter()
        .find(|i| i.label == "Monday")
        .unwrap();
    assert!((monday.average_speed_kmh - 12.0).abs() < 1e-9);
    assert!((monday.improvement_percent - 100.0 / 11.0).abs() < 1e-9);
    assert_eq!(monday.activity_count, 2);
}

#[test]
fn test_first_run_is_not_rest_bucketed() {
    let analysis = PerformanceFactorAnalyzer::analyze(&two_week_pattern());
    let rest_runs: usize = analysis
        .insights
        .iter()
        .filter(|i| i.factor == PerformanceFactor::RestInterval)
        .map(|i| i.activity_count)
        .sum();
    assert_eq!(rest_runs, 3);
}

#[test]
fn test_best_per_factor_and_notable_headline() {
    let analysis = PerformanceFactorAnalyzer::analyze(&two_week_pattern());
    let best: Vec<&str> = analysis
        .best_by_factor
        .iter()
        .map(|i| i.label.as_str())
        .collect();
    assert_eq!(best, vec!["Monday", "Morning", "3+ rest days"]);

    match analysis.headline {
        Some(PerformanceHeadline::Notable { insights }) => {
            let labels: Vec<&str> = insights.iter().map(|i| i.label.as_str()).collect();
            assert_eq!(labels, vec!["Monday", "Morning"]);
        }
        other => panic!("expected notable headline, got {other:?}"),
    }
}

#[test]
fn test_small_edge_gives_modest_headline() {
    let activities = vec![
        timed_run("mon", (2024, 1, 1), 7, 12.0, 60.0),
        timed_run("tue", (2024, 1, 2), 7, 11.5, 60.0),
    ];
    let analysis = PerformanceFactorAnalyzer::analyze(&activities);
    match analysis.headline {
        Some(PerformanceHeadline::Modest { insight }) => {
            assert_eq!(insight.label, "Monday");
            assert!(insight.improvement_percent > 0.0 && insight.improvement_percent < 5.0);
        }
        other => panic!("expected modest headline, got {other:?}"),
    }
}

#[test]
fn test_even_pacing_is_consistent() {
    let activities = vec![
        timed_run("a", (2024, 1, 1), 7, 10.0, 50.0),
        timed_run("b", (2024, 1, 2), 7, 10.0, 50.0),
    ];
    let analysis = PerformanceFactorAnalyzer::analyze(&activities);
    assert_eq!(analysis.headline, Some(PerformanceHeadline::Consistent));
}

#[test]
fn test_same_day_runs_have_zero_rest() {
    let activities = vec![
        timed_run("am", (2024, 1, 1), 6, 10.0, 50.0),
        timed_run("pm", (2024, 1, 1), 19, 10.0, 55.0),
    ];
    let analysis = PerformanceFactorAnalyzer::analyze(&activities);
    assert_eq!(
        labels_for(&analysis.insights, PerformanceFactor::RestInterval),
        vec!["0 rest days"]
    );
}

#[test]
fn test_night_wraps_past_midnight() {
    let activities = vec![
        timed_run("late", (2024, 1, 1), 22, 10.0, 50.0),
        timed_run("early", (2024, 1, 3), 4, 10.0, 50.0),
    ];
    let analysis = PerformanceFactorAnalyzer::analyze(&activities);
    let night = analysis
        .insights
        .iter()
        .find(|i| i.label == "Night")
        .unwrap();
    assert_eq!(night.activity_count, 2);
}

#[test]
fn test_rides_and_paceless_runs_are_ignored() {
    let activities = vec![
        ride("bike", date(2024, 1, 1), 40.0, 80.0),
        timed_run("treadmill", (2024, 1, 2), 7, 0.0, 30.0),
    ];
    let analysis = PerformanceFactorAnalyzer::analyze(&activities);
    assert!(analysis.insights.is_empty());
    assert!(analysis.headline.is_none());
    assert_eq!(analysis.run_count, 0);
}

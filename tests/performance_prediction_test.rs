// ABOUTME: Integration tests for Riegel race predictions, confidence and goal tracking
// ABOUTME: Covers exact-distance references, fallbacks, the recent window and goal projections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{TimeZone, Utc};
use common::{date, ride, run};
use pulsefolio::intelligence::config::intelligence::RacePredictionConfig;
use pulsefolio::intelligence::{GoalProgress, RacePerformancePredictor, RacePrediction};
use pulsefolio::models::TrainingGoal;

fn predictor() -> RacePerformancePredictor {
    RacePerformancePredictor::new(RacePredictionConfig::default())
}

fn ten_k_progression() -> Vec<pulsefolio::models::Activity> {
    vec![
        run("first", date(2024, 1, 1), 10.0, 50.0),
        run("second", date(2024, 1, 8), 10.0, 48.0),
    ]
}

fn find(predictions: &[RacePrediction], label: &str) -> RacePrediction {
    predictions
        .iter()
        .find(|p| p.label == label)
        .cloned()
        .unwrap_or_else(|| panic!("no prediction for {label}"))
}

#[test]
fn test_ten_k_prediction_uses_best_exact_effort() {
    let predictions = predictor().predict(&ten_k_progression(), &[]);
    let ten_k = find(&predictions, "10K");

    assert!((ten_k.predicted_time_min - 48.0).abs() < 1e-9);
    assert!((ten_k.current_pace_min_per_km - 4.8).abs() < 1e-9);
    assert_eq!(ten_k.reference_activity_id, "second");
    assert_eq!(ten_k.qualifying_efforts, 2);
    // 100 x (0.7 x 1 + 0.3 x 2/4)
    assert_eq!(ten_k.confidence_percent, 85);
    assert!(ten_k.target_time_min.is_none());
    assert!(ten_k.time_to_target_days.is_none());
}

#[test]
fn test_distant_target_falls_back_to_fastest_run() {
    let predictions = predictor().predict(&ten_k_progression(), &[]);
    let five_k = find(&predictions, "5K");

    assert_eq!(five_k.qualifying_efforts, 1);
    assert_eq!(five_k.reference_activity_id, "second");
    let expected = RacePerformancePredictor::predict_time_riegel(10.0, 48.0, 5.0).unwrap();
    assert!((five_k.predicted_time_min - expected).abs() < 1e-9);
    // 100 x (0.7 x sqrt(0.5) + 0.3 x 1/3)
    assert_eq!(five_k.confidence_percent, 59);
    assert!(five_k.confidence_percent < find(&predictions, "10K").confidence_percent);
}

#[test]
fn test_all_standard_distances_are_predicted() {
    let predictions = predictor().predict(&ten_k_progression(), &[]);
    let labels: Vec<&str> = predictions.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["5K", "10K", "Half Marathon", "Marathon"]);
    assert!(predictions
        .windows(2)
        .all(|pair| pair[0].predicted_time_min < pair[1].predicted_time_min));
}

#[test]
fn test_goal_gap_and_time_to_target() {
    let goal = TrainingGoal::new(10.0, 45.0, Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap());
    let predictions = predictor().predict(&ten_k_progression(), &[goal]);
    let ten_k = find(&predictions, "10K");

    assert_eq!(ten_k.target_time_min, Some(45.0));
    assert!((ten_k.goal_gap_min.unwrap() - 3.0).abs() < 1e-9);
    assert_eq!(ten_k.goal_progress, Some(GoalProgress::Reachable));
    // improving 2 min per week: 3 min gap needs 10.5 days
    assert_eq!(ten_k.time_to_target_days, Some(11));

    // the goal only applies to its own distance
    assert!(find(&predictions, "5K").target_time_min.is_none());
}

#[test]
fn test_reached_goal_has_no_projection() {
    let goal = TrainingGoal::new(10.0, 50.0, Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap());
    let predictions = predictor().predict(&ten_k_progression(), &[goal]);
    let ten_k = find(&predictions, "10K");
    assert_eq!(ten_k.goal_progress, Some(GoalProgress::Achievable));
    assert!(ten_k.time_to_target_days.is_none());
}

#[test]
fn test_no_trend_means_no_projection() {
    let activities = vec![
        run("a", date(2024, 1, 1), 10.0, 48.0),
        run("b", date(2024, 1, 8), 10.0, 50.0),
    ];
    let goal = TrainingGoal::new(10.0, 45.0, Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap());
    let ten_k = find(&predictor().predict(&activities, &[goal]), "10K");
    assert!(ten_k.goal_gap_min.unwrap() > 0.0);
    assert!(ten_k.time_to_target_days.is_none());
}

#[test]
fn test_old_efforts_fall_outside_recent_window() {
    let activities = vec![
        run("old-fast", date(2023, 6, 1), 10.0, 40.0),
        run("recent", date(2024, 1, 8), 10.0, 50.0),
    ];
    let ten_k = find(&predictor().predict(&activities, &[]), "10K");
    assert_eq!(ten_k.reference_activity_id, "recent");
    assert_eq!(ten_k.qualifying_efforts, 1);
}

#[test]
fn test_unvalidated_huge_window_keeps_every_effort() {
    let predictor = RacePerformancePredictor::new(RacePredictionConfig {
        recent_effort_window_days: i64::MAX / 2,
        ..RacePredictionConfig::default()
    });
    let activities = vec![
        run("old-fast", date(2023, 6, 1), 10.0, 40.0),
        run("recent", date(2024, 1, 8), 10.0, 50.0),
    ];
    let ten_k = find(&predictor.predict(&activities, &[]), "10K");
    assert_eq!(ten_k.reference_activity_id, "old-fast");
    assert_eq!(ten_k.qualifying_efforts, 2);
}

#[test]
fn test_no_runs_means_no_predictions() {
    assert!(predictor().predict(&[], &[]).is_empty());
    let rides_only = vec![ride("b", date(2024, 1, 1), 40.0, 80.0)];
    assert!(predictor().predict(&rides_only, &[]).is_empty());
    let no_pace = vec![run("t", date(2024, 1, 1), 0.0, 30.0)];
    assert!(predictor().predict(&no_pace, &[]).is_empty());
}

#[test]
fn test_riegel_strictly_increasing_in_distance() {
    let distances = [1.0, 3.0, 5.0, 10.0, 21.1, 42.2, 100.0];
    let times: Vec<f64> = distances
        .iter()
        .map(|d| RacePerformancePredictor::predict_time_riegel(10.0, 50.0, *d).unwrap())
        .collect();
    assert!(times.windows(2).all(|pair| pair[0] < pair[1]));
    assert!((times[3] - 50.0).abs() < 1e-9);
}

#[test]
fn test_riegel_rejects_non_positive_inputs() {
    assert!(RacePerformancePredictor::predict_time_riegel(0.0, 50.0, 10.0).is_err());
    assert!(RacePerformancePredictor::predict_time_riegel(10.0, -1.0, 10.0).is_err());
}

#[test]
fn test_confidence_monotone_in_match_and_efforts() {
    let predictor = predictor();
    assert!(predictor.confidence_percent(0.5, 3) <= predictor.confidence_percent(0.9, 3));
    assert!(predictor.confidence_percent(0.9, 1) <= predictor.confidence_percent(0.9, 6));
    assert!(predictor.confidence_percent(1.0, 1000) <= 100);
}

#[test]
fn test_time_formatting() {
    assert_eq!(RacePerformancePredictor::format_time(48.0), "48:00");
    assert_eq!(RacePerformancePredictor::format_time(125.5), "2:05:30");
    assert_eq!(RacePerformancePredictor::format_pace(4.8), "4:48");
    assert_eq!(RacePerformancePredictor::format_pace(0.0), "N/A");
}

// ABOUTME: Integration tests for the activity model and batch validation
// ABOUTME: Covers derived speed and pace, provider sport parsing, and fail-fast validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{at, date, run};
use pulsefolio::errors::ErrorCode;
use pulsefolio::models::{validate_activities, ActivityBuilder, SportType, TrainingGoal};

#[test]
fn test_supplied_speed_wins_over_derived() {
    let activity = ActivityBuilder::new("a", SportType::Run, at(date(2024, 1, 1), 7, 0), 10.0, 50.0)
        .average_speed_kmh(12.5)
        .build();
    assert!((activity.average_speed_kmh() - 12.5).abs() < 1e-9);
    assert!((activity.pace_min_per_km().unwrap() - 5.0).abs() < 1e-9);
}

#[test]
fn test_zero_distance_has_no_pace() {
    let treadmill = run("t", date(2024, 1, 1), 0.0, 30.0);
    assert!(!treadmill.has_pace());
    assert!(treadmill.pace_min_per_km().is_none());
    assert!(treadmill.average_speed_kmh().abs() < f64::EPSILON);
}

#[test]
fn test_provider_sport_strings() {
    assert_eq!(SportType::from_provider_string("TrailRun"), SportType::Run);
    assert_eq!(SportType::from_provider_string("virtual_ride"), SportType::Ride);
    assert_eq!(SportType::from_provider_string("Swim"), SportType::Other);
}

#[test]
fn test_batch_rejects_duplicate_ids() {
    let batch = vec![
        run("same", date(2024, 1, 1), 5.0, 25.0),
        run("same", date(2024, 1, 2), 6.0, 30.0),
    ];
    let error = validate_activities(&batch).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(error.context.resource_id.as_deref(), Some("same"));
    assert_eq!(error.context.details["first_index"], 0);
    assert_eq!(error.context.details["duplicate_index"], 1);
}

#[test]
fn test_batch_rejects_non_finite_and_bad_heart_rate() {
    let nan_distance = run("nan", date(2024, 1, 1), f64::NAN, 25.0);
    assert_eq!(
        validate_activities(&[nan_distance]).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );

    let zero_hr = ActivityBuilder::new("hr", SportType::Run, at(date(2024, 1, 1), 7, 0), 5.0, 25.0)
        .average_heartrate(0.0)
        .build();
    let error = validate_activities(&[zero_hr]).unwrap_err();
    assert_eq!(error.context.resource_id.as_deref(), Some("hr"));
}

#[test]
fn test_empty_id_is_missing_field() {
    let activity = run("  ", date(2024, 1, 1), 5.0, 25.0);
    assert_eq!(
        activity.validate().unwrap_err().code,
        ErrorCode::MissingRequiredField
    );
}

#[test]
fn test_reported_speed_is_kept_apart_from_derived_speed() {
    let derived = run("derived", date(2024, 1, 1), 10.0, 50.0);
    assert_eq!(derived.reported_average_speed_kmh(), None);
    assert!((derived.average_speed_kmh() - 12.0).abs() < 1e-9);

    let reported = ActivityBuilder::new("gps", SportType::Run, at(date(2024, 1, 1), 7, 0), 10.0, 50.0)
        .average_speed_kmh(12.5)
        .build();
    assert_eq!(reported.reported_average_speed_kmh(), Some(12.5));
    assert!((reported.average_speed_kmh() - 12.5).abs() < 1e-9);
}

#[test]
fn test_activity_serializes_with_optional_fields() {
    let activity = run("json", date(2024, 1, 1), 5.0, 25.0);
    let value = serde_json::to_value(&activity).unwrap();
    assert_eq!(value["sport_type"], "run");
    assert!(value["average_heartrate"].is_null());
}

#[test]
fn test_goal_distance_matching() {
    let goal = TrainingGoal::new(10.0, 45.0, chrono::Utc::now());
    assert!(goal.matches_distance(10.04, 0.05));
    assert!(!goal.matches_distance(10.2, 0.05));
}

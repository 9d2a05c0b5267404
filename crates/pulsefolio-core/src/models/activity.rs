// ABOUTME: Activity model, builder, and batch validation
// ABOUTME: Canonical read-only representation of one recorded workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::SportType;
use crate::constants::units::MINUTES_PER_HOUR;
use crate::errors::{AppError, AppResult};

/// A single recorded workout
///
/// Activities are supplied already unit-normalized: kilometers, minutes and
/// beats per minute. The engine reads them and never mutates them. Fields are
/// private; use [`ActivityBuilder`] to construct one and the accessor methods
/// to read it.
///
/// `start_date_local` is the athlete's wall-clock time. Day-of-week,
/// time-of-day and weekly windows are all computed from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique activity identifier within a batch
    id: String,

    /// Kind of sport
    sport_type: SportType,

    /// Start time in the athlete's local wall clock
    start_date_local: NaiveDateTime,

    /// Total distance in kilometers
    distance_km: f64,

    /// Moving time in minutes
    moving_time_min: f64,

    /// Total elevation gain in meters
    elevation_gain_m: Option<f64>,

    /// Average speed reported upstream in km/h
    average_speed_kmh: Option<f64>,

    /// Average heart rate in beats per minute
    average_heartrate: Option<f64>,
}

/// Accessor methods for Activity fields
impl Activity {
    /// Returns the unique identifier for the activity
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the type of sport
    #[must_use]
    pub const fn sport_type(&self) -> SportType {
        self.sport_type
    }

    /// Returns when the activity started (athlete local time)
    #[must_use]
    pub const fn start_date_local(&self) -> NaiveDateTime {
        self.start_date_local
    }

    /// Returns the calendar day the activity started on
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.start_date_local.date()
    }

    /// Returns the distance in kilometers
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Returns the moving time in minutes
    #[must_use]
    pub const fn moving_time_min(&self) -> f64 {
        self.moving_time_min
    }

    /// Returns the elevation gain in meters, if recorded
    #[must_use]
    pub const fn elevation_gain_m(&self) -> Option<f64> {
        self.elevation_gain_m
    }

    /// Returns the average heart rate in bpm, if recorded
    #[must_use]
    pub const fn average_heartrate(&self) -> Option<f64> {
        self.average_heartrate
    }

    /// Returns the average speed as supplied upstream, without derivation
    #[must_use]
    pub const fn reported_average_speed_kmh(&self) -> Option<f64> {
        self.average_speed_kmh
    }

    /// Returns the average speed in km/h
    ///
    /// Uses the supplied value when present and positive, otherwise derives it
    /// from distance and moving time. Zero moving time yields 0.
    #[must_use]
    pub fn average_speed_kmh(&self) -> f64 {
        match self.average_speed_kmh {
            Some(speed) if speed > 0.0 => speed,
            _ if self.moving_time_min > 0.0 => {
                self.distance_km / (self.moving_time_min / MINUTES_PER_HOUR)
            }
            _ => 0.0,
        }
    }

    /// Whether the activity carries a usable pace (distance and time both positive)
    #[must_use]
    pub fn has_pace(&self) -> bool {
        self.distance_km > 0.0 && self.moving_time_min > 0.0
    }

    /// Returns the pace in minutes per kilometer, or `None` without a usable pace
    #[must_use]
    pub fn pace_min_per_km(&self) -> Option<f64> {
        self.has_pace()
            .then(|| self.moving_time_min / self.distance_km)
    }

    /// Check that every numeric field is finite and in range
    ///
    /// # Errors
    ///
    /// Returns an error carrying the activity id when the id is empty, a
    /// distance, time, elevation or speed is negative or non-finite, or the
    /// heart rate is not a positive finite number.
    pub fn validate(&self) -> AppResult<()> {
        if self.id.trim().is_empty() {
            return Err(AppError::missing_field("id"));
        }

        let non_negative = [
            ("distance_km", Some(self.distance_km)),
            ("moving_time_min", Some(self.moving_time_min)),
            ("elevation_gain_m", self.elevation_gain_m),
            ("average_speed_kmh", self.average_speed_kmh),
        ];
        for (field, value) in non_negative {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(AppError::out_of_range(format!(
                        "{field} must be a finite non-negative number, got {value}"
                    ))
                    .with_resource_id(self.id.clone()));
                }
            }
        }

        if let Some(heartrate) = self.average_heartrate {
            if !heartrate.is_finite() || heartrate <= 0.0 {
                return Err(AppError::out_of_range(format!(
                    "average_heartrate must be a positive number, got {heartrate}"
                ))
                .with_resource_id(self.id.clone()));
            }
        }

        Ok(())
    }
}

/// Validate a whole batch, failing on the first malformed record
///
/// # Errors
///
/// Returns the first per-activity validation error, or an `InvalidInput`
/// error naming a duplicated id.
pub fn validate_activities(activities: &[Activity]) -> AppResult<()> {
    let mut seen = HashMap::with_capacity(activities.len());
    for (index, activity) in activities.iter().enumerate() {
        activity.validate()?;
        if let Some(first) = seen.insert(activity.id(), index) {
            return Err(AppError::invalid_input(format!(
                "duplicate activity id '{}' in batch",
                activity.id()
            ))
            .with_resource_id(activity.id())
            .with_details(serde_json::json!({
                "first_index": first,
                "duplicate_index": index,
            })));
        }
    }
    Ok(())
}

/// Builder for constructing Activity instances
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use pulsefolio_core::models::{ActivityBuilder, SportType};
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 8)
///     .and_then(|d| d.and_hms_opt(7, 30, 0))
///     .unwrap_or_default();
/// let activity = ActivityBuilder::new("run-1", SportType::Run, start, 10.0, 48.0)
///     .average_heartrate(152.0)
///     .build();
/// assert_eq!(activity.pace_min_per_km(), Some(4.8));
/// ```
#[derive(Debug, Clone)]
pub struct ActivityBuilder {
    activity: Activity,
}

impl ActivityBuilder {
    /// Creates a new `ActivityBuilder` with required fields
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        sport_type: SportType,
        start_date_local: NaiveDateTime,
        distance_km: f64,
        moving_time_min: f64,
    ) -> Self {
        Self {
            activity: Activity {
                id: id.into(),
                sport_type,
                start_date_local,
                distance_km,
                moving_time_min,
                elevation_gain_m: None,
                average_speed_kmh: None,
                average_heartrate: None,
            },
        }
    }

    /// Sets the elevation gain in meters
    #[must_use]
    pub const fn elevation_gain_m(mut self, elevation: f64) -> Self {
        self.activity.elevation_gain_m = Some(elevation);
        self
    }

    /// Sets the upstream-reported average speed in km/h
    #[must_use]
    pub const fn average_speed_kmh(mut self, speed: f64) -> Self {
        self.activity.average_speed_kmh = Some(speed);
        self
    }

    /// Sets the average heart rate in bpm
    #[must_use]
    pub const fn average_heartrate(mut self, heartrate: f64) -> Self {
        self.activity.average_heartrate = Some(heartrate);
        self
    }

    /// Sets the average heart rate from an optional value
    #[must_use]
    pub const fn average_heartrate_opt(mut self, heartrate: Option<f64>) -> Self {
        self.activity.average_heartrate = heartrate;
        self
    }

    /// Builds the Activity instance
    #[must_use]
    pub fn build(self) -> Activity {
        self.activity
    }
}

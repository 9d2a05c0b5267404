// ABOUTME: Caller-owned race goal model
// ABOUTME: The engine reads and echoes goals but never persists them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// A target finishing time for a race distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingGoal {
    /// Race distance in kilometers
    pub distance_km: f64,
    /// Target finishing time in minutes
    pub target_time_min: f64,
    /// When the athlete set the goal
    pub created_at: DateTime<Utc>,
}

impl TrainingGoal {
    /// Create a new goal
    #[must_use]
    pub const fn new(distance_km: f64, target_time_min: f64, created_at: DateTime<Utc>) -> Self {
        Self {
            distance_km,
            target_time_min,
            created_at,
        }
    }

    /// Whether this goal applies to `distance_km` within `tolerance_km`
    #[must_use]
    pub fn matches_distance(&self, distance_km: f64, tolerance_km: f64) -> bool {
        (self.distance_km - distance_km).abs() <= tolerance_km
    }

    /// Check that distance and target time are positive finite numbers
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when either value is not positive and finite.
    pub fn validate(&self) -> AppResult<()> {
        if !self.distance_km.is_finite() || self.distance_km <= 0.0 {
            return Err(AppError::out_of_range(format!(
                "goal distance must be positive, got {}",
                self.distance_km
            )));
        }
        if !self.target_time_min.is_finite() || self.target_time_min <= 0.0 {
            return Err(AppError::out_of_range(format!(
                "goal target time must be positive, got {}",
                self.target_time_min
            )));
        }
        Ok(())
    }
}

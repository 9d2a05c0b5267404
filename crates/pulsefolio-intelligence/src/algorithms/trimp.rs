// ABOUTME: Zone-weighted training impulse relative to lactate threshold heart rate
// ABOUTME: Maps an average heart rate to one of five LTHR zones and scores time in zone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

use crate::physiological_constants::heart_rate::ZONE_LOWER_BOUNDS_PERCENT;
use pulsefolio_core::constants::units::MINUTES_PER_HOUR;
use pulsefolio_core::errors::{AppError, AppResult};

/// Number of heart rate zones
pub const ZONE_COUNT: usize = 5;

/// Edwards-style zone-weighted TRIMP using LTHR bands
///
/// Formula: `minutes × zone_multiplier / 60 × zone_hour_points`
///
/// HR Zones (percent of LTHR):
/// - Zone 1: below 60% (weight: 1, values under 50% included)
/// - Zone 2: 60-70% (weight: 2)
/// - Zone 3: 70-80% (weight: 3)
/// - Zone 4: 80-90% (weight: 4)
/// - Zone 5: 90% and above (weight: 5)
///
/// Only activity-level averages are available, so each session's whole
/// moving time lands in the single zone containing its average heart rate.
///
/// # Scientific References
///
/// - Edwards, S. (1993). "The Heart Rate Monitor Book." Polar Electro Oy.
pub struct ZoneWeightedTrimp;

impl ZoneWeightedTrimp {
    /// Zone index (1-5) containing `avg_hr` for the given LTHR
    ///
    /// A non-positive LTHR places everything in zone 1.
    #[must_use]
    pub fn zone_for_heartrate(avg_hr: f64, lthr: f64) -> u8 {
        if lthr <= 0.0 {
            return 1;
        }
        let percent = avg_hr / lthr * 100.0;
        let mut zone = 1_u8;
        for (index, lower) in ZONE_LOWER_BOUNDS_PERCENT.iter().enumerate() {
            if percent >= *lower {
                zone = index as u8 + 1;
            }
        }
        zone
    }

    /// Stress multiplier for a zone index (zone 1 is 1.0, zone 5 is 5.0)
    #[must_use]
    pub fn zone_multiplier(zone: u8) -> f64 {
        f64::from(zone.clamp(1, ZONE_COUNT as u8))
    }

    /// Lower and upper bpm bounds for every zone; zone 5 is open-ended
    #[must_use]
    pub fn zone_bounds(lthr: f64) -> [(f64, Option<f64>); ZONE_COUNT] {
        let mut bounds = [(0.0, None); ZONE_COUNT];
        for (index, lower) in ZONE_LOWER_BOUNDS_PERCENT.iter().enumerate() {
            let upper = ZONE_LOWER_BOUNDS_PERCENT
                .get(index + 1)
                .map(|next| lthr * next / 100.0);
            bounds[index] = (lthr * lower / 100.0, upper);
        }
        bounds
    }

    /// Calculate zone-weighted stress for one session
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the heart rate or LTHR is not
    /// positive, or the duration is negative
    pub fn calculate(
        avg_hr: f64,
        duration_minutes: f64,
        lthr: f64,
        zone_hour_points: f64,
    ) -> AppResult<f64> {
        if !avg_hr.is_finite() || avg_hr <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Average heart rate must be positive, got {avg_hr}"
            )));
        }
        if !lthr.is_finite() || lthr <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "LTHR must be positive, got {lthr}"
            )));
        }
        if duration_minutes < 0.0 {
            return Err(AppError::invalid_input(
                "Duration must not be negative".to_owned(),
            ));
        }

        let zone = Self::zone_for_heartrate(avg_hr, lthr);
        Ok(duration_minutes * Self::zone_multiplier(zone) / MINUTES_PER_HOUR * zone_hour_points)
    }
}

// ABOUTME: Training stress estimation configuration
// ABOUTME: Zone point scale and pace fallback tuning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

use crate::physiological_constants::training_stress::{
    BASELINE_ZONE_MULTIPLIER, PACE_INTENSITY_EXPONENT, ROLLING_PACE_WINDOW, ZONE_HOUR_POINTS,
};
use serde::{Deserialize, Serialize};

/// Training stress estimator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingStressConfig {
    /// Points for one hour at zone multiplier 1
    pub zone_hour_points: f64,
    /// Zone multiplier for a session at the rolling-average pace
    pub baseline_zone_multiplier: f64,
    /// Exponent on the speed ratio in the pace fallback
    pub pace_intensity_exponent: f64,
    /// Previous same-sport activities averaged for the reference pace
    pub rolling_pace_window: usize,
}

impl Default for TrainingStressConfig {
    fn default() -> Self {
        Self {
            zone_hour_points: ZONE_HOUR_POINTS,
            baseline_zone_multiplier: BASELINE_ZONE_MULTIPLIER,
            pace_intensity_exponent: PACE_INTENSITY_EXPONENT,
            rolling_pace_window: ROLLING_PACE_WINDOW,
        }
    }
}

// ABOUTME: Heart rate zone analysis configuration
// ABOUTME: Threshold-effort duration window and zone balance cut-offs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

use crate::physiological_constants::heart_rate::{
    AEROBIC_BASE_MIN_PERCENT, HIGH_INTENSITY_MAX_PERCENT, THRESHOLD_EFFORT_MAX_MINUTES,
    THRESHOLD_EFFORT_MIN_MINUTES,
};
use serde::{Deserialize, Serialize};

/// Heart rate zone analyzer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateConfig {
    /// Shortest run used by the threshold-effort LTHR proxy
    pub threshold_effort_min_minutes: f64,
    /// Longest run used by the threshold-effort LTHR proxy
    pub threshold_effort_max_minutes: f64,
    /// Zone 2 share below which base building is recommended
    pub aerobic_base_min_percent: f64,
    /// Zones 4+5 share above which intensity should come down
    pub high_intensity_max_percent: f64,
}

impl Default for HeartRateConfig {
    fn default() -> Self {
        Self {
            threshold_effort_min_minutes: THRESHOLD_EFFORT_MIN_MINUTES,
            threshold_effort_max_minutes: THRESHOLD_EFFORT_MAX_MINUTES,
            aerobic_base_min_percent: AEROBIC_BASE_MIN_PERCENT,
            high_intensity_max_percent: HIGH_INTENSITY_MAX_PERCENT,
        }
    }
}

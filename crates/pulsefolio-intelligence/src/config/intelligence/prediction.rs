// ABOUTME: Race prediction configuration
// ABOUTME: Riegel exponent, effort selection window, and confidence weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

use crate::physiological_constants::race_prediction::{
    CONFIDENCE_DISTANCE_WEIGHT, CONFIDENCE_SAMPLE_WEIGHT, QUALIFYING_DISTANCE_RATIO,
    RECENT_EFFORT_WINDOW_DAYS, RIEGEL_EXPONENT,
};
use serde::{Deserialize, Serialize};

/// Race performance predictor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RacePredictionConfig {
    /// Riegel fatigue exponent
    pub riegel_exponent: f64,
    /// Maximum `max/min` distance ratio for a qualifying effort
    pub qualifying_distance_ratio: f64,
    /// Days before the latest run that still count as recent
    pub recent_effort_window_days: i64,
    /// Confidence weight of the distance-match term
    pub confidence_distance_weight: f64,
    /// Confidence weight of the sample-size term
    pub confidence_sample_weight: f64,
}

impl Default for RacePredictionConfig {
    fn default() -> Self {
        Self {
            riegel_exponent: RIEGEL_EXPONENT,
            qualifying_distance_ratio: QUALIFYING_DISTANCE_RATIO,
            recent_effort_window_days: RECENT_EFFORT_WINDOW_DAYS,
            confidence_distance_weight: CONFIDENCE_DISTANCE_WEIGHT,
            confidence_sample_weight: CONFIDENCE_SAMPLE_WEIGHT,
        }
    }
}

// ABOUTME: Unit conversion and race distance constants shared across crates
// ABOUTME: Pure data constants with no behavior attached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

//! Constants module
//!
//! Activities arrive unit-normalized (kilometers, minutes, beats per minute).
//! These values convert between those units and hold the standard race set.

/// Unit conversion factors
pub mod units {
    /// Minutes in one hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;
    /// Seconds in one minute
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
    /// Days in one training week
    pub const DAYS_PER_WEEK: i64 = 7;
}

/// Standard race distances
pub mod race_distances {
    /// 5K race distance in kilometers
    pub const FIVE_K_KM: f64 = 5.0;
    /// 10K race distance in kilometers
    pub const TEN_K_KM: f64 = 10.0;
    /// Half marathon distance in kilometers (rounded as displayed)
    pub const HALF_MARATHON_KM: f64 = 21.1;
    /// Marathon distance in kilometers (rounded as displayed)
    pub const MARATHON_KM: f64 = 42.2;

    /// Targets predicted by default, shortest first
    pub const STANDARD_RACE_DISTANCES_KM: [f64; 4] =
        [FIVE_K_KM, TEN_K_KM, HALF_MARATHON_KM, MARATHON_KM];

    /// Tolerance when matching a goal distance to a race distance
    pub const DISTANCE_MATCH_TOLERANCE_KM: f64 = 0.05;

    /// Display label for a race distance
    #[must_use]
    pub fn label(distance_km: f64) -> String {
        if (distance_km - FIVE_K_KM).abs() <= DISTANCE_MATCH_TOLERANCE_KM {
            "5K".to_owned()
        } else if (distance_km - TEN_K_KM).abs() <= DISTANCE_MATCH_TOLERANCE_KM {
            "10K".to_owned()
        } else if (distance_km - HALF_MARATHON_KM).abs() <= DISTANCE_MATCH_TOLERANCE_KM {
            "Half Marathon".to_owned()
        } else if (distance_km - MARATHON_KM).abs() <= DISTANCE_MATCH_TOLERANCE_KM {
            "Marathon".to_owned()
        } else {
            format!("{distance_km:.1} km")
        }
    }
}

// ABOUTME: Sport type enumeration for recorded activities
// ABOUTME: Maps upstream provider sport strings onto the three kinds the engine analyzes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enumeration of sport types the engine distinguishes
///
/// Upstream providers report dozens of activity types. Only runs and rides
/// feed the analyses, so everything else collapses into `Other`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SportType {
    /// Running activity (road, trail, treadmill)
    Run,
    /// Cycling activity (road, virtual, e-bike, gravel)
    Ride,
    /// Any activity type the engine does not analyze
    Other,
}

impl SportType {
    /// Create `SportType` from a provider string such as `"Run"` or `"VirtualRide"`
    ///
    /// Matching ignores ASCII case, spaces, dashes and underscores.
    #[must_use]
    pub fn from_provider_string(provider_sport: &str) -> Self {
        let normalized: String = provider_sport
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "run" | "running" | "trailrun" | "trailrunning" | "virtualrun" | "treadmill" => {
                Self::Run
            }
            "ride" | "cycling" | "bikeride" | "virtualride" | "ebikeride" | "mountainbikeride"
            | "mountainbike" | "gravelride" | "handcycle" | "velomobile" => Self::Ride,
            _ => Self::Other,
        }
    }

    /// Whether the activity counts toward weekly load and recovery risk
    #[must_use]
    pub const fn is_endurance(&self) -> bool {
        matches!(self, Self::Run | Self::Ride)
    }

    /// Get the human-readable name for this sport type
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Run => "run",
            Self::Ride => "bike ride",
            Self::Other => "activity",
        }
    }
}

impl fmt::Display for SportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

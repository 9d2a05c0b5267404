// ABOUTME: Heart rate zone distribution relative to an estimated lactate threshold
// ABOUTME: Buckets run time into five LTHR zones and recommends an intensity balance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

use crate::algorithms::{LthrAlgorithm, ZoneWeightedTrimp, ZONE_COUNT};
use crate::config::intelligence::HeartRateConfig;
use crate::physiological_constants::heart_rate::LTHR_FRACTION_OF_MAX_HR;
use pulsefolio_core::models::{Activity, SportType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Time spent in one heart rate zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Zone number, 1 (easiest) to 5 (hardest)
    pub index: u8,
    /// Lower bound in bpm (zone 1 also absorbs anything below it)
    pub min_bpm: f64,
    /// Upper bound in bpm; `None` for zone 5
    pub max_bpm: Option<f64>,
    /// Moving time attributed to the zone
    pub minutes: f64,
    /// Share of all tracked minutes (0-100)
    pub percentage: f64,
}

/// Recommended shift in intensity distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneBalance {
    /// Too little zone 2 time: add easy aerobic volume
    BuildAerobicBase,
    /// Too much zone 4-5 time: cut back on hard sessions
    ReduceHighIntensity,
    /// Distribution looks healthy
    Balanced,
}

impl ZoneBalance {
    /// Display text
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::BuildAerobicBase => {
                "Spend more time in zone 2 to build your aerobic base (aim for 60%+)"
            }
            Self::ReduceHighIntensity => {
                "More than 30% of your time is in zones 4-5; add recovery between hard sessions"
            }
            Self::Balanced => "Your intensity distribution is well balanced",
        }
    }
}

/// Five-zone breakdown of run time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateZoneDistribution {
    /// LTHR the zones are scaled to (an estimate unless supplied by the caller)
    pub lthr: Option<f64>,
    /// Zones 1 to 5
    pub zones: Vec<Zone>,
    /// Total minutes with heart rate data
    pub total_minutes: f64,
    /// Runs with heart rate data
    pub activity_count: usize,
    /// Zone with the most minutes (ties go to the lower zone)
    pub dominant_zone: Option<u8>,
    /// Maximum heart rate implied by the LTHR (LTHR / 0.90)
    pub estimated_max_hr: Option<f64>,
    /// Time-weighted mean of the runs' average heart rates
    pub average_heartrate: Option<f64>,
    /// Intensity balance recommendation
    pub balance: Option<ZoneBalance>,
}

impl HeartRateZoneDistribution {
    /// Whether no heart rate data was available
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activity_count == 0
    }

    /// Percentage of time in a zone (1-5), 0 for unknown zones
    #[must_use]
    pub fn percentage_in(&self, index: u8) -> f64 {
        self.zones
            .iter()
            .find(|zone| zone.index == index)
            .map_or(0.0, |zone| zone.percentage)
    }
}

/// Heart rate zone analyzer
#[derive(Debug, Clone, Default)]
pub struct HeartRateZoneAnalyzer {
    config: HeartRateConfig,
}

impl HeartRateZoneAnalyzer {
    /// Create an analyzer with the given configuration
    #[must_use]
    pub const fn new(config: HeartRateConfig) -> Self {
        Self { config }
    }

    /// Estimate LTHR from the history with the threshold-effort proxy
    ///
    /// The result is a heuristic estimate, not a lab-verified threshold.
    #[must_use]
    pub fn estimate_lthr(&self, activities: &[Activity]) -> Option<f64> {
        LthrAlgorithm::ThresholdEffortProxy
            .estimate_lthr(activities, &self.config)
            .ok()
            .flatten()
    }

    /// Bucket run time into zones scaled to `lthr`
    ///
    /// Each run's whole moving time goes to the zone containing its average
    /// heart rate. Without an LTHR or without heart rate data every zone
    /// reports zero.
    #[must_use]
    pub fn analyze(&self, activities: &[Activity], lthr: Option<f64>) -> HeartRateZoneDistribution {
        let lthr = lthr.filter(|value| value.is_finite() && *value > 0.0);
        let bounds = lthr.map_or([(0.0, None); ZONE_COUNT], ZoneWeightedTrimp::zone_bounds);

        let mut minutes = [0.0_f64; ZONE_COUNT];
        let mut activity_count = 0_usize;
        let mut weighted_hr = 0.0_f64;

        if let Some(lthr) = lthr {
            for activity in activities
                .iter()
                .filter(|a| a.sport_type() == SportType::Run && a.moving_time_min() > 0.0)
            {
                let Some(avg_hr) = activity.average_heartrate() else {
                    continue;
                };
                let zone = ZoneWeightedTrimp::zone_for_heartrate(avg_hr, lthr);
                minutes[usize::from(zone - 1)] += activity.moving_time_min();
                weighted_hr = avg_hr.mul_add(activity.moving_time_min(), weighted_hr);
                activity_count += 1;
            }
        }

        let total_minutes: f64 = minutes.iter().sum();
        let zones: Vec<Zone> = bounds
            .iter()
            .zip(minutes)
            .enumerate()
            .map(|(index, ((min_bpm, max_bpm), zone_minutes))| Zone {
                index: index as u8 + 1,
                min_bpm: *min_bpm,
                max_bpm: *max_bpm,
                minutes: zone_minutes,
                percentage: if total_minutes > 0.0 {
                    zone_minutes / total_minutes * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        let has_data = total_minutes > 0.0;
        let dominant_zone = if has_data {
            zones
                .iter()
                .fold(None::<&Zone>, |best, zone| match best {
                    Some(current) if current.minutes >= zone.minutes => Some(current),
                    _ => Some(zone),
                })
                .map(|zone| zone.index)
        } else {
            None
        };

        let mut distribution = HeartRateZoneDistribution {
            lthr,
            zones,
            total_minutes,
            activity_count,
            dominant_zone,
            estimated_max_hr: lthr.map(|value| value / LTHR_FRACTION_OF_MAX_HR),
            average_heartrate: if has_data {
                Some(weighted_hr / total_minutes)
            } else {
                None
            },
            balance: None,
        };
        if has_data {
            distribution.balance = Some(self.balance(&distribution));
        }

        debug!(
            lthr = ?distribution.lthr,
            activity_count,
            total_minutes,
            dominant_zone = ?distribution.dominant_zone,
            "Computed heart rate zone distribution"
        );
        distribution
    }

    fn balance(&self, distribution: &HeartRateZoneDistribution) -> ZoneBalance {
        let high_intensity = distribution.percentage_in(4) + distribution.percentage_in(5);
        if distribution.percentage_in(2) < self.config.aerobic_base_min_percent {
            ZoneBalance::BuildAerobicBase
        } else if high_intensity > self.config.high_intensity_max_percent {
            ZoneBalance::ReduceHighIntensity
        } else {
            ZoneBalance::Balanced
        }
    }
}

// ABOUTME: Benchmark fixtures generating multi-year activity histories
// ABOUTME: Index-derived values keep every run reproducible without a random source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

//! Benchmark fixtures for realistic training histories.

use chrono::{Days, NaiveDate, NaiveDateTime};
use pulsefolio::models::{Activity, ActivityBuilder, SportType};

/// Predefined history lengths
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// A season (about 150 activities)
    Season,
    /// Two years (about 600 activities)
    TwoYears,
    /// Five years (about 1500 activities)
    FiveYears,
}

impl HistorySize {
    #[must_use]
    pub const fn days(self) -> u64 {
        match self {
            Self::Season => 180,
            Self::TwoYears => 730,
            Self::FiveYears => 1825,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Season => "season",
            Self::TwoYears => "two_years",
            Self::FiveYears => "five_years",
        }
    }
}

fn start_of(day: NaiveDate, index: u64) -> NaiveDateTime {
    let hour = 5 + (index * 7 % 16) as u32;
    day.and_hms_opt(hour, (index * 13 % 60) as u32, 0)
        .unwrap_or_default()
}

/// Roughly six sessions a week: mostly runs, a ride every fourth session
#[must_use]
pub fn generate_history(size: HistorySize) -> Vec<Activity> {
    let first_day = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap_or_default();
    (0..size.days())
        .filter(|offset| offset % 7 != 3)
        .filter_map(|offset| {
            let day = first_day.checked_add_days(Days::new(offset))?;
            let id = format!("bench-{offset}");
            let activity = if offset % 4 == 0 {
                let distance_km = 30.0 + (offset * 17 % 50) as f64;
                ActivityBuilder::new(
                    id,
                    SportType::Ride,
                    start_of(day, offset),
                    distance_km,
                    distance_km / 27.0 * 60.0,
                )
                .average_heartrate(120.0 + (offset * 11 % 30) as f64)
                .build()
            } else {
                let distance_km = 5.0 + (offset * 29 % 160) as f64 / 10.0;
                let pace = 4.4 + (offset * 7 % 18) as f64 / 10.0;
                ActivityBuilder::new(
                    id,
                    SportType::Run,
                    start_of(day, offset),
                    distance_km,
                    distance_km * pace,
                )
                .elevation_gain_m((offset * 31 % 300) as f64)
                .average_heartrate(135.0 + (offset * 13 % 40) as f64)
                .build()
            };
            Some(activity)
        })
        .collect()
}

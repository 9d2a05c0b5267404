// ABOUTME: Shared fixtures for integration tests: dated activity builders and synthetic histories
// ABOUTME: Generates deterministic training blocks and seeded random histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

use chrono::{Days, NaiveDate, NaiveDateTime};
use pulsefolio::models::{Activity, ActivityBuilder, SportType};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Calendar date
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Local start time
pub fn at(day: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, minute, 0).expect("valid time")
}

/// Run starting at 07:00 on `day`
pub fn run(id: &str, day: NaiveDate, distance_km: f64, moving_time_min: f64) -> Activity {
    ActivityBuilder::new(id, SportType::Run, at(day, 7, 0), distance_km, moving_time_min).build()
}

/// Run with an average heart rate
pub fn run_with_hr(
    id: &str,
    day: NaiveDate,
    distance_km: f64,
    moving_time_min: f64,
    average_heartrate: f64,
) -> Activity {
    ActivityBuilder::new(id, SportType::Run, at(day, 7, 0), distance_km, moving_time_min)
        .average_heartrate(average_heartrate)
        .build()
}

/// Ride starting at 09:00 on `day`
pub fn ride(id: &str, day: NaiveDate, distance_km: f64, moving_time_min: f64) -> Activity {
    ActivityBuilder::new(id, SportType::Ride, at(day, 9, 0), distance_km, moving_time_min).build()
}

/// `weeks` consecutive 7-day blocks starting on `first_day`
///
/// Each block holds `runs_per_week` equal runs on its first days, summing to
/// `weekly_km`, at 5:30 min/km.
pub fn weekly_block(
    prefix: &str,
    first_day: NaiveDate,
    weeks: u64,
    weekly_km: f64,
    runs_per_week: u64,
) -> Vec<Activity> {
    let per_run_km = weekly_km / runs_per_week as f64;
    (0..weeks)
        .flat_map(|week| {
            (0..runs_per_week).map(move |index| (week, index))
        })
        .map(|(week, index)| {
            let day = first_day + Days::new(week * 7 + index);
            run(
                &format!("{prefix}-w{week}-r{index}"),
                day,
                per_run_km,
                per_run_km * 5.5,
            )
        })
        .collect()
}

/// Seeded generator for realistic mixed histories
pub struct SyntheticHistory {
    rng: ChaCha8Rng,
}

impl SyntheticHistory {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// About five sessions a week over `days` days starting on `first_day`
    pub fn generate(&mut self, first_day: NaiveDate, days: u64) -> Vec<Activity> {
        let mut activities = Vec::new();
        for offset in 0..days {
            if self.rng.gen_bool(0.3) {
                continue;
            }
            let day = first_day + Days::new(offset);
            let hour = self.rng.gen_range(5..22);
            let minute = self.rng.gen_range(0..60);
            let id = format!("synthetic-{offset}");

            let activity = if self.rng.gen_bool(0.8) {
                let distance_km: f64 = self.rng.gen_range(4.0..22.0);
                let pace: f64 = self.rng.gen_range(4.3..6.5);
                let builder = ActivityBuilder::new(
                    id,
                    SportType::Run,
                    at(day, hour, minute),
                    distance_km,
                    distance_km * pace,
                )
                .elevation_gain_m(self.rng.gen_range(0.0..250.0));
                if self.rng.gen_bool(0.85) {
                    builder.average_heartrate(self.rng.gen_range(128.0..178.0)).build()
                } else {
                    builder.build()
                }
            } else {
                let distance_km: f64 = self.rng.gen_range(20.0..80.0);
                let speed: f64 = self.rng.gen_range(22.0..32.0);
                ActivityBuilder::new(
                    id,
                    SportType::Ride,
                    at(day, hour, minute),
                    distance_km,
                    distance_km / speed * 60.0,
                )
                .average_heartrate(self.rng.gen_range(115.0..160.0))
                .build()
            };
            activities.push(activity);
        }
        activities
    }
}

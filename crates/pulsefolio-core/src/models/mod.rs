// ABOUTME: Core data models for the analytics engine
// ABOUTME: Re-exports Activity, ActivityBuilder, SportType and TrainingGoal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

//! # Data Models
//!
//! - `Activity`: a single recorded workout (run, ride, other)
//! - `SportType`: the three sport kinds the engine distinguishes
//! - `TrainingGoal`: a caller-owned target time for a race distance
//!
//! Optional upstream fields (heart rate, elevation, reported speed) are
//! `Option<f64>`; every consumer handles the absent case explicitly.

mod activity;
mod goal;
mod sport;

pub use activity::{validate_activities, Activity, ActivityBuilder};
pub use goal::TrainingGoal;
pub use sport::SportType;

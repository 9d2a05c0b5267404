// ABOUTME: Core types and constants for the Pulsefolio training analytics engine
// ABOUTME: Foundation crate with error handling, activity models, and unit constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

#![deny(unsafe_code)]

//! # Pulsefolio Core
//!
//! Foundation crate providing the shared types for the Pulsefolio analytics
//! engine. It changes rarely, so the heavier intelligence crate builds on a
//! stable base.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Unit conversions and standard race distances
//! - **models**: `Activity`, `ActivityBuilder`, `SportType`, `TrainingGoal`

/// Unified error handling system with standard error codes
pub mod errors;

/// Unit conversion and race distance constants
pub mod constants;

/// Core data models (Activity, SportType, TrainingGoal)
pub mod models;

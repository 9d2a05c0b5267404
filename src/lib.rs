// ABOUTME: Main library entry point for the Pulsefolio training analytics engine
// ABOUTME: Re-exports the core models and intelligence crate and provides logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

#![deny(unsafe_code)]

//! # Pulsefolio
//!
//! A training-load and performance analytics engine. Feed it a history of
//! runs and rides and it returns:
//!
//! - **Fitness state**: daily CTL, ATL and TSB with a form status
//! - **Race forecasts**: Riegel predictions for 5K to marathon with confidence
//! - **Recovery advice**: injury risk score, status and recommended rest
//! - **Heart rate zones**: time in five LTHR-relative zones
//! - **Performance factors**: speed by weekday, time of day and rest interval
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pulsefolio::models::{ActivityBuilder, SportType};
//! use pulsefolio::intelligence::{AnalysisRequest, AnalyticsEngine};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .and_then(|d| d.and_hms_opt(7, 0, 0))
//!     .unwrap_or_default();
//! let run = ActivityBuilder::new("run-1", SportType::Run, start, 10.0, 50.0).build();
//!
//! let engine = AnalyticsEngine::default();
//! let report = engine.analyze(&[run], &AnalysisRequest::default());
//! assert!(report.is_ok_and(|r| r.fitness.len() == 1));
//! ```

/// Unified error handling (re-exported from `pulsefolio-core`)
pub use pulsefolio_core::errors;

/// Activity and goal models (re-exported from `pulsefolio-core`)
pub use pulsefolio_core::models;

/// Unit and race distance constants (re-exported from `pulsefolio-core`)
pub use pulsefolio_core::constants;

/// Analytics engine (re-exported from `pulsefolio-intelligence`)
pub use pulsefolio_intelligence as intelligence;

/// Tracing subscriber configuration
pub mod logging;

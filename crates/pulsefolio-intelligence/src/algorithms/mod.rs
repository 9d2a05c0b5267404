// ABOUTME: Algorithm abstraction layer for heart-rate based calculations
// ABOUTME: Provides LTHR estimation dispatch and zone-weighted TRIMP scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

//! Algorithm Selection Module
//!
//! Algorithms are enums or unit structs, not strings or booleans.
//!
//! # Example
//!
//! ```rust
//! use pulsefolio_intelligence::algorithms::{LthrAlgorithm, ZoneWeightedTrimp};
//! use pulsefolio_intelligence::config::intelligence::HeartRateConfig;
//!
//! let lthr = LthrAlgorithm::Fixed { bpm: 170.0 }
//!     .estimate_lthr(&[], &HeartRateConfig::default())
//!     .ok()
//!     .flatten()
//!     .unwrap_or_default();
//! assert_eq!(ZoneWeightedTrimp::zone_for_heartrate(160.0, lthr), 5);
//! ```

pub mod lthr;
pub mod trimp;

pub use lthr::LthrAlgorithm;
pub use trimp::{ZoneWeightedTrimp, ZONE_COUNT};

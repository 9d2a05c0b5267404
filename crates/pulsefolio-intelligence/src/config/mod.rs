// ABOUTME: Configuration module for pulsefolio-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

/// Intelligence module configuration (stress, prediction, recovery, heart rate)
pub mod intelligence;

pub use intelligence::{ConfigError, IntelligenceConfig};

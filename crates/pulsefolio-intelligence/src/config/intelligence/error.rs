// ABOUTME: Errors raised while loading or validating the analytics configuration
// ABOUTME: Covers unparsable overrides, inverted ranges, bad weights and out-of-range values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pulsefolio Analytics

//! Configuration errors, convertible into `AppError` with `ConfigInvalid`.

use pulsefolio_core::errors::AppError;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Pair of values in the wrong order (e.g., caution score above rest score)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// An environment override could not be parsed
    #[error("Unparsable override: {0}")]
    Parse(String),

    /// Weights don't sum to the required total
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// A single value outside its accepted range
    #[error("Out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
